//! Volume extraction on random point sets.

use approx::assert_relative_eq;
use cellcount_ecdf::{EcdfBuilder, EcdfConfig};
use cellcount_knn::{NeighborOrders, Periodic, PointSet, QueryConfig};
use cellcount_stats::mean;
use cellcount_volume::{
    ball_volume, build_empirical_cdfs_self, extract_volumes, extract_volumes_self,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn uniform_cube(n: usize, n_dims: usize, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    PointSet::new((0..n * n_dims).map(|_| rng.random::<f64>()).collect(), n_dims).unwrap()
}

#[test]
fn volumes_non_decreasing_along_orders() {
    let points = uniform_cube(400, 3, 7);
    let config = QueryConfig::new(NeighborOrders::new(vec![1, 2, 5, 10, 20]).unwrap());
    let v = extract_volumes_self(&points, &config).unwrap();
    for i in 0..v.n_queries() {
        for w in v.row(i).windows(2) {
            assert!(w[0] <= w[1], "row {i} not monotone: {:?}", v.row(i));
        }
    }
}

#[test]
fn volumes_consistent_with_ball_formula() {
    let points = uniform_cube(50, 2, 11);
    let v = extract_volumes_self(&points, &QueryConfig::new(3)).unwrap();
    for i in 0..v.n_queries() {
        let r = cellcount_volume::ball_radius(v.get(i, 0), 2).unwrap();
        let back = ball_volume(r, 2).unwrap();
        assert!((back - v.get(i, 0)).abs() <= 1e-12 * v.get(i, 0).max(1.0));
    }
}

#[test]
fn periodic_mean_volume_matches_k_over_n() {
    // For uniform points on a torus, E[V_k] = k / n.
    let n = 2000;
    let points = uniform_cube(n, 2, 99);
    let orders = vec![1, 4, 8];
    let config = QueryConfig::new(NeighborOrders::new(orders.clone()).unwrap())
        .with_periodic(Periodic::cube(1.0, 2));
    let v = extract_volumes_self(&points, &config).unwrap();
    for (c, &k) in orders.iter().enumerate() {
        let scaled = mean(&v.column(c)) * n as f64 / k as f64;
        assert!(
            (scaled - 1.0).abs() < 0.1,
            "order {k}: scaled mean volume {scaled}"
        );
    }
}

#[test]
fn empirical_cdfs_span_zero_to_one() {
    let points = uniform_cube(300, 1, 5);
    let config = QueryConfig::new(NeighborOrders::new(vec![1, 6]).unwrap());
    let cdfs =
        build_empirical_cdfs_self(&points, &config, &EcdfConfig::default(), &EcdfBuilder).unwrap();
    for cdf in cdfs.values() {
        assert_eq!(cdf.cdf(cdf.min() - 1e-9), 0.0);
        assert_eq!(cdf.cdf(cdf.max()), 1.0);
    }
    // Larger orders need larger balls.
    assert!(cdfs[&6].quantile(0.5) > cdfs[&1].quantile(0.5));
}

#[test]
fn slab_wraps_on_x_only() {
    let reference = PointSet::from_rows(&[[0.02, 0.5], [0.5, 0.5]]).unwrap();
    let queries = PointSet::from_rows(&[[0.97, 0.5]]).unwrap();
    let config = QueryConfig::new(1).with_periodic(Periodic::Box(vec![1.0, 0.0]));
    let v = extract_volumes(&reference, &queries, &config).unwrap();
    assert_relative_eq!(v.get(0, 0), std::f64::consts::PI * 0.05 * 0.05, max_relative = 1e-12);

    // Open along y: the far point straight above is not folded back.
    let queries = PointSet::from_rows(&[[0.5, 3.5]]).unwrap();
    let v = extract_volumes(&reference, &queries, &config).unwrap();
    assert_relative_eq!(v.get(0, 0), std::f64::consts::PI * 9.0, max_relative = 1e-12);
}
