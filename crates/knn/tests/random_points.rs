//! Cross-checks the partial selection against a full sort on random points.

use approx::assert_abs_diff_eq;
use cellcount_knn::{BruteForceIndex, NeighborOrders, NeighborQuery, PointSet, QueryConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn naive_kth(reference: &PointSet, target: &[f64], k: usize) -> f64 {
    let mut d: Vec<f64> = reference
        .iter()
        .map(|p| {
            p.iter()
                .zip(target)
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt()
        })
        .collect();
    d.sort_by(f64::total_cmp);
    d[k - 1]
}

#[test]
fn matches_full_sort_in_every_dimension() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n_dims in 1..=3 {
        let reference =
            PointSet::new((0..150 * n_dims).map(|_| rng.random::<f64>()).collect(), n_dims)
                .unwrap();
        let queries =
            PointSet::new((0..25 * n_dims).map(|_| rng.random::<f64>()).collect(), n_dims)
                .unwrap();
        let orders = vec![1, 2, 9, 40];
        let config = QueryConfig::new(NeighborOrders::new(orders.clone()).unwrap());
        let d = BruteForceIndex::new(&reference).query(&queries, &config).unwrap();

        for i in 0..queries.len() {
            for (c, &k) in orders.iter().enumerate() {
                let want = naive_kth(&reference, queries.point(i), k);
                assert_abs_diff_eq!(d.get(i, c), want, epsilon = 1e-12);
            }
            for w in d.row(i).windows(2) {
                assert!(w[0] <= w[1]);
            }
        }
    }
}
