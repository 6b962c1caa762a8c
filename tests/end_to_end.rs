//! Volume statistics of uniform random points, against `E[V_k] = k / n`.

use cellcount::{
    CellCountConfig, EcdfBuilder, PointSet, build_empirical_cdfs_self, extract_volumes_self,
};
use cellcount_stats::mean;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_POINTS: usize = 1000;

fn unit_cube(seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let coords = (0..N_POINTS * 3).map(|_| rng.random::<f64>()).collect();
    PointSet::new(coords, 3).unwrap()
}

/// Mean k-th neighbor volume scaled by `n / k`, per requested order.
fn scaled_means(config_toml: &str, seed: u64) -> Vec<f64> {
    let config = CellCountConfig::from_toml_str(config_toml).unwrap();
    let query = config.query_config().unwrap();
    let volumes = extract_volumes_self(&unit_cube(seed), &query).unwrap();
    volumes
        .orders()
        .iter()
        .enumerate()
        .map(|(c, &k)| mean(&volumes.column(c)) * N_POINTS as f64 / k as f64)
        .collect()
}

#[test]
fn open_cube_volumes_scale_with_order() {
    let config = CellCountConfig::from_toml_str("[query]\norders = [1, 4, 8]\n").unwrap();
    let volumes = extract_volumes_self(&unit_cube(42), &config.query_config().unwrap()).unwrap();
    assert_eq!(volumes.n_queries(), N_POINTS);

    let means: Vec<f64> = (0..3).map(|c| mean(&volumes.column(c))).collect();
    assert!(means[0] < means[1] && means[1] < means[2], "{means:?}");

    for i in 0..volumes.n_queries() {
        let row = volumes.row(i);
        assert!(row[0] <= row[1] && row[1] <= row[2]);
    }
}

#[test]
fn open_cube_mean_volume_near_k_over_n() {
    // Balls near the faces reach outside the cube and are larger than in
    // the bulk, so the scaled means sit above 1 and grow with the order.
    let bands = [(1, 1.0..1.3), (4, 1.1..1.35), (8, 1.15..1.45)];
    for seed in [42, 43] {
        let scaled = scaled_means("[query]\norders = [1, 4, 8]\n", seed);
        for ((k, band), s) in bands.iter().zip(&scaled) {
            assert!(band.contains(s), "k={k} seed={seed}: scaled mean {s}");
        }
    }
}

#[test]
fn self_included_fourth_order_within_twenty_percent() {
    // Counting the point as its own first neighbor shifts every order down
    // by one, which offsets the boundary excess at k = 4.
    let toml = "[query]\norders = [4]\nself_match = \"include\"\n";
    for seed in [42, 43] {
        let scaled = scaled_means(toml, seed)[0];
        assert!((scaled - 1.0).abs() < 0.2, "seed={seed}: scaled mean {scaled}");
    }
}

#[test]
fn periodic_cube_mean_volume_within_ten_percent() {
    let toml = "[query]\norders = [1, 4, 8]\nbox_size = [1.0, 1.0, 1.0]\n";
    for scaled in scaled_means(toml, 42) {
        assert!((scaled - 1.0).abs() < 0.1, "scaled mean {scaled}");
    }
}

#[test]
fn sequential_and_parallel_agree() {
    let points = unit_cube(7);
    let par = CellCountConfig::from_toml_str("[query]\norders = [2, 5]\n").unwrap();
    let seq =
        CellCountConfig::from_toml_str("[query]\norders = [2, 5]\nparallel = false\n").unwrap();
    let a = extract_volumes_self(&points, &par.query_config().unwrap()).unwrap();
    let b = extract_volumes_self(&points, &seq.query_config().unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn compressed_cdfs_from_config() {
    let config = CellCountConfig::from_toml_str(
        r#"
        [query]
        orders = [1, 8]
        box_size = [1.0, 1.0, 1.0]

        [empirical]
        compression = "interpolate"
        n_interpolants = 100
        "#,
    )
    .unwrap();
    let cdfs = build_empirical_cdfs_self(
        &unit_cube(3),
        &config.query_config().unwrap(),
        &config.ecdf_config().unwrap(),
        &EcdfBuilder,
    )
    .unwrap();

    assert_eq!(cdfs.len(), 2);
    for cdf in cdfs.values() {
        assert!(cdf.is_interpolated());
        assert_eq!(cdf.n_samples(), N_POINTS);
    }
    // Median of the first-neighbor volume sits near ln(2) / n.
    let median = cdfs[&1].quantile(0.5) * N_POINTS as f64;
    assert!((median - 2f64.ln()).abs() < 0.1, "scaled median {median}");
}
