#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use nfdh::aggregate::{DuplicateCellConfiguration, aggregate_folder, write_summary};
    use nfdh::config::SweepConfig;
    use nfdh::generator::{guillotine_rects, uniform_rects};
    use nfdh::surface::{read_summary, surface_to_svg};
    use nfdh::sweep::{Cell, run_sweep};
    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use shelf_rs::io::import::read_rect_list;
    use shelf_rs::nfdh::pack;
    use test_case::test_case;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("nfdh_test_{}_{tag}", std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_artifact(dir: &Path, name: &str, worst: f32) {
        let content =
            format!("#,H,OPT_H,H/OPT_H\n1,120,100,1.2\nworst={worst},best=1.1,avg=1.15\n");
        fs::write(dir.join(name), content).unwrap();
    }

    fn small_config() -> SweepConfig {
        SweepConfig {
            strip_width: 100.0,
            n_values: vec![5, 10],
            hw_ratios: vec![0.5, 1.0],
            iterations: 5,
            prng_seed: Some(1),
        }
    }

    #[test]
    fn packs_demo_instance() {
        let rects = read_rect_list(Path::new("../assets/demo.txt")).unwrap();
        let packing = pack(&rects, 10.0).unwrap();
        assert_eq!(packing.height, 14.0);
    }

    #[test_case(0.25; "quarter")]
    #[test_case(0.5; "half")]
    #[test_case(1.0; "square")]
    #[test_case(2.0; "tall")]
    fn guillotine_pieces_partition_the_master_rect(ratio: f32) {
        let width = 100u32;
        let mut rng = SmallRng::seed_from_u64(7);
        let rects = guillotine_rects(width, 50, ratio, &mut rng);

        assert_eq!(rects.len(), 50);

        let master_area = width as f32 * (width as f32 * ratio).round();
        let total_area: f32 = rects.iter().map(|r| r.area()).sum();
        assert!(approx_eq!(f32, total_area, master_area, ulps = 2));

        assert!(rects.iter().all(|r| r.width <= width as f32));
        assert!(rects.iter().all(|r| r.width >= 1.0 && r.height >= 1.0));
    }

    #[test]
    fn guillotine_is_seed_reproducible() {
        let mut rng_a = SmallRng::seed_from_u64(99);
        let mut rng_b = SmallRng::seed_from_u64(99);
        assert_eq!(
            guillotine_rects(200, 80, 1.5, &mut rng_a),
            guillotine_rects(200, 80, 1.5, &mut rng_b)
        );
    }

    #[test]
    fn uniform_rects_respect_ranges() {
        let mut rng = SmallRng::seed_from_u64(5);
        let rects = uniform_rects(500, 2, 30, 5, 40, &mut rng).unwrap();

        assert_eq!(rects.len(), 500);
        assert!(
            rects
                .iter()
                .all(|r| (2.0..=30.0).contains(&r.width) && (5.0..=40.0).contains(&r.height))
        );
    }

    #[test]
    fn uniform_rects_reject_inverted_ranges() {
        let mut rng = SmallRng::seed_from_u64(5);
        assert!(uniform_rects(10, 30, 2, 5, 40, &mut rng).is_err());
    }

    #[test]
    fn cell_artifact_name_encodes_identity() {
        let cell = Cell {
            n_rects: 50,
            hw_ratio: 1.0,
        };
        assert_eq!(cell.artifact_name(100), "N50_IT100_WH1.csv");

        let cell = Cell {
            n_rects: 500,
            hw_ratio: 0.25,
        };
        assert_eq!(cell.artifact_name(20), "N500_IT20_WH0.25.csv");
    }

    #[test]
    fn sweep_finalizes_every_cell() {
        let dir = temp_dir("sweep");
        let config = small_config();

        let outcomes = run_sweep(&config, &dir).unwrap();
        assert_eq!(outcomes.len(), 4);

        for (cell, outcome) in &outcomes {
            assert_eq!(outcome.recorded, config.iterations);
            assert!(outcome.worst >= outcome.best);
            assert!(outcome.worst >= 1.0 - 1e-5, "worst ratio below 1: {outcome:?}");

            let artifact = dir.join(cell.artifact_name(config.iterations));
            let content = fs::read_to_string(&artifact).unwrap();
            let lines: Vec<&str> = content.lines().collect();

            // header + one record per trial + summary line
            assert_eq!(lines.len(), config.iterations + 2);
            assert!(lines.last().unwrap().starts_with("worst="));
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn sweep_is_seed_reproducible() {
        let dir_a = temp_dir("sweep_repro_a");
        let dir_b = temp_dir("sweep_repro_b");
        let config = small_config();

        run_sweep(&config, &dir_a).unwrap();
        run_sweep(&config, &dir_b).unwrap();

        for entry in fs::read_dir(&dir_a).unwrap() {
            let path_a = entry.unwrap().path();
            let path_b = dir_b.join(path_a.file_name().unwrap());
            assert_eq!(
                fs::read_to_string(&path_a).unwrap(),
                fs::read_to_string(&path_b).unwrap()
            );
        }

        fs::remove_dir_all(&dir_a).unwrap();
        fs::remove_dir_all(&dir_b).unwrap();
    }

    #[test]
    fn aggregate_sorts_rows_by_n_then_ratio() {
        let dir = temp_dir("aggregate_sort");
        write_artifact(&dir, "N10_IT100_WH2.0.csv", 1.31);
        write_artifact(&dir, "N5_IT100_WH1.0.csv", 1.52);
        write_artifact(&dir, "N10_IT100_WH1.0.csv", 1.44);

        let rows = aggregate_folder(&dir).unwrap();
        let cells: Vec<(usize, f32)> = rows.iter().map(|r| (r.n_rects, r.hw_ratio)).collect();
        assert_eq!(cells, vec![(5, 1.0), (10, 1.0), (10, 2.0)]);
        assert_eq!(rows[0].worst_ratio, 1.52);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn aggregate_rejects_duplicate_cells() {
        let dir = temp_dir("aggregate_dup");
        write_artifact(&dir, "N50_IT100_WH1.csv", 1.2);
        write_artifact(&dir, "N50_IT200_WH1.0.csv", 1.3);

        let err = aggregate_folder(&dir).unwrap_err();
        let dup = err.downcast_ref::<DuplicateCellConfiguration>().unwrap();
        assert_eq!(dup.n_rects, 50);
        assert_eq!(dup.hw_ratio, 1.0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn aggregate_skips_unfinalized_artifacts() {
        let dir = temp_dir("aggregate_skip");
        write_artifact(&dir, "N10_IT100_WH1.0.csv", 1.4);
        // no summary line: not finalized
        fs::write(
            dir.join("N20_IT100_WH1.0.csv"),
            "#,H,OPT_H,H/OPT_H\n1,120,100,1.2\n",
        )
        .unwrap();
        // too short to hold any trial record
        fs::write(dir.join("N30_IT100_WH1.0.csv"), "#,H,OPT_H,H/OPT_H\n").unwrap();
        // not an artifact at all
        fs::write(dir.join("notes.txt"), "scratch").unwrap();

        let rows = aggregate_folder(&dir).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].n_rects, 10);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn summary_survives_a_write_read_round_trip() {
        let dir = temp_dir("summary_round_trip");
        let config = small_config();

        run_sweep(&config, &dir).unwrap();
        let rows = aggregate_folder(&dir).unwrap();
        assert_eq!(rows.len(), 4);

        let summary_path = dir.join("summary.csv");
        write_summary(&rows, &summary_path).unwrap();

        let read_back = read_summary(&summary_path).unwrap();
        assert_eq!(rows, read_back);

        let document = surface_to_svg(&read_back);
        assert!(document.to_string().contains("<svg"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
