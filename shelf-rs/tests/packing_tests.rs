use float_cmp::approx_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shelf_rs::entities::{Rect, SPInstance};
use shelf_rs::eval;
use shelf_rs::nfdh::pack;
use shelf_rs::util::assertions;
use test_case::test_case;

fn rect(width: f32, height: f32) -> Rect {
    Rect { width, height }
}

#[test]
fn closes_shelves_on_width_overflow() {
    // already sorted by decreasing height: (4,6),(2,5),(3,5),(5,4),(6,4)
    // shelf 1: (4,6),(2,5),(3,5) -> 6 | shelf 2: (5,4) -> 4 | shelf 3: (6,4) -> 4
    let rects = vec![
        rect(4.0, 6.0),
        rect(2.0, 5.0),
        rect(3.0, 5.0),
        rect(5.0, 4.0),
        rect(6.0, 4.0),
    ];
    let packing = pack(&rects, 10.0).unwrap();

    let shelf_heights: Vec<f32> = packing.shelves.iter().map(|s| s.height).collect();
    assert_eq!(shelf_heights, vec![6.0, 4.0, 4.0]);
    assert_eq!(packing.height, 14.0);

    assert!(assertions::packing_preserves_rects(&packing, &rects));
    assert!(assertions::shelves_within_strip(&packing));
    assert!(assertions::height_matches_shelves(&packing));
}

#[test]
fn every_rect_lands_on_exactly_one_shelf() {
    let rects = vec![
        rect(3.0, 3.0),
        rect(7.0, 1.0),
        rect(2.0, 8.0),
        rect(5.0, 8.0),
        rect(4.0, 2.0),
        rect(3.0, 3.0),
    ];
    let packing = pack(&rects, 8.0).unwrap();

    assert_eq!(packing.n_placed(), rects.len());
    assert!(assertions::packing_preserves_rects(&packing, &rects));
}

#[test]
fn empty_instance_yields_empty_packing() {
    let packing = pack(&[], 10.0).unwrap();
    assert_eq!(packing.height, 0.0);
    assert!(packing.shelves.is_empty());

    let instance = SPInstance::new(vec![], 10.0);
    let lower_bound = eval::area_lower_bound(&instance);
    assert_eq!(eval::approx_ratio(packing.height, lower_bound), 1.0);
}

#[test]
fn overwide_rect_fails_without_partial_packing() {
    let rects = vec![rect(4.0, 6.0), rect(11.0, 1.0)];
    let err = pack(&rects, 10.0).unwrap_err();
    assert_eq!(err.rect_width, 11.0);
    assert_eq!(err.strip_width, 10.0);
}

#[test]
fn equal_height_ties_keep_input_order() {
    // all heights equal: the stable sort must not disturb the input order
    let rects = vec![rect(3.0, 5.0), rect(4.0, 5.0), rect(5.0, 5.0)];
    let packing = pack(&rects, 7.0).unwrap();

    let first_shelf_widths: Vec<f32> =
        packing.shelves[0].rects.iter().map(|pr| pr.rect.width).collect();
    assert_eq!(first_shelf_widths, vec![3.0, 4.0]);
    assert_eq!(packing.shelves[1].rects[0].rect.width, 5.0);
}

#[test]
fn presorted_input_packs_identically() {
    let rects = vec![
        rect(5.0, 4.0),
        rect(4.0, 6.0),
        rect(6.0, 4.0),
        rect(2.0, 5.0),
        rect(3.0, 5.0),
    ];
    let mut presorted = rects.clone();
    presorted.sort_by(|a, b| b.height.partial_cmp(&a.height).unwrap());

    let packing = pack(&rects, 10.0).unwrap();
    let packing_presorted = pack(&presorted, 10.0).unwrap();
    assert_eq!(packing, packing_presorted);
}

#[test]
fn packing_is_deterministic() {
    let rects = vec![
        rect(4.0, 6.0),
        rect(2.0, 5.0),
        rect(3.0, 5.0),
        rect(5.0, 4.0),
        rect(6.0, 4.0),
    ];
    let first = pack(&rects, 10.0).unwrap();
    let second = pack(&rects, 10.0).unwrap();
    assert_eq!(first, second);
}

#[test_case(0; "seed 0")]
#[test_case(7; "seed 7")]
#[test_case(42; "seed 42")]
#[test_case(1337; "seed 1337")]
fn ratio_never_drops_below_one(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let strip_width = 100.0;

    for n in [1usize, 5, 20, 100, 200] {
        let rects: Vec<Rect> = (0..n)
            .map(|_| {
                rect(
                    rng.random_range(1..=50) as f32,
                    rng.random_range(1..=50) as f32,
                )
            })
            .collect();

        let instance = SPInstance::new(rects, strip_width);
        let packing = pack(&instance.rects, instance.strip_width).unwrap();
        let ratio = eval::approx_ratio(packing.height, eval::area_lower_bound(&instance));

        assert!(
            ratio >= 1.0 - 1e-5,
            "ratio {ratio} below 1 for n={n}, seed={seed}"
        );
    }
}

#[test]
fn area_lower_bound_matches_hand_computed_value() {
    let instance = SPInstance::new(vec![rect(4.0, 6.0), rect(2.0, 5.0)], 10.0);
    assert!(approx_eq!(
        f32,
        eval::area_lower_bound(&instance),
        3.4,
        ulps = 2
    ));
}

#[test]
fn density_never_exceeds_one() {
    let mut rng = SmallRng::seed_from_u64(3);
    let rects: Vec<Rect> = (0..50)
        .map(|_| {
            rect(
                rng.random_range(1..=30) as f32,
                rng.random_range(1..=30) as f32,
            )
        })
        .collect();

    let instance = SPInstance::new(rects, 60.0);
    let packing = pack(&instance.rects, instance.strip_width).unwrap();
    assert!(packing.density(&instance) <= 1.0 + 1e-5);
}
