//! Number recommendations always yield valid tickets drawn from the
//! intended pools.

use lotto_core::{
    draw::Draw,
    frequency::compute_frequencies,
    recommend::{pick_balanced, pick_from_pool, prediction_sets, recommend, RecommendMethod, HOT_COLD_POOL},
    rng::{RngBank, SeededRng, StreamSlot},
    types::SECTIONS,
};

fn history(n: u32) -> Vec<Draw> {
    let mut rng = SeededRng::from_seed(5150);
    (1..=n)
        .rev()
        .map(|round| {
            let d = lotto_core::simulator::simulate_draw(&mut rng);
            let nums = d.numbers.map(|x| x as i32);
            Draw::new(round, "2020-01-04", nums, d.bonus as i32)
        })
        .collect()
}

fn rng() -> SeededRng {
    RngBank::new(31337).for_slot(StreamSlot::Recommend)
}

#[test]
fn method_names_parse() {
    assert_eq!("hot".parse::<RecommendMethod>().unwrap(), RecommendMethod::Hot);
    assert_eq!("balanced".parse::<RecommendMethod>().unwrap(), RecommendMethod::Balanced);
    assert!("ai".parse::<RecommendMethod>().is_err());
}

#[test]
fn every_method_yields_a_valid_ticket() {
    let draws = history(120);
    let mut rng = rng();
    for method in [
        RecommendMethod::Random,
        RecommendMethod::Statistics,
        RecommendMethod::Hot,
        RecommendMethod::Cold,
        RecommendMethod::Balanced,
    ] {
        for _ in 0..50 {
            let ticket = recommend(method, &draws, &mut rng).unwrap();
            assert_eq!(ticket.numbers().len(), 6, "{method:?}");
        }
    }
}

#[test]
fn hot_and_cold_stay_in_their_pools() {
    let draws = history(120);
    let recent = compute_frequencies(&draws, Some(20));
    let hot = recent.top(HOT_COLD_POOL);
    let cold = recent.bottom(HOT_COLD_POOL);
    let mut rng = rng();

    for _ in 0..50 {
        let t = recommend(RecommendMethod::Hot, &draws, &mut rng).unwrap();
        assert!(t.numbers().iter().all(|n| hot.contains(n)), "{t} not within hot pool {hot:?}");
        let t = recommend(RecommendMethod::Cold, &draws, &mut rng).unwrap();
        assert!(t.numbers().iter().all(|n| cold.contains(n)), "{t} not within cold pool {cold:?}");
    }
}

#[test]
fn small_pool_is_topped_up() {
    let mut rng = rng();
    let picked = pick_from_pool(&[3, 3, 9], 6, &mut rng);
    assert_eq!(picked.len(), 6);
    assert!(picked.contains(&3) && picked.contains(&9));
    let mut sorted = picked.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 6, "duplicates in {picked:?}");
}

#[test]
fn balanced_covers_every_section() {
    let mut rng = rng();
    for cold in [vec![], vec![2, 11, 44], vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]] {
        for _ in 0..100 {
            let picked = pick_balanced(&cold, &mut rng);
            assert_eq!(picked.len(), 6);
            for (i, &(min, max)) in SECTIONS.iter().enumerate() {
                assert!((min..=max).contains(&picked[i]), "{picked:?} misses section {min}-{max}");
            }
        }
    }
}

#[test]
fn balanced_prefers_cold_numbers_in_a_section() {
    let mut rng = rng();
    for _ in 0..50 {
        let picked = pick_balanced(&[11], &mut rng);
        assert_eq!(picked[1], 11);
    }
}

#[test]
fn prediction_sets_are_labelled_and_valid() {
    let draws = history(200);
    let sets = prediction_sets(&draws, &mut rng()).unwrap();
    assert_eq!(sets.len(), 3);
    assert!(sets[0].label.starts_with('A'));
    assert!(sets[1].label.starts_with('B'));
    assert!(sets[2].label.starts_with('C'));

    let hot = compute_frequencies(&draws, Some(20)).top(HOT_COLD_POOL);
    assert!(sets[0].numbers.numbers().iter().all(|n| hot.contains(n)));
}

#[test]
fn no_history_falls_back_to_random() {
    let mut rng = rng();
    let t = recommend(RecommendMethod::Hot, &[], &mut rng).unwrap();
    assert_eq!(t.numbers().len(), 6);
}
