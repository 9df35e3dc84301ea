//! Episode reset detection, milestone accounting, per-worker isolation

mod common;

use common::aligned;
use route_reward::{EpisodeEnd, RewardEngine};

#[test]
fn step_regression_clears_prior_state() {
    let mut engine = RewardEngine::baseline();
    engine.evaluate(&aligned(50, 3.0, 60.0)).unwrap();
    assert_eq!(engine.state().prev_speed, Some(3.0));

    // slower speed would earn maintain = 2/3, increase = 2 without a reset
    let b = engine.evaluate(&aligned(3, 2.0, 0.0)).unwrap();
    assert!(b.new_episode);
    assert!((b.speed_component - 10.0 * 0.2).abs() < 1e-12);

    let state = engine.state();
    assert_eq!(state.prev_steps, Some(3));
    assert_eq!(state.prev_speed, Some(2.0));
    assert_eq!(state.fired_count(), 0);
}

#[test]
fn milestone_fires_once_per_decile() {
    let mut engine = RewardEngine::baseline();

    let first = engine.evaluate(&aligned(10, 3.0, 45.0)).unwrap();
    assert!(first.milestone_bonus > 0.0);
    assert!(engine.state().has_fired(4));

    let second = engine.evaluate(&aligned(11, 3.0, 45.0)).unwrap();
    assert_eq!(second.milestone_bonus, 0.0);
    assert_eq!(engine.state().fired_value(4), first.milestone_bonus);
}

#[test]
fn milestone_refires_after_reset() {
    let mut engine = RewardEngine::baseline();
    engine.evaluate(&aligned(10, 3.0, 45.0)).unwrap();
    engine.evaluate(&aligned(11, 3.0, 45.0)).unwrap();

    let again = engine.evaluate(&aligned(8, 3.0, 45.0)).unwrap();
    assert!(again.new_episode);
    assert!(again.milestone_bonus > 0.0);
    let expected = (10.0 * 45.0 / 8.0f64).powf(8.0);
    assert!((again.milestone_bonus - expected).abs() / again.milestone_bonus < 1e-12);
}

#[test]
fn explicit_reset_archives_metrics() {
    let mut engine = RewardEngine::baseline();
    engine.evaluate(&aligned(10, 3.0, 45.0)).unwrap();
    engine.evaluate(&aligned(11, 3.0, 46.0)).unwrap();
    engine.reset();

    let last = engine.last_episode_metrics().unwrap();
    assert_eq!(last.total_steps, 2);
    assert_eq!(last.milestones_fired, 1);
    assert_eq!(last.end, EpisodeEnd::ExplicitReset);
    assert!(engine.metrics().is_empty());
    assert!(engine.state().prev_steps.is_none());
}

#[test]
fn equal_steps_continue_episode() {
    let mut engine = RewardEngine::baseline();
    engine.evaluate(&aligned(10, 3.0, 45.0)).unwrap();
    let b = engine.evaluate(&aligned(10, 3.0, 45.0)).unwrap();
    assert!(!b.new_episode);
    assert_eq!(b.milestone_bonus, 0.0);
}

#[test]
fn engines_do_not_share_state() {
    let mut a = RewardEngine::baseline();
    let mut b = RewardEngine::baseline();

    a.evaluate(&aligned(10, 3.0, 45.0)).unwrap();
    let from_b = b.evaluate(&aligned(10, 3.0, 45.0)).unwrap();
    assert!(from_b.milestone_bonus > 0.0);
    assert!(from_b.new_episode);
}

#[test]
fn engines_run_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            std::thread::spawn(move || {
                let mut engine = RewardEngine::baseline();
                (1..=20u64)
                    .map(|step| {
                        let progress = (step * 5) as f64;
                        engine.reward(&aligned(step + worker, 2.5, progress)).unwrap()
                    })
                    .sum::<f64>()
            })
        })
        .collect();

    for handle in handles {
        let cumulative = handle.join().unwrap();
        assert!(cumulative.is_finite() && cumulative > 0.0);
    }
}
