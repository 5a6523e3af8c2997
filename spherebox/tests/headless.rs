use clap::Parser;
use physics::Vec3;
use spherebox::app::{build_context, run, Options};

fn options(args: &[&str]) -> Options {
    Options::parse_from(std::iter::once("spherebox").chain(args.iter().copied()))
}

#[test]
fn default_scene_runs_with_fixed_delta() {
    let summary = run(&options(&["--frames", "120", "--fixed-dt", "0.0166", "--count", "4"])).unwrap();
    assert_eq!(summary.frames, 120);
    assert!(summary.spheres > 0 && summary.spheres <= 4);
    assert!((summary.time - 120.0 * 0.0166).abs() < 1e-3);
    assert!(summary.kinetic_energy.is_finite());
}

#[test]
fn count_and_seed_overrides_apply() {
    let a = build_context(&options(&["--count", "3", "--seed", "11"])).unwrap();
    let b = build_context(&options(&["--count", "3", "--seed", "11"])).unwrap();
    assert!(a.spheres.len() <= 3);
    assert_eq!(a.spheres, b.spheres);
}

#[test]
fn pause_window_freezes_clock() {
    let summary = run(&options(&[
        "--frames", "10", "--fixed-dt", "0.1", "--pause-at", "5", "--resume-at", "8",
    ]))
    .unwrap();
    assert!((summary.time - 0.7).abs() < 1e-5, "time = {}", summary.time);
}

#[test]
fn scene_pair_collides_and_conserves_momentum() {
    let opts = options(&["--scene", "tests/data/pair.json", "--frames", "300", "--fixed-dt", "0.01"]);
    let before = build_context(&opts).unwrap().total_momentum();
    let summary = run(&opts).unwrap();
    assert_eq!(summary.spheres, 2);
    assert!((summary.momentum - before).length() < 1e-4);
    assert!((summary.kinetic_energy - 200.0).abs() < 1e-2);

    let mut sim = build_context(&opts).unwrap();
    sim.run(0.01, 300);
    assert!(sim.spheres[0].velocity.x < 0.0);
    assert!(sim.spheres[1].velocity.x > 0.0);
    assert_eq!(sim.spheres[0].velocity.y, 0.0);
    assert_eq!(summary.momentum, Vec3::ZERO);
}

#[test]
fn negative_fixed_delta_is_rejected() {
    let err = run(&options(&["--frames", "1", "--fixed-dt=-0.5"])).unwrap_err();
    assert!(err.to_string().contains("--fixed-dt"));
}

#[test]
fn huge_fixed_delta_runs_as_max_step() {
    let summary = run(&options(&["--frames", "1", "--fixed-dt", "1e20", "--count", "2"])).unwrap();
    assert_eq!(summary.frames, 1);
    assert!((summary.time - physics::config::DEFAULT_MAX_DT).abs() < 1e-6, "time = {}", summary.time);
}
