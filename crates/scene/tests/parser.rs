use physics::{PhysConfig, Room, Vec3};
use scene::{Scene, DEFAULT_SEED};

#[test]
fn parse_cornell_scene() {
    let scene = Scene::from_path("tests/data/cornell.json").unwrap();
    assert_eq!(scene.seed, 7);
    assert_eq!(scene.spawn.count, 6);
    assert_eq!(scene.spawn.max_attempts, 512);
    // Fields not given keep their defaults
    assert_eq!(scene.spawn.radius, [10.0, 80.0]);
    assert_eq!(scene.build_room().unwrap(), Room::cornell_box());
}

#[test]
fn populated_scene_is_reproducible() {
    let a = Scene::from_path("tests/data/cornell.json").unwrap().into_context().unwrap();
    let b = Scene::from_path("tests/data/cornell.json").unwrap().into_context().unwrap();
    assert!(!a.spheres.is_empty());
    assert!(a.spheres.len() <= 6);
    assert_eq!(a.spheres, b.spheres);
}

#[test]
fn explicit_spheres_skip_population() {
    let scene = Scene::from_path("tests/data/head_on.json").unwrap();
    let mut sim = scene.into_context().unwrap();
    assert_eq!(sim.spheres.len(), 3);
    assert_eq!(sim.spheres[2].velocity, Vec3::ZERO);
    assert_eq!(sim.spheres[2].mass, 1.0);

    sim.step(0.0, 0.0);
    assert_eq!(sim.spheres[0].velocity, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(sim.spheres[1].velocity, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn empty_document_uses_defaults() {
    let scene: Scene = "{}".parse().unwrap();
    assert_eq!(scene, Scene::default());
    assert_eq!(scene.seed, DEFAULT_SEED);
    assert_eq!(scene.physics, PhysConfig::default());
}

#[test]
fn degenerate_room_is_rejected() {
    let scene = Scene::from_path("tests/data/flat_room.json").unwrap();
    let err = scene.into_context().unwrap_err();
    assert!(format!("{err:#}").contains("Y"), "{err:#}");
}

#[test]
fn invalid_sphere_reports_its_index() {
    let scene = Scene::from_path("tests/data/bad_sphere.json").unwrap();
    let err = scene.into_context().unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("invalid sphere #1"), "{message}");
    assert!(message.contains("mass"), "{message}");
}

#[test]
fn missing_file_names_the_path() {
    let err = Scene::from_path("tests/data/nope.json").unwrap_err();
    assert!(format!("{err}").contains("nope.json"));
}

#[test]
fn invalid_physics_constants_are_rejected() {
    let scene: Scene = r#"{ "physics": { "max_dt": -1 } }"#.parse().unwrap();
    let message = format!("{:#}", scene.into_context().unwrap_err());
    assert!(message.contains("max_dt"), "{message}");
}
