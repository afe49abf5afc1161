use simulation::math::{degrees, Vec2};
use simulation::{
    App, Dimensions, Intent, Landing, Lander, Physics, ScriptedPilot, SessionStatus, Terrain,
    World, INITIAL_FUEL,
};

const DT: f32 = 1. / 60.;

fn world_with(points: &[(f32, f32)], world_height: f32) -> World {
    let terrain = Terrain::new(points.iter().map(|&(x, y)| Vec2::new(x, y))).unwrap();
    let lander = Lander::new(
        terrain.max_x(),
        world_height,
        Dimensions {
            width: 2.,
            height: 1.,
        },
        Physics::default().with_gravity(1.6),
    );
    World::new(terrain, lander, 10.)
}

fn place(world: World, position: Vec2, velocity: Vec2, orientation: f32) -> World {
    let lander = world
        .lander()
        .clone()
        .with_position(position)
        .with_velocity(velocity)
        .with_orientation(orientation);
    world.with_lander(lander)
}

fn flat_world() -> World {
    world_with(&[(0., 0.), (100., 0.), (200., 0.)], 100.)
}

// One tick at 1/60 s with v = -0.9 m/s and g = 1.6 m/s² drops the lander by
// about 0.0154 m, which brings this start altitude into contact.
const SLOW_CONTACT_ALTITUDE: f32 = 0.016;

#[test]
fn clean_landing() {
    let world = flat_world();
    let mut world = place(
        world,
        Vec2::new(50., 0.5 + SLOW_CONTACT_ALTITUDE),
        Vec2::new(0., -0.9),
        0.,
    );
    world.update_state(DT, &mut Intent::idle());

    assert!(world.session().altitude().abs() < 0.01);
    assert_eq!(world.session().status(), SessionStatus::Won);
    assert_eq!(world.lander().velocity(), Vec2::ZERO);
    assert!(world.session().score() > 0.);
    assert!(world.snapshot().is_won());
}

#[test]
fn tilt_crash() {
    let world = flat_world();
    let mut world = place(
        world,
        Vec2::new(50., 0.5 + SLOW_CONTACT_ALTITUDE),
        Vec2::new(0., -0.9),
        degrees(10.),
    );
    world.update_state(DT, &mut Intent::idle());

    assert_eq!(world.session().loss_reason(), Some(Landing::OrientationBad));
    assert_eq!(world.snapshot().loss_reason, Some(4));
}

#[test]
fn slope_crash() {
    let world = world_with(&[(0., 0.), (100., 10.)], 100.);
    let mut world = place(
        world,
        Vec2::new(50., 5. + 0.5 + SLOW_CONTACT_ALTITUDE),
        Vec2::new(0., -0.9),
        0.,
    );
    world.update_state(DT, &mut Intent::idle());

    assert_eq!(world.session().loss_reason(), Some(Landing::NotFlat));
    assert_eq!(world.snapshot().loss_reason, Some(1));
}

#[test]
fn too_fast() {
    let world = flat_world();
    let mut world = place(world, Vec2::new(50., 0.5 + 0.085), Vec2::new(0., -5.), 0.);
    world.update_state(DT, &mut Intent::idle());

    assert_eq!(world.session().loss_reason(), Some(Landing::TooFast));
}

#[test]
fn overflowing_segment() {
    let world = world_with(&[(0., 0.), (5., 0.), (10., 3.)], 100.);
    let lander = Lander::new(
        10.,
        100.,
        Dimensions {
            width: 10.,
            height: 1.,
        },
        Physics::default(),
    );
    let world = world.with_lander(lander);
    let mut world = place(
        world,
        Vec2::new(2.5, 0.5 + SLOW_CONTACT_ALTITUDE),
        Vec2::new(0., -0.9),
        0.,
    );
    world.update_state(DT, &mut Intent::idle());

    assert_eq!(world.session().loss_reason(), Some(Landing::DoesNotFit));
    assert!(!world.session().is_running());
}

#[test]
fn reset_carry_over() {
    let terrain = Terrain::new([Vec2::new(0., 0.), Vec2::new(1000., 0.)]).unwrap();
    let mut app = App::new(World::with_terrain(terrain), DT);
    let reset_pose = app.world().lander().clone();

    let mut pilot =
        ScriptedPilot::hold(Intent::idle().with_thrust(true), 300).then(Intent::idle(), 1);
    let status = app.run(&mut pilot, 100_000).unwrap();
    assert!(matches!(status, SessionStatus::Lost(_)));
    assert_eq!(app.world().lander().fuel(), INITIAL_FUEL - 300);

    assert!(app.next_attempt());
    let world = app.world();
    assert_eq!(world.lander().fuel(), 9699);
    assert_eq!(world.session().start_fuel(), 9699);
    assert_eq!(world.session().display_score(), 0);
    assert_eq!(world.lander().position(), reset_pose.position());
    assert_eq!(world.lander().velocity(), reset_pose.velocity());
    assert_eq!(world.lander().orientation(), 0.);
    assert_eq!(world.session().game_time(), 0.);

    app.run(&mut Intent::idle(), 100_000).unwrap();
    assert!(app.new_game());
    assert_eq!(app.world().lander().fuel(), INITIAL_FUEL);
    assert_eq!(app.world().session().display_score(), 0);
    assert_eq!(app.world().session().start_fuel(), INITIAL_FUEL);
}

#[test]
fn score_survives_soft_reset_and_clears_on_hard_reset() {
    let world = flat_world();
    let mut world = place(
        world,
        Vec2::new(50., 0.5 + SLOW_CONTACT_ALTITUDE),
        Vec2::new(0., -0.9),
        0.,
    );
    world.update_state(DT, &mut Intent::idle());
    let score = world.session().score();
    assert!(score > 0.);

    world.update_state(DT, &mut Intent::idle().with_continue_game(true));
    assert!(world.session().is_running());
    assert_eq!(world.session().score(), score);

    world.hard_reset();
    assert_eq!(world.session().score(), 0.);
}

#[test]
fn hard_reset_is_idempotent() {
    let fresh = flat_world();
    let mut world = fresh.clone();
    let mut pilot =
        ScriptedPilot::hold(Intent::idle().with_thrust(true).with_rotate_ccw(true), 20)
            .then(Intent::idle(), 1);
    for _ in 0..40 {
        world.update_state(DT, &mut pilot);
    }
    world.hard_reset();
    let once = world.clone();
    world.hard_reset();
    assert_eq!(world, once);
    assert_eq!(world, fresh);
}

#[test]
fn fuel_never_negative() {
    let world = flat_world();
    let lander = world.lander().clone().with_fuel(3);
    let mut world = world.with_lander(lander);
    let mut thrust = Intent::idle().with_thrust(true);
    for _ in 0..10 {
        world.update_state(DT, &mut thrust);
        assert!(world.lander().fuel() >= 0);
    }
    assert_eq!(world.lander().fuel(), 0);
}
