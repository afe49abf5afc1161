use serde::Serialize;

use super::math::{up_vector, Vec2};

pub const INITIAL_FUEL: i32 = 9999;

pub(crate) mod defaults {
    pub const G: f32 = 1.6;
    pub const THRUST: f32 = 4.;
    pub const SPIN_ACCELERATION: f32 = 6.;
    pub const MAX_SPIN: f32 = 1.5;
    pub const FUEL_PER_THRUST: i32 = 1;
    pub const WIDTH: f32 = 8.;
    pub const HEIGHT: f32 = 6.;
    pub const RESET_VELOCITY_X: f32 = 30.;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Physics {
    gravity: f32,
    thrust: f32,
    spin_acceleration: f32,
    max_spin: f32,
    fuel_per_thrust: i32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: defaults::G,
            thrust: defaults::THRUST,
            spin_acceleration: defaults::SPIN_ACCELERATION,
            max_spin: defaults::MAX_SPIN,
            fuel_per_thrust: defaults::FUEL_PER_THRUST,
        }
    }
}

impl Physics {
    pub fn with_gravity(self, gravity: f32) -> Self {
        Self { gravity, ..self }
    }
    pub fn with_thrust(self, thrust: f32) -> Self {
        Self { thrust, ..self }
    }
    pub fn with_spin_acceleration(self, spin_acceleration: f32) -> Self {
        Self {
            spin_acceleration,
            ..self
        }
    }
    pub fn with_max_spin(self, max_spin: f32) -> Self {
        assert!(max_spin >= 0.);
        Self { max_spin, ..self }
    }
    pub fn with_fuel_per_thrust(self, fuel_per_thrust: i32) -> Self {
        assert!(fuel_per_thrust > 0);
        Self {
            fuel_per_thrust,
            ..self
        }
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn thrust(&self) -> f32 {
        self.thrust
    }

    pub fn spin_acceleration(&self) -> f32 {
        self.spin_acceleration
    }

    pub fn max_spin(&self) -> f32 {
        self.max_spin
    }

    pub fn fuel_per_thrust(&self) -> i32 {
        self.fuel_per_thrust
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lander {
    position: Vec2,
    velocity: Vec2,
    orientation: f32,
    angular_velocity: f32,
    fuel: i32,
    dimensions: Dimensions,
    world_max: Vec2,
    physics: Physics,
    // velocity change from thrust queued for the next update_pose
    thrust_dv: Vec2,
    thrusting: bool,
}

impl Lander {
    pub fn new(
        world_max_x: f32,
        world_max_y: f32,
        dimensions: Dimensions,
        physics: Physics,
    ) -> Self {
        let mut lander = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            orientation: 0.,
            angular_velocity: 0.,
            fuel: INITIAL_FUEL,
            dimensions,
            world_max: Vec2::new(world_max_x, world_max_y),
            physics,
            thrust_dv: Vec2::ZERO,
            thrusting: false,
        };
        lander.reset();
        lander
    }

    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }

    pub fn with_velocity(self, velocity: Vec2) -> Self {
        Self { velocity, ..self }
    }

    pub fn with_orientation(self, orientation: f32) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    pub fn with_fuel(self, fuel: i32) -> Self {
        Self {
            fuel: fuel.max(0),
            ..self
        }
    }

    pub fn reset(&mut self) {
        self.position = Vec2::new(0.05 * self.world_max.x, 0.7 * self.world_max.y);
        self.velocity = Vec2::new(defaults::RESET_VELOCITY_X, 0.);
        self.orientation = 0.;
        self.angular_velocity = 0.;
        self.thrust_dv = Vec2::ZERO;
        self.thrusting = false;
    }

    pub fn reset_fuel(&mut self) {
        self.fuel = INITIAL_FUEL;
    }

    pub fn stop_lander(&mut self) {
        self.velocity = Vec2::ZERO;
        self.angular_velocity = 0.;
    }

    /// Queues one tick of thrust along the craft's up vector. Returns false
    /// and burns no fuel when the tank is empty or `dt` is not positive.
    pub fn add_thrust(&mut self, dt: f32) -> bool {
        if self.fuel <= 0 || dt <= 0. {
            return false;
        }
        self.thrust_dv += up_vector(self.orientation) * self.physics.thrust * dt;
        self.fuel = (self.fuel - self.physics.fuel_per_thrust).max(0);
        self.thrusting = true;
        true
    }

    pub fn rotate_cw(&mut self, dt: f32) {
        self.spin(-self.physics.spin_acceleration * dt);
    }

    pub fn rotate_ccw(&mut self, dt: f32) {
        self.spin(self.physics.spin_acceleration * dt);
    }

    fn spin(&mut self, impulse: f32) {
        let limit = self.physics.max_spin;
        self.angular_velocity = (self.angular_velocity + impulse).clamp(-limit, limit);
    }

    pub fn release_rotation(&mut self) {
        self.angular_velocity = 0.;
    }

    /// Semi-implicit Euler step: velocity first, then position with the new
    /// velocity. Non-positive `dt` leaves the pose untouched.
    pub fn update_pose(&mut self, dt: f32) {
        if dt > 0. {
            self.velocity += Vec2::new(0., -self.physics.gravity) * dt + self.thrust_dv;
            self.position += self.velocity * dt;
            self.orientation += self.angular_velocity * dt;
        }
        self.thrust_dv = Vec2::ZERO;
    }

    pub fn begin_tick(&mut self) {
        self.thrusting = false;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_thrusting(&self) -> bool {
        self.thrusting
    }
}
