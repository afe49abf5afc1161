use rand::Rng;
use serde::Serialize;

use super::Snapshot;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Intent {
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub thrust: bool,
    pub new_game: bool,
    pub continue_game: bool,
}

impl Intent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_rotate_cw(self, rotate_cw: bool) -> Self {
        Self { rotate_cw, ..self }
    }

    pub fn with_rotate_ccw(self, rotate_ccw: bool) -> Self {
        Self { rotate_ccw, ..self }
    }

    pub fn with_thrust(self, thrust: bool) -> Self {
        Self { thrust, ..self }
    }

    pub fn with_new_game(self, new_game: bool) -> Self {
        Self { new_game, ..self }
    }

    pub fn with_continue_game(self, continue_game: bool) -> Self {
        Self {
            continue_game,
            ..self
        }
    }
}

pub trait IntentProvider {
    fn intent(&mut self, tick: usize, view: &Snapshot<'_>) -> Intent;
}

impl IntentProvider for Intent {
    fn intent(&mut self, _: usize, _: &Snapshot<'_>) -> Intent {
        *self
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedPilot {
    script: Vec<Intent>,
}

impl ScriptedPilot {
    pub fn new(script: Vec<Intent>) -> Self {
        Self { script }
    }

    pub fn hold(intent: Intent, ticks: usize) -> Self {
        let mut script = vec![intent; ticks];
        script.push(Intent::idle());
        Self { script }
    }

    pub fn then(mut self, intent: Intent, ticks: usize) -> Self {
        if self.script.last() == Some(&Intent::idle()) {
            self.script.pop();
        }
        self.script.extend(std::iter::repeat(intent).take(ticks));
        self.script.push(Intent::idle());
        self
    }
}

impl IntentProvider for ScriptedPilot {
    fn intent(&mut self, tick: usize, _: &Snapshot<'_>) -> Intent {
        self.script
            .get(tick)
            .or(self.script.last())
            .copied()
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug)]
pub struct RandomPilot {
    thrust_prob: f64,
    rotate_prob: f64,
}

impl Default for RandomPilot {
    fn default() -> Self {
        Self {
            thrust_prob: 0.5,
            rotate_prob: 0.1,
        }
    }
}

impl RandomPilot {
    pub fn with_thrust_prob(self, thrust_prob: f64) -> Self {
        Self {
            thrust_prob,
            ..self
        }
    }

    pub fn with_rotate_prob(self, rotate_prob: f64) -> Self {
        Self {
            rotate_prob,
            ..self
        }
    }
}

impl IntentProvider for RandomPilot {
    fn intent(&mut self, _: usize, _: &Snapshot<'_>) -> Intent {
        let mut rng = rand::thread_rng();
        Intent::idle()
            .with_thrust(rng.gen_bool(self.thrust_prob))
            .with_rotate_cw(rng.gen_bool(self.rotate_prob))
            .with_rotate_ccw(rng.gen_bool(self.rotate_prob))
    }
}

// Brakes horizontal drift while high up, then descends upright. Does not
// look for a landing site.
#[derive(Clone, Debug)]
pub struct Autopilot {
    touchdown_speed: f32,
    descent_gain: f32,
    max_descent_speed: f32,
    brake_gain: f32,
    max_tilt: f32,
    upright_altitude: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            touchdown_speed: 0.5,
            descent_gain: 0.2,
            max_descent_speed: 20.,
            brake_gain: 0.02,
            max_tilt: 0.6,
            upright_altitude: 15.,
        }
    }
}

impl IntentProvider for Autopilot {
    fn intent(&mut self, _: usize, view: &Snapshot<'_>) -> Intent {
        let tolerance = 0.5_f32.to_radians();
        let velocity = view.lander.velocity;
        let braking = view.altitude > self.upright_altitude && velocity.x.abs() > 0.2;
        let desired = if braking {
            (self.brake_gain * velocity.x).clamp(-self.max_tilt, self.max_tilt)
        } else {
            0.
        };
        let orientation = view.lander.orientation;
        let target_vy = -(self.touchdown_speed + self.descent_gain * view.altitude.max(0.))
            .min(self.max_descent_speed);
        Intent::idle()
            .with_rotate_cw(orientation > desired + tolerance)
            .with_rotate_ccw(orientation < desired - tolerance)
            .with_thrust(velocity.y < target_vy || (braking && orientation.abs() > tolerance))
    }
}
