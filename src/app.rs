use crate::simulation::*;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExecutionStatus {
    InProgress,
    Finished(SessionStatus),
}

pub struct App {
    world: World,
    history: FlightHistory,
    dt: f32,
}

impl App {
    pub fn new(world: World, dt: f32) -> Self {
        let history = FlightHistory::with_initial_state(&world.snapshot());
        Self { world, history, dt }
    }

    pub fn try_new(settings: &Settings, dt: f32) -> Result<Self> {
        Ok(Self::new(World::from_settings(settings)?, dt))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn history(&self) -> &FlightHistory {
        &self.history
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn step(&mut self, pilot: &mut impl IntentProvider) -> ExecutionStatus {
        if !self.world.session().is_running() {
            return ExecutionStatus::Finished(self.world.session().status());
        }
        self.world.update_state(self.dt, pilot);
        self.history.append(&self.world.snapshot());
        if self.world.session().is_running() {
            ExecutionStatus::InProgress
        } else {
            ExecutionStatus::Finished(self.world.session().status())
        }
    }

    pub fn run(
        &mut self,
        pilot: &mut impl IntentProvider,
        max_ticks: usize,
    ) -> Result<SessionStatus> {
        for _ in 0..max_ticks {
            if let ExecutionStatus::Finished(status) = self.step(pilot) {
                return Ok(status);
            }
        }
        Err(Error::TickLimit(max_ticks))
    }

    pub fn next_attempt(&mut self) -> bool {
        self.press(Intent::idle().with_continue_game(true))
    }

    pub fn new_game(&mut self) -> bool {
        self.press(Intent::idle().with_new_game(true))
    }

    fn press(&mut self, mut intent: Intent) -> bool {
        if self.world.session().is_running() {
            return false;
        }
        self.world.update_state(self.dt, &mut intent);
        let started = self.world.session().is_running();
        if started {
            self.history = FlightHistory::with_initial_state(&self.world.snapshot());
        }
        started
    }

    pub fn print_flight_state_results(&self) {
        println!("{}", self.history.pretty_to_string());
        println!("Finished {:?}", self.world.session().status());
    }
}

#[derive(Clone, Debug, Default)]
pub struct FlightHistory {
    time: Vec<f32>,
    x: Vec<f32>,
    y: Vec<f32>,
    vx: Vec<f32>,
    vy: Vec<f32>,
    fuel: Vec<i32>,
    angle: Vec<f32>,
    altitude: Vec<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlightRecord {
    pub time: f32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub fuel: i32,
    pub angle: f32,
    pub altitude: f32,
}

impl FlightHistory {
    pub fn with_initial_state(state: &Snapshot<'_>) -> Self {
        let mut history = Self::default();
        history.append(state);
        history
    }

    pub fn append(&mut self, state: &Snapshot<'_>) {
        self.time.push(state.game_time);
        self.x.push(state.lander.position.x);
        self.y.push(state.lander.position.y);
        self.vx.push(state.lander.velocity.x);
        self.vy.push(state.lander.velocity.y);
        self.fuel.push(state.fuel);
        self.angle.push(state.lander.orientation.to_degrees());
        self.altitude.push(state.altitude);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn pretty_to_string(&self) -> String {
        self.iter_history().fold(
            format!(
                "{:>8}{:>9}{:>9}{:>8}{:>8}{:>6}{:>8}{:>9}",
                "TIME", "X", "Y", "VX", "VY", "FUEL", "ANGLE", "ALT"
            ),
            |out,
             FlightRecord {
                 time,
                 x,
                 y,
                 vx,
                 vy,
                 fuel,
                 angle,
                 altitude,
             }| {
                out + &format!(
                    "\n{time:8.2}{x:9.2}{y:9.2}{vx:8.2}{vy:8.2}{fuel:6}{angle:8.1}{altitude:9.2}"
                )
            },
        )
    }

    pub fn iter_history(&self) -> impl Iterator<Item = FlightRecord> + '_ {
        self.time
            .iter()
            .zip(&self.x)
            .zip(&self.y)
            .zip(&self.vx)
            .zip(&self.vy)
            .zip(&self.fuel)
            .zip(&self.angle)
            .zip(&self.altitude)
            .map(
                |(((((((time, x), y), vx), vy), fuel), angle), altitude)| FlightRecord {
                    time: *time,
                    x: *x,
                    y: *y,
                    vx: *vx,
                    vy: *vy,
                    fuel: *fuel,
                    angle: *angle,
                    altitude: *altitude,
                },
            )
    }
}
