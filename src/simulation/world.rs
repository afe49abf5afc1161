use super::math::Vec2;
use super::*;

pub const LANDING_EPSILON: f32 = 1e-2;
pub const MAX_HORIZONTAL_SPEED: f32 = 0.5;
pub const MAX_VERTICAL_SPEED: f32 = 1.;
pub const ZOOM_RADIUS: f32 = 100.;
pub const WORLD_HEIGHT: f32 = 500.;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub physics: Physics,
    pub landscape_width: f32,
    pub world_height: f32,
    pub zoom_radius: f32,
    pub lander_dimensions: Dimensions,
    // model space, the built-in landscape when None
    pub terrain_model: Option<Vec<Vec2>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            landscape_width: LANDSCAPE_WIDTH,
            world_height: WORLD_HEIGHT,
            zoom_radius: ZOOM_RADIUS,
            lander_dimensions: Dimensions::default(),
            terrain_model: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    terrain: Terrain,
    lander: Lander,
    session: SessionState,
    zoom_radius: f32,
    // ticks since the current attempt started
    tick: usize,
}

impl World {
    pub fn new(terrain: Terrain, lander: Lander, zoom_radius: f32) -> Self {
        Self {
            terrain,
            lander,
            session: SessionState::default(),
            zoom_radius,
            tick: 0,
        }
    }

    pub fn with_terrain(terrain: Terrain) -> Self {
        let lander = Lander::new(
            terrain.max_x(),
            WORLD_HEIGHT,
            Dimensions::default(),
            Physics::default(),
        );
        Self::new(terrain, lander, ZOOM_RADIUS)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, TerrainError> {
        let terrain = match &settings.terrain_model {
            Some(model) => Terrain::from_model(model.iter().copied(), settings.landscape_width)?,
            None => Terrain::default_landscape(settings.landscape_width)?,
        };
        log::debug!(
            "Terrain with {} points, {:.1} x {:.1}",
            terrain.points().len(),
            terrain.max_x(),
            terrain.max_y()
        );
        let lander = Lander::new(
            terrain.max_x(),
            settings.world_height,
            settings.lander_dimensions,
            settings.physics.clone(),
        );
        Ok(Self::new(terrain, lander, settings.zoom_radius))
    }

    pub fn with_lander(self, lander: Lander) -> Self {
        Self { lander, ..self }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn lander(&self) -> &Lander {
        &self.lander
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn zoom_radius(&self) -> f32 {
        self.zoom_radius
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn update_state(&mut self, dt: f32, intents: &mut impl IntentProvider) {
        let intent = intents.intent(self.tick, &self.snapshot());

        if !self.session.is_running() {
            if intent.new_game {
                self.hard_reset();
            } else if intent.continue_game && self.session.can_continue() {
                self.soft_reset();
            }
            return;
        }

        self.session.advance_time(dt);
        self.tick += 1;

        self.lander.begin_tick();
        if intent.rotate_cw {
            self.lander.rotate_cw(dt);
        }
        if intent.rotate_ccw {
            self.lander.rotate_ccw(dt);
        }
        if !intent.rotate_cw && !intent.rotate_ccw {
            self.lander.release_rotation();
        }
        if intent.thrust {
            self.lander.add_thrust(dt);
        }

        self.lander.update_pose(dt);

        let position = self.lander.position();
        let closest_distance = (self.terrain.find_closest_point(position) - position).length();
        self.session.animate_zoom(
            closest_distance < self.zoom_radius,
            self.terrain.max_x() / self.zoom_radius,
        );

        let segment = self.terrain.find_segment_below(position);
        let altitude =
            self.terrain
                .find_lander_altitude(segment, position, self.lander.dimensions().height);
        self.session.set_altitude(altitude);

        match self.judge_landing(segment, altitude) {
            Some(Landing::Good) => self.game_win(segment),
            Some(reason) => self.game_over(reason),
            None => {}
        }
    }

    fn judge_landing(&self, segment: usize, altitude: f32) -> Option<Landing> {
        if altitude.abs() < LANDING_EPSILON {
            let velocity = self.lander.velocity();
            if velocity.x.abs() < MAX_HORIZONTAL_SPEED && velocity.y.abs() < MAX_VERTICAL_SPEED {
                Some(self.terrain.is_segment_good_to_land(
                    segment,
                    self.lander.orientation(),
                    self.lander.position(),
                    self.lander.dimensions().width,
                ))
            } else {
                Some(Landing::TooFast)
            }
        } else if altitude < 0. {
            Some(Landing::BelowTerrain)
        } else {
            None
        }
    }

    fn game_win(&mut self, segment: usize) {
        self.lander.stop_lander();
        self.session.win(
            self.lander.fuel(),
            self.lander.dimensions().height,
            self.terrain.segment_width(segment),
        );
        log::info!(
            "Landed after {:.1}s, score {}",
            self.session.game_time(),
            self.session.display_score()
        );
    }

    fn game_over(&mut self, reason: Landing) {
        self.session.lose(reason);
        log::info!(
            "Lost after {:.1}s: {} ({reason:?})",
            self.session.game_time(),
            reason.message()
        );
    }

    pub fn soft_reset(&mut self) {
        self.session.soft_reset(self.lander.fuel());
        self.lander.reset();
        self.tick = 0;
        log::debug!("Continuing with {} fuel", self.lander.fuel());
    }

    pub fn hard_reset(&mut self) {
        self.soft_reset();
        self.session.hard_reset();
        self.lander.reset_fuel();
        log::debug!("New game");
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let lander = &self.lander;
        Snapshot {
            terrain: self.terrain.points(),
            terrain_min: Vec2::new(self.terrain.min_x(), self.terrain.min_y()),
            terrain_max: Vec2::new(self.terrain.max_x(), self.terrain.max_y()),
            lander: LanderView {
                position: lander.position(),
                velocity: lander.velocity(),
                orientation: lander.orientation(),
                angular_velocity: lander.angular_velocity(),
                dimensions: lander.dimensions(),
                thrusting: lander.is_thrusting(),
            },
            fuel: lander.fuel(),
            start_fuel: self.session.start_fuel(),
            score: self.session.display_score(),
            game_time: self.session.game_time(),
            altitude: self.session.altitude(),
            zoom_view: self.session.zoom_view(),
            zoom_factor: self.session.zoom_factor(),
            status: self.session.status(),
            loss_reason: self.session.loss_reason().map(Landing::code),
        }
    }
}
