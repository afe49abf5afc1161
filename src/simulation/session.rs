use serde::Serialize;

use super::lander::INITIAL_FUEL;
use super::Landing;

pub const DEFAULT_ZOOM: f32 = 2.;
pub const ZOOM_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    Running,
    Won,
    Lost(Landing),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    status: SessionStatus,
    game_time: f32,
    start_fuel: i32,
    score: f32,
    zoom_factor: f32,
    zoom_view: bool,
    altitude: f32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: SessionStatus::Running,
            game_time: 0.,
            start_fuel: INITIAL_FUEL,
            score: 0.,
            zoom_factor: DEFAULT_ZOOM,
            zoom_view: false,
            altitude: 0.,
        }
    }
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    pub fn loss_reason(&self) -> Option<Landing> {
        match self.status {
            SessionStatus::Lost(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    pub fn start_fuel(&self) -> i32 {
        self.start_fuel
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn display_score(&self) -> i32 {
        self.score as i32
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    pub fn zoom_view(&self) -> bool {
        self.zoom_view
    }

    pub fn altitude(&self) -> f32 {
        self.altitude
    }

    pub fn can_continue(&self) -> bool {
        self.start_fuel != 0
    }

    pub(crate) fn advance_time(&mut self, dt: f32) {
        self.game_time += dt;
    }

    pub(crate) fn set_altitude(&mut self, altitude: f32) {
        self.altitude = altitude;
    }

    pub(crate) fn animate_zoom(&mut self, zoom_view: bool, max_zoom: f32) {
        self.zoom_view = zoom_view;
        if zoom_view {
            if self.zoom_factor < max_zoom {
                self.zoom_factor += ZOOM_STEP;
            }
        } else if self.zoom_factor > DEFAULT_ZOOM {
            self.zoom_factor -= ZOOM_STEP;
        }
    }

    pub(crate) fn win(&mut self, fuel: i32, lander_height: f32, segment_width: f32) {
        self.status = SessionStatus::Won;
        self.score += landing_score(
            self.game_time,
            self.start_fuel,
            fuel,
            lander_height,
            segment_width,
        );
    }

    pub(crate) fn lose(&mut self, reason: Landing) {
        self.status = SessionStatus::Lost(reason);
    }

    pub(crate) fn soft_reset(&mut self, fuel: i32) {
        self.start_fuel = fuel;
        self.zoom_factor = DEFAULT_ZOOM;
        self.zoom_view = false;
        self.game_time = 0.;
        self.altitude = 0.;
        self.status = SessionStatus::Running;
    }

    pub(crate) fn hard_reset(&mut self) {
        self.soft_reset(INITIAL_FUEL);
        self.score = 0.;
    }
}

pub fn landing_score(
    game_time: f32,
    start_fuel: i32,
    fuel: i32,
    lander_height: f32,
    segment_width: f32,
) -> f32 {
    let fuel_bonus = if start_fuel == 0 {
        0.
    } else {
        300. * (start_fuel - fuel) as f32 / start_fuel as f32 * 10.
    };
    let pad_bonus = if segment_width > 0. {
        400. * lander_height / segment_width
    } else {
        0.
    };
    300. - game_time + fuel_bonus + pad_bonus
}

#[cfg(test)]
mod session_tests {
    use super::*;

    fn assert_feq(left: f32, right: f32) {
        if (left - right).abs() > 1e-3 {
            panic!("Float equal assertion failed, {left} != {right}");
        }
    }

    #[test]
    fn initial_state() {
        let session = SessionState::default();
        assert!(session.is_running());
        assert!(!session.is_won());
        assert_eq!(session.loss_reason(), None);
        assert_eq!(session.start_fuel(), INITIAL_FUEL);
        assert_eq!(session.display_score(), 0);
        assert_eq!(session.zoom_factor(), DEFAULT_ZOOM);
    }

    #[test]
    fn score_formula() {
        // (100 - 50) / 100 * 10 = 5 -> 1500 fuel points
        let score = landing_score(10., 100, 50, 6., 60.);
        assert_feq(score, 300. - 10. + 1500. + 40.);
        assert_feq(landing_score(0., 0, 0, 6., 0.), 300.);
    }

    #[test]
    fn win_accumulates_score() {
        let mut session = SessionState::default();
        session.advance_time(20.);
        session.win(INITIAL_FUEL, 5., 100.);
        assert!(session.is_won());
        assert_feq(session.score(), 300.);
        assert_eq!(session.display_score(), 300);

        session.soft_reset(INITIAL_FUEL);
        session.win(INITIAL_FUEL, 5., 100.);
        assert_feq(session.score(), 620.);
    }

    #[test]
    fn display_score_truncates() {
        let mut session = SessionState::default();
        session.advance_time(0.5);
        session.win(INITIAL_FUEL, 0., 10.);
        assert_eq!(session.display_score(), 299);
    }

    #[test]
    fn soft_reset_keeps_score() {
        let mut session = SessionState::default();
        session.win(INITIAL_FUEL, 0., 10.);
        session.lose(Landing::TooFast);
        assert_eq!(session.loss_reason(), Some(Landing::TooFast));
        session.animate_zoom(true, 10.);
        session.soft_reset(1234);
        assert!(session.is_running());
        assert_eq!(session.start_fuel(), 1234);
        assert_eq!(session.zoom_factor(), DEFAULT_ZOOM);
        assert_eq!(session.game_time(), 0.);
        assert_feq(session.score(), 300.);
    }

    #[test]
    fn hard_reset_restores_defaults() {
        let mut session = SessionState::default();
        session.advance_time(3.);
        session.set_altitude(12.);
        session.win(10, 1., 1.);
        session.hard_reset();
        assert_eq!(session, SessionState::default());
        session.hard_reset();
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn continue_needs_fuel() {
        let mut session = SessionState::default();
        session.soft_reset(0);
        assert!(!session.can_continue());
    }

    #[test]
    fn zoom_animation() {
        let mut session = SessionState::default();
        for _ in 0..4 {
            session.animate_zoom(true, 2.12);
        }
        assert!(session.zoom_view());
        assert_feq(session.zoom_factor(), 2.15);

        for _ in 0..10 {
            session.animate_zoom(false, 2.12);
        }
        assert!(!session.zoom_view());
        assert!(session.zoom_factor() <= DEFAULT_ZOOM + 1e-3);
    }
}
