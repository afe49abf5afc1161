use serde::Serialize;

use super::math::Vec2;
use super::{Dimensions, Landing, SessionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LanderView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub orientation: f32,
    pub angular_velocity: f32,
    pub dimensions: Dimensions,
    pub thrusting: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub terrain: &'a [Vec2],
    pub terrain_min: Vec2,
    pub terrain_max: Vec2,
    pub lander: LanderView,
    pub fuel: i32,
    pub start_fuel: i32,
    pub score: i32,
    pub game_time: f32,
    pub altitude: f32,
    pub zoom_view: bool,
    pub zoom_factor: f32,
    pub status: SessionStatus,
    pub loss_reason: Option<u8>,
}

impl Snapshot<'_> {
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    pub fn loss(&self) -> Option<Landing> {
        match self.status {
            SessionStatus::Lost(reason) => Some(reason),
            _ => None,
        }
    }
}
