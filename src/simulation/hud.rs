use super::math::{scale, translate, Mat4};
use super::{Snapshot, DEFAULT_ZOOM};

pub const BOTTOM_SPACE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    None,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub title: String,
    pub score: String,
    pub time: String,
    pub fuel: String,
    pub altitude: String,
    pub horizontal_speed: (String, Arrow),
    pub vertical_speed: (String, Arrow),
    pub outcome: Vec<String>,
}

impl HudText {
    pub fn from_snapshot(snapshot: &Snapshot<'_>) -> Self {
        let velocity = snapshot.lander.velocity;
        let horizontal_arrow = if velocity.x > 0. {
            Arrow::Right
        } else if velocity.x < 0. {
            Arrow::Left
        } else {
            Arrow::None
        };
        let vertical_arrow = if velocity.y > 0. {
            Arrow::Up
        } else if velocity.y < 0. {
            Arrow::Down
        } else {
            Arrow::None
        };

        Self {
            title: "LUNAR LANDER".to_owned(),
            score: format!("SCORE {}", four_digits(snapshot.score)),
            time: format!("TIME {}", clock(snapshot.game_time)),
            fuel: format!("FUEL {}", four_digits(snapshot.fuel)),
            altitude: format!("ALTITUDE {:.2}", snapshot.altitude),
            horizontal_speed: (
                format!("HORIZONTAL SPEED {:.1}", velocity.x.abs()),
                horizontal_arrow,
            ),
            vertical_speed: (
                format!("VERTICAL SPEED {:.1}", velocity.y.abs()),
                vertical_arrow,
            ),
            outcome: outcome_lines(snapshot),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        [
            self.title.as_str(),
            self.score.as_str(),
            self.time.as_str(),
            self.fuel.as_str(),
            self.altitude.as_str(),
            self.horizontal_speed.0.as_str(),
            self.vertical_speed.0.as_str(),
        ]
        .into_iter()
        .chain(self.outcome.iter().map(String::as_str))
    }
}

fn four_digits(value: i32) -> String {
    format!("{:04}", value.rem_euclid(10_000))
}

fn clock(seconds: f32) -> String {
    let seconds = seconds.max(0.) as u32;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn outcome_lines(snapshot: &Snapshot<'_>) -> Vec<String> {
    if snapshot.is_running() {
        return Vec::new();
    }
    let mut lines = vec![if snapshot.is_won() {
        "Game Win".to_owned()
    } else {
        "Game Loss".to_owned()
    }];
    if let Some(reason) = snapshot.loss() {
        lines.push(reason.message().to_owned());
    }
    lines.push(if snapshot.start_fuel == 0 {
        "Out of fuel. Press 'n' to start new game.".to_owned()
    } else {
        "Press 's' to continue game. Press 'n' to start new game.".to_owned()
    });
    lines
}

// Into the [-1, 1] square, centred on the lander while zoomed.
pub fn world_to_view(snapshot: &Snapshot<'_>, bottom_space: f32) -> Mat4 {
    let (min, max) = (snapshot.terrain_min, snapshot.terrain_max);
    let s = snapshot.zoom_factor / (max.x - min.x);
    if snapshot.zoom_view || snapshot.zoom_factor > DEFAULT_ZOOM {
        let position = snapshot.lander.position;
        translate(0., bottom_space, 0.) * scale(s, s, 1.) * translate(-position.x, -position.y, 0.)
    } else {
        translate(-1., -1. + bottom_space, 0.) * scale(s, s, 1.) * translate(-min.x, -min.y, 0.)
    }
}
