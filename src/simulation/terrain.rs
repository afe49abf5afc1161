use serde::Serialize;
use thiserror::Error;

use super::landscape::DEFAULT_LANDSCAPE;
use super::math::{degrees, scale, transform_point, translate, Vec2};

pub const LANDSCAPE_WIDTH: f32 = 1000.;
pub const MAX_LANDING_ORIENTATION_DEG: f32 = 5.;

pub const MODEL_SENTINEL: f32 = -1.;

#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    #[error("terrain needs at least two points, got {0}")]
    TooFewPoints(usize),
    #[error("terrain has zero horizontal extent")]
    ZeroWidth,
    #[error("flat terrain model ends with a lone x coordinate")]
    DanglingCoordinate,
    #[error("terrain point {0} is not finite")]
    NonFinite(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Landing {
    Good,
    NotFlat,
    NotOverSegment,
    DoesNotFit,
    OrientationBad,
    TooFast,
    BelowTerrain,
}

impl Landing {
    pub fn code(self) -> u8 {
        match self {
            Landing::Good => 0,
            Landing::NotFlat => 1,
            Landing::NotOverSegment => 2,
            Landing::DoesNotFit => 3,
            Landing::OrientationBad => 4,
            Landing::TooFast => 5,
            Landing::BelowTerrain => 6,
        }
    }

    pub fn is_good(self) -> bool {
        self == Landing::Good
    }

    pub fn message(self) -> &'static str {
        match self {
            Landing::Good => "You landed safely",
            Landing::NotFlat => "You attempted to land on a segment that was not flat",
            Landing::NotOverSegment | Landing::DoesNotFit => "You did not fit on the surface",
            Landing::TooFast => "You were moving too fast",
            Landing::OrientationBad | Landing::BelowTerrain => "You crashed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    points: Vec<Vec2>,
    min: Vec2,
    max: Vec2,
}

impl Terrain {
    pub fn new(points: impl IntoIterator<Item = Vec2>) -> Result<Self, TerrainError> {
        let points = validated(points.into_iter().collect())?;
        Ok(Self::from_world_points(points))
    }

    pub fn from_model(
        model: impl IntoIterator<Item = Vec2>,
        width: f32,
    ) -> Result<Self, TerrainError> {
        let model = validated(model.into_iter().collect())?;
        let (min, max) = bounding_box(&model);
        if max.x - min.x <= 0. {
            return Err(TerrainError::ZeroWidth);
        }

        let s = width / (max.x - min.x);
        let model_to_world = scale(s, -s, 1.) * translate(-min.x, -max.y, 0.);

        let points = model
            .into_iter()
            .map(|p| transform_point(&model_to_world, p.extend(0.)).truncate())
            .collect();
        Ok(Self::from_world_points(points))
    }

    pub fn from_flat_model(values: &[f32], width: f32) -> Result<Self, TerrainError> {
        let end = values
            .iter()
            .step_by(2)
            .position(|&x| x == MODEL_SENTINEL)
            .map(|pairs| pairs * 2)
            .unwrap_or(values.len());
        let values = &values[..end];
        if values.len() % 2 != 0 {
            return Err(TerrainError::DanglingCoordinate);
        }
        Self::from_model(
            values.chunks_exact(2).map(|xy| Vec2::new(xy[0], xy[1])),
            width,
        )
    }

    pub fn default_landscape(width: f32) -> Result<Self, TerrainError> {
        Self::from_model(
            DEFAULT_LANDSCAPE.iter().map(|&(x, y)| Vec2::new(x, y)),
            width,
        )
    }

    fn from_world_points(mut points: Vec<Vec2>) -> Self {
        let mut previous_x = points[0].x;
        for point in points.iter_mut() {
            if point.x < previous_x {
                point.x = previous_x;
            }
            previous_x = point.x;
        }
        let (min, max) = bounding_box(&points);
        Self { points, min, max }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }

    pub fn min_x(&self) -> f32 {
        self.min.x
    }

    pub fn max_x(&self) -> f32 {
        self.max.x
    }

    pub fn min_y(&self) -> f32 {
        self.min.y
    }

    pub fn max_y(&self) -> f32 {
        self.max.y
    }

    fn segment(&self, i: usize) -> (Vec2, Vec2) {
        (self.points[i], self.points[i + 1])
    }

    fn iter_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Point of the terrain closest to `position`. On equal distance the
    /// earliest segment wins.
    pub fn find_closest_point(&self, position: Vec2) -> Vec2 {
        let mut closest = self.points[0];
        let mut min_squared_distance = f32::MAX;
        for (tail, head) in self.iter_segments() {
            let candidate = closest_point_on_segment(position, tail, head);
            let squared_distance = (candidate - position).length_squared();
            if squared_distance < min_squared_distance {
                closest = candidate;
                min_squared_distance = squared_distance;
            }
        }
        closest
    }

    pub fn try_find_segment_below(&self, position: Vec2) -> Option<usize> {
        self.iter_segments()
            .position(|(tail, head)| position.x > tail.x && position.x < head.x)
    }

    /// Index of the segment strictly below `position`, or 0 when the x
    /// coordinate is outside every segment's open interval.
    pub fn find_segment_below(&self, position: Vec2) -> usize {
        self.try_find_segment_below(position).unwrap_or_else(|| {
            log::trace!("No segment below x = {}, falling back to 0", position.x);
            0
        })
    }

    pub fn segment_width(&self, i: usize) -> f32 {
        let (tail, head) = self.segment(i);
        head.x - tail.x
    }

    pub fn find_lander_altitude(&self, i: usize, position: Vec2, lander_height: f32) -> f32 {
        let (tail, head) = self.segment(i);
        let width = head.x - tail.x;
        let ground = if width == 0. {
            tail.y.max(head.y)
        } else {
            tail.y + (head.y - tail.y) * (position.x - tail.x) / width
        };
        position.y - lander_height / 2. - ground
    }

    pub fn is_segment_good_to_land(
        &self,
        i: usize,
        orientation: f32,
        position: Vec2,
        lander_width: f32,
    ) -> Landing {
        let (tail, head) = self.segment(i);
        if orientation.abs() >= degrees(MAX_LANDING_ORIENTATION_DEG) {
            Landing::OrientationBad
        } else if tail.y != head.y {
            Landing::NotFlat
        } else if !(position.x > tail.x && position.x < head.x) {
            Landing::NotOverSegment
        } else if position.x + lander_width / 2. >= head.x
            || position.x - lander_width / 2. <= tail.x
        {
            Landing::DoesNotFit
        } else {
            Landing::Good
        }
    }
}

fn validated(points: Vec<Vec2>) -> Result<Vec<Vec2>, TerrainError> {
    if points.len() < 2 {
        return Err(TerrainError::TooFewPoints(points.len()));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(TerrainError::NonFinite(i));
    }
    Ok(points)
}

fn bounding_box(points: &[Vec2]) -> (Vec2, Vec2) {
    let (mut min, mut max) = (points[0], points[0]);
    for &p in points {
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}

fn closest_point_on_segment(position: Vec2, tail: Vec2, head: Vec2) -> Vec2 {
    let s = head - tail;
    let ss = s.dot(s);
    if ss == 0. {
        return tail;
    }
    let t = (position - tail).dot(s) / ss;
    if t < 0. {
        tail
    } else if t > 1. {
        head
    } else {
        tail + s * t
    }
}
