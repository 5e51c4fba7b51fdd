use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Neg, Sub};

use crate::agents::Agent;

pub const API_VERSION: &str = "1";

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2D {
    pub x: i16,
    pub y: i16,
}

impl Vec2D {
    pub const fn new(x: i16, y: i16) -> Vec2D {
        Vec2D { x, y }
    }

    pub fn apply(self, d: Direction) -> Vec2D {
        self + d.into()
    }

    /// Length in the taxicab metric, use on differences of two points.
    pub fn manhattan(&self) -> u64 {
        self.x.unsigned_abs() as u64 + self.y.unsigned_abs() as u64
    }

    /// Straight line length, use on differences of two points.
    pub fn euclidean(&self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }
}

impl From<(i16, i16)> for Vec2D {
    fn from(val: (i16, i16)) -> Self {
        Vec2D::new(val.0, val.1)
    }
}

impl From<Direction> for Vec2D {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Vec2D::new(0, 1),
            Direction::Right => Vec2D::new(1, 0),
            Direction::Down => Vec2D::new(0, -1),
            Direction::Left => Vec2D::new(-1, 0),
            Direction::Stop => Vec2D::new(0, 0),
        }
    }
}

impl Add for Vec2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vec2D {
    type Output = Vec2D;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

pub const fn v2(x: i16, y: i16) -> Vec2D {
    Vec2D::new(x, y)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    Stop,
}

impl Direction {
    /// The four moving directions, `Stop` excluded.
    pub fn iter() -> impl Iterator<Item = Direction> {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
        .iter()
        .copied()
    }

    pub fn invert(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Stop => Direction::Stop,
        }
    }
}

/// Position to be searched, as sent to the `move` binary and the server.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct MoveRequest {
    /// Layout text, see `Maze::parse`.
    pub layout: String,
    #[serde(default)]
    pub score: f64,
    /// Remaining scared moves per ghost.
    #[serde(default)]
    pub scared: Vec<u32>,
    /// Overrides the default agent configuration.
    #[serde(default)]
    pub config: Option<Agent>,
}

#[derive(Serialize, Debug)]
pub struct IndexResponse {
    pub apiversion: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

impl IndexResponse {
    pub fn new(
        apiversion: &'static str,
        author: &'static str,
        version: &'static str,
    ) -> IndexResponse {
        IndexResponse {
            apiversion,
            author,
            version,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MoveResponse {
    pub r#move: Direction,
    /// Root value of the tree search, if the agent searched.
    #[serde(default)]
    pub value: Option<f64>,
}

impl MoveResponse {
    pub fn new(r#move: Direction) -> MoveResponse {
        MoveResponse {
            r#move,
            value: None,
        }
    }
    pub fn valued(r#move: Direction, value: f64) -> MoveResponse {
        MoveResponse {
            r#move,
            value: Some(value),
        }
    }
}

impl Default for MoveResponse {
    fn default() -> MoveResponse {
        MoveResponse::new(Direction::Stop)
    }
}
