//! Direction classification (angle -> discrete direction)
//!
//! # Angle convention
//!
//! Angles are measured counter-clockwise from the positive x axis with "up"
//! at 90°. Screen y grows downward, so y is negated before `atan2`:
//!
//! ```text
//!              90 (Up)
//!               |
//!   180 (Left) -+- 0 (Right)
//!               |
//!             270 (Down)
//! ```
//!
//! The angle is truncated to whole degrees before lookup. Sector bounds are
//! inclusive and slightly uneven; they are kept exactly as listed below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::geometry::Point;
use crate::error::Error;

/// A pad direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Name used in logs, configs and the REPL
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpLeft => "up_left",
            Direction::UpRight => "up_right",
            Direction::DownLeft => "down_left",
            Direction::DownRight => "down_right",
        }
    }

    /// Whether this is one of the four diagonals
    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| Error::UnknownDirection(s.to_string()))
    }
}

static CARDINALS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Inclusive range of whole degrees mapped to one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    pub start: u16,
    pub end: u16,
    pub direction: Direction,
}

impl Sector {
    const fn new(start: u16, end: u16, direction: Direction) -> Self {
        Self { start, end, direction }
    }

    pub fn contains(&self, angle: u16) -> bool {
        (self.start..=self.end).contains(&angle)
    }
}

static FOUR_DIRECTION_SECTORS: [Sector; 5] = [
    Sector::new(46, 135, Direction::Up),
    Sector::new(136, 225, Direction::Left),
    Sector::new(226, 315, Direction::Down),
    Sector::new(0, 45, Direction::Right),
    Sector::new(316, 360, Direction::Right),
];

static EIGHT_DIRECTION_SECTORS: [Sector; 9] = [
    Sector::new(23, 67, Direction::UpRight),
    Sector::new(68, 113, Direction::Up),
    Sector::new(114, 158, Direction::UpLeft),
    Sector::new(159, 204, Direction::Left),
    Sector::new(205, 249, Direction::DownLeft),
    Sector::new(250, 294, Direction::Down),
    Sector::new(295, 340, Direction::DownRight),
    Sector::new(0, 22, Direction::Right),
    Sector::new(341, 360, Direction::Right),
];

/// Which set of directions the pad resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionScheme {
    #[default]
    #[serde(alias = "four_directions")]
    Four,
    #[serde(alias = "eight_directions")]
    Eight,
}

impl DirectionScheme {
    /// Sector table, evaluated first match wins
    pub fn sectors(&self) -> &'static [Sector] {
        match self {
            DirectionScheme::Four => &FOUR_DIRECTION_SECTORS,
            DirectionScheme::Eight => &EIGHT_DIRECTION_SECTORS,
        }
    }

    /// Directions this scheme can produce
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            DirectionScheme::Four => &CARDINALS,
            DirectionScheme::Eight => &Direction::ALL,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DirectionScheme::Four => "four",
            DirectionScheme::Eight => "eight",
        }
    }
}

impl fmt::Display for DirectionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DirectionScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "four" | "4" | "four_directions" => Ok(DirectionScheme::Four),
            "eight" | "8" | "eight_directions" => Ok(DirectionScheme::Eight),
            _ => Err(Error::UnknownScheme(s.to_string())),
        }
    }
}

/// Angle of a pad-centered point in whole degrees, `0..=360`.
///
/// Truncates toward zero. A tiny negative angle shifted by 360 can round to
/// exactly 360; both sector tables cover it.
pub fn angle_of(point: Point) -> u16 {
    let theta = f64::from(-point.y).atan2(f64::from(point.x)).to_degrees();
    let angle = if theta < 0.0 { theta + 360.0 } else { theta };
    angle as u16
}

/// Look up the direction for a whole-degree angle.
///
/// Returns `None` only for angles above 360, which `angle_of` never yields.
pub fn classify(angle: u16, scheme: DirectionScheme) -> Option<Direction> {
    scheme
        .sectors()
        .iter()
        .find(|sector| sector.contains(angle))
        .map(|sector| sector.direction)
}

/// Angle and lookup in one step
pub fn classify_point(point: Point, scheme: DirectionScheme) -> Option<Direction> {
    classify(angle_of(point), scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_of_axes() {
        assert_eq!(angle_of(Point::new(1.0, 0.0)), 0);
        assert_eq!(angle_of(Point::new(0.0, -1.0)), 90); // screen up
        assert_eq!(angle_of(Point::new(-1.0, 0.0)), 180);
        assert_eq!(angle_of(Point::new(0.0, 1.0)), 270); // screen down
    }

    #[test]
    fn test_angle_of_truncates() {
        // Just under 45 degrees stays at 44
        assert_eq!(angle_of(Point::new(100.0, -99.0)), 44);
        // Just below the x axis, on the right
        assert_eq!(angle_of(Point::new(100.0, 1.0)), 359);
    }

    #[test]
    fn test_four_directions() {
        let scheme = DirectionScheme::Four;
        assert_eq!(classify(90, scheme), Some(Direction::Up));
        assert_eq!(classify(0, scheme), Some(Direction::Right));
        assert_eq!(classify(180, scheme), Some(Direction::Left));
        assert_eq!(classify(270, scheme), Some(Direction::Down));
        assert_eq!(classify(360, scheme), Some(Direction::Right));
    }

    #[test]
    fn test_four_direction_boundaries() {
        let scheme = DirectionScheme::Four;
        assert_eq!(classify(45, scheme), Some(Direction::Right));
        assert_eq!(classify(46, scheme), Some(Direction::Up));
        assert_eq!(classify(135, scheme), Some(Direction::Up));
        assert_eq!(classify(136, scheme), Some(Direction::Left));
        assert_eq!(classify(225, scheme), Some(Direction::Left));
        assert_eq!(classify(226, scheme), Some(Direction::Down));
        assert_eq!(classify(315, scheme), Some(Direction::Down));
        assert_eq!(classify(316, scheme), Some(Direction::Right));
    }

    #[test]
    fn test_eight_directions() {
        let scheme = DirectionScheme::Eight;
        assert_eq!(classify(45, scheme), Some(Direction::UpRight));
        assert_eq!(classify(0, scheme), Some(Direction::Right));
        assert_eq!(classify(90, scheme), Some(Direction::Up));
        assert_eq!(classify(135, scheme), Some(Direction::UpLeft));
        assert_eq!(classify(180, scheme), Some(Direction::Left));
        assert_eq!(classify(225, scheme), Some(Direction::DownLeft));
        assert_eq!(classify(270, scheme), Some(Direction::Down));
        assert_eq!(classify(315, scheme), Some(Direction::DownRight));
    }

    #[test]
    fn test_eight_direction_boundaries() {
        let scheme = DirectionScheme::Eight;
        assert_eq!(classify(22, scheme), Some(Direction::Right));
        assert_eq!(classify(23, scheme), Some(Direction::UpRight));
        assert_eq!(classify(338, scheme), Some(Direction::DownRight));
        assert_eq!(classify(340, scheme), Some(Direction::DownRight));
        assert_eq!(classify(341, scheme), Some(Direction::Right));
        assert_eq!(classify(360, scheme), Some(Direction::Right));
    }

    #[test]
    fn test_tables_are_total_and_disjoint() {
        for scheme in [DirectionScheme::Four, DirectionScheme::Eight] {
            for angle in 0..=360u16 {
                let hits = scheme
                    .sectors()
                    .iter()
                    .filter(|sector| sector.contains(angle))
                    .count();
                assert_eq!(hits, 1, "{} scheme: angle {} matched {} sectors", scheme, angle, hits);
            }
            assert_eq!(classify(361, scheme), None);
        }
    }

    #[test]
    fn test_scheme_only_yields_its_directions() {
        for scheme in [DirectionScheme::Four, DirectionScheme::Eight] {
            for angle in 0..=360u16 {
                let direction = classify(angle, scheme).unwrap();
                assert!(scheme.directions().contains(&direction));
            }
        }
        assert!(DirectionScheme::Four.directions().iter().all(|d| !d.is_diagonal()));
    }

    #[test]
    fn test_classify_point() {
        assert_eq!(
            classify_point(Point::new(50.0, 0.0), DirectionScheme::Four),
            Some(Direction::Right)
        );
        assert_eq!(
            classify_point(Point::new(-40.0, 40.0), DirectionScheme::Eight),
            Some(Direction::DownLeft)
        );
        assert_eq!(
            classify_point(Point::new(-40.0, 40.0), DirectionScheme::Four),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_direction_names_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(direction.name().parse::<Direction>(), Ok(direction));
        }
        assert_eq!("Up-Left".parse::<Direction>(), Ok(Direction::UpLeft));
        assert!(matches!("north".parse::<Direction>(), Err(Error::UnknownDirection(_))));
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("four".parse::<DirectionScheme>(), Ok(DirectionScheme::Four));
        assert_eq!("8".parse::<DirectionScheme>(), Ok(DirectionScheme::Eight));
        assert!("six".parse::<DirectionScheme>().is_err());
    }
}
