//! Vector-to-compass transforms.
//!
//! `atan2` measures counterclockwise from +x; a compass bearing measures
//! clockwise from +y ("up"). These helpers rotate between the two frames and
//! classify bearings into eight directions at two label granularities.

/// Eight-way compass direction, ordered clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Clockwise from north, 45 degrees apart.
pub const CLOCKWISE: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// Compact letter code, "N" through "NW".
    pub fn code(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }

    /// Descriptive on-screen label; north reads "UP" since the pad's +y
    /// points up.
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "UP",
            Direction::NorthEast => "UP-RIGHT",
            Direction::East => "RIGHT",
            Direction::SouthEast => "DOWN-RIGHT",
            Direction::South => "DOWN",
            Direction::SouthWest => "DOWN-LEFT",
            Direction::West => "LEFT",
            Direction::NorthWest => "UP-LEFT",
        }
    }

    /// Bearing of this direction's sector center.
    pub fn bearing(self) -> f64 {
        match self {
            Direction::North => 0.0,
            Direction::NorthEast => 45.0,
            Direction::East => 90.0,
            Direction::SouthEast => 135.0,
            Direction::South => 180.0,
            Direction::SouthWest => 225.0,
            Direction::West => 270.0,
            Direction::NorthWest => 315.0,
        }
    }
}

/// Compass bearing in `[0, 360)` for a vector in the pad's math frame.
///
/// Axis values stay within `[-1, 1]`, so one ±360 correction is enough to
/// normalize after rotating the frame.
pub fn to_bearing(x: f64, y: f64) -> f64 {
    let math_angle = y.atan2(x).to_degrees();
    let mut bearing = 90.0 - math_angle;
    if bearing < 0.0 {
        bearing += 360.0;
    }
    if bearing >= 360.0 {
        bearing -= 360.0;
    }
    bearing
}

/// Nearest of the eight directions by rounding the bearing to 45° steps.
pub fn direction8(bearing: f64) -> Direction {
    let index = (bearing / 45.0).round() as usize % 8;
    CLOCKWISE[index]
}

/// Sector classification over eight half-open 45° sectors centered on the
/// cardinals and diagonals. `[337.5, 360)` wraps into the north sector; every
/// other boundary belongs to the sector above it.
pub fn direction_for(bearing: f64) -> Direction {
    if bearing >= 337.5 || bearing < 22.5 {
        Direction::North
    } else if bearing < 67.5 {
        Direction::NorthEast
    } else if bearing < 112.5 {
        Direction::East
    } else if bearing < 157.5 {
        Direction::SouthEast
    } else if bearing < 202.5 {
        Direction::South
    } else if bearing < 247.5 {
        Direction::SouthWest
    } else if bearing < 292.5 {
        Direction::West
    } else {
        Direction::NorthWest
    }
}
