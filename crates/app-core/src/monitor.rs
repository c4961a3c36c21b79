//! Per-frame reading derived from the two axis values.

use glam::DVec2;

use crate::compass::{self, Direction};
use crate::constants::{RETURN_EPSILON, SEVERITY_HIGH, SEVERITY_MEDIUM};

/// Coarse magnitude band used by presentation to color the heading readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn for_magnitude(magnitude: f64) -> Self {
        if magnitude > SEVERITY_HIGH {
            Severity::High
        } else if magnitude > SEVERITY_MEDIUM {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Interaction status. An active drag always wins, even at near-zero
/// magnitude; `Returning` means the spring has not yet snapped to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Dragging,
    Returning,
    Ready,
}

impl Status {
    /// Readout text matching the pad's status panel.
    pub fn text(self) -> &'static str {
        match self {
            Status::Dragging => "Dragging",
            Status::Returning => "Returning to zero",
            Status::Ready => "Ready",
        }
    }
}

/// Snapshot of the composed 2D vector at one instant. Derived every frame,
/// never stored.
#[derive(Clone, Copy, Debug)]
pub struct CompassReading {
    pub x: f64,
    pub y: f64,
    pub bearing: f64,
    pub direction: Direction,
    pub magnitude: f64,
    pub severity: Severity,
    pub status: Status,
}

/// Combines the two axis outputs into a [`CompassReading`]. Stateless; the
/// reading is purely a function of the inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct VectorMonitor;

impl VectorMonitor {
    pub fn sample(&self, x: f64, y: f64, any_axis_dragging: bool) -> CompassReading {
        let magnitude = DVec2::new(x, y).length();
        let bearing = compass::to_bearing(x, y);
        let status = if any_axis_dragging {
            Status::Dragging
        } else if magnitude > RETURN_EPSILON {
            Status::Returning
        } else {
            Status::Ready
        };
        CompassReading {
            x,
            y,
            bearing,
            direction: compass::direction_for(bearing),
            magnitude,
            severity: Severity::for_magnitude(magnitude),
            status,
        }
    }
}
