//! One-dimensional accelerometer control.
//!
//! While a drag is held, pointer displacement maps linearly onto the bounded
//! value. On release, a damped spring pulls the value back to center and
//! snaps to exact rest once both value and velocity fall below threshold.

use crate::constants::{
    DRAG_SENSITIVITY, DRAG_VELOCITY_SCALE, REST_EPSILON, SPRING_DAMPING, SPRING_STIFFNESS,
    SPRING_TIMESTEP,
};

/// Which screen axis a controller reads, and therefore its sign convention.
///
/// Screen y grows downward while the pad's semantic "up" should increase the
/// value, so the vertical axis negates pointer deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

impl AxisOrientation {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            AxisOrientation::Horizontal => 1.0,
            AxisOrientation::Vertical => -1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AxisOrientation::Horizontal => "horizontal",
            AxisOrientation::Vertical => "vertical",
        }
    }
}

/// Drag lifecycle for one axis. While `Dragging`, the pointer coordinate and
/// value captured at drag start anchor the value mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { anchor_coord: f64, anchor_value: f64 },
}

/// One bounded scalar control. `value` stays in `[-1, 1]` for the life of the
/// controller; `velocity` is only written by the input phase (while dragging)
/// and by [`AxisController::advance`] (while idle).
#[derive(Clone, Copy, Debug)]
pub struct AxisController {
    orientation: AxisOrientation,
    value: f64,
    velocity: f64,
    drag: DragState,
}

impl AxisController {
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            value: 0.0,
            velocity: 0.0,
            drag: DragState::Idle,
        }
    }

    #[inline]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Start (or restart) a drag at the given pointer coordinate. A begin
    /// while already dragging re-anchors at the current value.
    pub fn begin_drag(&mut self, coord: f64) {
        if !coord.is_finite() {
            return;
        }
        self.drag = DragState::Dragging {
            anchor_coord: coord,
            anchor_value: self.value,
        };
        self.velocity = 0.0;
    }

    /// Map the pointer's displacement since drag start onto the value.
    /// Ignored while idle; upstream delivery is expected to gate moves on an
    /// active drag anyway.
    pub fn update_drag(&mut self, coord: f64) {
        if !coord.is_finite() {
            return;
        }
        let (anchor_coord, anchor_value) = match self.drag {
            DragState::Dragging {
                anchor_coord,
                anchor_value,
            } => (anchor_coord, anchor_value),
            DragState::Idle => return,
        };
        let delta = (coord - anchor_coord) * self.orientation.sign() / DRAG_SENSITIVITY;
        self.value = (anchor_value + delta).clamp(-1.0, 1.0);
        // Proxy velocity from net displacement since drag start, not an
        // instantaneous derivative: a long, fast drag seeds a stronger
        // release kick.
        self.velocity = (self.value - anchor_value) * DRAG_VELOCITY_SCALE;
    }

    /// End the drag. The last proxy velocity carries into the spring phase.
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// One spring step toward zero at the fixed nominal timestep. No-op while
    /// dragging. Returns the value after the step.
    pub fn advance(&mut self) -> f64 {
        if self.is_dragging() {
            return self.value;
        }
        let spring_force = -self.value * SPRING_STIFFNESS;
        self.velocity += spring_force;
        self.velocity *= SPRING_DAMPING;
        // Clamp after integrating so release overshoot cannot leave the
        // domain the drag mapping guarantees.
        self.value = (self.value + self.velocity * SPRING_TIMESTEP).clamp(-1.0, 1.0);

        // Exact terminal state for an otherwise asymptotic decay.
        if self.value.abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON {
            self.value = 0.0;
            self.velocity = 0.0;
        }
        self.value
    }
}
