//! Frame-driven simulation over both axes.
//!
//! The host owns construction and the frame cadence: it forwards pointer
//! samples as they arrive and calls [`SimulationLoop::frame`] once per
//! display refresh. The physics timestep is fixed, so the loop needs no
//! wall-clock input.

use crate::axis::{AxisController, AxisOrientation};
use crate::monitor::{CompassReading, VectorMonitor};

/// One pointer event along a single axis, already reduced to the coordinate
/// that axis reads (x for horizontal, y for vertical). Every input modality
/// — mouse, touch, pointer events, a windowing toolkit — funnels into this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSample {
    Down(f64),
    Move(f64),
    Up,
}

/// Both axis controllers plus the monitor that folds them into a reading.
pub struct SimulationLoop {
    horizontal: AxisController,
    vertical: AxisController,
    monitor: VectorMonitor,
}

impl SimulationLoop {
    pub fn new() -> Self {
        Self {
            horizontal: AxisController::new(AxisOrientation::Horizontal),
            vertical: AxisController::new(AxisOrientation::Vertical),
            monitor: VectorMonitor,
        }
    }

    /// Route one pointer sample to the named axis.
    pub fn apply(&mut self, axis: AxisOrientation, sample: PointerSample) {
        let controller = self.controller_mut(axis);
        match sample {
            PointerSample::Down(coord) => {
                controller.begin_drag(coord);
                log::info!("[drag] begin on {} axis at {:.1}", axis.name(), coord);
            }
            PointerSample::Move(coord) => controller.update_drag(coord),
            PointerSample::Up => {
                controller.end_drag();
                log::info!("[drag] end on {} axis", axis.name());
            }
        }
    }

    /// Advance both axes, then sample. Advancing first guarantees the
    /// reading never exposes a half-updated vector.
    pub fn frame(&mut self) -> CompassReading {
        let x = self.horizontal.advance();
        let y = self.vertical.advance();
        self.monitor.sample(x, y, self.any_dragging())
    }

    pub fn any_dragging(&self) -> bool {
        self.horizontal.is_dragging() || self.vertical.is_dragging()
    }

    pub fn axis(&self, axis: AxisOrientation) -> &AxisController {
        match axis {
            AxisOrientation::Horizontal => &self.horizontal,
            AxisOrientation::Vertical => &self.vertical,
        }
    }

    fn controller_mut(&mut self, axis: AxisOrientation) -> &mut AxisController {
        match axis {
            AxisOrientation::Horizontal => &mut self.horizontal,
            AxisOrientation::Vertical => &mut self.vertical,
        }
    }
}

impl Default for SimulationLoop {
    fn default() -> Self {
        Self::new()
    }
}
