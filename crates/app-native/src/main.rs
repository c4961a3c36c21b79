//! Native host for the axispad simulation.
//!
//! One left-button drag drives both axes at once (cursor x onto the
//! horizontal controller, cursor y onto the vertical one), which exercises
//! the same pointer boundary the web frontend uses. Readings are presented
//! through structured logging whenever they change.

use std::time::{Duration, Instant};

use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use app_core::{AxisOrientation, PointerSample, SimulationLoop};

// Nominal 60 Hz tick; the physics step itself is fixed and wall-clock free.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let _window = WindowBuilder::new()
        .with_title("axispad (native)")
        .build(&event_loop)?;

    let mut sim = SimulationLoop::new();
    let mut cursor = (0.0_f64, 0.0_f64);
    let mut last_tick = Instant::now();
    let mut last_line = String::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            cursor = (position.x, position.y);
            if sim.any_dragging() {
                sim.apply(AxisOrientation::Horizontal, PointerSample::Move(cursor.0));
                sim.apply(AxisOrientation::Vertical, PointerSample::Move(cursor.1));
            }
        }
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                },
            ..
        } => match state {
            ElementState::Pressed => {
                sim.apply(AxisOrientation::Horizontal, PointerSample::Down(cursor.0));
                sim.apply(AxisOrientation::Vertical, PointerSample::Down(cursor.1));
            }
            ElementState::Released => {
                sim.apply(AxisOrientation::Horizontal, PointerSample::Up);
                sim.apply(AxisOrientation::Vertical, PointerSample::Up);
            }
        },
        Event::AboutToWait => {
            if last_tick.elapsed() >= FRAME_INTERVAL {
                last_tick = Instant::now();
                let reading = sim.frame();
                let line = format!(
                    "({:+.2}, {:+.2}) {}° {} [{}]",
                    reading.x,
                    reading.y,
                    reading.bearing.round(),
                    reading.direction.code(),
                    reading.status.text(),
                );
                if line != last_line {
                    log::info!("[pad] {line}");
                    last_line = line;
                }
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(last_tick + FRAME_INTERVAL));
        }
        _ => {}
    })?;
    Ok(())
}
