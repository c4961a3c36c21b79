//! DOM painting: knob offsets, track tints, and the readout panel.

use web_sys as web;

use app_core::{AxisController, AxisOrientation, CompassReading, Severity, SimulationLoop, Status};

use crate::dom;

// Knob geometry: the track is 250px with a 40px knob, so the centered knob
// sits at 85px and a full deflection travels 80px.
const KNOB_CENTER_PX: f64 = 85.0;
const KNOB_TRAVEL_PX: f64 = 80.0;

// Axis accent colors.
const H_ACCENT: (u8, u8, u8) = (0, 180, 216);
const V_ACCENT: (u8, u8, u8) = (255, 109, 109);

struct AxisWidgets {
    knob: web::HtmlElement,
    track: web::HtmlElement,
    value: web::HtmlElement,
}

impl AxisWidgets {
    fn new(document: &web::Document, prefix: &str) -> anyhow::Result<Self> {
        Ok(Self {
            knob: dom::html_element(document, &format!("{prefix}-knob"))?,
            track: dom::html_element(document, &format!("{prefix}-track"))?,
            value: dom::html_element(document, &format!("{prefix}-value"))?,
        })
    }
}

pub struct PadView {
    horizontal: AxisWidgets,
    vertical: AxisWidgets,
    vec_x: web::HtmlElement,
    vec_y: web::HtmlElement,
    angle: web::HtmlElement,
    status: web::HtmlElement,
    last_status: Option<Status>,
}

impl PadView {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            horizontal: AxisWidgets::new(document, "h")?,
            vertical: AxisWidgets::new(document, "v")?,
            vec_x: dom::html_element(document, "vec-x")?,
            vec_y: dom::html_element(document, "vec-y")?,
            angle: dom::html_element(document, "angle")?,
            status: dom::html_element(document, "status")?,
            last_status: None,
        })
    }

    /// Paint one frame's worth of state.
    pub fn paint(&mut self, sim: &SimulationLoop, reading: &CompassReading) {
        let h = sim.axis(AxisOrientation::Horizontal);
        let v = sim.axis(AxisOrientation::Vertical);

        let style = self.horizontal.knob.style();
        _ = style.set_property(
            "left",
            &format!("{:.1}px", KNOB_CENTER_PX + h.value() * KNOB_TRAVEL_PX),
        );
        let style = self.vertical.knob.style();
        _ = style.set_property(
            "top",
            &format!("{:.1}px", KNOB_CENTER_PX - v.value() * KNOB_TRAVEL_PX),
        );

        self.horizontal
            .value
            .set_text_content(Some(&format!("{:.2}", h.value())));
        self.vertical
            .value
            .set_text_content(Some(&format!("{:.2}", v.value())));

        _ = self
            .horizontal
            .track
            .style()
            .set_property("background", &track_background(H_ACCENT, h));
        _ = self
            .vertical
            .track
            .style()
            .set_property("background", &track_background(V_ACCENT, v));

        self.vec_x
            .set_text_content(Some(&format!("{:.2}", reading.x)));
        self.vec_y
            .set_text_content(Some(&format!("{:.2}", reading.y)));

        self.angle.set_text_content(Some(&format!(
            "{}° {}",
            reading.bearing.round(),
            reading.direction.label()
        )));
        _ = self
            .angle
            .style()
            .set_property("color", severity_color(reading.severity));

        self.status.set_text_content(Some(reading.status.text()));
        _ = self
            .status
            .style()
            .set_property("background", status_background(reading.status));

        if self.last_status != Some(reading.status) {
            log::info!("[status] {}", reading.status.text());
            self.last_status = Some(reading.status);
        }
    }
}

/// Track tint: the axis accent while interacting, fading with velocity while
/// the spring returns, otherwise a faint idle wash scaled by deflection.
fn track_background(accent: (u8, u8, u8), ctrl: &AxisController) -> String {
    let (r, g, b) = accent;
    let intensity = ctrl.value().abs();
    let velocity = ctrl.velocity().abs();
    if ctrl.is_dragging() {
        format!("rgba({r}, {g}, {b}, {:.2})", 0.3 + intensity * 0.4)
    } else if velocity > 0.05 {
        format!("rgba({r}, {g}, {b}, {:.2})", 0.2 + velocity * 0.3)
    } else {
        format!("rgba(255, 255, 255, {:.2})", 0.05 + intensity * 0.05)
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "#ff6d6d",
        Severity::Medium => "#ffd166",
        Severity::Low => "#64ffda",
    }
}

fn status_background(status: Status) -> &'static str {
    match status {
        Status::Dragging => "rgba(100, 255, 218, 0.2)",
        Status::Returning => "rgba(255, 109, 109, 0.1)",
        Status::Ready => "rgba(100, 255, 218, 0.1)",
    }
}
