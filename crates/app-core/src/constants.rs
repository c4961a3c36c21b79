// Shared physics and classification constants used by both frontends.

// Drag input mapping
pub const DRAG_SENSITIVITY: f64 = 80.0; // pointer px per unit of axis range
pub const DRAG_VELOCITY_SCALE: f64 = 0.3; // proxy velocity per unit of net drag displacement

// Return-to-center spring
pub const SPRING_STIFFNESS: f64 = 0.2; // restoring force per unit of displacement
pub const SPRING_DAMPING: f64 = 0.9; // velocity retained each step
pub const SPRING_TIMESTEP: f64 = 0.1; // nominal step per frame, independent of wall clock
pub const REST_EPSILON: f64 = 0.005; // value and velocity below this snap to exact rest

// Reading classification
pub const RETURN_EPSILON: f64 = 0.01; // magnitude above this reports Returning
pub const SEVERITY_HIGH: f64 = 0.7; // heading readout turns high-alert above this magnitude
pub const SEVERITY_MEDIUM: f64 = 0.3; // and mid-alert above this one
