pub mod axis;
pub mod compass;
pub mod constants;
pub mod monitor;
pub mod sim;

pub use axis::*;
pub use compass::*;
pub use constants::*;
pub use monitor::*;
pub use sim::*;
