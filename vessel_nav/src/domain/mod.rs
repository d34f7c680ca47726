// Domain layer: core simulation types and rules.

pub mod errors;
pub mod math;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::ConfigError;
pub use math::Vec2;
pub use ports::{AutopilotObserver, ManualInputSource};
pub use state::{ManualInput, ThrustLevels, VesselSnapshot, VesselState};
pub use tuning::{PidGains, VesselParameters};
