// Gameplay tuning: immutable per-vessel parameters.

pub mod vessel;

pub use vessel::{PidGains, VesselParameters};
