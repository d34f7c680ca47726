// Use cases layer: vessel control workflows.

pub mod arbitration;
pub mod autopilot;
pub mod controller;
pub mod events;
pub mod types;
pub mod voyage;

#[cfg(test)]
pub(crate) mod test_support;

pub use autopilot::{Autopilot, GuidanceOutcome, GuidanceReport};
pub use controller::VesselController;
pub use events::EventForwarder;
pub use types::{AutopilotEvent, AutopilotMode, VoyageUpdate};
pub use voyage::{VoyageReport, VoyageSettings, voyage_task};
