// Use-case level inputs/outputs for vessel control.

use crate::domain::{Vec2, VesselSnapshot};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AutopilotMode {
    #[default]
    Disengaged,
    Engaged {
        target: Vec2,
    },
}

impl AutopilotMode {
    pub fn is_engaged(&self) -> bool {
        matches!(self, AutopilotMode::Engaged { .. })
    }

    pub fn target(&self) -> Option<Vec2> {
        match self {
            AutopilotMode::Engaged { target } => Some(*target),
            AutopilotMode::Disengaged => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutopilotEvent {
    Engaged { target: Vec2 },
    Disengaged { reached_target: bool },
    TargetReached,
}

#[derive(Debug, Clone)]
pub struct VoyageUpdate {
    pub tick: u64,
    pub vessel: VesselSnapshot,
    pub mode: AutopilotMode,
}
