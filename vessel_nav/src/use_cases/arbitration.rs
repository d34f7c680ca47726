// Input arbitration: manual control always wins over the autopilot.

use crate::domain::ManualInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSource {
    // Raw input drives thrust intents (including "no input" = zero thrust).
    Manual,
    // Autopilot stays in charge this tick.
    Autopilot,
    // Manual input arrived while the autopilot was engaged.
    ManualOverride,
}

pub fn has_manual_input(input: &ManualInput) -> bool {
    input.forward || input.backward || input.rotate_left || input.rotate_right
}

pub fn arbitrate(input: &ManualInput, autopilot_engaged: bool) -> ControlSource {
    match (has_manual_input(input), autopilot_engaged) {
        (true, true) => ControlSource::ManualOverride,
        (false, true) => ControlSource::Autopilot,
        (_, false) => ControlSource::Manual,
    }
}

/// Maps held keys to `(forward, rotation)` thrust intents.
///
/// Forward wins over backward; left wins over right.
pub fn manual_thrust_intent(input: &ManualInput) -> (f32, f32) {
    let forward = if input.forward {
        1.0
    } else if input.backward {
        -1.0
    } else {
        0.0
    };

    let rotation = if input.rotate_left {
        -1.0
    } else if input.rotate_right {
        1.0
    } else {
        0.0
    };

    (forward, rotation)
}
