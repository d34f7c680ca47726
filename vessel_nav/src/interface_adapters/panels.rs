// Status panel text for presentation layers (HUD labels, debug overlays).

use crate::use_cases::{AutopilotMode, VesselController};

/// Autopilot status: target, distance, bearing error and speed.
pub fn autopilot_panel(controller: &VesselController) -> String {
    let AutopilotMode::Engaged { target } = controller.mode() else {
        return "Autopilot: OFF".to_string();
    };

    let position = controller.position();
    let distance = position.distance_to(target);
    let direction = (target - position).normalized();
    let angle = controller.forward().angle_to(direction).to_degrees();

    format!(
        "Autopilot: ON\nTarget: {target}\nDistance: {distance:.1}\nAngle to target: {angle:.1}°\nSpeed: {:.1}",
        controller.velocity().length()
    )
}

/// Raw motion figures for debugging.
pub fn debug_panel(controller: &VesselController) -> String {
    let status = if controller.mode().is_engaged() {
        "ON"
    } else {
        "OFF"
    };
    let thrust = controller.thrust();

    format!(
        "Speed: {:.1}\nThrust: {:.2}\nRotation: {:.2}\nHeading: {:.1}°\nAutopilot: {status}",
        controller.velocity().length(),
        thrust.current_forward,
        thrust.current_rotation,
        controller.heading().to_degrees(),
    )
}
