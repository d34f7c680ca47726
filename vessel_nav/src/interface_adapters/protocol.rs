// Telemetry DTOs and conversions for JSON output.
// Field names are flattened for log processors; angles go out in degrees.

use crate::use_cases::{AutopilotEvent, AutopilotMode, VoyageUpdate};
use serde::Serialize;

/// Records written to the telemetry stream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum TelemetryMessage {
    // Periodic vessel state.
    VesselUpdate(VesselUpdateDto),
    // Autopilot lifecycle transitions.
    Autopilot(AutopilotEventDto),
}

/// Flattened vessel state for one telemetry tick.
#[derive(Debug, Clone, Serialize)]
pub struct VesselUpdateDto {
    pub tick: u64,
    pub x: f32,
    pub y: f32,
    pub heading_deg: f32,
    pub speed: f32,
    pub forward_thrust: f32,
    pub rotation_thrust: f32,
    pub autopilot: Option<TargetDto>,
}

impl From<VoyageUpdate> for VesselUpdateDto {
    fn from(update: VoyageUpdate) -> Self {
        Self {
            tick: update.tick,
            x: update.vessel.position.x,
            y: update.vessel.position.y,
            heading_deg: update.vessel.heading.to_degrees(),
            speed: update.vessel.velocity.length(),
            forward_thrust: update.vessel.thrust.current_forward,
            rotation_thrust: update.vessel.thrust.current_rotation,
            autopilot: match update.mode {
                AutopilotMode::Engaged { target } => Some(TargetDto {
                    x: target.x,
                    y: target.y,
                }),
                AutopilotMode::Disengaged => None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetDto {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AutopilotEventDto {
    Engaged { target: TargetDto },
    Disengaged { reached_target: bool },
    TargetReached,
}

impl From<AutopilotEvent> for AutopilotEventDto {
    fn from(event: AutopilotEvent) -> Self {
        match event {
            AutopilotEvent::Engaged { target } => AutopilotEventDto::Engaged {
                target: TargetDto {
                    x: target.x,
                    y: target.y,
                },
            },
            AutopilotEvent::Disengaged { reached_target } => {
                AutopilotEventDto::Disengaged { reached_target }
            }
            AutopilotEvent::TargetReached => AutopilotEventDto::TargetReached,
        }
    }
}
