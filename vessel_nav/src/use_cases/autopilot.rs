// Autopilot guidance: steers a vessel's thrust intents toward a target point.

use crate::domain::systems::{PidController, SpeedProfile};
use crate::domain::{ConfigError, Vec2, VesselParameters, VesselState};
use crate::use_cases::types::{AutopilotEvent, AutopilotMode};

const REACHED_EVENTS: &[AutopilotEvent] = &[
    AutopilotEvent::Disengaged {
        reached_target: true,
    },
    AutopilotEvent::TargetReached,
];
const ABORTED_EVENTS: &[AutopilotEvent] = &[AutopilotEvent::Disengaged {
    reached_target: false,
}];

/// Figures computed by one guidance step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidanceReport {
    pub distance: f32,
    pub angle_to_target: f32,
    pub desired_speed: f32,
    pub speed_toward_target: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuidanceOutcome {
    // Autopilot is not engaged; nothing was touched.
    Idle,
    Steering(GuidanceReport),
    // Target reached; the autopilot has disengaged and emitted these events.
    Arrived(&'static [AutopilotEvent]),
}

/// Two-loop guidance: a heading PID turns the nose onto the target and a
/// throttle PID tracks the speed profile along the line of sight.
#[derive(Debug, Clone)]
pub struct Autopilot {
    mode: AutopilotMode,
    heading_pid: PidController,
    throttle_pid: PidController,
    speed_profile: SpeedProfile,
    arrival_threshold: f32,
}

impl Autopilot {
    pub fn new(params: &VesselParameters) -> Result<Self, ConfigError> {
        Ok(Self {
            mode: AutopilotMode::Disengaged,
            heading_pid: PidController::new(params.heading_gains),
            throttle_pid: PidController::new(params.throttle_gains),
            speed_profile: SpeedProfile::from_parameters(params)?,
            arrival_threshold: params.arrival_threshold,
        })
    }

    pub fn mode(&self) -> AutopilotMode {
        self.mode
    }

    pub fn is_engaged(&self) -> bool {
        self.mode.is_engaged()
    }

    pub fn heading_pid(&self) -> &PidController {
        &self.heading_pid
    }

    pub fn throttle_pid(&self) -> &PidController {
        &self.throttle_pid
    }

    /// Engages (or re-targets) the autopilot. Both PIDs start from a clean state.
    pub fn engage(&mut self, target: Vec2) -> AutopilotEvent {
        self.mode = AutopilotMode::Engaged { target };
        self.heading_pid.reset();
        self.throttle_pid.reset();
        AutopilotEvent::Engaged { target }
    }

    /// Returns the emitted events; empty when already disengaged.
    pub fn disengage(
        &mut self,
        state: &mut VesselState,
        reached_target: bool,
    ) -> &'static [AutopilotEvent] {
        if !self.mode.is_engaged() {
            return &[];
        }

        self.mode = AutopilotMode::Disengaged;
        state.clear_thrust_intent();

        if reached_target {
            REACHED_EVENTS
        } else {
            ABORTED_EVENTS
        }
    }

    pub fn tick(&mut self, dt: f32, state: &mut VesselState) -> GuidanceOutcome {
        let AutopilotMode::Engaged { target } = self.mode else {
            return GuidanceOutcome::Idle;
        };

        let to_target = target - state.position;
        let distance = to_target.length();

        if distance <= self.arrival_threshold {
            return GuidanceOutcome::Arrived(self.disengage(state, true));
        }

        // Non-zero: arrival_threshold > 0 excludes the zero vector.
        let direction = to_target.normalized();
        let angle_to_target = state.forward().angle_to(direction);

        // Drive the angle error to zero; the sign flip turns toward the target.
        let rotation_output = self.heading_pid.update(0.0, angle_to_target, dt);
        state.thrust.target_rotation = (-rotation_output).clamp(-1.0, 1.0);

        let desired_speed = self.speed_profile.desired_speed(distance);
        let speed_toward_target = state.velocity.dot(direction);
        let throttle_output = self
            .throttle_pid
            .update(desired_speed, speed_toward_target, dt);
        state.thrust.target_forward = throttle_output.clamp(-1.0, 1.0);

        tracing::trace!(
            distance,
            angle_to_target,
            desired_speed,
            speed_toward_target,
            "autopilot step"
        );

        GuidanceOutcome::Steering(GuidanceReport {
            distance,
            angle_to_target,
            desired_speed,
            speed_toward_target,
        })
    }
}
