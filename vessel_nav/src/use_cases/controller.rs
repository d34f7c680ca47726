// Vessel controller: owns one vessel's state and runs the per-tick control flow.

use crate::domain::systems::movement;
use crate::domain::{
    AutopilotObserver, ConfigError, ManualInput, ThrustLevels, Vec2, VesselParameters,
    VesselSnapshot, VesselState,
};
use crate::use_cases::arbitration::{ControlSource, arbitrate, manual_thrust_intent};
use crate::use_cases::autopilot::{Autopilot, GuidanceOutcome, GuidanceReport};
use crate::use_cases::types::{AutopilotEvent, AutopilotMode};
use tracing::{debug, info, warn};

pub struct VesselController {
    params: VesselParameters,
    state: VesselState,
    autopilot: Autopilot,
    observers: Vec<Box<dyn AutopilotObserver + Send>>,
    // Latest guidance figures; cleared whenever the autopilot is not steering.
    last_guidance: Option<GuidanceReport>,
}

impl VesselController {
    /// Creates a controller for a vessel at rest at the origin, facing +X.
    pub fn new(params: VesselParameters) -> Result<Self, ConfigError> {
        Self::with_state(params, VesselState::default())
    }

    pub fn with_state(params: VesselParameters, state: VesselState) -> Result<Self, ConfigError> {
        params.validate()?;
        if !(state.position.is_finite() && state.velocity.is_finite()) {
            return Err(ConfigError::NotFinite { field: "position" });
        }
        if !(state.heading.is_finite() && state.current_speed.is_finite()) {
            return Err(ConfigError::NotFinite { field: "heading" });
        }
        let autopilot = Autopilot::new(&params)?;

        Ok(Self {
            params,
            state,
            autopilot,
            observers: Vec::new(),
            last_guidance: None,
        })
    }

    pub fn subscribe(&mut self, observer: impl AutopilotObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn engage_autopilot(&mut self, target: Vec2) {
        if !target.is_finite() {
            warn!(?target, "ignoring non-finite autopilot target");
            return;
        }

        let event = self.autopilot.engage(target);
        info!(%target, "autopilot engaged");
        self.notify(event);
    }

    pub fn disengage_autopilot(&mut self, reached_target: bool) {
        let events = self.autopilot.disengage(&mut self.state, reached_target);
        if events.is_empty() {
            return;
        }

        self.last_guidance = None;
        self.log_disengaged(reached_target);
        for event in events {
            self.notify(*event);
        }
    }

    /// Advances the vessel by one simulation step of `dt` seconds.
    pub fn tick(&mut self, dt: f32, input: ManualInput) {
        if !(dt > 0.0 && dt.is_finite()) {
            debug!(dt, "skipping tick with invalid timestep");
            return;
        }

        match arbitrate(&input, self.autopilot.is_engaged()) {
            ControlSource::ManualOverride => {
                self.disengage_autopilot(false);
                self.apply_manual_input(&input);
            }
            ControlSource::Manual => self.apply_manual_input(&input),
            ControlSource::Autopilot => self.steer(dt),
        }

        movement::tick_vessel(&mut self.state, &self.params, dt);
    }

    fn steer(&mut self, dt: f32) {
        match self.autopilot.tick(dt, &mut self.state) {
            GuidanceOutcome::Steering(report) => self.last_guidance = Some(report),
            GuidanceOutcome::Arrived(events) => {
                self.last_guidance = None;
                self.log_disengaged(true);
                for event in events {
                    self.notify(*event);
                }
            }
            GuidanceOutcome::Idle => self.last_guidance = None,
        }
    }

    fn apply_manual_input(&mut self, input: &ManualInput) {
        let (forward, rotation) = manual_thrust_intent(input);
        self.state.thrust.target_forward = forward;
        self.state.thrust.target_rotation = rotation;
    }

    fn log_disengaged(&self, reached_target: bool) {
        if reached_target {
            info!(position = %self.state.position, "autopilot: target reached");
        } else {
            info!("autopilot disengaged");
        }
    }

    fn notify(&mut self, event: AutopilotEvent) {
        for observer in &mut self.observers {
            match event {
                AutopilotEvent::Engaged { target } => observer.on_autopilot_engaged(target),
                AutopilotEvent::Disengaged { reached_target } => {
                    observer.on_autopilot_disengaged(reached_target)
                }
                AutopilotEvent::TargetReached => observer.on_autopilot_target_reached(),
            }
        }
    }

    /// Moves the vessel without touching its velocity (external displacement).
    pub fn set_position(&mut self, position: Vec2) {
        self.state.position = position;
    }

    pub fn mode(&self) -> AutopilotMode {
        self.autopilot.mode()
    }

    pub fn autopilot_target(&self) -> Option<Vec2> {
        self.autopilot.mode().target()
    }

    pub fn last_guidance(&self) -> Option<GuidanceReport> {
        self.last_guidance
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn heading(&self) -> f32 {
        self.state.heading
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn speed(&self) -> f32 {
        self.state.current_speed
    }

    pub fn forward(&self) -> Vec2 {
        self.state.forward()
    }

    pub fn thrust(&self) -> ThrustLevels {
        self.state.thrust
    }

    pub fn snapshot(&self) -> VesselSnapshot {
        VesselSnapshot::from(&self.state)
    }
}
