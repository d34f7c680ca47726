// Shared helpers for driving a controller through whole scenarios in integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use vessel_nav::VesselController;
use vessel_nav::domain::{AutopilotObserver, ManualInput, Vec2, VesselParameters};
use vessel_nav::use_cases::AutopilotEvent;

pub const DT: f32 = 1.0 / 60.0;

// Observer that records every notification; clones share one log.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<AutopilotEvent>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<AutopilotEvent> {
        self.events.lock().expect("event log mutex poisoned").clone()
    }

    pub fn count(&self, event: AutopilotEvent) -> usize {
        self.events().iter().filter(|e| **e == event).count()
    }

    fn record(&self, event: AutopilotEvent) {
        self.events
            .lock()
            .expect("event log mutex poisoned")
            .push(event);
    }
}

impl AutopilotObserver for RecordingObserver {
    fn on_autopilot_engaged(&mut self, target: Vec2) {
        self.record(AutopilotEvent::Engaged { target });
    }

    fn on_autopilot_disengaged(&mut self, reached_target: bool) {
        self.record(AutopilotEvent::Disengaged { reached_target });
    }

    fn on_autopilot_target_reached(&mut self) {
        self.record(AutopilotEvent::TargetReached);
    }
}

// Default-tuned vessel at the origin with a recorder attached.
pub fn recorded_controller() -> (VesselController, RecordingObserver) {
    let mut controller =
        VesselController::new(VesselParameters::default()).expect("default parameters are valid");
    let recorder = RecordingObserver::default();
    controller.subscribe(recorder.clone());
    (controller, recorder)
}

/// Per-run figures collected while flying toward a single target.
#[derive(Debug, Default)]
pub struct Flight {
    // Tick on which the autopilot reported arrival.
    pub arrived_at: Option<u64>,
    pub arrival_position: Vec2,
    pub max_speed: f32,
    pub max_abs_heading: f32,
}

// Ticks with idle input until arrival or `max_ticks`.
pub fn fly_until_arrival(controller: &mut VesselController, max_ticks: u64) -> Flight {
    let mut flight = Flight::default();
    for tick in 1..=max_ticks {
        controller.tick(DT, ManualInput::IDLE);
        flight.max_speed = flight.max_speed.max(controller.speed().abs());
        flight.max_abs_heading = flight.max_abs_heading.max(controller.heading().abs());
        if !controller.mode().is_engaged() {
            flight.arrived_at = Some(tick);
            flight.arrival_position = controller.position();
            break;
        }
    }
    flight
}
