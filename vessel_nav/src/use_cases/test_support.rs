use std::sync::{Arc, Mutex};

use crate::domain::{AutopilotObserver, Vec2};
use crate::use_cases::types::AutopilotEvent;

pub(crate) type EventLog = Arc<Mutex<Vec<AutopilotEvent>>>;

// Observer that records every notification for later assertions.
#[derive(Clone, Default)]
pub(crate) struct RecordingObserver {
    events: EventLog,
}

impl RecordingObserver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn events(&self) -> Vec<AutopilotEvent> {
        self.events.lock().expect("event log mutex poisoned").clone()
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
