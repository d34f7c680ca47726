// Observer adapter that forwards autopilot notifications into a broadcast channel.

use crate::domain::{AutopilotObserver, Vec2};
use crate::use_cases::types::AutopilotEvent;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct EventForwarder {
    tx: broadcast::Sender<AutopilotEvent>,
}

impl EventForwarder {
    pub fn new(tx: broadcast::Sender<AutopilotEvent>) -> Self {
        Self { tx }
    }

    fn forward(&self, event: AutopilotEvent) {
        // No receivers is fine; delivery is best-effort.
        let _ = self.tx.send(event);
    }
}

impl AutopilotObserver for EventForwarder {
    fn on_autopilot_engaged(&mut self, target: Vec2) {
        self.forward(AutopilotEvent::Engaged { target });
    }

    fn on_autopilot_disengaged(&mut self, reached_target: bool) {
        self.forward(AutopilotEvent::Disengaged { reached_target });
    }

    fn on_autopilot_target_reached(&mut self) {
        self.forward(AutopilotEvent::TargetReached);
    }
}
