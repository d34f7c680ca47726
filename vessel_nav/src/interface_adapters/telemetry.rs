// Telemetry writers: serialize voyage updates and autopilot events as JSON log lines.

use crate::interface_adapters::protocol::{AutopilotEventDto, TelemetryMessage, VesselUpdateDto};
use crate::use_cases::{AutopilotEvent, VoyageUpdate};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

pub fn encode(msg: &TelemetryMessage) -> Option<String> {
    match serde_json::to_string(msg) {
        Ok(txt) => Some(txt),
        Err(e) => {
            error!(error = ?e, "failed to serialize telemetry");
            None
        }
    }
}

pub async fn vessel_update_writer(mut update_rx: broadcast::Receiver<VoyageUpdate>) {
    loop {
        match update_rx.recv().await {
            Ok(update) => {
                let msg = TelemetryMessage::VesselUpdate(VesselUpdateDto::from(update));
                if let Some(txt) = encode(&msg) {
                    debug!(telemetry = %txt, "vessel update");
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "telemetry writer lagged; skipping to latest update");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

pub async fn autopilot_event_writer(mut event_rx: broadcast::Receiver<AutopilotEvent>) {
    loop {
        match event_rx.recv().await {
            Ok(event) => {
                let msg = TelemetryMessage::Autopilot(AutopilotEventDto::from(event));
                if let Some(txt) = encode(&msg) {
                    info!(telemetry = %txt, "autopilot event");
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "autopilot event writer lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
