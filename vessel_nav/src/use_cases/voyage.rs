// Voyage loop: flies one vessel through a queue of waypoints at a fixed tick rate.

use crate::domain::{ManualInputSource, Vec2, VesselSnapshot};
use crate::use_cases::arbitration::has_manual_input;
use crate::use_cases::controller::VesselController;
use crate::use_cases::events::EventForwarder;
use crate::use_cases::types::{AutopilotEvent, VoyageUpdate};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{info, warn};

// With no waypoints left, the voyage ends once the vessel is slower than this.
const SETTLED_SPEED: f32 = 1.0;

/// Settings for a single voyage run.
#[derive(Debug, Clone)]
pub struct VoyageSettings {
    /// Fixed simulation step.
    pub tick_interval: Duration,
    /// Hard stop for the loop.
    pub max_ticks: u64,
    /// Pace ticks against the wall clock instead of running flat out.
    pub realtime: bool,
    /// Publish a telemetry update every N ticks (0 disables telemetry).
    pub telemetry_every: u64,
    /// Autopilot targets, flown in order.
    pub waypoints: Vec<Vec2>,
}

#[derive(Debug, Clone)]
pub struct VoyageReport {
    pub ticks: u64,
    pub waypoints_reached: usize,
    pub manual_overrides: usize,
    // True when every waypoint was reached before the tick budget ran out.
    pub completed: bool,
    pub final_snapshot: VesselSnapshot,
}

pub async fn voyage_task<I: ManualInputSource>(
    mut controller: VesselController,
    mut input: I,
    settings: VoyageSettings,
    event_tx: broadcast::Sender<AutopilotEvent>,
    update_tx: broadcast::Sender<VoyageUpdate>,
) -> VoyageReport {
    let mut event_rx = event_tx.subscribe();
    controller.subscribe(EventForwarder::new(event_tx));

    let dt = settings.tick_interval.as_secs_f32();
    let mut pending: VecDeque<Vec2> = settings.waypoints.iter().copied().collect();
    let mut waypoints_reached = 0;
    let mut manual_overrides = 0;
    // Set when the operator took over; the current waypoint is re-engaged on release.
    let mut resume_pending = false;

    if let Some(first) = pending.front().copied() {
        controller.engage_autopilot(first);
    }

    let mut interval = tokio::time::interval(settings.tick_interval);
    let mut tick: u64 = 0;

    while tick < settings.max_ticks {
        if settings.realtime {
            interval.tick().await;
        } else {
            // Let the logging tasks keep up when running flat out.
            tokio::task::yield_now().await;
        }

        let manual = input.poll();
        if resume_pending && !has_manual_input(&manual) {
            resume_pending = false;
            if let Some(target) = pending.front().copied() {
                info!(%target, "resuming waypoint after manual control");
                controller.engage_autopilot(target);
            }
        }

        controller.tick(dt, manual);
        tick += 1;

        // Drain notifications raised during this tick.
        loop {
            match event_rx.try_recv() {
                Ok(AutopilotEvent::TargetReached) => {
                    pending.pop_front();
                    waypoints_reached += 1;
                    if let Some(next) = pending.front().copied() {
                        controller.engage_autopilot(next);
                    }
                }
                Ok(AutopilotEvent::Disengaged {
                    reached_target: false,
                }) => {
                    manual_overrides += 1;
                    resume_pending = true;
                }
                Ok(_) => {}
                Err(TryRecvError::Lagged(missed)) => {
                    warn!(missed, "voyage event receiver lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        if settings.telemetry_every > 0 && tick % settings.telemetry_every == 0 {
            let _ = update_tx.send(VoyageUpdate {
                tick,
                vessel: controller.snapshot(),
                mode: controller.mode(),
            });
        }

        if pending.is_empty()
            && !controller.mode().is_engaged()
            && controller.speed().abs() < SETTLED_SPEED
        {
            break;
        }
    }

    let completed = pending.is_empty();
    if !completed {
        warn!(
            tick,
            remaining = pending.len(),
            "voyage stopped with waypoints remaining"
        );
    }
    info!(tick, waypoints_reached, manual_overrides, "voyage finished");

    VoyageReport {
        ticks: tick,
        waypoints_reached,
        manual_overrides,
        completed,
        final_snapshot: controller.snapshot(),
    }
}
