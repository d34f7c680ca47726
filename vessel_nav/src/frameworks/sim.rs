// Framework bootstrap for the headless simulation runtime.

use crate::domain::{ConfigError, VesselState};
use crate::frameworks::config::{self, ConfigLoadError, Scenario, SimSettings};
use crate::interface_adapters::input::ScriptedInput;
use crate::interface_adapters::telemetry::{autopilot_event_writer, vessel_update_writer};
use crate::use_cases::{AutopilotEvent, VesselController, VoyageReport, VoyageSettings, voyage_task};

use tokio::sync::broadcast;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(scenario: Scenario, settings: SimSettings) -> Result<VoyageReport, ConfigError> {
    scenario.validate()?;
    let state = VesselState::at(scenario.start, scenario.start_heading_deg.to_radians());
    let controller = VesselController::with_state(scenario.vessel, state)?;

    // event_tx: autopilot lifecycle, shared by the voyage loop and the event writer.
    let (event_tx, event_rx) =
        broadcast::channel::<AutopilotEvent>(config::EVENT_BROADCAST_CAPACITY);
    // update_tx: periodic vessel telemetry.
    let (update_tx, update_rx) = broadcast::channel(config::UPDATE_BROADCAST_CAPACITY);

    let event_writer = tokio::spawn(autopilot_event_writer(event_rx));
    let update_writer = tokio::spawn(vessel_update_writer(update_rx));

    let voyage = VoyageSettings {
        tick_interval: settings.tick_interval,
        max_ticks: settings.max_ticks(),
        realtime: settings.realtime,
        telemetry_every: settings.telemetry_every,
        waypoints: scenario.waypoints,
    };
    tracing::info!(
        tick_ms = voyage.tick_interval.as_millis(),
        max_ticks = voyage.max_ticks,
        waypoints = voyage.waypoints.len(),
        "starting voyage"
    );

    // Senders move into the voyage; writers drain and exit once it returns.
    let report = voyage_task(
        controller,
        ScriptedInput::new(scenario.input),
        voyage,
        event_tx,
        update_tx,
    )
    .await;

    for writer in [event_writer, update_writer] {
        if let Err(e) = writer.await {
            tracing::warn!(error = %e, "telemetry writer task failed");
        }
    }

    Ok(report)
}

pub async fn run_with_config() -> Result<VoyageReport, ConfigLoadError> {
    init_runtime();

    let scenario = config::scenario()?;
    if let Some(path) = config::scenario_path() {
        tracing::debug!(path = %path.display(), "scenario loaded");
    }

    Ok(run(scenario, SimSettings::from_env()).await?)
}
