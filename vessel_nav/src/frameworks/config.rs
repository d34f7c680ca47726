use crate::domain::{ConfigError, Vec2, VesselParameters};
use crate::interface_adapters::input::InputWindow;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fmt, fs, time::Duration};

// Runtime/driver constants (not vessel tuning).

pub const EVENT_BROADCAST_CAPACITY: usize = 64;
pub const UPDATE_BROADCAST_CAPACITY: usize = 128;

pub fn tick_hz() -> u32 {
    env::var("SIM_TICK_HZ")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|hz| *hz > 0)
        .unwrap_or(60)
}

pub fn tick_interval() -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(tick_hz()))
}

pub fn max_duration() -> Duration {
    let secs = env::var("SIM_MAX_SECONDS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(120);
    Duration::from_secs(secs)
}

// Pace ticks against the wall clock (off by default for headless runs).
pub fn realtime() -> bool {
    matches!(
        env::var("SIM_REALTIME").as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

// Publish vessel telemetry every N ticks (0 disables).
pub fn telemetry_every() -> u64 {
    env::var("SIM_TELEMETRY_EVERY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30)
}

pub fn scenario_path() -> Option<PathBuf> {
    env::var("SIM_SCENARIO_PATH")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

/// Driver knobs resolved from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SimSettings {
    pub tick_interval: Duration,
    pub max_duration: Duration,
    pub realtime: bool,
    pub telemetry_every: u64,
}

impl SimSettings {
    pub fn from_env() -> Self {
        Self {
            tick_interval: tick_interval(),
            max_duration: max_duration(),
            realtime: realtime(),
            telemetry_every: telemetry_every(),
        }
    }

    // Whole ticks that fit in the time budget, at least one.
    pub fn max_ticks(&self) -> u64 {
        let step = self.tick_interval.as_secs_f64();
        if step <= 0.0 {
            return 1;
        }
        ((self.max_duration.as_secs_f64() / step).ceil() as u64).max(1)
    }
}

/// Vessel start pose, tuning, waypoints and scripted input for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub start: Vec2,
    pub start_heading_deg: f32,
    pub waypoints: Vec<Vec2>,
    pub vessel: VesselParameters,
    pub input: Vec<InputWindow>,
}

impl Scenario {
    /// Rejects tuning, poses and waypoints the controller cannot fly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vessel.validate()?;
        if !self.start.is_finite() {
            return Err(ConfigError::NotFinite { field: "start" });
        }
        if !self.start_heading_deg.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "start_heading_deg",
            });
        }
        if !self.waypoints.iter().all(|waypoint| waypoint.is_finite()) {
            return Err(ConfigError::NotFinite { field: "waypoints" });
        }
        Ok(())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            start: Vec2::ZERO,
            start_heading_deg: 0.0,
            waypoints: vec![Vec2::new(2000.0, 0.0)],
            vessel: VesselParameters::default(),
            input: Vec::new(),
        }
    }
}

// Errors raised while loading driver configuration.
#[derive(Debug)]
pub enum ConfigLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid(ConfigError),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigLoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            ConfigLoadError::Invalid(e) => write!(f, "invalid scenario: {e}"),
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigLoadError::Io { source, .. } => Some(source),
            ConfigLoadError::Parse { source, .. } => Some(source),
            ConfigLoadError::Invalid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ConfigLoadError {
    fn from(e: ConfigError) -> Self {
        ConfigLoadError::Invalid(e)
    }
}

pub fn parse_scenario(path: &Path, text: &str) -> Result<Scenario, ConfigLoadError> {
    let scenario: Scenario = toml::from_str(text).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    scenario.validate()?;
    Ok(scenario)
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigLoadError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenario(path, &text)
}

// Scenario from SIM_SCENARIO_PATH, or the built-in default run.
pub fn scenario() -> Result<Scenario, ConfigLoadError> {
    match scenario_path() {
        Some(path) => load_scenario(&path),
        None => Ok(Scenario::default()),
    }
}
