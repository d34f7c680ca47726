use crate::domain::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Proportional, integral and derivative gains for one control axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PidGains {
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
}

impl PidGains {
    pub const fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self { kp, ki, kd }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if [self.kp, self.ki, self.kd].iter().all(|gain| gain.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::NotFinite { field })
        }
    }
}

/// Gameplay tuning for a single vessel.
///
/// Keep this separate from runtime/driver configuration (tick rates, waypoints, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselParameters {
    /// Main engine power; sets how hard the vessel can brake on approach.
    pub main_engine_power: f32,

    /// Turn rate in radians per second at full rotation thrust.
    pub rotation_engine_power: f32,

    /// Maximum forward speed in world units per second.
    pub max_speed: f32,

    /// Passive deceleration factor in (0, 1], used when no thrust is commanded.
    pub braking_factor: f32,

    /// How fast forward thrust and speed follow their targets (per second).
    pub acceleration_response: f32,

    /// How fast rotation thrust builds up (per second).
    pub rotation_acceleration_response: f32,

    /// How fast rotation thrust decays (per second).
    pub rotation_brake_response: f32,

    /// Distance at which the autopilot considers the target reached.
    pub arrival_threshold: f32,

    /// Safety margin applied to the computed braking distance.
    pub braking_distance_multiplier: f32,

    pub heading_gains: PidGains,
    pub throttle_gains: PidGains,
}

impl Default for VesselParameters {
    fn default() -> Self {
        Self {
            main_engine_power: 800.0,
            rotation_engine_power: 3.0,
            max_speed: 500.0,
            braking_factor: 0.7,
            acceleration_response: 2.0,
            rotation_acceleration_response: 1.0,
            rotation_brake_response: 2.0,
            arrival_threshold: 50.0,
            braking_distance_multiplier: 1.5,
            heading_gains: PidGains::new(0.8, 0.05, 0.5),
            throttle_gains: PidGains::new(0.5, 0.02, 0.3),
        }
    }
}

impl VesselParameters {
    /// Checks the construction-time constraints of every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("main_engine_power", self.main_engine_power)?;
        finite("rotation_engine_power", self.rotation_engine_power)?;
        positive("max_speed", self.max_speed)?;
        if !(self.braking_factor > 0.0 && self.braking_factor <= 1.0) {
            return Err(ConfigError::BrakingFactorOutOfRange {
                value: self.braking_factor,
            });
        }
        positive("acceleration_response", self.acceleration_response)?;
        positive(
            "rotation_acceleration_response",
            self.rotation_acceleration_response,
        )?;
        positive("rotation_brake_response", self.rotation_brake_response)?;
        positive("arrival_threshold", self.arrival_threshold)?;
        positive(
            "braking_distance_multiplier",
            self.braking_distance_multiplier,
        )?;
        self.heading_gains.validate("heading_gains")?;
        self.throttle_gains.validate("throttle_gains")
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_using_defaults_then_parameters_are_valid() {
        assert_eq!(VesselParameters::default().validate(), Ok(()));
    }

    #[test]
    fn when_braking_factor_is_zero_then_returns_out_of_range() {
        let params = VesselParameters {
            braking_factor: 0.0,
            ..Default::default()
        };

        assert_eq!(
            params.validate(),
            Err(ConfigError::BrakingFactorOutOfRange { value: 0.0 })
        );
    }

    #[test]
    fn when_braking_factor_exceeds_one_then_returns_out_of_range() {
        let params = VesselParameters {
            braking_factor: 1.5,
            ..Default::default()
        };

        assert!(matches!(
            params.validate(),
            Err(ConfigError::BrakingFactorOutOfRange { .. })
        ));
    }

    #[test]
    fn when_main_engine_power_is_zero_then_returns_not_positive() {
        let params = VesselParameters {
            main_engine_power: 0.0,
            ..Default::default()
        };

        assert_eq!(
            params.validate(),
            Err(ConfigError::NotPositive {
                field: "main_engine_power",
                value: 0.0
            })
        );
    }

    #[test]
    fn when_gain_is_nan_then_returns_not_finite() {
        let params = VesselParameters {
            throttle_gains: PidGains::new(0.5, f32::NAN, 0.3),
            ..Default::default()
        };

        assert_eq!(
            params.validate(),
            Err(ConfigError::NotFinite {
                field: "throttle_gains"
            })
        );
    }

    #[test]
    fn when_integral_gain_is_zero_then_parameters_are_still_valid() {
        let params = VesselParameters {
            heading_gains: PidGains::new(0.8, 0.0, 0.5),
            ..Default::default()
        };

        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn when_parsing_partial_toml_then_missing_fields_use_defaults() {
        let params: VesselParameters = toml::from_str(
            r#"
            max_speed = 300.0

            [throttle_gains]
            kp = 0.7
            "#,
        )
        .expect("partial tuning should parse");

        assert_eq!(params.max_speed, 300.0);
        assert_eq!(params.main_engine_power, 800.0);
        assert_eq!(params.throttle_gains, PidGains::new(0.7, 0.0, 0.0));
    }
}
