// Approach speed profile: cruise, slow down, then creep in over the braking distance.

use crate::domain::errors::ConfigError;
use crate::domain::math::lerp;
use crate::domain::tuning::VesselParameters;

// Speed the vessel still holds at the target itself.
pub const MIN_APPROACH_SPEED: f32 = 20.0;
// Fraction of max speed held at the braking distance.
pub const CAUTION_SPEED_RATIO: f32 = 0.3;

/// Distance needed to brake from `speed`, scaled by a safety multiplier.
pub fn braking_distance(
    speed: f32,
    main_engine_power: f32,
    braking_factor: f32,
    multiplier: f32,
) -> f32 {
    (speed * speed) / (2.0 * main_engine_power * braking_factor) * multiplier
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedProfile {
    max_speed: f32,
    braking_distance: f32,
}

impl SpeedProfile {
    pub fn new(
        max_speed: f32,
        main_engine_power: f32,
        braking_factor: f32,
        braking_distance_multiplier: f32,
    ) -> Result<Self, ConfigError> {
        if main_engine_power * braking_factor == 0.0 {
            return Err(ConfigError::UndefinedBrakingDistance);
        }

        let braking_distance = braking_distance(
            max_speed,
            main_engine_power,
            braking_factor,
            braking_distance_multiplier,
        );
        if !(braking_distance > 0.0 && braking_distance.is_finite()) {
            return Err(ConfigError::UndefinedBrakingDistance);
        }

        Ok(Self {
            max_speed,
            braking_distance,
        })
    }

    pub fn from_parameters(params: &VesselParameters) -> Result<Self, ConfigError> {
        Self::new(
            params.max_speed,
            params.main_engine_power,
            params.braking_factor,
            params.braking_distance_multiplier,
        )
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn braking_distance(&self) -> f32 {
        self.braking_distance
    }

    /// Desired approach speed at `distance` from the target.
    pub fn desired_speed(&self, distance: f32) -> f32 {
        let bd = self.braking_distance;
        let caution_speed = self.max_speed * CAUTION_SPEED_RATIO;

        if distance > bd * 2.0 {
            self.max_speed
        } else if distance > bd {
            lerp(caution_speed, self.max_speed, (distance - bd) / bd)
        } else {
            lerp(MIN_APPROACH_SPEED, caution_speed, distance / bd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_profile() -> SpeedProfile {
        SpeedProfile::from_parameters(&VesselParameters::default()).expect("valid profile")
    }

    #[test]
    fn when_using_default_parameters_then_braking_distance_matches_formula() {
        let profile = default_profile();

        // 500^2 / (2 * 800 * 0.7) * 1.5
        assert!((profile.braking_distance() - 334.821_4).abs() < 1e-2);
    }

    #[test]
    fn when_far_from_target_then_cruises_at_max_speed() {
        let profile = default_profile();

        assert_eq!(profile.desired_speed(5_000.0), 500.0);
        assert_eq!(profile.desired_speed(profile.braking_distance() * 2.0 + 1.0), 500.0);
    }

    #[test]
    fn when_at_target_then_holds_minimum_approach_speed() {
        assert_eq!(default_profile().desired_speed(0.0), MIN_APPROACH_SPEED);
    }

    #[test]
    fn when_at_braking_distance_then_holds_caution_speed() {
        let profile = default_profile();

        let speed = profile.desired_speed(profile.braking_distance());

        assert!((speed - 150.0).abs() < 1e-3);
    }

    #[test]
    fn when_approaching_zone_edges_then_speed_is_continuous() {
        let profile = default_profile();
        let bd = profile.braking_distance();
        let eps = 1e-3;

        let inner = profile.desired_speed(bd - eps);
        let outer = profile.desired_speed(bd + eps);
        assert!((inner - outer).abs() < 0.1);

        let slowing = profile.desired_speed(2.0 * bd - eps);
        let cruising = profile.desired_speed(2.0 * bd + eps);
        assert!((slowing - cruising).abs() < 0.1);
    }

    #[test]
    fn when_distance_grows_then_speed_never_decreases() {
        let profile = default_profile();
        let end = profile.braking_distance() * 2.5;
        let steps = 500;

        let mut previous = profile.desired_speed(0.0);
        for step in 1..=steps {
            let speed = profile.desired_speed(end * step as f32 / steps as f32);
            assert!(speed + 1e-3 >= previous, "speed dropped at step {step}");
            previous = speed;
        }
    }

    #[test]
    fn when_engine_power_is_zero_then_returns_undefined_braking_distance() {
        assert_eq!(
            SpeedProfile::new(500.0, 0.0, 0.7, 1.5),
            Err(ConfigError::UndefinedBrakingDistance)
        );
    }

    #[test]
    fn when_braking_factor_is_zero_then_returns_undefined_braking_distance() {
        assert_eq!(
            SpeedProfile::new(500.0, 800.0, 0.0, 1.5),
            Err(ConfigError::UndefinedBrakingDistance)
        );
    }
}
