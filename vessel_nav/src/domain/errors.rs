use std::fmt;

// Domain-level errors for vessel configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotFinite { field: &'static str },
    NotPositive { field: &'static str, value: f32 },
    BrakingFactorOutOfRange { value: f32 },
    // Engine power times braking factor is zero, so braking distance is undefined.
    UndefinedBrakingDistance,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite { field } => write!(f, "{field} must be a finite number"),
            ConfigError::NotPositive { field, value } => {
                write!(f, "{field} must be greater than zero (got {value})")
            }
            ConfigError::BrakingFactorOutOfRange { value } => {
                write!(f, "braking_factor must be in (0, 1] (got {value})")
            }
            ConfigError::UndefinedBrakingDistance => write!(
                f,
                "braking distance is undefined: main_engine_power * braking_factor is zero"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
