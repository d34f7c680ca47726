use crate::domain::tuning::PidGains;

pub const DEFAULT_OUTPUT_LIMIT: f32 = 1.0;
pub const MIN_OUTPUT_LIMIT: f32 = 0.1;

/// Single-input/single-output PID controller with a symmetric output clamp.
///
/// The integral accumulator is clamped to `±output_limit / ki` so the integral
/// term alone never exceeds the output limit. With `ki == 0` the accumulator is
/// left unconstrained.
#[derive(Debug, Clone)]
pub struct PidController {
    gains: PidGains,
    integral: f32,
    previous_error: f32,
    output_limit: f32,
    last_output: f32,
}

impl PidController {
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            integral: 0.0,
            previous_error: 0.0,
            output_limit: DEFAULT_OUTPUT_LIMIT,
            last_output: 0.0,
        }
    }

    pub fn gains(&self) -> PidGains {
        self.gains
    }

    pub fn output_limit(&self) -> f32 {
        self.output_limit
    }

    /// Sets the output limit, floored at [`MIN_OUTPUT_LIMIT`].
    pub fn set_output_limit(&mut self, limit: f32) {
        self.output_limit = limit.max(MIN_OUTPUT_LIMIT);
    }

    pub fn integral(&self) -> f32 {
        self.integral
    }

    pub fn previous_error(&self) -> f32 {
        self.previous_error
    }

    /// Advances the controller by `dt` seconds and returns the clamped output.
    ///
    /// A non-positive or non-finite `dt` leaves the state untouched and returns
    /// the previous output.
    pub fn update(&mut self, setpoint: f32, actual: f32, dt: f32) -> f32 {
        if !(dt > 0.0 && dt.is_finite()) {
            return self.last_output;
        }

        let error = setpoint - actual;
        let p = self.gains.kp * error;

        // Integral with anti-windup.
        self.integral += error * dt;
        if self.gains.ki != 0.0 {
            let bound = (self.output_limit / self.gains.ki).abs();
            self.integral = self.integral.clamp(-bound, bound);
        }
        let i = self.gains.ki * self.integral;

        let d = self.gains.kd * (error - self.previous_error) / dt;
        self.previous_error = error;

        let output = (p + i + d).clamp(-self.output_limit, self.output_limit);
        self.last_output = output;
        output
    }

    /// Clears accumulated state. Gains and the output limit are kept.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.previous_error = 0.0;
        self.last_output = 0.0;
    }
}
