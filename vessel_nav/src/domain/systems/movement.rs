use crate::domain::math::{Vec2, lerp};
use crate::domain::state::VesselState;
use crate::domain::tuning::VesselParameters;

// Target rotation below this counts as "stop turning".
const ROTATION_DEADBAND: f32 = 0.01;

pub fn tick_vessel(state: &mut VesselState, params: &VesselParameters, dt: f32) {
    apply_inertia(state, params, dt);
    compute_movement(state, params, dt);
    integrate_position(state, dt);
}

// Lag current thrust levels toward their targets (first-order filter per axis).
pub fn apply_inertia(state: &mut VesselState, params: &VesselParameters, dt: f32) {
    let thrust = &mut state.thrust;

    thrust.current_forward = lerp(
        thrust.current_forward,
        thrust.target_forward,
        params.acceleration_response * dt,
    )
    .clamp(-1.0, 1.0);

    // Rotation sheds faster than it builds up.
    let braking = thrust.current_rotation.abs() > thrust.target_rotation.abs()
        || thrust.target_rotation.abs() < ROTATION_DEADBAND;
    let response = if braking {
        params.rotation_brake_response
    } else {
        params.rotation_acceleration_response
    };
    thrust.current_rotation = lerp(thrust.current_rotation, thrust.target_rotation, response * dt)
        .clamp(-1.0, 1.0);
}

pub fn compute_movement(state: &mut VesselState, params: &VesselParameters, dt: f32) {
    // rotation
    state.heading += state.thrust.current_rotation * params.rotation_engine_power * dt;

    // direction (0 rad = +X)
    let forward = Vec2::from_angle(state.heading);

    // Without commanded thrust the vessel coasts down toward a small residual.
    let target_speed = if state.thrust.target_forward != 0.0 {
        state.thrust.current_forward * params.max_speed
    } else {
        state.thrust.current_forward * params.braking_factor
    };

    state.current_speed = lerp(
        state.current_speed,
        target_speed,
        params.acceleration_response * dt,
    );
    state.velocity = forward * state.current_speed;
}

pub fn integrate_position(state: &mut VesselState, dt: f32) {
    state.position += state.velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn when_full_forward_thrust_is_held_then_speed_approaches_max_speed() {
        let params = VesselParameters::default();
        let mut state = VesselState::default();
        state.thrust.target_forward = 1.0;

        for _ in 0..(60 * 10) {
            tick_vessel(&mut state, &params, DT);
        }

        assert!(state.current_speed > 495.0);
        assert!(state.current_speed <= params.max_speed);
        assert!(state.velocity.x > 495.0);
        assert!(state.velocity.y.abs() < 1e-3);
        assert!(state.position.x > 0.0);
    }

    #[test]
    fn when_thrust_is_released_then_vessel_coasts_to_rest() {
        let params = VesselParameters::default();
        let mut state = VesselState::default();
        state.thrust.target_forward = 1.0;
        for _ in 0..(60 * 5) {
            tick_vessel(&mut state, &params, DT);
        }

        state.clear_thrust_intent();
        for _ in 0..(60 * 10) {
            tick_vessel(&mut state, &params, DT);
        }

        assert!(state.current_speed.abs() < 1.0);
    }

    #[test]
    fn when_rotation_builds_up_then_acceleration_response_is_used() {
        let params = VesselParameters::default();
        let mut state = VesselState::default();
        state.thrust.target_rotation = 1.0;

        apply_inertia(&mut state, &params, 0.1);

        // lerp(0, 1, 1.0 * 0.1)
        assert!((state.thrust.current_rotation - 0.1).abs() < 1e-6);
    }

    #[test]
    fn when_rotation_is_released_then_brake_response_is_used() {
        let params = VesselParameters::default();
        let mut state = VesselState::default();
        state.thrust.current_rotation = 1.0;
        state.thrust.target_rotation = 0.0;

        apply_inertia(&mut state, &params, 0.1);

        // lerp(1, 0, 2.0 * 0.1)
        assert!((state.thrust.current_rotation - 0.8).abs() < 1e-6);
    }

    #[test]
    fn when_rotation_target_is_weaker_than_current_then_brake_response_is_used() {
        let params = VesselParameters::default();
        let mut state = VesselState::default();
        state.thrust.current_rotation = -1.0;
        state.thrust.target_rotation = 0.5;

        apply_inertia(&mut state, &params, 0.1);

        // lerp(-1, 0.5, 2.0 * 0.1)
        assert!((state.thrust.current_rotation + 0.7).abs() < 1e-6);
    }

    #[test]
    fn when_response_times_dt_exceeds_one_then_thrust_stays_in_range() {
        let params = VesselParameters {
            acceleration_response: 50.0,
            rotation_brake_response: 50.0,
            ..Default::default()
        };
        let mut state = VesselState::default();
        state.thrust.target_forward = -1.0;
        state.thrust.current_rotation = 1.0;

        apply_inertia(&mut state, &params, 0.1);

        assert_eq!(state.thrust.current_forward, -1.0);
        assert!(state.thrust.current_rotation.abs() <= 1.0);
    }

    #[test]
    fn when_rotation_thrust_is_applied_then_heading_turns_by_engine_power() {
        let params = VesselParameters::default();
        let mut state = VesselState::default();
        state.thrust.current_rotation = 0.5;

        compute_movement(&mut state, &params, 0.1);

        // 0.5 * 3.0 * 0.1
        assert!((state.heading - 0.15).abs() < 1e-6);
    }

    #[test]
    fn when_moving_then_position_integrates_velocity() {
        let mut state = VesselState::default();
        state.velocity = Vec2::new(10.0, -20.0);

        integrate_position(&mut state, 0.5);

        assert_eq!(state.position, Vec2::new(5.0, -10.0));
    }
}
