// Domain-level vessel state, operator input and snapshot types.

use crate::domain::math::Vec2;
use serde::{Deserialize, Serialize};

/// Operator control state for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualInput {
    pub forward: bool,
    pub backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl ManualInput {
    pub const IDLE: Self = Self {
        forward: false,
        backward: false,
        rotate_left: false,
        rotate_right: false,
    };
}

/// Normalized thrust levels, each kept in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThrustLevels {
    pub current_forward: f32,
    pub target_forward: f32,
    pub current_rotation: f32,
    pub target_rotation: f32,
}

#[derive(Debug, Clone, Default)]
pub struct VesselState {
    pub position: Vec2,
    // Radians; 0 rad = +X, positive turns clockwise on screen (+Y down).
    pub heading: f32,
    pub velocity: Vec2,
    pub thrust: ThrustLevels,
    // Signed speed along the heading.
    pub current_speed: f32,
}

impl VesselState {
    pub fn at(position: Vec2, heading: f32) -> Self {
        Self {
            position,
            heading,
            ..Default::default()
        }
    }

    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    // Drop any commanded thrust; current levels then decay through inertia.
    pub fn clear_thrust_intent(&mut self) {
        self.thrust.target_forward = 0.0;
        self.thrust.target_rotation = 0.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselSnapshot {
    pub position: Vec2,
    pub heading: f32,
    pub velocity: Vec2,
    pub speed: f32,
    pub thrust: ThrustLevels,
}

impl From<&VesselState> for VesselSnapshot {
    fn from(state: &VesselState) -> Self {
        Self {
            position: state.position,
            heading: state.heading,
            velocity: state.velocity,
            speed: state.current_speed,
            thrust: state.thrust,
        }
    }
}
