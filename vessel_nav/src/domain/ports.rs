use crate::domain::math::Vec2;
use crate::domain::state::ManualInput;

// Port for reading operator input once per simulation tick.
pub trait ManualInputSource {
    fn poll(&mut self) -> ManualInput;
}

impl ManualInputSource for ManualInput {
    fn poll(&mut self) -> ManualInput {
        *self
    }
}

// Port for autopilot lifecycle notifications, invoked synchronously at each transition.
pub trait AutopilotObserver {
    fn on_autopilot_engaged(&mut self, _target: Vec2) {}

    fn on_autopilot_disengaged(&mut self, _reached_target: bool) {}

    fn on_autopilot_target_reached(&mut self) {}
}
