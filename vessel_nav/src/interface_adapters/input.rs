// Scripted operator input for headless runs: holds keys over tick windows.

use crate::domain::{ManualInput, ManualInputSource};
use serde::Deserialize;

/// Input held for ticks in `start_tick..end_tick`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct InputWindow {
    pub start_tick: u64,
    pub end_tick: u64,
    #[serde(flatten)]
    pub input: ManualInput,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    windows: Vec<InputWindow>,
    tick: u64,
}

impl ScriptedInput {
    pub fn new(windows: Vec<InputWindow>) -> Self {
        Self { windows, tick: 0 }
    }
}

impl ManualInputSource for ScriptedInput {
    fn poll(&mut self) -> ManualInput {
        let tick = self.tick;
        self.tick += 1;

        // Overlapping windows combine their keys.
        self.windows
            .iter()
            .filter(|window| (window.start_tick..window.end_tick).contains(&tick))
            .fold(ManualInput::IDLE, |held, window| ManualInput {
                forward: held.forward || window.input.forward,
                backward: held.backward || window.input.backward,
                rotate_left: held.rotate_left || window.input.rotate_left,
                rotate_right: held.rotate_right || window.input.rotate_right,
            })
    }
}
