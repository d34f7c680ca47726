// Interface adapters: operator input, status panels and telemetry output.

pub mod input;
pub mod panels;
pub mod protocol;
pub mod telemetry;
