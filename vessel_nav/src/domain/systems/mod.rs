// Per-tick rules: feedback control, approach speed and vessel motion.

pub mod movement;
pub mod pid;
pub mod speed_profile;

pub use pid::PidController;
pub use speed_profile::SpeedProfile;
