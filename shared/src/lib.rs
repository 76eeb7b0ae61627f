pub mod constants;
pub mod shared_wheel_game;
pub mod spin_lifecycle;
pub mod validation;
pub mod wheel_geometry;
pub mod wheel_palette;
pub mod wheel_rotation;

pub use shared_wheel_game::*;
pub use spin_lifecycle::{
    ContractViolation, SpinCommand, SpinController, SpinError, SpinPhase, SpinTimer, SpinTimings,
};
