pub mod use_custom_lists;
pub mod use_premade_lists;
pub mod use_spin_controller;

pub use use_custom_lists::*;
pub use use_premade_lists::*;
pub use use_spin_controller::*;
