//! Draggable carousel: pointer drag, nearest-slot snap and damped settle.
//!
//! One controller covers every ring variant. `N = 1` is the static single
//! panel (drag disabled); `auto_rotate` and `rotation_override` cover the
//! fixed and spinning rings while no gesture is in progress.

pub mod angle;
mod controller;
mod types;

pub use controller::*;
pub use types::*;

#[cfg(test)]
mod tests;
