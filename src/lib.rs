//! A library to change the resolution of the primary display on Windows.
//!
//! This library provides an abstraction around the `winuser.h` calls relevant
//! for querying and modifying display settings, behind a [`DisplayService`]
//! trait so the control flow stays testable off-Windows.

mod changer;
mod service;
mod types;

#[cfg(windows)]
mod display;

pub use changer::*;
pub use service::*;
pub use types::*;

#[cfg(windows)]
pub use display::*;
