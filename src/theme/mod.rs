//! Theme type, ambient signal and initial resolution.
//!
//! This module provides:
//!
//! - [`Theme`]: the two-valued light/dark theme
//! - [`SystemSignal`]: read-only capability for the OS color-scheme signal
//! - [`OsSignal`] / [`FixedSignal`]: production and deterministic signals
//! - [`resolve_initial`] and [`ThemeSource`]: startup resolution rules

mod resolve;
mod signal;
#[allow(clippy::module_inception)]
mod theme;

pub use resolve::{resolve_initial, ThemeSource};
pub use signal::{FixedSignal, OsSignal, SystemSignal};
pub use theme::{Theme, ThemeParseError};
