//! # Duotone - Light/Dark Theme Preference Management
//!
//! Duotone owns a binary theme preference for the lifetime of a document or
//! app session. It provides:
//!
//! - **Initial resolution** from a persisted choice or the OS color scheme
//! - **Persistence** of explicit choices under one fixed key
//! - **Toggling** with a transient 300 ms transition effect
//! - **Ambient synchronization** (OS changes win only until the user chooses)
//! - **Toggle affordance state** (icon + label always advertise the next action)
//!
//! This crate is **host-agnostic**: it never touches a real document or
//! window. The host supplies three small capabilities and forwards events:
//!
//! - [`PreferenceStore`]: read/write the one persisted entry
//! - [`SystemSignal`]: read the OS preferred color scheme
//! - [`DocumentSurface`]: set the root theme attribute, mount/refresh the
//!   toggle control, flip the transition style
//!
//! ## Quick Start
//!
//! ```rust
//! use duotone::{
//!     FixedSignal, InMemoryDocument, MemoryStore, PreferenceStore, Theme,
//!     ThemeController,
//! };
//!
//! let mut controller = ThemeController::new(
//!     MemoryStore::new(),
//!     FixedSignal(Theme::Dark),
//!     InMemoryDocument::new(),
//! );
//! controller.initialize();
//!
//! // No stored choice: the ambient signal decides, and the toggle
//! // advertises the alternate action.
//! assert_eq!(controller.current(), Theme::Dark);
//! assert_eq!(controller.surface().toggle().unwrap().label, "Light");
//!
//! // The user toggles; the choice is now explicit and persisted.
//! controller.activate();
//! assert_eq!(controller.current(), Theme::Light);
//! assert_eq!(controller.store().load(), Some(Theme::Light));
//! ```
//!
//! ## Against a Real Host
//!
//! ```rust,no_run
//! use std::time::Instant;
//! use duotone::{FileStore, KeyEvent, OsSignal, TermSurface, ThemeController};
//!
//! let mut controller = ThemeController::new(
//!     FileStore::new("/home/user/.config/myapp/preferences.json"),
//!     OsSignal::new(),
//!     TermSurface::stdout(),
//! );
//! controller.initialize();
//!
//! // Inside the host event loop:
//! controller.handle_key(&KeyEvent { key: 'T', ctrl: true, meta: false, shift: true });
//! controller.tick(Instant::now());
//! ```
//!
//! ## Styling Contract
//!
//! The controller's only outward interface is the theme attribute it sets
//! through [`DocumentSurface::set_theme`]. Visual styling is driven by an
//! external layer keyed off that attribute; the [`tokens`] module carries the
//! declarative token mapping that layer consumes.

mod controller;
mod store;
mod surface;
mod theme;
pub mod tokens;

pub use controller::{KeyEvent, ThemeController, TRANSITION_DURATION};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, PREFERENCE_KEY};
pub use surface::{DocumentSurface, InMemoryDocument, TermSurface, ToggleControl, ToggleIcon};
pub use theme::{
    resolve_initial, FixedSignal, OsSignal, SystemSignal, Theme, ThemeParseError, ThemeSource,
};
