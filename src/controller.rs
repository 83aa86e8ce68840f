//! The theme preference controller.

use std::time::{Duration, Instant};

use crate::store::PreferenceStore;
use crate::surface::{DocumentSurface, ToggleControl};
use crate::theme::{resolve_initial, SystemSignal, Theme};

/// How long the document-wide transition style stays active after a toggle.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// A key press as reported by the host.
///
/// `key` is the logical key character, upper-cased for letters the way
/// browser key events report shifted letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    /// True for the toggle chord: Ctrl+Shift+T or Cmd+Shift+T.
    fn is_toggle_chord(&self) -> bool {
        (self.ctrl || self.meta) && self.shift && self.key == 'T'
    }
}

/// Owns the current theme, the toggle affordance and the synchronization
/// rules between the persisted preference, the ambient signal and the
/// document.
///
/// The controller is explicitly constructed from its three capabilities and
/// lives for the document session. It is single-threaded and event-driven:
/// the host forwards activation, key and ambient-change events, and pumps
/// [`tick`](ThemeController::tick) from its event loop so the transient
/// transition style gets cleared.
///
/// # Example
///
/// ```rust
/// use duotone::{
///     FixedSignal, InMemoryDocument, MemoryStore, Theme, ThemeController,
/// };
///
/// let mut controller = ThemeController::new(
///     MemoryStore::new(),
///     FixedSignal(Theme::Dark),
///     InMemoryDocument::new(),
/// );
/// controller.initialize();
/// assert_eq!(controller.current(), Theme::Dark);
///
/// controller.activate();
/// assert_eq!(controller.current(), Theme::Light);
/// ```
pub struct ThemeController<S, G, D> {
    store: S,
    signal: G,
    surface: D,
    current: Theme,
    transition_until: Option<Instant>,
}

impl<S, G, D> ThemeController<S, G, D>
where
    S: PreferenceStore,
    G: SystemSignal,
    D: DocumentSurface,
{
    /// Creates a controller. The document is not touched until
    /// [`initialize`](ThemeController::initialize).
    pub fn new(store: S, signal: G, surface: D) -> Self {
        Self {
            store,
            signal,
            surface,
            current: Theme::default(),
            transition_until: None,
        }
    }

    /// Resolves the initial theme, applies it and mounts the toggle.
    ///
    /// An ambient-derived initial value is applied without persisting it:
    /// only explicit user actions write the store, so the ambient signal
    /// keeps being honored until the user actually chooses.
    pub fn initialize(&mut self) {
        let (theme, _source) = resolve_initial(&self.store, &self.signal);
        self.apply_resolved(theme);
        self.surface
            .mount_toggle(&ToggleControl::for_current(theme));
    }

    /// The currently applied theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Applies an explicit theme choice.
    ///
    /// Sets the document attribute, persists the choice under the fixed
    /// preference key and refreshes the toggle to advertise the alternate
    /// theme. A failed save is absorbed: the in-memory and document state
    /// stay correct for the session.
    pub fn apply(&mut self, theme: Theme) {
        self.apply_resolved(theme);
        let _ = self.store.save(theme);
    }

    /// Switches to the other theme with a transient visual transition.
    pub fn toggle(&mut self) {
        self.apply(self.current.inverse());
        self.surface.set_transition(true);
        self.transition_until = Some(Instant::now() + TRANSITION_DURATION);
    }

    /// Clears the transition style once its deadline has passed.
    ///
    /// Safe to call at any cadence; clearing an already-clear transition is
    /// a no-op, and a toggle before the deadline simply extends it.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.transition_until {
            if now >= deadline {
                self.surface.set_transition(false);
                self.transition_until = None;
            }
        }
    }

    /// Reacts to an ambient system color-scheme change.
    ///
    /// An explicit persisted preference always wins: the ambient value is
    /// applied (without persisting) only when no stored preference exists.
    pub fn system_changed(&mut self, ambient: Theme) {
        if self.store.load().is_none() {
            self.apply_resolved(ambient);
        }
    }

    /// Direct activation of the toggle affordance.
    pub fn activate(&mut self) {
        self.toggle();
    }

    /// Handles a key press, toggling on Ctrl/Cmd+Shift+T.
    ///
    /// Returns `true` when the chord matched and the host should suppress
    /// its default handling of the combination.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.is_toggle_chord() {
            self.toggle();
            true
        } else {
            false
        }
    }

    /// View of the document surface, for hosts and tests.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// View of the preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply_resolved(&mut self, theme: Theme) {
        self.surface.set_theme(theme);
        self.current = theme;
        self.surface
            .update_toggle(&ToggleControl::for_current(theme));
    }
}
