//! Document surface and toggle affordance.
//!
//! The controller never touches a real document. It drives a
//! [`DocumentSurface`]: set one theme attribute on the document root, mount
//! and refresh one toggle control, and flip a transient transition style.
//! [`InMemoryDocument`] implements the capability for tests;
//! [`TermSurface`] renders the same state to a terminal.

use console::{Style, Term};

use crate::theme::Theme;

/// Icon shown on the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    /// Glyph used by text renderings of the control.
    pub fn glyph(self) -> &'static str {
        match self {
            ToggleIcon::Sun => "☀",
            ToggleIcon::Moon => "☾",
        }
    }
}

/// Description of the toggle affordance at a point in time.
///
/// The control always advertises the ALTERNATE theme, i.e. the action the
/// user would trigger next: when the current theme is dark it shows a sun
/// and "Light", when light it shows a moon and "Dark".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleControl {
    pub icon: ToggleIcon,
    pub label: &'static str,
    pub aria_label: &'static str,
    pub title: &'static str,
}

impl ToggleControl {
    /// The control state for the given current theme.
    pub fn for_current(theme: Theme) -> Self {
        let (icon, label) = match theme {
            Theme::Dark => (ToggleIcon::Sun, "Light"),
            Theme::Light => (ToggleIcon::Moon, "Dark"),
        };
        Self {
            icon,
            label,
            aria_label: "Toggle theme",
            title: "Toggle between light and dark theme",
        }
    }
}

/// Capability the controller applies theme state through.
///
/// All methods are infallible: the surface is expected to degrade silently
/// rather than surface errors for a cosmetic feature.
pub trait DocumentSurface {
    /// Sets the theme attribute on the document root. External styling keys
    /// off this value; nothing else in this crate interprets it.
    fn set_theme(&mut self, theme: Theme);

    /// Inserts the toggle control if it is not already present.
    fn mount_toggle(&mut self, control: &ToggleControl);

    /// Refreshes the icon/label of an already-mounted control.
    fn update_toggle(&mut self, control: &ToggleControl);

    /// Enables or clears the transient document-wide transition style.
    /// Clearing an already-clear transition is a no-op.
    fn set_transition(&mut self, enabled: bool);
}

/// Recording surface for unit tests and headless hosts.
///
/// Mirrors the observable document state: the root attribute, the mounted
/// control, and whether the transition style is active.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    theme_attribute: Option<Theme>,
    toggle: Option<ToggleControl>,
    transition_active: bool,
    mount_calls: usize,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of the root theme attribute.
    pub fn theme_attribute(&self) -> Option<Theme> {
        self.theme_attribute
    }

    /// The mounted toggle control, if any.
    pub fn toggle(&self) -> Option<&ToggleControl> {
        self.toggle.as_ref()
    }

    pub fn transition_active(&self) -> bool {
        self.transition_active
    }

    /// How many times a mount actually inserted the control.
    pub fn mount_calls(&self) -> usize {
        self.mount_calls
    }
}

impl DocumentSurface for InMemoryDocument {
    fn set_theme(&mut self, theme: Theme) {
        self.theme_attribute = Some(theme);
    }

    fn mount_toggle(&mut self, control: &ToggleControl) {
        if self.toggle.is_none() {
            self.toggle = Some(*control);
            self.mount_calls += 1;
        }
    }

    fn update_toggle(&mut self, control: &ToggleControl) {
        if self.toggle.is_some() {
            self.toggle = Some(*control);
        }
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition_active = enabled;
    }
}

/// Terminal-backed surface.
///
/// Repaints a single status line describing the applied theme and the
/// toggle action, styled with [`console::Style`]. Write failures are
/// swallowed: a terminal that cannot be written to should not break theme
/// switching.
pub struct TermSurface {
    term: Term,
    mounted: bool,
    theme: Option<Theme>,
    control: Option<ToggleControl>,
}

impl TermSurface {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            mounted: false,
            theme: None,
            control: None,
        }
    }

    fn repaint(&self) {
        let (theme, control) = match (self.theme, self.control) {
            (Some(theme), Some(control)) => (theme, control),
            _ => return,
        };
        let theme_style = match theme {
            Theme::Light => Style::new().black().on_white(),
            Theme::Dark => Style::new().white().on_black(),
        };
        let line = format!(
            "{}  [{} {}]",
            theme_style.apply_to(format!("theme: {}", theme)),
            control.icon.glyph(),
            Style::new().bold().apply_to(control.label),
        );
        let _ = self.term.write_line(&line);
    }
}

impl DocumentSurface for TermSurface {
    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
        self.repaint();
    }

    fn mount_toggle(&mut self, control: &ToggleControl) {
        if !self.mounted {
            self.mounted = true;
            self.control = Some(*control);
            self.repaint();
        }
    }

    fn update_toggle(&mut self, control: &ToggleControl) {
        if self.mounted {
            self.control = Some(*control);
        }
    }

    fn set_transition(&mut self, _enabled: bool) {
        // A terminal repaint is instantaneous; there is nothing to animate.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_advertises_alternate_theme() {
        let from_dark = ToggleControl::for_current(Theme::Dark);
        assert_eq!(from_dark.icon, ToggleIcon::Sun);
        assert_eq!(from_dark.label, "Light");

        let from_light = ToggleControl::for_current(Theme::Light);
        assert_eq!(from_light.icon, ToggleIcon::Moon);
        assert_eq!(from_light.label, "Dark");
    }

    #[test]
    fn test_control_accessible_labeling() {
        let control = ToggleControl::for_current(Theme::Light);
        assert_eq!(control.aria_label, "Toggle theme");
        assert!(!control.title.is_empty());
    }

    #[test]
    fn test_in_memory_mount_is_idempotent() {
        let mut doc = InMemoryDocument::new();
        let control = ToggleControl::for_current(Theme::Light);
        doc.mount_toggle(&control);
        doc.mount_toggle(&control);
        assert_eq!(doc.mount_calls(), 1);
    }

    #[test]
    fn test_in_memory_update_requires_mount() {
        let mut doc = InMemoryDocument::new();
        doc.update_toggle(&ToggleControl::for_current(Theme::Dark));
        assert!(doc.toggle().is_none());
    }

    #[test]
    fn test_in_memory_records_theme_and_transition() {
        let mut doc = InMemoryDocument::new();
        doc.set_theme(Theme::Dark);
        doc.set_transition(true);
        assert_eq!(doc.theme_attribute(), Some(Theme::Dark));
        assert!(doc.transition_active());

        doc.set_transition(false);
        doc.set_transition(false);
        assert!(!doc.transition_active());
    }
}
