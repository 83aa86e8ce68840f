//! Ambient system color-scheme signal.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::theme::Theme;

/// Read-only view of the OS-level preferred color scheme.
///
/// Change notification is pushed by the host: when the platform reports a
/// color-scheme change, the host calls
/// [`ThemeController::system_changed`](crate::ThemeController::system_changed)
/// with the new value. The signal itself only answers the current preference.
pub trait SystemSignal {
    /// The currently preferred theme.
    fn preferred(&self) -> Theme;
}

/// Production signal backed by OS detection.
///
/// # Example
///
/// ```rust,no_run
/// use duotone::{OsSignal, SystemSignal};
///
/// let signal = OsSignal::new();
/// println!("system prefers {}", signal.preferred());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSignal;

impl OsSignal {
    pub fn new() -> Self {
        Self
    }
}

impl SystemSignal for OsSignal {
    fn preferred(&self) -> Theme {
        match detect_os_theme() {
            OsThemeMode::Dark => Theme::Dark,
            OsThemeMode::Light => Theme::Light,
        }
    }
}

/// A signal that always reports the given theme.
///
/// Useful in tests and for hosts that want to force a specific mode.
#[derive(Debug, Clone, Copy)]
pub struct FixedSignal(pub Theme);

impl SystemSignal for FixedSignal {
    fn preferred(&self) -> Theme {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_signal_reports_its_theme() {
        assert_eq!(FixedSignal(Theme::Dark).preferred(), Theme::Dark);
        assert_eq!(FixedSignal(Theme::Light).preferred(), Theme::Light);
    }
}
