//! Initial theme resolution.

use crate::store::PreferenceStore;

use super::signal::SystemSignal;
use super::theme::Theme;

/// Where a resolved theme value came from.
///
/// The distinction matters at startup: an ambient-derived value must not be
/// written back to the store, or it would shadow future ambient changes as if
/// the user had chosen it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// An explicit, persisted user choice.
    Stored,
    /// The OS-level preferred color scheme.
    Ambient,
}

/// Resolves the initial theme from the store, falling back to the signal.
///
/// A stored preference always wins over the ambient signal. There are no
/// error conditions: an unreadable or invalid stored value reads as absent,
/// and the signal implementations are infallible.
pub fn resolve_initial<S, G>(store: &S, signal: &G) -> (Theme, ThemeSource)
where
    S: PreferenceStore + ?Sized,
    G: SystemSignal + ?Sized,
{
    match store.load() {
        Some(theme) => (theme, ThemeSource::Stored),
        None => (signal.preferred(), ThemeSource::Ambient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, PreferenceStore};
    use crate::theme::signal::FixedSignal;

    #[test]
    fn test_stored_preference_wins() {
        let mut store = MemoryStore::new();
        store.save(Theme::Light).unwrap();
        let (theme, source) = resolve_initial(&store, &FixedSignal(Theme::Dark));
        assert_eq!(theme, Theme::Light);
        assert_eq!(source, ThemeSource::Stored);
    }

    #[test]
    fn test_empty_store_falls_back_to_signal() {
        let store = MemoryStore::new();
        let (theme, source) = resolve_initial(&store, &FixedSignal(Theme::Dark));
        assert_eq!(theme, Theme::Dark);
        assert_eq!(source, ThemeSource::Ambient);
    }
}
