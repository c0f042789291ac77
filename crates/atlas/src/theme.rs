//! Dark/light theme state.
//!
//! [`ThemeState`] owns the flag and keeps its two mirrors in step: the persisted
//! value in a [`ThemeStorage`] and the presentation classes on a [`ClassList`].
//! Every change goes through [`ThemeState::set`], which mutates and then
//! synchronously persists and re-applies.

use std::fmt;

use crate::errors::StorageError;

/// Key under which the theme is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Media query reporting the system's dark color scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The persisted form, which is also the class name on the document root.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads a persisted value. Only `"dark"` selects dark; any other value is light.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw string key-value storage, e.g. browser local storage.
pub trait ThemeStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// A set of class names, e.g. the class list of the document root element.
pub trait ClassList {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
}

/// Reports the ambient color scheme preference.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

impl<F: Fn() -> bool> ColorSchemeProbe for F {
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Puts exactly one of the two theme classes on `list`.
pub fn apply_theme(list: &impl ClassList, theme: Theme) {
    list.add(theme.as_str());
    list.remove(theme.toggled().as_str());
}

pub struct ThemeState<S, C> {
    theme: Theme,
    initialized: bool,
    storage: S,
    classes: C,
}

impl<S: ThemeStorage, C: ClassList> ThemeState<S, C> {
    /// Creates a light, uninitialized holder. Nothing is read or applied until [`Self::init`].
    pub fn new(storage: S, classes: C) -> Self {
        Self {
            theme: Theme::Light,
            initialized: false,
            storage,
            classes,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Resolves the theme from storage, falling back to `probe` when nothing
    /// is stored, and applies it. Only the first call has any effect.
    pub fn init(&mut self, probe: &impl ColorSchemeProbe) -> Theme {
        if self.initialized {
            return self.theme;
        }
        self.initialized = true;

        let stored = self
            .storage
            .load(STORAGE_KEY)
            .filter(|raw| !raw.is_empty())
            .map(|raw| Theme::from_stored(&raw));

        let resolved = match stored {
            Some(theme) => {
                tracing::debug!("Theme {theme} restored from storage");
                theme
            }
            None => {
                let theme = Theme::from_dark(probe.prefers_dark());
                tracing::debug!("Theme {theme} taken from system preference");
                theme
            }
        };

        if resolved != self.theme {
            self.set(resolved);
        } else {
            apply_theme(&self.classes, self.theme);
        }
        self.theme
    }

    /// Sets the flag. When the value changes, it is persisted and re-applied
    /// before returning.
    pub fn set(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.commit();
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        tracing::info!("Theme toggled to {}", self.theme);
        self.theme
    }

    fn commit(&self) {
        if let Err(err) = self.storage.save(STORAGE_KEY, self.theme.as_str()) {
            tracing::warn!("Failed to persist theme: {err}");
        }
        apply_theme(&self.classes, self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.0.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self, key: &str) -> Option<String> {
            self.get(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[derive(Clone, Default)]
    struct MemoryClasses(Rc<RefCell<BTreeSet<String>>>);

    impl MemoryClasses {
        fn snapshot(&self) -> Vec<String> {
            self.0.borrow().iter().cloned().collect()
        }

        fn has_exactly_one_theme(&self) -> bool {
            let classes = self.0.borrow();
            classes.contains("dark") != classes.contains("light")
        }
    }

    impl ClassList for MemoryClasses {
        fn add(&self, class: &str) {
            self.0.borrow_mut().insert(class.to_string());
        }

        fn remove(&self, class: &str) {
            self.0.borrow_mut().remove(class);
        }
    }

    fn prefers_dark() -> bool {
        true
    }

    fn prefers_light() -> bool {
        false
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("DARK"), Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let classes = MemoryClasses::default();
        apply_theme(&classes, Theme::Dark);
        apply_theme(&classes, Theme::Dark);
        assert_eq!(classes.snapshot(), vec!["dark".to_string()]);
    }

    #[test]
    fn test_apply_keeps_unrelated_classes() {
        let classes = MemoryClasses::default();
        classes.add("antialiased");
        apply_theme(&classes, Theme::Light);
        apply_theme(&classes, Theme::Dark);
        assert_eq!(
            classes.snapshot(),
            vec!["antialiased".to_string(), "dark".to_string()]
        );
    }

    #[test]
    fn test_init_falls_back_to_dark_preference() {
        let storage = MemoryStorage::default();
        let classes = MemoryClasses::default();
        let mut state = ThemeState::new(storage.clone(), classes.clone());

        assert_eq!(state.init(&prefers_dark), Theme::Dark);
        assert!(state.is_dark());
        assert_eq!(classes.snapshot(), vec!["dark".to_string()]);
        assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_init_light_preference_applies_without_persisting() {
        let storage = MemoryStorage::default();
        let classes = MemoryClasses::default();
        let mut state = ThemeState::new(storage.clone(), classes.clone());

        assert_eq!(state.init(&prefers_light), Theme::Light);
        assert_eq!(classes.snapshot(), vec!["light".to_string()]);
        assert_eq!(storage.get(STORAGE_KEY), None);
    }

    #[test]
    fn test_init_prefers_stored_value_over_system() {
        let storage = MemoryStorage::with(STORAGE_KEY, "light");
        let classes = MemoryClasses::default();
        let mut state = ThemeState::new(storage, classes.clone());

        assert_eq!(state.init(&prefers_dark), Theme::Light);
        assert_eq!(classes.snapshot(), vec!["light".to_string()]);
    }

    #[test]
    fn test_init_reads_unexpected_stored_value_as_light() {
        let storage = MemoryStorage::with(STORAGE_KEY, "DARK");
        let classes = MemoryClasses::default();
        let mut state = ThemeState::new(storage.clone(), classes.clone());

        assert_eq!(state.init(&prefers_dark), Theme::Light);
        assert_eq!(classes.snapshot(), vec!["light".to_string()]);
        assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("DARK"));
    }

    #[test]
    fn test_init_treats_empty_stored_value_as_absent() {
        let storage = MemoryStorage::with(STORAGE_KEY, "");
        let mut state = ThemeState::new(storage.clone(), MemoryClasses::default());

        assert_eq!(state.init(&prefers_dark), Theme::Dark);
        assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_init_runs_once() {
        let storage = MemoryStorage::default();
        let mut state = ThemeState::new(storage.clone(), MemoryClasses::default());

        state.init(&prefers_light);
        state.toggle();
        assert_eq!(state.init(&prefers_light), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trips_through_storage() {
        let storage = MemoryStorage::default();
        let mut state = ThemeState::new(storage.clone(), MemoryClasses::default());
        state.init(&prefers_light);
        assert!(!state.is_dark());

        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("dark"));

        let classes = MemoryClasses::default();
        let mut reloaded = ThemeState::new(storage, classes.clone());
        assert_eq!(reloaded.init(&prefers_light), Theme::Dark);
        assert!(reloaded.is_dark());
        assert_eq!(classes.snapshot(), vec!["dark".to_string()]);
    }

    #[test]
    fn test_exactly_one_class_across_operations() {
        let classes = MemoryClasses::default();
        let mut state = ThemeState::new(MemoryStorage::default(), classes.clone());
        state.init(&prefers_dark);
        assert!(classes.has_exactly_one_theme());

        for _ in 0..5 {
            state.toggle();
            assert!(classes.has_exactly_one_theme());
            assert_eq!(classes.0.borrow().contains("dark"), state.is_dark());
        }

        state.set(state.theme());
        assert!(classes.has_exactly_one_theme());
    }

    #[test]
    fn test_storage_failure_is_not_surfaced() {
        let classes = MemoryClasses::default();
        let mut state = ThemeState::new(BrokenStorage, classes.clone());
        state.init(&prefers_light);

        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(classes.snapshot(), vec!["dark".to_string()]);
    }
}
