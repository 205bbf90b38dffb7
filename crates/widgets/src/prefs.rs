//! Accessibility preference toggles
//!
//! High-contrast, large-text, and reduced-motion flags persisted as
//! "1"/"0" strings so a returning visitor gets their choices reapplied at
//! page load. The page maps each active preference to a body class.

use coursekit_core::{Result, StateStore};

/// Default storage key prefix
pub const DEFAULT_PREFIX: &str = "coursekit-";

// ============================================================================
// Preference
// ============================================================================

/// One accessibility preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    /// High-contrast color scheme
    HighContrast,
    /// Enlarged body text
    LargeText,
    /// Reduced animation and motion
    ReducedMotion,
}

impl Preference {
    /// All preferences, in display order
    pub const ALL: [Preference; 3] = [
        Preference::HighContrast,
        Preference::LargeText,
        Preference::ReducedMotion,
    ];

    /// Stable storage slug, also used as the page's class name
    pub fn slug(&self) -> &'static str {
        match self {
            Preference::HighContrast => "hc",
            Preference::LargeText => "big-text",
            Preference::ReducedMotion => "low-motion",
        }
    }
}

// ============================================================================
// PreferencePanel
// ============================================================================

/// Persisted accessibility toggles over a [`StateStore`]
#[derive(Debug)]
pub struct PreferencePanel<S: StateStore> {
    store: S,
    prefix: String,
}

impl<S: StateStore> PreferencePanel<S> {
    /// Create a panel with the default key prefix
    pub fn new(store: S) -> Self {
        PreferencePanel {
            store,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Builder: set the storage key prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn key(&self, pref: Preference) -> String {
        format!("{}{}", self.prefix, pref.slug())
    }

    /// Check whether a preference is enabled
    pub fn is_enabled(&self, pref: Preference) -> bool {
        self.store.get(&self.key(pref)).as_deref() == Some("1")
    }

    /// Flip a preference, returning its new state
    pub fn toggle(&mut self, pref: Preference) -> Result<bool> {
        let enabled = !self.is_enabled(pref);
        self.set_enabled(pref, enabled)?;
        Ok(enabled)
    }

    /// Set a preference explicitly
    pub fn set_enabled(&mut self, pref: Preference, enabled: bool) -> Result<()> {
        let key = self.key(pref);
        self.store.set(&key, if enabled { "1" } else { "0" })
    }

    /// Preferences currently enabled, for reapplication at page load
    pub fn active(&self) -> Vec<Preference> {
        Preference::ALL
            .into_iter()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }

    /// Consume the panel and return its store
    pub fn into_store(self) -> S {
        self.store
    }
}

// ============================================================================
// Tests
// ============================================================================
