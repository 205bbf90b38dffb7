//! Tabbed-panel controller
//!
//! Selection state over an ordered list of panel ids, with wrap-around
//! keyboard navigation and fragment deep-linking. The page applies the
//! hidden/selected bookkeeping this controller reports.

/// Keyboard navigation keys a tab strip responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Previous tab, wrapping to the last
    Left,
    /// Next tab, wrapping to the first
    Right,
    /// First tab
    Home,
    /// Last tab
    End,
}

// ============================================================================
// TabStrip
// ============================================================================

/// Selection state for one tab strip
///
/// Panels are identified by the ids their markup carries; the selected id
/// doubles as the location fragment for deep linking.
#[derive(Debug, Clone)]
pub struct TabStrip {
    panels: Vec<String>,
    selected: usize,
}

impl TabStrip {
    /// Create a strip over panel ids, selecting the first
    pub fn new(panels: Vec<String>) -> Self {
        TabStrip {
            panels,
            selected: 0,
        }
    }

    /// Builder: honor an initial location fragment
    ///
    /// A fragment naming a known panel selects it; anything else keeps the
    /// first panel selected.
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.select_by_id(fragment);
        self
    }

    /// Number of panels
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Check if the strip has no panels
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Id of the selected panel
    pub fn selected(&self) -> Option<&str> {
        self.panels.get(self.selected).map(String::as_str)
    }

    /// Location fragment for the current selection
    pub fn fragment(&self) -> Option<&str> {
        self.selected()
    }

    /// Select a panel by position, ignoring out-of-range indexes
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.panels.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Select a panel by id
    ///
    /// Returns false (selection unchanged) when no panel carries the id.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.panels.iter().position(|p| p == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Apply a navigation key, returning the newly selected id
    pub fn key(&mut self, key: Key) -> Option<&str> {
        if self.panels.is_empty() {
            return None;
        }
        let last = self.panels.len() - 1;
        self.selected = match key {
            Key::Left => {
                if self.selected == 0 {
                    last
                } else {
                    self.selected - 1
                }
            }
            Key::Right => {
                if self.selected == last {
                    0
                } else {
                    self.selected + 1
                }
            }
            Key::Home => 0,
            Key::End => last,
        };
        self.selected()
    }

    /// Panels to hide for the current selection (all but the selected one)
    pub fn hidden_panels(&self) -> Vec<&str> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.selected)
            .map(|(_, p)| p.as_str())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
