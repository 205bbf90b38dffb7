//! Lesson completion tracker
//!
//! This module provides:
//! - CompletionRecord: one completed lesson with its completion date
//! - ProgressTracker: module → lesson → record map over a StateStore
//! - ModuleProgress: per-module completion summary
//!
//! Every mutation persists immediately, so a tracker reloaded over the
//! same store resumes where the previous session left off.

use chrono::{DateTime, Utc};
use coursekit_core::{Result, StateStore, StateStoreExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key the progress map persists under
pub const STORAGE_KEY: &str = "courseProgress";

// ============================================================================
// CompletionRecord
// ============================================================================

/// One completed lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Whether the lesson is complete
    pub completed: bool,
    /// When it was marked complete
    pub date: DateTime<Utc>,
}

impl CompletionRecord {
    /// Record a completion at the current time
    pub fn now() -> Self {
        CompletionRecord {
            completed: true,
            date: Utc::now(),
        }
    }
}

type ProgressMap = BTreeMap<String, BTreeMap<String, CompletionRecord>>;

// ============================================================================
// ModuleProgress
// ============================================================================

/// Completion summary for one module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleProgress {
    /// Lessons marked complete
    pub completed: usize,
    /// Total lessons in the module
    pub total: usize,
}

impl ModuleProgress {
    /// Completion percentage, 0–100
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f32 / self.total as f32) * 100.0
    }
}

// ============================================================================
// ProgressTracker
// ============================================================================

/// Per-lesson completion tracker persisted through a [`StateStore`]
#[derive(Debug)]
pub struct ProgressTracker<S: StateStore> {
    store: S,
    progress: ProgressMap,
}

impl<S: StateStore> ProgressTracker<S> {
    /// Load the tracker from a store
    ///
    /// Missing or unreadable persisted state starts the tracker empty
    /// rather than failing the session.
    pub fn load(store: S) -> Self {
        let progress = match store.get_json::<ProgressMap>(STORAGE_KEY) {
            Ok(Some(map)) => map,
            Ok(None) => ProgressMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable progress state, starting empty");
                ProgressMap::new()
            }
        };
        ProgressTracker { store, progress }
    }

    fn save(&mut self) -> Result<()> {
        self.store.set_json(STORAGE_KEY, &self.progress)
    }

    /// Mark a lesson complete, stamping the current time
    pub fn mark_complete(&mut self, module: &str, lesson: &str) -> Result<()> {
        self.progress
            .entry(module.to_string())
            .or_default()
            .insert(lesson.to_string(), CompletionRecord::now());
        self.save()
    }

    /// Remove a lesson's completion mark
    pub fn unmark(&mut self, module: &str, lesson: &str) -> Result<()> {
        if let Some(lessons) = self.progress.get_mut(module) {
            lessons.remove(lesson);
        }
        self.save()
    }

    /// Check whether a lesson is complete
    pub fn is_complete(&self, module: &str, lesson: &str) -> bool {
        self.progress
            .get(module)
            .and_then(|lessons| lessons.get(lesson))
            .map(|record| record.completed)
            .unwrap_or(false)
    }

    /// Completion summary for a module
    ///
    /// `total_lessons` comes from the caller (the page knows how many
    /// lessons it renders); a zero total is reported as one so a freshly
    /// rendered module shows 0/1 rather than dividing by zero.
    pub fn module_progress(&self, module: &str, total_lessons: usize) -> ModuleProgress {
        let completed = self
            .progress
            .get(module)
            .map(|lessons| lessons.values().filter(|r| r.completed).count())
            .unwrap_or(0);
        ModuleProgress {
            completed,
            total: total_lessons.max(1),
        }
    }

    /// Clear all recorded progress
    pub fn reset(&mut self) -> Result<()> {
        self.progress.clear();
        self.store.remove(STORAGE_KEY)
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the tracker and return its store
    pub fn into_store(self) -> S {
        self.store
    }
}

// ============================================================================
// Tests
// ============================================================================
