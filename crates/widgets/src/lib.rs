//! Course-site widgets
//!
//! This crate provides the page widgets that sit alongside search:
//! - ProgressTracker: per-lesson completion persisted through a StateStore
//! - Quiz: multiple-choice quiz state machine with scoring and pass gate
//! - PreferencePanel: accessibility toggles persisted across sessions
//! - TabStrip: tabbed-panel selection with keyboard navigation
//!
//! Widgets own their store handle; nothing lives in ambient globals.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod prefs;
pub mod progress;
pub mod quiz;
pub mod tabs;

pub use prefs::{Preference, PreferencePanel};
pub use progress::{CompletionRecord, ModuleProgress, ProgressTracker};
pub use quiz::{AnswerOutcome, AnswerRecord, FeedbackTone, Question, Quiz, QuizResults, PASS_THRESHOLD};
pub use tabs::{Key, TabStrip};
