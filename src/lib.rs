//! coursekit - embeddable widgets for static course sites
//!
//! coursekit implements the client-side components of a course site as
//! plain library values: full-text page search, a lesson progress tracker,
//! a multiple-choice quiz engine, and UI state controllers (accessibility
//! preferences and tabbed panels). There is no server and no network; the
//! only persistence is a string key-value store standing in for the
//! browser profile.
//!
//! # Quick Start
//!
//! ```
//! use coursekit::{Page, SearchIndex};
//!
//! let html = r#"
//!   <div class="hero"><h1>Python Essentials</h1></div>
//!   <section class="module-section">
//!     <h2>Printing and output</h2>
//!     <p>print(2 ** 3) evaluates to eight.</p>
//!   </section>
//! "#;
//!
//! let mut page = Page::from_html(html, Some("/course/1-python-essentials/index.html"));
//! let index = SearchIndex::build(&mut page);
//!
//! let hits = index.search("print");
//! assert!(hits[0].entry.kind.is_heading());
//! ```

pub use coursekit_core::{
    Error, JsonFileStore, MemoryStore, Result, StateStore, StateStoreExt,
};
pub use coursekit_page::{NodeKind, Page, PageNode};
pub use coursekit_search::{
    icon, result_views, top_highlight_ids, IndexEntry, ResultView, SearchHit, SearchIndex,
    DEFAULT_SECTION_LABEL, HIGHLIGHT_LIMIT, MIN_QUERY_LEN, MIN_TEXT_LEN, PREVIEW_LEN,
    RESULT_LIMIT,
};
pub use coursekit_widgets::{
    AnswerOutcome, AnswerRecord, CompletionRecord, FeedbackTone, Key, ModuleProgress,
    Preference, PreferencePanel, ProgressTracker, Question, Quiz, QuizResults, TabStrip,
    PASS_THRESHOLD,
};
