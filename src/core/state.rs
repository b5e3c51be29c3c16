//! # Application State
//!
//! Core business state for Reframe. Domain data only, no TUI types.
//! Focus and cursor positions live in the `tui` module.
//!
//! ```text
//! App
//! ├── thought: ThoughtRecord         // the snapshot the form renders
//! ├── saved: Option<ThoughtRecord>   // last snapshot handed to "save"
//! ├── dirty: bool                    // edits since the last save
//! └── status_message: String         // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::thought::ThoughtRecord;

pub struct App {
    pub thought: ThoughtRecord,
    pub saved: Option<ThoughtRecord>,
    pub dirty: bool,
    pub status_message: String,
}

impl App {
    pub fn new(thought: ThoughtRecord) -> Self {
        Self {
            thought,
            saved: None,
            dirty: false,
            status_message: String::from("New thought record"),
        }
    }
}
