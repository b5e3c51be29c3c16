//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: Top status bar showing record status
//! - `SubHeader`, `FormContainer`, `Row`, `RoundedButton`: layout primitives
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit events:
//! - `TextInput`: controlled text field (cursor and scroll only)
//! - `RoundedSelector`: category pills with a keyboard highlight
//! - `ThoughtForm`: the thought record editor composing all of the above
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state. The record a form shows is borrowed for one frame:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ThoughtForm::new(&mut tui.form, &app.thought).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── layout.rs        (FormContainer, SubHeader, Row, RoundedButton)
//! ├── selector.rs      (RoundedSelector)
//! ├── thought_form.rs  (The form view)
//! └── text_input/      (Controlled auto-growing text field)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod layout;
pub mod selector;
pub mod text_input;
pub mod thought_form;
pub use selector::{RoundedSelector, SelectorState};
pub use text_input::{TextInput, TextInputState};
pub use thought_form::{
    FocusHandle, FormCallbacks, FormEvent, FormField, ThoughtForm, ThoughtFormState,
    strip_line_breaks,
};
