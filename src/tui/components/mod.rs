//! # TUI Components
//!
//! Presentation pieces used by `ui::draw_ui`. Each one receives its data as
//! props (struct fields) and implements `Component`.
//!
//! - `TitleBar`: breadcrumb and loading spinner
//! - `RecordList`: the record list of a list view
//! - `TextInput`: a labelled single-line field (Search query, Configure)
//! - `HelpBar`: key hints for the active view
//!
//! Components never read `App` directly except `HelpBar::for_app`, which only
//! picks a hint string. Dependencies stay explicit:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TextInput { label: "Search", field: &app.search_query, focused: true }.render(frame, area);
//! ```

mod help_bar;
mod record_list;
mod text_input;
mod title_bar;

pub use help_bar::HelpBar;
pub use record_list::RecordList;
pub use text_input::TextInput;
pub use title_bar::TitleBar;
