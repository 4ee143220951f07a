//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Components follow two patterns:
//!
//! ### Stateless components (props-based rendering)
//!
//! Receive everything they draw as struct fields:
//! - `TitleBar`: application name, current category, last notice
//! - `TodoList`: todos of the current category with the cursor row
//! - `StatusLine`: active prompt and typed text, or a key hint
//! - `HelpScreen`: the help text, full screen
//!
//! ### Render wrappers over core state
//!
//! Persistent state lives in `core` (it has to survive between frames and be
//! testable without a terminal); the component borrows it for one frame:
//! - `ReminderPopupView` over `core::popup::ReminderPopup`
//! - `modal::render_modal` draws any `core::window::ModalWindow`
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs
//! ├── todo_list.rs
//! ├── status_line.rs
//! ├── help_screen.rs
//! ├── modal.rs           (shared window chrome)
//! └── reminder_popup.rs
//! ```

mod help_screen;
pub mod modal;
mod reminder_popup;
mod status_line;
mod title_bar;
mod todo_list;

pub use help_screen::HelpScreen;
pub use reminder_popup::ReminderPopupView;
pub use status_line::StatusLine;
pub use title_bar::TitleBar;
pub use todo_list::TodoList;
