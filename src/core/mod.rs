//! # Core Application Logic
//!
//! Manageme's business logic. It knows nothing about any specific UI
//! technology and never talks HTTP directly.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState            │
//!                    │  • Action / Effect      │
//!                    │  • update() (reducer)   │
//!                    │  • AppController        │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌──────────────┐
//!            │    TUI     │            │ RemoteClient │
//!            │  Adapter   │            │   (api/)     │
//!            │ (ratatui)  │            │              │
//!            └────────────┘            └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ViewState` and `AppMode`, everything the screen shows
//! - [`action`]: `Action`, `Effect` and the pure `update()` reducer
//! - [`controller`]: runs effects against the remote client
//! - [`popup`], [`window`]: the reminder popup and the modal window it builds on
//! - [`prompt`]: blocking prompts and the single-line editor
//! - [`time_choice`]: the snooze / schedule time menu
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod controller;
pub mod key;
pub mod popup;
pub mod prompt;
pub mod selection;
pub mod state;
pub mod time_choice;
pub mod window;
