use crate::core::prompt::Prompt;
use crate::core::state::{AppMode, ViewState};
use crate::tui::component::Component;
use crate::tui::components::{HelpScreen, ReminderPopupView, StatusLine, TitleBar, TodoList};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draw one frame from the view state.
///
/// ```text
/// ┌ title bar (1) ─────────────────────┐
/// │ todo list                          │
/// │            ┌ popup (when focused) ┐│
/// │            └──────────────────────┘│
/// └ status line (1) ───────────────────┘
/// ```
///
/// The help prompt takes the whole screen instead.
pub fn draw_ui(frame: &mut Frame, state: &ViewState) {
    if let Some(Prompt::Help) = state.prompt() {
        HelpScreen::new(&state.help_text).render(frame, frame.area());
        return;
    }

    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, list_area, status_area] = layout.areas(frame.area());

    let position = (
        state.current_category.map(|i| i + 1).unwrap_or(0),
        state.categories.len(),
    );
    TitleBar::new(
        state.category().map(|c| c.name.clone()),
        position,
        state.notice.clone(),
    )
    .render(frame, title_area);

    TodoList::new(
        &state.todos,
        state.selected,
        state.category().map(|c| c.name.as_str()),
    )
    .render(frame, list_area);

    StatusLine::new(state.prompt()).render(frame, status_area);

    // An unfocused popup stays open but out of sight until a tick refocuses it.
    if state.mode == AppMode::Popup {
        ReminderPopupView::new(&state.popup).render(frame, frame.area());
    }
}
