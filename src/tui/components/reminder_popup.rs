//! # ReminderPopup Component
//!
//! Transient render wrapper over the persistent [`ReminderPopup`] state from
//! core. Lists the due reminders with their due time in the user's zone,
//! highlights the cursor, and swaps the hint line for the time menu while a
//! snooze choice is pending.

use crate::api::Reminder;
use crate::core::popup::{PopupStage, ReminderPopup};
use crate::core::time_choice::TimeChoice;
use crate::tui::component::Component;
use crate::tui::components::modal::render_modal;
use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

const LIST_HINT: &str = "j/k move  a acknowledge  s snooze  Esc hide";

pub struct ReminderPopupView<'a> {
    popup: &'a ReminderPopup,
}

impl<'a> ReminderPopupView<'a> {
    pub fn new(popup: &'a ReminderPopup) -> Self {
        Self { popup }
    }
}

impl Component for ReminderPopupView<'_> {
    fn render(&mut self, frame: &mut Frame, _area: Rect) {
        if !self.popup.is_open() {
            return;
        }
        let content = render_modal(frame, self.popup.window());

        let footer_height = match self.popup.stage() {
            PopupStage::List => 1,
            PopupStage::SnoozeMenu => 1 + TimeChoice::ALL.len() as u16,
        };
        let [list_area, footer_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .areas(content);

        let items: Vec<ListItem> = self
            .popup
            .reminders()
            .iter()
            .map(|reminder| ListItem::new(reminder_line(reminder)))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(self.popup.selected()));
        frame.render_stateful_widget(list, list_area, &mut list_state);

        let footer = match self.popup.stage() {
            PopupStage::List => Paragraph::new(Line::from(Span::styled(
                LIST_HINT,
                Style::default().fg(Color::DarkGray),
            ))),
            PopupStage::SnoozeMenu => {
                let mut lines = vec![Line::from(Span::styled(
                    "Snooze until...",
                    Style::default().add_modifier(Modifier::BOLD),
                ))];
                lines.extend(TimeChoice::ALL.iter().map(|choice| {
                    Line::from(vec![
                        Span::styled(
                            format!("  {}", choice.digit()),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::raw(format!(") {}", choice.label())),
                    ])
                }));
                Paragraph::new(lines).wrap(Wrap { trim: false })
            }
        };
        frame.render_widget(footer, footer_area);
    }
}

fn reminder_line(reminder: &Reminder) -> Line<'static> {
    let due = reminder
        .due_time
        .map(|t| t.with_timezone(&Local).format("%a %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string());
    Line::from(vec![
        Span::styled(format!("{due:<9} "), Style::default().fg(Color::DarkGray)),
        Span::raw(reminder.content.clone()),
    ])
}
