//! # Loop Events
//!
//! Everything the event loop reacts to arrives as a [`LoopEvent`] on a single
//! channel. Three producers feed it:
//!
//! ```text
//! key reader thread ──(Key/Resize)──┐
//! refresh ticker ────(RefreshTick)──┼──▶ mpsc ──▶ event loop
//! render ticker ─────(RenderTick)───┘
//! ```
//!
//! All three watch the same shutdown flag and exit once it turns `true`.

use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::core::key::Key;

const KEY_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    Key(Key),
    Resize(u16, u16),
    RefreshTick,
    RenderTick,
}

pub type EventSender = mpsc::UnboundedSender<LoopEvent>;

/// Translate a crossterm event. Only key presses count; releases and repeats
/// reported by enhanced keyboards are dropped.
pub fn translate(event: Event) -> Option<LoopEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event).map(LoopEvent::Key),
        Event::Resize(width, height) => Some(LoopEvent::Resize(width, height)),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let key = match key_event.code {
        KeyCode::Char(_) if key_event.modifiers.contains(KeyModifiers::CONTROL) => return None,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        _ => return None,
    };
    Some(key)
}

/// Blocking reader on its own thread. Polls with a short timeout so a shutdown
/// is noticed within one poll interval.
pub fn spawn_key_reader(
    tx: EventSender,
    shutdown: watch::Receiver<bool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !*shutdown.borrow() {
            match event::poll(KEY_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("Terminal poll failed, key reader stopping: {e}");
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    warn!("Terminal read failed, key reader stopping: {e}");
                    break;
                }
            };
            if let Some(loop_event) = translate(event) {
                debug!("Input: {:?}", loop_event);
                if tx.send(loop_event).is_err() {
                    break;
                }
            }
        }
        debug!("Key reader stopped");
    })
}

/// Sends `event` every `period`, starting one period from now.
pub fn spawn_ticker(
    period: Duration,
    event: LoopEvent,
    tx: EventSender,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        debug!("{:?} ticker stopped", event);
    })
}
