//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view state,
//! and translates terminal events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One loop owns the [`AppController`]. Background activities never touch
//! state; they only send [`LoopEvent`]s. The loop waits for the first event,
//! drains everything else already queued, handles the batch in order, and
//! then draws once:
//!
//! - **Keys** go to the controller one by one. A batch with at least one key
//!   ends with a single refresh that never moves focus.
//! - **Refresh ticks** collapse into one refresh per batch which hands focus
//!   to the reminder popup when reminders are due.
//! - **Render ticks** only mark the screen dirty.
//!
//! Remote calls are awaited inside the loop, so two refreshes can never
//! overlap and the state is never read while it is being changed.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::{mpsc, watch};

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::controller::AppController;
use crate::tui::event::{LoopEvent, spawn_key_reader, spawn_ticker};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Non-blinking: ratatui's cursor positioning resets the blink timer on every draw.
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Show);
    }
}

pub async fn run(mut controller: AppController, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Could not set cursor style: {e}");
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let key_reader = spawn_key_reader(tx.clone(), shutdown_rx.clone());
    let refresh_ticker = spawn_ticker(
        config.refresh_interval,
        LoopEvent::RefreshTick,
        tx.clone(),
        shutdown_rx.clone(),
    );
    let render_ticker = spawn_ticker(config.render_interval, LoopEvent::RenderTick, tx, shutdown_rx);

    let result = event_loop(&mut terminal, &mut controller, &mut rx).await;

    info!("Shutting down");
    let _ = shutdown_tx.send(true);
    for ticker in [refresh_ticker, render_ticker] {
        if let Err(e) = ticker.await {
            warn!("Ticker task failed: {e}");
        }
    }
    // The reader notices shutdown within one poll interval; wait off the runtime.
    match tokio::task::spawn_blocking(move || key_reader.join()).await {
        Ok(Ok(())) => {}
        Ok(Err(_)) => warn!("Key reader thread panicked"),
        Err(e) => warn!("Key reader join failed: {e}"),
    }

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    controller: &mut AppController,
    rx: &mut mpsc::UnboundedReceiver<LoopEvent>,
) -> std::io::Result<()> {
    let size = terminal.size()?;
    controller
        .dispatch(Action::Resize {
            width: size.width,
            height: size.height,
        })
        .await;
    controller.bootstrap().await;

    let mut needs_redraw = true; // Force first frame

    while !controller.is_stopped() {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, controller.state()))?;
            needs_redraw = false;
        }

        let Some(first_event) = rx.recv().await else {
            warn!("All event sources closed");
            break;
        };

        // Process first event + drain ALL pending events before next draw
        let batch: Vec<LoopEvent> = std::iter::once(first_event)
            .chain(std::iter::from_fn(|| rx.try_recv().ok()))
            .collect();
        needs_redraw |= handle_batch(controller, batch).await;
    }
    Ok(())
}

/// Handle a batch of events in arrival order. Returns whether a redraw is due.
async fn handle_batch(controller: &mut AppController, batch: Vec<LoopEvent>) -> bool {
    let mut needs_redraw = false;
    let mut refresh: Option<Action> = None;

    for event in batch {
        match event {
            LoopEvent::Key(key) => {
                controller.dispatch(Action::Key(key)).await;
                refresh.get_or_insert(Action::Refresh);
                needs_redraw = true;
            }
            LoopEvent::Resize(width, height) => {
                controller.dispatch(Action::Resize { width, height }).await;
                needs_redraw = true;
            }
            LoopEvent::RefreshTick => {
                refresh = Some(Action::RefreshTick);
                needs_redraw = true;
            }
            LoopEvent::RenderTick => needs_redraw = true,
        }
        if controller.is_stopped() {
            return needs_redraw;
        }
    }

    if let Some(action) = refresh {
        debug!("Refreshing ({:?})", action);
        controller.dispatch(action).await;
    }
    needs_redraw
}
