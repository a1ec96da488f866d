//! Application lifecycle management.
//!
//! - `new()` builds the controller on the conversion screen
//! - `run()` is the main event loop

use std::sync::Arc;
use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::constants::TICK_RATE;
use crate::domain::Catalog;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, ConverterState, OperationGuard, Screen, UiState};

impl App {
    /// Creates a controller showing a fresh conversion screen.
    #[must_use]
    pub fn new(config: AppConfig, catalog: Arc<Catalog>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            screen: Screen::Converter(ConverterState::new(&catalog)),
            catalog,
            config,
            ui: UiState::new(),
            exit: false,
            animation_tick: 0,
            operations: OperationGuard::new(),
            message_tx,
            message_rx,
        }
    }

    /// Runs the main application loop until the user quits.
    ///
    /// Must be called from within a tokio runtime; simulated operations are
    /// spawned onto it.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        if let Ok((width, height)) = crossterm::terminal::size() {
            self.ui.set_terminal_size(width, height);
        }
        terminal.draw(|frame| ui::render(self, frame))?;

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(width, height) => {
                        self.ui.set_terminal_size(width, height);
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        self.operations.cancel_all();
        tracing::info!("checkout closed");
        Ok(())
    }
}
