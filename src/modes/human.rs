use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stderr;
use tokio::time::{Interval, MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Status, Surface, TerminalSurface, draw_scene};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.new_game();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal; from here on the guard puts it back on any exit
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = RestoreGuard::new(restore_terminal);
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        info!("terminal ready");

        let mut surface = TerminalSurface::new(terminal, &self.state.grid);
        let clock = tick_clock(self.engine.config());

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut surface, clock).await;

        // Cleanup terminal
        drop(surface);
        guard.finish()?;
        info!("terminal restored");

        result
    }

    async fn run_game_loop<S: Surface>(&mut self, surface: &mut S, mut clock: Interval) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                self.render(surface)?;
                            }
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, then show the result
                _ = clock.tick() => {
                    self.update_game();
                    self.render(surface)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quit after {} ticks", self.state.ticks);
                break;
            }
        }

        Ok(())
    }

    /// Apply one terminal event. Returns true when the screen needs a redraw
    /// before the next tick.
    fn handle_event(&mut self, event: Event) -> bool {
        let key = match event {
            Event::Key(key) => key,
            Event::Resize(..) => return true,
            _ => return false,
        };

        // Only process key press events, not repeats or releases
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                if !self.state.snake.steer(direction) {
                    debug!("ignored reversal to {direction:?}");
                }
                false
            }
            KeyAction::Restart => {
                self.engine.reset(&mut self.state);
                self.metrics.on_reset();
                info!("manual reset");
                true
            }
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::None => false,
        }
    }

    fn update_game(&mut self) {
        let report = self.engine.tick(&mut self.state);

        if report.was_reset() {
            self.metrics.on_reset();
        }
        self.metrics.record_length(self.state.snake.len());
    }

    fn render<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        self.metrics.update();
        draw_scene(surface, &self.state);
        surface.present(&Status::new(&self.state, &self.metrics))
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(stderr(), LeaveAlternateScreen, Show).context("Failed to leave alternate screen")?;
    Ok(())
}

/// Runs `restore` exactly once: through [`RestoreGuard::finish`] on the
/// normal path, or on drop when setup fails early or the game loop panics.
struct RestoreGuard<F: FnMut() -> Result<()>> {
    restore: F,
    armed: bool,
}

impl<F: FnMut() -> Result<()>> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore,
            armed: true,
        }
    }

    fn finish(mut self) -> Result<()> {
        self.armed = false;
        (self.restore)()
    }
}

impl<F: FnMut() -> Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(err) = (self.restore)() {
                error!("failed to restore terminal: {err:#}");
            }
        }
    }
}

/// Fixed-rate clock driving the ticks; a late tick delays the following ones
/// rather than bursting to catch up
fn tick_clock(config: &GameConfig) -> Interval {
    let mut clock = interval(config.tick_interval());
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    clock
}
