use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, interval_at};
use tracing::{error, info};

use crate::game::{GameConfig, GameEngine, StepOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Beats shown before each session starts moving
const COUNTDOWN_BEATS: u8 = 3;
const COUNTDOWN_INTERVAL: Duration = Duration::from_millis(500);
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct PlayMode {
    config: GameConfig,
    tick_interval: Duration,
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    countdown: Option<u8>,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, tick_interval: Duration) -> Result<Self> {
        let engine = GameEngine::from_config(&config).context("Failed to create game")?;

        Ok(Self {
            config,
            tick_interval,
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            countdown: Some(COUNTDOWN_BEATS),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick_interval);
        let mut countdown_timer =
            interval_at(Instant::now() + COUNTDOWN_INTERVAL, COUNTDOWN_INTERVAL);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = countdown_timer.tick() => {
                    self.advance_countdown();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, &self.metrics, self.countdown);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply_key_action(action);
        }
    }

    fn apply_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                if !self.engine.is_game_over() {
                    self.engine.change_direction(direction);
                }
            }
            KeyAction::TogglePause => {
                if !self.engine.is_game_over() {
                    self.engine.toggle_pause();
                    self.metrics.on_pause_changed(self.engine.is_paused());
                }
            }
            KeyAction::Restart => {
                if self.engine.is_game_over() {
                    self.reset_game();
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    /// Counts down only while unpaused, so resuming never drops straight into play
    fn advance_countdown(&mut self) {
        if self.engine.is_paused() {
            return;
        }
        self.countdown = match self.countdown {
            Some(beat) if beat > 1 => Some(beat - 1),
            Some(_) => {
                self.metrics.on_game_start(self.engine.is_paused());
                None
            }
            None => None,
        };
    }

    fn update_game(&mut self) {
        if self.countdown.is_some() || self.engine.is_paused() || self.engine.is_game_over() {
            return;
        }

        if let StepOutcome::Collision(_) = self.engine.step() {
            self.metrics.on_game_over(self.engine.score());
        }
    }

    fn reset_game(&mut self) {
        // Dimensions were validated when the first engine was built
        match GameEngine::from_config(&self.config) {
            Ok(engine) => {
                info!(seed = engine.seed(), "restarting game");
                self.engine = engine;
                self.countdown = Some(COUNTDOWN_BEATS);
            }
            Err(err) => {
                error!(%err, "failed to restart game");
                self.should_quit = true;
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
