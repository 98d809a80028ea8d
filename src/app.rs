use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::{NullSound, SoundCue, SoundPlayer, TerminalBell};
use crate::game::{GameConfig, GameController, GameStatus, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// The interactive terminal application around the game core
pub struct App {
    controller: GameController,
    config: GameConfig,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    sound: Box<dyn SoundPlayer>,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, mute: bool) -> Result<Self> {
        let controller = GameController::new(&config).context("Failed to set up the board")?;
        let sound: Box<dyn SoundPlayer> = if mute {
            Box::new(NullSound)
        } else {
            Box::new(TerminalBell)
        };

        Ok(Self {
            controller,
            config,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            sound,
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

        // Logical ticks gated by the configured interval
        let tick_interval = Duration::from_millis(self.config.tick_interval_ms);
        let mut tick_timer = interval(tick_interval);

        // Render at 30 FPS, independently of the tick gate
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Input is sampled every poll cycle so steering stays
                // responsive between ticks
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.tick()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.controller, &self.stats);
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

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    let was_stopped = self.controller.status() == GameStatus::Stopped;
                    let accepted = self.controller.steer(direction);
                    if was_stopped && accepted {
                        self.stats.on_round_start();
                        info!("round {} started", self.stats.rounds_played + 1);
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn tick(&mut self) -> Result<()> {
        let score_before = self.controller.score();
        let outcome = self
            .controller
            .update()
            .context("Failed to place food")?;

        match outcome {
            TickOutcome::AteFood => {
                debug!("ate food, score {}", self.controller.score());
                self.sound.play(SoundCue::Eat);
            }
            TickOutcome::Collided(kind) => {
                info!("round over ({kind:?}), final score {score_before}");
                self.stats.on_round_over(score_before);
                self.sound.play(SoundCue::Crash);
            }
            TickOutcome::Advanced | TickOutcome::Idle => {}
        }

        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_app_initialization() {
        let app = App::new(GameConfig::default(), true).unwrap();
        assert_eq!(app.controller.status(), GameStatus::Running);
        assert_eq!(app.controller.score(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_key_sets_flag() {
        let mut app = App::new(GameConfig::default(), true).unwrap();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_steer_key_reaches_controller() {
        let mut app = App::new(GameConfig::default(), true).unwrap();
        app.handle_event(key(KeyCode::Up));
        assert_eq!(app.controller.snake().direction(), Direction::Up);
    }

    #[test]
    fn test_tick_while_running_moves_snake() {
        let mut app = App::new(GameConfig::default(), true).unwrap();
        let head_before = app.controller.snake().head();
        app.tick().unwrap();
        assert_ne!(app.controller.snake().head(), head_before);
    }
}
