use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{FrameBuffer, GameConfig, GameState, SnakeEngine};
use crate::input::{CommandMailbox, InputHandler, KeyAction};
use crate::render::Renderer;

/// Interactive driver loop around the engine
///
/// Plays the role of the firmware main loop: key events land in the command
/// mailbox as they arrive, and the tick timer reads the mailbox exactly once
/// per simulation step.
pub struct PlayMode {
    engine: SnakeEngine,
    state: GameState,
    framebuffer: FrameBuffer,
    mailbox: CommandMailbox,
    input_handler: InputHandler,
    renderer: Renderer,
    tick_period: Duration,
    started: Instant,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, seed: Option<u64>, tick_period: Duration) -> Self {
        let engine = match seed {
            Some(seed) => SnakeEngine::with_seed(config.clone(), seed),
            None => SnakeEngine::new(config.clone()),
        };
        let state = engine.reset();
        let framebuffer = FrameBuffer::new(config.width, config.height);

        Self {
            engine,
            state,
            framebuffer,
            mailbox: CommandMailbox::new(),
            input_handler: InputHandler::new(),
            renderer: Renderer::new(),
            tick_period,
            started: Instant::now(),
            should_quit: false,
        }
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

        self.engine.initialize(&self.state, &mut self.framebuffer);

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

        let mut tick_timer = interval(self.tick_period);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        self.started = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation tick; keeps running after death, like the
                // firmware loop it replaces
                _ = tick_timer.tick() => {
                    let now_ms = self.started.elapsed().as_millis() as u64;
                    let command = self.mailbox.load();
                    self.engine.tick(&mut self.state, command, now_ms, &mut self.framebuffer);
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.framebuffer, &self.state);
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
                KeyAction::Steer(command) => self.mailbox.store(command),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
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
