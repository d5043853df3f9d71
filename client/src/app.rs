//! Native driver for the match.
//!
//! winit owns the event loop through `ApplicationHandler`. The window,
//! renderer and session are built lazily in `resumed`; each redraw runs one
//! simulation frame and presents it.

use std::sync::Arc;

use game_core::{Config, GameRng, InputState, MonotonicClock, Session};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::error::SetupError;
use crate::input::{handle_focus_change, handle_key_event};
use crate::renderer::Renderer;
use crate::report::ConsoleScoreReporter;
use crate::window::{create_window, WindowConfig};

// Field order is drop order: GPU resources go before the window
struct Running {
    renderer: Renderer,
    window: Arc<Window>,
    session: Session<MonotonicClock>,
}

pub struct App {
    config: Config,
    window_config: WindowConfig,
    state: Option<Running>,
    input: InputState,
    reporter: ConsoleScoreReporter,
    error: Option<SetupError>,
}

impl App {
    pub fn new(config: Config, window_config: WindowConfig) -> Self {
        Self {
            config,
            window_config,
            state: None,
            input: InputState::new(),
            reporter: ConsoleScoreReporter,
            error: None,
        }
    }

    /// The setup failure that ended the loop, if any
    pub fn take_error(&mut self) -> Option<SetupError> {
        self.error.take()
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<Running, SetupError> {
        let window = create_window(event_loop, &self.window_config)?;
        log::info!(
            "Window created: {}x{}",
            self.window_config.width,
            self.window_config.height
        );

        let mut session = Session::new(
            self.config.clone(),
            GameRng::from_entropy(),
            MonotonicClock::new(),
        );
        let renderer = Renderer::new(
            window.clone(),
            &self.config,
            &self.window_config,
            &session.snapshot(),
        )?;

        session.restart_timer();
        session.start(&mut self.reporter);

        Ok(Running {
            renderer,
            window,
            session,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => self.state = Some(running),
            Err(e) => {
                log::error!("{e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                state
                    .renderer
                    .resize(physical_size.width, physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                handle_key_event(&mut self.input, &event);
            }

            WindowEvent::Focused(focused) => {
                handle_focus_change(&mut self.input, focused);
            }

            WindowEvent::RedrawRequested => {
                let outcome = state.session.frame(&self.input, &mut self.reporter);
                if outcome.hit_paddle {
                    log::trace!("Paddle hit at {:.2}s", outcome.elapsed);
                }
                state.renderer.render(&state.session.snapshot());

                if outcome.quit_requested {
                    log::info!("Escape pressed, exiting.");
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.take() {
            log::info!(
                "Final score {} - {} after {} frames ({:.1}s)",
                state.session.score.left,
                state.session.score.right,
                state.session.frame_count(),
                state.session.time.now
            );
        }
    }
}
