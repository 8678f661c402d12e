use crate::{AppCommand, AppResult, ChatWidget, config::Config, ui};

use std::{io::Stdout, sync::Arc, time::Duration};

use chrono::Utc;
use geofeed_core::{LocationProvider, MediaKind, PostId};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Main application state.
///
/// Runs on the runtime thread via `block_on`. The widget holds a
/// `PlaybackHandle` which is `!Send`, so the app future is never spawned;
/// it stays on the thread that created it.
pub struct App {
    pub(crate) widget: ChatWidget,
    pub(crate) terminal: Terminal<CrosstermBackend<Stdout>>,
    pub(crate) location: Arc<dyn LocationProvider + Send + Sync>,
    pub(crate) high_accuracy: bool,
    pub(crate) show_key_hints: bool,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    tick: tokio::time::Interval,
}

impl App {
    /// Wire the widget, terminal, and channels together.
    pub fn new(
        config: Config,
        terminal: Terminal<CrosstermBackend<Stdout>>,
        location: Arc<dyn LocationProvider + Send + Sync>,
        command_tx: mpsc::Sender<AppCommand>,
        command_rx: mpsc::Receiver<AppCommand>,
    ) -> Self {
        Self {
            widget: ChatWidget::new(config.capture_config()),
            terminal,
            location,
            high_accuracy: config.location.high_accuracy,
            show_key_hints: config.behaviour.show_key_hints,
            command_tx,
            command_rx,
            tick: tokio::time::interval(Duration::from_secs(1)),
        }
    }

    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> AppResult<()> {
        info!("Geofeed starting");

        // Terminal input forwarding via single persistent blocking task.
        //
        // crossterm's event::read() blocks, so a dedicated task reads and
        // forwards into the async loop. Shutdown: when input_rx is dropped
        // (main loop breaks), blocking_send() fails, breaking this loop.
        let (input_tx, mut input_rx) = mpsc::channel(32);
        let input_handle = tokio::task::spawn_blocking(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if input_tx.blocking_send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Terminal input read failed: {}", e);
                        break;
                    }
                }
            }
        });

        self.draw()?;

        loop {
            tokio::select! {
                Some(ev) = input_rx.recv() => {
                    if self.handle_input(ev) {
                        break;
                    }
                    self.draw()?;
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::LocationResolved { post_id, result } => {
                            self.widget.on_location_resolved(post_id, result);
                        }
                    }
                    self.draw()?;
                }

                _ = self.tick.tick(), if self.widget.is_recording() => {
                    self.widget.on_timer_tick();
                    self.draw()?;
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(input_rx);

        // Best-effort join: the blocking task may be stuck in read() until
        // one more terminal event arrives. The runtime cleans it up on
        // process exit regardless.
        match tokio::time::timeout(Duration::from_secs(1), input_handle).await {
            Ok(Ok(())) => info!("Input forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Input forwarder task panicked"),
            Err(_) => info!("Input forwarder still blocked on the terminal, cleaned up on exit"),
        }

        info!("Geofeed shut down successfully");

        Ok(())
    }

    /// Dispatch one terminal event. Returns `true` to quit.
    fn handle_input(&mut self, event: Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => return true,
            KeyCode::Char('b') if ctrl => self.widget.dismiss_banner(),

            // The record controls: start pair visible when idle, the
            // finish/cancel pair while recording.
            KeyCode::Char('a') if ctrl && !self.widget.is_recording() => {
                self.start_recording(MediaKind::Audio);
            }
            KeyCode::Char('v') if ctrl && !self.widget.is_recording() => {
                self.start_recording(MediaKind::Video);
            }
            KeyCode::Char('f') if ctrl && self.widget.is_recording() => {
                self.finish_recording();
            }
            KeyCode::Char('x') if ctrl && self.widget.is_recording() => {
                self.widget.cancel_recording();
            }

            _ if self.widget.prompt().is_some() => self.handle_prompt_key(key),
            _ => self.handle_compose_key(key),
        }

        false
    }

    /// Keys while the manual coordinate modal is open.
    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('h') if ctrl => self.widget.toggle_coords_hint(),
            KeyCode::Enter => self.widget.submit_coords(),
            KeyCode::Esc => self.widget.cancel_coords(),
            KeyCode::Backspace => self.widget.prompt_backspace(),
            KeyCode::Char(c) if !ctrl => self.widget.prompt_char(c),
            _ => {}
        }
    }

    /// Keys in the regular compose view.
    fn handle_compose_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('h') if ctrl => self.widget.toggle_compose_help(),
            KeyCode::Char('p') if ctrl => self.widget.play_selected(),
            KeyCode::Enter => {
                let post_id = self.widget.submit_text(Utc::now());
                self.request_location(post_id);
            }
            KeyCode::Up => self.widget.select_prev(),
            KeyCode::Down => self.widget.select_next(),
            KeyCode::Backspace => self.widget.input_backspace(),
            KeyCode::Char(c) if !ctrl => self.widget.input_char(c),
            _ => {}
        }
    }

    fn start_recording(&mut self, kind: MediaKind) {
        if self.widget.start_recording(kind) {
            // First display update lands one second in; the timer counts
            // from 1.
            self.tick = tokio::time::interval_at(
                tokio::time::Instant::now() + Duration::from_secs(1),
                Duration::from_secs(1),
            );
        }
    }

    fn finish_recording(&mut self) {
        if let Some(post_id) = self.widget.finish_recording(Utc::now()) {
            // Recorded posts get geolocation like any other post.
            self.request_location(post_id);
        }
    }

    /// Resolve coordinates for a post on a blocking task; the outcome
    /// returns to the loop as an [`AppCommand`].
    fn request_location(&self, post_id: PostId) {
        let provider = Arc::clone(&self.location);
        let tx = self.command_tx.clone();
        let high_accuracy = self.high_accuracy;

        tokio::task::spawn_blocking(move || {
            let result = provider.current_position(high_accuracy);
            if tx
                .blocking_send(AppCommand::LocationResolved { post_id, result })
                .is_err()
            {
                error!(post_id = %post_id, "App loop gone, dropping location result");
            }
        });
    }

    fn draw(&mut self) -> AppResult<()> {
        let widget = &self.widget;
        let show_key_hints = self.show_key_hints;
        self.terminal
            .draw(|frame| ui::draw(frame, widget, show_key_hints))?;
        Ok(())
    }
}
