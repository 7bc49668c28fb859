//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use cardgen_core::export::{export_cards, ExportFormat};
use cardgen_core::{CancellationToken, GeneratedCard, GenerationOptions, DEFAULT_BATCH_SIZE};

use crate::cards::render_cards;
use crate::chart::render_progress;
use crate::clipboard::{default_clipboard, ClipboardSink};
use crate::footer::render_footer;
use crate::form::{render_form, validation_message, InputForm};
use crate::header::{render_header, StatusKind};
use crate::keymap::{map_key, KeyAction};
use crate::logs::render_logs;
use crate::messages::TuiMessage;
use crate::scroll::ScrollState;
use crate::styles::ColorTheme;
use crate::worker::{spawn_batch, BatchJob};

const MAX_LOG_LINES: usize = 500;
const LOG_PAGE: usize = 10;

/// Startup values for the TUI.
#[derive(Debug, Clone)]
pub struct TuiSettings {
    /// Initial BIN field value.
    pub bin: String,
    /// Initial amount field value.
    pub count: u32,
    /// Pause after each card so progress is visible.
    pub delay: Duration,
    pub options: GenerationOptions,
    /// Fixed RNG seed for reproducible batches.
    pub seed: Option<u64>,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            bin: String::new(),
            count: DEFAULT_BATCH_SIZE,
            delay: Duration::from_millis(20),
            options: GenerationOptions::default(),
            seed: None,
        }
    }
}

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub progress: Rect,
    pub cards: Rect,
    pub logs: Rect,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    pub form: InputForm,
    /// Whether a batch is being generated.
    pub running: bool,
    pub current: u32,
    pub total: u32,
    pub progress: f64,
    /// Cards of the last completed batch.
    pub cards: Vec<GeneratedCard>,
    pub logs: Vec<String>,
    pub card_scroll: ScrollState,
    pub log_scroll: ScrollState,
    pub status: String,
    pub status_kind: StatusKind,
    pub start_time: Option<Instant>,
    pub last_duration: Option<Duration>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    rx: Receiver<TuiMessage>,
    tx: Sender<TuiMessage>,
    /// Batch counter; worker messages from older batches are dropped.
    generation: u64,
    cancel: Option<CancellationToken>,
    settings: TuiSettings,
    clipboard: Box<dyn ClipboardSink>,
    theme: ColorTheme,
}

impl TuiApp {
    /// Create a new TUI app with the build's default clipboard backend.
    #[must_use]
    pub fn new(settings: TuiSettings) -> Self {
        Self::with_clipboard(settings, default_clipboard())
    }

    /// Create a new TUI app that copies through `clipboard`.
    #[must_use]
    pub fn with_clipboard(settings: TuiSettings, clipboard: Box<dyn ClipboardSink>) -> Self {
        let (tx, rx) = unbounded();
        Self {
            should_quit: false,
            form: InputForm::new(&settings.bin, settings.count),
            running: false,
            current: 0,
            total: 0,
            progress: 0.0,
            cards: Vec::new(),
            logs: Vec::new(),
            card_scroll: ScrollState::top(),
            log_scroll: ScrollState::following(),
            status: "Ready".to_string(),
            status_kind: StatusKind::Info,
            start_time: None,
            last_duration: None,
            terminal_width: 80,
            terminal_height: 24,
            rx,
            tx,
            generation: 0,
            cancel: None,
            settings,
            clipboard,
            theme: ColorTheme::default(),
        }
    }

    /// Sender for injecting messages into the update loop.
    #[must_use]
    pub fn sender(&self) -> Sender<TuiMessage> {
        self.tx.clone()
    }

    /// Get the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Progress {
                generation,
                current,
                total,
                progress,
            } => {
                if generation == self.generation && self.running {
                    self.current = current;
                    self.total = total;
                    self.progress = progress;
                }
            }
            TuiMessage::BatchComplete {
                generation,
                cards,
                duration,
            } => {
                if generation != self.generation {
                    debug!(generation, "Dropping stale batch");
                    return;
                }
                self.finish_batch();
                self.current = self.total;
                self.progress = 1.0;
                self.last_duration = Some(duration);
                let summary = match cards.first() {
                    Some(card) => format!(
                        "Generated {} {} cards in {duration:.2?}",
                        cards.len(),
                        card.card_type()
                    ),
                    None => "Generated 0 cards".to_string(),
                };
                self.cards = cards;
                self.card_scroll = ScrollState::top();
                self.set_status(summary.clone(), StatusKind::Success);
                self.push_log(summary);
            }
            TuiMessage::Cancelled { generation } => {
                if generation == self.generation {
                    self.finish_batch();
                    self.set_status("Generation cancelled".to_string(), StatusKind::Error);
                    self.push_log("[WARN] Generation cancelled".to_string());
                }
            }
            TuiMessage::Error { generation, message } => {
                if generation != self.generation {
                    debug!(generation, "Dropping stale error");
                    return;
                }
                self.finish_batch();
                self.set_status(message.clone(), StatusKind::Error);
                self.push_log(format!("[ERROR] {message}"));
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::Cancel => {
                if self.running {
                    if let Some(cancel) = &self.cancel {
                        cancel.cancel();
                    }
                    self.set_status("Cancelling...".to_string(), StatusKind::Info);
                } else {
                    self.quit();
                }
            }
            KeyAction::Generate => self.start_batch(),
            KeyAction::NextField => self.form.next_field(),
            KeyAction::Input(c) => self.form.push_digit(c),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::Copy => self.copy_all(),
            KeyAction::Clear => self.clear(),
            KeyAction::ScrollUp => {
                let (total, height) = self.card_viewport();
                self.card_scroll.scroll_up(total, height);
            }
            KeyAction::ScrollDown => {
                let (total, height) = self.card_viewport();
                self.card_scroll.scroll_down(total, height);
            }
            KeyAction::Home => self.card_scroll.home(),
            KeyAction::End => {
                let (total, height) = self.card_viewport();
                self.card_scroll.end(total, height);
            }
            KeyAction::LogPageUp => {
                let (total, height) = self.log_viewport();
                self.log_scroll.page_up(LOG_PAGE, total, height);
            }
            KeyAction::LogPageDown => {
                let (total, height) = self.log_viewport();
                self.log_scroll.page_down(LOG_PAGE, total, height);
                if self.log_scroll.visible_start(total, height) >= total.saturating_sub(height) {
                    self.log_scroll.resume_follow();
                }
            }
            KeyAction::None => {}
        }
    }

    /// Validate the form and start a background batch.
    pub fn start_batch(&mut self) {
        if self.running {
            self.push_log("[WARN] A batch is already running".to_string());
            return;
        }

        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                let msg = validation_message(&e);
                self.set_status(msg.clone(), StatusKind::Error);
                self.push_log(format!("[ERROR] {msg}"));
                return;
            }
        };

        self.generation += 1;
        self.running = true;
        self.current = 0;
        self.total = request.count();
        self.progress = 0.0;
        self.start_time = Some(Instant::now());
        self.set_status(
            format!("Generating {} cards for BIN {}...", request.count(), request.bin()),
            StatusKind::Info,
        );
        self.push_log(format!(
            "Started batch #{}: BIN {} x {}",
            self.generation,
            request.bin(),
            request.count()
        ));

        let job = BatchJob {
            generation: self.generation,
            request,
            options: self.settings.options.clone(),
            delay: self.settings.delay,
            seed: self.settings.seed,
        };
        self.cancel = Some(spawn_batch(job, self.tx.clone()));
    }

    /// Copy every card, one `number|MM/YY|cvv` line each.
    pub fn copy_all(&mut self) {
        if self.cards.is_empty() {
            self.set_status("No cards to copy".to_string(), StatusKind::Error);
            self.push_log("[WARN] No cards to copy".to_string());
            return;
        }
        let text = export_cards(&self.cards, ExportFormat::Pipe);
        match self.clipboard.copy(&text) {
            Ok(()) => {
                let msg = format!("Copied {} cards to clipboard", self.cards.len());
                self.set_status(msg.clone(), StatusKind::Success);
                self.push_log(msg);
            }
            Err(e) => {
                self.set_status(e.to_string(), StatusKind::Error);
                self.push_log(format!("[ERROR] {e}"));
            }
        }
    }

    /// Drop the current results. Ignored while a batch is running.
    pub fn clear(&mut self) {
        if self.running {
            self.push_log("[WARN] Cannot clear while a batch is running".to_string());
            return;
        }
        self.cards.clear();
        self.card_scroll = ScrollState::top();
        self.current = 0;
        self.total = 0;
        self.progress = 0.0;
        self.last_duration = None;
        self.set_status("Cleared".to_string(), StatusKind::Info);
    }

    /// Get the elapsed time since the current batch started.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    fn quit(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.should_quit = true;
    }

    fn finish_batch(&mut self) {
        self.running = false;
        self.cancel = None;
    }

    fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status = text;
        self.status_kind = kind;
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOG_LINES {
            self.logs.remove(0);
            self.log_scroll.offset = self.log_scroll.offset.saturating_sub(1);
        }
    }

    fn screen(&self) -> ScreenLayout {
        Self::compute_layout(Rect::new(0, 0, self.terminal_width, self.terminal_height))
    }

    fn card_viewport(&self) -> (usize, usize) {
        let height = self.screen().cards.height.saturating_sub(2) as usize;
        (self.cards.len(), height)
    }

    fn log_viewport(&self) -> (usize, usize) {
        let height = self.screen().logs.height.saturating_sub(2) as usize;
        (self.logs.len(), height)
    }

    /// Split the screen into its panels.
    #[must_use]
    pub fn compute_layout(area: Rect) -> ScreenLayout {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // form
                Constraint::Length(3), // progress
                Constraint::Min(5),    // cards + logs
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer[3]);

        ScreenLayout {
            header: outer[0],
            form: outer[1],
            progress: outer[2],
            cards: main[0],
            logs: main[1],
            footer: outer[4],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area());

        let status = match (self.running, self.elapsed()) {
            (true, Some(elapsed)) => format!("{} ({:.1}s)", self.status, elapsed.as_secs_f64()),
            _ => self.status.clone(),
        };
        render_header(frame, layout.header, &status, self.status_kind, &self.theme);
        render_form(frame, layout.form, &self.form, &self.theme);
        render_progress(
            frame,
            layout.progress,
            self.current,
            self.total,
            self.progress,
            &self.theme,
        );
        render_cards(frame, layout.cards, &self.cards, &self.card_scroll, &self.theme);
        render_logs(frame, layout.logs, &self.logs, &self.log_scroll, &self.theme);
        render_footer(frame, layout.footer, &self.theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(50);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        self.handle_key_action(map_key(key_event));
                    }
                    Event::Resize(w, h) => {
                        self.handle_message(TuiMessage::Resize {
                            width: w,
                            height: h,
                        });
                    }
                    _ => {}
                }
            }

            self.update();
        }
    }
}
