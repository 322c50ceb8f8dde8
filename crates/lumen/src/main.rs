use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lumen_config::Config;
use lumen_core::AnimationKind;
use lumen_particles::{Controller, LoopState};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use tracing::info;

mod logging;
mod scheduler;
mod surface;

use scheduler::TimedScheduler;
use surface::PixelSurface;

/// How long to wait for input when no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Accent color for the intro and help text.
const ACCENT: Color = Color::Rgb(187, 247, 208);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(config.log_file.as_deref())?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Animation lifecycle and frame loop.
    controller: Controller<TimedScheduler>,
    /// Pixel buffer the animations draw onto.
    surface: PixelSurface,
    /// Whether the title is still shown (hidden once anything starts).
    show_intro: bool,
    /// Kind to start right away, from the config.
    start: Option<AnimationKind>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let scheduler = TimedScheduler::new(config.frame_rate);
        Self {
            running: false,
            controller: Controller::new(scheduler, config.animation, config.seed),
            surface: PixelSurface::new(0, 0, config.surface.cell_width, config.surface.cell_height),
            show_intro: true,
            start: config.start,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.on_resize(size.width, size.height);
        if let Some(kind) = self.start {
            self.show_intro = false;
            self.controller.start(kind, &mut self.surface);
        }

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.run_due_frame();
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(&self.surface, area);

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Hint
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        if self.show_intro {
            let title = Paragraph::new("l u m e n")
                .style(Style::new().fg(ACCENT).bold())
                .alignment(Alignment::Center);
            frame.render_widget(title, chunks[1]);
            let hint = Paragraph::new("press g to generate an animation")
                .style(Style::new().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, chunks[3]);
        }

        let status = match self.controller.state() {
            LoopState::Running(kind) => kind.name(),
            LoopState::Idle => "idle",
        };
        let help = Line::from(vec![
            "g".bold().fg(ACCENT),
            " generate  ".dark_gray(),
            "q".bold().fg(ACCENT),
            " quit  ".dark_gray(),
            status.fg(ACCENT),
        ])
        .centered();
        frame.render_widget(help, chunks[5]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next pending frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .controller
            .scheduler()
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Run the pending animation tick once it is due.
    fn run_due_frame(&mut self) {
        if let Some(handle) = self
            .controller
            .scheduler_mut()
            .take_due(Instant::now())
        {
            self.controller.on_frame(handle, &mut self.surface);
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('g') | KeyCode::Char(' ') | KeyCode::Enter) => self.generate(),
            _ => {}
        }
    }

    /// Start a random animation.
    fn generate(&mut self) {
        self.show_intro = false;
        self.controller.generate(&mut self.surface);
    }

    /// Resize the surface to the terminal and let the controller restart.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        info!(cols, rows, "terminal resized");
        self.surface.resize(cols, rows);
        self.controller.resize(&mut self.surface);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
