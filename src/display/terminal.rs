//! Terminal UI implementation using ratatui
//!
//! Full-screen clock face: the time line and the date line centered in the window, with a
//! one-line status bar at the bottom. Field writes only update the in-memory [`ClockFace`];
//! the terminal is redrawn once per frame in [`DisplaySurface::present`].

use crate::display::face::ClockFace;
use crate::display::surface::DisplaySurface;
use crate::display::theme::ColorTheme;
use crate::display::time::DisplayField;
use crate::error::{ClockError, Result};
use ratatui::crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const STATUS_HINT: &str = "q / Esc to quit";

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
    face: ClockFace,
    show_date: bool,
    closed: bool,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
            face: ClockFace::new(),
            show_date: true,
            closed: false,
        })
    }

    /// Hide or show the date line.
    pub fn show_date(mut self, show: bool) -> Self {
        self.show_date = show;
        self
    }

    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    fn time_line<'a>(face: &'a ClockFace, theme: &ColorTheme) -> Line<'a> {
        if face.is_blank() {
            return Line::from("");
        }
        Line::from(vec![
            Span::styled(face.hour.as_str(), theme.digits),
            Span::styled(":", theme.digits),
            Span::styled(face.minute.as_str(), theme.digits),
            Span::styled(":", theme.digits),
            Span::styled(face.second.as_str(), theme.digits),
            Span::raw(" "),
            Span::styled(face.meridiem.as_str(), theme.meridiem),
        ])
    }

    fn render_face(
        frame: &mut Frame,
        area: Rect,
        face: &ClockFace,
        theme: &ColorTheme,
        show_date: bool,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ]
                .as_ref(),
            )
            .split(area);

        let time = Paragraph::new(Self::time_line(face, theme)).alignment(Alignment::Center);
        frame.render_widget(time, rows[1]);

        if show_date {
            let date = Paragraph::new(Line::from(Span::styled(face.date.as_str(), theme.date)))
                .alignment(Alignment::Center);
            frame.render_widget(date, rows[3]);
        }
    }

    fn enter_screen() -> Result<CrosstermTerminal> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    }

    fn render_status(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        let status = Paragraph::new(format!("rclock {} | {}", crate::VERSION, STATUS_HINT))
            .style(status_style);
        frame.render_widget(status, area);
    }
}

impl DisplaySurface for TerminalUI {
    fn write_field(&mut self, field: DisplayField, text: &str) -> Result<()> {
        self.face.set(field, text);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.closed {
            return Err(ClockError::ui("terminal has already been restored"));
        }
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            let face = &self.face;
            let show_date = self.show_date;

            terminal.draw(move |frame| {
                let size = frame.size();

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
                    .split(size);

                Self::render_face(frame, chunks[0], face, theme, show_date);
                Self::render_status(frame, chunks[1], theme);
            })?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        // cleanup() only acts on a live terminal, so a failed entry restores the screen here
        let terminal = undo_on_error(Self::enter_screen(), restore_screen)?;
        self.terminal = Some(terminal);
        self.closed = false;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.closed = true;
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, Show)?;
            self.terminal = None;
        }
        Ok(())
    }
}

/// Run `undo` when `step` failed, then hand the result back unchanged.
fn undo_on_error<T>(step: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if step.is_err() {
        undo();
    }
    step
}

fn restore_screen() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
