//! Ratatui-based quiz presenter.
//!
//! Renders the question set in fixed-size pages with per-question radio
//! options, then an in-terminal results view after submission. All paging
//! and selection state lives in the [`view::QuizView`] view model; this
//! module only maps key presses onto it and draws.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::pipeline::{self, QuizContext};
use crate::domain::{Question, Recommendation, Scored};
use crate::error::AppError;

pub mod view;

use view::QuizView;

/// Start the quiz TUI.
pub fn run(ctx: &QuizContext, page_size: usize) -> Result<(), AppError> {
    let questions = ctx.load_questions();

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(ctx.clone(), questions, page_size);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Which view is on screen.
enum Screen {
    Quiz,
    Results {
        scored: Scored,
        recommendations: Vec<Recommendation>,
    },
}

struct App {
    ctx: QuizContext,
    questions: Vec<Question>,
    page_size: usize,
    view: QuizView,
    screen: Screen,
    status: String,
}

impl App {
    fn new(ctx: QuizContext, questions: Vec<Question>, page_size: usize) -> Self {
        let view = QuizView::new(questions.len(), page_size);
        Self {
            ctx,
            questions,
            page_size,
            view,
            screen: Screen::Quiz,
            status: "Answer with ←/→ or y/n. Enter submits on the last page.".to_string(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match self.screen {
            Screen::Quiz => self.handle_quiz_key(code),
            Screen::Results { .. } => self.handle_results_key(code),
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up => self.view.move_cursor_up(),
            KeyCode::Down => self.view.move_cursor_down(),
            KeyCode::Left => self.cycle_selection(false),
            KeyCode::Right => self.cycle_selection(true),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'y') || c.eq_ignore_ascii_case(&'n') => {
                self.select_by_label(c);
            }
            KeyCode::Tab | KeyCode::PageDown => {
                if self.view.on_last_page() {
                    self.status = "Last page. Enter submits.".to_string();
                } else {
                    self.view.next_page();
                }
            }
            KeyCode::BackTab | KeyCode::PageUp => self.view.prev_page(),
            KeyCode::Enter => {
                if self.view.on_last_page() {
                    self.submit()?;
                } else {
                    self.view.next_page();
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_results_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Ok(true),
            KeyCode::Char('r') => {
                // Retake: fresh selections, same questions.
                self.view = QuizView::new(self.questions.len(), self.page_size);
                self.screen = Screen::Quiz;
                self.status = "Retaking the quiz.".to_string();
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn cycle_selection(&mut self, forward: bool) {
        let idx = self.view.cursor_index();
        let count = self
            .questions
            .get(idx)
            .map(|q| q.options.len())
            .unwrap_or(0);
        self.view.cycle_selection(forward, count);
    }

    /// Select the option whose label starts with the pressed key ("Yes"/"No").
    fn select_by_label(&mut self, key: char) {
        let idx = self.view.cursor_index();
        let Some(question) = self.questions.get(idx) else {
            return;
        };
        let wanted = key.to_ascii_lowercase();
        let found = question.options.iter().position(|opt| {
            opt.chars()
                .next()
                .is_some_and(|c| c.to_ascii_lowercase() == wanted)
        });
        if let Some(option) = found {
            self.view.select(option);
        }
    }

    fn submit(&mut self) -> Result<(), AppError> {
        let scored = pipeline::submit(&self.ctx.store, &self.questions, |i| {
            self.view.selection_label(&self.questions, i)
        })?;
        let recommendations = crate::recommend::recommend(&scored.scores);
        self.screen = Screen::Results {
            scored,
            recommendations,
        };
        self.status = "Saved. Enter or q to exit, r to retake.".to_string();
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match &self.screen {
            Screen::Quiz => self.draw_quiz(frame, chunks[1]),
            Screen::Results {
                scored,
                recommendations,
            } => draw_results(frame, chunks[1], scored, recommendations),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = match &self.screen {
            Screen::Quiz => Line::from(vec![
                Span::styled("careerq", Style::default().fg(Color::Cyan)),
                Span::raw(format!(
                    " — page {}/{} | answered {}/{}",
                    self.view.page() + 1,
                    self.view.total_pages(),
                    self.view.answered_count(),
                    self.questions.len()
                )),
            ]),
            Screen::Results { .. } => Line::from(vec![
                Span::styled("careerq", Style::default().fg(Color::Cyan)),
                Span::raw(" — results"),
            ]),
        };
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_quiz(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();

        for index in self.view.page_range() {
            let question = &self.questions[index];
            let under_cursor = index == self.view.cursor_index();

            let number_style = if under_cursor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{}. {}", index + 1, question.text),
                number_style,
            )));

            let mut option_spans: Vec<Span> = vec![Span::raw("   ")];
            for (o, label) in question.options.iter().enumerate() {
                let chosen = self.view.selected(index) == Some(o);
                let marker = if chosen { "(•)" } else { "( )" };
                let style = if chosen {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };
                option_spans.push(Span::styled(format!("{marker} {label}  "), style));
            }
            lines.push(Line::from(option_spans));
            lines.push(Line::from(""));
        }

        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Quiz").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match &self.screen {
            Screen::Quiz => {
                if self.view.on_last_page() {
                    "↑/↓ question  ←/→ or y/n answer  PgUp back  Enter submit  q quit"
                } else {
                    "↑/↓ question  ←/→ or y/n answer  Tab/PgDn next page  Enter next  q quit"
                }
            }
            Screen::Results { .. } => "Enter/q exit  r retake",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn draw_results(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    scored: &Scored,
    recommendations: &[Recommendation],
) {
    // Reuse the plain-text results formatter so the TUI and the `results`
    // subcommand always agree on content.
    let text = crate::report::format_results(&scored.scores, scored.answered, recommendations);
    let p = Paragraph::new(text).block(Block::default().title("Results").borders(Borders::ALL));
    frame.render_widget(p, area);
}
