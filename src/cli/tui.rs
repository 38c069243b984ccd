//! Full-screen assessment TUI

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io;

use crate::catalog::Scale;
use crate::models::{
    deterministic_report_id, AnsweredQuestion, AssessmentReport, OptionKey, OverallStatus,
    Severity, UserAnswer, WellbeingLevel,
};
use crate::scoring;
use crate::session::{Advance, AssessmentSession, SessionState};

use super::ScaleSelection;

enum Screen {
    Quiz,
    Results,
}

struct App {
    selection: ScaleSelection,
    scales: &'static [Scale],
    scale_index: usize,
    session: AssessmentSession,
    list_state: ListState,
    /// One-shot banner (level up, scale hand-off)
    flash: Option<String>,
    finished: Vec<(Scale, Vec<UserAnswer>)>,
    screen: Screen,
}

impl App {
    fn new(selection: ScaleSelection) -> Self {
        let scales = selection.scales();
        let mut session = AssessmentSession::new(scales[0]);
        session.start();
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selection,
            scales,
            scale_index: 0,
            session,
            list_state,
            flash: None,
            finished: Vec::new(),
            screen: Screen::Quiz,
        }
    }

    fn scale(&self) -> Scale {
        self.scales[self.scale_index]
    }

    fn next_option(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % 4,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_option(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 3) % 4,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn confirm(&mut self) {
        let Some(selected) = self.list_state.selected() else {
            return;
        };
        let Some(key) = OptionKey::from_ordinal(selected as u8 + 1) else {
            return;
        };

        self.flash = None;
        self.session.select_option(key);
        match self.session.confirm_and_advance() {
            Advance::Ignored => {}
            Advance::Next { level_up } => {
                if let Some(level) = level_up {
                    self.flash = Some(format!("★ Level {} reached", level));
                }
                self.sync_selection();
            }
            Advance::Completed => {
                self.finished
                    .push((self.scale(), self.session.answers().to_vec()));
                if self.scale_index + 1 < self.scales.len() {
                    self.scale_index += 1;
                    self.session = AssessmentSession::new(self.scale());
                    self.session.start();
                    self.flash = Some(format!("{} begins", self.scale().label()));
                    self.list_state.select(Some(0));
                } else {
                    self.screen = Screen::Results;
                }
            }
        }
    }

    fn back(&mut self) {
        self.flash = None;
        self.session.go_back();
        if self.session.state() == SessionState::NotStarted {
            // Backed out of the first question; stay on it
            self.session.start();
        }
        self.sync_selection();
    }

    /// Highlight the restored pending answer after navigation.
    fn sync_selection(&mut self) {
        let index = self
            .session
            .pending()
            .map(|key| key.ordinal() as usize - 1)
            .unwrap_or(0);
        self.list_state.select(Some(index));
    }

    fn restart(&mut self) {
        *self = App::new(self.selection);
    }

    fn report(&self) -> AssessmentReport {
        let mut dass = None;
        let mut star = None;
        let mut answered = Vec::new();
        let mut all_answers = Vec::new();
        for (scale, answers) in &self.finished {
            match scale {
                Scale::Dass => dass = Some(scoring::dass::compute(answers)),
                Scale::Star => star = Some(scoring::star::compute(answers)),
            }
            answered.extend(AnsweredQuestion::collect(scale.questions(), answers));
            all_answers.extend(answers.iter().copied());
        }
        AssessmentReport::new(dass, star)
            .with_answers(answered)
            .with_id(deterministic_report_id(&all_answers))
    }
}

pub(crate) fn run(selection: ScaleSelection) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(selection);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match app.screen {
                    Screen::Quiz => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Down | KeyCode::Char('j') => app.next_option(),
                        KeyCode::Up | KeyCode::Char('k') => app.previous_option(),
                        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
                        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
                        KeyCode::Char(c @ '1'..='4') => {
                            app.list_state.select(Some(c as usize - '1' as usize));
                            app.confirm();
                        }
                        _ => {}
                    },
                    Screen::Results => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('r') => app.restart(),
                        _ => {}
                    },
                }
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Quiz => quiz_ui(f, app),
        Screen::Results => results_ui(f, app),
    }
}

fn quiz_ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Header: scale, level, flash
    let progress = app.session.progress();
    let mut title = format!(
        " Mindgauge | {} | Level {}",
        app.scale().label(),
        app.session.level_reached()
    );
    if let Some(flash) = &app.flash {
        title.push_str(&format!("  {}", flash));
    }
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Progress gauge
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress.percent as u16)
        .label(format!("{}/{}", progress.position, progress.total));
    f.render_widget(gauge, chunks[1]);

    // Question and options
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(6)])
        .split(chunks[2]);

    if let Some(question) = app.session.current_question() {
        let prompt = Paragraph::new(question.prompt)
            .style(Style::default().bold())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(format!(
                " Question {}/{} ",
                progress.position, progress.total
            )));
        f.render_widget(prompt, main_chunks[0]);

        let items: Vec<ListItem> = question
            .options
            .iter()
            .map(|option| {
                let stars = match app.scale() {
                    Scale::Star => {
                        format!("{} ", "★".repeat(option.key.ordinal() as usize))
                    }
                    Scale::Dass => String::new(),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {}. ", option.key.ordinal()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(stars, Style::default().fg(Color::Yellow)),
                    Span::raw(option.label),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Answer "))
            .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, main_chunks[1], &mut app.list_state);
    }

    // Footer
    let help = " j/k:Select  Enter:Confirm  b:Back  q:Quit";
    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[3]);
}

fn results_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(" Mindgauge | Your Results")
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let report = app.report();
    let mut text: Vec<Line> = Vec::new();

    if let Some(dass) = &report.dass {
        text.push(Line::from(Span::styled("DASS-21", Style::default().bold())));
        for (label, score) in dass.categories() {
            text.push(Line::from(vec![
                Span::raw(format!("  {:<12} {:>3}%  ", label, score.percentage)),
                Span::styled(
                    score.severity.to_string(),
                    Style::default().fg(severity_color(score.severity)),
                ),
            ]));
        }
        text.push(Line::from(vec![
            Span::raw(format!(
                "  {:<12} {:>3}%  ",
                "Overall", dass.overall_percentage
            )),
            Span::styled(
                dass.overall_status.to_string(),
                Style::default()
                    .fg(match dass.overall_status {
                        OverallStatus::Healthy => Color::Green,
                        OverallStatus::AtRisk => Color::Red,
                    })
                    .bold(),
            ),
        ]));
        text.push(Line::from(""));
    }

    if let Some(star) = &report.star {
        text.push(Line::from(Span::styled(
            "STAR of Well-Being",
            Style::default().bold(),
        )));
        for (label, category) in [("Inherent", &star.inherent), ("Coherent", &star.coherent)] {
            text.push(Line::from(vec![
                Span::raw(format!("  {:<12} {:>3}%  ", label, category.percentage)),
                Span::styled(
                    category.level.to_string(),
                    Style::default().fg(level_color(category.level)),
                ),
            ]));
            for attr in &category.attributes {
                text.push(Line::from(vec![
                    Span::styled(
                        format!("    {:<22} {:>3}%  ", attr.attribute.label(), attr.percentage),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        attr.level.to_string(),
                        Style::default().fg(level_color(attr.level)),
                    ),
                ]));
            }
        }
        text.push(Line::from(vec![
            Span::raw(format!(
                "  {:<12} {:>3}%  ",
                "Overall", star.overall_percentage
            )),
            Span::styled(
                star.overall_level.to_string(),
                Style::default().fg(level_color(star.overall_level)).bold(),
            ),
        ]));
        text.push(Line::from(""));
        for insight in scoring::star::insights(star) {
            text.push(Line::from(Span::styled(
                format!("  • {}", insight),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let body = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Results "));
    f.render_widget(body, chunks[1]);

    let footer = Paragraph::new(" r:Retake  q:Quit").style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Normal => Color::Green,
        Severity::Mild => Color::Yellow,
        Severity::Moderate => Color::LightYellow,
        Severity::Severe => Color::LightRed,
        Severity::ExtremelySevere => Color::Red,
    }
}

fn level_color(level: WellbeingLevel) -> Color {
    match level {
        WellbeingLevel::Low => Color::LightRed,
        WellbeingLevel::Moderate => Color::Yellow,
        WellbeingLevel::High => Color::LightGreen,
        WellbeingLevel::Excellent => Color::Green,
    }
}
