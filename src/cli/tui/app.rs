//! TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use super::event::{Event, EventHandler};
use super::ui::Terminal;
use crate::cli::BOT_NAME;
use crate::session::Session;

/// Lines moved by one PageUp/PageDown
const PAGE: usize = 10;

/// Who said something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
    Warning,
}

/// One message in the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub speaker: Speaker,
    pub text: String,
    pub is_error: bool,
}

impl Entry {
    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            is_error: false,
        }
    }
}

/// Application state
pub struct App {
    session: Session,

    /// Conversation so far
    history: Vec<Entry>,

    /// Text being typed
    input: String,

    /// Lines scrolled up from the bottom of the history
    scroll: usize,

    should_quit: bool,
}

impl App {
    pub fn new(mut session: Session) -> Self {
        let mut history = Vec::new();
        if let Some(warning) = session.take_warning() {
            history.push(Entry::new(Speaker::Warning, warning));
        }
        history.push(Entry::new(
            Speaker::Bot,
            format!("Hello! I'm {BOT_NAME}.\nHow can I help?"),
        ));

        Self {
            session,
            history,
            input: String::new(),
            scroll: 0,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize => {}
            }
        }
        Ok(())
    }

    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c)
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::PageUp => self.scroll_up(PAGE),
            KeyCode::Down => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_sub(PAGE),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let input = std::mem::take(&mut self.input);
        if input.trim().is_empty() {
            return;
        }

        let response = self.session.handle(&input);
        self.history.push(Entry::new(Speaker::User, input));
        if !response.is_empty() {
            self.history.push(Entry {
                speaker: Speaker::Bot,
                text: response.message().to_string(),
                is_error: response.is_error(),
            });
        }

        self.scroll = 0;
        if response.is_exit() {
            self.should_quit = true;
        }
    }

    fn scroll_up(&mut self, by: usize) {
        let max = self.history_lines().len().saturating_sub(1);
        self.scroll = (self.scroll + by).min(max);
    }

    fn history_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for entry in &self.history {
            let (label, style) = match entry.speaker {
                Speaker::User => ("You", Style::default().fg(Color::Cyan).bold()),
                Speaker::Bot => (BOT_NAME, Style::default().fg(Color::Green).bold()),
                Speaker::Warning => ("Warning", Style::default().fg(Color::Yellow).bold()),
            };
            let text_style = if entry.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };

            lines.push(Line::styled(label, style));
            for text in entry.text.lines() {
                lines.push(Line::styled(format!("  {text}"), text_style));
            }
            lines.push(Line::default());
        }
        lines
    }

    fn draw(&self, frame: &mut Frame) {
        let [history_area, input_area, status_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let lines = self.history_lines();
        let height = history_area.height.saturating_sub(2) as usize;
        let (start, end) = visible_window(lines.len(), height, self.scroll);
        let visible: Vec<Line> = lines[start..end].to_vec();
        frame.render_widget(
            Paragraph::new(visible).block(Block::bordered().title(format!(" {BOT_NAME} "))),
            history_area,
        );

        frame.render_widget(
            Paragraph::new(self.input.as_str()).block(Block::bordered().title(" Command ")),
            input_area,
        );
        let cursor_x = input_area.x + 1 + self.input.chars().count() as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(input_area.right().saturating_sub(2)),
            input_area.y + 1,
        ));

        let status = Line::from(vec![
            Span::styled(
                format!(" {} task(s) ", self.session.tasks().len()),
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
            Span::raw(format!(" {} ", self.session.file().path().display())),
            Span::styled(
                " Enter: send  PgUp/PgDn: scroll  Esc: quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), status_area);
    }
}

/// Returns the range of lines to show, `scroll` lines up from the bottom
fn visible_window(total: usize, height: usize, scroll: usize) -> (usize, usize) {
    let end = total.saturating_sub(scroll);
    let start = end.saturating_sub(height);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskList;
    use crate::storage::{SortOrder, TaskFile};
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> App {
        let file = TaskFile::new(dir.path().join("tasks.txt"));
        App::new(Session::new(TaskList::new(), file, SortOrder::Date))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn starts_with_greeting() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        assert_eq!(app.history().len(), 1);
        assert_eq!(app.history()[0].speaker, Speaker::Bot);
    }

    #[test]
    fn submit_goes_through_session() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        type_line(&mut app, "todo Read book");

        assert_eq!(app.session.tasks().len(), 1);
        let last = app.history().last().unwrap();
        assert_eq!(last.speaker, Speaker::Bot);
        assert!(last.text.contains("[T] [ ] Read book"));
        assert!(app.input.is_empty());
    }

    #[test]
    fn errors_are_flagged() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        type_line(&mut app, "mark 5");

        assert!(app.history().last().unwrap().is_error);
    }

    #[test]
    fn backspace_edits_input() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('b')));
        app.handle_key(key(KeyCode::Backspace));

        assert_eq!(app.input, "a");
    }

    #[test]
    fn blank_submit_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        type_line(&mut app, "   ");

        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn bye_quits() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        type_line(&mut app, "bye");

        assert!(app.should_quit());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dir = TempDir::new().unwrap();
        let mut esc = app(&dir);
        esc.handle_key(key(KeyCode::Esc));
        assert!(esc.should_quit());

        let mut ctrl_c = app(&dir);
        ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.should_quit());
        assert!(ctrl_c.input.is_empty());
    }

    #[test]
    fn scrolling_is_clamped() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        app.handle_key(key(KeyCode::PageUp));
        let max = app.history_lines().len() - 1;
        assert_eq!(app.scroll, max);

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll, max - 1);
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn window_shows_the_bottom() {
        assert_eq!(visible_window(100, 10, 0), (90, 100));
        assert_eq!(visible_window(100, 10, 5), (85, 95));
        assert_eq!(visible_window(5, 10, 0), (0, 5));
        assert_eq!(visible_window(5, 10, 9), (0, 0));
    }

    #[test]
    fn draws_conversation() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        type_line(&mut app, "todo Read book");

        let mut terminal = ratatui::Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Read book"));
        assert!(screen.contains("1 task(s)"));
    }
}
