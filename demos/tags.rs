//! # Tags Example
//!
//! A tag input with autocomplete, a separator key, a cap and a length rule.
//! Type to filter languages, Enter or `,` to add, Backspace/Left to walk the
//! tags, Tab to get back to the text field.
//!
//! Run with: `cargo run --example tags`

use tagbox::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tagbox::ratatui::layout::{Constraint, Layout};
use tagbox::ratatui::style::{Color, Style};
use tagbox::ratatui::text::{Line, Span};
use tagbox::ratatui::widgets::{Block, Borders, Paragraph};
use tagbox::ratatui::Frame;
use tagbox::widgets::tag_input::{Message, TagInput};
use tagbox::widgets::validation::{max_length, min_length, Validators};
use tagbox::{Command, Component, Effect, HostRequest};

const LANGUAGES: &[&str] = &[
    "C", "C++", "Elixir", "Go", "Haskell", "Java", "Javascript", "Kotlin", "OCaml", "Python",
    "Ruby", "Rust", "Scala", "Swift", "Typescript", "Zig",
];

struct App {
    tags: TagInput,
    log: Vec<String>,
}

impl App {
    /// Carry out a command: log notifications and honour focus requests.
    fn run(&mut self, cmd: Command<Message>) {
        for effect in cmd.into_effects() {
            match effect {
                Effect::Message(msg) => {
                    match &msg {
                        Message::Added(tag) => self.log.push(format!("added {tag}")),
                        Message::Removed(tag) => self.log.push(format!("removed {tag}")),
                        _ => {}
                    }
                    let follow = self.tags.update(msg);
                    self.run(follow);
                }
                Effect::Host(HostRequest::FocusInput | HostRequest::FocusWidget) => {}
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [tags_area, _, log_area, help_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let log: Vec<Line> = self
            .log
            .iter()
            .rev()
            .take(log_area.height as usize)
            .map(|entry| Line::from(entry.as_str()))
            .collect();
        frame.render_widget(Paragraph::new(log), log_area);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter , ", Style::default().fg(Color::DarkGray)),
            Span::raw("add  "),
            Span::styled("Backspace ← →", Style::default().fg(Color::DarkGray)),
            Span::raw(" tags  "),
            Span::styled("Tab", Style::default().fg(Color::DarkGray)),
            Span::raw(" text  "),
            Span::styled("Ctrl-C", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
        ]));
        frame.render_widget(help, help_area);

        // Last, so the dropdown overlays the log.
        self.tags.view(frame, tags_area);
    }
}

fn main() -> std::io::Result<()> {
    let tags = TagInput::new()
        .with_items(["Rust"])
        .with_max_items(6)
        .with_separator_keys(vec![KeyCode::Char(',')])
        .with_transform(|s| s.trim().to_string())
        .with_validators(Validators::new().with(min_length(1)).with(max_length(20)))
        .with_autocomplete(true)
        .with_autocomplete_items(LANGUAGES.iter().map(|s| s.to_string()).collect())
        .with_block(Block::default().borders(Borders::ALL).title("Languages"));

    let mut app = App {
        tags,
        log: Vec::new(),
    };
    let cmd = app.tags.init();
    app.run(cmd);

    let mut terminal = tagbox::ratatui::init();
    let mut mounted = false;
    let result = loop {
        if let Err(err) = terminal.draw(|frame| app.view(frame)) {
            break Err(err);
        }
        if !mounted {
            mounted = true;
            let cmd = app.tags.mounted();
            app.run(cmd);
            let cmd = app.tags.update(Message::Focus);
            app.run(cmd);
            continue;
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break Ok(());
                }
                let cmd = app.tags.update(Message::KeyPress(key));
                app.run(cmd);
            }
            Ok(Event::FocusGained) => {
                let cmd = app.tags.update(Message::Focus);
                app.run(cmd);
            }
            Ok(Event::FocusLost) => {
                let cmd = app.tags.update(Message::Blur);
                app.run(cmd);
            }
            Ok(_) => {}
            Err(err) => break Err(err),
        }
    };
    app.tags.unmounted();
    tagbox::ratatui::restore();
    result
}
