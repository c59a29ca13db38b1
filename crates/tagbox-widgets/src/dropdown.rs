//! Suggestion dropdown shown under the tag input while autocomplete matches.
//!
//! Items are supplied from outside; the dropdown only tracks which one is
//! highlighted and reports when an item is picked or the menu is dismissed.
//! Moving up from the first item dismisses the menu, handing the keyboard
//! back to the text field.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use tagbox_core::command::Command;
use tagbox_core::component::Component;
use unicode_width::UnicodeWidthStr;

/// Style configuration for the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownStyle {
    /// Style for unselected items.
    pub item: Style,
    /// Style for the highlighted item.
    pub selected_item: Style,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self {
            item: Style::default(),
            selected_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Messages for the dropdown component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press forwarded to the dropdown.
    KeyPress(KeyEvent),
    /// An item was picked (index, value).
    Selected(usize, String),
    /// The dropdown was dismissed.
    Dismissed,
}

/// A dropdown overlay listing selectable items.
pub struct Dropdown {
    items: Vec<String>,
    highlighted: usize,
    offset: usize,
    max_visible: usize,
    visible: bool,
    style: DropdownStyle,
    block: Option<Block<'static>>,
}

impl Dropdown {
    /// Create a new empty, hidden dropdown.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            highlighted: 0,
            offset: 0,
            max_visible: 6,
            visible: false,
            style: DropdownStyle::default(),
            block: None,
        }
    }

    /// Set the maximum number of visible items before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    pub fn with_style(mut self, style: DropdownStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the block (border/title container) for the dropdown.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Replace the items.  The dropdown shows when there is at least one item
    /// and the highlight returns to the top.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.visible = !items.is_empty();
        self.items = items;
        self.highlighted = 0;
        self.offset = 0;
    }

    /// Drop all items and hide.
    pub fn clear(&mut self) {
        self.set_items(Vec::new());
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the dropdown is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn highlighted_value(&self) -> Option<&str> {
        self.items.get(self.highlighted).map(String::as_str)
    }

    fn move_down(&mut self) {
        if self.highlighted + 1 < self.items.len() {
            self.highlighted += 1;
        }
        self.ensure_visible();
    }

    fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        if self.highlighted < self.offset {
            self.offset = self.highlighted;
        } else if self.highlighted >= self.offset + self.max_visible {
            self.offset = self.highlighted + 1 - self.max_visible;
        }
    }

    /// Height the dropdown occupies when rendered.
    pub fn height(&self) -> u16 {
        if !self.is_visible() {
            return 0;
        }
        let rows = self.items.len().min(self.max_visible) as u16;
        if self.block.is_some() {
            rows + 2
        } else {
            rows
        }
    }
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Dropdown {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.is_visible() => match key.code {
                KeyCode::Esc => {
                    self.visible = false;
                    Command::message(Message::Dismissed)
                }
                KeyCode::Up if self.highlighted == 0 => {
                    self.visible = false;
                    Command::message(Message::Dismissed)
                }
                KeyCode::Up => {
                    self.move_up();
                    Command::none()
                }
                KeyCode::Down => {
                    self.move_down();
                    Command::none()
                }
                KeyCode::Enter => match self.items.get(self.highlighted).cloned() {
                    Some(value) => {
                        self.visible = false;
                        Command::message(Message::Selected(self.highlighted, value))
                    }
                    None => Command::none(),
                },
                _ => Command::none(),
            },
            Message::KeyPress(_) | Message::Selected(..) | Message::Dismissed => Command::none(),
        }
    }

    /// Renders *below* `anchor`, clipped to the frame.
    fn view(&self, frame: &mut Frame, anchor: Rect) {
        if !self.is_visible() {
            return;
        }

        let bounds = frame.area();
        let y = anchor.y.saturating_add(anchor.height);
        let height = self.height().min(bounds.bottom().saturating_sub(y));
        let dropdown_area = Rect::new(anchor.x, y, anchor.width, height);
        if dropdown_area.height == 0 || dropdown_area.width < 4 {
            return;
        }

        frame.render_widget(Clear, dropdown_area);

        let inner = match self.block {
            Some(ref block) => {
                let inner = block.inner(dropdown_area);
                frame.render_widget(block.clone(), dropdown_area);
                inner
            }
            None => dropdown_area,
        };

        let max_text_width = inner.width.saturating_sub(2) as usize; // prefix is 2 cells
        for (row, (idx, item)) in self
            .items
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.max_visible)
            .enumerate()
        {
            if row as u16 >= inner.height {
                break;
            }
            let row_area = Rect {
                y: inner.y + row as u16,
                height: 1,
                ..inner
            };

            let is_selected = idx == self.highlighted;
            let (prefix, style) = if is_selected {
                ("▸ ", self.style.selected_item)
            } else {
                ("  ", self.style.item)
            };
            let display = if item.width() > max_text_width {
                let mut truncated = String::new();
                for c in item.chars() {
                    if truncated.width() + 4 > max_text_width {
                        break;
                    }
                    truncated.push(c);
                }
                format!("{prefix}{truncated}...")
            } else {
                format!("{prefix}{item}")
            };

            frame.render_widget(Paragraph::new(Span::styled(display, style)), row_area);
        }
    }

    fn focused(&self) -> bool {
        self.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_is_hidden() {
        let dropdown = Dropdown::new();
        assert!(!dropdown.is_visible());
        assert_eq!(dropdown.height(), 0);
    }

    #[test]
    fn set_items_shows_and_resets_highlight() {
        let mut dropdown = Dropdown::new();
        dropdown.set_items(items(&["a", "b", "c"]));
        dropdown.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(dropdown.highlighted_index(), 1);

        dropdown.set_items(items(&["x", "y"]));
        assert!(dropdown.is_visible());
        assert_eq!(dropdown.highlighted_index(), 0);
    }

    #[test]
    fn empty_items_hide() {
        let mut dropdown = Dropdown::new();
        dropdown.set_items(items(&["a"]));
        dropdown.clear();
        assert!(!dropdown.is_visible());
    }

    #[test]
    fn down_stops_at_last() {
        let mut dropdown = Dropdown::new();
        dropdown.set_items(items(&["a", "b"]));
        dropdown.update(Message::KeyPress(key(KeyCode::Down)));
        dropdown.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(dropdown.highlighted_value(), Some("b"));
    }

    #[test]
    fn up_from_first_dismisses() {
        let mut dropdown = Dropdown::new();
        dropdown.set_items(items(&["a", "b"]));
        dropdown.update(Message::KeyPress(key(KeyCode::Down)));
        let cmd = dropdown.update(Message::KeyPress(key(KeyCode::Up)));
        assert!(cmd.is_none());
        let cmd = dropdown.update(Message::KeyPress(key(KeyCode::Up)));
        assert_eq!(cmd.into_message(), Some(Message::Dismissed));
        assert!(!dropdown.is_visible());
    }

    #[test]
    fn enter_selects_highlighted() {
        let mut dropdown = Dropdown::new();
        dropdown.set_items(items(&["alpha", "beta"]));
        dropdown.update(Message::KeyPress(key(KeyCode::Down)));

        let cmd = dropdown.update(Message::KeyPress(key(KeyCode::Enter)));
        assert_eq!(
            cmd.into_message(),
            Some(Message::Selected(1, "beta".to_string()))
        );
        assert!(!dropdown.is_visible());
    }

    #[test]
    fn esc_dismisses() {
        let mut dropdown = Dropdown::new();
        dropdown.set_items(items(&["a"]));
        let cmd = dropdown.update(Message::KeyPress(key(KeyCode::Esc)));
        assert_eq!(cmd.into_message(), Some(Message::Dismissed));
    }

    #[test]
    fn hidden_dropdown_ignores_keys() {
        let mut dropdown = Dropdown::new();
        let cmd = dropdown.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());
    }

    #[test]
    fn scroll_offset_follows_highlight() {
        let mut dropdown = Dropdown::new().with_max_visible(2);
        dropdown.set_items(items(&["a", "b", "c", "d"]));
        dropdown.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(dropdown.offset, 0);
        dropdown.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(dropdown.offset, 1);
        dropdown.update(Message::KeyPress(key(KeyCode::Down)));
        assert_eq!(dropdown.offset, 2);
        dropdown.update(Message::KeyPress(key(KeyCode::Up)));
        dropdown.update(Message::KeyPress(key(KeyCode::Up)));
        assert_eq!(dropdown.offset, 1);
    }

    #[test]
    fn renders_below_anchor() {
        let mut dropdown = Dropdown::new();
        dropdown.set_items(items(&["item1", "item2"]));

        let backend = ratatui::backend::TestBackend::new(20, 4);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| dropdown.view(frame, Rect::new(0, 0, 20, 1)))
            .unwrap();
        let buf = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..20).map(|x| buf[(x, y)].symbol()).collect() };

        assert!(!row(0).contains("item"));
        assert!(row(1).contains("▸ item1"));
        assert!(row(2).contains("item2"));
    }
}
