//! Tag input: a text field that commits entries into a list of tags.
//!
//! Type text and press Enter (or a configured separator key) to add a tag.
//! With the text field empty, Backspace or Left selects the last tag; while a
//! tag is selected, Left/Right move between tags, Backspace/Delete remove the
//! selected one, and Tab returns to the text field.  Optionally, an
//! autocomplete dropdown offers candidates as you type.
//!
//! Additions pass through a transform, the validators, a duplicate check, an
//! optional cap, and (if configured) an autocomplete-only restriction.
//! Rejected additions are silent: no `Added` message is emitted.
//!
//! # Example
//!
//! ```ignore
//! use tagbox_widgets::tag_input::TagInput;
//! use tagbox_widgets::validation::{min_length, Validators};
//!
//! let tags = TagInput::new()
//!     .with_items(["rust", "tui"])
//!     .with_max_items(5)
//!     .with_separator_keys(vec![KeyCode::Char(',')])
//!     .with_validators(Validators::new().with(min_length(2)))
//!     .with_autocomplete(true)
//!     .with_autocomplete_items(vec!["ratatui".into(), "crossterm".into()]);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tagbox_core::binding::{Bound, ObserverId};
use tagbox_core::command::{Command, HostRequest};
use tagbox_core::component::Component;

use crate::autocomplete;
use crate::dropdown::{self, Dropdown};
use crate::focus::FocusState;
use crate::keypress::{KeyAction, TagNavigation};
use crate::listeners::{self, EventKind, Listener, ListenerEvent, ListenerRegistry};
use crate::text_edit::TextEditState;
use crate::validation::{Rule, ValidationError, Validators};

/// Placeholder shown in the text field once at least one tag exists.
pub const PLACEHOLDER: &str = "+ Tag";

/// Placeholder shown in the text field while there are no tags.
pub const SECONDARY_PLACEHOLDER: &str = "Enter a new tag";

const MAX_ITEMS_WARNING: &str =
    "The number of items specified was greater than the property max-items.";

/// Messages for the tag input component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press to route to the text field or the selected tag.
    KeyPress(KeyEvent),
    /// The host gave the widget keyboard focus.
    Focus,
    /// The host took keyboard focus away.
    Blur,
    /// A message for the autocomplete dropdown.
    Dropdown(dropdown::Message),
    /// Emitted after a tag was added.
    Added(String),
    /// Emitted after a tag was removed.
    Removed(String),
    /// Emitted when the selection changes; `None` means nothing is selected.
    Selected(Option<String>),
}

/// Why a candidate tag was not added.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("invalid tag: {0}")]
    Invalid(#[from] ValidationError),
    #[error("`{0}` is already in the list")]
    Duplicate(String),
    #[error("the maximum of {0} tags has been reached")]
    MaxItemsReached(usize),
    #[error("tags may only be added from autocomplete")]
    NotFromAutocomplete,
}

/// Style configuration for the tag input.
#[derive(Debug, Clone)]
pub struct TagInputStyle {
    /// Style for an unselected tag chip.
    pub tag: Style,
    /// Style for the selected tag chip.
    pub selected_tag: Style,
    /// Style for text typed into the field.
    pub input: Style,
    /// Style for the placeholder.
    pub placeholder: Style,
    /// Style for the cursor cell.
    pub cursor: Style,
}

impl Default for TagInputStyle {
    fn default() -> Self {
        Self {
            tag: Style::default().fg(Color::White).bg(Color::DarkGray),
            selected_tag: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            input: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Maps raw text to the text that is stored and compared.
pub type Transform = Box<dyn Fn(&str) -> String + Send>;

/// Renders one tag chip; the flag tells whether the tag is selected.
pub type TagTemplate = Box<dyn Fn(&str, bool) -> Span<'static> + Send>;

/// A text field that collects a list of tags.
pub struct TagInput {
    items: Bound<Vec<String>>,
    editor: TextEditState,
    focus_state: FocusState,
    separator_keys: Vec<KeyCode>,
    placeholder: String,
    secondary_placeholder: String,
    max_items: Option<usize>,
    read_only: bool,
    transform: Transform,
    validators: Validators,
    autocomplete: bool,
    autocomplete_items: Vec<String>,
    only_from_autocomplete: bool,
    template: Option<TagTemplate>,
    style: TagInputStyle,
    block: Option<Block<'static>>,
    dropdown: Dropdown,
    dropdown_linked: bool,
    listeners: ListenerRegistry<TagInput, Message>,
    initialized: bool,
    view_initialized: bool,
}

impl Default for TagInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TagInput {
    /// Create an empty tag input with default settings.
    pub fn new() -> Self {
        Self {
            items: Bound::new(Vec::new()),
            editor: TextEditState::new(),
            focus_state: FocusState::Idle,
            separator_keys: Vec::new(),
            placeholder: PLACEHOLDER.to_string(),
            secondary_placeholder: SECONDARY_PLACEHOLDER.to_string(),
            max_items: None,
            read_only: false,
            transform: Box::new(|item| item.to_string()),
            validators: Validators::new(),
            autocomplete: false,
            autocomplete_items: Vec::new(),
            only_from_autocomplete: false,
            template: None,
            style: TagInputStyle::default(),
            block: None,
            dropdown: Dropdown::new(),
            dropdown_linked: false,
            listeners: ListenerRegistry::new(),
            initialized: false,
            view_initialized: false,
        }
    }

    /// Set the initial tags.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.set(items.into_iter().map(Into::into).collect());
        self
    }

    /// Keys that commit the current text, in addition to Enter.
    pub fn with_separator_keys(mut self, keys: Vec<KeyCode>) -> Self {
        self.separator_keys = keys;
        self
    }

    /// Placeholder shown once at least one tag exists.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Placeholder shown while the list is empty.
    pub fn with_secondary_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.secondary_placeholder = placeholder.into();
        self
    }

    /// Cap the number of tags.
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// In read-only mode the text field is hidden and tags cannot be selected.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Transform applied to text before it is validated and stored.
    pub fn with_transform(mut self, f: impl Fn(&str) -> String + Send + 'static) -> Self {
        self.transform = Box::new(f);
        self
    }

    /// Replace the validators.
    pub fn with_validators(mut self, validators: Validators) -> Self {
        self.validators = validators;
        self
    }

    /// Append one validation rule.
    pub fn with_validator(mut self, rule: Rule) -> Self {
        self.validators.push(rule);
        self
    }

    /// Enable the autocomplete dropdown.  Takes effect when the widget is mounted.
    pub fn with_autocomplete(mut self, enabled: bool) -> Self {
        self.autocomplete = enabled;
        self
    }

    /// Candidates offered by the autocomplete dropdown.
    pub fn with_autocomplete_items(mut self, items: Vec<String>) -> Self {
        self.autocomplete_items = items;
        self
    }

    /// Only accept tags picked from the autocomplete dropdown.
    pub fn with_only_from_autocomplete(mut self, only: bool) -> Self {
        self.only_from_autocomplete = only;
        self
    }

    /// Render tags with a custom template instead of the default chip.
    pub fn with_tag_template(
        mut self,
        template: impl Fn(&str, bool) -> Span<'static> + Send + 'static,
    ) -> Self {
        self.template = Some(Box::new(template));
        self
    }

    pub fn with_style(mut self, style: TagInputStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap the widget in the given block (border/title).
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Replace the dropdown used for autocomplete (for its style and size).
    pub fn with_dropdown(mut self, dropdown: Dropdown) -> Self {
        self.dropdown = dropdown;
        self
    }

    // --- Bound state ---

    /// The current tags, in insertion order.
    pub fn items(&self) -> &[String] {
        self.items.get()
    }

    pub fn len(&self) -> usize {
        self.items.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.get().is_empty()
    }

    /// Replace the tags from the host side.  Observers are notified; a
    /// selection that no longer points at a tag is cleared.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items.set(items);
        if let Some(i) = self.focus_state.selected() {
            if i >= self.len() {
                self.focus_state.select(None);
            }
        }
    }

    /// Observe every change to the tag list.
    pub fn on_change(&mut self, observer: impl FnMut(&Vec<String>) + Send + 'static) -> ObserverId {
        self.items.subscribe(observer)
    }

    /// Stop observing the tag list.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.items.unsubscribe(id)
    }

    // --- Accessors ---

    /// Current text in the field.
    pub fn value(&self) -> String {
        self.editor.value()
    }

    /// Set the text in the field, untransformed.
    pub fn set_value(&mut self, value: &str) {
        self.editor.set_value(value);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.focus_state.selected()
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.focus_state
            .selected()
            .and_then(|i| self.items.get().get(i))
            .map(String::as_str)
    }

    pub fn is_input_focused(&self) -> bool {
        self.focus_state.is_input_focused()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if read_only {
            self.focus_state.select(None);
            self.focus_state.blur();
            self.editor.clear();
            self.dropdown.clear();
        }
    }

    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }

    pub fn set_max_items(&mut self, max: Option<usize>) {
        self.max_items = max;
    }

    pub fn autocomplete_items(&self) -> &[String] {
        &self.autocomplete_items
    }

    pub fn set_autocomplete_items(&mut self, items: Vec<String>) {
        self.autocomplete_items = items;
    }

    /// The dropdown showing autocomplete matches.
    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub(crate) fn dropdown_mut(&mut self) -> &mut Dropdown {
        &mut self.dropdown
    }

    /// Candidates currently matching the text field.
    pub fn matching_items(&self) -> &[String] {
        self.dropdown.items()
    }

    /// Whether the current text, once transformed, passes every validator.
    pub fn is_valid(&self) -> bool {
        self.validators.is_valid(&self.transformed(&self.editor.value()))
    }

    /// Every validator failure for the current text.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        self.validators.errors(&self.transformed(&self.editor.value()))
    }

    // --- Listeners ---

    /// Register `listener` for `kind` when `when` holds.  Listeners run in
    /// registration order after the built-in ones.
    pub fn add_listener(
        &mut self,
        kind: EventKind,
        listener: Listener<TagInput, Message>,
        when: bool,
    ) -> bool {
        self.listeners.add(kind, listener, when)
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.len(kind)
    }

    /// Run every listener registered for `kind`, in order.
    pub fn fire_events(&mut self, kind: EventKind, event: &mut ListenerEvent) -> Command<Message> {
        let registered = self.listeners.get(kind).to_vec();
        listeners::fire(&registered, self, event)
    }

    fn fire_change(&mut self) -> Command<Message> {
        let mut event = ListenerEvent::change();
        self.fire_events(EventKind::Change, &mut event)
    }

    // --- Operations ---

    /// Focus the text field and clear any tag selection.
    ///
    /// Does nothing in read-only mode or when the field already has focus.
    pub fn focus(&mut self) -> Command<Message> {
        if self.read_only || !self.focus_state.focus_input() {
            return Command::none();
        }
        Command::host(HostRequest::FocusInput).and(self.select_item(None))
    }

    /// Mark the text field as unfocused.
    pub fn blur(&mut self) {
        self.focus_state.blur();
    }

    /// Commit the current text as a tag.
    ///
    /// The text is transformed and written back, then checked with
    /// [`check_addition`](Self::check_addition).  The field is cleared
    /// whether or not the tag was accepted.
    pub fn add_item(&mut self, from_autocomplete: bool) -> Command<Message> {
        let raw = self.editor.value();
        let item = self.set_input_value(&raw);

        let cmd = match self.check_addition(&item, from_autocomplete) {
            Ok(()) => {
                self.items.modify(|items| items.push(item.clone()));
                self.fire_change().and(Command::message(Message::Added(item)))
            }
            Err(reason) => {
                tracing::debug!(%reason, "tag rejected");
                Command::none()
            }
        };

        self.set_input_value("");
        cmd
    }

    /// Whether `item` (already transformed) would be accepted right now.
    pub fn check_addition(&self, item: &str, from_autocomplete: bool) -> Result<(), Rejection> {
        self.validators.validate(item)?;
        if self.items.get().iter().any(|existing| existing == item) {
            return Err(Rejection::Duplicate(item.to_string()));
        }
        if let Some(max) = self.max_items {
            if self.len() >= max {
                return Err(Rejection::MaxItemsReached(max));
            }
        }
        if self.only_from_autocomplete && !from_autocomplete {
            return Err(Rejection::NotFromAutocomplete);
        }
        Ok(())
    }

    /// Remove the first tag equal to `item` and return focus to the text field.
    pub fn remove_item(&mut self, item: &str) -> Command<Message> {
        let Some(index) = self.position(item) else {
            tracing::debug!(item, "remove ignored: no such tag");
            return Command::none();
        };

        let removed = self.items.modify(|items| items.remove(index));
        match self.focus_state.selected() {
            Some(i) if i == index => self.focus_state.select(None),
            Some(i) if i > index => self.focus_state.select(Some(i - 1)),
            _ => {}
        }

        Command::batch([
            self.fire_change(),
            self.focus(),
            Command::message(Message::Removed(removed)),
        ])
    }

    /// Select `item`, or clear the selection with `None`.
    ///
    /// In read-only mode the selection is left alone and focus goes to the
    /// widget as a whole.
    pub fn select_item(&mut self, item: Option<&str>) -> Command<Message> {
        if self.read_only {
            return Command::host(HostRequest::FocusWidget);
        }

        let index = match item {
            Some(text) => match self.position(text) {
                Some(i) => Some(i),
                None => {
                    tracing::debug!(item = text, "select ignored: no such tag");
                    return Command::none();
                }
            },
            None => None,
        };

        self.focus_state.select(index);
        if index.is_some() {
            self.dropdown.hide();
        }
        Command::message(Message::Selected(item.map(str::to_string)))
    }

    /// Apply the key action for `key` to the tag `item` (or to no tag).
    /// The key is consumed either way.
    pub fn handle_keydown(&mut self, key: KeyEvent, item: Option<&str>) -> Command<Message> {
        let index = item.and_then(|text| self.position(text));
        match KeyAction::from_key(key.code) {
            Some(action) => action.apply(self, index),
            None => Command::none(),
        }
    }

    fn position(&self, item: &str) -> Option<usize> {
        self.items.get().iter().position(|existing| existing == item)
    }

    fn transformed(&self, value: &str) -> String {
        if value.is_empty() {
            String::new()
        } else {
            (self.transform)(value)
        }
    }

    /// Write the transformed `value` into the field and return it.
    fn set_input_value(&mut self, value: &str) -> String {
        let item = self.transformed(value);
        if item.is_empty() {
            self.editor.clear();
        } else {
            self.editor.set_value(&item);
        }
        item
    }

    // --- Key routing ---

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        if key.kind == KeyEventKind::Release {
            return Command::none();
        }
        match self.focus_state {
            FocusState::Tag(i) => {
                let item = self.items.get().get(i).cloned();
                self.handle_keydown(key, item.as_deref())
            }
            FocusState::Input => self.handle_input_key(key),
            FocusState::Idle => Command::none(),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Command<Message> {
        let mut event = ListenerEvent::key(EventKind::KeyDown, key);
        let mut cmd = self.fire_events(EventKind::KeyDown, &mut event);
        if !self.focus_state.is_input_focused() {
            return cmd;
        }

        let dropdown_key = matches!(
            key.code,
            KeyCode::Up | KeyCode::Down | KeyCode::Enter | KeyCode::Esc
        );
        if dropdown_key && self.dropdown_linked && self.dropdown.is_visible() {
            return cmd.and(self.route_to_dropdown(key));
        }

        if !event.is_default_prevented() {
            if key.code == KeyCode::Enter {
                cmd = cmd.and(self.add_item(false));
            } else {
                self.edit_text(key);
            }
        }

        if self.focus_state.is_input_focused() {
            let mut event = ListenerEvent::key(EventKind::KeyUp, key);
            cmd = cmd.and(self.fire_events(EventKind::KeyUp, &mut event));
        }
        cmd
    }

    fn edit_text(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.editor.insert_char(c);
            }
            (KeyCode::Backspace, _) => {
                self.editor.delete_back();
            }
            (KeyCode::Delete, _) => {
                self.editor.delete_forward();
            }
            (KeyCode::Left, _) => self.editor.move_left(),
            (KeyCode::Right, _) => self.editor.move_right(),
            (KeyCode::Home, _) => self.editor.move_home(),
            (KeyCode::End, _) => self.editor.move_end(),
            _ => {}
        }
    }

    /// Run a key through the dropdown and act on what it reports.
    fn route_to_dropdown(&mut self, key: KeyEvent) -> Command<Message> {
        let reported = self
            .dropdown
            .update(dropdown::Message::KeyPress(key))
            .into_messages();
        Command::batch(
            reported
                .into_iter()
                .map(|msg| self.handle_dropdown(msg))
                .collect::<Vec<_>>(),
        )
    }

    fn handle_dropdown(&mut self, msg: dropdown::Message) -> Command<Message> {
        if !self.dropdown_linked {
            tracing::debug!(?msg, "dropdown not linked; message ignored");
            return Command::none();
        }
        match msg {
            dropdown::Message::KeyPress(key) => self.route_to_dropdown(key),
            dropdown::Message::Selected(_, value) => autocomplete::on_item_selected(self, value),
            dropdown::Message::Dismissed => autocomplete::on_dismissed(self),
        }
    }

    // --- Rendering ---

    /// Spans grouped into units that never break across lines.
    fn segments(&self) -> Vec<Vec<Span<'static>>> {
        let selected = self.focus_state.selected();
        let mut segments: Vec<Vec<Span<'static>>> = self
            .items
            .get()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = selected == Some(i);
                let chip = match self.template {
                    Some(ref template) => template(item, is_selected),
                    None => {
                        let style = if is_selected {
                            self.style.selected_tag
                        } else {
                            self.style.tag
                        };
                        let text = if self.read_only {
                            format!(" {item} ")
                        } else {
                            format!(" {item} × ")
                        };
                        Span::styled(text, style)
                    }
                };
                vec![chip, Span::raw(" ")]
            })
            .collect();

        if !self.read_only {
            segments.push(self.input_spans());
        }
        segments
    }

    fn input_spans(&self) -> Vec<Span<'static>> {
        let focused = self.focus_state.is_input_focused();

        if self.editor.is_empty() {
            let placeholder = if self.is_empty() {
                &self.secondary_placeholder
            } else {
                &self.placeholder
            };
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(" ", self.style.cursor));
            }
            spans.push(Span::styled(placeholder.clone(), self.style.placeholder));
            return spans;
        }

        if !focused {
            return vec![Span::styled(self.editor.value(), self.style.input)];
        }

        let chars = self.editor.chars();
        let cursor = self.editor.cursor();
        let mut spans = Vec::new();
        let before: String = chars[..cursor].iter().collect();
        if !before.is_empty() {
            spans.push(Span::styled(before, self.style.input));
        }
        if cursor < chars.len() {
            spans.push(Span::styled(chars[cursor].to_string(), self.style.cursor));
            let after: String = chars[cursor + 1..].iter().collect();
            if !after.is_empty() {
                spans.push(Span::styled(after, self.style.input));
            }
        } else {
            spans.push(Span::styled(" ", self.style.cursor));
        }
        spans
    }
}

/// Lay segments out left to right, starting a new line when one would overflow.
fn wrap_segments(segments: Vec<Vec<Span<'static>>>, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for segment in segments {
        let segment_width: usize = segment.iter().map(Span::width).sum();
        if used > 0 && used + segment_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        used += segment_width;
        current.extend(segment);
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

impl TagNavigation for TagInput {
    type Message = Message;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn select_at(&mut self, index: Option<usize>) -> Command<Message> {
        let item = index.and_then(|i| self.items.get().get(i).cloned());
        self.select_item(item.as_deref())
    }

    fn remove_at(&mut self, index: usize) -> Command<Message> {
        match self.items.get().get(index).cloned() {
            Some(item) => self.remove_item(&item),
            None => Command::none(),
        }
    }

    fn focus_input(&mut self) -> Command<Message> {
        self.focus()
    }
}

/// Key-down listener: with the field empty, Backspace, Delete or Left
/// selects the last tag.
fn backspace_listener(widget: &mut TagInput, event: &mut ListenerEvent) -> Command<Message> {
    let Some(code) = event.key_event().map(|key| key.code) else {
        return Command::none();
    };
    let is_nav_key = matches!(code, KeyCode::Backspace | KeyCode::Delete | KeyCode::Left);
    if !is_nav_key || !widget.editor.is_empty() || widget.is_empty() {
        return Command::none();
    }

    event.prevent_default();
    match KeyAction::from_key(code) {
        Some(action) => action.apply(widget, None),
        None => Command::none(),
    }
}

/// Key-down listener: a configured separator key commits the current text.
fn separator_listener(widget: &mut TagInput, event: &mut ListenerEvent) -> Command<Message> {
    let Some(code) = event.key_event().map(|key| key.code) else {
        return Command::none();
    };
    if !widget.separator_keys.contains(&code) {
        return Command::none();
    }
    event.prevent_default();
    widget.add_item(false)
}

impl Component for TagInput {
    type Message = Message;

    fn init(&mut self) -> Command<Message> {
        if self.initialized {
            return Command::none();
        }
        self.initialized = true;

        self.listeners.add(EventKind::KeyDown, backspace_listener, true);
        let has_separators = !self.separator_keys.is_empty();
        self.listeners
            .add(EventKind::KeyDown, separator_listener, has_separators);

        if let Some(max) = self.max_items {
            let len = self.len();
            if len > max {
                self.max_items = Some(len);
                tracing::warn!(max, len, "{}", MAX_ITEMS_WARNING);
            }
        }
        Command::none()
    }

    fn mounted(&mut self) -> Command<Message> {
        if self.autocomplete {
            if !self.view_initialized {
                self.listeners
                    .add(EventKind::KeyUp, autocomplete::autocomplete_listener, true);
            }
            self.dropdown_linked = true;
        }
        self.view_initialized = true;
        Command::none()
    }

    fn unmounted(&mut self) {
        self.dropdown_linked = false;
        self.dropdown.clear();
    }

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            Message::Focus => self.focus(),
            Message::Blur => {
                self.blur();
                Command::none()
            }
            Message::Dropdown(msg) => self.handle_dropdown(msg),
            Message::Added(_) | Message::Removed(_) | Message::Selected(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let inner = match self.block {
            Some(ref block) => {
                let inner = block.inner(area);
                frame.render_widget(block.clone(), area);
                inner
            }
            None => area,
        };

        let lines = wrap_segments(self.segments(), inner.width);
        let line_count = (lines.len().max(1) as u16).min(inner.height.max(1));
        frame.render_widget(Paragraph::new(lines), inner);

        if self.dropdown_linked {
            let anchor = Rect {
                y: inner.y + line_count - 1,
                height: 1,
                ..inner
            };
            self.dropdown.view(frame, anchor);
        }
    }

    fn focused(&self) -> bool {
        self.focus_state.is_active()
    }
}
