use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// A parent owns the component, forwards input to it as messages, and decides
/// *where* it renders by passing a sub-region of the frame to
/// [`view`](Component::view).  Commands returned by the component are mapped
/// into the parent's message type with [`Command::map`].
///
/// # Lifecycle
///
/// The host drives a fixed sequence of hooks:
///
/// 1. [`init`](Component::init) once, before anything is rendered.
/// 2. [`view`](Component::view) for the first frame.
/// 3. [`mounted`](Component::mounted) once, right after that first frame.
/// 4. Any number of [`update`](Component::update) / `view` cycles.
/// 5. [`unmounted`](Component::unmounted) when the component leaves the
///    display tree.
///
/// # Composition pattern
///
/// ```rust,ignore
/// use tagbox_core::{Command, Component};
/// use tagbox_widgets::tag_input::{self, TagInput};
///
/// struct App { tags: TagInput }
///
/// enum AppMsg { Tags(tag_input::Message) }
///
/// impl App {
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Tags(m) => self.tags.update(m).map(AppMsg::Tags),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Called once before the first render.
    ///
    /// The default implementation does nothing.
    fn init(&mut self) -> Command<Self::Message> {
        Command::none()
    }

    /// Called once after the first render has completed.
    ///
    /// The default implementation does nothing.
    fn mounted(&mut self) -> Command<Self::Message> {
        Command::none()
    }

    /// Called when the component is removed from the display tree.  Tear
    /// down any links to other components here.
    fn unmounted(&mut self) {}

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle,
    /// except for overlays such as dropdowns, which may extend below it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// This is a hint for input routing.  The default implementation returns
    /// `false`.
    fn focused(&self) -> bool {
        false
    }
}
