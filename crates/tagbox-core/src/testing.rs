use crate::command::{Command, Effect, HostRequest};
use crate::component::Component;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Component`] without a real terminal.
///
/// `ComponentHarness` plays the host: it runs the lifecycle hooks in order,
/// records every message a component emits, and captures the
/// [`HostRequest`]s it makes.  Emitted messages stay queued until
/// [`drain_messages`](ComponentHarness::drain_messages) feeds them back into
/// `update` or [`take_messages`](ComponentHarness::take_messages) hands them
/// to the test.
///
/// # Example
///
/// ```rust,ignore
/// use tagbox_core::testing::ComponentHarness;
///
/// let mut h = ComponentHarness::mount(TagInput::new().with_items(["a"]));
/// h.send(Message::KeyPress(key(KeyCode::Char('b'))));
/// h.send(Message::KeyPress(key(KeyCode::Enter)));
/// assert_eq!(h.take_messages(), vec![Message::Added("b".into())]);
/// ```
pub struct ComponentHarness<C: Component> {
    component: C,
    pending_messages: Vec<C::Message>,
    host_requests: Vec<HostRequest>,
}

impl<C: Component> ComponentHarness<C> {
    /// Wrap a component without running any lifecycle hooks.
    pub fn new(component: C) -> Self {
        Self {
            component,
            pending_messages: Vec::new(),
            host_requests: Vec::new(),
        }
    }

    /// Wrap a component and run `init`, a first 80x24 render, then `mounted`.
    pub fn mount(component: C) -> Self {
        let mut harness = Self::new(component);
        let cmd = harness.component.init();
        harness.collect(cmd);
        harness.render(80, 24);
        let cmd = harness.component.mounted();
        harness.collect(cmd);
        harness
    }

    /// Run the `unmounted` hook and hand the component back.
    pub fn unmount(mut self) -> C {
        self.component.unmounted();
        self.component
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.collect(cmd);
    }

    /// Call an operation on the component directly and collect its command.
    pub fn call(&mut self, f: impl FnOnce(&mut C) -> Command<C::Message>) {
        let cmd = f(&mut self.component);
        self.collect(cmd);
    }

    /// Feed queued messages back into `update` until no new ones appear.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.component.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Remove and return queued messages without delivering them.
    pub fn take_messages(&mut self) -> Vec<C::Message> {
        std::mem::take(&mut self.pending_messages)
    }

    /// Queued messages, oldest first.
    pub fn messages(&self) -> &[C::Message] {
        &self.pending_messages
    }

    /// Host requests made so far, oldest first.
    pub fn host_requests(&self) -> &[HostRequest] {
        &self.host_requests
    }

    /// Remove and return the recorded host requests.
    pub fn take_host_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.host_requests)
    }

    /// Get a shared reference to the component for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component for direct test setup.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory test backend fails to draw, which it does not.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend");
        terminal
            .draw(|frame| {
                let area = frame.area();
                self.component.view(frame, area);
            })
            .expect("test backend draw");
        terminal.backend().buffer().clone()
    }

    /// Render the component and return the visible content as a plain string.
    ///
    /// Rows are separated by newlines.  Trailing whitespace within each row is
    /// preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: Command<C::Message>) {
        for effect in cmd.into_effects() {
            match effect {
                Effect::Message(msg) => self.pending_messages.push(msg),
                Effect::Host(request) => self.host_requests.push(request),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;
    use ratatui::Frame;

    struct Counter {
        count: i64,
        log: Vec<&'static str>,
    }

    #[derive(Debug, PartialEq)]
    enum CounterMsg {
        Increment,
        Echo(i64),
    }

    impl Component for Counter {
        type Message = CounterMsg;

        fn init(&mut self) -> Command<CounterMsg> {
            self.log.push("init");
            Command::none()
        }

        fn mounted(&mut self) -> Command<CounterMsg> {
            self.log.push("mounted");
            Command::host(HostRequest::FocusWidget)
        }

        fn unmounted(&mut self) {
            self.log.push("unmounted");
        }

        fn update(&mut self, msg: CounterMsg) -> Command<CounterMsg> {
            match msg {
                CounterMsg::Increment => {
                    self.count += 1;
                    Command::message(CounterMsg::Echo(self.count))
                }
                CounterMsg::Echo(_) => Command::none(),
            }
        }

        fn view(&self, frame: &mut Frame, area: Rect) {
            frame.render_widget(Paragraph::new(format!("Count: {}", self.count)), area);
        }
    }

    fn counter() -> Counter {
        Counter {
            count: 0,
            log: Vec::new(),
        }
    }

    #[test]
    fn mount_runs_hooks_in_order() {
        let h = ComponentHarness::mount(counter());
        assert_eq!(h.component().log, vec!["init", "mounted"]);
        assert_eq!(h.host_requests(), &[HostRequest::FocusWidget]);
    }

    #[test]
    fn unmount_runs_hook() {
        let h = ComponentHarness::mount(counter());
        let c = h.unmount();
        assert_eq!(c.log.last(), Some(&"unmounted"));
    }

    #[test]
    fn send_queues_emitted_messages() {
        let mut h = ComponentHarness::new(counter());
        h.send(CounterMsg::Increment);
        h.send(CounterMsg::Increment);
        assert_eq!(h.take_messages(), vec![CounterMsg::Echo(1), CounterMsg::Echo(2)]);
        assert!(h.messages().is_empty());
    }

    #[test]
    fn drain_delivers_messages() {
        let mut h = ComponentHarness::new(counter());
        h.send(CounterMsg::Increment);
        h.drain_messages();
        assert!(h.messages().is_empty());
        assert_eq!(h.component().count, 1);
    }

    #[test]
    fn render_string_shows_content() {
        let mut h = ComponentHarness::new(counter());
        h.call(|c| c.update(CounterMsg::Increment));
        assert!(h.render_string(20, 1).contains("Count: 1"));
    }
}
