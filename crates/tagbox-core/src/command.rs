/// A side effect returned from [`Component::update`](crate::Component::update)
/// or one of the component's lifecycle hooks.
///
/// Commands are plain data.  A component never touches the host directly; it
/// describes what should happen (deliver a message, move keyboard focus) and
/// the host executes the description.  Everything is synchronous: there is no
/// async work behind a command.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Notify the parent (and re-enter update) with a message:
/// let cmd = Command::message(Msg::Added("rust".into()));
///
/// // Ask the host to move focus to the text field:
/// let cmd = Command::host(HostRequest::FocusInput);
/// ```
pub struct Command<Msg> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg> {
    None,
    Message(Msg),
    Host(HostRequest),
    Batch(Vec<Command<Msg>>),
}

/// Requests a component makes of the host that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Give keyboard focus to the component's text-entry field.
    FocusInput,
    /// Give keyboard focus to the component as a whole.
    FocusWidget,
}

/// A single executable step produced by flattening a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<Msg> {
    /// Deliver this message back to the component (and its parent).
    Message(Msg),
    /// Perform this host request.
    Host(HostRequest),
}

impl<Msg> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Ask the host to do something on the component's behalf.
    pub fn host(request: HostRequest) -> Self {
        Command {
            inner: CommandInner::Host(request),
        }
    }

    /// Combine several commands.  Effects keep the order they are given in.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_default(),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Append another command after this one.
    pub fn and(self, next: Command<Msg>) -> Self {
        Command::batch([self, next])
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg>(self, f: impl Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg>(self, f: &dyn Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Host(request) => Command::host(request),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(cmds.into_iter().map(|c| c.map_with(f)).collect()),
            },
        }
    }

    /// Flatten into the ordered list of effects the host should execute.
    pub fn into_effects(self) -> Vec<Effect<Msg>> {
        let mut effects = Vec::new();
        self.collect_effects(&mut effects);
        effects
    }

    fn collect_effects(self, out: &mut Vec<Effect<Msg>>) {
        match self.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => out.push(Effect::Message(msg)),
            CommandInner::Host(request) => out.push(Effect::Host(request)),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_effects(out);
                }
            }
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is a single immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// All messages carried by this command, in order.
    pub fn into_messages(self) -> Vec<Msg> {
        self.into_effects()
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::Message(msg) => Some(msg),
                Effect::Host(_) => None,
            })
            .collect()
    }
}

impl<Msg> Default for Command<Msg> {
    fn default() -> Self {
        Command::none()
    }
}

impl<Msg> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            CommandInner::None => f.write_str("Command::None"),
            CommandInner::Message(_) => f.write_str("Command::Message(..)"),
            CommandInner::Host(request) => write!(f, "Command::Host({request:?})"),
            CommandInner::Batch(cmds) => f.debug_list().entries(cmds).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
        assert!(cmd.into_effects().is_empty());
    }

    #[test]
    fn command_message_round_trips() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn command_batch_drops_noops_and_unwraps_single() {
        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::message(1)]);
        assert_eq!(cmd.into_message(), Some(1));
    }

    #[test]
    fn command_batch_preserves_order() {
        let cmd: Command<i32> = Command::batch(vec![
            Command::message(1),
            Command::host(HostRequest::FocusInput),
            Command::batch(vec![Command::message(2), Command::message(3)]),
        ]);
        assert_eq!(
            cmd.into_effects(),
            vec![
                Effect::Message(1),
                Effect::Host(HostRequest::FocusInput),
                Effect::Message(2),
                Effect::Message(3),
            ]
        );
    }

    #[test]
    fn command_and_appends() {
        let cmd: Command<i32> = Command::message(1).and(Command::message(2));
        assert_eq!(cmd.into_messages(), vec![1, 2]);
    }

    #[test]
    fn command_map_keeps_host_requests() {
        let cmd: Command<i32> =
            Command::batch(vec![Command::message(7), Command::host(HostRequest::FocusWidget)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(
            mapped.into_effects(),
            vec![
                Effect::Message("7".to_string()),
                Effect::Host(HostRequest::FocusWidget),
            ]
        );
    }
}
