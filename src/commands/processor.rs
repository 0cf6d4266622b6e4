//! Dispatch of parsed commands onto the address book registry.

use super::Command;
use crate::domain::ContactId;
use crate::error::{CommandError, CommandResult};
use crate::metrics::{SessionMetrics, UNPARSED};
use crate::registry::AddressBookRegistry;
use tracing::debug;

/// Lifecycle of a command session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Successful outcome of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A mutation succeeded; printed as `OK`
    Ok,

    /// Rendered address book, possibly empty
    Book(String),

    /// Session ended; prints nothing
    Quit,
}

impl Response {
    /// The output line for this response, if any.
    pub fn line(&self) -> Option<&str> {
        match self {
            Response::Ok => Some("OK"),
            Response::Book(rendered) => Some(rendered.as_str()),
            Response::Quit => None,
        }
    }
}

/// Routes commands to the in-memory registry.
///
/// Every command either succeeds with exactly one [`Response`] or fails with
/// exactly one [`CommandError`]; a failed command leaves no partial state.
#[derive(Debug)]
pub struct CommandProcessor {
    registry: AddressBookRegistry,
    state: SessionState,
    metrics: SessionMetrics,
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandProcessor {
    /// Create a processor over an empty registry.
    pub fn new() -> Self {
        Self {
            registry: AddressBookRegistry::new(),
            state: SessionState::Running,
            metrics: SessionMetrics::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn registry(&self) -> &AddressBookRegistry {
        &self.registry
    }

    /// Counters for every line handled by [`process_line`](Self::process_line).
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Parse and execute one input line, recording its outcome.
    ///
    /// Lines that fail to parse are counted under [`UNPARSED`].
    pub fn process_line(&mut self, line: &str) -> CommandResult<Response> {
        let (keyword, result) = match Command::parse(line) {
            Ok(command) => (command.keyword(), self.execute(command)),
            Err(e) => (UNPARSED, Err(e)),
        };
        self.metrics.record(keyword, result.is_ok());
        result
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> CommandResult<Response> {
        debug!(command = command.keyword(), "Dispatching command");

        match command {
            Command::Quit => {
                self.state = SessionState::Terminated;
                Ok(Response::Quit)
            }
            Command::AddAddressBook { name } => {
                self.registry.add_book(&name)?;
                Ok(Response::Ok)
            }
            Command::RemoveAddressBook { name } => {
                self.registry.remove_book(&name)?;
                Ok(Response::Ok)
            }
            Command::AddContact {
                book,
                name,
                email,
                phone_number,
            } => {
                self.registry
                    .add_contact(&book, &name, &email, &phone_number)?;
                Ok(Response::Ok)
            }
            Command::RemoveContact { name, id } => {
                let id = ContactId::from_raw(id).ok_or(CommandError::ContactNotFound)?;
                self.registry.remove_contact(&name, id)?;
                Ok(Response::Ok)
            }
            Command::PrintAddressBook { name } => {
                Ok(Response::Book(self.registry.render_book(&name)?))
            }
        }
    }
}
