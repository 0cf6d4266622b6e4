//! Error types for the address book command processor.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every `CommandError` is a recoverable user-input error; its `Display` output is the
//! exact error line shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while parsing or executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A contact or address book field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `add-addressbook` with a name that is already registered
    #[error("an address book with that name already exists")]
    BookAlreadyExists,

    /// `remove-addressbook` / `print-addressbook` with an unknown name
    #[error("this address book does not exist")]
    BookNotFound,

    /// `add-contact` naming an unknown book
    #[error("the address book '{0}' does not exist.")]
    TargetBookMissing(String),

    /// Wrong number of comma-separated arguments
    #[error("invalid number of arguments")]
    InvalidArgumentCount,

    /// Contact ID argument is not an integer
    #[error("malformed contact ID")]
    MalformedContactId,

    /// No book holds a contact with the given ID
    #[error("contact does not exist")]
    ContactNotFound,

    /// Command token not in the dispatch table
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    /// Line does not have the `<command> <args>` shape
    #[error("invalid command format, try <command> <arg1>,<arg2>,...")]
    InvalidFormat,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
