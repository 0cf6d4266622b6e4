//! Command parsing and dispatch.
//!
//! An input line has the shape `<command> <arg1>,<arg2>,...`. [`Command::parse`]
//! turns it into a typed [`Command`]; [`CommandProcessor`] runs it against the
//! registry and produces a [`Response`].

pub mod processor;

pub use processor::{CommandProcessor, Response, SessionState};

use crate::domain::split_fields;
use crate::error::{CommandError, CommandResult};

/// The literal line that ends a session.
pub const QUIT: &str = "quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `quit`
    Quit,

    /// `add-addressbook <name>`
    AddAddressBook { name: String },

    /// `remove-addressbook <name>`
    RemoveAddressBook { name: String },

    /// `add-contact <book>,<name>,<email>,<phone>`
    AddContact {
        book: String,
        name: String,
        email: String,
        phone_number: String,
    },

    /// `remove-contact <name>,<id>`
    RemoveContact { name: String, id: i32 },

    /// `print-addressbook <name>`
    PrintAddressBook { name: String },
}

impl Command {
    /// Parse one input line.
    ///
    /// The trimmed line `quit` ends the session. Otherwise the line must hold
    /// at least two space separated tokens; the first is the command and
    /// everything after the first space is the argument payload.
    ///
    /// # Errors
    ///
    /// `InvalidFormat`, `UnknownCommand`, `InvalidArgumentCount` or
    /// `MalformedContactId`. Field contents are validated later, on execution.
    pub fn parse(line: &str) -> CommandResult<Self> {
        if line.trim() == QUIT {
            return Ok(Command::Quit);
        }

        if split_fields(line, ' ').len() < 2 {
            return Err(CommandError::InvalidFormat);
        }
        let (command, payload) = line
            .split_once(' ')
            .ok_or(CommandError::InvalidFormat)?;

        match command {
            "add-addressbook" => Ok(Command::AddAddressBook {
                name: payload.to_string(),
            }),
            "remove-addressbook" => Ok(Command::RemoveAddressBook {
                name: payload.to_string(),
            }),
            "print-addressbook" => Ok(Command::PrintAddressBook {
                name: payload.to_string(),
            }),
            "add-contact" => match split_fields(payload, ',').as_slice() {
                [book, name, email, phone_number] => Ok(Command::AddContact {
                    book: book.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    phone_number: phone_number.to_string(),
                }),
                _ => Err(CommandError::InvalidArgumentCount),
            },
            "remove-contact" => match split_fields(payload, ',').as_slice() {
                [name, id] => Ok(Command::RemoveContact {
                    name: name.to_string(),
                    id: id
                        .parse::<i32>()
                        .map_err(|_| CommandError::MalformedContactId)?,
                }),
                _ => Err(CommandError::InvalidArgumentCount),
            },
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// The command token this variant is invoked by.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Quit => QUIT,
            Command::AddAddressBook { .. } => "add-addressbook",
            Command::RemoveAddressBook { .. } => "remove-addressbook",
            Command::AddContact { .. } => "add-contact",
            Command::RemoveContact { .. } => "remove-contact",
            Command::PrintAddressBook { .. } => "print-addressbook",
        }
    }
}
