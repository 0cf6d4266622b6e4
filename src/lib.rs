//! Address Book - an interactive, line-oriented command processor for named
//! collections of validated contacts.
//!
//! Commands are read one per line (`<command> <arg1>,<arg2>,...`), executed against
//! an in-memory registry of address books, and answered with exactly one output or
//! error line.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (IDs, names, emails, phone numbers)
//! - **models**: `Contact` and `AddressBook`
//! - **registry**: The name → address book map and the contact ID sequence
//! - **commands**: Command parsing and dispatch
//! - **terminal**: Line-oriented input/output seam
//! - **session**: The read-eval-print loop
//! - **metrics**: Per-session command counters
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod registry;
pub mod session;
pub mod terminal;

pub use commands::{Command, CommandProcessor, Response, SessionState};
pub use config::Config;
pub use domain::{ContactId, ContactIdSequence, ValidationError};
pub use error::{CommandError, ConfigError};
pub use metrics::{SessionMetrics, SessionSummary};
pub use models::{AddressBook, Contact};
pub use registry::AddressBookRegistry;
pub use session::run_session;
pub use terminal::{LineTerminal, Terminal};
