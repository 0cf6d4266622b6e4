pub mod mock_terminal;

pub use mock_terminal::{Line, MockTerminal};
