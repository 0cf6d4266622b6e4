//! The read-eval-print loop.

use crate::commands::CommandProcessor;
use crate::metrics::SessionSummary;
use crate::terminal::Terminal;
use std::io;
use tracing::{debug, info, warn};

/// Run a command session until `quit` or end of input.
///
/// Each line yields exactly one output line on success or one error line on
/// failure (`quit` yields neither). Command errors never end the session;
/// only I/O errors on the terminal do.
///
/// # Returns
/// Counters for the commands processed by `processor`
pub fn run_session<T: Terminal>(
    processor: &mut CommandProcessor,
    terminal: &mut T,
) -> io::Result<SessionSummary> {
    info!("Session started");

    while processor.is_running() {
        let Some(line) = terminal.read_line()? else {
            debug!("End of input");
            break;
        };

        match processor.process_line(&line) {
            Ok(response) => {
                if let Some(out) = response.line() {
                    terminal.print_line(out)?;
                }
            }
            Err(e) => {
                warn!(error = %e, "Command rejected");
                terminal.print_error(&e.to_string())?;
            }
        }
    }

    let summary = processor.metrics().summary();
    info!("Session ended: {}", summary);
    Ok(summary)
}
