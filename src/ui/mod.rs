//! Terminal UI components (spinner, colors, prompt handling).

use anyhow::Result;
use inquire::InquireError;

mod record;
mod spinner;
mod theme;

pub use record::{print_record, print_record_list, print_transformations};
pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive flow, treating Ctrl+C or Escape as a clean exit.
///
/// On cancellation a newline is printed to tidy the terminal and `Ok(())`
/// is returned instead of the prompt error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        result => result,
    }
}

/// Prints a hard failure without leaving the interactive flow.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
