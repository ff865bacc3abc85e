//! Human-facing output
//!
//! Rendering of the declared task tree and of the aggregate run result.

pub mod tree;

use crate::runner::Status;
use colored::Colorize;

pub use tree::*;

/// One-line verdict for an aggregate status
pub fn summary_line(status: Status) -> &'static str {
    if status.is_success() {
        "All tasks executed successfully."
    } else {
        "Some tasks failed."
    }
}

/// Print the aggregate verdict to stdout
pub fn print_summary(status: Status) {
    let line = summary_line(status);
    if status.is_success() {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(Status::Success), "All tasks executed successfully.");
        assert_eq!(summary_line(Status::Failure), "Some tasks failed.");
    }
}
