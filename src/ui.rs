use colored::Colorize;
use std::io::{self, Write};

/// Write rendered records to stdout in one go
pub fn print_records(output: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}

/// Report a lookup that matched nothing, verbatim and uncolored
pub fn not_found_message(message: &str) {
    eprintln!("{message}");
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message);
}

/// Turn off color output for the rest of the process
pub fn disable_colors() {
    colored::control::set_override(false);
}
