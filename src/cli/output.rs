//! Output formatting
//!
//! Status prefixes and formatted messages for the terminal.

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {message}", status::SUCCESS);
}

/// Print an informational message
pub fn print_info(message: &str) {
    println!("{} {message}", status::INFO);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {message}", status::ERROR);
}
