//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use console::style;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print the outcome of a verification on stdout.
pub fn verification(verified: bool) {
    if verified {
        println!("{}", style("Password verified successfully.").green());
    } else {
        println!("{}", style("Password verification failed.").red());
    }
}
