use colored::Colorize;

use crate::core::models::value::Value;

/// Print a success line.
pub fn success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print a warning on stderr so stdout stays machine-readable.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    println!("\n{}", msg.bold());
}

/// Print one resolved `key: value` pair.
pub fn entry(key: &str, value: &Value) {
    println!("  {}: {value}", key.cyan());
}

/// Print an environment name, starred when it is the current one.
pub fn environment(name: &str, current: bool) {
    if current {
        println!("* {}", name.green());
    } else {
        println!("  {name}");
    }
}
