//! Interactive prompts over [`console::Term`]. Only the collection-setup
//! flow asks questions; `--json-only` skips all of this.

use std::io;

use colored::*;
use console::Term;

pub fn line(label: &str) -> io::Result<String> {
    let term = Term::stdout();
    term.write_str(&format!("{} {}: ", "[?]".blue().bold(), label))?;
    Ok(term.read_line()?.trim().to_string())
}

/// No-echo input for credentials.
pub fn secret(label: &str) -> io::Result<String> {
    let term = Term::stdout();
    term.write_str(&format!("{} {}: ", "[?]".blue().bold(), label))?;
    term.read_secure_line()
}

pub fn confirm(label: &str, default: bool) -> io::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let answer = line(&format!("{label} {hint}"))?;
    Ok(match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}
