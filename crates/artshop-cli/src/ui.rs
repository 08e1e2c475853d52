use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Blocking yes/no prompt gating destructive actions. Returns false for
/// anything but an explicit yes.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes" | "д" | "да"))
}

/// Status line after a successful action, the CLI's stand-in for the
/// transient snackbar.
pub fn notify(text: &str) {
    println!("{}", text.green());
}
