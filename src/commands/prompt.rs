use std::io::{self, IsTerminal, Write};

use crate::error::AppResult;

pub fn interactive() -> bool {
    io::stdin().is_terminal()
}

pub fn confirm(prompt: &str) -> AppResult<bool> {
    let answer = prompt_line(&format!("{prompt} [y/N]: "))?;
    Ok(is_yes(&answer))
}

fn prompt_line(prompt: &str) -> AppResult<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;

    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
