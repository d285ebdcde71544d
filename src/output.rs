use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        self.emit_lines(&[text_line.to_string()], json_value)
    }

    pub fn emit_lines<T: Serialize>(&self, text_lines: &[String], json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => {
                for line in text_lines {
                    println!("{line}");
                }
            }
            OutputMode::Json => {
                let payload = serde_json::to_string_pretty(json_value)?;
                println!("{payload}");
            }
        }

        Ok(())
    }
}
