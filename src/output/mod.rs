pub mod json;
pub mod text;

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

    pub fn emit<T: Serialize + ?Sized>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(text_line),
            OutputMode::Json => json::print(json_value),
        }
    }

    pub fn emit_list<T, F>(&self, noun: &str, items: &[T], render: F) -> AppResult<()>
    where
        T: Serialize,
        F: Fn(&T) -> String,
    {
        match self.mode {
            OutputMode::Text => {
                for line in text::list_lines(noun, items.iter().map(render)) {
                    text::print_line(&line)?;
                }
                Ok(())
            }
            OutputMode::Json => json::print(items),
        }
    }
}
