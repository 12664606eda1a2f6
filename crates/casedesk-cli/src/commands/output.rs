use anyhow::{Context, Result};
use serde::Serialize;

/// Text or JSON, chosen once per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Prints `value` as pretty JSON, or hands it to `render` in text mode.
    pub fn emit<T, F>(&self, value: &T, render: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T),
    {
        if self.json {
            let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
            println!("{}", json);
        } else {
            render(value);
        }
        Ok(())
    }
}
