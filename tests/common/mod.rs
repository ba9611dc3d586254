//! Shared test utilities for `credit_manager` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use credit_manager::core::Console;
use std::collections::VecDeque;
use std::path::Path;

/// Console double that replays scripted lines and records every message.
///
/// A `None` entry stands for a line that never arrived; once the script is
/// used up the console reports itself exhausted.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<Option<String>>,
    pub printed: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(|line| line.map(Into::into)).collect(),
            printed: Vec::new(),
        }
    }

    /// Script made only of present lines
    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|line| Some(*line)))
    }
}

impl Console for ScriptedConsole {
    fn print_message(&mut self, message: &str) {
        self.printed.push(message.to_string());
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front().flatten()
    }

    fn is_exhausted(&self) -> bool {
        self.input.is_empty()
    }
}

/// Get a Command for the creditmanager binary with its config isolated under `config_home`.
///
/// # Panics
///
/// Panics if the binary cannot be found.
#[allow(deprecated)]
pub fn creditmanager_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("creditmanager").expect("creditmanager binary should exist");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home);
    cmd
}
