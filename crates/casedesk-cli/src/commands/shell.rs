//! Interactive shell.
//!
//! Each line is split like a POSIX shell would and parsed with the same
//! clap definition as the command line, so `cases show CASE-101` in the
//! shell behaves exactly like `casedesk cases show CASE-101`.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::context::AppContext;
use super::output::Output;
use crate::Cli;

const PROMPT: &str = "casedesk> ";
const EXIT_WORDS: &[&str] = &["quit", "exit"];

/// Completes and hints the first word of a line.
struct ShellHelper {
    commands: Vec<String>,
}

impl ShellHelper {
    fn new() -> Self {
        let mut commands: Vec<String> = Cli::command()
            .get_subcommands()
            .map(|command| command.get_name().to_string())
            .filter(|name| name != "shell")
            .collect();
        commands.push("help".to_string());
        commands.extend(EXIT_WORDS.iter().map(|word| word.to_string()));
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn is_command(&self, word: &str) -> bool {
        self.commands.iter().any(|command| command == word)
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|command| command.starts_with(line))
            .map(|command| Pair {
                display: command.clone(),
                replacement: command.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let start = line.len() - line.trim_start().len();
        let first = line[start..].split_whitespace().next().unwrap_or("");
        if self.is_command(first) {
            let end = start + first.len();
            Owned(format!("{}{}{}", &line[..start], first.bright_cyan(), &line[end..]))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|command| command.starts_with(line) && command.len() > line.len())
            .map(|command| command[line.len()..].bright_black().to_string())
    }
}

impl Validator for ShellHelper {}

/// What a single shell line asks for.
#[derive(Debug)]
enum Line {
    Empty,
    Exit,
    Help(String),
    Run(Box<Cli>),
}

fn parse_line(line: &str) -> Result<Line> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Line::Empty);
    }
    if EXIT_WORDS.contains(&trimmed) {
        return Ok(Line::Exit);
    }

    let words = shell_words::split(trimmed).context("Could not split input")?;
    let args = std::iter::once("casedesk".to_string()).chain(words);
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Line::Run(Box::new(cli))),
        Err(err) => Ok(Line::Help(err.render().to_string())),
    }
}

pub async fn run(ctx: &AppContext, output: Output) -> Result<()> {
    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new()));

    println!("{}", "=== CaseDesk ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'help' for commands, 'overview' for the dashboard, or 'quit' to exit.".bright_black()
    );
    println!();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let parsed = match parse_line(&line) {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        eprintln!("{}", format!("Error: {:#}", err).red());
                        continue;
                    }
                };
                match parsed {
                    Line::Empty => continue,
                    Line::Exit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Line::Help(text) => {
                        let _ = rl.add_history_entry(line.trim());
                        print!("{}", text);
                    }
                    Line::Run(cli) => {
                        let _ = rl.add_history_entry(line.trim());
                        if cli.ephemeral && !ctx.ephemeral {
                            println!("{}", "--ephemeral only applies at startup".yellow());
                        }
                        let output = if cli.json { Output::new(true) } else { output };
                        let Some(command) = cli.command else {
                            continue;
                        };
                        if let Err(err) = super::dispatch(ctx, command, output).await {
                            tracing::debug!("Shell command failed: {:#}", err);
                            eprintln!("{}", format!("Error: {:#}", err).red());
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => return Err(err).context("Failed to read input"),
        }
    }

    Ok(())
}
