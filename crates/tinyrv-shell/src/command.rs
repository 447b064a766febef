//! Command parsing.
//!
//! Turns one input line into a typed `Command`. Paths are single
//! whitespace-delimited words; `echo` and `write` keep the rest of the line
//! verbatim so text can contain spaces.

use crate::error::ShellError;
use alloc::string::String;

/// Help table: usage line and description, in display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show this help message"),
    ("echo <text>", "Echo text back"),
    ("touch <path>", "Create file (rw-)"),
    ("touchro <path>", "Create read-only file (r--)"),
    ("cat <path>", "Print file contents"),
    ("write <path> <text>", "Replace file contents"),
    ("rm <path>", "Delete a file"),
    ("mkdir [-p] <path>", "Create directory (-p: with parents)"),
    ("rmdir <path>", "Delete empty directory"),
    ("ls [-a] [path]", "List directory (-a: include hidden)"),
    ("cd [path]", "Change directory (default /)"),
    ("pwd", "Print working directory"),
    ("chmod <path> <0-7>", "Change permissions"),
    ("stat <path>", "Show file/dir info"),
    ("run <path>", "Run an executable script"),
    ("mem", "Show node usage"),
    ("shutdown", "Power off"),
];

/// A parsed command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Echo(&'a str),
    Mkdir { path: &'a str, parents: bool },
    Touch(&'a str),
    TouchRo(&'a str),
    Rm(&'a str),
    Rmdir(&'a str),
    Ls { path: &'a str, all: bool },
    Cd(&'a str),
    Pwd,
    Write { path: &'a str, text: &'a str },
    Cat(&'a str),
    Chmod { path: &'a str, mode: u32 },
    Stat(&'a str),
    Run(&'a str),
    Mem,
    Shutdown,
}

/// Split off the first word; the rest keeps its inner spacing.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], s[end..].trim_start()),
        None => (s, ""),
    }
}

fn required<'a>(word: &'a str, usage: &'static str) -> Result<&'a str, ShellError> {
    if word.is_empty() {
        Err(ShellError::MissingArgument(usage))
    } else {
        Ok(word)
    }
}

impl<'a> Command<'a> {
    /// Parse a line. Blank lines parse to `None`.
    pub fn parse(line: &'a str) -> Result<Option<Self>, ShellError> {
        let (name, rest) = split_word(line);
        if name.is_empty() {
            return Ok(None);
        }
        let (first, after) = split_word(rest);

        let cmd = match name {
            "help" => Command::Help,
            "echo" => Command::Echo(rest),
            "mkdir" if first == "-p" => Command::Mkdir {
                path: required(split_word(after).0, "mkdir -p <path>")?,
                parents: true,
            },
            "mkdir" => Command::Mkdir {
                path: required(first, "mkdir <path>")?,
                parents: false,
            },
            "touch" => Command::Touch(required(first, "touch <path>")?),
            "touchro" => Command::TouchRo(required(first, "touchro <path>")?),
            "rm" => Command::Rm(required(first, "rm <path>")?),
            "rmdir" => Command::Rmdir(required(first, "rmdir <path>")?),
            "ls" => {
                let mut all = false;
                let mut path = "";
                for word in rest.split_whitespace() {
                    if word == "-a" {
                        all = true;
                    } else if path.is_empty() {
                        path = word;
                    }
                }
                Command::Ls { path, all }
            }
            "cd" if first.is_empty() => Command::Cd("/"),
            "cd" => Command::Cd(first),
            "pwd" => Command::Pwd,
            "write" => Command::Write {
                path: required(first, "write <path> <text>")?,
                text: after,
            },
            "cat" => Command::Cat(required(first, "cat <path>")?),
            "chmod" => {
                let path = required(first, "chmod <path> <0-7>")?;
                let value = required(split_word(after).0, "chmod <path> <0-7>")?;
                let mode = value
                    .parse::<u32>()
                    .map_err(|_| ShellError::BadNumber(String::from(value)))?;
                Command::Chmod { path, mode }
            }
            "stat" => Command::Stat(required(first, "stat <path>")?),
            "run" => Command::Run(required(first, "run <path>")?),
            "mem" => Command::Mem,
            "shutdown" => Command::Shutdown,
            other => return Err(ShellError::UnknownCommand(String::from(other))),
        };
        Ok(Some(cmd))
    }
}
