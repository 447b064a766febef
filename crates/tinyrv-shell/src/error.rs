//! Shell error types

use alloc::string::String;
use core::fmt;
use tinyrv_fs::FsError;

/// Errors reported by the shell.
///
/// None of these end the session; the shell prints the error and reads
/// the next line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellError {
    /// First word is not a known command
    UnknownCommand(String),

    /// A required argument is missing; carries the usage line
    MissingArgument(&'static str),

    /// Argument that should be a number is not one
    BadNumber(String),

    /// `run` nested deeper than the script depth limit
    ScriptDepth(usize),

    /// `run` target is missing, not a file or lacks Execute
    NotExecutable(String),

    /// Filesystem operation failed
    Fs(FsError),
}

impl From<FsError> for ShellError {
    fn from(e: FsError) -> Self {
        ShellError::Fs(e)
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::UnknownCommand(_) => write!(f, "Unknown command. Type 'help' for a list."),
            ShellError::MissingArgument(usage) => write!(f, "usage: {}", usage),
            ShellError::BadNumber(s) => write!(f, "not a number: {}", s),
            ShellError::ScriptDepth(max) => write!(f, "scripts nested deeper than {}", max),
            ShellError::NotExecutable(path) => write!(f, "{}: not an executable file", path),
            ShellError::Fs(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_unknown_command_message() {
        let err = ShellError::UnknownCommand("frob".to_string());
        assert_eq!(err.to_string(), "Unknown command. Type 'help' for a list.");
    }

    #[test]
    fn test_fs_error_passes_through() {
        let err: ShellError = FsError::NotEmpty.into();
        assert_eq!(err, ShellError::Fs(FsError::NotEmpty));
        assert_eq!(err.to_string(), "directory not empty");
    }
}
