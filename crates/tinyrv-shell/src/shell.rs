//! Command dispatcher and script runner.

use alloc::format;
use alloc::string::{String, ToString};

use tinyrv_fs::{Filesystem, FsResult};
use tinyrv_hal::HAL;

use crate::command::{Command, COMMANDS};
use crate::error::ShellError;

/// Deepest `run` nesting allowed
pub const MAX_SCRIPT_DEPTH: usize = 4;

/// What the caller should do after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// `shutdown` was issued
    Shutdown,
}

/// Interactive shell over a filesystem.
///
/// Console output goes to the HAL console; operation outcomes go to the
/// HAL debug log.
pub struct Shell<H: HAL> {
    hal: H,
    fs: Filesystem,
    /// Current `run` nesting
    depth: usize,
}

impl<H: HAL> Shell<H> {
    pub fn new(hal: H, fs: Filesystem) -> Self {
        Self { hal, fs, depth: 0 }
    }

    /// Get a reference to the HAL
    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// Get a reference to the filesystem
    pub fn fs(&self) -> &Filesystem {
        &self.fs
    }

    /// Get a mutable reference to the filesystem
    pub fn fs_mut(&mut self) -> &mut Filesystem {
        &mut self.fs
    }

    /// Print text to console
    pub fn print(&self, text: &str) {
        self.hal.write_str(text);
    }

    /// Print a line (with newline)
    pub fn println(&self, text: &str) {
        self.print(text);
        self.print("\n");
    }

    /// Parse and run one line, printing any error.
    pub fn execute(&mut self, line: &str) -> Flow {
        let result = Command::parse(line).and_then(|cmd| match cmd {
            Some(cmd) => self.dispatch(cmd),
            None => Ok(Flow::Continue),
        });

        match result {
            Ok(flow) => flow,
            Err(e @ ShellError::UnknownCommand(_)) => {
                self.println(&e.to_string());
                Flow::Continue
            }
            Err(e) => {
                let name = line.split_whitespace().next().unwrap_or("");
                self.println(&format!("{}: {}", name, e));
                Flow::Continue
            }
        }
    }

    fn dispatch(&mut self, cmd: Command<'_>) -> Result<Flow, ShellError> {
        match cmd {
            Command::Help => self.cmd_help(),
            Command::Echo(text) => self.println(text),
            Command::Mkdir { path, parents } => {
                let op = if parents { "mkdir -p" } else { "mkdir" };
                let result = if parents {
                    self.fs.mkdir_p(path)
                } else {
                    self.fs.mkdir(path)
                };
                self.log_outcome(op, path, &result);
                result?;
            }
            Command::Touch(path) => {
                let result = self.fs.touch(path);
                self.log_outcome("touch", path, &result);
                result?;
            }
            Command::TouchRo(path) => {
                let result = self.fs.touchro(path);
                self.log_outcome("touchro", path, &result);
                result?;
            }
            Command::Rm(path) => {
                let result = self.fs.rm(path);
                self.log_outcome("rm", path, &result);
                result?;
            }
            Command::Rmdir(path) => {
                let result = self.fs.rmdir(path);
                self.log_outcome("rmdir", path, &result);
                result?;
            }
            Command::Ls { path, all } => self.cmd_ls(path, all)?,
            Command::Cd(path) => self.fs.cd(path)?,
            Command::Pwd => self.println(&self.fs.pwd()),
            Command::Write { path, text } => {
                let result = self.fs.write(path, text);
                self.log_outcome("write", path, &result);
                let stored = result?;
                self.println(&format!("File written ({} bytes).", stored));
            }
            Command::Cat(path) => {
                let content = self.fs.cat(path)?;
                self.println(&String::from_utf8_lossy(content));
            }
            Command::Chmod { path, mode } => {
                let result = self.fs.chmod(path, mode);
                self.log_outcome("chmod", path, &result);
                result?;
            }
            Command::Stat(path) => {
                let stat = self.fs.stat(path)?;
                self.println(&stat.to_string());
            }
            Command::Run(path) => return self.run_script(path),
            Command::Mem => self.cmd_mem(),
            Command::Shutdown => {
                self.hal.debug_write("[shell] shutdown requested");
                return Ok(Flow::Shutdown);
            }
        }
        Ok(Flow::Continue)
    }

    fn log_outcome<T>(&self, op: &str, path: &str, result: &FsResult<T>) {
        match result {
            Ok(_) => self.hal.debug_write(&format!("[fs] {} {}: ok", op, path)),
            Err(e) => self
                .hal
                .debug_write(&format!("[fs] {} {}: {}", op, path, e)),
        }
    }

    fn cmd_help(&self) {
        self.println("Available commands:");
        for (usage, about) in COMMANDS {
            self.println(&format!("  {:<20} - {}", usage, about));
        }
        self.println("");
        self.println("Permission values: 4=read, 2=write, 1=execute");
        self.println("  Examples: 7=rwx, 6=rw-, 5=r-x, 4=r--, 0=---");
        self.println("System entries (S flag) cannot be deleted or modified.");
    }

    fn cmd_ls(&self, path: &str, all: bool) -> Result<(), ShellError> {
        for entry in self.fs.ls(path, all)? {
            self.println(&entry.to_string());
        }
        Ok(())
    }

    fn cmd_mem(&self) {
        let usage = self.fs.usage();
        self.println(&format!(
            "Nodes: {}/{} used, {} free",
            usage.used,
            usage.capacity,
            usage.remaining()
        ));
    }

    /// Run an executable file, one command per line or `;`-separated part.
    ///
    /// Errors inside the script are printed and the script goes on;
    /// `shutdown` stops it and is passed up.
    fn run_script(&mut self, path: &str) -> Result<Flow, ShellError> {
        if self.depth >= MAX_SCRIPT_DEPTH {
            self.hal
                .debug_write(&format!("[script] {}: refused at depth {}", path, self.depth));
            return Err(ShellError::ScriptDepth(MAX_SCRIPT_DEPTH));
        }
        // Copy out: the script may modify the filesystem, itself included
        let script = match self.fs.get_executable(path) {
            Some(content) => String::from_utf8_lossy(content).into_owned(),
            None => return Err(ShellError::NotExecutable(String::from(path))),
        };

        self.depth += 1;
        self.hal
            .debug_write(&format!("[script] {}: start (depth {})", path, self.depth));

        let mut flow = Flow::Continue;
        for line in script.split(|c: char| c == '\n' || c == ';') {
            if self.execute(line.trim()) == Flow::Shutdown {
                flow = Flow::Shutdown;
                break;
            }
        }

        self.hal.debug_write(&format!(
            "[script] {}: {}",
            path,
            if flow == Flow::Shutdown { "stopped by shutdown" } else { "done" }
        ));
        self.depth -= 1;
        Ok(flow)
    }
}
