//! tinyrv-host - run the tinyrv kernel shell on the host terminal
//!
//! Console bytes go through stdin/stdout; the kernel debug log goes to
//! stderr with `--verbose`.
//!
//! Usage:
//!   tinyrv-host                          # default capacities
//!   tinyrv-host --max-nodes 16 -v        # small arena, show debug log
//!   tinyrv-host -c fs.json < script.txt  # capacities from JSON, piped input

use clap::Parser;
use std::cell::RefCell;
use std::fs;
use std::io::{self, IsTerminal, Read, StdinLock, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use tinyrv_fs::FsConfig;
use tinyrv_hal::{HalError, HAL};
use tinyrv_shell::Kernel;

#[derive(Parser)]
#[command(name = "tinyrv-host")]
#[command(about = "Run the tinyrv kernel shell on the host terminal")]
struct Args {
    /// JSON file with filesystem capacities (same shape as /etc/fsinfo)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Arena capacity, overriding the config file
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Children per directory, overriding the config file
    #[arg(long)]
    max_children: Option<usize>,

    /// Print the kernel debug log to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// HAL over the process's standard streams.
struct HostHal {
    stdin: RefCell<StdinLock<'static>>,
    interactive: bool,
    verbose: bool,
}

impl HostHal {
    fn new(verbose: bool) -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        Self {
            stdin: RefCell::new(stdin.lock()),
            interactive,
            verbose,
        }
    }
}

impl HAL for HostHal {
    fn write_byte(&self, byte: u8) {
        let _ = io::stdout().write_all(&[byte]);
    }

    fn write_str(&self, s: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(s.as_bytes());
        let _ = out.flush();
    }

    fn read_byte(&self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.stdin.borrow_mut().read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }

    fn echoes_input(&self) -> bool {
        // A terminal in cooked mode already shows what is typed
        self.interactive
    }

    fn debug_write(&self, msg: &str) {
        if self.verbose {
            eprintln!("{}", msg);
        }
    }

    fn shutdown(&self) -> Result<(), HalError> {
        let _ = io::stdout().flush();
        Ok(())
    }
}

fn load_config(args: &Args) -> Result<FsConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("invalid config {}: {}", path.display(), e))?
        }
        None => FsConfig::default(),
    };
    if let Some(n) = args.max_nodes {
        config.max_nodes = n;
    }
    if let Some(n) = args.max_children {
        config.max_children = n;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let hal = HostHal::new(args.verbose);
    let mut kernel = match Kernel::boot(hal, config) {
        Ok(kernel) => kernel,
        Err(e) => {
            eprintln!("Error: cannot boot with this configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    kernel.run();
    ExitCode::SUCCESS
}
