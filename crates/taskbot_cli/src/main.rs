//! Interactive terminal shell for the task engine.
//!
//! # Responsibility
//! - Resolve configuration from flags and platform data directories.
//! - Read stdin line by line and print each reply until `end` or EOF.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use log::info;
use taskbot_core::{init_logging, Session, SessionConfig, StoreBackend};

const SPACER: &str = "────────────────────────────────────────────────────────────";

#[derive(Parser, Debug)]
#[command(name = "taskbot", version, about = "A grumpy line-oriented task tracker")]
struct Cli {
    /// Override the task data file
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Storage backend: file or sqlite
    #[arg(long, default_value_t = StoreBackend::File)]
    store: StoreBackend,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, default_value_t = taskbot_core::default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<SessionConfig> {
        let data_path = match self.data_file {
            Some(path) => path,
            None => default_data_path(self.store)?,
        };
        let mut config = SessionConfig::new(data_path)
            .with_backend(self.store)
            .with_log_level(self.log_level);
        if let Some(log_dir) = self.log_dir {
            config = config.with_log_dir(log_dir);
        }
        Ok(config)
    }
}

fn default_data_path(backend: StoreBackend) -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "taskbot", "taskbot")
        .ok_or_else(|| anyhow!("Cannot determine data directory"))?;
    Ok(dirs.data_dir().join(backend.default_file_name()))
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }

    let mut session = Session::open(&config);
    info!(
        "event=shell_start module=cli status=ok backend={} path={} tasks={}",
        config.backend,
        config.data_path.display(),
        session.tasks().len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{SPACER}\n{}\n{SPACER}", session.greeting())?;
    out.flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let reply = session.handle_line(&line);

        writeln!(out, "{SPACER}\n{}", reply.text)?;
        if let Some(warning) = &reply.warning {
            eprintln!("warning: {warning}");
        }
        writeln!(out, "{SPACER}")?;
        out.flush()?;

        if reply.is_exit {
            info!("event=shell_exit module=cli status=ok reason=end");
            return Ok(());
        }
    }

    info!("event=shell_exit module=cli status=ok reason=eof");
    writeln!(out, "{SPACER}\n{}\n{SPACER}", session.farewell())?;
    Ok(())
}
