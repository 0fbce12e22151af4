use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use helper::utils::{Level, Logger, ScopedDir};
use helper::{Error, Result, commands};

#[derive(Parser)]
#[command(name = "helper")]
#[command(about = "Automation of common tasks for the elmobd library and its examples")]
struct Cli {
    /// Controls the log level, "info" is default
    #[arg(long = "log_level", value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Run as if started in DIR instead of the current directory
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    task: Option<Task>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Info,
    Debug,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::Error,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
        }
    }
}

#[derive(Subcommand)]
enum Task {
    /// Check the quality of the project (format, vet, build)
    Check,
    /// Run the unit tests and every example program
    Test,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = Logger::new(cli.log_level.into());

    let Some(task) = cli.task else {
        logger.error("No command given to run");
        return ExitCode::FAILURE;
    };

    match run(cli.dir, task, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger.error(&err.to_string());
            exit_code(&err)
        }
    }
}

fn run(dir: Option<PathBuf>, task: Task, logger: &Logger) -> Result<()> {
    let _cwd = match dir {
        Some(dir) => {
            logger.debug(&format!("Entering directory {}", dir.display()));
            Some(ScopedDir::change(&dir)?)
        }
        None => None,
    };

    match task {
        Task::Check => commands::check::check_project(logger),
        Task::Test => commands::test::run_tests(logger),
    }
}

fn exit_code(err: &Error) -> ExitCode {
    u8::try_from(err.exit_status()).map_or(ExitCode::FAILURE, ExitCode::from)
}
