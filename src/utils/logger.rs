use colored::Colorize;

/// Message severities, ordered least to most important.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Error => "[ERROR]",
        }
    }
}

/// Console logger handle.
///
/// Constructed once at startup from the parsed command line and passed by
/// reference to everything that talks to the user. Messages below the
/// threshold are dropped. Errors go to standard error, everything else to
/// standard output, each as a single `[LEVEL] message` line.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    threshold: Level,
}

impl Logger {
    pub fn new(threshold: Level) -> Self {
        Self { threshold }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    pub fn debug(&self, message: &str) {
        if self.enabled(Level::Debug) {
            println!("{} {message}", Level::Debug.tag().dimmed());
        }
    }

    pub fn info(&self, message: &str) {
        if self.enabled(Level::Info) {
            println!("{} {message}", Level::Info.tag().bright_blue().bold());
        }
    }

    pub fn error(&self, message: &str) {
        if self.enabled(Level::Error) {
            eprintln!("{} {message}", Level::Error.tag().bright_red().bold());
        }
    }
}
