use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Longest command line reproduced in a failure message, in tokens.
const MAX_DISPLAY_ARGS: usize = 10;

/// One external program invocation.
///
/// Built fresh for every call. The program name is given at construction
/// and arguments are appended with [`arg`](Exec::arg)/[`args`](Exec::args),
/// so the argument vector is never empty. [`run`](Exec::run) blocks until
/// the child exits.
///
/// By default a non-zero child exit is a failure of the whole invocation and
/// comes back as [`Error::Command`]; the caller decides what to do with it
/// (for the tasks in this crate, `main` logs it and exits with the child's
/// status). With [`tolerate_failure`](Exec::tolerate_failure) the status is
/// handed back as plain data instead.
pub struct Exec {
    argv: Vec<String>,
    tolerate_failure: bool,
    capture_output: bool,
}

/// Outcome of a finished invocation.
#[derive(Debug)]
pub struct ExecResult {
    /// The child's exit status. A child killed by a signal reports 1, no
    /// exit status exists in that case.
    pub status: i32,
    /// UTF-8 decoded standard output, present exactly when capture was
    /// requested.
    pub stdout: Option<String>,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

impl Exec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            argv: vec![program.into()],
            tolerate_failure: false,
            capture_output: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.argv.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.argv.extend(args.into_iter().map(Into::into));
        self
    }

    /// On non-zero exit, return the status to the caller instead of
    /// reporting a failure.
    pub fn tolerate_failure(mut self) -> Self {
        self.tolerate_failure = true;
        self
    }

    /// Redirect the child's standard output into memory and return it,
    /// decoded as UTF-8. Standard error stays on the console either way.
    pub fn capture_output(mut self) -> Self {
        self.capture_output = true;
        self
    }

    /// Runs the program and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The program could not be spawned
    /// - Captured output was not valid UTF-8
    /// - The child exited non-zero and `tolerate_failure` was not set
    pub fn run(&self) -> Result<ExecResult> {
        let mut command = Command::new(&self.argv[0]);
        command.args(&self.argv[1..]);

        let (status, stdout) = if self.capture_output {
            let output = command
                .stdout(Stdio::piped())
                .stderr(Stdio::inherit())
                .output()
                .map_err(|source| self.spawn_error(source))?;
            let text = String::from_utf8(output.stdout).map_err(|source| Error::Output {
                program: self.argv[0].clone(),
                source,
            })?;
            (output.status, Some(text))
        } else {
            let status = command
                .status()
                .map_err(|source| self.spawn_error(source))?;
            (status, None)
        };

        let status = status.code().unwrap_or(1);

        if status != 0 && !self.tolerate_failure {
            return Err(Error::Command {
                status,
                command: self.command_line(),
            });
        }

        Ok(ExecResult { status, stdout })
    }

    fn spawn_error(&self, source: std::io::Error) -> Error {
        Error::Spawn {
            program: self.argv[0].clone(),
            source,
        }
    }

    /// Space-joined command line, shortened to [`MAX_DISPLAY_ARGS`] tokens
    /// with a note naming how many were dropped.
    fn command_line(&self) -> String {
        if self.argv.len() > MAX_DISPLAY_ARGS {
            format!(
                "{} ... ({} args truncated)",
                self.argv[..MAX_DISPLAY_ARGS].join(" "),
                self.argv.len() - MAX_DISPLAY_ARGS
            )
        } else {
            self.argv.join(" ")
        }
    }
}
