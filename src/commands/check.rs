use crate::Result;
use crate::utils::{Exec, Logger};

/// Runs the formatter, the vet pass and a full build, in that order.
///
/// The first failing tool ends the run; nothing after it executes.
pub fn check_project(logger: &Logger) -> Result<()> {
    logger.info("Checking quality of project");

    Exec::new("go").arg("fmt").run()?;
    Exec::new("go").args(["tool", "vet", "--all", "."]).run()?;
    Exec::new("go").args(["build", "-v", "./..."]).run()?;

    Ok(())
}
