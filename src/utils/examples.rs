use std::path::PathBuf;

use glob::glob;

use crate::error::Result;

/// Project-relative pattern matching every example source file.
const EXAMPLE_PATTERN: &str = "examples/**/*.go";

/// Discovers every example program under the `examples` tree.
///
/// Matches are sorted so repeated runs visit the examples in the same
/// order. A missing `examples` directory is not an error, it simply
/// yields no matches.
///
/// # Errors
///
/// Returns an error if the discovery pattern fails to parse.
pub fn example_sources() -> Result<Vec<PathBuf>> {
    let mut sources: Vec<PathBuf> = glob(EXAMPLE_PATTERN)?.flatten().collect();
    sources.sort();

    Ok(sources)
}
