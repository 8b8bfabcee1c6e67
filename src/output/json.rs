//! JSON output formatting

use std::io::{self, Write};

use crate::entry::Entry;
use crate::error::{Error, Result};

/// Deepest tree [`to_json`] renders. Every level nests an object and an
/// array, so output at this depth still parses under serde_json's default
/// recursion limit of 128.
pub const MAX_JSON_DEPTH: usize = 60;

/// Render an entry tree as pretty-printed JSON.
///
/// Fails with [`Error::TooDeep`] when the tree nests deeper than
/// [`MAX_JSON_DEPTH`].
pub fn to_json(entry: &Entry) -> Result<String> {
    let depth = entry.depth();
    if depth > MAX_JSON_DEPTH {
        return Err(Error::TooDeep {
            depth,
            limit: MAX_JSON_DEPTH,
        });
    }
    Ok(serde_json::to_string_pretty(entry)?)
}

/// Print an entry tree as pretty-printed JSON to stdout.
pub fn print_json(entry: &Entry) -> Result<()> {
    let json = to_json(entry)?;
    writeln!(io::stdout().lock(), "{}", json)?;
    Ok(())
}
