//! Built-in regular expressions, compiled on first use

use std::sync::OnceLock;

use regex::Regex;

/// Compile `pattern` into `cell` the first time, then hand out the cached regex.
///
/// A pattern that does not compile is returned as an error on every call.
pub(crate) fn compiled(
    cell: &'static OnceLock<Regex>,
    pattern: &str,
) -> Result<&'static Regex, regex::Error> {
    if let Some(re) = cell.get() {
        return Ok(re);
    }
    let re = Regex::new(pattern)?;
    Ok(cell.get_or_init(|| re))
}
