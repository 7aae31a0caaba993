//! Token source: line-oriented credential list.

use std::fs;
use std::path::Path;

use vigil_types::TokenError;

/// Load credential tokens from a line-oriented file.
///
/// Each line is trimmed; blank lines and lines starting with `#` are
/// skipped. Order is preserved. An unreadable or empty file is a fatal
/// startup error for the daemon, there is no partial-success mode.
pub fn load_tokens(path: &Path) -> Result<Vec<String>, TokenError> {
    let content = fs::read_to_string(path).map_err(|e| TokenError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let tokens: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        return Err(TokenError::Empty { path: path.display().to_string() });
    }

    Ok(tokens)
}
