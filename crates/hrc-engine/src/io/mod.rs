use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminator placed between output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Splits text into lines, accepting LF or CRLF terminators.
///
/// A leading byte order mark is dropped, as is the empty segment after a
/// trailing terminator.
pub fn split_lines(content: &str) -> Vec<String> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    content.lines().map(str::to_string).collect()
}

/// Read a UTF-8 text file as a list of lines
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(split_lines(&content))
}

/// Joins lines with `ending`, without a trailing terminator.
pub fn join_lines<S: AsRef<str>>(lines: &[S], ending: LineEnding) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(ending.as_str())
}

/// Write lines to a UTF-8 file, optionally prefixed with a byte order mark
pub fn write_lines<S: AsRef<str>>(
    path: &Path,
    lines: &[S],
    ending: LineEnding,
    byte_order_mark: bool,
) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    let mut content = String::new();
    if byte_order_mark {
        content.push_str(UTF8_BOM);
    }
    content.push_str(&join_lines(lines, ending));

    fs::write(path, content).map_err(IoError::Io)
}

/// Output path next to `input`: `<stem>.processed<ext>`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}.processed.{}", ext.to_string_lossy()),
        None => format!("{stem}.processed"),
    };
    input.with_file_name(name)
}
