use thiserror::Error;

/// One file extracted from free-form model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlock {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileBlockParseError {
    /// The text contained no `FILENAME:` markers at all. Distinguishable
    /// from a successful parse — zero files is never silently treated as
    /// success.
    #[error("No FILENAME blocks found in model output")]
    NoFilesFound,

    #[error("FILENAME marker for `{path}` is not followed by a code block")]
    MissingCodeBlock { path: String },

    #[error("Code block for `{path}` is never closed")]
    UnterminatedCodeBlock { path: String },

    #[error("FILENAME marker with an empty path")]
    EmptyPath,
}

/// Parse `FILENAME: <path>` + fenced code block pairs out of model output.
///
/// The expected shape, anywhere in the surrounding prose:
///
/// ````text
/// FILENAME: src/foo.rs
/// ```rust
/// ...file content...
/// ```
/// ````
pub fn parse_file_blocks(text: &str) -> Result<Vec<FileBlock>, FileBlockParseError> {
    let mut blocks = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        let Some(rest) = line.trim_start().strip_prefix("FILENAME:") else {
            continue;
        };
        let path = rest.trim().to_string();
        if path.is_empty() {
            return Err(FileBlockParseError::EmptyPath);
        }

        // Skip blank lines between the marker and the opening fence.
        while matches!(lines.peek(), Some(l) if l.trim().is_empty()) {
            lines.next();
        }

        match lines.next() {
            Some(fence) if fence.trim_start().starts_with("```") => {}
            _ => return Err(FileBlockParseError::MissingCodeBlock { path }),
        }

        let mut content_lines = Vec::new();
        let mut closed = false;
        for body_line in lines.by_ref() {
            if body_line.trim() == "```" {
                closed = true;
                break;
            }
            content_lines.push(body_line);
        }
        if !closed {
            return Err(FileBlockParseError::UnterminatedCodeBlock { path });
        }

        blocks.push(FileBlock {
            path,
            content: content_lines.join("\n"),
        });
    }

    if blocks.is_empty() {
        return Err(FileBlockParseError::NoFilesFound);
    }
    Ok(blocks)
}
