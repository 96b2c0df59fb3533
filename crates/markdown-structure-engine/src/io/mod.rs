use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(PathBuf),
}

/// Read a markdown source, or stdin when `path` is `-`
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    read_file(path)
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for markdown files under a directory, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidDirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Expand inputs into the files to parse: directories become every markdown
/// file beneath them, anything else is passed through unchanged.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, IoError> {
    let mut resolved = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = scan_markdown_files(input)?;
            log::debug!("{} markdown file(s) under {}", found.len(), input.display());
            resolved.extend(found);
        } else {
            resolved.push(input.clone());
        }
    }
    Ok(resolved)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }

    Ok(())
}
