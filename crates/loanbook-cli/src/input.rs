use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Load a typed JSON document from `--input <path>` or piped stdin.
pub fn load<T: DeserializeOwned>(path: &Option<String>) -> Result<T, Box<dyn std::error::Error>> {
    Ok(serde_json::from_value(load_value(path)?)?)
}

/// Load a raw JSON document from `--input <path>` or piped stdin.
pub fn load_value(path: &Option<String>) -> Result<Value, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        read_json_file(path)
    } else if let Some(value) = read_stdin()? {
        Ok(value)
    } else {
        Err("Provide --input <file> or pipe JSON via stdin".into())
    }
}

fn read_json_file(path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;
    let value: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", resolved.display(), e))?;
    Ok(value)
}

/// Resolve and validate the path before reading.
fn resolve_path(path: &str) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.exists() {
        return Err(format!("File not found: {}", resolved.display()).into());
    }
    if !resolved.is_file() {
        return Err(format!("Not a file: {}", resolved.display()).into());
    }

    Ok(resolved)
}

/// Attempt to read JSON from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive).
fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    Ok(Some(value))
}
