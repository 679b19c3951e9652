//! JSON document primitives shared by the typed repositories.

use crate::error::{CampusError, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Path of the document file for a given record ID.
pub fn document_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.json", id))
}

pub fn read_document<T: DeserializeOwned>(dir: &Path, id: &str) -> Result<T> {
    let path = document_path(dir, id);
    if !path.is_file() {
        return Err(CampusError::NotFound(id.to_string()));
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn write_document<T: Serialize>(dir: &Path, id: &str, document: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(document)?;
    atomic_write(&document_path(dir, id), &content)
}

pub fn remove_document(dir: &Path, id: &str) -> Result<()> {
    let path = document_path(dir, id);
    if !path.is_file() {
        return Err(CampusError::NotFound(id.to_string()));
    }
    std::fs::remove_file(&path)?;
    Ok(())
}

/// Reads every parseable document in a collection directory.
///
/// Unparseable or unreadable files are skipped with a warning so one corrupt
/// record never takes down list queries.
pub fn list_documents<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
            match std::fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(document) => documents.push(document),
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Failed to parse document file"
                        )
                    }
                },
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read document file"
                ),
            }
        }
    }

    Ok(documents)
}

/// Generates a record ID: prefix plus a random lowercase-alphanumeric suffix.
pub fn generate_id(prefix: &str, length: usize) -> String {
    const ALPHABET: [char; 36] = [
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
        'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ];
    format!(
        "{}{}",
        prefix,
        nanoid::format(nanoid::rngs::default, &ALPHABET, length)
    )
}

/// Atomically write content to a file using temp file + rename
/// This ensures we never have a partially written file or lose data on crash
fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = target_path
        .parent()
        .ok_or_else(|| CampusError::Storage("Target path has no parent directory".to_string()))?;

    // Temp file must live in the same directory as the target for the rename
    // to be atomic
    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| CampusError::Storage(format!("Failed to create temp file: {}", e)))?;

    use std::io::Write;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| CampusError::Storage(format!("Failed to write to temp file: {}", e)))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| CampusError::Storage(format!("Failed to sync temp file: {}", e)))?;

    temp_file
        .persist(target_path)
        .map_err(|e| CampusError::Storage(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}
