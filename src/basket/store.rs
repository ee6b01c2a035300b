//! Basket persistence
//!
//! Baskets are stored as single YAML or JSON files. Saves go through a
//! temporary file in the target directory and a rename, so a crashed
//! write never leaves a half-written basket behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::basket::Basket;
use crate::error::{RebundleError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(RebundleError::UnsupportedBasketFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Loads a basket from disk
pub fn load(path: &Path) -> Result<Basket> {
    if !path.exists() {
        return Err(RebundleError::BasketNotFound {
            path: path.display().to_string(),
        });
    }
    let format = format_for(path)?;

    let content = fs::read_to_string(path).map_err(|e| RebundleError::BasketReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|e| {
            RebundleError::BasketParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        }),
        Format::Json => serde_json::from_str(&content).map_err(|e| {
            RebundleError::BasketParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        }),
    }
}

/// Loads a basket, or starts an empty one when the file does not exist
///
/// Used by flows that may create the basket file, like attaching a
/// bundle to a fresh order.
pub fn load_or_default(path: &Path) -> Result<Basket> {
    if path.exists() {
        load(path)
    } else {
        Ok(Basket::new())
    }
}

/// Saves a basket to disk atomically
pub fn save(basket: &Basket, path: &Path) -> Result<()> {
    let format = format_for(path)?;

    let content = match format {
        Format::Yaml => {
            serde_yaml::to_string(basket).map_err(|e| RebundleError::BasketWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        }
        Format::Json => {
            let mut json = serde_json::to_string_pretty(basket).map_err(|e| {
                RebundleError::BasketWriteFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            json.push('\n');
            json
        }
    };

    write_atomic(path, &content)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let write_failed = |reason: String| RebundleError::BasketWriteFailed {
        path: path.display().to_string(),
        reason,
    };

    let mut tmp =
        tempfile::NamedTempFile::new_in(parent).map_err(|e| write_failed(e.to_string()))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    tmp.persist(path).map_err(|e| write_failed(e.to_string()))?;
    Ok(())
}
