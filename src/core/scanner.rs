use crate::core::{frontmatter, validate};
use crate::domain::model::MenuItem;
use crate::utils::error::{EtlError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const INDEX_FILE: &str = "_index.md";

/// Walks the content tree and returns validated menu items keyed by slug.
/// Per-file failures are logged and skipped; a missing content root is fatal.
/// Slug collisions resolve last-write-wins.
pub fn scan_menu_items(content_root: &Path) -> Result<BTreeMap<String, MenuItem>> {
    if !content_root.is_dir() {
        return Err(EtlError::ConfigError {
            message: format!("content directory not found: {}", content_root.display()),
        });
    }

    let mut items = BTreeMap::new();

    for entry in WalkDir::new(content_root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!("Error walking content directory: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }
        if path.file_name().and_then(|name| name.to_str()) == Some(INDEX_FILE) {
            continue;
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Error processing {}: {}", path.display(), e);
                continue;
            }
        };

        let Some(parsed) = frontmatter::parse_menu_item(content_root, path, &text) else {
            continue;
        };

        match validate::validate_menu_item(parsed) {
            Ok(item) => {
                items.insert(item.slug.clone(), item);
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }

    tracing::info!("Found {} menu items", items.len());
    Ok(items)
}
