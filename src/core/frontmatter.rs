use crate::domain::model::{FrontMatter, ParsedItem};
use std::path::Path;

const DELIMITER: &str = "---";

/// Splits raw file text into the YAML front-matter block and the body.
/// Returns None when the text does not start with a delimiter line or the
/// closing delimiter is missing.
fn split_front_matter(text: &str) -> Option<(String, String)> {
    let mut lines = text.lines();
    if !lines.next()?.starts_with(DELIMITER) {
        return None;
    }

    let mut front_matter = Vec::new();
    let mut body = Vec::new();
    let mut in_front_matter = true;

    for line in lines {
        if in_front_matter {
            if line.starts_with(DELIMITER) {
                in_front_matter = false;
            } else {
                front_matter.push(line);
            }
        } else {
            body.push(line);
        }
    }

    if in_front_matter || front_matter.is_empty() {
        return None;
    }

    Some((front_matter.join("\n"), body.join("\n")))
}

/// Extracts category from the file's position in the content tree: the first
/// path segment under the content root, or "uncategorized" for files sitting
/// directly at the root.
pub fn extract_category(content_root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(content_root).unwrap_or(path);
    let mut parts = relative.components();
    match (parts.next(), parts.next()) {
        (Some(first), Some(_)) => first.as_os_str().to_string_lossy().into_owned(),
        _ => "uncategorized".to_string(),
    }
}

/// Parses a single menu content file. Returns None when the file carries no
/// usable front matter; a malformed YAML block is logged, not raised.
pub fn parse_menu_item(content_root: &Path, path: &Path, text: &str) -> Option<ParsedItem> {
    let (front_matter_text, body) = split_front_matter(text)?;

    let front_matter: FrontMatter = match serde_yaml::from_str(&front_matter_text) {
        Ok(front_matter) => front_matter,
        Err(e) => {
            tracing::error!("Error parsing YAML in {}: {}", path.display(), e);
            return None;
        }
    };

    let slug = path.file_stem()?.to_string_lossy().into_owned();

    Some(ParsedItem {
        front_matter,
        slug,
        source_path: path.display().to_string(),
        category: extract_category(content_root, path),
        content: body.trim().to_string(),
    })
}
