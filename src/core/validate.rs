use crate::domain::model::{MenuItem, ParsedItem};
use crate::utils::error::{EtlError, Result};

/// Strips the currency symbol and thousands separators from a raw price and
/// parses it as a non-negative number.
pub fn normalize_price(raw: &str) -> Result<f64> {
    let cleaned = raw.replace('$', "").replace(',', "");
    let price: f64 = cleaned
        .trim()
        .parse()
        .map_err(|_| EtlError::ValidationError {
            message: format!("invalid price format: {:?}", raw),
        })?;

    if price < 0.0 {
        return Err(EtlError::ValidationError {
            message: format!("price must be non-negative: {}", raw),
        });
    }

    Ok(price)
}

/// Checks required fields and promotes a parsed record to a MenuItem.
pub fn validate_menu_item(parsed: ParsedItem) -> Result<MenuItem> {
    let ParsedItem {
        front_matter,
        slug,
        source_path,
        category,
        content,
    } = parsed;

    let title = front_matter
        .title
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    if title.is_empty() {
        return Err(EtlError::ValidationError {
            message: format!("menu item missing required field 'title': {}", slug),
        });
    }

    let price = front_matter
        .price
        .ok_or_else(|| EtlError::ValidationError {
            message: format!("menu item missing required field 'price': {}", slug),
        })?;
    let raw_price = price.as_raw_string();
    let price_numeric = normalize_price(&raw_price).map_err(|_| EtlError::ValidationError {
        message: format!("invalid price format for item {}: {}", slug, raw_price),
    })?;

    Ok(MenuItem {
        slug,
        title,
        price_numeric,
        description: front_matter.description,
        category,
        available: front_matter.available.unwrap_or(true),
        content,
        source_path,
    })
}
