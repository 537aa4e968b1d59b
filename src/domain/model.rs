use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// YAML front-matter block of a menu content file, as written by hand.
/// Required fields are checked later by the validator, so everything is
/// optional here; unknown Hugo fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub price: Option<PriceField>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub available: Option<bool>,
}

/// Price as it appears in front matter: a bare number or a
/// currency-formatted string like `"$12.50"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    pub fn as_raw_string(&self) -> String {
        match self {
            PriceField::Number(n) => n.to_string(),
            PriceField::Text(s) => s.clone(),
        }
    }
}

/// A content file with front matter extracted but not yet validated.
#[derive(Debug, Clone)]
pub struct ParsedItem {
    pub front_matter: FrontMatter,
    pub slug: String,
    pub source_path: String,
    pub category: String,
    pub content: String,
}

/// One validated menu item. Invariant: `title` is non-empty and
/// `price_numeric` is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub slug: String,
    pub title: String,
    pub price_numeric: f64,
    pub description: Option<String>,
    pub category: String,
    pub available: bool,
    pub content: String,
    pub source_path: String,
}

/// The supported POS systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosSystem {
    Loyverse,
    Odoo,
}

/// Loyverse item record, keyed in the catalog by its external id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyverseRecord {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub available: bool,
    pub sku: String,
    pub hugo_slug: String,
}

/// Odoo product record, keyed in the catalog by its external id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdooRecord {
    pub name: String,
    pub list_price: f64,
    pub description: String,
    pub categ_id: String,
    pub active: bool,
    pub default_code: String,
    pub hugo_slug: String,
}

/// Full per-system output table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PosCatalog {
    pub loyverse: BTreeMap<String, LoyverseRecord>,
    pub odoo: BTreeMap<String, OdooRecord>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub catalog: PosCatalog,
    pub report_markdown: String,
}
