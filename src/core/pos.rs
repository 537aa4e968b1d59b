use crate::core::mapping::PosMapping;
use crate::domain::model::{LoyverseRecord, MenuItem, OdooRecord, PosCatalog, PosSystem};

/// Prefix used to synthesize an external id when no explicit mapping exists.
pub const BRAND_PREFIX: &str = "omg-sushi";

pub fn fallback_id(slug: &str) -> String {
    format!("{}-{}", BRAND_PREFIX, slug)
}

fn resolve_id(mapping: &PosMapping, system: PosSystem, slug: &str) -> String {
    mapping
        .external_id(system, slug)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_id(slug))
}

/// Projects every menu item into one record per POS system. An unmapped item
/// gets a synthesized id, never an error; no item is dropped here.
pub fn to_pos_catalog(items: &[MenuItem], mapping: &PosMapping) -> PosCatalog {
    let mut catalog = PosCatalog::default();

    for item in items {
        let loyverse_id = resolve_id(mapping, PosSystem::Loyverse, &item.slug);
        catalog.loyverse.insert(
            loyverse_id.clone(),
            LoyverseRecord {
                name: item.title.clone(),
                price: item.price_numeric,
                description: item.description.clone().unwrap_or_default(),
                category: item.category.clone(),
                available: item.available,
                sku: loyverse_id,
                hugo_slug: item.slug.clone(),
            },
        );

        let odoo_id = resolve_id(mapping, PosSystem::Odoo, &item.slug);
        catalog.odoo.insert(
            odoo_id.clone(),
            OdooRecord {
                name: item.title.clone(),
                list_price: item.price_numeric,
                description: item.description.clone().unwrap_or_default(),
                categ_id: item.category.clone(),
                active: item.available,
                default_code: odoo_id,
                hugo_slug: item.slug.clone(),
            },
        );
    }

    catalog
}
