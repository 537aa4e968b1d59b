use crate::core::mapping::PosMapping;
use crate::domain::model::{MenuItem, PosSystem};
use chrono::Utc;
use std::fmt::Write;

pub const REPORT_FILE: &str = "mapping-report.md";

const MAPPED: &str = "✅";
const UNMAPPED: &str = "❌";

/// Renders the markdown coverage report: one row per item showing whether an
/// explicit mapping exists for each POS system, to guide manual curation of
/// the mapping file.
pub fn render_mapping_report(items: &[MenuItem], mapping: &PosMapping) -> String {
    let mut report = String::new();

    report.push_str("# Menu Item Mapping Report\n\n");
    let _ = writeln!(
        report,
        "Generated on: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(report, "Total menu items found: {}\n", items.len());

    report.push_str("## Items Requiring POS Mapping\n\n");
    report.push_str("| Hugo Slug | Title | Category | Price | Loyverse Mapped | Odoo Mapped |\n");
    report.push_str("|-----------|-------|----------|-------|-----------------|-------------|\n");

    for item in items {
        let glyph = |system: PosSystem| {
            if mapping.is_mapped(system, &item.slug) {
                MAPPED
            } else {
                UNMAPPED
            }
        };
        let _ = writeln!(
            report,
            "| {} | {} | {} | ${:.2} | {} | {} |",
            item.slug,
            item.title,
            item.category,
            item.price_numeric,
            glyph(PosSystem::Loyverse),
            glyph(PosSystem::Odoo),
        );
    }

    report.push_str("\n## Mapping Instructions\n\n");
    report.push_str("1. Edit `data/pos-mapping.yaml` to add mappings for unmapped items\n");
    report.push_str("2. Use the format: `\"hugo-slug\": \"pos-item-id\"`\n");
    report.push_str("3. Run this tool again to regenerate POS data\n");

    report
}
