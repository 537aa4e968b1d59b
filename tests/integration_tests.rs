use menu_etl::{CliConfig, EtlEngine, LocalStorage, MenuPipeline, PosCatalog};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_content(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn config(content: &TempDir, data: &TempDir) -> CliConfig {
    CliConfig {
        content_dir: content.path().to_str().unwrap().to_string(),
        data_dir: data.path().to_str().unwrap().to_string(),
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_conversion() {
    let content = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    write_content(
        content.path(),
        "rolls/spicy-tuna.md",
        "---\ntitle: Spicy Tuna Roll\nprice: \"$12.50\"\ndescription: Fresh tuna with chili mayo\n---\n\nOur most popular roll.\n",
    );
    write_content(
        content.path(),
        "drinks/green-tea.md",
        "---\ntitle: Green Tea\nprice: 3.00\navailable: false\n---\n",
    );
    write_content(content.path(), "_index.md", "---\ntitle: Menu\n---\n");
    write_content(
        content.path(),
        "rolls/_index.md",
        "---\ntitle: Rolls\n---\n",
    );
    write_content(
        content.path(),
        "rolls/missing-price.md",
        "---\ntitle: Mystery Roll\n---\n",
    );
    write_content(content.path(), "rolls/plain.md", "No front matter here.\n");
    // Invalid UTF-8: the read fails, the file is skipped, the run continues.
    fs::write(content.path().join("rolls/garbled.md"), [0xff, 0xfe, 0xfd]).unwrap();

    fs::write(
        data.path().join("pos-mapping.yaml"),
        "global:\n  loyverse:\n    items:\n      green-tea: \"LOY-TEA\"\n",
    )
    .unwrap();

    let cfg = config(&content, &data);
    let storage = LocalStorage::new(cfg.data_dir.clone());
    let pipeline = MenuPipeline::new(storage, cfg);
    let engine = EtlEngine::new(pipeline);

    let output_path = engine.run().await.unwrap().expect("items were found");
    assert!(output_path.ends_with("pos-menu-data.yaml"));

    for file in [
        "pos-menu-data.yaml",
        "pos-menu-data.json",
        "pos-menu-loyverse.yaml",
        "pos-menu-odoo.yaml",
        "mapping-report.md",
    ] {
        assert!(data.path().join(file).exists(), "missing {}", file);
    }

    let yaml = fs::read_to_string(data.path().join("pos-menu-data.yaml")).unwrap();
    let catalog: PosCatalog = serde_yaml::from_str(&yaml).unwrap();

    // Unmapped item falls back to the brand-prefixed id.
    let tuna = &catalog.loyverse["omg-sushi-spicy-tuna"];
    assert_eq!(tuna.name, "Spicy Tuna Roll");
    assert_eq!(tuna.price, 12.5);
    assert_eq!(tuna.category, "rolls");
    assert_eq!(tuna.description, "Fresh tuna with chili mayo");
    assert!(tuna.available);

    // Explicit mapping wins, and the availability flag carries over.
    let tea = &catalog.loyverse["LOY-TEA"];
    assert_eq!(tea.hugo_slug, "green-tea");
    assert!(!tea.available);
    assert!(!catalog.loyverse.contains_key("omg-sushi-green-tea"));

    // Odoo side uses its own field projection and fallback ids.
    let odoo_tuna = &catalog.odoo["omg-sushi-spicy-tuna"];
    assert_eq!(odoo_tuna.list_price, 12.5);
    assert_eq!(odoo_tuna.categ_id, "rolls");
    assert_eq!(odoo_tuna.default_code, "omg-sushi-spicy-tuna");

    // Invalid and index files appear in no artifact.
    for file in [
        "pos-menu-data.yaml",
        "pos-menu-data.json",
        "pos-menu-loyverse.yaml",
        "pos-menu-odoo.yaml",
        "mapping-report.md",
    ] {
        let text = fs::read_to_string(data.path().join(file)).unwrap();
        assert!(!text.contains("missing-price"), "{} leaked", file);
        assert!(!text.contains("garbled"), "{} leaked", file);
        assert!(!text.contains("_index"), "{} leaked", file);
    }
}

#[tokio::test]
async fn test_yaml_and_json_outputs_parse_back_equal() {
    let content = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    write_content(
        content.path(),
        "rolls/california.md",
        "---\ntitle: California Roll\nprice: \"$8.00\"\ndescription: Crab and avocado\n---\n",
    );
    write_content(
        content.path(),
        "sashimi/salmon.md",
        "---\ntitle: Salmon Sashimi\nprice: \"1,234.56\"\n---\n",
    );

    let cfg = config(&content, &data);
    let storage = LocalStorage::new(cfg.data_dir.clone());
    let engine = EtlEngine::new(MenuPipeline::new(storage, cfg));
    engine.run().await.unwrap().expect("items were found");

    let yaml = fs::read_to_string(data.path().join("pos-menu-data.yaml")).unwrap();
    let from_yaml: PosCatalog = serde_yaml::from_str(&yaml).unwrap();
    let json = fs::read_to_string(data.path().join("pos-menu-data.json")).unwrap();
    let from_json: PosCatalog = serde_json::from_str(&json).unwrap();

    assert_eq!(from_yaml, from_json);
    assert_eq!(
        from_yaml.loyverse["omg-sushi-salmon"].price,
        1234.56
    );

    // Per-system files hold the same tables as the combined dump.
    let loyverse_yaml = fs::read_to_string(data.path().join("pos-menu-loyverse.yaml")).unwrap();
    let loyverse: std::collections::BTreeMap<String, menu_etl::domain::model::LoyverseRecord> =
        serde_yaml::from_str(&loyverse_yaml).unwrap();
    assert_eq!(loyverse, from_yaml.loyverse);
}

#[tokio::test]
async fn test_mapping_report_shows_coverage() {
    let content = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    write_content(
        content.path(),
        "rolls/spicy-tuna.md",
        "---\ntitle: Spicy Tuna Roll\nprice: \"$12.50\"\n---\n",
    );
    fs::write(
        data.path().join("pos-mapping.yaml"),
        "global:\n  odoo:\n    items:\n      spicy-tuna: \"ODOO-TUNA\"\n",
    )
    .unwrap();

    let cfg = config(&content, &data);
    let storage = LocalStorage::new(cfg.data_dir.clone());
    let engine = EtlEngine::new(MenuPipeline::new(storage, cfg));
    engine.run().await.unwrap().expect("items were found");

    let report = fs::read_to_string(data.path().join("mapping-report.md")).unwrap();
    assert!(report.contains("# Menu Item Mapping Report"));
    assert!(report.contains("Total menu items found: 1"));
    assert!(report.contains("| spicy-tuna | Spicy Tuna Roll | rolls | $12.50 | ❌ | ✅ |"));
    assert!(report.contains("## Mapping Instructions"));
}

#[tokio::test]
async fn test_empty_content_directory_writes_nothing() {
    let content = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    let cfg = config(&content, &data);
    let storage = LocalStorage::new(cfg.data_dir.clone());
    let engine = EtlEngine::new(MenuPipeline::new(storage, cfg));

    let result = engine.run().await.unwrap();
    assert!(result.is_none());

    let written = fs::read_dir(data.path()).unwrap().count();
    assert_eq!(written, 0);
}

#[tokio::test]
async fn test_missing_content_directory_is_an_error() {
    let content = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    let cfg = CliConfig {
        content_dir: content
            .path()
            .join("does-not-exist")
            .to_str()
            .unwrap()
            .to_string(),
        data_dir: data.path().to_str().unwrap().to_string(),
        verbose: false,
    };
    let storage = LocalStorage::new(cfg.data_dir.clone());
    let engine = EtlEngine::new(MenuPipeline::new(storage, cfg));

    assert!(engine.run().await.is_err());
}

#[tokio::test]
async fn test_prior_menu_data_is_read_but_untouched() {
    let content = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    write_content(
        content.path(),
        "rolls/ok.md",
        "---\ntitle: California Roll\nprice: \"$8.00\"\n---\n",
    );
    let prior = "rolls:\n  - old entry\n";
    fs::write(data.path().join("menudata.yaml"), prior).unwrap();

    let cfg = config(&content, &data);
    let storage = LocalStorage::new(cfg.data_dir.clone());
    let engine = EtlEngine::new(MenuPipeline::new(storage, cfg));
    engine.run().await.unwrap().expect("items were found");

    let after = fs::read_to_string(data.path().join("menudata.yaml")).unwrap();
    assert_eq!(after, prior);
}
