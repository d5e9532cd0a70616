//! End-to-end: YAML config + JSON table on disk -> chart -> search.

use org_chart::{build_from_files, ConfigLoader, LeafNaming, SearchResult};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
mapping:
  full_name: Full Name
  unit_id: Unit Id
  levels:
    - Level 0
    - Level 1
    - Level 2
"#;

const ROOT: &str = "Cambridge Investment Research, Inc. (00001)-QV6";
const REGION: &str = "West Region (00200)-W01";
const DENVER: &str = "Denver Branch (00310)-D07";
const BOISE: &str = "Boise Branch (00320)-B02";

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn records_table() -> String {
    serde_json::json!([
        {"Level 0": ROOT, "Level 1": REGION, "Level 2": DENVER, "Full Name": "Jane Doe", "Unit Id": 310},
        {"Level 0": ROOT, "Level 1": REGION, "Level 2": BOISE, "Full Name": "John Roe", "Unit Id": 320},
        {"Level 0": ROOT, "Level 1": "not a level string", "Full Name": "Ghost", "Unit Id": 999},
        {"Level 0": null, "Full Name": "Nobody", "Unit Id": 0},
    ])
    .to_string()
}

#[test]
fn test_build_from_record_table() {
    let dir = TempDir::new().unwrap();
    let config_path = write(&dir, "org_chart.yaml", CONFIG);
    let table_path = write(&dir, "units.json", &records_table());

    let config = ConfigLoader::new(&config_path).load().unwrap();
    let chart = build_from_files(&config, &table_path).unwrap();

    let ids: Vec<&str> = chart.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            ROOT.to_string(),
            format!("{}|{}", ROOT, REGION),
            format!("{}|{}|{}", ROOT, REGION, DENVER),
            format!("{}|{}|{}", ROOT, REGION, BOISE),
        ]
    );

    let root = chart.get(ROOT).unwrap();
    assert_eq!((root.direct_subordinates, root.total_subordinates), (1, 3));
    assert_eq!(chart.roots().count(), 1);

    let diagnostics = chart.diagnostics();
    assert_eq!(diagnostics.rows_seen, 4);
    assert_eq!(diagnostics.rows_skipped, 1);
    assert_eq!(diagnostics.levels_rejected(), 1);
    assert_eq!(diagnostics.rejections[0].row, 2);
    assert_eq!(diagnostics.rejections[0].raw, "not a level string");
}

#[test]
fn test_build_from_columnar_table() {
    let dir = TempDir::new().unwrap();
    let config_path = write(&dir, "org_chart.yaml", CONFIG);
    let table = serde_json::json!({
        "Level 0": [ROOT, ROOT],
        "Level 1": [REGION, REGION],
        "Level 2": [DENVER, null],
        "Full Name": ["Jane Doe", "Regional Lead"],
        "Unit Id": ["310", "200"],
    });
    let table_path = write(&dir, "units.json", &table.to_string());

    let config = ConfigLoader::new(&config_path).load().unwrap();
    let chart = build_from_files(&config, &table_path).unwrap();

    // Region was first written as a non-leaf, so it keeps its unit name
    let region = chart.get(&format!("{}|{}", ROOT, REGION)).unwrap();
    assert_eq!(region.name, "West Region");
    assert_eq!(chart.len(), 3);
    assert!(chart.diagnostics().is_clean());
}

#[test]
fn test_promote_policy_from_config() {
    let dir = TempDir::new().unwrap();
    let config_path = write(
        &dir,
        "org_chart.yaml",
        &format!("{}leaf_naming: promote\n", CONFIG),
    );
    let table = serde_json::json!([
        {"Level 0": ROOT, "Level 1": REGION, "Full Name": "Regional Lead", "Unit Id": "200"},
        {"Level 0": ROOT, "Level 1": REGION, "Level 2": DENVER, "Full Name": "Jane Doe", "Unit Id": "310"},
    ]);
    let table_path = write(&dir, "units.json", &table.to_string());

    let config = ConfigLoader::new(&config_path).load().unwrap();
    assert_eq!(config.leaf_naming, LeafNaming::Promote);

    let chart = build_from_files(&config, &table_path).unwrap();
    let region = chart.get(&format!("{}|{}", ROOT, REGION)).unwrap();
    assert_eq!(region.name, "West Region");
}

#[test]
fn test_search_over_loaded_chart() {
    let dir = TempDir::new().unwrap();
    let config_path = write(&dir, "org_chart.yaml", CONFIG);
    let table_path = write(&dir, "units.json", &records_table());

    let config = ConfigLoader::new(&config_path).load().unwrap();
    let chart = build_from_files(&config, &table_path).unwrap();

    let hits = chart.search_results("  DENVER ");
    assert_eq!(
        hits,
        vec![SearchResult {
            node_id: format!("{}|{}|{}", ROOT, REGION, DENVER),
            name: "Jane Doe".to_string(),
            business_unit: "Denver Branch".to_string(),
            bebl_code: Some("D07".to_string()),
        }]
    );

    assert_eq!(chart.search("b02").len(), 1);
    assert!(chart.search("   ").is_empty());
}

#[test]
fn test_missing_column_yields_empty_chart() {
    let dir = TempDir::new().unwrap();
    let config_path = write(&dir, "org_chart.yaml", CONFIG);
    let table = serde_json::json!({ "Level 0": [ROOT], "Unit Id": ["1"] });
    let table_path = write(&dir, "units.json", &table.to_string());

    let config = ConfigLoader::new(&config_path).load().unwrap();
    let chart = build_from_files(&config, &table_path).unwrap();

    assert!(chart.is_empty());
    assert!(chart.diagnostics().config_error.is_some());
}

#[test]
fn test_invalid_inputs_are_errors() {
    let dir = TempDir::new().unwrap();
    let bad_config = write(&dir, "bad.yaml", "mapping: [1, 2]\n");
    assert!(ConfigLoader::new(&bad_config).load().is_err());
    assert!(ConfigLoader::new(dir.path().join("missing.yaml")).load().is_err());

    let config = ConfigLoader::parse(CONFIG).unwrap();
    let bad_table = write(&dir, "units.json", "42");
    let err = build_from_files(&config, &bad_table).unwrap_err();
    assert!(format!("{:#}", err).contains("JSON object of columns"));
}
