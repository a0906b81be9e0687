use modsel_ops::ops_cycles;
use modsel_ops::ops_resolve::{self, ResolveOptions};
use modsel_ops::ops_unresolved;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"
[[module]]
name = "app"
version = "1.0"

[[module.deps]]
name = "lib"
version = "2.0"

[[module.deps]]
name = "gtest"
version = "1.15"
dev = true

[[module]]
name = "lib"
version = "2.0"

[[module.deps]]
name = "app"
version = "1.0"
"#;

fn write_snapshot(tmp: &TempDir) -> std::path::PathBuf {
    let path = tmp.path().join("registry.toml");
    std::fs::write(&path, SNAPSHOT).unwrap();
    path
}

#[tokio::test]
async fn resolve_writes_json_output() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&tmp);
    let output = tmp.path().join("out").join("mvs.json");

    let resolution = ops_resolve::resolve(&ResolveOptions {
        snapshot,
        output: Some(output.clone()),
        jobs: Some(2),
        ..ResolveOptions::default()
    })
    .await
    .unwrap();

    assert_eq!(resolution.mvs.len(), 2);
    assert_eq!(resolution.cycles.len(), 1);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["mvs"]["app@1.0"]["lib"], "2.0");
    assert_eq!(json["mvs_dev"]["app@1.0"]["gtest"], "1.15");
    assert_eq!(json["cycles"][0][0], "app@1.0");
    assert_eq!(json["cycles"][0][1], "lib@2.0");
}

#[tokio::test]
async fn resolve_honours_config_file() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&tmp);
    let config = tmp.path().join("modsel.toml");
    std::fs::write(&config, "[resolver]\nmax-workers = 1\nparallel-passes = false\n").unwrap();

    let resolution = ops_resolve::resolve(&ResolveOptions {
        snapshot,
        config: Some(config),
        output: Some(tmp.path().join("mvs.json")),
        ..ResolveOptions::default()
    })
    .await
    .unwrap();
    assert_eq!(resolution.mvs_dev.len(), 2);
}

#[tokio::test]
async fn resolve_missing_snapshot_fails() {
    let tmp = TempDir::new().unwrap();
    let err = ops_resolve::resolve(&ResolveOptions {
        snapshot: tmp.path().join("missing.toml"),
        ..ResolveOptions::default()
    })
    .await
    .unwrap_err();
    assert!(err.to_string().contains("Snapshot error"), "got: {err}");
}

#[test]
fn cycles_and_unresolved_reports() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_snapshot(&tmp);

    let cycles = ops_cycles::cycles(&snapshot).unwrap();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), 2);

    let unresolved = ops_unresolved::unresolved(&snapshot).unwrap();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].to_string(), "gtest@1.15");
}
