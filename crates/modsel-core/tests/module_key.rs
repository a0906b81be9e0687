use std::collections::HashSet;

use modsel_core::module_key::ModuleKey;

#[test]
fn display_is_name_at_version() {
    let key = ModuleKey::new("rules_cc", "0.1.1");
    assert_eq!(key.to_string(), "rules_cc@0.1.1");
    assert_eq!(key.name(), "rules_cc");
    assert_eq!(key.version(), "0.1.1");
}

#[test]
fn version_may_contain_at_sign() {
    let key: ModuleKey = "protobuf@29.0-rc2@bcr".parse().unwrap();
    assert_eq!(key.name(), "protobuf");
    assert_eq!(key.version(), "29.0-rc2@bcr");
}

#[test]
fn equality_follows_serialized_form() {
    let a = ModuleKey::new("a@b", "c");
    let b = ModuleKey::new("a", "b@c");
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn well_formed_requires_both_components() {
    assert!(ModuleKey::new("zlib", "1.3").is_well_formed());
    assert!(!ModuleKey::new("", "1.3").is_well_formed());
    assert!(!ModuleKey::new("zlib", "").is_well_formed());
}

#[test]
fn try_new_checks_raw_components() {
    assert_eq!(ModuleKey::try_new("zlib", "1.3"), Some(ModuleKey::new("zlib", "1.3")));
    assert!(ModuleKey::try_new("", "1.3").is_none());
    assert!(ModuleKey::try_new("zlib", "").is_none());
    // Joined, this would read back as name "a", version "b@".
    assert!(ModuleKey::new("a@b", "").is_well_formed());
    assert!(ModuleKey::try_new("a@b", "").is_none());
}

#[test]
fn parse_rejects_missing_parts() {
    assert!("zlib".parse::<ModuleKey>().is_err());
    assert!("@1.3".parse::<ModuleKey>().is_err());
    assert!("zlib@".parse::<ModuleKey>().is_err());
    let err = "zlib".parse::<ModuleKey>().unwrap_err();
    assert!(err.to_string().contains("zlib"));
}

#[test]
fn ordering_is_bytewise_on_serialized_form() {
    let mut keys = vec![
        ModuleKey::new("b", "1.0"),
        ModuleKey::new("a", "2.0"),
        ModuleKey::new("a", "10.0"),
    ];
    keys.sort();
    let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["a@10.0", "a@2.0", "b@1.0"]);
}

#[test]
fn serializes_as_plain_string() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        key: ModuleKey,
    }
    let toml = toml::to_string(&Wrapper {
        key: ModuleKey::new("abseil-cpp", "20240116.2"),
    })
    .unwrap();
    assert!(toml.contains("key = \"abseil-cpp@20240116.2\""));
    let back: Wrapper = toml::from_str(&toml).unwrap();
    assert_eq!(back.key.name(), "abseil-cpp");
}
