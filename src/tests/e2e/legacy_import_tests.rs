// Import of a legacy licenses file with default settings, end to end.
//
// The legacy file sits where the import tool looks first; the store must live elsewhere.

use std::sync::Arc;

use crate::modules::licenses::adapters::outbound::json_file_store::JsonFileLicenseStore;
use crate::modules::licenses::repository::LicenseRepository;
use crate::modules::licenses::use_cases::import_licenses::record::parse_license_file;
use crate::modules::licenses::use_cases::import_licenses::source::{
    is_store_file, locate_license_file,
};
use crate::shared::core::ids::MillisIdGenerator;
use crate::shell::config::AppConfig;

const LEGACY_FILE: &str = r#"[
  {"id": 1700000000000, "name": "A", "email": "a@x.com", "activationEmail": "a@x.com",
   "activationPassword": "p", "maxUsers": 2,
   "users": [{"id": 1700000000001, "name": "U1", "email": "u1@x.com"}]}
]"#;

#[tokio::test]
async fn it_should_import_the_default_legacy_file_into_a_separate_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/licenses.json"), LEGACY_FILE).unwrap();

    let config = AppConfig::from_lookup(|_: &str| None).unwrap();
    let store_file = dir.path().join(config.store.data_file().unwrap());
    let source = locate_license_file(None, dir.path()).unwrap();
    assert_eq!(source, dir.path().join("data/licenses.json"));
    assert!(!is_store_file(&source, &store_file));

    let repository = LicenseRepository::new(
        Arc::new(JsonFileLicenseStore::new(store_file.clone())),
        Arc::new(MillisIdGenerator::new()),
    );
    let licenses = parse_license_file(&std::fs::read_to_string(&source).unwrap()).unwrap();
    let summary = repository.import(licenses).await.unwrap();
    assert_eq!(summary.licenses_added, 1);
    assert_eq!(summary.users_added, 1);

    let stored = repository.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, "1700000000000");
    assert_eq!(stored[0].users[0].id, "1700000000001");
    assert_eq!(std::fs::read_to_string(&source).unwrap(), LEGACY_FILE);
}
