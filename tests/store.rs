use std::path::PathBuf;

use cold_room_heat_load::{
    params::{ParameterSet, Section},
    product_db,
    store::{ParameterStore, StoreError},
};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("cold_room_store_{name}_{}", std::process::id()))
        .join("params.toml")
}

#[test]
fn missing_file_starts_from_defaults() {
    let path = temp_file("missing");
    let store = ParameterStore::open(&path).unwrap();
    assert_eq!(store.params(), &ParameterSet::default());
    assert!(!path.exists());
}

#[test]
fn updates_are_persisted_and_reloaded() {
    let path = temp_file("roundtrip");
    let mut store = ParameterStore::open(&path).unwrap();
    store.update_field(Section::Room, "length", "12").unwrap();
    store.update_field(Section::Misc, "safetyPercent", "25").unwrap();
    store.set_product_name("Carrots").unwrap();

    let reopened = ParameterStore::open(&path).unwrap();
    assert_eq!(reopened.params().room.length, 12.0);
    assert_eq!(reopened.params().misc.safety_percent, 25.0);
    assert_eq!(reopened.params().product.product_name, "Carrots");
    assert_eq!(reopened.results(), store.results());
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn snapshot_is_independent_of_later_edits() {
    let mut store = ParameterStore::in_memory(ParameterSet::default());
    let snapshot = store.snapshot();
    store.update_field(Section::Room, "width", "9").unwrap();
    assert_eq!(snapshot.room.width, 4.0);
    assert_eq!(store.params().room.width, 9.0);
}

#[test]
fn failed_save_keeps_in_memory_value() {
    // 부모가 파일이면 디렉터리를 만들 수 없어 저장이 실패한다.
    let blocker = std::env::temp_dir().join(format!("cold_room_store_blocker_{}", std::process::id()));
    std::fs::write(&blocker, "not a directory").unwrap();
    let mut store = ParameterStore::open(blocker.join("params.toml")).unwrap();

    let err = store.update_field(Section::Room, "height", "5").unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(store.params().room.height, 5.0);
    let _ = std::fs::remove_file(&blocker);
}

#[test]
fn presets_copy_catalogue_properties() {
    let mut store = ParameterStore::in_memory(ParameterSet::default());
    store.apply_product_preset("Beef").unwrap();
    let beef = product_db::find_product("beef").unwrap();
    let product = &store.params().product;
    assert_eq!(product.product_name, beef.name);
    assert_eq!(product.freezing_point, beef.freezing_point_c);
    assert_eq!(product.latent_heat_of_freezing, beef.latent_heat_kj_per_kg);
    assert_eq!(product.product_mass, 2000.0);

    assert!(matches!(
        store.apply_product_preset("unobtainium"),
        Err(StoreError::UnknownPreset(_))
    ));
}

#[test]
fn reset_restores_defaults() {
    let mut store = ParameterStore::in_memory(ParameterSet::default());
    store.update_field(Section::Product, "productMass", "10").unwrap();
    store.reset(Section::Product).unwrap();
    assert_eq!(store.params(), &ParameterSet::default());
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let path = temp_file("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[room\nlength = ").unwrap();
    assert!(matches!(ParameterStore::open(&path), Err(StoreError::Parse { .. })));
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
