use chrono::NaiveDate;
use wasm_bindgen_test::*;

use eatwhat_core::{Choice, KeyValueStore, Origin};
use eatwhat_web::storage::{WebKeyValueStore, create_web_choice_store};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn wipe() {
    let store = WebKeyValueStore;
    for key in store.keys().expect("keys") {
        if key.starts_with("eatWhat.") {
            store.remove(&key).expect("remove");
        }
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trips_values() {
    wipe();
    let store = WebKeyValueStore;
    store.set("eatWhat.probe", "AD").expect("set");
    assert_eq!(
        store.get("eatWhat.probe").expect("get").as_deref(),
        Some("AD")
    );
    assert!(
        store
            .keys()
            .expect("keys")
            .contains(&"eatWhat.probe".to_string())
    );
    store.remove("eatWhat.probe").expect("remove");
    assert_eq!(store.get("eatWhat.probe").expect("get"), None);
}

#[wasm_bindgen_test]
fn overrides_survive_store_reconstruction() {
    wipe();
    let day = NaiveDate::from_ymd_opt(2026, 1, 15).expect("date");
    create_web_choice_store()
        .set_override(day, Choice::Ad)
        .expect("set override");

    let reopened = create_web_choice_store();
    let resolved = reopened.resolve(day).expect("resolve");
    assert_eq!(resolved.choice, Choice::Ad);
    assert_eq!(resolved.origin, Origin::Override);
}

#[wasm_bindgen_test]
fn first_seed_read_initializes_local_storage() {
    wipe();
    let store = create_web_choice_store();
    assert_eq!(store.seed().expect("seed"), Choice::D3);
    assert_eq!(
        WebKeyValueStore
            .get("eatWhat.seedFirstChoice")
            .expect("get")
            .as_deref(),
        Some("D3")
    );
}

#[wasm_bindgen_test]
fn seed_rebase_purges_only_override_keys() {
    wipe();
    let backing = WebKeyValueStore;
    backing.set("eatWhat.locale", "zh").expect("set");
    let store = create_web_choice_store();
    store
        .set_override(NaiveDate::from_ymd_opt(2026, 3, 9).expect("date"), Choice::D3)
        .expect("set override");

    store.set_seed_from_anchor(Choice::Ad).expect("rebase");

    let keys = backing.keys().expect("keys");
    assert!(!keys.iter().any(|key| key.starts_with("eatWhat.override.")));
    assert_eq!(backing.get("eatWhat.locale").expect("get").as_deref(), Some("zh"));
}
