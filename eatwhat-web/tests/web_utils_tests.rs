use chrono::NaiveDate;
use eatwhat_core::{Choice, KeyValueStore, Origin, anchor};
use eatwhat_web::pwa::{self, PersistState};
use eatwhat_web::storage::{WebKeyValueStore, create_web_choice_store};
use eatwhat_web::{clock, i18n};
use futures::executor::block_on;

#[test]
fn chinese_is_the_default_locale() {
    assert_eq!(i18n::current_lang(), "zh");
    assert_eq!(i18n::t("app.title"), "今天吃什么");
    assert_eq!(i18n::locales()[0].code, "zh");
}

#[test]
fn switching_to_english_swaps_the_bundle() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert_eq!(i18n::t("app.title"), "Eat What Today");
    assert_eq!(i18n::t("status.online"), "Online");
}

#[test]
fn unknown_locales_are_ignored() {
    i18n::set_lang("zh");
    i18n::set_lang("tlh");
    assert_eq!(i18n::current_lang(), "zh");
}

#[test]
fn locale_bundles_cover_the_same_keys() {
    for key in [
        "app.title",
        "today.hint_override",
        "today.hint_rotation",
        "seed.legend",
        "calendar.prev",
        "status.best_effort",
        "install.ios",
        "install.button",
    ] {
        i18n::set_lang("en");
        assert_ne!(i18n::t(key), key, "missing in en: {key}");
        i18n::set_lang("zh");
        assert_ne!(i18n::t(key), key, "missing in zh: {key}");
    }
}

#[test]
fn native_storage_reads_empty_and_discards_writes() {
    let store = WebKeyValueStore;
    store.set("eatWhat.probe", "1").unwrap();
    assert_eq!(store.get("eatWhat.probe").unwrap(), None);
    assert!(store.keys().unwrap().is_empty());
    store.remove("eatWhat.probe").unwrap();
}

#[test]
fn headless_store_still_resolves_the_rotation() {
    let store = create_web_choice_store();
    let resolved = store.resolve(anchor()).unwrap();
    assert_eq!(resolved.choice, Choice::D3);
    assert_eq!(resolved.origin, Origin::Rotation);
    let next = store
        .resolve(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
        .unwrap();
    assert_eq!(next.choice, Choice::Ad);
}

#[test]
fn pwa_probes_fall_back_off_the_browser() {
    assert!(!pwa::is_standalone());
    assert!(!pwa::is_ios());
    assert!(pwa::is_online());
    assert!(pwa::is_secure_context());
    assert_eq!(block_on(pwa::storage_persistence()), PersistState::Unknown);
}

#[test]
fn clock_tracks_the_device_date() {
    let before = chrono::Local::now().date_naive();
    let today = clock::today();
    let after = chrono::Local::now().date_naive();
    assert!(today >= before && today <= after);
}
