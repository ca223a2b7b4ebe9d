use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

const LOCALE_KEY: &str = "eatWhat.locale";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "zh",
        name: "中文",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("zh", include_str!("../i18n/zh.json")),
    ("en", include_str!("../i18n/en.json")),
];

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !LOCALE_META.iter().any(|meta| meta.code == lang) {
        return None;
    }
    let fallback = load_translations("zh")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("zh").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "zh".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
            .unwrap_or_else(|| "zh".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "zh".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(|| build_bundle("zh").unwrap_or_else(fallback_bundle))
    });
}

/// Set the current language for internationalization
///
/// Changes the active language bundle and updates the DOM lang attribute.
/// Persists the language choice to localStorage for future sessions.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::debug!("ignoring unknown locale {lang:?}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(LOCALE_KEY, lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (key, replacement) in args_map {
            let braced = format!("{{{{{key}}}}}"); // {{var}}
            let plain = format!("{{{key}}}"); // {var}
            text = text.replace(&braced, replacement);
            text = text.replace(&plain, replacement);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|value| render_value(value, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key).and_then(|value| render_value(value, args))
            })
    })
}

/// Translate a key to the current language
///
/// Simple translation without variable substitution.
/// Falls back to Chinese if the key is missing from the current language.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
