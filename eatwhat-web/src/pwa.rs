//! Progressive-web-app glue: standalone detection, the service worker, the
//! deferred install prompt and storage persistence.
//!
//! Everything here degrades to an inert fallback off the browser so the rest
//! of the crate renders identically under server-side rendering and in native
//! tests.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(not(target_arch = "wasm32"))]
use wasm_bindgen::JsValue;

/// Outcome of the storage-persistence negotiation with the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistState {
    /// Not negotiated yet, or the browser does not expose the API.
    #[default]
    Unknown,
    /// The origin's storage is exempt from eviction.
    Persisted,
    /// The request was denied; storage may be cleared under pressure.
    BestEffort,
}

/// Whether the page runs as an installed app rather than a browser tab.
#[must_use]
pub fn is_standalone() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = web_sys::window() else {
            return false;
        };
        let display_mode = win
            .match_media("(display-mode: standalone)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        // Safari exposes the flag on navigator instead of via media queries.
        let ios_flag = js_sys::Reflect::get(
            win.navigator().as_ref(),
            &JsValue::from_str("standalone"),
        )
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false);
        display_mode || ios_flag
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Whether the user agent looks like an iPhone, iPad or iPod.
#[must_use]
pub fn is_ios() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.navigator().user_agent().ok())
            .is_some_and(|agent| {
                let agent = agent.to_lowercase();
                ["iphone", "ipad", "ipod"]
                    .iter()
                    .any(|needle| agent.contains(needle))
            })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Whether the browser currently reports a network connection.
#[must_use]
pub fn is_online() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().is_none_or(|win| win.navigator().on_line())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Whether the page is served from a secure context (https or localhost).
#[must_use]
pub fn is_secure_context() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().is_none_or(|win| win.is_secure_context())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Register the offline-cache service worker, if the browser has one.
///
/// Registration happens in the background; a failure is logged and the app
/// keeps running without offline support.
pub fn register_service_worker() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = web_sys::window() else {
            return;
        };
        let navigator = win.navigator();
        let has_worker =
            js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker"))
                .unwrap_or(false);
        if !has_worker {
            return;
        }
        let registration = navigator.service_worker().register("./sw.js");
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(registration).await {
                crate::dom::console_error(&format!(
                    "service worker registration failed: {}",
                    crate::dom::js_error_message(&err)
                ));
            }
        });
    }
}

/// Invoke a promise-returning method on an arbitrary JS object.
#[cfg(target_arch = "wasm32")]
fn invoke_promise(target: &JsValue, method: &str) -> Option<js_sys::Promise> {
    let func = js_sys::Reflect::get(target, &JsValue::from_str(method)).ok()?;
    let func: js_sys::Function = func.dyn_into().ok()?;
    func.call0(target).ok()?.dyn_into().ok()
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn query_persistence() -> Option<PersistState> {
    use wasm_bindgen_futures::JsFuture;

    let win = web_sys::window()?;
    let storage = js_sys::Reflect::get(
        win.navigator().as_ref(),
        &JsValue::from_str("storage"),
    )
    .ok()?;
    let already = JsFuture::from(invoke_promise(&storage, "persisted")?)
        .await
        .ok()?;
    if already.as_bool() == Some(true) {
        return Some(PersistState::Persisted);
    }
    let granted = JsFuture::from(invoke_promise(&storage, "persist")?)
        .await
        .ok()?;
    Some(if granted.as_bool() == Some(true) {
        PersistState::Persisted
    } else {
        PersistState::BestEffort
    })
}

/// Ask the browser to exempt this origin's storage from eviction.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn storage_persistence() -> PersistState {
    #[cfg(target_arch = "wasm32")]
    {
        query_persistence().await.unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        PersistState::Unknown
    }
}

/// Fire the deferred `beforeinstallprompt` event captured earlier.
pub fn prompt_install(event: &JsValue) {
    #[cfg(target_arch = "wasm32")]
    {
        if invoke_promise(event, "prompt").is_none() {
            crate::dom::console_error("install prompt could not be invoked");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = event;
    }
}
