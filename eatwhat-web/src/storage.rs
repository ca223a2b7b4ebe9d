//! `localStorage` adapter for the rotation store.

use eatwhat_core::{ChoiceStore, KeyValueStore};
use thiserror::Error;

/// Failure talking to the browser storage layer.
#[derive(Debug, Error)]
pub enum WebStorageError {
    #[error("localStorage rejected the operation: {0}")]
    Backend(String),
}

#[cfg(target_arch = "wasm32")]
fn backing() -> Result<web_sys::Storage, WebStorageError> {
    crate::dom::local_storage()
        .map_err(|err| WebStorageError::Backend(crate::dom::js_error_message(&err)))
}

#[cfg(target_arch = "wasm32")]
fn into_error(err: wasm_bindgen::JsValue) -> WebStorageError {
    WebStorageError::Backend(crate::dom::js_error_message(&err))
}

/// Key-value capability backed by the browser's `localStorage`.
///
/// Off the browser this degrades to an empty, write-discarding store so
/// server-side rendering and native tests can exercise the same code paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebKeyValueStore;

impl KeyValueStore for WebKeyValueStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            backing()?.get_item(key).map_err(into_error)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            backing()?.set_item(key, value).map_err(into_error)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            backing()?.remove_item(key).map_err(into_error)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }

    fn keys(&self) -> Result<Vec<String>, Self::Error> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = backing()?;
            let len = storage.length().map_err(into_error)?;
            let mut keys = Vec::with_capacity(usize::try_from(len).unwrap_or_default());
            for index in 0..len {
                if let Some(key) = storage.key(index).map_err(into_error)? {
                    keys.push(key);
                }
            }
            Ok(keys)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Vec::new())
        }
    }
}

/// Build the choice store over the browser storage capability.
#[must_use]
pub fn create_web_choice_store() -> ChoiceStore<WebKeyValueStore> {
    ChoiceStore::new(WebKeyValueStore)
}
