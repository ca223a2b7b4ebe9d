#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod clock;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pwa;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ensure <html lang> matches the saved locale before the first paint
    crate::i18n::set_lang(&crate::i18n::current_lang());
    pwa::register_service_worker();
    yew::Renderer::<app::App>::new().render();
}
