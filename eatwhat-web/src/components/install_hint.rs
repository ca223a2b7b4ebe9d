use yew::prelude::*;

use crate::components::button::Button;
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub standalone: bool,
    pub ios: bool,
    pub secure: bool,
    /// Whether a deferred `beforeinstallprompt` event is being held.
    pub can_prompt: bool,
    #[prop_or_default]
    pub on_install: Callback<MouseEvent>,
}

/// Install guidance matching the platform the page runs on.
///
/// iOS never fires `beforeinstallprompt`, so it only ever gets the manual
/// Add-to-Home-Screen walkthrough.
#[function_component(InstallHint)]
pub fn install_hint(p: &Props) -> Html {
    let (hint_key, show_button) = if p.standalone {
        ("install.installed", false)
    } else if p.ios {
        ("install.ios", false)
    } else if p.secure {
        ("install.android", true)
    } else {
        ("install.insecure", true)
    };

    html! {
        <section class="installHint">
            <p class="installText">{ i18n::t(hint_key) }</p>
            if show_button {
                <Button
                    label={AttrValue::from(i18n::t("install.button"))}
                    class={classes!("installBtn")}
                    disabled={!p.can_prompt}
                    onclick={p.on_install.clone()}
                />
            }
        </section>
    }
}
