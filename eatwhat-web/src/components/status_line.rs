use yew::prelude::*;

use crate::i18n;
use crate::pwa::PersistState;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub online: bool,
    pub persist: PersistState,
}

/// One-line connectivity and storage-durability readout.
#[function_component(StatusLine)]
pub fn status_line(p: &Props) -> Html {
    let net = i18n::t(if p.online {
        "status.online"
    } else {
        "status.offline"
    });
    let text = match p.persist {
        PersistState::Persisted => format!("{net} · {}", i18n::t("status.persisted")),
        PersistState::BestEffort => format!("{net} · {}", i18n::t("status.best_effort")),
        PersistState::Unknown => net,
    };
    html! { <p class="statusText">{ text }</p> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(online: bool, persist: PersistState) -> String {
        let props = Props { online, persist };
        block_on(LocalServerRenderer::<StatusLine>::with_props(props).render())
    }

    #[test]
    fn unknown_persistence_shows_only_the_network_state() {
        let html = render(true, PersistState::Unknown);
        assert!(html.contains("在线"));
        assert!(!html.contains("存储"));
    }

    #[test]
    fn persisted_storage_is_appended_after_the_separator() {
        let html = render(false, PersistState::Persisted);
        assert!(html.contains("离线 · 存储已固定"));
    }

    #[test]
    fn denied_persistence_warns_about_eviction() {
        let html = render(true, PersistState::BestEffort);
        assert!(html.contains("存储可能被系统清理"));
    }
}
