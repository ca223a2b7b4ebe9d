use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    /// When set, renders an `aria-pressed` toggle-button state.
    #[prop_or_default]
    pub pressed: Option<bool>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    let label = p.label.clone();
    let pressed = p
        .pressed
        .map(|value| AttrValue::from(if value { "true" } else { "false" }));
    html! {
        <button
            class={p.class.clone()}
            disabled={p.disabled}
            aria-pressed={pressed}
            {onclick}
        >
            { label }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn button_renders_label() {
        let props = Props {
            label: AttrValue::from("换一个"),
            onclick: Callback::noop(),
            class: Classes::new(),
            disabled: false,
            pressed: None,
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("换一个"));
        assert!(!html.contains("aria-pressed"));
    }

    #[test]
    fn pressed_state_maps_to_aria() {
        let props = Props {
            label: AttrValue::from("AD"),
            onclick: Callback::noop(),
            class: Classes::from("seedBtn"),
            disabled: false,
            pressed: Some(true),
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(html.contains("seedBtn"));
    }

    #[test]
    fn disabled_buttons_carry_the_attribute() {
        let props = Props {
            label: AttrValue::from("恢复轮换"),
            onclick: Callback::noop(),
            class: Classes::new(),
            disabled: true,
            pressed: None,
        };
        let html = block_on(LocalServerRenderer::<Button>::with_props(props).render());
        assert!(html.contains("disabled"));
    }
}
