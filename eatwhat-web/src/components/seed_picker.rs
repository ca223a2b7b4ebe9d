use std::collections::BTreeMap;

use eatwhat_core::{Choice, anchor, date_key};
use yew::prelude::*;

use crate::components::button::Button;
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: Choice,
    #[prop_or_default]
    pub on_pick: Callback<Choice>,
}

/// Two toggle buttons selecting which label the anchor date held.
///
/// Picking a seed rebases the whole rotation and drops every pinned day, so
/// this mirrors the store's reset semantics one-to-one.
#[function_component(SeedPicker)]
pub fn seed_picker(p: &Props) -> Html {
    let legend = {
        let anchor_text = date_key(anchor());
        let mut args = BTreeMap::new();
        args.insert("anchor", anchor_text.as_str());
        i18n::tr("seed.legend", Some(&args))
    };

    let seed_button = |choice: Choice| {
        let on_pick = p.on_pick.clone();
        let onclick = Callback::from(move |_| on_pick.emit(choice));
        let active = p.seed == choice;
        html! {
            <Button
                label={AttrValue::from(choice.as_str())}
                class={classes!("seedBtn", active.then_some("isActive"))}
                pressed={Some(active)}
                {onclick}
            />
        }
    };

    html! {
        <section class="seedPicker">
            <p class="seedLegend">{ legend }</p>
            <div class="seedButtons">
                { seed_button(Choice::Ad) }
                { seed_button(Choice::D3) }
            </div>
        </section>
    }
}
