use std::collections::BTreeMap;

use eatwhat_core::{Choice, Origin, anchor, date_key};
use yew::prelude::*;

use crate::components::button::Button;
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub date_line: AttrValue,
    pub choice: Choice,
    pub origin: Origin,
    pub seed: Choice,
    #[prop_or_default]
    pub on_toggle: Callback<MouseEvent>,
    #[prop_or_default]
    pub on_reset: Callback<MouseEvent>,
}

/// The headline card: today's date, the resolved choice and the two actions.
#[function_component(TodayCard)]
pub fn today_card(p: &Props) -> Html {
    let pill = {
        let mut args = BTreeMap::new();
        args.insert("choice", p.choice.as_str());
        i18n::tr("today.pill", Some(&args))
    };
    let rule = {
        let anchor_text = date_key(anchor());
        let mut args = BTreeMap::new();
        args.insert("anchor", anchor_text.as_str());
        args.insert("seed", p.seed.as_str());
        i18n::tr("today.rule", Some(&args))
    };
    let hint = i18n::t(match p.origin {
        Origin::Override => "today.hint_override",
        Origin::Rotation => "today.hint_rotation",
    });

    html! {
        <section class="todayCard">
            <p class="todayText">{ p.date_line.clone() }</p>
            <p class="choiceValue">{ p.choice.as_str() }</p>
            <p class="todayPill">{ pill }</p>
            <p class="rulePill">{ rule }</p>
            <p class="hintText">{ hint }</p>
            <div class="todayActions">
                <Button
                    label={AttrValue::from(i18n::t("today.toggle"))}
                    onclick={p.on_toggle.clone()}
                />
                <Button
                    label={AttrValue::from(i18n::t("today.reset"))}
                    onclick={p.on_reset.clone()}
                    disabled={p.origin != Origin::Override}
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(origin: Origin) -> String {
        let props = Props {
            date_line: AttrValue::from("2025-12-30 · 星期二"),
            choice: Choice::D3,
            origin,
            seed: Choice::D3,
            on_toggle: Callback::noop(),
            on_reset: Callback::noop(),
        };
        block_on(LocalServerRenderer::<TodayCard>::with_props(props).render())
    }

    #[test]
    fn rotation_days_show_the_rule_hint_and_disable_reset() {
        let html = render(Origin::Rotation);
        assert!(html.contains("D3"));
        assert!(html.contains("按天轮换"));
        assert!(html.contains("2025-12-30"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn pinned_days_show_the_override_hint() {
        let html = render(Origin::Override);
        assert!(html.contains("已手动指定今日选项"));
    }
}
