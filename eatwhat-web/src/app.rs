use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use eatwhat_core::{
    Choice, ChoiceStore, GridSlot, MonthGrid, Origin, Resolved, add_months, date_key, month_start,
    rotated_choice,
};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::clock;
use crate::components::calendar::{CalendarView, DayCell};
use crate::components::install_hint::InstallHint;
use crate::components::seed_picker::SeedPicker;
use crate::components::status_line::StatusLine;
use crate::components::today_card::TodayCard;
use crate::i18n;
use crate::pwa::{self, PersistState};
use crate::storage::{WebKeyValueStore, create_web_choice_store};

fn report_storage_error(context: &str, err: &crate::storage::WebStorageError) {
    crate::dom::console_error(&format!("{context}: {err}"));
}

fn current_seed(store: &ChoiceStore<WebKeyValueStore>) -> Choice {
    store.seed().unwrap_or_else(|err| {
        report_storage_error("reading the seed failed", &err);
        Choice::default()
    })
}

/// Resolve a date, falling back to the pure rotation when storage is broken.
fn resolve_or_rotate(
    store: &ChoiceStore<WebKeyValueStore>,
    date: NaiveDate,
    seed: Choice,
) -> Resolved {
    store.resolve(date).unwrap_or_else(|err| {
        report_storage_error("resolving a date failed", &err);
        Resolved {
            choice: rotated_choice(date, seed),
            origin: Origin::Rotation,
        }
    })
}

const fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "weekday.mon",
        Weekday::Tue => "weekday.tue",
        Weekday::Wed => "weekday.wed",
        Weekday::Thu => "weekday.thu",
        Weekday::Fri => "weekday.fri",
        Weekday::Sat => "weekday.sat",
        Weekday::Sun => "weekday.sun",
    }
}

fn date_line(today: NaiveDate) -> String {
    use chrono::Datelike;

    let date_text = date_key(today);
    let weekday_text = i18n::t(weekday_key(today.weekday()));
    let mut args = BTreeMap::new();
    args.insert("date", date_text.as_str());
    args.insert("weekday", weekday_text.as_str());
    i18n::tr("today.date_line", Some(&args))
}

/// Root component wiring the store, the clock and the PWA glue to the UI.
#[function_component(App)]
pub fn app() -> Html {
    let today = clock::today();
    // Bumped after every store mutation to force a repaint from storage.
    let revision = use_state(|| 0_u32);
    let view_month = use_state(|| month_start(today));
    let online = use_state(pwa::is_online);
    let persist = use_state(PersistState::default);
    let standalone = use_state(pwa::is_standalone);
    let deferred_prompt = use_state(|| None::<JsValue>);

    {
        let online = online.clone();
        let persist = persist.clone();
        let standalone = standalone.clone();
        let deferred_prompt = deferred_prompt.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsCast;
                use wasm_bindgen::closure::Closure;

                if let Some(win) = web_sys::window() {
                    let online_cb = {
                        let online = online.clone();
                        Closure::<dyn FnMut()>::new(move || online.set(true))
                    };
                    let offline_cb = {
                        let online = online.clone();
                        Closure::<dyn FnMut()>::new(move || online.set(false))
                    };
                    let prompt_cb = {
                        let deferred_prompt = deferred_prompt.clone();
                        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                            event.prevent_default();
                            deferred_prompt.set(Some(JsValue::from(event)));
                        })
                    };
                    let installed_cb = {
                        let standalone = standalone.clone();
                        let deferred_prompt = deferred_prompt.clone();
                        Closure::<dyn FnMut()>::new(move || {
                            deferred_prompt.set(None);
                            standalone.set(true);
                        })
                    };
                    let _ = win.add_event_listener_with_callback(
                        "online",
                        online_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.add_event_listener_with_callback(
                        "offline",
                        offline_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.add_event_listener_with_callback(
                        "beforeinstallprompt",
                        prompt_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.add_event_listener_with_callback(
                        "appinstalled",
                        installed_cb.as_ref().unchecked_ref(),
                    );
                    online_cb.forget();
                    offline_cb.forget();
                    prompt_cb.forget();
                    installed_cb.forget();
                }
                wasm_bindgen_futures::spawn_local(async move {
                    persist.set(pwa::storage_persistence().await);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (online, persist, standalone, deferred_prompt);
            }
        });
    }

    let bump = {
        let revision = revision.clone();
        move || revision.set(revision.wrapping_add(1))
    };

    let on_toggle = {
        let bump = bump.clone();
        Callback::from(move |_: MouseEvent| {
            let store = create_web_choice_store();
            let day = clock::today();
            let current = match store.resolve(day) {
                Ok(resolved) => resolved.choice,
                Err(err) => {
                    report_storage_error("toggling today failed", &err);
                    return;
                }
            };
            if let Err(err) = store.set_override(day, current.other()) {
                report_storage_error("pinning today failed", &err);
            }
            bump();
        })
    };

    let on_reset = {
        let bump = bump.clone();
        Callback::from(move |_: MouseEvent| {
            let store = create_web_choice_store();
            if let Err(err) = store.clear_override(clock::today()) {
                report_storage_error("unpinning today failed", &err);
            }
            bump();
        })
    };

    let on_pick_seed = {
        let bump = bump.clone();
        Callback::from(move |choice: Choice| {
            let store = create_web_choice_store();
            if let Err(err) = store.set_seed_from_anchor(choice) {
                report_storage_error("rebasing the rotation failed", &err);
            }
            bump();
        })
    };

    let on_prev = {
        let view_month = view_month.clone();
        Callback::from(move |()| view_month.set(add_months(*view_month, -1)))
    };
    let on_next = {
        let view_month = view_month.clone();
        Callback::from(move |()| view_month.set(add_months(*view_month, 1)))
    };

    let on_install = {
        let deferred_prompt = deferred_prompt.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(event) = (*deferred_prompt).clone() {
                pwa::prompt_install(&event);
                deferred_prompt.set(None);
            }
        })
    };

    let store = create_web_choice_store();
    let seed = current_seed(&store);
    let today_resolved = resolve_or_rotate(&store, today, seed);
    let cells: Vec<Option<DayCell>> = MonthGrid::for_month(*view_month)
        .slots()
        .map(|slot| match slot {
            GridSlot::Blank => None,
            GridSlot::Day(date) => {
                let resolved = resolve_or_rotate(&store, date, seed);
                Some(DayCell {
                    date,
                    choice: resolved.choice,
                    origin: resolved.origin,
                })
            }
        })
        .collect();

    html! {
        <main class="app">
            <header class="appHeader">
                <h1>{ i18n::t("app.title") }</h1>
            </header>
            <TodayCard
                date_line={AttrValue::from(date_line(today))}
                choice={today_resolved.choice}
                origin={today_resolved.origin}
                seed={seed}
                on_toggle={on_toggle}
                on_reset={on_reset}
            />
            <SeedPicker seed={seed} on_pick={on_pick_seed} />
            <CalendarView
                month={*view_month}
                today={today}
                cells={cells}
                on_prev={on_prev}
                on_next={on_next}
            />
            <StatusLine online={*online} persist={*persist} />
            <InstallHint
                standalone={*standalone}
                ios={pwa::is_ios()}
                secure={pwa::is_secure_context()}
                can_prompt={deferred_prompt.is_some()}
                on_install={on_install}
            />
        </main>
    }
}
