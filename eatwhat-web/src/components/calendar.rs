use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use eatwhat_core::{Choice, Origin, date_key};
use yew::prelude::*;

use crate::components::button::Button;
use crate::i18n;

/// Horizontal swipe distance, in CSS pixels, that counts as a month flip.
const SWIPE_THRESHOLD_PX: i32 = 48;

const WEEKDAY_KEYS: [&str; 7] = [
    "calendar.wd.mon",
    "calendar.wd.tue",
    "calendar.wd.wed",
    "calendar.wd.thu",
    "calendar.wd.fri",
    "calendar.wd.sat",
    "calendar.wd.sun",
];

/// One resolved day of the viewed month.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub choice: Choice,
    pub origin: Origin,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// First day of the viewed month.
    pub month: NaiveDate,
    pub today: NaiveDate,
    /// Row-major grid slots, `None` for the leading and trailing blanks.
    pub cells: Vec<Option<DayCell>>,
    #[prop_or_default]
    pub on_prev: Callback<()>,
    #[prop_or_default]
    pub on_next: Callback<()>,
}

fn month_label(month: NaiveDate) -> String {
    let month_name = i18n::t(&format!("calendar.month.{}", month.month()));
    let year_text = month.year().to_string();
    let mut args = BTreeMap::new();
    args.insert("year", year_text.as_str());
    args.insert("month_name", month_name.as_str());
    i18n::tr("calendar.month_label", Some(&args))
}

fn day_cell(cell: Option<&DayCell>, today: NaiveDate) -> Html {
    let Some(cell) = cell else {
        return html! { <div class="dayCell dayCellEmpty"></div> };
    };
    let is_today = cell.date == today;
    let meta_class = classes!(
        "dayMeta",
        (cell.origin == Origin::Override).then_some("dayMetaOverride")
    );
    html! {
        <div
            class={classes!("dayCell", is_today.then_some("isToday"))}
            data-date={date_key(cell.date)}
        >
            <div class="dayNum">{ cell.date.day() }</div>
            <div class={meta_class}>{ cell.choice.as_str() }</div>
        </div>
    }
}

/// Monday-first month view with button and swipe navigation.
#[function_component(CalendarView)]
pub fn calendar_view(p: &Props) -> Html {
    let touch_start_x = use_state(|| None::<i32>);

    let ontouchstart = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |event: TouchEvent| {
            touch_start_x.set(event.touches().get(0).map(|touch| touch.client_x()));
        })
    };
    let ontouchend = {
        let touch_start_x = touch_start_x.clone();
        let on_prev = p.on_prev.clone();
        let on_next = p.on_next.clone();
        Callback::from(move |event: TouchEvent| {
            let Some(start) = *touch_start_x else {
                return;
            };
            touch_start_x.set(None);
            let Some(touch) = event.changed_touches().get(0) else {
                return;
            };
            let delta = touch.client_x() - start;
            if delta <= -SWIPE_THRESHOLD_PX {
                on_next.emit(());
            } else if delta >= SWIPE_THRESHOLD_PX {
                on_prev.emit(());
            }
        })
    };

    let on_prev_click = {
        let on_prev = p.on_prev.clone();
        Callback::from(move |_| on_prev.emit(()))
    };
    let on_next_click = {
        let on_next = p.on_next.clone();
        Callback::from(move |_| on_next.emit(()))
    };

    html! {
        <section class="calendar">
            <header class="calendarHeader">
                <Button
                    label={AttrValue::from(i18n::t("calendar.prev"))}
                    class={classes!("monthNav")}
                    onclick={on_prev_click}
                />
                <span class="monthText">{ month_label(p.month) }</span>
                <Button
                    label={AttrValue::from(i18n::t("calendar.next"))}
                    class={classes!("monthNav")}
                    onclick={on_next_click}
                />
            </header>
            <div class="weekdayRow">
                { for WEEKDAY_KEYS.iter().map(|key| html! {
                    <div class="weekdayCell">{ i18n::t(key) }</div>
                }) }
            </div>
            <div class="calendarGrid" {ontouchstart} {ontouchend}>
                { for p.cells.iter().map(|cell| day_cell(cell.as_ref(), p.today)) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eatwhat_core::{GridSlot, MonthGrid, rotated_choice};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cells_for(month: NaiveDate) -> Vec<Option<DayCell>> {
        MonthGrid::for_month(month)
            .slots()
            .map(|slot| match slot {
                GridSlot::Blank => None,
                GridSlot::Day(day) => Some(DayCell {
                    date: day,
                    choice: rotated_choice(day, Choice::D3),
                    origin: Origin::Rotation,
                }),
            })
            .collect()
    }

    #[test]
    fn february_2026_renders_blanks_and_marks_today() {
        let month = date(2026, 2, 1);
        let props = Props {
            month,
            today: date(2026, 2, 14),
            cells: cells_for(month),
            on_prev: Callback::noop(),
            on_next: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CalendarView>::with_props(props).render());
        assert!(html.contains("2026年2月"));
        assert_eq!(html.matches("dayCellEmpty").count(), 7);
        assert!(html.contains("isToday"));
        assert!(html.contains("data-date=\"2026-02-01\""));
    }

    #[test]
    fn every_day_shows_its_rotated_label() {
        let month = date(2026, 1, 1);
        let props = Props {
            month,
            today: date(2026, 1, 1),
            cells: cells_for(month),
            on_prev: Callback::noop(),
            on_next: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CalendarView>::with_props(props).render());
        let ads = html.matches(">AD<").count();
        let d3s = html.matches(">D3<").count();
        assert_eq!(ads + d3s, 31);
        // A 31-day month splits 16/15 between the two labels.
        assert_eq!(ads.abs_diff(d3s), 1);
    }
}
