use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::calendar::EventCalendar;
use crate::components::filter::{category_visible, CategoryFilterBar, ALL};
use crate::components::modal::Modal;
use crate::components::notification::SuccessMessage;
use crate::forms::catalog::FormKind;
use crate::forms::form::SimulatedForm;

const EVENT_CATEGORIES: &[(&str, &str)] = &[
    (ALL, "All Events"),
    ("fitness", "Fitness"),
    ("nutrition", "Nutrition"),
    ("mental", "Mental Health"),
    ("social", "Social"),
];

struct CampusEvent {
    date: &'static str,
    category: &'static str,
    title: &'static str,
    time: &'static str,
    location: &'static str,
}

const EVENTS: &[CampusEvent] = &[
    CampusEvent {
        date: "2026-09-18",
        category: "social",
        title: "Welcome Back Wellness Fair",
        time: "11:00 AM – 3:00 PM",
        location: "Main Quad",
    },
    CampusEvent {
        date: "2026-10-07",
        category: "mental",
        title: "Exam Stress Drop-In",
        time: "4:00 PM – 6:00 PM",
        location: "Library Room 3B",
    },
    CampusEvent {
        date: "2026-10-25",
        category: "mental",
        title: "Mindfulness Workshop",
        time: "5:00 PM – 6:30 PM",
        location: "Wellness Center",
    },
    CampusEvent {
        date: "2026-10-28",
        category: "nutrition",
        title: "Cooking Class: Meals Under $5",
        time: "6:00 PM – 8:00 PM",
        location: "Teaching Kitchen",
    },
    CampusEvent {
        date: "2026-10-30",
        category: "fitness",
        title: "Fitness Challenge Kickoff",
        time: "7:00 AM – 8:00 AM",
        location: "Recreation Center",
    },
    CampusEvent {
        date: "2026-11-12",
        category: "social",
        title: "Board Games & Tea Night",
        time: "7:00 PM – 9:00 PM",
        location: "Student Union Lounge",
    },
];

/// Events dated before `today` are shown dimmed. Unparseable dates are not.
pub fn is_past(date: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d < today)
        .unwrap_or(false)
}

#[function_component(Events)]
pub fn events() -> Html {
    let category = use_state(|| ALL);
    let registering = use_state(|| None::<&'static str>);
    let success = use_state(|| None::<AttrValue>);
    let today = chrono::Local::now().date_naive();

    let on_select = {
        let category = category.clone();
        Callback::from(move |selected: &'static str| category.set(selected))
    };
    let close_modal = {
        let registering = registering.clone();
        Callback::from(move |_: ()| registering.set(None))
    };
    let on_registered = {
        let registering = registering.clone();
        let success = success.clone();
        Callback::from(move |message: &'static str| {
            registering.set(None);
            success.set(Some(AttrValue::from(message)));
        })
    };
    let dismiss = {
        let success = success.clone();
        Callback::from(move |_: ()| success.set(None))
    };

    html! {
        <div class="events-page">
            <section class="page-hero">
                <h1>{"Events"}</h1>
                <p>{"Workshops, classes and social nights run by the wellness center and student groups."}</p>
            </section>

            <section class="section">
                <div class="container">
                    <SuccessMessage message={(*success).clone()} on_close={dismiss} />
                    <h2>{"Calendar"}</h2>
                    <EventCalendar />
                </div>
            </section>

            <section class="section event-list-section">
                <div class="container">
                    <h2>{"Upcoming Events"}</h2>
                    <CategoryFilterBar categories={EVENT_CATEGORIES} selected={*category} {on_select} />
                    <div class="event-list">
                        { for EVENTS.iter()
                            .filter(|event| category_visible(*category, event.category))
                            .map(|event| {
                                let past = is_past(event.date, today);
                                let title = event.title;
                                let onclick = {
                                    let registering = registering.clone();
                                    Callback::from(move |_: MouseEvent| registering.set(Some(title)))
                                };
                                html! {
                                    <div class={classes!("event-item", past.then(|| "past"))}
                                        data-date={event.date} data-category={event.category}>
                                        <div class="event-date">{event.date}</div>
                                        <div class="event-details">
                                            <h3>{event.title}</h3>
                                            <p>
                                                <i class="fas fa-clock"></i>{" "}{event.time}
                                                {" · "}
                                                <i class="fas fa-map-marker-alt"></i>{" "}{event.location}
                                            </p>
                                        </div>
                                        <button class="btn btn-primary event-btn register" disabled={past} {onclick}>
                                            {if past { "Ended" } else { "Register" }}
                                        </button>
                                    </div>
                                }
                            }) }
                    </div>
                </div>
            </section>

            <Modal
                id="eventModal"
                title={registering.map(|t| format!("Register: {}", t)).unwrap_or_default()}
                open={registering.is_some()}
                on_close={close_modal}
            >
                <SimulatedForm kind={FormKind::EventRegistration} on_success={on_registered} />
            </Modal>

            <style>
                {r#"
                .event-list-section { background: var(--surface); }
                .event-list { display: flex; flex-direction: column; gap: 1rem; }
                .event-item {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 1rem 1.25rem;
                    background: var(--bg);
                    border: 1px solid var(--border);
                    border-radius: 10px;
                }
                .event-item.past { opacity: 0.6; }
                .event-date { font-weight: 700; color: var(--accent); min-width: 110px; }
                .event-details { flex: 1; }
                .event-details h3 { margin: 0 0 0.25rem; }
                .event-details p { margin: 0; color: var(--muted); }
                @media (max-width: 768px) {
                    .event-item { flex-direction: column; align-items: flex-start; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_events_before_today_are_past() {
        let today = day(2026, 10, 19);
        assert!(is_past("2026-10-07", today));
        assert!(!is_past("2026-10-19", today));
        assert!(!is_past("2026-10-25", today));
    }

    #[test]
    fn test_bad_dates_are_never_dimmed() {
        assert!(!is_past("someday", day(2026, 1, 1)));
    }

    #[test]
    fn test_listed_dates_parse() {
        for event in EVENTS {
            assert!(NaiveDate::parse_from_str(event.date, "%Y-%m-%d").is_ok(), "{}", event.title);
        }
    }
}
