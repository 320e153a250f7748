use chrono::NaiveDate;
use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::storage::{self, KeyValueStore, StorageError};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Milestone {
    pub days: i64,
    pub label: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone { days: 1, label: "24 Hours" },
    Milestone { days: 7, label: "1 Week" },
    Milestone { days: 30, label: "30 Days" },
    Milestone { days: 90, label: "90 Days" },
    Milestone { days: 180, label: "6 Months" },
    Milestone { days: 365, label: "1 Year" },
];

/// Whole days between the two dates, in either direction.
pub fn elapsed_days(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days().abs()
}

pub fn milestone_reached(elapsed: i64, milestone: &Milestone) -> bool {
    elapsed >= milestone.days
}

/// The stored start date. An unparseable value is treated as unset.
pub fn load(store: &dyn KeyValueStore) -> Option<NaiveDate> {
    let raw = match store.get(config::SOBRIETY_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("{}", e);
            return None;
        }
    };
    match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("ignoring stored sobriety date {:?}: {}", raw, e);
            None
        }
    }
}

pub fn save(store: &dyn KeyValueStore, start: NaiveDate) -> Result<(), StorageError> {
    store.set(config::SOBRIETY_KEY, &start.format(DATE_FORMAT).to_string())
}

pub fn clear(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(config::SOBRIETY_KEY)
}

#[function_component(SobrietyTracker)]
pub fn sobriety_tracker() -> Html {
    let start = use_state(|| load(storage::open_store().as_ref()));
    let input = use_state(|| {
        start
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    });
    let today = chrono::Local::now().date_naive();
    let elapsed = start.map(|d| elapsed_days(d, today));

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_set = {
        let start = start.clone();
        let input = input.clone();
        Callback::from(move |_: MouseEvent| {
            if input.is_empty() {
                browser::alert("Please select a sobriety date.");
                return;
            }
            match NaiveDate::parse_from_str(&input, DATE_FORMAT) {
                Ok(date) => {
                    if let Err(e) = save(storage::open_store().as_ref(), date) {
                        warn!("{}", e);
                    }
                    info!("Sobriety date set");
                    start.set(Some(date));
                }
                Err(_) => browser::alert("Please select a sobriety date."),
            }
        })
    };

    let on_reset = {
        let start = start.clone();
        let input = input.clone();
        Callback::from(move |_: MouseEvent| {
            if !browser::confirm("Are you sure you want to reset your sobriety date?") {
                return;
            }
            if let Err(e) = clear(storage::open_store().as_ref()) {
                warn!("{}", e);
            }
            start.set(None);
            input.set(String::new());
        })
    };

    html! {
        <div class="sobriety-tracker">
            <div class="sobriety-count">
                <span id="sobrietyDays" class="days-number">
                    {elapsed.map(|d| d.to_string()).unwrap_or_else(|| "0".to_string())}
                </span>
                <span class="days-label">{"days"}</span>
            </div>
            <div class="sobriety-controls">
                <input type="date" id="sobrietyDate" value={(*input).clone()} oninput={on_input} />
                <button class="btn btn-primary" onclick={on_set}>{"Set Date"}</button>
                <button class="btn btn-secondary" onclick={on_reset}>{"Reset"}</button>
            </div>
            <div class="milestones">
                { for MILESTONES.iter().map(|m| {
                    let reached = elapsed.map_or(false, |d| milestone_reached(d, m));
                    html! {
                        <div class={classes!("milestone", reached.then(|| "reached"))} data-days={m.days.to_string()}>
                            <i class="fas fa-medal"></i>
                            <span>{m.label}</span>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .sobriety-count { text-align: center; margin-bottom: 1rem; }
                .days-number { font-size: 3rem; font-weight: 700; color: var(--accent); }
                .days-label { display: block; color: var(--muted); }
                .sobriety-controls { display: flex; gap: 0.5rem; justify-content: center; flex-wrap: wrap; }
                .milestones {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(110px, 1fr));
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .milestone {
                    text-align: center;
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid var(--border);
                    opacity: 0.5;
                }
                .milestone.reached { opacity: 1; background: #27AE60; color: white; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ten_days_marks_lower_milestones_only() {
        let today = date(2024, 6, 20);
        let elapsed = elapsed_days(date(2024, 6, 10), today);
        assert_eq!(elapsed, 10);
        for m in MILESTONES {
            assert_eq!(milestone_reached(elapsed, m), m.days <= 10, "{}", m.label);
        }
    }

    #[test]
    fn test_elapsed_days_crosses_years() {
        assert_eq!(elapsed_days(date(2023, 12, 25), date(2024, 1, 4)), 10);
        assert_eq!(elapsed_days(date(2023, 6, 1), date(2024, 6, 1)), 366);
    }

    #[test]
    fn test_future_start_counts_absolute_days() {
        assert_eq!(elapsed_days(date(2024, 6, 13), date(2024, 6, 10)), 3);
    }

    #[test]
    fn test_same_day_is_zero() {
        let today = date(2024, 2, 29);
        assert_eq!(elapsed_days(today, today), 0);
        assert!(!milestone_reached(0, &MILESTONES[0]));
    }

    #[test]
    fn test_saved_as_plain_date_string() {
        let store = MemoryStore::new();
        save(&store, date(2024, 1, 15)).unwrap();
        assert_eq!(store.get(config::SOBRIETY_KEY).unwrap().as_deref(), Some("2024-01-15"));
        assert_eq!(load(&store), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_clear_removes_date() {
        let store = MemoryStore::new();
        save(&store, date(2024, 1, 15)).unwrap();
        clear(&store).unwrap();
        assert_eq!(load(&store), None);
    }

    #[test]
    fn test_unparseable_date_is_unset() {
        let store = MemoryStore::new();
        store.set(config::SOBRIETY_KEY, "last tuesday").unwrap();
        assert_eq!(load(&store), None);
    }
}
