use std::collections::BTreeMap;

use log::warn;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::storage::{self, KeyValueStore, StorageError};

pub const TIME_SLOTS: &[&str] = &["21:00", "21:30", "22:00", "22:30", "23:00"];

pub const ACTIVITIES: &[&str] = &[
    "Put devices away",
    "Light stretching",
    "Warm shower",
    "Read a book",
    "Journal",
    "Breathing exercise",
    "Lights out",
];

/// Time slot to chosen activity.
pub type BedtimeRoutine = BTreeMap<String, String>;

pub fn load(store: &dyn KeyValueStore) -> BedtimeRoutine {
    storage::load_json_or_default(store, config::ROUTINE_KEY)
}

/// Stores one slot's choice on top of whatever is saved already.
pub fn set_activity(
    store: &dyn KeyValueStore,
    slot: &str,
    activity: &str,
) -> Result<BedtimeRoutine, StorageError> {
    let mut routine = load(store);
    routine.insert(slot.to_string(), activity.to_string());
    storage::save_json(store, config::ROUTINE_KEY, &routine)?;
    Ok(routine)
}

#[function_component(RoutineBuilder)]
pub fn routine_builder() -> Html {
    let routine = use_state(|| load(storage::open_store().as_ref()));

    html! {
        <div class="routine-builder">
            <div class="timeline">
                { for TIME_SLOTS.iter().map(|slot| {
                    let selected = routine.get(*slot).cloned().unwrap_or_default();
                    let onchange = {
                        let routine = routine.clone();
                        let slot = slot.to_string();
                        Callback::from(move |e: Event| {
                            let activity = e.target_unchecked_into::<HtmlSelectElement>().value();
                            match set_activity(storage::open_store().as_ref(), &slot, &activity) {
                                Ok(saved) => routine.set(saved),
                                Err(e) => warn!("{}", e),
                            }
                        })
                    };
                    html! {
                        <div class="timeline-slot" data-time={*slot}>
                            <span class="slot-time">{*slot}</span>
                            <select class="activity-select" {onchange}>
                                <option value="" selected={selected.is_empty()}>{"Choose an activity"}</option>
                                { for ACTIVITIES.iter().map(|activity| html! {
                                    <option value={*activity} selected={selected == *activity}>{*activity}</option>
                                }) }
                            </select>
                        </div>
                    }
                }) }
            </div>
            <button class="btn btn-primary" onclick={Callback::from(|_: MouseEvent| {
                browser::alert("Bedtime routine saved successfully!");
            })}>
                {"Save Routine"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_empty_routine_by_default() {
        assert!(load(&MemoryStore::new()).is_empty());
    }

    #[test]
    fn test_slot_choices_accumulate() {
        let store = MemoryStore::new();
        set_activity(&store, "21:00", "Put devices away").unwrap();
        set_activity(&store, "22:30", "Lights out").unwrap();
        let routine = load(&store);
        assert_eq!(routine.len(), 2);
        assert_eq!(routine["22:30"], "Lights out");
    }

    #[test]
    fn test_last_write_wins_per_slot() {
        let store = MemoryStore::new();
        set_activity(&store, "21:30", "Journal").unwrap();
        let routine = set_activity(&store, "21:30", "Read a book").unwrap();
        assert_eq!(routine["21:30"], "Read a book");
        assert_eq!(load(&store), routine);
    }
}
