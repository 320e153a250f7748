use log::warn;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::config;
use crate::storage::{self, KeyValueStore, StorageError};

pub struct Activity {
    pub id: &'static str,
    pub name: &'static str,
    pub detail: &'static str,
    pub icon: &'static str,
}

pub const DAILY_ACTIVITIES: &[Activity] = &[
    Activity { id: "walk", name: "Morning Walk", detail: "30 minutes around campus", icon: "fas fa-walking" },
    Activity { id: "hydrate", name: "Hydration", detail: "8 glasses of water", icon: "fas fa-tint" },
    Activity { id: "stretch", name: "Stretching", detail: "10 minutes of mobility work", icon: "fas fa-child" },
    Activity { id: "strength", name: "Strength Training", detail: "One rec center session", icon: "fas fa-dumbbell" },
];

/// Persisted snapshot of today's activity checklist.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitnessProgress {
    pub progress: u32,
    pub completed_activities: u32,
    pub total_activities: u32,
    #[serde(default)]
    pub completed: Vec<String>,
}

impl Default for FitnessProgress {
    fn default() -> Self {
        FitnessProgress {
            progress: 0,
            completed_activities: 0,
            total_activities: DAILY_ACTIVITIES.len() as u32,
            completed: Vec::new(),
        }
    }
}

/// Whole percent, rounded half up.
pub fn progress_percent(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(completed) / f64::from(total) * 100.0).round() as u32
}

impl FitnessProgress {
    pub fn is_completed(&self, activity: &str) -> bool {
        self.completed.iter().any(|a| a == activity)
    }

    /// Flips one activity and recomputes the derived counters.
    pub fn toggle(&mut self, activity: &str, total: u32) {
        if self.is_completed(activity) {
            self.completed.retain(|a| a != activity);
        } else {
            self.completed.push(activity.to_string());
        }
        self.completed_activities = self.completed.len() as u32;
        self.total_activities = total;
        self.progress = progress_percent(self.completed_activities, total);
    }
}

pub fn load(store: &dyn KeyValueStore) -> FitnessProgress {
    storage::load_json_or_default(store, config::FITNESS_KEY)
}

pub fn save(store: &dyn KeyValueStore, progress: &FitnessProgress) -> Result<(), StorageError> {
    storage::save_json(store, config::FITNESS_KEY, progress)
}

#[function_component(FitnessTracker)]
pub fn fitness_tracker() -> Html {
    let progress = use_state(|| load(storage::open_store().as_ref()));

    html! {
        <div class="fitness-tracker">
            <div class="progress-ring">
                <div class="circle" style={format!("--progress: {};", progress.progress)}>
                    <span class="progress-value">{format!("{}%", progress.progress)}</span>
                </div>
                <p>{format!("{} of {} activities done today", progress.completed_activities, progress.total_activities)}</p>
            </div>
            <div class="activity-grid">
                { for DAILY_ACTIVITIES.iter().map(|activity| {
                    let done = progress.is_completed(activity.id);
                    let onclick = {
                        let progress = progress.clone();
                        let id = activity.id;
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*progress).clone();
                            next.toggle(id, DAILY_ACTIVITIES.len() as u32);
                            if let Err(e) = save(storage::open_store().as_ref(), &next) {
                                warn!("{}", e);
                            }
                            progress.set(next);
                        })
                    };
                    html! {
                        <div class={classes!("activity-card", done.then(|| "completed"))} data-activity={activity.id}>
                            <i class={activity.icon}></i>
                            <h4>{activity.name}</h4>
                            <p>{activity.detail}</p>
                            <button class="activity-btn" {onclick}>
                                {if done { "Completed" } else { "Complete" }}
                            </button>
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                .fitness-tracker { display: grid; gap: 2rem; }
                .progress-ring { text-align: center; }
                .circle {
                    width: 140px;
                    height: 140px;
                    margin: 0 auto;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: conic-gradient(var(--success) calc(var(--progress) * 1%), var(--border) 0);
                }
                .progress-value {
                    background: var(--bg);
                    border-radius: 50%;
                    width: 110px;
                    height: 110px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .activity-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1rem;
                }
                .activity-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.25rem;
                    text-align: center;
                }
                .activity-card.completed { border-color: var(--success); }
                .activity-btn {
                    border: none;
                    border-radius: 6px;
                    padding: 0.5rem 1.25rem;
                    background: var(--accent);
                    color: #fff;
                    cursor: pointer;
                }
                .activity-card.completed .activity-btn { background: #27AE60; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_when_nothing_saved() {
        let store = MemoryStore::new();
        let progress = load(&store);
        assert_eq!(progress.progress, 0);
        assert_eq!(progress.completed_activities, 0);
        assert_eq!(progress.total_activities, 4);
    }

    #[test]
    fn test_progress_rounds_to_whole_percent() {
        assert_eq!(progress_percent(0, 4), 0);
        assert_eq!(progress_percent(1, 4), 25);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(4, 4), 100);
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn test_toggle_updates_counters() {
        let mut progress = FitnessProgress::default();
        progress.toggle("walk", 4);
        progress.toggle("stretch", 4);
        assert_eq!(progress.completed_activities, 2);
        assert_eq!(progress.progress, 50);

        progress.toggle("walk", 4);
        assert!(!progress.is_completed("walk"));
        assert_eq!(progress.progress, 25);
    }

    #[test]
    fn test_saved_snapshot_survives_reload() {
        let store = MemoryStore::new();
        let mut progress = load(&store);
        progress.toggle("hydrate", 4);
        save(&store, &progress).unwrap();
        assert_eq!(load(&store), progress);
    }

    #[test]
    fn test_reads_snapshot_without_activity_list() {
        let store = MemoryStore::new();
        store
            .set(config::FITNESS_KEY, r#"{"progress":75,"completedActivities":3,"totalActivities":4}"#)
            .unwrap();
        let progress = load(&store);
        assert_eq!(progress.progress, 75);
        assert!(progress.completed.is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_resets_to_default() {
        let store = MemoryStore::new();
        store.set(config::FITNESS_KEY, "not json").unwrap();
        assert_eq!(load(&store), FitnessProgress::default());
    }
}
