use chrono::{Duration, NaiveDate, NaiveTime};
use log::{info, warn};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::{HtmlCanvasElement, HtmlInputElement};
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::storage::{self, KeyValueStore, StorageError};

pub const DEFAULT_QUALITY: u8 = 7;
const CHART_ENTRIES: usize = 14;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SleepEntry {
    pub date: NaiveDate,
    pub bedtime: String,
    pub waketime: String,
    pub quality: u8,
    /// Hours.
    pub duration: f64,
}

#[derive(Error, Debug)]
pub enum SleepLogError {
    #[error("Please enter both bedtime and wake time.")]
    MissingTimes,

    #[error("'{0}' is not a valid time")]
    InvalidTime(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn parse_clock(value: &str) -> Result<NaiveTime, SleepLogError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| SleepLogError::InvalidTime(value.to_string()))
}

/// Hours slept. A wake time that is not after bedtime is on the next day.
pub fn sleep_duration_hours(bedtime: &str, waketime: &str) -> Result<f64, SleepLogError> {
    let bed = parse_clock(bedtime)?;
    let wake = parse_clock(waketime)?;
    let mut slept = wake - bed;
    if slept <= Duration::zero() {
        slept = slept + Duration::days(1);
    }
    Ok(slept.num_minutes() as f64 / 60.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SleepStats {
    pub avg_duration: f64,
    pub avg_quality: f64,
}

impl SleepStats {
    pub fn duration_label(&self) -> String {
        format!("{:.1}h", self.avg_duration)
    }

    pub fn quality_label(&self) -> String {
        format!("{:.1}", self.avg_quality)
    }
}

/// `None` for an empty log.
pub fn stats(log: &[SleepEntry]) -> Option<SleepStats> {
    if log.is_empty() {
        return None;
    }
    let n = log.len() as f64;
    Some(SleepStats {
        avg_duration: log.iter().map(|e| e.duration).sum::<f64>() / n,
        avg_quality: log.iter().map(|e| f64::from(e.quality)).sum::<f64>() / n,
    })
}

pub fn load(store: &dyn KeyValueStore) -> Vec<SleepEntry> {
    storage::load_json_or_default(store, config::SLEEP_LOG_KEY)
}

/// Appends one night to the stored log and returns the updated log.
pub fn log_sleep(
    store: &dyn KeyValueStore,
    date: NaiveDate,
    bedtime: &str,
    waketime: &str,
    quality: u8,
) -> Result<Vec<SleepEntry>, SleepLogError> {
    if bedtime.is_empty() || waketime.is_empty() {
        return Err(SleepLogError::MissingTimes);
    }
    let duration = sleep_duration_hours(bedtime, waketime)?;
    let mut log = load(store);
    log.push(SleepEntry {
        date,
        bedtime: bedtime.to_string(),
        waketime: waketime.to_string(),
        quality,
        duration,
    });
    storage::save_json(store, config::SLEEP_LOG_KEY, &log)?;
    Ok(log)
}

fn draw_chart(canvas: HtmlCanvasElement, log: &[SleepEntry]) -> Result<(), String> {
    let recent = &log[log.len().saturating_sub(CHART_ENTRIES)..];
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{:?}", e))?;

    let max_hours = recent.iter().map(|e| e.duration).fold(10.0_f64, f64::max).ceil();

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Hours Slept", ("sans-serif", 18))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..recent.len(), 0.0..max_hours)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(recent.len())
        .x_label_formatter(&|x| {
            recent
                .get(*x)
                .map(|e| e.date.format("%m/%d").to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("{:.0}h", y))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    chart
        .draw_series(recent.iter().enumerate().map(|(i, entry)| {
            let color = if entry.duration >= 7.0 { GREEN } else { RGBColor(69, 123, 157) };
            Rectangle::new([(i, 0.0), (i + 1, entry.duration)], color.filled())
        }))
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[function_component(SleepTracker)]
pub fn sleep_tracker() -> Html {
    let log = use_state(|| load(storage::open_store().as_ref()));
    let bedtime = use_state(String::new);
    let waketime = use_state(String::new);
    let quality = use_state(|| DEFAULT_QUALITY);
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |log: &Vec<SleepEntry>| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if !log.is_empty() {
                        if let Err(e) = draw_chart(canvas, log) {
                            warn!("sleep chart not drawn: {}", e);
                        }
                    }
                }
                || ()
            },
            (*log).clone(),
        );
    }

    let on_bedtime = {
        let bedtime = bedtime.clone();
        Callback::from(move |e: InputEvent| {
            bedtime.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_waketime = {
        let waketime = waketime.clone();
        Callback::from(move |e: InputEvent| {
            waketime.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_quality = {
        let quality = quality.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            quality.set(value.parse().unwrap_or(DEFAULT_QUALITY));
        })
    };

    let on_log = {
        let log = log.clone();
        let bedtime = bedtime.clone();
        let waketime = waketime.clone();
        let quality = quality.clone();
        Callback::from(move |_: MouseEvent| {
            let today = chrono::Local::now().date_naive();
            let store = storage::open_store();
            match log_sleep(store.as_ref(), today, &bedtime, &waketime, *quality) {
                Ok(updated) => {
                    info!("Logged sleep entry, {} in log", updated.len());
                    log.set(updated);
                    browser::alert("Sleep logged successfully!");
                }
                Err(e) => browser::alert(&e.to_string()),
            }
        })
    };

    let summary = stats(&log);

    html! {
        <div class="sleep-tracker">
            <div class="sleep-form">
                <label>
                    {"Bedtime"}
                    <input type="time" id="bedtime" value={(*bedtime).clone()} oninput={on_bedtime} />
                </label>
                <label>
                    {"Wake time"}
                    <input type="time" id="waketime" value={(*waketime).clone()} oninput={on_waketime} />
                </label>
                <label>
                    {"Sleep quality: "}<span id="qualityValue">{*quality}</span>
                    <input type="range" id="sleepQuality" min="1" max="10" value={quality.to_string()} oninput={on_quality} />
                </label>
                <button class="btn btn-primary" onclick={on_log}>{"Log Sleep"}</button>
            </div>
            <div class="sleep-stats">
                <div class="stat">
                    <span class="stat-label">{"Average duration"}</span>
                    <span id="avgSleepDuration" class="stat-value">
                        {summary.map(|s| s.duration_label()).unwrap_or_else(|| "--".to_string())}
                    </span>
                </div>
                <div class="stat">
                    <span class="stat-label">{"Average quality"}</span>
                    <span id="avgQuality" class="stat-value">
                        {summary.map(|s| s.quality_label()).unwrap_or_else(|| "--".to_string())}
                    </span>
                </div>
                <div class="stat">
                    <span class="stat-label">{"Nights logged"}</span>
                    <span class="stat-value">{log.len()}</span>
                </div>
            </div>
            { if log.is_empty() {
                html! { <p class="muted">{"Log a night to see your sleep chart."}</p> }
            } else {
                html! {}
            } }
            <canvas ref={canvas_ref} width="600" height="300" style="max-width: 100%;" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_overnight_duration_is_exact() {
        assert_eq!(sleep_duration_hours("22:00", "06:00").unwrap(), 8.0);
        assert_eq!(sleep_duration_hours("23:30", "07:00").unwrap(), 7.5);
    }

    #[test]
    fn test_after_midnight_bedtime_stays_on_same_day() {
        assert_eq!(sleep_duration_hours("01:00", "09:00").unwrap(), 8.0);
    }

    #[test]
    fn test_equal_times_count_as_a_full_day() {
        assert_eq!(sleep_duration_hours("07:00", "07:00").unwrap(), 24.0);
    }

    #[test]
    fn test_missing_time_is_rejected() {
        let store = MemoryStore::new();
        let err = log_sleep(&store, day(1), "", "07:00", 5).unwrap_err();
        assert!(matches!(err, SleepLogError::MissingTimes));
        assert!(load(&store).is_empty());
    }

    #[test]
    fn test_garbage_time_is_rejected() {
        assert!(matches!(
            sleep_duration_hours("late", "07:00"),
            Err(SleepLogError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_log_appends_and_persists() {
        let store = MemoryStore::new();
        log_sleep(&store, day(1), "22:00", "06:00", 8).unwrap();
        let log = log_sleep(&store, day(2), "23:00", "06:00", 6).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(load(&store), log);
        assert_eq!(log[1].duration, 7.0);
    }

    #[test]
    fn test_stats_average_all_entries() {
        let store = MemoryStore::new();
        log_sleep(&store, day(1), "22:00", "06:00", 8).unwrap();
        let log = log_sleep(&store, day(2), "23:00", "06:00", 5).unwrap();
        let summary = stats(&log).unwrap();
        assert_eq!(summary.duration_label(), "7.5h");
        assert_eq!(summary.quality_label(), "6.5");
    }

    #[test]
    fn test_no_stats_for_empty_log() {
        assert_eq!(stats(&[]), None);
    }

    #[test]
    fn test_entry_date_is_stored_as_plain_date() {
        let entry = SleepEntry {
            date: day(5),
            bedtime: "22:00".into(),
            waketime: "06:00".into(),
            quality: 7,
            duration: 8.0,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""date":"2024-03-05""#));
    }
}
