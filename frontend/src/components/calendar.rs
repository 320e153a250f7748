//! Month grid for the events page.

use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

pub const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTag {
    Wellness,
    Nutrition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoEvent {
    pub label: &'static str,
    pub tag: EventTag,
}

/// The same three sample events are shown in every month.
pub fn demo_event(day: u32) -> Option<DemoEvent> {
    match day {
        25 => Some(DemoEvent { label: "Mindfulness Workshop", tag: EventTag::Wellness }),
        28 => Some(DemoEvent { label: "Cooking Class", tag: EventTag::Nutrition }),
        30 => Some(DemoEvent { label: "Fitness Challenge", tag: EventTag::Wellness }),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CalendarCell {
    Header(&'static str),
    Blank,
    Day { day: u32, event: Option<DemoEvent> },
}

/// A calendar month. `month` is 0-based (January = 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    pub month: u32,
    pub year: i32,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        MonthView {
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    /// Weekday of the 1st, Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(following)) => (following - first).num_days() as u32,
            _ => 0,
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 0 {
            MonthView { month: 11, year: self.year - 1 }
        } else {
            MonthView { month: self.month - 1, year: self.year }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 11 {
            MonthView { month: 0, year: self.year + 1 }
        } else {
            MonthView { month: self.month + 1, year: self.year }
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize % 12], self.year)
    }

    /// Header row, leading blanks, then one cell per day.
    pub fn cells(&self) -> Vec<CalendarCell> {
        let first_weekday = self.first_weekday();
        let days = self.days_in_month();
        let mut cells = Vec::with_capacity(7 + (first_weekday + days) as usize);
        cells.extend(DAY_HEADERS.iter().map(|h| CalendarCell::Header(*h)));
        cells.extend((0..first_weekday).map(|_| CalendarCell::Blank));
        cells.extend((1..=days).map(|day| CalendarCell::Day { day, event: demo_event(day) }));
        cells
    }
}

fn render_cell(cell: &CalendarCell) -> Html {
    match cell {
        CalendarCell::Header(label) => html! {
            <div class="calendar-day-header">{*label}</div>
        },
        CalendarCell::Blank => html! {
            <div class="calendar-day empty"></div>
        },
        CalendarCell::Day { day, event } => {
            let tag_class = event.map(|e| match e.tag {
                EventTag::Wellness => "has-event event-wellness",
                EventTag::Nutrition => "has-event event-nutrition",
            });
            html! {
                <div class={classes!("calendar-day", tag_class)}>
                    <strong>{*day}</strong>
                    { if let Some(event) = event {
                        html! { <div class="calendar-event">{event.label}</div> }
                    } else {
                        html! {}
                    } }
                </div>
            }
        }
    }
}

#[function_component(EventCalendar)]
pub fn event_calendar() -> Html {
    let view = use_state(|| MonthView::containing(chrono::Local::now().date_naive()));

    let on_prev = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(view.previous()))
    };
    let on_next = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(view.next()))
    };

    html! {
        <div class="event-calendar">
            <div class="calendar-header">
                <button id="prevMonth" class="slider-btn" onclick={on_prev}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <h3 id="currentMonth">{view.title()}</h3>
                <button id="nextMonth" class="slider-btn" onclick={on_next}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <div id="calendarGrid" class="calendar-grid">
                { for view.cells().iter().map(render_cell) }
            </div>
            <style>
                {r#"
                .calendar-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .calendar-grid {
                    display: grid;
                    grid-template-columns: repeat(7, 1fr);
                    gap: 1px;
                    background: var(--border);
                    border-radius: 8px;
                    overflow: hidden;
                }
                .calendar-day-header {
                    font-weight: bold;
                    text-align: center;
                    padding: 10px;
                    background: var(--surface);
                }
                .calendar-day {
                    padding: 10px;
                    min-height: 60px;
                    background: var(--bg);
                    cursor: pointer;
                    transition: background-color 0.3s ease;
                }
                .calendar-day.empty { cursor: default; }
                .calendar-day:not(.empty):hover { background: rgba(168, 218, 220, 0.3); }
                .calendar-day.event-wellness { background: rgba(168, 218, 220, 0.2); }
                .calendar-day.event-nutrition { background: rgba(39, 174, 96, 0.2); }
                .calendar-event { font-size: 10px; margin-top: 5px; color: #457B9D; }
                .event-nutrition .calendar-event { color: #27AE60; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(cells: &[CalendarCell]) -> (usize, usize, usize) {
        let headers = cells.iter().filter(|c| matches!(c, CalendarCell::Header(_))).count();
        let blanks = cells.iter().filter(|c| matches!(c, CalendarCell::Blank)).count();
        let days = cells.iter().filter(|c| matches!(c, CalendarCell::Day { .. })).count();
        (headers, blanks, days)
    }

    #[test]
    fn test_wednesday_start_has_three_blanks() {
        // May 2024 starts on a Wednesday.
        let may = MonthView { month: 4, year: 2024 };
        assert_eq!(may.first_weekday(), 3);
        let cells = may.cells();
        assert_eq!(count(&cells), (7, 3, 31));
        assert!(matches!(&cells[7..10], [CalendarCell::Blank, CalendarCell::Blank, CalendarCell::Blank]));
        assert_eq!(cells[10], CalendarCell::Day { day: 1, event: None });
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(MonthView { month: 1, year: 2024 }.days_in_month(), 29);
        assert_eq!(MonthView { month: 1, year: 2023 }.days_in_month(), 28);
        assert_eq!(MonthView { month: 1, year: 1900 }.days_in_month(), 28);
        assert_eq!(MonthView { month: 11, year: 2023 }.days_in_month(), 31);
        assert_eq!(MonthView { month: 3, year: 2023 }.days_in_month(), 30);
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let january = MonthView { month: 0, year: 2024 };
        assert_eq!(january.previous(), MonthView { month: 11, year: 2023 });
        let december = MonthView { month: 11, year: 2024 };
        assert_eq!(december.next(), MonthView { month: 0, year: 2025 });
        assert_eq!(january.next().previous(), january);
    }

    #[test]
    fn test_demo_events_only_on_their_days() {
        let cells = MonthView { month: 0, year: 2025 }.cells();
        let events: Vec<(u32, &str)> = cells
            .iter()
            .filter_map(|c| match c {
                CalendarCell::Day { day, event: Some(e) } => Some((*day, e.label)),
                _ => None,
            })
            .collect();
        assert_eq!(
            events,
            vec![(25, "Mindfulness Workshop"), (28, "Cooking Class"), (30, "Fitness Challenge")]
        );
    }

    #[test]
    fn test_short_month_has_no_day_thirty() {
        let cells = MonthView { month: 1, year: 2023 }.cells();
        assert!(!cells.iter().any(|c| matches!(c, CalendarCell::Day { day: 30, .. })));
    }

    #[test]
    fn test_title_names_month_and_year() {
        assert_eq!(MonthView { month: 8, year: 2025 }.title(), "September 2025");
    }

    #[test]
    fn test_sunday_start_has_no_blanks() {
        // September 2024 starts on a Sunday.
        let (_, blanks, days) = count(&MonthView { month: 8, year: 2024 }.cells());
        assert_eq!(blanks, 0);
        assert_eq!(days, 30);
    }
}
