use yew::prelude::*;

use crate::assessment::{Assessment, AssessmentKind};
use crate::trackers::routine::RoutineBuilder;
use crate::trackers::sleep::SleepTracker;

const SLEEP_TIPS: &[(&str, &str)] = &[
    ("fas fa-clock", "Keep a consistent wake time, even on weekends."),
    ("fas fa-mobile-alt", "Put screens away 30 minutes before bed."),
    ("fas fa-coffee", "Skip caffeine within eight hours of bedtime."),
    ("fas fa-bed", "Keep your room cool, dark and quiet."),
];

#[function_component(Sleep)]
pub fn sleep() -> Html {
    html! {
        <div class="sleep-page">
            <section class="page-hero">
                <h1>{"Sleep"}</h1>
                <p>{"Most students need 7 to 9 hours. Track what you actually get and build a routine that helps."}</p>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Sleep Log"}</h2>
                    <SleepTracker />
                </div>
            </section>

            <section class="section sleep-assessment">
                <div class="container">
                    <Assessment kind={AssessmentKind::Sleep} />
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Bedtime Routine Builder"}</h2>
                    <RoutineBuilder />
                </div>
            </section>

            <section class="section sleep-tips">
                <div class="container">
                    <h2>{"Sleep Hygiene"}</h2>
                    <div class="card-grid">
                        { for SLEEP_TIPS.iter().map(|(icon, tip)| html! {
                            <div class="card">
                                <i class={*icon}></i>
                                <p>{*tip}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .sleep-assessment, .sleep-tips { background: var(--surface); }
                .sleep-tips .card { background: var(--bg); }
                .sleep-tips i { font-size: 1.5rem; color: var(--accent); }
                "#}
            </style>
        </div>
    }
}
