use yew::prelude::*;

use crate::assessment::{Assessment, AssessmentKind};
use crate::browser;
use crate::components::tabs::TabBar;
use crate::trackers::meditation::MeditationTimerWidget;

const COPING_TABS: &[(&str, &str)] = &[
    ("stress", "Stress"),
    ("anxiety", "Anxiety"),
    ("mood", "Low Mood"),
];

fn coping_strategies(tab: &str) -> &'static [&'static str] {
    match tab {
        "stress" => &[
            "Break big assignments into 25-minute focused blocks.",
            "Write tomorrow's top three tasks before bed.",
            "Take a ten-minute walk outside between study sessions.",
        ],
        "anxiety" => &[
            "Try box breathing: in for 4, hold for 4, out for 4, hold for 4.",
            "Name five things you can see and four you can hear.",
            "Limit caffeine after noon.",
        ],
        "mood" => &[
            "Reach out to one friend today, even with a short message.",
            "Get some daylight within an hour of waking.",
            "Keep a small routine going: meals, a shower, a walk.",
        ],
        _ => &[],
    }
}

struct GuidedExercise {
    title: &'static str,
    description: &'static str,
    notice: &'static str,
}

const EXERCISES: &[GuidedExercise] = &[
    GuidedExercise {
        title: "Breathing Exercise",
        description: "Five minutes of paced breathing.",
        notice: "Guided breathing exercise would start here. Follow the on-screen instructions.",
    },
    GuidedExercise {
        title: "Progressive Muscle Relaxation",
        description: "Tense and release each muscle group in turn.",
        notice: "Progressive muscle relaxation guide would start here.",
    },
    GuidedExercise {
        title: "Body Scan",
        description: "Move your attention slowly from head to toe.",
        notice: "Body scan meditation would begin here.",
    },
];

const SCHEDULER_NOTICE: &str = "Online appointment scheduler would open here in a real application.";

#[function_component(MentalHealth)]
pub fn mental_health() -> Html {
    let tab = use_state(|| COPING_TABS[0].0);
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected: &'static str| tab.set(selected))
    };

    html! {
        <div class="mental-page">
            <section class="page-hero">
                <h1>{"Mental Health"}</h1>
                <p>{"Check in with yourself, learn a few coping tools, and know where to find support."}</p>
            </section>

            <section class="section">
                <div class="container">
                    <Assessment kind={AssessmentKind::Wellness} />
                </div>
            </section>

            <section class="section meditation-section">
                <div class="container">
                    <h2>{"Five-Minute Meditation"}</h2>
                    <MeditationTimerWidget />
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Coping Strategies"}</h2>
                    <TabBar tabs={COPING_TABS} active={*tab} on_select={on_tab} />
                    <ul class="strategy-tab active" data-tab-content={*tab}>
                        { for coping_strategies(*tab).iter().map(|tip| html! { <li>{*tip}</li> }) }
                    </ul>
                </div>
            </section>

            <section class="section exercises">
                <div class="container">
                    <h2>{"Guided Exercises"}</h2>
                    <div class="card-grid">
                        { for EXERCISES.iter().map(|exercise| {
                            let notice = exercise.notice;
                            let onclick = Callback::from(move |_: MouseEvent| browser::alert(notice));
                            html! {
                                <div class="card">
                                    <h3>{exercise.title}</h3>
                                    <p>{exercise.description}</p>
                                    <button class="btn btn-secondary" {onclick}>{"Start"}</button>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container counseling">
                    <h2>{"Counseling Services"}</h2>
                    <p>{"Free, confidential sessions for all enrolled students. Walk-in hours are weekdays from 1 to 4 PM."}</p>
                    <button class="btn btn-primary" onclick={Callback::from(|_: MouseEvent| browser::alert(SCHEDULER_NOTICE))}>
                        {"Schedule an Appointment"}
                    </button>
                </div>
            </section>

            <style>
                {r#"
                .meditation-section, .exercises { background: var(--surface); }
                .exercises .card { background: var(--bg); }
                .strategy-tab { line-height: 1.8; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_coping_tab_has_content() {
        for (id, _) in COPING_TABS {
            assert!(!coping_strategies(id).is_empty(), "{}", id);
        }
    }
}
