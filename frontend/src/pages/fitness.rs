use yew::prelude::*;

use crate::components::filter::{category_visible, CategoryFilterBar, ALL};
use crate::trackers::fitness::FitnessTracker;

const WORKOUT_CATEGORIES: &[(&str, &str)] = &[
    (ALL, "All"),
    ("cardio", "Cardio"),
    ("strength", "Strength"),
    ("flexibility", "Flexibility"),
    ("hiit", "HIIT"),
];

struct Workout {
    category: &'static str,
    title: &'static str,
    duration: &'static str,
    description: &'static str,
}

const WORKOUTS: &[Workout] = &[
    Workout {
        category: "cardio",
        title: "Campus Loop Run",
        duration: "25 min",
        description: "An easy-paced 3 km loop around the quad and library.",
    },
    Workout {
        category: "cardio",
        title: "Stair Climber Intervals",
        duration: "20 min",
        description: "Alternate one minute fast and one minute easy on the stadium steps.",
    },
    Workout {
        category: "strength",
        title: "Dorm Room Bodyweight",
        duration: "30 min",
        description: "Squats, push-ups, lunges and planks. No equipment needed.",
    },
    Workout {
        category: "strength",
        title: "Intro to Free Weights",
        duration: "45 min",
        description: "A guided rec center session on form and safe progression.",
    },
    Workout {
        category: "flexibility",
        title: "Study Break Stretch",
        duration: "10 min",
        description: "Neck, shoulder and hip openers for long library sessions.",
    },
    Workout {
        category: "flexibility",
        title: "Sunset Yoga Flow",
        duration: "40 min",
        description: "A slow vinyasa to wind down the day.",
    },
    Workout {
        category: "hiit",
        title: "Tabata Express",
        duration: "16 min",
        description: "Four rounds of 20 seconds on, 10 seconds off.",
    },
];

#[function_component(Fitness)]
pub fn fitness() -> Html {
    let category = use_state(|| ALL);

    let on_select = {
        let category = category.clone();
        Callback::from(move |selected: &'static str| category.set(selected))
    };

    html! {
        <div class="fitness-page">
            <section class="page-hero">
                <h1>{"Fitness & Movement"}</h1>
                <p>{"Small, steady habits beat heroic bursts. Track today's goals and find a workout that fits your schedule."}</p>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Today's Activity Goals"}</h2>
                    <FitnessTracker />
                </div>
            </section>

            <section class="section workouts">
                <div class="container">
                    <h2>{"Workout Library"}</h2>
                    <CategoryFilterBar categories={WORKOUT_CATEGORIES} selected={*category} {on_select} />
                    <div class="card-grid">
                        { for WORKOUTS.iter()
                            .filter(|w| category_visible(*category, w.category))
                            .map(|w| html! {
                                <div class="card workout-card" data-category={w.category}>
                                    <span class="workout-duration">{w.duration}</span>
                                    <h3>{w.title}</h3>
                                    <p>{w.description}</p>
                                </div>
                            }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Recreation Center Hours"}</h2>
                    <table class="hours-table">
                        <tr><td>{"Monday to Friday"}</td><td>{"6:00 AM – 11:00 PM"}</td></tr>
                        <tr><td>{"Saturday"}</td><td>{"8:00 AM – 9:00 PM"}</td></tr>
                        <tr><td>{"Sunday"}</td><td>{"10:00 AM – 8:00 PM"}</td></tr>
                    </table>
                </div>
            </section>

            <style>
                {r#"
                .workouts { background: var(--surface); }
                .workout-card { background: var(--bg); }
                .workout-duration {
                    font-size: 0.8rem;
                    color: var(--accent);
                    font-weight: 600;
                    text-transform: uppercase;
                }
                .hours-table td { padding: 0.5rem 1.5rem 0.5rem 0; }
                "#}
            </style>
        </div>
    }
}
