use std::collections::BTreeMap;

use yew::prelude::*;

use crate::browser;
use crate::components::tabs::TabBar;

const SUGGESTION_TABS: &[(&str, &str)] = &[
    ("breakfast", "Breakfast"),
    ("lunch", "Lunch"),
    ("dinner", "Dinner"),
    ("snacks", "Snacks"),
];

fn suggestions(tab: &str) -> &'static [(&'static str, &'static str)] {
    match tab {
        "breakfast" => &[
            ("Overnight Oats", "Oats, milk, chia seeds and berries. Prep it the night before."),
            ("Veggie Egg Scramble", "Two eggs, spinach and peppers in under ten minutes."),
            ("Peanut Butter Banana Toast", "Whole grain toast for steady energy through morning lectures."),
        ],
        "lunch" => &[
            ("Chickpea Salad Wrap", "Mashed chickpeas, yogurt, celery and lemon in a tortilla."),
            ("Dining Hall Power Bowl", "Grains, a protein and as many colors as you can fit."),
            ("Lentil Soup", "Cheap, filling and freezes well."),
        ],
        "dinner" => &[
            ("One-Pan Chicken & Veggies", "Roast everything on one tray at 200°C for 25 minutes."),
            ("Black Bean Tacos", "Beans, salsa, cabbage slaw and lime."),
            ("Veggie Stir-Fry", "Frozen vegetables, tofu or egg, soy sauce and rice."),
        ],
        "snacks" => &[
            ("Hummus & Carrots", "Fiber and protein for the mid-afternoon slump."),
            ("Greek Yogurt & Honey", "Pairs well with a handful of nuts."),
            ("Trail Mix", "Make your own in bulk and portion it out."),
        ],
        _ => &[],
    }
}

const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MEALS: [&str; 3] = ["Breakfast", "Lunch", "Dinner"];

fn slot_key(day: &str, meal: &str) -> String {
    format!("{}-{}", day, meal)
}

/// A prompt answer becomes the slot's meal unless it is blank.
pub fn planned_meal(answer: Option<String>) -> Option<String> {
    answer
        .map(|meal| meal.trim().to_string())
        .filter(|meal| !meal.is_empty())
}

#[function_component(Nutrition)]
pub fn nutrition() -> Html {
    let tab = use_state(|| SUGGESTION_TABS[0].0);
    let plan = use_state(BTreeMap::<String, String>::new);

    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |selected: &'static str| tab.set(selected))
    };

    let render_slot = |day: &'static str, meal: &'static str| -> Html {
        let key = slot_key(day, meal);
        let content = plan.get(&key).cloned();
        let onclick = {
            let plan = plan.clone();
            Callback::from(move |_: MouseEvent| {
                let answer = browser::prompt(&format!("Add a meal for {}:", meal));
                if let Some(chosen) = planned_meal(answer) {
                    let mut next = (*plan).clone();
                    next.insert(key.clone(), chosen);
                    plan.set(next);
                }
            })
        };
        html! {
            <div class={classes!("meal-slot", content.is_some().then(|| "filled"))} data-meal={meal} {onclick}>
                <span class="meal-content">
                    {content.unwrap_or_else(|| "+ Add".to_string())}
                </span>
            </div>
        }
    };

    html! {
        <div class="nutrition-page">
            <section class="page-hero">
                <h1>{"Nutrition"}</h1>
                <p>{"Eating well on a student schedule and budget is possible. Start with one meal at a time."}</p>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Meal Ideas"}</h2>
                    <TabBar tabs={SUGGESTION_TABS} active={*tab} on_select={on_tab} />
                    <div class="card-grid" data-tab-content={*tab}>
                        { for suggestions(*tab).iter().map(|(name, description)| html! {
                            <div class="card">
                                <h3>{*name}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section planner">
                <div class="container">
                    <h2>{"Weekly Meal Planner"}</h2>
                    <p class="planner-hint">{"Click a slot to add a meal."}</p>
                    <div class="planner-grid">
                        <div class="planner-corner"></div>
                        { for WEEK_DAYS.iter().map(|day| html! { <div class="planner-day">{*day}</div> }) }
                        { for MEALS.iter().map(|meal| html! {
                            <>
                                <div class="planner-meal">{*meal}</div>
                                { for WEEK_DAYS.iter().map(|day| render_slot(*day, *meal)) }
                            </>
                        }) }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .planner { background: var(--surface); }
                .planner-hint { color: var(--muted); }
                .planner-grid {
                    display: grid;
                    grid-template-columns: 100px repeat(7, 1fr);
                    gap: 6px;
                    overflow-x: auto;
                }
                .planner-day, .planner-meal { font-weight: 600; padding: 0.5rem; }
                .meal-slot {
                    min-height: 60px;
                    padding: 0.5rem;
                    border: 1px dashed var(--border);
                    border-radius: 6px;
                    background: var(--bg);
                    cursor: pointer;
                    font-size: 0.85rem;
                }
                .meal-slot .meal-content { color: var(--muted); }
                .meal-slot.filled { border-style: solid; border-color: var(--accent); }
                .meal-slot.filled .meal-content { color: var(--text); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_suggestions() {
        for (id, _) in SUGGESTION_TABS {
            assert!(!suggestions(id).is_empty(), "{}", id);
        }
    }

    #[test]
    fn test_blank_or_cancelled_prompt_leaves_slot_empty() {
        assert_eq!(planned_meal(None), None);
        assert_eq!(planned_meal(Some("   ".into())), None);
        assert_eq!(planned_meal(Some(" Pasta ".into())), Some("Pasta".to_string()));
    }
}
