use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::components::filter::{category_visible, CategoryFilterBar, ALL};

pub struct FaqEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

const FAQ_CATEGORIES: &[(&str, &str)] = &[
    (ALL, "All"),
    ("general", "General"),
    ("counseling", "Counseling"),
    ("fitness", "Fitness"),
    ("privacy", "Privacy"),
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        category: "general",
        question: "Who can use the wellness center?",
        answer: "Every enrolled student, full or part time. Most services are covered by the student health fee.",
    },
    FaqEntry {
        category: "general",
        question: "Where is the wellness center?",
        answer: "On the ground floor of the Health Services building, next to the pharmacy.",
    },
    FaqEntry {
        category: "counseling",
        question: "How do I book a counseling appointment?",
        answer: "Use the online scheduler or call the front desk. Walk-in hours are weekdays from 1 to 4 PM.",
    },
    FaqEntry {
        category: "counseling",
        question: "Is there a limit on counseling sessions?",
        answer: "Short-term counseling includes up to 12 sessions per year. Referrals are available for longer care.",
    },
    FaqEntry {
        category: "fitness",
        question: "Do I need a membership for the recreation center?",
        answer: "No. Your student ID gets you in. Group classes need a free online sign-up.",
    },
    FaqEntry {
        category: "fitness",
        question: "Are there beginner workouts?",
        answer: "Yes. The workout library and the Intro to Free Weights sessions are aimed at beginners.",
    },
    FaqEntry {
        category: "privacy",
        question: "Are the self-assessments stored anywhere?",
        answer: "No. Scores are computed in your browser and are never sent or saved.",
    },
    FaqEntry {
        category: "privacy",
        question: "Is counseling confidential?",
        answer: "Yes. Nothing is shared with faculty or family without your written consent, except where the law requires it.",
    },
];

/// Case-insensitive substring match on the question or the answer.
pub fn matches_search(entry: &FaqEntry, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || entry.question.to_lowercase().contains(&term)
        || entry.answer.to_lowercase().contains(&term)
}

/// Search and category narrow the list together.
pub fn is_shown(entry: &FaqEntry, category: &str, term: &str) -> bool {
    category_visible(category, entry.category) && matches_search(entry, term)
}

/// Opening one item closes the others; clicking the open item closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);
    let category = use_state(|| ALL);
    let search = use_state(String::new);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };
    let on_category = {
        let category = category.clone();
        Callback::from(move |selected: &'static str| category.set(selected))
    };

    let shown: Vec<(usize, &FaqEntry)> = FAQS
        .iter()
        .enumerate()
        .filter(|(_, entry)| is_shown(entry, *category, &search))
        .collect();

    html! {
        <div class="faq-page">
            <section class="page-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Quick answers about services, appointments and privacy."}</p>
            </section>

            <section class="section">
                <div class="container faq-container">
                    <input
                        id="faqSearch"
                        class="faq-search"
                        type="search"
                        placeholder="Search questions..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <CategoryFilterBar categories={FAQ_CATEGORIES} selected={*category} on_select={on_category} />

                    { if shown.is_empty() {
                        html! { <p class="faq-empty">{"No questions match your search."}</p> }
                    } else {
                        html! {
                            <>
                            { for shown.iter().map(|(index, entry)| {
                                let index = *index;
                                let on_toggle = {
                                    let open = open.clone();
                                    Callback::from(move |_: ()| open.set(toggle_open(*open, index)))
                                };
                                html! {
                                    <FaqItem question={entry.question} open={*open == Some(index)} {on_toggle}>
                                        <p>{entry.answer}</p>
                                    </FaqItem>
                                }
                            }) }
                            </>
                        }
                    } }
                </div>
            </section>

            <style>
                {r#"
                .faq-container { max-width: 800px; }
                .faq-search {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    background: var(--bg);
                    color: var(--text);
                    font-size: 1rem;
                }
                .faq-item {
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.25rem;
                    background: var(--surface);
                    border: none;
                    color: var(--text);
                    font-size: 1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon { font-size: 1.4rem; color: var(--accent); }
                .faq-answer { display: none; padding: 0 1.25rem; }
                .faq-item.active .faq-answer { display: block; }
                .faq-empty { color: var(--muted); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive_over_question_and_answer() {
        let entry = &FAQS[2];
        assert!(matches_search(entry, "BOOK"));
        assert!(matches_search(entry, "walk-in"));
        assert!(!matches_search(entry, "pharmacy"));
        assert!(matches_search(entry, "  "));
    }

    #[test]
    fn test_category_and_search_combine() {
        let shown: Vec<_> = FAQS
            .iter()
            .filter(|e| is_shown(e, "privacy", "stored"))
            .map(|e| e.question)
            .collect();
        assert_eq!(shown, vec!["Are the self-assessments stored anywhere?"]);

        let all = FAQS.iter().filter(|e| is_shown(e, ALL, "")).count();
        assert_eq!(all, FAQS.len());
    }

    #[test]
    fn test_only_one_item_open() {
        let open = toggle_open(None, 1);
        assert_eq!(open, Some(1));
        let open = toggle_open(open, 3);
        assert_eq!(open, Some(3));
        assert_eq!(toggle_open(open, 3), None);
    }

    #[test]
    fn test_every_category_button_has_entries() {
        for (category, _) in FAQ_CATEGORIES.iter().skip(1) {
            assert!(FAQS.iter().any(|e| e.category == *category), "{}", category);
        }
    }
}
