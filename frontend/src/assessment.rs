//! Self-assessment quizzes.
//!
//! Every quiz has four single-choice questions. The selected values are
//! summed and the total picks one result band from a fixed threshold table.
//! Nothing here is stored; answers live only until the page is left.

use std::collections::BTreeMap;

use log::info;
use thiserror::Error;
use yew::prelude::*;

use crate::browser;

pub const REQUIRED_ANSWERS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentKind {
    Wellness,
    Sleep,
    SubstanceUse,
}

pub struct Question {
    pub text: &'static str,
    pub options: &'static [(&'static str, u32)],
}

#[derive(Debug, PartialEq)]
pub struct Band {
    pub message: &'static str,
    pub recommendations: &'static [&'static str],
}

/// Question number (1-based) to the value of the selected option.
pub type Answers = BTreeMap<usize, u32>;

#[derive(Error, Debug, PartialEq)]
pub enum AssessmentError {
    #[error("Please answer all questions before getting your results.")]
    Incomplete { answered: usize, required: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentResult {
    pub total: u32,
    /// Position in the kind's band table, best first.
    pub band: usize,
    pub message: &'static str,
    pub recommendations: &'static [&'static str],
}

/// The result on screen, tagged with how many times the quiz has been
/// calculated. Recalculating identical answers still yields a new value, so
/// the result is scrolled to on every click.
#[derive(Clone, Debug, PartialEq)]
pub struct ShownResult {
    pub run: u32,
    pub result: AssessmentResult,
}

impl ShownResult {
    pub fn after(previous: Option<&ShownResult>, result: AssessmentResult) -> Self {
        ShownResult {
            run: previous.map(|p| p.run.wrapping_add(1)).unwrap_or(0),
            result,
        }
    }
}

const FREQUENCY: &[(&str, u32)] = &[
    ("Not at all", 0),
    ("Several days", 1),
    ("More than half the days", 2),
    ("Nearly every day", 3),
];

const WELLNESS_QUESTIONS: &[Question] = &[
    Question { text: "Over the past two weeks, how often have you felt overwhelmed by your workload?", options: FREQUENCY },
    Question { text: "How often have you had trouble relaxing or switching off?", options: FREQUENCY },
    Question { text: "How often have you felt down, low, or hopeless?", options: FREQUENCY },
    Question { text: "How often have you avoided friends or activities you usually enjoy?", options: FREQUENCY },
];

const WELLNESS_BANDS: &[Band] = &[
    Band {
        message: "Your responses suggest you're managing well overall. Continue with your current self-care practices.",
        recommendations: &[
            "Maintain regular exercise and sleep habits",
            "Continue social connections",
            "Consider our wellness workshops for additional support",
        ],
    },
    Band {
        message: "Your responses indicate some areas that could benefit from additional support and attention.",
        recommendations: &[
            "Consider scheduling a consultation with our wellness team",
            "Explore our stress management resources",
            "Join a support group or wellness program",
        ],
    },
    Band {
        message: "Your responses suggest you may benefit from professional support. Please consider reaching out to our counseling services.",
        recommendations: &[
            "Schedule an appointment with a counselor",
            "Contact our crisis line if you need immediate support",
            "Explore our mental health resources",
            "Consider joining a support group",
        ],
    },
];

const SLEEP_QUESTIONS: &[Question] = &[
    Question {
        text: "How many hours of sleep do you usually get on a school night?",
        options: &[("Less than 5", 1), ("5-6", 2), ("6-7", 3), ("7-8", 4), ("More than 8", 5)],
    },
    Question {
        text: "How long does it usually take you to fall asleep?",
        options: &[("Over an hour", 1), ("45-60 minutes", 2), ("30-45 minutes", 3), ("15-30 minutes", 4), ("Under 15 minutes", 5)],
    },
    Question {
        text: "How rested do you feel when you wake up?",
        options: &[("Exhausted", 1), ("Tired", 2), ("Okay", 3), ("Rested", 4), ("Fully refreshed", 5)],
    },
    Question {
        text: "How consistent is your bedtime during the week?",
        options: &[("No routine", 1), ("Varies by hours", 2), ("Varies by an hour", 3), ("Mostly consistent", 4), ("Same time every night", 5)],
    },
];

const SLEEP_BANDS: &[Band] = &[
    Band {
        message: "Excellent sleep habits! You're getting quality rest.",
        recommendations: &[
            "Continue your current sleep routine",
            "Share your success with others",
            "Consider helping others with sleep challenges",
        ],
    },
    Band {
        message: "Good sleep habits with room for improvement.",
        recommendations: &[
            "Focus on consistency in sleep schedule",
            "Review your sleep environment",
            "Try our sleep hygiene tips",
        ],
    },
    Band {
        message: "Your sleep could use some attention.",
        recommendations: &[
            "Establish a consistent bedtime routine",
            "Limit screen time before bed",
            "Consider a sleep consultation",
        ],
    },
    Band {
        message: "Your sleep patterns may be significantly impacting your well-being.",
        recommendations: &[
            "Schedule a sleep consultation immediately",
            "Review all sleep hygiene practices",
            "Consider keeping a sleep diary",
            "Discuss with healthcare provider",
        ],
    },
];

const USE_FREQUENCY: &[(&str, u32)] = &[
    ("Never", 0),
    ("Occasionally", 1),
    ("Often", 2),
    ("Almost always", 3),
];

const SUBSTANCE_QUESTIONS: &[Question] = &[
    Question { text: "How often do you drink or use substances to cope with stress?", options: USE_FREQUENCY },
    Question { text: "How often have you used more than you planned to?", options: USE_FREQUENCY },
    Question { text: "How often has your use affected classes, work, or relationships?", options: USE_FREQUENCY },
    Question { text: "How often have friends or family expressed concern about your use?", options: USE_FREQUENCY },
];

const SUBSTANCE_BANDS: &[Band] = &[
    Band {
        message: "Your responses suggest low risk. Continue making healthy choices.",
        recommendations: &[
            "Maintain current healthy habits",
            "Be aware of risk factors",
            "Support friends who may be struggling",
        ],
    },
    Band {
        message: "Your responses indicate some areas of concern that may benefit from attention.",
        recommendations: &[
            "Consider speaking with a counselor",
            "Explore our harm reduction resources",
            "Join a support group",
        ],
    },
    Band {
        message: "Your responses suggest you may benefit from professional support for substance use concerns.",
        recommendations: &[
            "Schedule a confidential consultation",
            "Contact our addiction recovery services",
            "Consider joining a recovery program",
            "Reach out to crisis support if needed",
        ],
    },
];

impl AssessmentKind {
    pub fn title(self) -> &'static str {
        match self {
            AssessmentKind::Wellness => "Wellness Self-Check",
            AssessmentKind::Sleep => "Sleep Quality Assessment",
            AssessmentKind::SubstanceUse => "Substance Use Self-Assessment",
        }
    }

    pub fn questions(self) -> &'static [Question] {
        match self {
            AssessmentKind::Wellness => WELLNESS_QUESTIONS,
            AssessmentKind::Sleep => SLEEP_QUESTIONS,
            AssessmentKind::SubstanceUse => SUBSTANCE_QUESTIONS,
        }
    }

    pub fn bands(self) -> &'static [Band] {
        match self {
            AssessmentKind::Wellness => WELLNESS_BANDS,
            AssessmentKind::Sleep => SLEEP_BANDS,
            AssessmentKind::SubstanceUse => SUBSTANCE_BANDS,
        }
    }

    /// Input name prefix; answers are named `<prefix>1` .. `<prefix>4`.
    pub fn input_prefix(self) -> &'static str {
        match self {
            AssessmentKind::Sleep => "sleep-q",
            AssessmentKind::Wellness | AssessmentKind::SubstanceUse => "q",
        }
    }

    pub fn result_id(self) -> &'static str {
        match self {
            AssessmentKind::Wellness => "assessmentResult",
            AssessmentKind::Sleep => "sleepAssessmentResult",
            AssessmentKind::SubstanceUse => "addictionAssessmentResult",
        }
    }

    /// The sleep quiz is scored "higher is better" and shows the raw total.
    pub fn shows_score(self) -> bool {
        self == AssessmentKind::Sleep
    }

    pub fn band_index(self, total: u32) -> usize {
        match self {
            AssessmentKind::Wellness | AssessmentKind::SubstanceUse => {
                if total <= 4 {
                    0
                } else if total <= 8 {
                    1
                } else {
                    2
                }
            }
            AssessmentKind::Sleep => {
                if total >= 16 {
                    0
                } else if total >= 12 {
                    1
                } else if total >= 8 {
                    2
                } else {
                    3
                }
            }
        }
    }
}

pub fn score(kind: AssessmentKind, answers: &Answers) -> Result<AssessmentResult, AssessmentError> {
    if answers.len() < REQUIRED_ANSWERS {
        return Err(AssessmentError::Incomplete {
            answered: answers.len(),
            required: REQUIRED_ANSWERS,
        });
    }
    let total: u32 = answers.values().sum();
    let band = kind.band_index(total);
    let entry = &kind.bands()[band];
    Ok(AssessmentResult {
        total,
        band,
        message: entry.message,
        recommendations: entry.recommendations,
    })
}

#[derive(Properties, PartialEq)]
pub struct AssessmentProps {
    pub kind: AssessmentKind,
}

#[function_component(Assessment)]
pub fn assessment(props: &AssessmentProps) -> Html {
    let kind = props.kind;
    let answers = use_state(Answers::new);
    let result = use_state(|| None::<ShownResult>);
    let result_ref = use_node_ref();

    {
        let result_ref = result_ref.clone();
        use_effect_with_deps(
            move |run: &Option<u32>| {
                if run.is_some() {
                    if let Some(element) = result_ref.cast::<web_sys::Element>() {
                        browser::scroll_into_view(&element);
                    }
                }
                || ()
            },
            (*result).as_ref().map(|shown| shown.run),
        );
    }

    let on_calculate = {
        let answers = answers.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| match score(kind, &answers) {
            Ok(scored) => {
                info!("{} scored {} (band {})", kind.title(), scored.total, scored.band);
                result.set(Some(ShownResult::after((*result).as_ref(), scored)));
            }
            Err(e) => browser::alert(&e.to_string()),
        })
    };

    let prefix = kind.input_prefix();

    html! {
        <div class="assessment">
            <h3>{kind.title()}</h3>
            { for kind.questions().iter().enumerate().map(|(i, question)| {
                let number = i + 1;
                let name = format!("{}{}", prefix, number);
                html! {
                    <fieldset class="assessment-question">
                        <legend>{format!("{}. {}", number, question.text)}</legend>
                        { for question.options.iter().map(|(label, value)| {
                            let value = *value;
                            let onchange = {
                                let answers = answers.clone();
                                Callback::from(move |_: Event| {
                                    let mut next = (*answers).clone();
                                    next.insert(number, value);
                                    answers.set(next);
                                })
                            };
                            html! {
                                <label class="assessment-option">
                                    <input
                                        type="radio"
                                        name={name.clone()}
                                        value={value.to_string()}
                                        checked={answers.get(&number) == Some(&value)}
                                        {onchange}
                                    />
                                    {*label}
                                </label>
                            }
                        }) }
                    </fieldset>
                }
            }) }
            <button class="btn btn-primary" onclick={on_calculate}>{"Get My Results"}</button>

            <div
                id={kind.result_id()}
                class="assessment-result"
                ref={result_ref}
                style={if result.is_some() { "display: block;" } else { "display: none;" }}
            >
                { if let Some(ShownResult { result: scored, .. }) = &*result {
                    html! {
                        <>
                            <h4>{"Your Results"}</h4>
                            { if kind.shows_score() {
                                html! { <p class="assessment-score">{"Score: "}<span id="sleepScore">{scored.total}</span></p> }
                            } else {
                                html! {}
                            } }
                            <p class="result-text">{scored.message}</p>
                            <ul class="result-recommendations">
                                { for scored.recommendations.iter().map(|r| html! { <li>{*r}</li> }) }
                            </ul>
                            <p class="assessment-disclaimer">
                                {"This self-check is not a diagnosis. If you are in crisis, contact campus counseling or emergency services."}
                            </p>
                        </>
                    }
                } else {
                    html! {}
                } }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[u32]) -> Answers {
        values.iter().enumerate().map(|(i, v)| (i + 1, *v)).collect()
    }

    #[test]
    fn test_incomplete_answers_produce_no_result() {
        for kind in [AssessmentKind::Wellness, AssessmentKind::Sleep, AssessmentKind::SubstanceUse] {
            let err = score(kind, &answers(&[1, 1, 1])).unwrap_err();
            assert_eq!(err, AssessmentError::Incomplete { answered: 3, required: 4 });
        }
    }

    #[test]
    fn test_wellness_band_thresholds() {
        let band = |v: &[u32]| score(AssessmentKind::Wellness, &answers(v)).unwrap().band;
        assert_eq!(band(&[0, 0, 0, 0]), 0);
        assert_eq!(band(&[1, 1, 1, 1]), 0);
        assert_eq!(band(&[2, 1, 1, 1]), 1);
        assert_eq!(band(&[2, 2, 2, 2]), 1);
        assert_eq!(band(&[3, 2, 2, 2]), 2);
        assert_eq!(band(&[3, 3, 3, 3]), 2);
    }

    #[test]
    fn test_sleep_is_scored_higher_is_better() {
        let band = |v: &[u32]| score(AssessmentKind::Sleep, &answers(v)).unwrap().band;
        assert_eq!(band(&[5, 5, 5, 5]), 0);
        assert_eq!(band(&[4, 4, 4, 4]), 0);
        assert_eq!(band(&[4, 4, 4, 3]), 1);
        assert_eq!(band(&[3, 3, 3, 3]), 1);
        assert_eq!(band(&[2, 2, 2, 2]), 2);
        assert_eq!(band(&[2, 2, 2, 1]), 3);
        assert_eq!(band(&[1, 1, 1, 1]), 3);
    }

    #[test]
    fn test_substance_bands_and_messages() {
        let low = score(AssessmentKind::SubstanceUse, &answers(&[0, 1, 1, 0])).unwrap();
        assert_eq!(low.total, 2);
        assert!(low.message.contains("low risk"));

        let high = score(AssessmentKind::SubstanceUse, &answers(&[3, 3, 2, 1])).unwrap();
        assert_eq!(high.band, 2);
        assert_eq!(high.recommendations.len(), 4);
    }

    #[test]
    fn test_recalculating_same_answers_is_a_new_showing() {
        let set = answers(&[1, 1, 1, 1]);
        let first = ShownResult::after(None, score(AssessmentKind::Wellness, &set).unwrap());
        let second = ShownResult::after(Some(&first), score(AssessmentKind::Wellness, &set).unwrap());
        assert_eq!(first.result, second.result);
        assert_ne!(first, second);
        assert_eq!(second.run, first.run + 1);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let set = answers(&[2, 0, 3, 1]);
        assert_eq!(
            score(AssessmentKind::Wellness, &set),
            score(AssessmentKind::Wellness, &set)
        );
    }

    #[test]
    fn test_every_reachable_total_lands_in_a_band() {
        for kind in [AssessmentKind::Wellness, AssessmentKind::Sleep, AssessmentKind::SubstanceUse] {
            let max: u32 = kind
                .questions()
                .iter()
                .map(|q| q.options.iter().map(|(_, v)| *v).max().unwrap())
                .sum();
            for total in 0..=max {
                assert!(kind.band_index(total) < kind.bands().len());
            }
        }
    }

    #[test]
    fn test_every_quiz_has_four_questions() {
        for kind in [AssessmentKind::Wellness, AssessmentKind::Sleep, AssessmentKind::SubstanceUse] {
            assert_eq!(kind.questions().len(), REQUIRED_ANSWERS);
        }
    }
}
