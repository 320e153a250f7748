use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The sleep workshop completely changed my semester. I finally stopped pulling all-nighters.",
        name: "Maya R.",
        role: "Junior, Biology",
    },
    Testimonial {
        quote: "Counseling services helped me find my footing during a really difficult first year.",
        name: "Jordan T.",
        role: "Sophomore, Engineering",
    },
    Testimonial {
        quote: "The cooking classes taught me how to eat well on a student budget. Highly recommend!",
        name: "Priya S.",
        role: "Senior, Economics",
    },
    Testimonial {
        quote: "Joining the recovery community gave me people who understand. I'm 200 days strong.",
        name: "Alex M.",
        role: "Graduate Student",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel() -> Html {
    let current = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    {
        let current = current.clone();
        use_interval(
            move || current.set(next_index(*current, len)),
            config::CAROUSEL_INTERVAL_MS,
        );
    }

    let on_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(previous_index(*current, len)))
    };
    let on_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, len)))
    };

    if len == 0 {
        return html! {};
    }

    html! {
        <div class="testimonials">
            <div id="testimonialsSlider" class="testimonials-slider">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                    <div class={classes!("testimonial-slide", (i == *current).then(|| "active"))}>
                        <blockquote>{t.quote}</blockquote>
                        <p class="testimonial-author">
                            <strong>{t.name}</strong>{" · "}{t.role}
                        </p>
                    </div>
                }) }
            </div>
            <div class="slider-controls">
                <button id="prevSlide" class="slider-btn" onclick={on_prev}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <button id="nextSlide" class="slider-btn" onclick={on_next}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <style>
                {r#"
                .testimonial-slide { display: none; text-align: center; padding: 1rem 2rem; }
                .testimonial-slide.active { display: block; }
                .testimonial-slide blockquote { font-size: 1.2rem; font-style: italic; margin: 0 0 1rem; }
                .testimonial-author { color: var(--muted); }
                .slider-controls { display: flex; justify-content: center; gap: 1rem; }
                .slider-btn {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 50%;
                    width: 40px;
                    height: 40px;
                    cursor: pointer;
                    color: var(--text);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        assert_eq!(previous_index(0, 4), 3);
        assert_eq!(previous_index(2, 4), 1);
    }

    #[test]
    fn test_full_rotation_returns_home() {
        let mut i = 0;
        for _ in 0..TESTIMONIALS.len() {
            i = next_index(i, TESTIMONIALS.len());
        }
        assert_eq!(i, 0);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(0, 0), 0);
    }
}
