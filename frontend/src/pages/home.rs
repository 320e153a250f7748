use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::TestimonialCarousel;
use crate::Route;

struct QuickLink {
    route: Route,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        route: Route::Fitness,
        icon: "fas fa-dumbbell",
        title: "Fitness",
        blurb: "Daily activity goals, workouts for every level and rec center hours.",
    },
    QuickLink {
        route: Route::Nutrition,
        icon: "fas fa-apple-alt",
        title: "Nutrition",
        blurb: "Meal ideas on a student budget and a weekly planner.",
    },
    QuickLink {
        route: Route::MentalHealth,
        icon: "fas fa-brain",
        title: "Mental Health",
        blurb: "Check in with yourself, meditate, and find counseling support.",
    },
    QuickLink {
        route: Route::Sleep,
        icon: "fas fa-moon",
        title: "Sleep",
        blurb: "Log your sleep, see your averages and build a bedtime routine.",
    },
    QuickLink {
        route: Route::Addiction,
        icon: "fas fa-hands-helping",
        title: "Recovery",
        blurb: "Confidential screening, recovery community and a sobriety tracker.",
    },
    QuickLink {
        route: Route::Events,
        icon: "fas fa-calendar-alt",
        title: "Events",
        blurb: "Workshops, classes and challenges happening on campus.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="page-hero home-hero">
                <h1>{"Your Wellbeing Matters"}</h1>
                <p>{"Resources, tools and community for body and mind, built for student life."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::MentalHealth} classes="btn btn-primary">
                        {"Take a Wellness Check"}
                    </Link<Route>>
                    <Link<Route> to={Route::Events} classes="btn btn-secondary">
                        {"Browse Events"}
                    </Link<Route>>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Explore"}</h2>
                    <div class="card-grid">
                        { for QUICK_LINKS.iter().map(|link| html! {
                            <Link<Route> to={link.route.clone()} classes="card link-card">
                                <i class={classes!(link.icon, "link-icon")}></i>
                                <h3>{link.title}</h3>
                                <p>{link.blurb}</p>
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section testimonials-section">
                <div class="container">
                    <h2>{"What Students Say"}</h2>
                    <TestimonialCarousel />
                </div>
            </section>

            <section class="section crisis-banner">
                <div class="container">
                    <h3>{"Need to talk to someone right now?"}</h3>
                    <p>
                        {"Call or text "}<strong>{"988"}</strong>
                        {" any time, or visit Counseling Services during walk-in hours."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Contact Us"}</Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .hero-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; flex-wrap: wrap; }
                .link-card { color: var(--text); text-decoration: none; transition: transform 0.2s ease; }
                .link-card:hover { transform: translateY(-4px); }
                .link-icon { font-size: 1.8rem; color: var(--accent); }
                .testimonials-section { background: var(--surface); }
                .crisis-banner { text-align: center; }
                "#}
            </style>
        </div>
    }
}
