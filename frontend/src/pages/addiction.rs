use yew::prelude::*;

use crate::assessment::{Assessment, AssessmentKind};
use crate::trackers::sobriety::SobrietyTracker;

const SUPPORT_GROUPS: &[(&str, &str, &str)] = &[
    ("Collegiate Recovery Community", "Tuesdays, 6 PM", "Student Union, Room 204"),
    ("SMART Recovery", "Thursdays, 7 PM", "Health Center, Lower Level"),
    ("Mindful Drinking Circle", "Mondays, 5 PM", "Wellness Center Lounge"),
];

#[function_component(Addiction)]
pub fn addiction() -> Html {
    html! {
        <div class="addiction-page">
            <section class="page-hero">
                <h1>{"Recovery & Substance Use"}</h1>
                <p>{"Confidential, judgment-free support wherever you are in your journey."}</p>
            </section>

            <section class="section">
                <div class="container">
                    <Assessment kind={AssessmentKind::SubstanceUse} />
                    <p class="assessment-note">
                        {"This screening is anonymous and nothing you enter leaves your browser."}
                    </p>
                </div>
            </section>

            <section class="section sobriety-section">
                <div class="container">
                    <h2>{"Sobriety Tracker"}</h2>
                    <SobrietyTracker />
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2>{"Support Groups"}</h2>
                    <div class="card-grid">
                        { for SUPPORT_GROUPS.iter().map(|(name, when, place)| html! {
                            <div class="card">
                                <h3>{*name}</h3>
                                <p><i class="fas fa-clock"></i>{" "}{*when}</p>
                                <p><i class="fas fa-map-marker-alt"></i>{" "}{*place}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .sobriety-section { background: var(--surface); }
                .assessment-note { color: var(--muted); font-size: 0.9rem; }
                "#}
            </style>
        </div>
    }
}
