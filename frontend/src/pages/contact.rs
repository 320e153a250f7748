use yew::prelude::*;

use crate::browser;
use crate::components::notification::SuccessMessage;
use crate::forms::catalog::FormKind;
use crate::forms::form::SimulatedForm;

const MAP_NOTICE: &str = "Campus map with directions would open here in a real application.";

#[function_component(Contact)]
pub fn contact() -> Html {
    let success = use_state(|| None::<AttrValue>);

    let on_sent = {
        let success = success.clone();
        Callback::from(move |message: &'static str| {
            success.set(Some(AttrValue::from(message)));
            browser::scroll_to_id("contactTop");
        })
    };
    let dismiss = {
        let success = success.clone();
        Callback::from(move |_: ()| success.set(None))
    };

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Contact Us"}</h1>
                <p>{"Questions, feedback or appointment requests. We answer every message within one business day."}</p>
            </section>

            <section class="section">
                <div class="container contact-layout" id="contactTop">
                    <div class="contact-form">
                        <SuccessMessage message={(*success).clone()} on_close={dismiss} />
                        <SimulatedForm kind={FormKind::Contact} on_success={on_sent} />
                    </div>
                    <aside class="contact-info card">
                        <h3>{"Wellness Center"}</h3>
                        <p><i class="fas fa-map-marker-alt"></i>{" Health Services Building, Ground Floor"}</p>
                        <p><i class="fas fa-phone"></i>{" (555) 123-4567"}</p>
                        <p><i class="fas fa-envelope"></i>{" wellness@campus.edu"}</p>
                        <p><i class="fas fa-clock"></i>{" Mon to Fri, 8 AM – 6 PM"}</p>
                        <button class="btn btn-secondary"
                            onclick={Callback::from(|_: MouseEvent| browser::alert(MAP_NOTICE))}>
                            {"Get Directions"}
                        </button>
                        <div class="crisis-note">
                            <strong>{"In crisis?"}</strong>
                            {" Call or text 988, available 24/7."}
                        </div>
                    </aside>
                </div>
            </section>

            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                    align-items: start;
                }
                .crisis-note {
                    margin-top: 1.5rem;
                    padding: 0.75rem;
                    border-left: 4px solid var(--error);
                    background: var(--bg);
                }
                @media (max-width: 768px) {
                    .contact-layout { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
