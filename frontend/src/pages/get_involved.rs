use yew::prelude::*;

use crate::browser;
use crate::components::modal::Modal;
use crate::components::notification::SuccessMessage;
use crate::forms::catalog::FormKind;
use crate::forms::form::SimulatedForm;

const ADVOCACY_NOTICE: &str = "Advocacy program coming soon! Please contact us for more information.";
const PARTNERSHIP_NOTICE: &str = "Partnership opportunities coming soon! Please contact us for more information.";

#[function_component(GetInvolved)]
pub fn get_involved() -> Html {
    let volunteering = use_state(|| false);
    let success = use_state(|| None::<AttrValue>);

    let open_volunteer = {
        let volunteering = volunteering.clone();
        Callback::from(move |_: MouseEvent| volunteering.set(true))
    };
    let close_volunteer = {
        let volunteering = volunteering.clone();
        Callback::from(move |_: ()| volunteering.set(false))
    };
    let on_applied = {
        let volunteering = volunteering.clone();
        let success = success.clone();
        Callback::from(move |message: &'static str| {
            volunteering.set(false);
            success.set(Some(AttrValue::from(message)));
            browser::scroll_to_id("involvedTop");
        })
    };
    let on_donated = {
        let success = success.clone();
        Callback::from(move |message: &'static str| {
            success.set(Some(AttrValue::from(message)));
            browser::scroll_to_id("involvedTop");
        })
    };
    let dismiss = {
        let success = success.clone();
        Callback::from(move |_: ()| success.set(None))
    };

    html! {
        <div class="involved-page">
            <section class="page-hero">
                <h1>{"Get Involved"}</h1>
                <p>{"Volunteer, donate, or partner with us to make campus a healthier place."}</p>
            </section>

            <section class="section">
                <div class="container" id="involvedTop">
                    <SuccessMessage message={(*success).clone()} on_close={dismiss} />
                    <div class="card-grid">
                        <div class="card program-card">
                            <i class="fas fa-hands-helping"></i>
                            <h3>{"Volunteer"}</h3>
                            <p>{"Become a peer wellness educator, staff events, or join campus outreach."}</p>
                            <button class="btn btn-primary" onclick={open_volunteer}>{"Apply Now"}</button>
                        </div>
                        <div class="card program-card">
                            <i class="fas fa-bullhorn"></i>
                            <h3>{"Advocacy"}</h3>
                            <p>{"Help shape wellness policy with student government."}</p>
                            <button class="btn btn-secondary"
                                onclick={Callback::from(|_: MouseEvent| browser::alert(ADVOCACY_NOTICE))}>
                                {"Learn More"}
                            </button>
                        </div>
                        <div class="card program-card">
                            <i class="fas fa-handshake"></i>
                            <h3>{"Partnerships"}</h3>
                            <p>{"Student organizations and local businesses can co-host programs."}</p>
                            <button class="btn btn-secondary"
                                onclick={Callback::from(|_: MouseEvent| browser::alert(PARTNERSHIP_NOTICE))}>
                                {"Partner With Us"}
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section donate-section">
                <div class="container donate-container">
                    <h2>{"Support Student Wellness"}</h2>
                    <p>{"Donations fund free fitness classes, the food pantry and peer support training."}</p>
                    <SimulatedForm kind={FormKind::Donation} on_success={on_donated} />
                </div>
            </section>

            <Modal id="volunteerModal" title="Volunteer Application" open={*volunteering} on_close={close_volunteer}>
                <SimulatedForm kind={FormKind::Volunteer} on_success={on_applied} />
            </Modal>

            <style>
                {r#"
                .program-card i { font-size: 1.8rem; color: var(--accent); }
                .donate-section { background: var(--surface); }
                .donate-container { max-width: 640px; }
                .amount-options { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                .amount-option {
                    display: flex;
                    align-items: center;
                    gap: 0.35rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    background: var(--bg);
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
