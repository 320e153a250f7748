use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser;
use crate::components::modal::Modal;
use crate::components::notification::SuccessMessage;
use crate::components::tabs::TabBar;
use crate::config;
use crate::forms::catalog::FormKind;
use crate::forms::form::SimulatedForm;
use crate::Route;

const LOGIN_TAB: &str = "login";
const SIGNUP_TAB: &str = "signup";
const TABS: &[(&str, &str)] = &[(LOGIN_TAB, "Log In"), (SIGNUP_TAB, "Sign Up")];

const GOOGLE_NOTICE: &str = "Google login would be implemented here in a real application.";
const MICROSOFT_NOTICE: &str = "Microsoft login would be implemented here in a real application.";
const TERMS_NOTICE: &str = "Terms of Service would be displayed here in a real application.";
const PRIVACY_NOTICE: &str = "Privacy Policy would be displayed here in a real application.";
const HIPAA_NOTICE: &str = "HIPAA Privacy Notice would be displayed here in a real application.";

fn notice(message: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        browser::alert(message);
    })
}

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator();
    let tab = use_state(|| LOGIN_TAB);
    let success = use_state(|| None::<AttrValue>);
    let forgot_open = use_state(|| false);

    let on_tab = {
        let tab = tab.clone();
        let success = success.clone();
        Callback::from(move |selected: &'static str| {
            success.set(None);
            tab.set(selected);
        })
    };

    let on_logged_in = {
        let success = success.clone();
        Callback::from(move |message: &'static str| {
            success.set(Some(AttrValue::from(message)));
            let navigator = navigator.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::FORM_FOLLOWUP_DELAY_MS).await;
                match navigator {
                    Some(navigator) => {
                        info!("Demo login complete, redirecting home");
                        navigator.push(&Route::Home);
                    }
                    None => warn!("no router context, staying on login page"),
                }
            });
        })
    };

    let on_signed_up = {
        let success = success.clone();
        let tab = tab.clone();
        Callback::from(move |message: &'static str| {
            success.set(Some(AttrValue::from(message)));
            let tab = tab.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::FORM_FOLLOWUP_DELAY_MS).await;
                tab.set(LOGIN_TAB);
            });
        })
    };

    let open_forgot = {
        let forgot_open = forgot_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            forgot_open.set(true);
        })
    };
    let close_forgot = {
        let forgot_open = forgot_open.clone();
        Callback::from(move |_: ()| forgot_open.set(false))
    };
    let on_reset_sent = {
        let forgot_open = forgot_open.clone();
        let success = success.clone();
        Callback::from(move |message: &'static str| {
            forgot_open.set(false);
            success.set(Some(AttrValue::from(message)));
        })
    };
    let dismiss = {
        let success = success.clone();
        Callback::from(move |_: ()| success.set(None))
    };

    let panel = if *tab == SIGNUP_TAB {
        html! {
            <div class="tab-content active" data-tab-content={SIGNUP_TAB}>
                <SimulatedForm kind={FormKind::Signup} on_success={on_signed_up} />
                <p class="legal-links">
                    {"By signing up you agree to the "}
                    <a href="#" onclick={notice(TERMS_NOTICE)}>{"Terms of Service"}</a>
                    {", the "}
                    <a href="#" onclick={notice(PRIVACY_NOTICE)}>{"Privacy Policy"}</a>
                    {" and the "}
                    <a href="#" onclick={notice(HIPAA_NOTICE)}>{"HIPAA Notice"}</a>
                    {"."}
                </p>
            </div>
        }
    } else {
        html! {
            <div class="tab-content active" data-tab-content={LOGIN_TAB}>
                <SimulatedForm kind={FormKind::Login} on_success={on_logged_in} />
                <a href="#" class="forgot-link" onclick={open_forgot}>{"Forgot your password?"}</a>
                <div class="social-login">
                    <span>{"or continue with"}</span>
                    <button class="btn btn-secondary" onclick={notice(GOOGLE_NOTICE)}>
                        <i class="fab fa-google"></i>{" Google"}
                    </button>
                    <button class="btn btn-secondary" onclick={notice(MICROSOFT_NOTICE)}>
                        <i class="fab fa-microsoft"></i>{" Microsoft"}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <div class="login-page">
            <section class="section">
                <div class="container auth-card card">
                    <h1>{"Student Portal"}</h1>
                    <p class="auth-subtitle">{"Demo only: any credentials are accepted and nothing is sent anywhere."}</p>
                    <SuccessMessage message={(*success).clone()} on_close={dismiss} />
                    <TabBar tabs={TABS} active={*tab} on_select={on_tab} />
                    {panel}
                </div>
            </section>

            <Modal id="forgotPasswordModal" title="Reset Your Password" open={*forgot_open} on_close={close_forgot}>
                <p>{"Enter your university email and we'll send you a reset link."}</p>
                <SimulatedForm kind={FormKind::ForgotPassword} on_success={on_reset_sent} />
            </Modal>

            <style>
                {r#"
                .auth-card { max-width: 480px; margin: 2rem auto; }
                .auth-card h1 { margin-top: 0; text-align: center; }
                .auth-subtitle { text-align: center; color: var(--muted); font-size: 0.9rem; }
                .forgot-link { display: inline-block; margin-top: 1rem; color: var(--accent); }
                .social-login {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                    text-align: center;
                    color: var(--muted);
                }
                .legal-links { font-size: 0.85rem; color: var(--muted); }
                .legal-links a { color: var(--accent); }
                "#}
            </style>
        </div>
    }
}
