use std::collections::BTreeMap;

use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::catalog::FormKind;
use super::validation::{
    validate_field, validate_form, FieldError, FieldKind, FieldSpec, FormValues, PasswordRequirements,
    SIGNUP_PASSWORD,
};

/// Values and visible errors of one form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: BTreeMap<&'static str, FieldError>,
}

impl FormState {
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Typing clears the field's error; it is re-checked on blur.
    pub fn input(&mut self, name: &'static str, value: String) {
        self.values.insert(name.to_string(), value);
        self.errors.remove(name);
    }

    pub fn blur(&mut self, spec: &FieldSpec) {
        match validate_field(spec, &self.values) {
            Ok(()) => {
                self.errors.remove(spec.name);
            }
            Err(e) => {
                self.errors.insert(spec.name, e);
            }
        }
    }

    /// Validates every visible field. `true` when the form may be submitted.
    pub fn submit(&mut self, specs: &[FieldSpec]) -> bool {
        self.errors = validate_form(specs, &self.values);
        self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}

fn read_value(e: &Event, kind: FieldKind) -> String {
    match kind {
        FieldKind::TextArea => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        FieldKind::Select => e.target_unchecked_into::<HtmlSelectElement>().value(),
        FieldKind::Checkbox => {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            if checked { "on".to_string() } else { String::new() }
        }
        _ => e.target_unchecked_into::<HtmlInputElement>().value(),
    }
}

fn input_type(kind: FieldKind, revealed: bool) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        FieldKind::Password if revealed => "text",
        FieldKind::Password => "password",
        FieldKind::Number => "number",
        FieldKind::Checkbox => "checkbox",
        FieldKind::Radio => "radio",
        _ => "text",
    }
}

#[derive(Properties, PartialEq)]
pub struct SimulatedFormProps {
    pub kind: FormKind,
    /// Receives the success message once the form passes validation.
    pub on_success: Callback<&'static str>,
}

/// Renders a form from its field list, validates it, and "submits" it
/// without any network traffic.
#[function_component(SimulatedForm)]
pub fn simulated_form(props: &SimulatedFormProps) -> Html {
    let kind = props.kind;
    let state = use_state(FormState::default);
    let revealed = use_state(|| None::<&'static str>);

    let onsubmit = {
        let state = state.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*state).clone();
            if !next.submit(kind.fields()) {
                log!(format!("{} blocked: {} invalid field(s)", kind.id(), next.errors.len()));
                state.set(next);
                return;
            }
            log!(format!("{} submitted (simulated)", kind.id()));
            if kind.resets_on_success() {
                next.reset();
            }
            state.set(next);
            on_success.emit(kind.success_message());
        })
    };

    let render_field = |spec: &'static FieldSpec| -> Html {
        if !spec.is_visible(&state.values) {
            return html! {};
        }
        let name = spec.name;
        let error = state.errors.get(name).copied();
        let current = state.value(name).to_string();

        let on_value = {
            let state = state.clone();
            let kind = spec.kind;
            Callback::from(move |e: Event| {
                let mut next = (*state).clone();
                next.input(name, read_value(&e, kind));
                state.set(next);
            })
        };
        let on_typing = {
            let on_value = on_value.clone();
            Callback::from(move |e: InputEvent| on_value.emit(e.into()))
        };
        let onblur = {
            let state = state.clone();
            Callback::from(move |_: FocusEvent| {
                let mut next = (*state).clone();
                next.blur(spec);
                state.set(next);
            })
        };

        let control = match spec.kind {
            FieldKind::TextArea => html! {
                <textarea id={name} name={name} rows="4" value={current.clone()}
                    required={spec.required} oninput={on_typing} {onblur} />
            },
            FieldKind::Select => html! {
                <select id={name} name={name} required={spec.required} onchange={on_value} {onblur}>
                    <option value="" selected={current.is_empty()}>{"Select..."}</option>
                    { for spec.options.iter().map(|(value, label)| html! {
                        <option value={*value} selected={current == *value}>{*label}</option>
                    }) }
                </select>
            },
            FieldKind::Radio => html! {
                <div class="amount-options">
                    { for spec.options.iter().map(|(value, label)| html! {
                        <label class="amount-option">
                            <input type="radio" name={name} value={*value}
                                checked={current == *value} onchange={on_value.clone()} />
                            {*label}
                        </label>
                    }) }
                </div>
            },
            FieldKind::Checkbox => html! {
                <label class="checkbox-label">
                    <input type="checkbox" id={name} name={name}
                        checked={!current.is_empty()} onchange={on_value} />
                    {spec.label}
                </label>
            },
            FieldKind::Password => {
                let shown = *revealed == Some(name);
                let toggle = {
                    let revealed = revealed.clone();
                    Callback::from(move |_: MouseEvent| {
                        revealed.set(if shown { None } else { Some(name) });
                    })
                };
                html! {
                    <div class="password-input">
                        <input id={name} name={name} type={input_type(spec.kind, shown)}
                            value={current.clone()} required={spec.required}
                            oninput={on_typing} {onblur} />
                        <button type="button" class="password-toggle" onclick={toggle}>
                            <i class={if shown { "fas fa-eye-slash" } else { "fas fa-eye" }}></i>
                        </button>
                    </div>
                }
            }
            _ => html! {
                <input id={name} name={name} type={input_type(spec.kind, false)}
                    value={current.clone()} required={spec.required}
                    oninput={on_typing} {onblur} />
            },
        };

        let checklist = if name == SIGNUP_PASSWORD {
            let requirements = PasswordRequirements::check(&current);
            html! {
                <ul class="password-requirements">
                    { for requirements.checklist().iter().map(|(id, label, met)| html! {
                        <li id={*id} class={classes!(met.then(|| "valid"))}>{*label}</li>
                    }) }
                </ul>
            }
        } else {
            html! {}
        };

        html! {
            <div class={classes!("form-group", error.map(|_| "has-error"))}>
                { if spec.kind != FieldKind::Checkbox {
                    html! {
                        <label for={name}>
                            {spec.label}
                            { if spec.required { html! { <span class="required">{" *"}</span> } } else { html! {} } }
                        </label>
                    }
                } else {
                    html! {}
                } }
                {control}
                {checklist}
                <span id={format!("{}Error", name)} class="error-message"
                    style={if error.is_some() { "display: block;" } else { "display: none;" }}>
                    {error.map(|e| e.to_string()).unwrap_or_default()}
                </span>
            </div>
        }
    };

    html! {
        <form id={kind.id()} class="wellness-form" {onsubmit} novalidate={true}>
            { for kind.fields().iter().map(render_field) }
            <button type="submit" class="btn btn-primary">{kind.submit_label()}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_clears_error_and_blur_reports_it() {
        let spec = &FormKind::Contact.fields()[1]; // email
        let mut state = FormState::default();
        state.input(spec.name, "not-an-email".into());
        state.blur(spec);
        assert_eq!(state.errors.get(spec.name), Some(&FieldError::InvalidEmail));

        state.input(spec.name, "not-an-email.".into());
        assert!(state.errors.get(spec.name).is_none());

        state.input(spec.name, "me@uni.edu".into());
        state.blur(spec);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_submit_blocked_until_required_fields_valid() {
        let mut state = FormState::default();
        assert!(!state.submit(FormKind::Contact.fields()));
        assert_eq!(state.errors.len(), 4);

        state.input("name", "Robin".into());
        state.input("email", "robin@uni.edu".into());
        state.input("subject", "general".into());
        state.input("message", "Hello".into());
        assert!(state.submit(FormKind::Contact.fields()));
    }

    #[test]
    fn test_optional_phone_still_checked_when_filled() {
        let mut state = FormState::default();
        state.input("name", "Robin".into());
        state.input("email", "robin@uni.edu".into());
        state.input("subject", "general".into());
        state.input("message", "Hello".into());
        state.input("phone", "call me".into());
        assert!(!state.submit(FormKind::Contact.fields()));
        assert_eq!(state.errors.get("phone"), Some(&FieldError::InvalidPhone));
    }

    #[test]
    fn test_signup_flow() {
        let mut state = FormState::default();
        state.input("firstName", "Kai".into());
        state.input("lastName", "Lee".into());
        state.input("signupEmail", "kai@gmail.com".into());
        state.input("signupStudentId", "S123".into());
        state.input("signupPassword", "Wellness1".into());
        state.input("confirmPassword", "Wellness2".into());
        assert!(!state.submit(FormKind::Signup.fields()));
        assert_eq!(state.errors.get("signupEmail"), Some(&FieldError::NotUniversityEmail));
        assert_eq!(state.errors.get("confirmPassword"), Some(&FieldError::PasswordMismatch));

        state.input("signupEmail", "kai@college.edu".into());
        state.input("confirmPassword", "Wellness1".into());
        assert!(state.submit(FormKind::Signup.fields()));
    }

    #[test]
    fn test_donation_custom_amount_only_when_chosen() {
        let mut state = FormState::default();
        state.input("amount", "50".into());
        state.input("donorName", "Pat".into());
        state.input("donorEmail", "pat@uni.edu".into());
        assert!(state.submit(FormKind::Donation.fields()));

        state.input("amount", "custom".into());
        assert!(!state.submit(FormKind::Donation.fields()));
        state.input("customAmount", "15".into());
        assert!(state.submit(FormKind::Donation.fields()));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = FormState::default();
        state.input("name", "x".into());
        state.submit(FormKind::Contact.fields());
        state.reset();
        assert_eq!(state, FormState::default());
    }
}
