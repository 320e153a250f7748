use super::validation::{FieldKind, FieldSpec, CONFIRM_PASSWORD, SIGNUP_EMAIL, SIGNUP_PASSWORD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    EventRegistration,
    Volunteer,
    Donation,
    Login,
    Signup,
    ForgotPassword,
}

const CONTACT: &[FieldSpec] = &[
    FieldSpec::new("name", "Full Name", FieldKind::Text).required(),
    FieldSpec::new("email", "Email", FieldKind::Email).required(),
    FieldSpec::new("phone", "Phone", FieldKind::Tel),
    FieldSpec::new("subject", "Subject", FieldKind::Select)
        .required()
        .options(&[
            ("general", "General question"),
            ("appointment", "Appointments"),
            ("programs", "Programs & workshops"),
            ("feedback", "Feedback"),
        ]),
    FieldSpec::new("message", "Message", FieldKind::TextArea).required(),
];

const EVENT_REGISTRATION: &[FieldSpec] = &[
    FieldSpec::new("regName", "Full Name", FieldKind::Text).required(),
    FieldSpec::new("regEmail", "Email", FieldKind::Email).required(),
    FieldSpec::new("studentId", "Student ID", FieldKind::Text).required(),
    FieldSpec::new("regPhone", "Phone", FieldKind::Tel),
    FieldSpec::new("accommodations", "Accessibility needs", FieldKind::TextArea),
];

const VOLUNTEER: &[FieldSpec] = &[
    FieldSpec::new("volName", "Full Name", FieldKind::Text).required(),
    FieldSpec::new("volEmail", "Email", FieldKind::Email).required(),
    FieldSpec::new("volPhone", "Phone", FieldKind::Tel).required(),
    FieldSpec::new("interest", "Area of interest", FieldKind::Select)
        .required()
        .options(&[
            ("peer", "Peer wellness educator"),
            ("events", "Event support"),
            ("outreach", "Campus outreach"),
        ]),
    FieldSpec::new("availability", "Availability", FieldKind::TextArea).required(),
];

const DONATION: &[FieldSpec] = &[
    FieldSpec::new("amount", "Donation amount", FieldKind::Radio)
        .required()
        .options(&[("25", "$25"), ("50", "$50"), ("100", "$100"), ("custom", "Other")]),
    FieldSpec::new("customAmount", "Custom amount ($)", FieldKind::Number)
        .required()
        .visible_when("amount", "custom"),
    FieldSpec::new("donorName", "Full Name", FieldKind::Text).required(),
    FieldSpec::new("donorEmail", "Email", FieldKind::Email).required(),
    FieldSpec::new("anonymous", "Keep my donation anonymous", FieldKind::Checkbox),
];

const LOGIN: &[FieldSpec] = &[
    FieldSpec::new("loginEmail", "University Email", FieldKind::Email).required(),
    FieldSpec::new("loginPassword", "Password", FieldKind::Password).required(),
    FieldSpec::new("rememberMe", "Remember me", FieldKind::Checkbox),
];

const SIGNUP: &[FieldSpec] = &[
    FieldSpec::new("firstName", "First Name", FieldKind::Text).required(),
    FieldSpec::new("lastName", "Last Name", FieldKind::Text).required(),
    FieldSpec::new(SIGNUP_EMAIL, "University Email", FieldKind::Email).required(),
    FieldSpec::new("signupStudentId", "Student ID", FieldKind::Text).required(),
    FieldSpec::new(SIGNUP_PASSWORD, "Password", FieldKind::Password).required(),
    FieldSpec::new(CONFIRM_PASSWORD, "Confirm Password", FieldKind::Password).required(),
];

const FORGOT_PASSWORD: &[FieldSpec] = &[
    FieldSpec::new("resetEmail", "University Email", FieldKind::Email).required(),
];

impl FormKind {
    pub fn id(self) -> &'static str {
        match self {
            FormKind::Contact => "contactForm",
            FormKind::EventRegistration => "eventRegistrationForm",
            FormKind::Volunteer => "volunteerForm",
            FormKind::Donation => "donationForm",
            FormKind::Login => "loginForm",
            FormKind::Signup => "signupForm",
            FormKind::ForgotPassword => "forgotPasswordForm",
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Contact => CONTACT,
            FormKind::EventRegistration => EVENT_REGISTRATION,
            FormKind::Volunteer => VOLUNTEER,
            FormKind::Donation => DONATION,
            FormKind::Login => LOGIN,
            FormKind::Signup => SIGNUP,
            FormKind::ForgotPassword => FORGOT_PASSWORD,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Contact => "Send Message",
            FormKind::EventRegistration => "Register",
            FormKind::Volunteer => "Submit Application",
            FormKind::Donation => "Donate",
            FormKind::Login => "Log In",
            FormKind::Signup => "Create Account",
            FormKind::ForgotPassword => "Send Reset Link",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Message sent successfully! We'll respond within 24 hours.",
            FormKind::EventRegistration => "Registration successful! You'll receive a confirmation email shortly.",
            FormKind::Volunteer => "Application submitted! We'll review it and contact you within a week.",
            FormKind::Donation => "Thank you for your donation! You'll receive a receipt via email.",
            FormKind::Login => "Login successful! Redirecting to dashboard...",
            FormKind::Signup => "Account created successfully! Please check your email for verification.",
            FormKind::ForgotPassword => "If that address has an account, a reset link is on its way.",
        }
    }

    /// Login keeps its values while the redirect is pending.
    pub fn resets_on_success(self) -> bool {
        self != FormKind::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [FormKind; 7] = [
        FormKind::Contact,
        FormKind::EventRegistration,
        FormKind::Volunteer,
        FormKind::Donation,
        FormKind::Login,
        FormKind::Signup,
        FormKind::ForgotPassword,
    ];

    #[test]
    fn test_field_names_are_unique_per_form() {
        for kind in ALL {
            let names: HashSet<_> = kind.fields().iter().map(|f| f.name).collect();
            assert_eq!(names.len(), kind.fields().len(), "{:?}", kind);
        }
    }

    #[test]
    fn test_every_form_has_a_required_field() {
        for kind in ALL {
            assert!(kind.fields().iter().any(|f| f.required), "{:?}", kind);
        }
    }

    #[test]
    fn test_every_field_kind_is_used() {
        let kinds = [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Password,
            FieldKind::Number,
            FieldKind::TextArea,
            FieldKind::Select,
            FieldKind::Radio,
            FieldKind::Checkbox,
        ];
        for kind in kinds {
            let used = ALL.iter().any(|form| form.fields().iter().any(|f| f.kind == kind));
            assert!(used, "{:?}", kind);
        }
    }

    #[test]
    fn test_choice_fields_have_options() {
        for kind in ALL {
            for field in kind.fields() {
                if matches!(field.kind, FieldKind::Select | FieldKind::Radio) {
                    assert!(!field.options.is_empty(), "{}", field.name);
                }
            }
        }
    }
}
