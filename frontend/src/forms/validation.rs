//! Field rules shared by every form on the site.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const SIGNUP_EMAIL: &str = "signupEmail";
pub const SIGNUP_PASSWORD: &str = "signupPassword";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

const UNIVERSITY_SUFFIX: &str = ".edu";
const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\+]?[1-9][\d]{0,15}$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Password,
    Number,
    TextArea,
    Select,
    Radio,
    Checkbox,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Choices for `Select` and `Radio` fields, as `(value, label)`.
    pub options: &'static [(&'static str, &'static str)],
    /// Only shown (and validated) while another field holds a given value.
    pub visible_when: Option<(&'static str, &'static str)>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            label,
            kind,
            required: false,
            options: &[],
            visible_when: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn options(mut self, options: &'static [(&'static str, &'static str)]) -> Self {
        self.options = options;
        self
    }

    pub const fn visible_when(mut self, field: &'static str, value: &'static str) -> Self {
        self.visible_when = Some((field, value));
        self
    }

    pub fn is_visible(&self, values: &FormValues) -> bool {
        match self.visible_when {
            Some((field, value)) => values.get(field).map(String::as_str) == Some(value),
            None => true,
        }
    }
}

pub type FormValues = BTreeMap<String, String>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please use your university email address")]
    NotUniversityEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Password does not meet requirements")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordRequirements {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub number: bool,
}

impl PasswordRequirements {
    pub fn check(password: &str) -> Self {
        PasswordRequirements {
            length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.number
    }

    /// `(element id, label, met)` for the live checklist.
    pub fn checklist(&self) -> [(&'static str, &'static str, bool); 4] {
        [
            ("length-req", "At least 8 characters", self.length),
            ("uppercase-req", "One uppercase letter", self.uppercase),
            ("lowercase-req", "One lowercase letter", self.lowercase),
            ("number-req", "One number", self.number),
        ]
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Spaces, dashes and parentheses are ignored.
pub fn is_valid_phone(value: &str) -> bool {
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&digits)
}

/// Checks one field. `values` holds the whole form so cross-field rules
/// (password confirmation) can see their partner.
pub fn validate_field(spec: &FieldSpec, values: &FormValues) -> Result<(), FieldError> {
    let value = values.get(spec.name).map(|v| v.trim()).unwrap_or("");

    if value.is_empty() {
        return if spec.required { Err(FieldError::Required) } else { Ok(()) };
    }

    match spec.kind {
        FieldKind::Email => {
            if !is_valid_email(value) {
                return Err(FieldError::InvalidEmail);
            }
            if spec.name == SIGNUP_EMAIL && !value.ends_with(UNIVERSITY_SUFFIX) {
                return Err(FieldError::NotUniversityEmail);
            }
        }
        FieldKind::Tel => {
            if !is_valid_phone(value) {
                return Err(FieldError::InvalidPhone);
            }
        }
        FieldKind::Password if spec.name == SIGNUP_PASSWORD => {
            if !PasswordRequirements::check(value).all_met() {
                return Err(FieldError::WeakPassword);
            }
        }
        _ => {}
    }

    if spec.name == CONFIRM_PASSWORD {
        let password = values.get(SIGNUP_PASSWORD).map(|v| v.trim()).unwrap_or("");
        if value != password {
            return Err(FieldError::PasswordMismatch);
        }
    }

    Ok(())
}

/// Every failing visible field, keyed by name.
pub fn validate_form(specs: &[FieldSpec], values: &FormValues) -> BTreeMap<&'static str, FieldError> {
    specs
        .iter()
        .filter(|spec| spec.is_visible(values))
        .filter_map(|spec| validate_field(spec, values).err().map(|e| (spec.name, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn check(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
        validate_field(spec, &values(&[(spec.name, value)]))
    }

    #[test]
    fn test_required_field_rejects_blank() {
        let spec = FieldSpec::new("name", "Name", FieldKind::Text).required();
        assert_eq!(check(&spec, ""), Err(FieldError::Required));
        assert_eq!(check(&spec, "   "), Err(FieldError::Required));
        assert_eq!(check(&spec, "Sam"), Ok(()));
    }

    #[test]
    fn test_optional_blank_field_passes() {
        let spec = FieldSpec::new("phone", "Phone", FieldKind::Tel);
        assert_eq!(check(&spec, ""), Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        let spec = FieldSpec::new("email", "Email", FieldKind::Email).required();
        assert_eq!(check(&spec, "student@campus.edu"), Ok(()));
        assert_eq!(check(&spec, "someone@gmail.com"), Ok(()));
        assert_eq!(check(&spec, "no-at-sign.com"), Err(FieldError::InvalidEmail));
        assert_eq!(check(&spec, "a@b"), Err(FieldError::InvalidEmail));
        assert_eq!(check(&spec, "a b@c.d"), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_signup_email_needs_university_domain() {
        let spec = FieldSpec::new(SIGNUP_EMAIL, "Email", FieldKind::Email).required();
        assert_eq!(check(&spec, "someone@gmail.com"), Err(FieldError::NotUniversityEmail));
        assert_eq!(check(&spec, "someone@state.edu"), Ok(()));
    }

    #[test]
    fn test_phone_ignores_separators() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+1 555 123 4567"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("12345678901234567"));
    }

    #[test]
    fn test_password_requirements_are_independent() {
        let r = PasswordRequirements::check("abc");
        assert_eq!(
            r,
            PasswordRequirements { length: false, uppercase: false, lowercase: true, number: false }
        );
        assert!(PasswordRequirements::check("Campus2024").all_met());
        assert!(!PasswordRequirements::check("campus2024").all_met());
        assert!(!PasswordRequirements::check("CAMPUS2024").all_met());
        assert!(!PasswordRequirements::check("CampusWell").all_met());
    }

    #[test]
    fn test_weak_signup_password_fails_validation() {
        let spec = FieldSpec::new(SIGNUP_PASSWORD, "Password", FieldKind::Password).required();
        assert_eq!(check(&spec, "short1A"), Err(FieldError::WeakPassword));
        assert_eq!(check(&spec, "LongEnough1"), Ok(()));
    }

    #[test]
    fn test_login_password_has_no_strength_rule() {
        let spec = FieldSpec::new("loginPassword", "Password", FieldKind::Password).required();
        assert_eq!(check(&spec, "x"), Ok(()));
    }

    #[test]
    fn test_confirm_password_must_match() {
        let spec = FieldSpec::new(CONFIRM_PASSWORD, "Confirm", FieldKind::Password).required();
        let form = values(&[(SIGNUP_PASSWORD, "Campus2024"), (CONFIRM_PASSWORD, "Campus2025")]);
        assert_eq!(validate_field(&spec, &form), Err(FieldError::PasswordMismatch));
        let form = values(&[(SIGNUP_PASSWORD, "Campus2024"), (CONFIRM_PASSWORD, "Campus2024")]);
        assert_eq!(validate_field(&spec, &form), Ok(()));
    }

    #[test]
    fn test_form_collects_every_failure() {
        const SPECS: &[FieldSpec] = &[
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("email", "Email", FieldKind::Email).required(),
            FieldSpec::new("note", "Note", FieldKind::TextArea),
        ];
        let errors = validate_form(SPECS, &values(&[("email", "bad")]));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], FieldError::Required);
        assert_eq!(errors["email"], FieldError::InvalidEmail);

        let ok = validate_form(SPECS, &values(&[("name", "Ana"), ("email", "ana@uni.edu")]));
        assert!(ok.is_empty());
    }

    #[test]
    fn test_hidden_fields_are_skipped() {
        const SPECS: &[FieldSpec] = &[
            FieldSpec::new("amount", "Amount", FieldKind::Radio).required(),
            FieldSpec::new("customAmount", "Custom", FieldKind::Number)
                .required()
                .visible_when("amount", "custom"),
        ];
        assert!(validate_form(SPECS, &values(&[("amount", "25")])).is_empty());
        let errors = validate_form(SPECS, &values(&[("amount", "custom")]));
        assert_eq!(errors.get("customAmount"), Some(&FieldError::Required));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::PasswordMismatch.to_string(), "Passwords do not match");
    }
}
