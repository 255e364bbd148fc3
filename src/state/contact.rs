//! Contact form validation and the simulated submission outcome.
//!
//! Nothing is sent anywhere: a valid form produces a personalized
//! confirmation and is reset locally.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Named form fields, as collected from the submitted form. Later entries for
/// the same name replace earlier ones.
pub type FormFields = Map<String, Value>;

/// Collect `(name, value)` pairs into [`FormFields`].
pub fn fields_from_pairs<I>(pairs: I) -> FormFields
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs.into_iter().map(|(k, v)| (k, Value::String(v))).collect()
}

/// Error returned by [`validate`]. The `Display` text is shown to the visitor.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in your Name and Email.")]
    MissingRequired,
    #[error("Could not read the contact form: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A submitted contact form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Any other named fields (company, phone, message, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ContactForm {
    /// First whitespace-delimited token of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Confirmation shown after a successful submission.
    pub fn greeting(&self) -> String {
        format!("Thank you, {}! We’ll contact you soon.", self.first_name())
    }
}

/// Validate submitted fields: `name` and `email` must be non-blank.
///
/// # Errors
///
/// [`ContactError::MissingRequired`] if either required field is blank, or
/// [`ContactError::Malformed`] if a field has a non-string value.
pub fn validate(fields: FormFields) -> Result<ContactForm, ContactError> {
    let form: ContactForm = serde_json::from_value(Value::Object(fields))?;
    if form.name.trim().is_empty() || form.email.trim().is_empty() {
        return Err(ContactError::MissingRequired);
    }
    Ok(form)
}
