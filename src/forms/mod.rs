pub mod article;
pub mod comment;

pub use article::ArticleForm;
pub use comment::CommentForm;

use std::collections::BTreeMap;
use std::fmt;

/// Per-field validation messages, keyed by field name.
///
/// All user-visible failure messaging comes from this layer; the stores
/// themselves never validate and never error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.errors.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Shape check only: no whitespace, an `@`, and a dot in the domain part.
/// Anything stricter belongs to an actual mail delivery attempt.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Newsletter signup check; returns the trimmed address ready to submit
pub fn newsletter_email(email: &str) -> Result<String, ValidationErrors> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !is_valid_email(trimmed) {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Please enter a valid email address");
        return Err(errors);
    }
    Ok(trimmed.to_string())
}
