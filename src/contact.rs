use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Trims every field and checks it. The subject is optional.
    pub fn validate(mut self) -> Result<Self, ContactError> {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.subject = self.subject.trim().to_string();
        self.message = self.message.trim().to_string();

        require("name", &self.name)?;
        require("email", &self.email)?;
        require("message", &self.message)?;
        limit("name", &self.name, MAX_NAME_LEN)?;
        limit("subject", &self.subject, MAX_SUBJECT_LEN)?;
        limit("message", &self.message, MAX_MESSAGE_LEN)?;
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email));
        }
        Ok(self)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ContactError> {
    if value.is_empty() {
        return Err(ContactError::Required(field));
    }
    Ok(())
}

fn limit(field: &'static str, value: &str, max: usize) -> Result<(), ContactError> {
    if value.chars().count() > max {
        return Err(ContactError::TooLong { field, max });
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "  Ada  ".to_string(),
            email: "ada@example.com ".to_string(),
            subject: String::new(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_valid_message_is_trimmed() {
        let valid = message().validate().unwrap();
        assert_eq!(valid.name, "Ada");
        assert_eq!(valid.email, "ada@example.com");
    }

    #[test]
    fn test_required_fields() {
        let mut m = message();
        m.name = "   ".to_string();
        assert_eq!(m.validate(), Err(ContactError::Required("name")));

        let mut m = message();
        m.message = String::new();
        assert_eq!(m.validate(), Err(ContactError::Required("message")));
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a b@example.com", "a@b@c.com"] {
            let mut m = message();
            m.email = bad.to_string();
            assert!(
                matches!(m.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
        for good in ["ada@example.com", "a.b+c@mail.example.org"] {
            let mut m = message();
            m.email = good.to_string();
            assert!(m.validate().is_ok(), "{good} should be accepted");
        }
    }

    #[test]
    fn test_length_limits() {
        let mut m = message();
        m.subject = "x".repeat(MAX_SUBJECT_LEN + 1);
        assert_eq!(
            m.validate(),
            Err(ContactError::TooLong {
                field: "subject",
                max: MAX_SUBJECT_LEN
            })
        );
    }
}
