//! Contact form backing state: field validation and the simulated send
//!
//! There is no backend. Submit starts a fake latency countdown, then a
//! success notice that clears itself; both run off the frame ticks that
//! drive the carousels.

use std::time::Duration;

pub const SEND_DELAY: Duration = Duration::from_millis(1500);
pub const NOTICE_SECS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmptyName,
    EmptyEmail,
    InvalidEmail,
    EmptyMessage,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::EmptyName => "Please tell me your name.",
            FieldError::EmptyEmail => "An email address is required.",
            FieldError::InvalidEmail => "That email address does not look right.",
            FieldError::EmptyMessage => "The message is empty.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Idle,
    /// Simulated latency before the success notice appears
    Sending { remaining: Duration },
    /// Success banner; removes itself when the countdown ends
    Notice { remaining: Duration },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub error: Option<FieldError>,
    submission: Submission,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            error: None,
            submission: Submission::Idle,
        }
    }
}

impl ContactForm {
    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.submission, Submission::Sending { .. })
    }

    /// Validate and start the simulated send. Returns false (with `error`
    /// set) when a field fails validation.
    pub fn submit(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        match validate(&self.name, &self.email, &self.message) {
            Err(error) => {
                self.error = Some(error);
                false
            }
            Ok(()) => {
                self.error = None;
                self.submission = Submission::Sending {
                    remaining: SEND_DELAY,
                };
                true
            }
        }
    }

    /// Frame tick: counts the fake latency down, flips to the success notice
    /// (clearing the fields), then back to idle once the notice expires.
    pub fn tick(&mut self, dt: Duration) {
        self.submission = match self.submission {
            Submission::Idle => Submission::Idle,
            Submission::Sending { remaining } => {
                let remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                    Submission::Notice {
                        remaining: NOTICE_SECS,
                    }
                } else {
                    Submission::Sending { remaining }
                }
            }
            Submission::Notice { remaining } => {
                let remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    Submission::Idle
                } else {
                    Submission::Notice { remaining }
                }
            }
        };
    }
}

pub fn validate(name: &str, email: &str, message: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::EmptyName);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::EmptyEmail);
    }
    if !is_plausible_email(email) {
        return Err(FieldError::InvalidEmail);
    }
    if message.trim().is_empty() {
        return Err(FieldError::EmptyMessage);
    }
    Ok(())
}

/// local@domain.tld, with a sane dot placement in the domain
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jonas Tern".to_string(),
            email: "jonas@example.org".to_string(),
            message: "Hello there!".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_validation_catches_each_field() {
        assert_eq!(validate("", "a@b.c", "hi"), Err(FieldError::EmptyName));
        assert_eq!(validate("x", "", "hi"), Err(FieldError::EmptyEmail));
        assert_eq!(validate("x", "not-an-email", "hi"), Err(FieldError::InvalidEmail));
        assert_eq!(validate("x", "a@b", "hi"), Err(FieldError::InvalidEmail));
        assert_eq!(validate("x", "a@.b", "hi"), Err(FieldError::InvalidEmail));
        assert_eq!(validate("x", "a@b.c", "  "), Err(FieldError::EmptyMessage));
        assert_eq!(validate("x", "a@b.c", "hi"), Ok(()));
    }

    #[test]
    fn test_invalid_submit_stays_idle_with_error() {
        let mut form = ContactForm::default();
        assert!(!form.submit());
        assert_eq!(form.error, Some(FieldError::EmptyName));
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn test_submit_lifecycle_clears_fields_then_notice() {
        let mut form = filled_form();
        assert!(form.submit());
        assert!(form.is_sending());

        // Halfway through the fake latency nothing has changed
        form.tick(Duration::from_millis(700));
        assert!(form.is_sending());
        assert_eq!(form.name, "Jonas Tern");

        form.tick(Duration::from_millis(800));
        assert!(matches!(form.submission(), Submission::Notice { .. }));
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());

        // Notice clears itself after five seconds
        form.tick(Duration::from_secs(4));
        assert!(matches!(form.submission(), Submission::Notice { .. }));
        form.tick(Duration::from_secs(1));
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn test_double_submit_while_sending_is_ignored() {
        let mut form = filled_form();
        assert!(form.submit());
        assert!(!form.submit());
        assert!(form.is_sending());
    }
}
