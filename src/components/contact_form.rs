use crate::components::EmailPattern;
use crate::config::ContactFormConfig;
use crate::events::{EventKind, EventState, Handler};
use crate::host::{EventSource, Host};
use crate::timers::{TimerAction, TimerId};
use crate::Result;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MESSAGE_REQUIRED: &str = "Message is required.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long.";

/// Minimum trimmed message length, in UTF-16 code units.
const MIN_MESSAGE_LEN: usize = 10;

/// Outcome of checking one field. Only the first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(&'static str),
}

impl ValidationResult {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

pub fn check_name(raw: &str) -> ValidationResult {
    if trim_field(raw).is_empty() {
        ValidationResult::Invalid(NAME_REQUIRED)
    } else {
        ValidationResult::Valid
    }
}

pub fn check_message(raw: &str) -> ValidationResult {
    let trimmed = trim_field(raw);
    if trimmed.is_empty() {
        ValidationResult::Invalid(MESSAGE_REQUIRED)
    } else if trimmed.encode_utf16().count() < MIN_MESSAGE_LEN {
        ValidationResult::Invalid(MESSAGE_TOO_SHORT)
    } else {
        ValidationResult::Valid
    }
}

/// Strips the characters a browser's `String.prototype.trim` strips.
fn trim_field(raw: &str) -> &str {
    raw.trim_matches(is_js_whitespace)
}

/// ECMAScript WhiteSpace and LineTerminator. U+0085 is not one of them.
fn is_js_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{FEFF}'
}

/// Trimmed field values captured from an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected,
}

/// Contact form checks: live per-field feedback plus the submit gate.
///
/// Keeps no field state of its own; every check re-reads the current input
/// values. The only state is the pending success-hide timer and the last
/// accepted submission.
#[derive(Debug, Clone)]
pub struct FormValidator {
    config: ContactFormConfig,
    email: EmailPattern,
    pending_hide: Option<TimerId>,
    last_submission: Option<ContactSubmission>,
}

impl FormValidator {
    pub fn new(config: &ContactFormConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            email: EmailPattern::new()?,
            pending_hide: None,
            last_submission: None,
        })
    }

    pub fn register(&self, events: &mut (impl EventSource + ?Sized)) -> Result<()> {
        events.listen(&self.config.name_id, EventKind::Input, Handler::ValidateName)?;
        events.listen(&self.config.email_id, EventKind::Input, Handler::ValidateEmail)?;
        events.listen(
            &self.config.message_id,
            EventKind::Input,
            Handler::ValidateMessage,
        )?;
        events.listen(&self.config.form_id, EventKind::Submit, Handler::SubmitContact)
    }

    pub fn check_email(&self, raw: &str) -> Result<ValidationResult> {
        let trimmed = trim_field(raw);
        if trimmed.is_empty() {
            return Ok(ValidationResult::Invalid(EMAIL_REQUIRED));
        }
        if !self.email.is_match(trimmed)? {
            return Ok(ValidationResult::Invalid(EMAIL_INVALID));
        }
        Ok(ValidationResult::Valid)
    }

    pub fn validate_name<H: Host + ?Sized>(&self, host: &mut H) -> Result<bool> {
        let result = check_name(&host.value(&self.config.name_id)?);
        show_result(host, &self.config.name_error_id, result)
    }

    pub fn validate_email<H: Host + ?Sized>(&self, host: &mut H) -> Result<bool> {
        let result = self.check_email(&host.value(&self.config.email_id)?)?;
        show_result(host, &self.config.email_error_id, result)
    }

    pub fn validate_message<H: Host + ?Sized>(&self, host: &mut H) -> Result<bool> {
        let result = check_message(&host.value(&self.config.message_id)?);
        show_result(host, &self.config.message_error_id, result)
    }

    /// Runs all three checks, then either shows the success message and
    /// clears the form, or clears any stale success message.
    pub fn submit<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut EventState,
    ) -> Result<SubmissionOutcome> {
        event.prevent_default();

        let name_ok = self.validate_name(host)?;
        let email_ok = self.validate_email(host)?;
        let message_ok = self.validate_message(host)?;

        self.cancel_pending_hide(host);
        let success_id = &self.config.success_id;

        if !(name_ok && email_ok && message_ok) {
            host.set_text(success_id, "")?;
            host.set_visible(success_id, false)?;
            tracing::debug!(name_ok, email_ok, message_ok, "contact form rejected");
            return Ok(SubmissionOutcome::Rejected);
        }

        let submission = ContactSubmission {
            name: trim_field(&host.value(&self.config.name_id)?).to_string(),
            email: trim_field(&host.value(&self.config.email_id)?).to_string(),
            message: trim_field(&host.value(&self.config.message_id)?).to_string(),
        };

        host.set_text(success_id, &self.config.success_message)?;
        host.set_visible(success_id, true)?;
        host.reset_form(&self.config.form_id)?;
        let timer = host.set_timeout(
            TimerAction::HideFormSuccess,
            self.config.success_hide_delay_ms,
        );
        self.pending_hide = Some(timer);

        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "contact form submitted"
        );
        self.last_submission = Some(submission);
        Ok(SubmissionOutcome::Accepted)
    }

    /// Timer callback for [`TimerAction::HideFormSuccess`].
    pub fn hide_success<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        self.pending_hide = None;
        let success_id = &self.config.success_id;
        host.set_visible(success_id, false)?;
        host.set_text(success_id, "")
    }

    pub fn pending_hide(&self) -> Option<TimerId> {
        self.pending_hide
    }

    pub fn last_submission(&self) -> Option<&ContactSubmission> {
        self.last_submission.as_ref()
    }

    fn cancel_pending_hide<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(timer) = self.pending_hide.take() {
            host.clear_timeout(timer);
        }
    }
}

fn show_result<H: Host + ?Sized>(
    host: &mut H,
    error_id: &str,
    result: ValidationResult,
) -> Result<bool> {
    match result {
        ValidationResult::Invalid(message) => {
            host.set_text(error_id, message)?;
            host.set_visible(error_id, true)?;
            Ok(false)
        }
        ValidationResult::Valid => {
            host.set_text(error_id, "")?;
            host.set_visible(error_id, false)?;
            Ok(true)
        }
    }
}
