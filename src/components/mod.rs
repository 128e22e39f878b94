mod carousel;
mod contact_form;
mod email;
mod toggler;

pub use carousel::ImageCarousel;
pub use contact_form::{
    ContactSubmission, EMAIL_INVALID, EMAIL_REQUIRED, FormValidator, MESSAGE_REQUIRED,
    MESSAGE_TOO_SHORT, NAME_REQUIRED, SubmissionOutcome, ValidationResult, check_message,
    check_name,
};
pub use toggler::TextToggler;

pub(crate) use email::EmailPattern;
