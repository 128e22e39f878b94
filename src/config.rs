use serde::Deserialize;

use crate::{Error, Result};

/// Element ids, copy and timing for every component on the page.
///
/// Every section falls back to the bundled page's values, so a TOML file only
/// needs the keys it changes:
///
/// ```
/// let config = page_widgets::PageConfig::from_toml_str(
///     "[contact]\nsuccess_hide_delay_ms = 500\n",
/// )?;
/// assert_eq!(config.contact.success_hide_delay_ms, 500);
/// assert_eq!(config.carousel.images.len(), 4);
/// # Ok::<(), page_widgets::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub toggle: ToggleConfig,
    pub carousel: CarouselConfig,
    pub contact: ContactFormConfig,
}

impl PageConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel.images.is_empty() {
            return Err(Error::Config("carousel.images must not be empty".into()));
        }
        if self.contact.success_hide_delay_ms < 0 {
            return Err(Error::Config(format!(
                "contact.success_hide_delay_ms must be >= 0 (got {})",
                self.contact.success_hide_delay_ms
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    pub button_id: String,
    pub text_id: String,
    pub changed_message: String,
    pub restored_message: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            button_id: "changeContentBtn".into(),
            text_id: "dynamicText".into(),
            changed_message: "You've successfully changed the text!".into(),
            restored_message: "This text will change when you click the button again.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub image_id: String,
    pub previous_id: String,
    pub next_id: String,
    pub images: Vec<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            image_id: "carouselImage".into(),
            previous_id: "prevImage".into(),
            next_id: "nextImage".into(),
            images: vec![
                "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg".into(),
                "https://images.pexels.com/photos/276583/pexels-photo-276583.jpeg".into(),
                "https://images.pexels.com/photos/271816/pexels-photo-271816.jpeg".into(),
                "https://images.pexels.com/photos/667838/pexels-photo-667838.jpeg".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactFormConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub message_id: String,
    pub name_error_id: String,
    pub email_error_id: String,
    pub message_error_id: String,
    pub success_id: String,
    pub success_message: String,
    pub success_hide_delay_ms: i64,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".into(),
            name_id: "name".into(),
            email_id: "email".into(),
            message_id: "message".into(),
            name_error_id: "nameError".into(),
            email_error_id: "emailError".into(),
            message_error_id: "messageError".into(),
            success_id: "formSuccess".into(),
            success_message: "Form submitted successfully!".into(),
            success_hide_delay_ms: 3000,
        }
    }
}
