use crate::config::ToggleConfig;
use crate::events::{EventKind, Handler};
use crate::host::{EventSource, Host};
use crate::Result;

/// Writes one of two messages into a text element, alternating on each click.
#[derive(Debug, Clone)]
pub struct TextToggler {
    button_id: String,
    text_id: String,
    changed_message: String,
    restored_message: String,
    show_changed: bool,
}

impl TextToggler {
    pub fn new(config: &ToggleConfig) -> Self {
        Self {
            button_id: config.button_id.clone(),
            text_id: config.text_id.clone(),
            changed_message: config.changed_message.clone(),
            restored_message: config.restored_message.clone(),
            show_changed: true,
        }
    }

    pub fn register(&self, events: &mut (impl EventSource + ?Sized)) -> Result<()> {
        events.listen(&self.button_id, EventKind::Click, Handler::ToggleText)
    }

    pub fn activate<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        let message = if self.show_changed {
            &self.changed_message
        } else {
            &self.restored_message
        };
        host.set_text(&self.text_id, message)?;
        self.show_changed = !self.show_changed;
        tracing::debug!(show_changed = self.show_changed, "text toggled");
        Ok(())
    }

    /// Whether the next activation writes the "changed" message.
    pub fn shows_changed_next(&self) -> bool {
        self.show_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;

    fn host() -> FakeHost {
        FakeHost::with_elements(&["changeContentBtn", "dynamicText"])
    }

    #[test]
    fn first_activation_shows_changed_message() -> Result<()> {
        let config = ToggleConfig::default();
        let mut toggler = TextToggler::new(&config);
        let mut host = host();

        toggler.activate(&mut host)?;
        assert_eq!(host.text_of("dynamicText"), config.changed_message);
        assert!(!toggler.shows_changed_next());
        Ok(())
    }

    #[test]
    fn activations_alternate() -> Result<()> {
        let config = ToggleConfig::default();
        let mut toggler = TextToggler::new(&config);
        let mut host = host();

        for n in 1..=6 {
            toggler.activate(&mut host)?;
            let expected = if n % 2 == 1 {
                &config.changed_message
            } else {
                &config.restored_message
            };
            assert_eq!(host.text_of("dynamicText"), expected, "activation {n}");
        }
        Ok(())
    }

    #[test]
    fn register_listens_for_button_clicks() -> Result<()> {
        let toggler = TextToggler::new(&ToggleConfig::default());
        let mut host = host();
        toggler.register(&mut host)?;
        assert_eq!(
            host.listeners,
            vec![(
                "changeContentBtn".to_string(),
                EventKind::Click,
                Handler::ToggleText
            )]
        );
        Ok(())
    }

    #[test]
    fn failed_write_leaves_state_untouched() {
        let mut toggler = TextToggler::new(&ToggleConfig::default());
        let mut host = FakeHost::with_elements(&[]);
        assert!(toggler.activate(&mut host).is_err());
        assert!(toggler.shows_changed_next());
    }
}
