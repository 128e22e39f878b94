use crate::config::CarouselConfig;
use crate::events::{EventKind, Handler};
use crate::host::{EventSource, Host};
use crate::{Error, Result};

/// Circular image viewer driven by previous/next buttons.
///
/// The index always stays in `0..images.len()`; stepping past either end
/// wraps around.
#[derive(Debug, Clone)]
pub struct ImageCarousel {
    image_id: String,
    previous_id: String,
    next_id: String,
    images: Vec<String>,
    index: usize,
}

impl ImageCarousel {
    pub fn new(config: &CarouselConfig) -> Result<Self> {
        if config.images.is_empty() {
            return Err(Error::Config("carousel needs at least one image".into()));
        }
        Ok(Self {
            image_id: config.image_id.clone(),
            previous_id: config.previous_id.clone(),
            next_id: config.next_id.clone(),
            images: config.images.clone(),
            index: 0,
        })
    }

    pub fn register(&self, events: &mut (impl EventSource + ?Sized)) -> Result<()> {
        events.listen(&self.previous_id, EventKind::Click, Handler::ShowPreviousImage)?;
        events.listen(&self.next_id, EventKind::Click, Handler::ShowNextImage)
    }

    pub fn show_previous<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        self.index = if self.index == 0 {
            self.images.len() - 1
        } else {
            self.index - 1
        };
        self.refresh(host)
    }

    pub fn show_next<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        self.index += 1;
        if self.index >= self.images.len() {
            self.index = 0;
        }
        self.refresh(host)
    }

    /// Writes the current image's source and its 1-based label.
    pub fn refresh<H: Host + ?Sized>(&self, host: &mut H) -> Result<()> {
        host.set_attr(&self.image_id, "src", &self.images[self.index])?;
        host.set_attr(
            &self.image_id,
            "alt",
            &format!("Carousel Image {}", self.index + 1),
        )?;
        tracing::debug!(index = self.index, "carousel image shown");
        Ok(())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.index]
    }
}
