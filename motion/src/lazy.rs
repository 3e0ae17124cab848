//! Deferred image loading.
//!
//! Images ship with their real source in a deferred attribute. The first
//! time one nears the viewport its source is swapped in and it is no longer
//! observed.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

/// Handle to a registered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(usize);

impl ImageId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyAction {
    /// Set the image's `src`, drop the deferred attribute, stop observing.
    Load { image: ImageId, src: String },
}

#[derive(Debug, Default)]
pub struct LazyImages {
    pending: Vec<Option<String>>,
}

impl LazyImages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track an image whose deferred source is `src`.
    pub fn register(&mut self, src: impl Into<String>) -> ImageId {
        self.pending.push(Some(src.into()));
        ImageId(self.pending.len() - 1)
    }

    /// Handle a visibility callback; loads at most once per image.
    pub fn on_visibility(&mut self, image: ImageId, intersecting: bool) -> Option<LazyAction> {
        if !intersecting {
            return None;
        }
        let src = self.pending.get_mut(image.0)?.take()?;
        Some(LazyAction::Load { image, src })
    }

    /// Images still waiting for their source.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|src| src.is_some()).count()
    }
}
