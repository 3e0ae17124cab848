//! Scroll-synced index tracker for horizontally scrollable item strips.
//!
//! One [`Carousel`] serves every strip on the page; per-strip differences
//! are builder options. The tracker keeps a current index and a row of
//! indicators (exactly one active, always the one at the current index) and
//! updates the index two ways:
//!
//! - **Activation**: an indicator click scrolls the strip to that item and
//!   sets the index immediately, without waiting for the smooth scroll.
//! - **Inference**: after scrolling settles, the item whose center is
//!   nearest the strip's center becomes current. Inference never scrolls,
//!   so it cannot fight the user.
//!
//! Geometry is read through [`StripLayout`] only when needed, because
//! layout reads are the expensive part.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::geometry::Rect;
use crate::schedule::{Debounce, SettleToken};

/// Live geometry of a strip, read on demand.
pub trait StripLayout {
    /// Bounding rectangle of the scroll container.
    fn container_rect(&self) -> Rect;
    /// Bounding rectangle of the item at `index`.
    fn item_rect(&self, index: usize) -> Option<Rect>;
    /// Layout offset of the container along the scroll axis.
    fn container_offset(&self) -> f64;
    /// Layout offset of the item at `index` along the scroll axis.
    fn item_offset(&self, index: usize) -> Option<f64>;
    /// Total scrollable content width.
    fn content_width(&self) -> f64;
    /// Visible width.
    fn visible_width(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Changes for the host to apply to the strip.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselAction {
    /// Smoothly scroll the container to `left`.
    ScrollTo { left: f64 },
    /// Mark indicator `active` active and every other indicator inactive.
    SyncIndicators { active: usize },
    /// Show or hide the indicator row.
    ShowIndicators(bool),
}

/// Index of the center nearest `target`. Earlier entries win ties.
#[must_use]
pub fn nearest_index<I>(target: f64, centers: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, center) in centers.into_iter().enumerate() {
        let distance = (target - center).abs();
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

#[derive(Debug, Default)]
pub struct CarouselBuilder {
    items: usize,
    indicators: usize,
    overflow_aware: bool,
}

impl CarouselBuilder {
    #[must_use]
    pub fn items(mut self, count: usize) -> Self {
        self.items = count;
        self
    }

    #[must_use]
    pub fn indicators(mut self, count: usize) -> Self {
        self.indicators = count;
        self
    }

    /// Hide the indicator row whenever the strip does not overflow.
    #[must_use]
    pub fn overflow_aware(mut self, enabled: bool) -> Self {
        self.overflow_aware = enabled;
        self
    }

    /// Build the tracker. A strip with no items or no indicators has nothing
    /// to track and yields `None`.
    #[must_use]
    pub fn build(self) -> Option<Carousel> {
        if self.items == 0 || self.indicators == 0 {
            log::debug!("carousel: disabled ({} items, {} indicators)", self.items, self.indicators);
            return None;
        }
        if self.items != self.indicators {
            log::warn!(
                "carousel: {} items but {} indicators; tracking the first {}",
                self.items,
                self.indicators,
                self.items.min(self.indicators)
            );
        }
        Some(Carousel {
            len: self.items.min(self.indicators),
            current: 0,
            overflow_aware: self.overflow_aware,
            settle: Debounce::new(),
        })
    }
}

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    overflow_aware: bool,
    settle: Debounce,
}

impl Carousel {
    #[must_use]
    pub fn builder() -> CarouselBuilder {
        CarouselBuilder::default()
    }

    /// Establish the initial indicator state (and row visibility).
    pub fn mount(&mut self, layout: &impl StripLayout) -> Vec<CarouselAction> {
        let mut actions = vec![CarouselAction::SyncIndicators { active: self.current }];
        actions.extend(self.on_resize(layout));
        actions
    }

    /// Scroll to `index` and make it current without waiting for the scroll.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::IndexOutOfRange`] when `index >= len`; the
    /// state is left untouched.
    pub fn activate(&mut self, index: usize, layout: &impl StripLayout) -> Result<Vec<CarouselAction>, CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange { index, len: self.len });
        }
        let mut actions = Vec::with_capacity(2);
        if let Some(offset) = layout.item_offset(index) {
            actions.push(CarouselAction::ScrollTo { left: offset - layout.container_offset() });
        }
        self.current = index;
        actions.push(CarouselAction::SyncIndicators { active: index });
        Ok(actions)
    }

    /// A scroll signal arrived. The returned token must be handed back to
    /// [`Carousel::on_settle`] once the settle timer fires.
    pub fn on_scroll(&mut self) -> SettleToken {
        self.settle.restart()
    }

    /// The settle timer fired. Stale tokens are ignored.
    pub fn on_settle(&mut self, token: SettleToken, layout: &impl StripLayout) -> Vec<CarouselAction> {
        if !self.settle.fire(token) {
            return Vec::new();
        }
        let center = layout.container_rect().center_x();
        // Items without geometry sit infinitely far away.
        let centers = (0..self.len).map(|index| layout.item_rect(index).map_or(f64::INFINITY, |rect| rect.center_x()));
        match nearest_index(center, centers) {
            Some(nearest) if nearest != self.current => {
                self.current = nearest;
                vec![CarouselAction::SyncIndicators { active: nearest }]
            }
            _ => Vec::new(),
        }
    }

    /// Recompute indicator row visibility (overflow-aware strips only).
    pub fn on_resize(&self, layout: &impl StripLayout) -> Vec<CarouselAction> {
        if self.overflow_aware {
            vec![CarouselAction::ShowIndicators(layout.content_width() > layout.visible_width())]
        } else {
            Vec::new()
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true for a built carousel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_overflow_aware(&self) -> bool {
        self.overflow_aware
    }

    /// Active flag per indicator, in order.
    #[must_use]
    pub fn indicator_states(&self) -> Vec<bool> {
        (0..self.len).map(|index| index == self.current).collect()
    }
}
