#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Strip geometry with items of equal width laid out edge to edge.
struct FakeStrip {
    container: Rect,
    container_offset: f64,
    items: Vec<Rect>,
    offsets: Vec<f64>,
    content_width: f64,
}

impl FakeStrip {
    /// `centers` are item centers in viewport coordinates; the container is
    /// positioned so its center is `container_center`.
    fn with_centers(container_center: f64, centers: &[f64]) -> Self {
        let items = centers.iter().map(|c| Rect::new(c - 40.0, 0.0, 80.0, 60.0)).collect::<Vec<_>>();
        Self {
            container: Rect::new(container_center - 100.0, 0.0, 200.0, 60.0),
            container_offset: 24.0,
            offsets: (0..centers.len()).map(|i| 24.0 + 80.0 * i as f64).collect(),
            items,
            content_width: 80.0 * centers.len() as f64,
        }
    }
}

impl StripLayout for FakeStrip {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn item_rect(&self, index: usize) -> Option<Rect> {
        self.items.get(index).copied()
    }

    fn container_offset(&self) -> f64 {
        self.container_offset
    }

    fn item_offset(&self, index: usize) -> Option<f64> {
        self.offsets.get(index).copied()
    }

    fn content_width(&self) -> f64 {
        self.content_width
    }

    fn visible_width(&self) -> f64 {
        self.container.width
    }
}

fn carousel(len: usize) -> Option<Carousel> {
    Carousel::builder().items(len).indicators(len).build()
}

fn exactly_one_active_at_current(c: &Carousel) -> bool {
    let states = c.indicator_states();
    states.iter().filter(|active| **active).count() == 1 && states[c.current_index()]
}

// =============================================================
// nearest_index
// =============================================================

#[test]
fn nearest_index_picks_minimum_distance() {
    assert_eq!(nearest_index(95.0, [0.0, 100.0, 200.0]), Some(1));
}

#[test]
fn nearest_index_tie_goes_to_lower_index() {
    assert_eq!(nearest_index(50.0, [0.0, 100.0]), Some(0));
    assert_eq!(nearest_index(150.0, [0.0, 100.0, 200.0]), Some(1));
}

#[test]
fn nearest_index_empty_is_none() {
    assert_eq!(nearest_index(10.0, std::iter::empty()), None);
}

#[test]
fn nearest_index_before_first_and_after_last() {
    assert_eq!(nearest_index(-500.0, [0.0, 100.0, 200.0]), Some(0));
    assert_eq!(nearest_index(900.0, [0.0, 100.0, 200.0]), Some(2));
}

// =============================================================
// Builder
// =============================================================

#[test]
fn builder_rejects_empty_strip() {
    assert!(Carousel::builder().items(0).indicators(3).build().is_none());
    assert!(Carousel::builder().items(3).indicators(0).build().is_none());
}

#[test]
fn builder_tracks_shorter_of_items_and_indicators() {
    let c = Carousel::builder().items(5).indicators(3).build();
    assert_eq!(c.map(|c| c.len()), Some(3));
}

#[test]
fn built_carousel_starts_at_zero() {
    let c = carousel(4);
    assert!(c.as_ref().is_some_and(|c| c.current_index() == 0 && !c.is_empty()));
    assert!(c.as_ref().is_some_and(exactly_one_active_at_current));
}

// =============================================================
// Activation
// =============================================================

#[test]
fn activate_sets_index_immediately_and_scrolls_relative_to_container() {
    let Some(mut c) = carousel(3) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(100.0, &[40.0, 120.0, 200.0]);
    let actions = c.activate(2, &strip);
    assert_eq!(
        actions,
        Ok(vec![CarouselAction::ScrollTo { left: 160.0 }, CarouselAction::SyncIndicators { active: 2 }])
    );
    assert_eq!(c.current_index(), 2);
    assert!(exactly_one_active_at_current(&c));
}

#[test]
fn activate_every_valid_index_round_trips() {
    let Some(mut c) = carousel(5) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(100.0, &[0.0, 80.0, 160.0, 240.0, 320.0]);
    for index in [3, 0, 4, 1, 2] {
        assert!(c.activate(index, &strip).is_ok());
        assert_eq!(c.current_index(), index);
        assert!(exactly_one_active_at_current(&c));
    }
}

#[test]
fn activate_out_of_range_is_error_and_keeps_state() {
    let Some(mut c) = carousel(2) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(100.0, &[0.0, 80.0]);
    assert_eq!(c.activate(2, &strip), Err(CarouselError::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn activate_without_item_geometry_still_sets_index() {
    let Some(mut c) = Carousel::builder().items(3).indicators(3).build() else {
        panic!("carousel disabled");
    };
    let strip = FakeStrip::with_centers(100.0, &[0.0]);
    assert_eq!(c.activate(2, &strip), Ok(vec![CarouselAction::SyncIndicators { active: 2 }]));
}

// =============================================================
// Scroll-settle inference
// =============================================================

#[test]
fn settle_selects_nearest_center() {
    let Some(mut c) = carousel(3) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(95.0, &[0.0, 100.0, 200.0]);
    let token = c.on_scroll();
    assert_eq!(c.on_settle(token, &strip), vec![CarouselAction::SyncIndicators { active: 1 }]);
    assert_eq!(c.current_index(), 1);
    assert!(exactly_one_active_at_current(&c));
}

#[test]
fn settle_tie_selects_lower_index() {
    let Some(mut c) = carousel(3) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(150.0, &[0.0, 100.0, 200.0]);
    let token = c.on_scroll();
    c.on_settle(token, &strip);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn settle_on_current_item_emits_nothing() {
    let Some(mut c) = carousel(3) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(10.0, &[0.0, 100.0, 200.0]);
    let token = c.on_scroll();
    assert!(c.on_settle(token, &strip).is_empty());
    assert_eq!(c.current_index(), 0);
}

#[test]
fn settle_never_scrolls() {
    let Some(mut c) = carousel(3) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(210.0, &[0.0, 100.0, 200.0]);
    let token = c.on_scroll();
    let actions = c.on_settle(token, &strip);
    assert!(!actions.iter().any(|a| matches!(a, CarouselAction::ScrollTo { .. })));
}

#[test]
fn superseded_settle_is_noop() {
    let Some(mut c) = carousel(3) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(200.0, &[0.0, 100.0, 200.0]);
    let stale = c.on_scroll();
    let live = c.on_scroll();
    assert!(c.on_settle(stale, &strip).is_empty());
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.on_settle(live, &strip), vec![CarouselAction::SyncIndicators { active: 2 }]);
}

#[test]
fn settle_fires_once_per_arming() {
    let Some(mut c) = carousel(3) else { panic!("carousel disabled") };
    let strip = FakeStrip::with_centers(200.0, &[0.0, 100.0, 200.0]);
    let token = c.on_scroll();
    assert!(!c.on_settle(token, &strip).is_empty());
    assert!(c.on_settle(token, &strip).is_empty());
}

#[test]
fn settle_ignores_items_beyond_indicator_count() {
    let Some(mut c) = Carousel::builder().items(3).indicators(2).build() else {
        panic!("carousel disabled");
    };
    let strip = FakeStrip::with_centers(200.0, &[0.0, 100.0, 200.0]);
    let token = c.on_scroll();
    c.on_settle(token, &strip);
    assert_eq!(c.current_index(), 1);
}

// =============================================================
// Overflow-aware indicators
// =============================================================

#[test]
fn overflow_aware_hides_indicators_when_content_fits() {
    let Some(mut c) = Carousel::builder().items(2).indicators(2).overflow_aware(true).build() else {
        panic!("carousel disabled");
    };
    // Two 80px items in a 200px container.
    let strip = FakeStrip::with_centers(100.0, &[40.0, 120.0]);
    assert_eq!(
        c.mount(&strip),
        vec![CarouselAction::SyncIndicators { active: 0 }, CarouselAction::ShowIndicators(false)]
    );
}

#[test]
fn overflow_aware_shows_indicators_when_content_overflows() {
    let Some(c) = Carousel::builder().items(4).indicators(4).overflow_aware(true).build() else {
        panic!("carousel disabled");
    };
    // Four 80px items in a 200px container.
    let strip = FakeStrip::with_centers(100.0, &[40.0, 120.0, 200.0, 280.0]);
    assert_eq!(c.on_resize(&strip), vec![CarouselAction::ShowIndicators(true)]);
}

#[test]
fn exact_fit_counts_as_no_overflow() {
    let Some(c) = Carousel::builder().items(2).indicators(2).overflow_aware(true).build() else {
        panic!("carousel disabled");
    };
    let mut strip = FakeStrip::with_centers(100.0, &[40.0, 120.0]);
    strip.content_width = strip.container.width;
    assert_eq!(c.on_resize(&strip), vec![CarouselAction::ShowIndicators(false)]);
}

#[test]
fn plain_carousel_ignores_resize() {
    let Some(c) = carousel(4) else { panic!("carousel disabled") };
    assert!(!c.is_overflow_aware());
    let strip = FakeStrip::with_centers(100.0, &[40.0, 120.0, 200.0, 280.0]);
    assert!(c.on_resize(&strip).is_empty());
}
