//! In-page anchor links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id named by a fragment link, or `None` for a bare `#` or a
/// non-fragment href.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll offset that lands `target_top` just below the sticky navbar.
#[must_use]
pub fn scroll_target(target_top: f64, navbar_height: f64, gap: f64) -> f64 {
    target_top - navbar_height - gap
}
