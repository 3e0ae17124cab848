//! Deferred image loading.

use web_sys::{Element, HtmlElement};

use motion::lazy::{ImageId, LazyAction, LazyImages};

use crate::dom;
use crate::error::DomError;
use crate::events::Listeners;
use crate::page::Ctx;

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    let selectors = &ctx.config.selectors;
    let source_attribute = selectors.lazy_source_attribute.clone();
    let mut tracker = LazyImages::new();
    let mut images: Vec<HtmlElement> = Vec::new();
    let mut ids: Vec<ImageId> = Vec::new();
    for image in dom::query_all(&ctx.document, &selectors.lazy_images)? {
        let Some(src) = image.get_attribute(&source_attribute) else {
            continue;
        };
        ids.push(tracker.register(src));
        images.push(image);
    }
    if images.is_empty() {
        return Ok(());
    }
    log::debug!("lazy: {} images deferred", tracker.pending());

    let elements = images.iter().map(|el| Element::from(el.clone())).collect::<Vec<_>>();
    listeners.observe(&elements, &ctx.config.lazy_root_margin, &[], move |index, intersecting, observer| {
        let Some(id) = ids.get(index).copied() else {
            return;
        };
        let Some(LazyAction::Load { image, src }) = tracker.on_visibility(id, intersecting) else {
            return;
        };
        let Some(el) = images.get(image.index()) else {
            return;
        };
        let loaded = el
            .set_attribute("src", &src)
            .and_then(|()| el.remove_attribute(&source_attribute));
        if let Err(err) = loaded {
            log::debug!("lazy: {}", DomError::from(err));
        }
        observer.unobserve(el);
    })
}
