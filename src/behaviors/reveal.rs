//! Reveal-on-scroll for feature cards, workflow steps, and hero blocks.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use motion::reveal::{RevealAction, RevealKind, Revealer, TargetId};

use crate::dom;
use crate::error::DomError;
use crate::events::{self, Listeners};
use crate::page::Ctx;

const ANIMATE_IN_CLASS: &str = "animate-in";
const VISIBLE_CLASS: &str = "visible";
const ANIMATED_CLASS: &str = "animated";

struct RevealScene {
    targets: Vec<HtmlElement>,
    children: Vec<Vec<HtmlElement>>,
}

fn apply(state: &Rc<RefCell<Revealer>>, scene: &Rc<RevealScene>, actions: Vec<RevealAction>) {
    for action in actions {
        match action {
            RevealAction::MarkVisible { target } => {
                if let Some(el) = scene.targets.get(target.index()) {
                    dom::set_class(el, VISIBLE_CLASS, true);
                    dom::set_class(el, ANIMATED_CLASS, true);
                }
            }
            RevealAction::RevealChild { target, child, delay_ms } => {
                if let Some(el) = scene.children.get(target.index()).and_then(|slots| slots.get(child)) {
                    let delay = format!("{}s", f64::from(delay_ms) / 1000.0);
                    dom::set_style(el, "transition-delay", &delay);
                    dom::set_class(el, VISIBLE_CLASS, true);
                }
            }
            RevealAction::ScheduleReapply { target, after_ms } => {
                let state = Rc::clone(state);
                let scene = Rc::clone(scene);
                events::after(after_ms, move || {
                    let again = state.borrow().reapply(target);
                    apply(&state, &scene, again);
                });
            }
        }
    }
}

pub fn mount(ctx: &Ctx, listeners: &mut Listeners) -> Result<(), DomError> {
    let config = &ctx.config;
    let selectors = &config.selectors;
    let targets = dom::query_all(&ctx.document, &selectors.reveal_targets)?;
    if targets.is_empty() {
        log::debug!("reveal: no targets");
        return Ok(());
    }

    let mut revealer = Revealer::new(config.reveal_options(), config.reveal_stagger_ms, config.workflow_reapply_ms);
    let mut ids: Vec<TargetId> = Vec::with_capacity(targets.len());
    let mut children = Vec::with_capacity(targets.len());
    for target in &targets {
        dom::set_class(target, ANIMATE_IN_CLASS, true);
        let slots = dom::query_within(target, &selectors.reveal_children)?;
        let kind = if target.class_list().contains(&selectors.workflow_step_class) {
            RevealKind::WorkflowStep { has_icon: target.query_selector(&selectors.step_icon)?.is_some() }
        } else {
            RevealKind::Plain
        };
        ids.push(revealer.register(kind, slots.len()));
        children.push(slots);
    }

    let options = revealer.options().clone();
    let elements = targets.iter().map(|el| Element::from(el.clone())).collect::<Vec<_>>();
    let state = Rc::new(RefCell::new(revealer));
    let scene = Rc::new(RevealScene { targets, children });

    listeners.observe(&elements, &options.root_margin, &options.thresholds, move |index, intersecting, _| {
        let Some(id) = ids.get(index).copied() else {
            return;
        };
        let actions = state.borrow_mut().on_visibility(id, intersecting);
        apply(&state, &scene, actions);
    })
}
