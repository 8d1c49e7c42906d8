use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::anim::{
    AnimError, AnimationEngine, StyleTarget, TargetResolver, TickHandle, Ticker, Tween,
    VisualState,
};

impl StyleTarget for HtmlElement {
    fn apply(&self, state: &VisualState) {
        let style = self.style();
        // a failed write leaves the element as it was, which is the server-rendered style
        let _ = style.set_property("opacity", &state.opacity_css());
        let _ = style.set_property("transform", &state.transform());
    }
}

/// Slack after a tween's nominal end before its inline transition is removed.
const TRANSITION_GRACE: Duration = Duration::from_millis(50);

/// Resolves step selectors inside one section element.
pub struct SectionRoot {
    root: Element,
}

impl SectionRoot {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Wrap whatever element type a `NodeRef` produced.
    pub fn of<T: JsCast>(el: T) -> Self {
        Self::new(el.unchecked_into())
    }
}

impl TargetResolver for SectionRoot {
    type Target = HtmlElement;

    fn resolve(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.root.query_selector_all(selector) else {
            log::warn!("bad entrance selector: {selector}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

/// Animates through CSS transitions: the element is snapped to the tween's
/// start, the transition is armed, and the sequencer's settle write runs it.
#[derive(Debug, Clone, Copy)]
pub struct CssTransitionEngine {
    enabled: bool,
}

impl CssTransitionEngine {
    /// A disabled engine (e.g. the user prefers reduced motion) declines every tween.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl AnimationEngine<HtmlElement> for CssTransitionEngine {
    fn animate(&self, target: &HtmlElement, tween: &Tween) -> Result<(), AnimError> {
        if !self.enabled {
            return Err(AnimError::EngineUnavailable);
        }
        if !target.is_connected() {
            return Err(AnimError::TargetDetached);
        }
        let style = target.style();
        style
            .set_property("transition", "none")
            .map_err(|_| AnimError::EngineUnavailable)?;
        target.apply(&tween.from);
        // force a style flush so the transition starts from `from`
        let _ = target.offset_width();
        style
            .set_property("transition", &tween.transition_css())
            .map_err(|_| AnimError::EngineUnavailable)?;

        // hand the element's own hover transitions back once it has settled
        let settled = target.clone();
        set_timeout(
            move || {
                if let Err(err) = settled.style().remove_property("transition") {
                    log::debug!("couldn't clear entrance transition: {err:?}");
                }
            },
            tween.finishes_after() + TRANSITION_GRACE,
        );
        Ok(())
    }
}

/// Repeating ticks on `setInterval`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalTicker;

pub struct IntervalTick {
    handle: Rc<Cell<Option<IntervalHandle>>>,
}

impl TickHandle for IntervalTick {
    fn clear(&self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

impl Ticker for IntervalTicker {
    type Handle = IntervalTick;

    fn every(
        &self,
        period: Duration,
        tick: Box<dyn FnMut() -> ControlFlow<()>>,
    ) -> Result<IntervalTick, AnimError> {
        let slot = Rc::new(Cell::new(None::<IntervalHandle>));
        let stop = slot.clone();
        let tick = RefCell::new(tick);
        let handle = set_interval_with_handle(
            move || {
                let flow = {
                    let mut guard = tick.borrow_mut();
                    let tick = &mut *guard;
                    tick()
                };
                if flow.is_break() {
                    if let Some(handle) = stop.take() {
                        handle.clear();
                    }
                }
            },
            period,
        )
        .map_err(|err| AnimError::Scheduler(format!("{err:?}")))?;
        slot.set(Some(handle));
        Ok(IntervalTick { handle: slot })
    }
}
