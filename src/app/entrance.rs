use leptos::html::ElementType;
use leptos::prelude::*;
use leptos_use::core::IntoElementsMaybeSignal;
use leptos_use::{
    js, use_intersection_observer_with_options, use_media_query, use_supported,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};
use wasm_bindgen::JsCast;

use super::dom::{CssTransitionEngine, SectionRoot};
use crate::anim::{SectionEntrance, SectionProfile};

/// Run `profile`'s entrance on the element behind `root`, once per mount.
///
/// Elements carry their pre-entry style from the server render, and the mount
/// effect re-applies it before anything can be observed. Sections with
/// [`Trigger::Visible`](crate::anim::Trigger::Visible) fire on first
/// intersection; the rest fire on mount.
pub fn use_entrance<E, M>(root: NodeRef<E>, profile: SectionProfile)
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
    NodeRef<E>: IntoElementsMaybeSignal<web_sys::Element, M>,
    M: 'static,
{
    let entrance = StoredValue::new_local(SectionEntrance::new(profile));
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    let observer_supported = use_supported(|| js!("IntersectionObserver" in &window()));
    let engine = move || CssTransitionEngine::new(!reduced_motion.get_untracked());

    let observed = entrance.with_value(|e| e.handle().map(|h| h.options().clone()));
    if let Some(options) = observed {
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            root,
            move |entries, _| {
                let Some(section) = root.get_untracked().map(SectionRoot::of) else {
                    return;
                };
                let batch = entries
                    .iter()
                    .map(|e| (e.intersection_ratio(), e.is_intersecting()))
                    .collect::<Vec<_>>();
                entrance.update_value(|e| {
                    e.observe(batch, &section, &engine());
                });
            },
            UseIntersectionObserverOptions::default()
                .thresholds(vec![options.threshold])
                .root_margin(options.root_margin),
        );
        entrance.update_value(|e| e.set_release(move || stop()));
    }

    Effect::new(move |_| {
        let Some(section) = root.get().map(SectionRoot::of) else {
            return;
        };
        let supported = observer_supported.get_untracked();
        entrance.update_value(|e| {
            if e.observes() && !supported {
                log::info!("IntersectionObserver unsupported, showing content");
            }
            e.mount(&section, &engine(), supported);
        });
    });
}
