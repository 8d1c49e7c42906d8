use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::{html, prelude::*};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::dom::IntervalTicker;
use super::entrance::use_entrance;
use super::SocialLinks;
use crate::anim::{
    profiles, run_scramble, RevealRate, ScrambleTask, TextScramble, TickGuard, UPPERCASE,
};
use crate::content::{CV_FILE_NAME, CV_PATH, HEADLINE, ROLE};

const SCRAMBLE_TICK: Duration = Duration::from_millis(30);

#[component]
pub fn Hero() -> impl IntoView {
    let profile = profiles::hero();
    let title_style = profile.pre_entry_style(".hero-title");
    let subtitle_style = profile.pre_entry_style(".hero-subtitle");
    let description_style = profile.pre_entry_style(".hero-description");
    let button_style = profile.pre_entry_style(".hero-button");
    let social_style = profile.pre_entry_style(".hero-social");
    let section_ref = NodeRef::<html::Section>::new();
    use_entrance(section_ref, profile);

    let headline = use_scrambled(HEADLINE);

    view! {
        <section
            id="home"
            node_ref=section_ref
            class="relative flex min-h-screen items-center justify-center overflow-hidden bg-zinc-900 pt-16"
        >
            <div class="absolute inset-0 z-0">
                <div class="grid-pattern absolute inset-0 opacity-10"></div>
            </div>
            <div class="container relative z-10 mx-auto px-4 py-16 text-center md:py-32">
                <h1
                    class="hero-title mb-4 text-4xl font-bold tracking-tight md:text-6xl lg:text-7xl"
                    data-entrance=""
                    style=title_style
                >
                    "Hi, I'm "
                    <span class="text-emerald-500">{headline}</span>
                </h1>
                <h2
                    class="hero-subtitle mb-6 text-xl font-medium text-gray-300 md:text-2xl"
                    data-entrance=""
                    style=subtitle_style
                >
                    {ROLE}
                </h2>
                <p
                    class="hero-description mx-auto mb-8 max-w-2xl text-gray-400"
                    data-entrance=""
                    style=description_style
                >
                    "An aspiring IT enthusiast from Kathmandu, Nepal. I'm eagerly seeking internship opportunities to apply and expand my skills in web development."
                </p>
                <div class="mb-12 flex flex-wrap justify-center gap-4">
                    <a
                        href="#contact"
                        class="hero-button rounded-md bg-emerald-600 px-6 py-3 font-medium hover:bg-emerald-700"
                        data-entrance=""
                        style=button_style.clone()
                    >
                        "Get In Touch"
                    </a>
                    <a
                        href=CV_PATH
                        download=CV_FILE_NAME
                        class="hero-button flex items-center gap-2 rounded-md border border-zinc-600 px-6 py-3 font-medium hover:bg-zinc-800"
                        data-entrance=""
                        style=button_style.clone()
                    >
                        <i class="extra-download" />
                        "Download CV"
                    </a>
                    <a
                        href="#projects"
                        class="hero-button rounded-md border border-zinc-600 px-6 py-3 font-medium hover:bg-zinc-800"
                        data-entrance=""
                        style=button_style
                    >
                        "View Projects"
                    </a>
                </div>
                <div class="flex justify-center space-x-6">
                    <SocialLinks
                        class="hero-social text-2xl text-gray-400 transition-colors hover:text-white"
                        style=social_style
                    />
                </div>
                <div class="absolute bottom-10 left-1/2 -translate-x-1/2">
                    <div class="scroll-indicator flex flex-col items-center">
                        <span class="mb-2 text-sm text-gray-400">"Scroll Down"</span>
                        <i class="extra-arrow-down text-emerald-500" />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Text that scrambles into `source` once mounted; the interval is cleared on unmount.
fn use_scrambled(source: &'static str) -> ReadSignal<String> {
    let (text, set_text) = signal(source.to_string());
    let guard = StoredValue::new_local(None::<TickGuard>);

    Effect::new(move |_| {
        let scramble = TextScramble::new(source, UPPERCASE, RevealRate::ONE_THIRD);
        let sink = move |frame: &str| {
            let _ = set_text.try_set(frame.to_string());
        };
        let task = Rc::new(RefCell::new(ScrambleTask::new(
            scramble,
            sink,
            StdRng::from_entropy(),
        )));
        match run_scramble(&IntervalTicker, SCRAMBLE_TICK, task) {
            Ok(tick) => guard.set_value(Some(tick)),
            Err(err) => {
                log::debug!("scramble disabled: {err}");
                set_text.set(source.to_string());
            }
        }
    });
    on_cleanup(move || {
        let _ = guard.try_update_value(Option::take);
    });

    text
}
