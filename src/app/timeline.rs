use leptos::{html, prelude::*};

use super::entrance::use_entrance;
use crate::anim::profiles;
use crate::content::{EntryKind, TIMELINE};

#[component]
pub fn Timeline() -> impl IntoView {
    let profile = profiles::timeline();
    let title_style = profile.pre_entry_style(".timeline-title");
    let item_style = profile.pre_entry_style(".timeline-item");
    let line_style = profile.pre_entry_style(".timeline-line");
    let section_ref = NodeRef::<html::Section>::new();
    use_entrance(section_ref, profile);

    view! {
        <section id="timeline" node_ref=section_ref class="bg-zinc-900 py-20">
            <div class="container mx-auto px-4">
                <h2
                    class="timeline-title mb-16 text-center text-3xl font-bold text-emerald-500 md:text-4xl"
                    data-entrance=""
                    style=title_style
                >
                    "Education & Certifications"
                </h2>
                <div class="timeline-container relative mx-auto max-w-3xl">
                    <div
                        class="timeline-line absolute left-4 top-0 h-full w-0.5 origin-top bg-emerald-500 md:left-1/2 md:-ml-0.5"
                        data-entrance=""
                        style=line_style
                    ></div>
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let right = index % 2 == 0;
                            let (icon, badge) = match entry.kind {
                                EntryKind::Education => ("extra-book", "bg-blue-900/30 text-blue-400"),
                                EntryKind::Certificate => {
                                    ("extra-award", "bg-purple-900/30 text-purple-400")
                                }
                            };
                            view! {
                                <div
                                    class=if right {
                                        "timeline-item relative mb-12 md:mb-8 md:ml-auto md:pl-8 md:w-1/2"
                                    } else {
                                        "timeline-item relative mb-12 md:mb-8 md:mr-auto md:pr-8 md:w-1/2"
                                    }
                                    data-entrance=""
                                    style=item_style.clone()
                                >
                                    <div class="absolute top-0 left-0 -ml-4 flex h-8 w-8 items-center justify-center rounded-full border-4 border-emerald-500 bg-zinc-900 md:left-auto md:right-0">
                                        <i class=icon />
                                    </div>
                                    <div class=if right {
                                        "rounded-lg border border-zinc-700 bg-zinc-800 p-6 md:mr-8"
                                    } else {
                                        "rounded-lg border border-zinc-700 bg-zinc-800 p-6 md:ml-8"
                                    }>
                                        <span class=format!(
                                            "mb-2 inline-block rounded-full px-3 py-1 text-xs font-medium {badge}",
                                        )>{entry.kind.label()}</span>
                                        <h3 class="mb-1 text-xl font-bold">{entry.title}</h3>
                                        <h4 class="mb-2 text-emerald-400">{entry.subtitle}</h4>
                                        <p class="mb-2 text-sm text-gray-400">{entry.period}</p>
                                        <p class="text-gray-300">{entry.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
