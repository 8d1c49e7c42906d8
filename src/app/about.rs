use leptos::{html, prelude::*};

use super::entrance::use_entrance;
use crate::anim::profiles;
use crate::content::{ABOUT_PARAGRAPHS, CV_FILE_NAME, CV_PATH, OWNER, PORTRAIT};

#[component]
pub fn About() -> impl IntoView {
    let profile = profiles::about();
    let title_style = profile.pre_entry_style(".section-title");
    let content_style = profile.pre_entry_style(".about-content");
    let image_style = profile.pre_entry_style(".about-image");
    let section_ref = NodeRef::<html::Section>::new();
    use_entrance(section_ref, profile);

    view! {
        <section id="about" node_ref=section_ref class="bg-zinc-800 py-20">
            <div class="container mx-auto px-4">
                <h2
                    class="section-title mb-16 text-center text-3xl font-bold text-emerald-500 md:text-4xl"
                    data-entrance=""
                    style=title_style
                >
                    "About Me"
                </h2>
                <div class="grid gap-12 md:grid-cols-2">
                    <div
                        class="about-content flex flex-col justify-center"
                        data-entrance=""
                        style=content_style
                    >
                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|p| view! { <p class="mb-6 text-lg text-gray-300">{*p}</p> })
                            .collect_view()}
                        <a
                            href=CV_PATH
                            download=CV_FILE_NAME
                            class="mt-4 flex w-fit items-center gap-2 rounded-md bg-emerald-600 px-4 py-2 font-medium hover:bg-emerald-700"
                        >
                            <i class="extra-download" />
                            "Download CV"
                        </a>
                    </div>
                    <div
                        class="about-image flex items-center justify-center"
                        data-entrance=""
                        style=image_style
                    >
                        <div class="relative h-80 w-80 overflow-hidden rounded-full border-4 border-emerald-500">
                            <img src=PORTRAIT alt=OWNER class="h-full w-full object-cover" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
