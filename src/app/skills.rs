use leptos::{html, prelude::*};

use super::entrance::use_entrance;
use crate::anim::profiles;
use crate::content::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    let profile = profiles::skills();
    let title_style = profile.pre_entry_style(".skills-title");
    let card_style = profile.pre_entry_style(".skill-card");
    let section_ref = NodeRef::<html::Section>::new();
    use_entrance(section_ref, profile);

    view! {
        <section id="skills" node_ref=section_ref class="bg-zinc-900 py-20">
            <div class="container mx-auto px-4">
                <h2
                    class="skills-title mb-16 text-center text-3xl font-bold text-emerald-500 md:text-4xl"
                    data-entrance=""
                    style=title_style
                >
                    "Skills & Expertise"
                </h2>
                <div class="skills-grid grid gap-6 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div
                                    class="skill-card rounded-lg border border-zinc-700 bg-zinc-800 p-6 transition-colors duration-300 hover:border-emerald-500 hover:shadow-lg hover:shadow-emerald-500/10"
                                    data-entrance=""
                                    style=card_style.clone()
                                >
                                    <div class="mb-4 flex items-center">
                                        <i class=format!("{} text-3xl text-emerald-500", skill.icon) />
                                        <h3 class="ml-3 text-xl font-semibold">{skill.title}</h3>
                                    </div>
                                    <ul class="space-y-2">
                                        {skill
                                            .items
                                            .iter()
                                            .map(|item| view! { <li class="text-gray-300">{*item}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
