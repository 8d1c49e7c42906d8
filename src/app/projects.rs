use leptos::{html, prelude::*};

use super::entrance::use_entrance;
use crate::anim::profiles;
use crate::content::{Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    let profile = profiles::projects();
    let title_style = profile.pre_entry_style(".projects-title");
    let card_style = profile.pre_entry_style(".project-card");
    let section_ref = NodeRef::<html::Section>::new();
    use_entrance(section_ref, profile);

    view! {
        <section id="projects" node_ref=section_ref class="bg-zinc-800 py-20">
            <div class="container mx-auto px-4">
                <h2
                    class="projects-title mb-16 text-center text-3xl font-bold text-emerald-500 md:text-4xl"
                    data-entrance=""
                    style=title_style
                >
                    "My Projects"
                </h2>
                <div class="projects-grid grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let eager = index < 3;
                            view! { <ProjectCard project=*project eager=eager style=card_style.clone() /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, eager: bool, style: String) -> impl IntoView {
    view! {
        <div
            class="project-card overflow-hidden rounded-lg border border-zinc-700 bg-zinc-900 transition-colors duration-300 hover:border-emerald-500 hover:shadow-lg hover:shadow-emerald-500/10"
            data-entrance=""
            style=style
        >
            <div class="relative h-48 w-full">
                <img
                    src=project.image
                    alt=project.title
                    loading=if eager { "eager" } else { "lazy" }
                    class="h-full w-full object-cover"
                />
                {project
                    .in_progress
                    .then(|| {
                        view! {
                            <div class="absolute right-2 top-2 rounded-full bg-emerald-500 px-3 py-1 text-xs font-medium text-black">
                                "In Progress"
                            </div>
                        }
                    })}
            </div>
            <div class="p-6">
                <h3 class="mb-2 text-xl font-bold">{project.title}</h3>
                <p class="mb-4 text-gray-400">{project.description}</p>
                <div class="mb-4 flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-full bg-zinc-800 px-3 py-1 text-xs font-medium text-emerald-400">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-3">
                    <a
                        href=project.demo_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center rounded-md border border-zinc-600 px-3 py-1.5 text-sm hover:bg-zinc-800"
                    >
                        <i class="extra-link mr-2" />
                        "Demo"
                    </a>
                    <a
                        href=project.github_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center rounded-md border border-zinc-600 px-3 py-1.5 text-sm hover:bg-zinc-800"
                    >
                        <i class="devicon-github-plain mr-2" />
                        "Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
