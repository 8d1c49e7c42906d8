use chrono::Datelike;
use leptos::{html, prelude::*};

use super::entrance::use_entrance;
use super::SocialLinks;
use crate::anim::profiles;
use crate::content::{OWNER, ROLE};

#[component]
pub fn Footer() -> impl IntoView {
    let profile = profiles::footer();
    let content_style = profile.pre_entry_style(".footer-content");
    let footer_ref = NodeRef::<html::Footer>::new();
    use_entrance(footer_ref, profile);

    let year = chrono::Utc::now().year();

    view! {
        <footer node_ref=footer_ref class="border-t border-zinc-800 bg-zinc-900 py-12">
            <div class="container mx-auto px-4">
                <div
                    class="footer-content flex flex-col items-center justify-between md:flex-row"
                    data-entrance=""
                    style=content_style
                >
                    <div class="mb-6 md:mb-0">
                        <a href="#" class="text-xl font-bold">
                            "Ishan"
                            <span class="text-emerald-500">"Karki"</span>
                        </a>
                        <p class="mt-2 text-gray-400">{ROLE}</p>
                    </div>
                    <div class="mb-6 flex space-x-6 md:mb-0">
                        <SocialLinks class="text-xl text-gray-400 transition-colors hover:text-emerald-400" />
                    </div>
                    <div class="text-center md:text-right">
                        <p class="text-sm text-gray-400">
                            {format!("© {year} {OWNER}. All rights reserved.")}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
