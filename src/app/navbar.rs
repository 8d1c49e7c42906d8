use leptos::{either::Either, html, prelude::*};
use leptos_use::use_window_scroll;

use super::entrance::use_entrance;
use crate::anim::profiles;
use crate::content::NAV_ITEMS;

const SCROLLED_AFTER: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let profile = profiles::navbar();
    let item_style = profile.pre_entry_style(".nav-item");
    let header_ref = NodeRef::<html::Header>::new();
    use_entrance(header_ref, profile);

    let (is_open, set_is_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_AFTER;

    view! {
        <header
            node_ref=header_ref
            class=move || {
                if scrolled() {
                    "fixed top-0 z-50 w-full transition-all duration-300 bg-zinc-900/90 backdrop-blur-md"
                } else {
                    "fixed top-0 z-50 w-full transition-all duration-300 bg-transparent"
                }
            }
        >
            <div class="container mx-auto px-4">
                <div class="flex h-16 items-center justify-between">
                    <a href="#" class="text-xl font-bold">
                        "Ishan"
                        <span class="text-emerald-500">"Karki"</span>
                    </a>
                    <nav class="hidden md:block">
                        <ul class="flex space-x-8">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="nav-item" data-entrance="" style=item_style.clone()>
                                            <a
                                                href=item.href
                                                class="text-sm font-medium text-gray-300 transition-colors hover:text-emerald-400"
                                            >
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                    <button
                        class="md:hidden p-2 rounded-md hover:bg-zinc-800"
                        aria-label="Toggle Menu"
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if is_open.get() {
                                Either::Left(view! { <i class="extra-close text-2xl" /> })
                            } else {
                                Either::Right(view! { <i class="extra-menu text-2xl" /> })
                            }
                        }}
                    </button>
                </div>
            </div>
            <Show when=move || is_open.get()>
                <div class="absolute left-0 top-16 z-50 w-full bg-zinc-900/95 backdrop-blur-md md:hidden">
                    <nav class="container mx-auto px-4 py-4">
                        <ul class="flex flex-col space-y-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a
                                                href=item.href
                                                class="block py-2 text-gray-300 transition-colors hover:text-emerald-400"
                                                on:click=move |_| set_is_open.set(false)
                                            >
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                </div>
            </Show>
        </header>
    }
}
