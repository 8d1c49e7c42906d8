mod about;
mod contact;
mod dom;
mod entrance;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;
mod timeline;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{FAVICON, OWNER, SOCIALS};
use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use timeline::Timeline;

/// Shown when scripts never run: entrance elements would otherwise stay hidden.
const NOSCRIPT_CSS: &str = "[data-entrance]{opacity:1 !important;transform:none !important}";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
                <MetaTags />
            </head>
            <body class="bg-zinc-900 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta
            name="description"
            content="Portfolio of Ishan Karki, Full Stack Developer from Kathmandu, Nepal."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Navbar />
        <main class="min-h-screen">
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Timeline />
            <Contact />
        </main>
        <Footer />
    }
}

/// The owner's social links. With a `style`, each link takes part in its
/// section's entrance and starts from that style.
#[component]
fn SocialLinks(class: &'static str, #[prop(optional, into)] style: Option<String>) -> impl IntoView {
    SOCIALS
        .iter()
        .map(|social| {
            let external = social.is_external();
            view! {
                <a
                    href=social.href
                    class=class
                    aria-label=social.label
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                    data-entrance=style.as_ref().map(|_| "")
                    style=style.clone().unwrap_or_default()
                >
                    <i class=social.icon() />
                </a>
            }
        })
        .collect_view()
}
