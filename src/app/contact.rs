use leptos::{either::Either, html, prelude::*};

use super::entrance::use_entrance;
use crate::anim::profiles;
use crate::contact::{ContactForm, Field, FieldErrors};
use crate::content::CONTACT_DETAILS;

#[component]
pub fn Contact() -> impl IntoView {
    let profile = profiles::contact();
    let title_style = profile.pre_entry_style(".contact-title");
    let info_style = profile.pre_entry_style(".contact-info");
    let form_style = profile.pre_entry_style(".contact-form");
    let section_ref = NodeRef::<html::Section>::new();
    use_entrance(section_ref, profile);

    view! {
        <section id="contact" node_ref=section_ref class="bg-zinc-800 py-20">
            <div class="container mx-auto px-4">
                <h2
                    class="contact-title mb-16 text-center text-3xl font-bold text-emerald-500 md:text-4xl"
                    data-entrance=""
                    style=title_style
                >
                    "Get In Touch"
                </h2>
                <div class="grid gap-12 md:grid-cols-2">
                    <div class="contact-info" data-entrance="" style=info_style>
                        <h3 class="mb-6 text-2xl font-bold">"Contact Information"</h3>
                        <p class="mb-8 text-gray-300">
                            "Feel free to reach out to me for any inquiries or opportunities. I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
                        </p>
                        <div class="space-y-6">
                            {CONTACT_DETAILS
                                .iter()
                                .map(|detail| {
                                    view! {
                                        <div class="flex items-start">
                                            <div class="mr-4 flex h-10 w-10 items-center justify-center rounded-full bg-emerald-500/10 text-emerald-500">
                                                <i class=detail.icon />
                                            </div>
                                            <div>
                                                <h4 class="font-medium">{detail.label}</h4>
                                                {match detail.href {
                                                    Some(href) => {
                                                        Either::Left(
                                                            view! {
                                                                <a href=href class="text-gray-400 hover:text-emerald-400">
                                                                    {detail.value}
                                                                </a>
                                                            },
                                                        )
                                                    }
                                                    None => {
                                                        Either::Right(
                                                            view! { <p class="text-gray-400">{detail.value}</p> },
                                                        )
                                                    }
                                                }}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="contact-form" data-entrance="" style=form_style>
                        <ContactFormView />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.try_update(|f| f.submit());
        match result {
            Some(Ok(ack)) => {
                errors.set(FieldErrors::default());
                if let Err(err) = window().alert_with_message(ack) {
                    log::debug!("couldn't show acknowledgement: {err:?}");
                }
            }
            Some(Err(field_errors)) => errors.set(field_errors),
            None => {}
        }
    };

    view! {
        <form class="space-y-6" on:submit=on_submit novalidate=true>
            {Field::ALL
                .into_iter()
                .map(|field| view! { <FormField field=field form=form errors=errors /> })
                .collect_view()}
            <button
                type="submit"
                class="w-full rounded-md bg-emerald-600 px-4 py-2 font-medium hover:bg-emerald-700"
            >
                "Send Message"
            </button>
        </form>
    }
}

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let id = format!("contact-{}", field.label().to_lowercase());
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set(field, value));
        // once a field has been flagged, re-check it as the user types
        if errors.with_untracked(|e| e.get(field).is_some()) {
            let still_bad = form.with_untracked(|f| f.check(field).is_err());
            if !still_bad {
                errors.update(|e| e.clear(field));
            }
        }
    };
    let message = move || errors.with(|e| e.get(field).map(ToString::to_string));
    let input_class = "w-full rounded-md border border-zinc-700 bg-zinc-900 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-emerald-500";

    view! {
        <div class="space-y-2">
            <label for=id.clone() class="text-sm font-medium">
                {field.label()}
            </label>
            {if field == Field::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            class=format!("{input_class} min-h-[120px] resize-none")
                            placeholder=field.placeholder()
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=id
                            type=if field == Field::Email { "email" } else { "text" }
                            class=input_class
                            placeholder=field.placeholder()
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
            {move || message().map(|m| view! { <p class="text-sm text-red-400">{m}</p> })}
        </div>
    }
}
