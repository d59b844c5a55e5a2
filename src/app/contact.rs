use leptos::{ev::SubmitEvent, prelude::*};

use super::homepage::{PageSection, SECTION_HEADING};
use crate::{
    catalog,
    contact::{Acknowledgement, ContactField, ContactForm},
    section::SectionId,
    theme::{SectionTone, Theme},
};

#[component]
pub fn Contact() -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();
    let profile = catalog::profile();
    let form = RwSignal::new(ContactForm::default());
    let (ack, set_ack) = signal(None::<Acknowledgement>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(ack) = form.try_update(ContactForm::submit) {
            set_ack.set(Some(ack));
        }
    };

    let edit = move |field: ContactField, text: String| {
        set_ack.set(None);
        form.update(|f| f.set(field, text));
    };
    let value = move |field: ContactField| form.with(|f| f.get(field).to_string());

    let socials = catalog::social_links()
        .iter()
        .map(move |link| {
            view! {
                <a
                    href=link.url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.aria_label()
                    class=move || theme.get().social_class()
                >
                    <i class=format!("{} text-2xl group-hover:animate-pulse", link.icon.class())>
                        {link.icon.glyph()}
                    </i>
                </a>
            }
        })
        .collect_view();

    view! {
        <PageSection id=SectionId::Contact tone=SectionTone::Plain>
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class=SECTION_HEADING>"Let's Create Something Amazing"</h2>
                    <p class=move || {
                        format!("text-xl mb-8 max-w-2xl mx-auto {}", theme.get().body_text_class())
                    }>
                        "Ready to bring your vision to life? Let's collaborate and create extraordinary digital experiences together."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-12 items-start">
                    <form
                        on:submit=on_submit
                        class=move || {
                            format!(
                                "{} p-8 rounded-2xl border shadow-lg",
                                theme.get().card_class(),
                            )
                        }
                    >
                        <h3 class=move || {
                            format!("text-2xl font-bold mb-6 {}", theme.get().heading_class())
                        }>"Send Message"</h3>
                        <FormField field=ContactField::Name label="Your Name">
                            <input
                                type="text"
                                id=ContactField::Name.key()
                                name=ContactField::Name.key()
                                required=true
                                placeholder="Enter your name"
                                class=move || theme.get().input_class()
                                prop:value=move || value(ContactField::Name)
                                on:input=move |ev| edit(ContactField::Name, event_target_value(&ev))
                            />
                        </FormField>
                        <FormField field=ContactField::Email label="Email Address">
                            <input
                                type="email"
                                id=ContactField::Email.key()
                                name=ContactField::Email.key()
                                required=true
                                placeholder="Enter your email"
                                class=move || theme.get().input_class()
                                prop:value=move || value(ContactField::Email)
                                on:input=move |ev| edit(ContactField::Email, event_target_value(&ev))
                            />
                        </FormField>
                        <FormField field=ContactField::Message label="Message">
                            <textarea
                                id=ContactField::Message.key()
                                name=ContactField::Message.key()
                                required=true
                                rows="5"
                                placeholder="Tell me about your project or just say hello!"
                                class=move || format!("{} resize-none", theme.get().input_class())
                                prop:value=move || value(ContactField::Message)
                                on:input=move |ev| edit(ContactField::Message, event_target_value(&ev))
                            ></textarea>
                        </FormField>
                        <button
                            type="submit"
                            class="w-full px-8 py-4 bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg text-white font-semibold hover:from-purple-600 hover:to-pink-600 hover:scale-105 transition-all duration-300 flex items-center justify-center"
                        >
                            "✉ Send Message"
                        </button>
                        {move || {
                            ack.get()
                                .map(|ack| {
                                    view! {
                                        <p role="status" class="mt-4 text-center text-green-400 font-medium">
                                            {ack.message()}
                                        </p>
                                    }
                                })
                        }}
                    </form>

                    <div class="space-y-8">
                        <div>
                            <h3 class=move || {
                                format!("text-2xl font-bold mb-6 {}", theme.get().heading_class())
                            }>"Get In Touch"</h3>
                            <p class=move || {
                                format!("mb-6 leading-relaxed {}", theme.get().body_text_class())
                            }>
                                "I'm always excited to work on new projects and collaborate with creative minds. Whether you have a project in mind or just want to chat about technology, feel free to reach out!"
                            </p>
                            <ul class=move || format!("space-y-4 {}", theme.get().body_text_class())>
                                <li class="flex items-center">
                                    <span class="w-5 h-5 mr-3 text-purple-400">"✉"</span>
                                    <span>{profile.email}</span>
                                </li>
                                <li class="flex items-center">
                                    <span class="w-5 h-5 mr-3 flex items-center justify-center">
                                        <span class="w-2 h-2 bg-purple-400 rounded-full"></span>
                                    </span>
                                    <span>{profile.location}</span>
                                </li>
                                <li class="flex items-center">
                                    <span class="w-5 h-5 mr-3 flex items-center justify-center">
                                        <span class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></span>
                                    </span>
                                    <span>{profile.availability}</span>
                                </li>
                            </ul>
                        </div>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <a
                                href=profile.resume_path
                                download=profile.resume_download
                                class="px-6 py-3 border-2 border-purple-400 rounded-lg text-purple-400 font-semibold hover:bg-purple-400 hover:text-white hover:scale-105 transition-all duration-300 flex items-center justify-center"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="mt-16 flex justify-center space-x-6">{socials}</div>
            </div>
        </PageSection>
    }
}

#[component]
fn FormField(field: ContactField, label: &'static str, children: Children) -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();

    view! {
        <div class="mb-6">
            <label
                for=field.key()
                class=move || {
                    format!("block text-sm font-medium mb-2 {}", theme.get().body_text_class())
                }
            >
                {label}
            </label>
            {children()}
        </div>
    }
}
