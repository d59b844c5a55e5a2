use leptos::prelude::*;

use super::observers::{scroll_to_section, ActiveSection};
use crate::{presentation::nav_link_class, section::SectionId, theme::Theme};

#[component]
pub fn Header(active: ActiveSection, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();

    let nav_links = SectionId::NAV
        .into_iter()
        .map(move |section| {
            view! {
                <button
                    class=move || nav_link_class(active.get(), section)
                    on:click=move |_| scroll_to_section(section.as_str())
                >
                    {section.label()}
                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-to-r from-purple-400 to-pink-400 group-hover:w-full transition-all duration-300"></span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || theme.get().nav_class()>
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <button
                        class="text-2xl font-bold bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent"
                        on:click=move |_| scroll_to_section(SectionId::Hero.as_str())
                    >
                        "Portfolio"
                    </button>
                    <div class="hidden md:flex space-x-8">{nav_links}</div>
                    <button
                        class=move || theme.get().toggle_class()
                        aria-label="Toggle theme"
                        title=move || theme.get().toggle_label()
                        on:click=move |_| set_theme.update(Theme::toggle)
                    >
                        <span aria-hidden="true">
                            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                        </span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
