use leptos::prelude::*;

use super::{
    homepage::{PageSection, SECTION_HEADING},
    observers::scroll_to_section,
};
use crate::{
    catalog,
    presentation::{starfield, Presentation, STAR_COUNT},
    section::SectionId,
    theme::{SectionTone, Theme},
};

#[component]
pub fn Hero(presentation: Memo<Presentation>) -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();
    let profile = catalog::profile();

    let stars = starfield(STAR_COUNT)
        .into_iter()
        .map(move |star| {
            view! { <div class=move || theme.get().star_class() style=star.style()></div> }
        })
        .collect_view();

    view! {
        <PageSection id=SectionId::Hero tone=SectionTone::Hero>
            <div class="absolute inset-0">
                <div class=move || theme.get().hero_backdrop_class()></div>
                {stars}
            </div>

            <div
                class="absolute inset-0 opacity-10"
                style:transform=move || presentation.get().backdrop_transform()
            >
                <div class="w-96 h-96 bg-gradient-to-r from-purple-500 to-pink-500 rounded-full blur-3xl absolute top-20 left-20"></div>
                <div class="w-64 h-64 bg-gradient-to-r from-blue-500 to-cyan-500 rounded-full blur-3xl absolute bottom-20 right-20"></div>
            </div>

            <div class="text-center z-10 px-6">
                <div
                    class="transition-all duration-1000 ease-out"
                    style:transform=move || presentation.get().headline_transform()
                >
                    <h1 class="text-4xl md:text-7xl font-bold mb-6 leading-tight">
                        <span class="block bg-gradient-to-r from-purple-400 via-pink-400 to-cyan-400 bg-clip-text text-transparent animate-pulse">
                            {profile.name}
                        </span>
                        <span class=move || {
                            format!("block {}", theme.get().heading_class())
                        }>{profile.role}</span>
                    </h1>
                    <p class=move || {
                        format!("text-xl md:text-2xl mb-8 max-w-2xl mx-auto {}", theme.get().body_text_class())
                    }>{profile.tagline}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            class="px-8 py-4 bg-gradient-to-r from-purple-500 to-pink-500 rounded-full text-white font-semibold hover:from-purple-600 hover:to-pink-600 hover:scale-105 transition-all duration-300 flex items-center justify-center group"
                            on:click=move |_| scroll_to_section(SectionId::Projects.as_str())
                        >
                            "View My Work"
                            <span class="ml-2 group-hover:translate-x-1 transition-transform duration-300">
                                "→"
                            </span>
                        </button>
                        <a
                            href=profile.resume_path
                            download=profile.resume_download
                            class="px-8 py-4 border-2 border-purple-400 rounded-full text-purple-400 font-semibold hover:bg-purple-400 hover:text-white hover:scale-105 transition-all duration-300 flex items-center justify-center"
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce text-3xl text-purple-400">
                "⌄"
            </div>
        </PageSection>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();
    let profile = catalog::profile();

    let paragraphs = profile
        .about
        .iter()
        .map(move |text| {
            view! {
                <p class=move || {
                    format!("text-lg mb-6 leading-relaxed {}", theme.get().body_text_class())
                }>{*text}</p>
            }
        })
        .collect_view();

    let stats = catalog::stats()
        .iter()
        .map(move |stat| {
            view! {
                <div class="text-center">
                    <div class=format!("text-3xl font-bold {}", stat.accent)>{stat.value}</div>
                    <div class=move || theme.get().muted_text_class()>{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    let bars = catalog::skills()
        .iter()
        .map(|skill| {
            view! {
                <div class="group cursor-pointer">
                    <div class="flex justify-between mb-2">
                        <div class="flex items-center">
                            <i class=format!("{} w-5 h-5 mr-2 text-purple-400", skill.icon.class())>
                                {skill.icon.glyph()}
                            </i>
                            <span class="font-medium">{skill.name}</span>
                        </div>
                        <span class="text-purple-400 font-semibold">{format!("{}%", skill.level)}</span>
                    </div>
                    <div class="w-full bg-gray-700 rounded-full h-2 overflow-hidden">
                        <div
                            class=format!("h-full bg-gradient-to-r {} rounded-full transition-all duration-1000 ease-out group-hover:animate-pulse", skill.gradient)
                            style=skill.width_style()
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageSection id=SectionId::About tone=SectionTone::Plain>
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class=SECTION_HEADING>"About Me"</h2>
                        {paragraphs}
                        <div class="flex space-x-6">{stats}</div>
                    </div>
                    <div class="relative">
                        <div class="w-full bg-gradient-to-br from-purple-500/20 to-pink-500/20 rounded-2xl backdrop-blur-sm border border-gray-700 p-8">
                            <div class="space-y-4">{bars}</div>
                        </div>
                    </div>
                </div>
            </div>
        </PageSection>
    }
}
