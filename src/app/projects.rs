use leptos::prelude::*;

use super::homepage::{PageSection, SECTION_HEADING};
use crate::{
    catalog::{self, Project, SkillEntry},
    section::SectionId,
    theme::{SectionTone, Theme},
};

#[component]
pub fn Projects() -> impl IntoView {
    let cards = catalog::projects()
        .iter()
        .map(|project| view! { <ProjectCard project /> })
        .collect_view();

    view! {
        <PageSection id=SectionId::Projects tone=SectionTone::Banded>
            <div class="max-w-7xl mx-auto">
                <h2 class=SECTION_HEADING>"Featured Projects"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
            </div>
        </PageSection>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();

    let tags = project
        .tech
        .iter()
        .map(move |tech| view! { <span class=move || theme.get().tag_class()>{*tech}</span> })
        .collect_view();

    view! {
        <div class=move || {
            format!(
                "group {} rounded-2xl overflow-hidden border transition-all duration-500 hover:scale-105 shadow-lg",
                theme.get().card_class(),
            )
        }>
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent"></div>
                <div class="absolute top-4 right-4">
                    <div class="bg-purple-500 text-white px-3 py-1 rounded-full text-sm font-semibold">
                        {project.category}
                    </div>
                </div>
            </div>
            <div class="p-6">
                <h3 class=move || {
                    format!(
                        "text-xl font-bold mb-3 group-hover:text-purple-400 transition-colors duration-300 {}",
                        theme.get().heading_class(),
                    )
                }>{project.title}</h3>
                <p class=move || {
                    format!("mb-4 text-sm leading-relaxed {}", theme.get().body_text_class())
                }>{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">{tags}</div>
                <div class=move || {
                    format!(
                        "flex items-center space-x-4 mb-4 text-sm {}",
                        theme.get().muted_text_class(),
                    )
                }>
                    <span title="Views">{format!("👁 {}", project.stats.views)}</span>
                    <span title="Stars">{format!("★ {}", project.stats.stars)}</span>
                    <span title="Users">{format!("👥 {}", project.stats.users)}</span>
                </div>
                <div class="flex space-x-4">
                    <a
                        href=project.code_url
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="View GitHub repository"
                        class="flex items-center text-purple-400 hover:text-purple-300 transition-colors duration-300"
                    >
                        <i class="devicon-github-plain mr-2"></i>
                        "Code"
                    </a>
                    <a
                        href=project.demo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="View live demo"
                        class="flex items-center text-pink-400 hover:text-pink-300 transition-colors duration-300"
                    >
                        "Live Demo ↗"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let cards = catalog::skills()
        .iter()
        .map(|skill| view! { <SkillCard skill /> })
        .collect_view();

    view! {
        <PageSection id=SectionId::Skills tone=SectionTone::Plain>
            <div class="max-w-6xl mx-auto text-center">
                <h2 class=SECTION_HEADING>"Skills & Expertise"</h2>
                <div class="grid gap-8 justify-center sm:grid-cols-2 lg:grid-cols-3">{cards}</div>
            </div>
        </PageSection>
    }
}

#[component]
fn SkillCard(skill: &'static SkillEntry) -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();

    view! {
        <div class=move || {
            format!(
                "{} p-8 rounded-2xl border transition-all duration-500 hover:scale-105 group cursor-pointer shadow-lg",
                theme.get().card_class(),
            )
        }>
            <div class=format!(
                "w-16 h-16 mx-auto mb-4 rounded-full bg-gradient-to-r {} flex items-center justify-center group-hover:animate-spin",
                skill.gradient,
            )>
                <i class=format!("{} text-2xl text-white", skill.icon.class())>{skill.icon.glyph()}</i>
            </div>
            <h3 class=move || {
                format!("text-xl font-semibold mb-4 {}", theme.get().heading_class())
            }>{skill.name}</h3>
            <div class=move || theme.get().track_class()>
                <div
                    class=format!(
                        "h-full bg-gradient-to-r {} rounded-full transition-all duration-1000 ease-out",
                        skill.gradient,
                    )
                    style=skill.width_style()
                ></div>
            </div>
            <span class="text-purple-400 font-semibold">{format!("{}%", skill.level)}</span>
        </div>
    }
}
