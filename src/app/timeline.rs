use leptos::prelude::*;

use super::homepage::{PageSection, SECTION_HEADING};
use crate::{
    catalog::{self, TimelineEntry},
    presentation::TimelineSide,
    section::SectionId,
    theme::{SectionTone, Theme},
};

#[component]
pub fn Experience() -> impl IntoView {
    let rows = catalog::timeline()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            view! { <TimelineRow entry side=TimelineSide::for_index(index) /> }
        })
        .collect_view();

    view! {
        <PageSection id=SectionId::Experience tone=SectionTone::Banded>
            <div class="max-w-4xl mx-auto">
                <h2 class=SECTION_HEADING>"Academic Journey"</h2>
                <div class="relative">
                    <div class="absolute left-1/2 -translate-x-0.5 w-1 h-full bg-gradient-to-b from-purple-500 to-pink-500"></div>
                    {rows}
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn TimelineRow(entry: &'static TimelineEntry, side: TimelineSide) -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();

    view! {
        <div class=side.row_class()>
            <div class=side.content_class()>
                <div class=move || {
                    format!(
                        "{} p-6 rounded-lg border transition-all duration-300 hover:scale-105 shadow-lg",
                        theme.get().card_class(),
                    )
                }>
                    <div class="text-2xl font-bold text-purple-400 mb-2">{entry.year}</div>
                    <h3 class=move || {
                        format!("text-xl font-semibold mb-2 {}", theme.get().heading_class())
                    }>{entry.title}</h3>
                    <div class="text-pink-400 font-medium mb-3">{entry.organization}</div>
                    <p class=move || {
                        format!("text-sm leading-relaxed {}", theme.get().body_text_class())
                    }>{entry.description}</p>
                </div>
            </div>
            <div class="relative z-10">
                <div class="w-6 h-6 bg-gradient-to-r from-purple-500 to-pink-500 rounded-full border-4 border-black"></div>
            </div>
            <div class="w-1/2"></div>
        </div>
    }
}
