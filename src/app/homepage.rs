use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::{
    contact::Contact,
    header::Header,
    hero::{About, Hero},
    observers::{provide_active_section, use_scroll_signal, use_section_visibility},
    projects::{Projects, Skills},
    timeline::Experience,
};
use crate::{
    catalog,
    presentation::Presentation,
    section::SectionId,
    theme::{SectionTone, Theme},
    viewport::ObserverOptions,
};

pub const SECTION_HEADING: &str =
    "text-5xl font-bold mb-16 text-center leading-snug bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent";

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let active = provide_active_section(ObserverOptions::default());
    let scroll = use_scroll_signal();
    let (theme, set_theme) = signal(Theme::default());
    provide_context(theme);

    let presentation = Memo::new(move |_| {
        Presentation::derive(active.get(), scroll.offset.get(), scroll.pointer.get())
    });

    view! {
        <Title text="Creative Portfolio" />
        <div class=move || theme.get().page_class()>
            <Cursor presentation />
            <Header active set_theme />
            <Hero presentation />
            <About />
            <Projects />
            <Skills />
            <Experience />
            <Contact />
            <Footer />
        </div>
    }
}

/// A tracked page region. Its id doubles as the navigation anchor.
#[component]
pub fn PageSection(id: SectionId, tone: SectionTone, children: Children) -> impl IntoView {
    let theme = expect_context::<ReadSignal<Theme>>();
    let node_ref = NodeRef::<html::Section>::new();
    use_section_visibility(id, node_ref);

    view! {
        <section id=id.as_str() node_ref=node_ref class=move || theme.get().section_class(tone)>
            {children()}
        </section>
    }
}

#[component]
fn Cursor(presentation: Memo<Presentation>) -> impl IntoView {
    view! {
        <div
            aria-hidden="true"
            class="fixed w-6 h-6 bg-gradient-to-r from-purple-500 to-pink-500 rounded-full pointer-events-none z-50 mix-blend-difference transition-transform duration-150 ease-out"
            style:left=move || format!("{}px", presentation.get().cursor_left)
            style:top=move || format!("{}px", presentation.get().cursor_top)
            style:transform=move || presentation.get().cursor_transform()
        ></div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-6 border-t border-gray-800">
            <div class="max-w-6xl mx-auto text-center">
                <p class="text-gray-400">
                    {format!("© {} {}", env!("BUILD_YEAR"), catalog::profile().footer)}
                </p>
            </div>
        </footer>
    }
}
