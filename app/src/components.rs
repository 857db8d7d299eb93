use leptos::prelude::*;

use crate::content::{self, Project, Skill, BRAND, OWNER, PROJECTS, SKILLS, TAGLINE};
use crate::icons::{Glyph, Icon};
use crate::particles::ParticleField;
use crate::state::{Section, UiState};

const NAV_LINK_CLASS: &str = "capitalize hover:text-red-400 transition-colors";

#[component]
pub fn NavBar(ui: RwSignal<UiState>) -> impl IntoView {
    let nav_class = move || {
        format!(
            "fixed w-full z-50 transition-all duration-300 {}",
            ui.with(|state| state.navbar_style().class())
        )
    };
    let is_menu_open = move || ui.with(|state| state.is_menu_open);

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="text-2xl font-bold bg-gradient-to-r from-red-400 to-orange-600 bg-clip-text text-transparent">
                        {BRAND}
                    </div>

                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section=section ui=ui /> })
                            .collect_view()}
                    </div>

                    <button
                        class="md:hidden"
                        aria-label="Menú"
                        aria-expanded=move || is_menu_open().to_string()
                        on:click=move |_| ui.update(UiState::toggle_menu)
                    >
                        {move || {
                            let icon = if is_menu_open() { Icon::X } else { Icon::Menu };
                            view! { <Glyph icon=icon /> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=is_menu_open>
                <div class="md:hidden bg-gray-800 px-4 py-4 space-y-3">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section ui=ui mobile=true /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// Desktop links carry the highlight, mobile ones are stacked blocks.
#[component]
fn NavLink(
    section: Section,
    ui: RwSignal<UiState>,
    #[prop(optional)] mobile: bool,
) -> impl IntoView {
    let class = move || {
        if mobile {
            format!("block {NAV_LINK_CLASS}")
        } else if ui.with(|state| state.is_active(section)) {
            format!("{NAV_LINK_CLASS} text-red-400")
        } else {
            String::from(NAV_LINK_CLASS)
        }
    };

    view! {
        <a
            href=section.href()
            class=class
            on:click=move |_| ui.update(|state| state.select_section(section))
        >
            {section.tag()}
        </a>
    }
}

#[component]
pub fn Hero(particles: ParticleField) -> impl IntoView {
    view! {
        <section
            id=Section::Inicio.tag()
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-red-900/20 via-gray-900 to-orange-900/20"></div>
            <div class="absolute inset-0">
                {particles
                    .particles()
                    .iter()
                    .map(|particle| {
                        view! {
                            <div
                                class="particle absolute bg-white rounded-full opacity-20"
                                style=particle.style()
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative z-10 text-center px-4 max-w-4xl">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-fade-in">
                    "Soy "
                    <span class="bg-gradient-to-r from-red-400 via-orange-500 to-yellow-500 bg-clip-text text-transparent">
                        {OWNER}
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-9">{TAGLINE}</p>
                <div class="flex justify-center space-x-4">
                    <a
                        href=Section::Proyectos.href()
                        class="px-8 py-3 bg-gradient-to-r from-red-500 to-orange-500 rounded-full font-semibold hover:scale-105 transition-transform"
                    >
                        "Ver Proyectos"
                    </a>
                    <a
                        href=Section::Contacto.href()
                        class="px-8 py-3 border-2 border-red-500 rounded-full font-semibold hover:bg-red-500/10 transition-colors"
                    >
                        "Contacto"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Proyectos.tag() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">
                    "Proyectos " <span class="text-red-400">"Destacados"</span>
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let overlay = format!(
        "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-10 transition-opacity",
        project.gradient
    );
    let badge = format!(
        "w-12 h-12 rounded-lg bg-gradient-to-br {} mb-4 flex items-center justify-center",
        project.gradient
    );

    view! {
        <article class="project-card group relative bg-gray-800 rounded-2xl overflow-hidden hover:transform hover:scale-105 transition-all duration-300 cursor-pointer">
            <div class=overlay></div>
            <div class="p-6">
                <div class=badge>
                    <Glyph icon=Icon::ExternalLink class="text-white" />
                </div>
                <h3 class="text-xl font-bold mb-3">{project.title}</h3>
                <p class="text-gray-400 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! { <span class="px-3 py-1 bg-gray-700 rounded-full text-sm">{*tech}</span> }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Habilidades.tag() class="py-20 px-4 bg-gray-800/50">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16">
                    "Habilidades " <span class="text-red-400">"Técnicas"</span>
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .map(|skill| view! { <SkillCard skill=*skill /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <article class="skill-card bg-gray-800 p-6 rounded-xl hover:bg-gray-750 transition-all duration-300 hover:transform hover:scale-105 group">
            <div class="flex items-center space-x-3 mb-3">
                <div class="w-12 h-12 bg-gradient-to-br from-red-500 to-orange-500 rounded-lg flex items-center justify-center group-hover:scale-110 transition-transform">
                    <Glyph icon=skill.icon class="text-white" />
                </div>
                <h3 class="font-bold text-lg">{skill.name}</h3>
            </div>
            <p class="text-gray-400 text-sm">{skill.description}</p>
        </article>
    }
}

const SOCIAL_BUTTON_CLASS: &str = "w-14 h-14 bg-gray-800 rounded-full flex items-center justify-center hover:bg-red-500 transition-colors";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contacto.tag() class="py-20 px-4">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-8">
                    "¿Trabajamos " <span class="text-red-400">"Juntos?"</span>
                </h2>
                <p class="text-xl text-gray-400 mb-12">
                    "Estoy disponible para proyectos freelance o colaboraciones"
                </p>

                <div class="flex justify-center space-x-6 mb-12">
                    <a
                        href=content::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                        class=SOCIAL_BUTTON_CLASS
                    >
                        <Glyph icon=Icon::Github />
                    </a>
                    <a
                        href=content::LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn"
                        class=SOCIAL_BUTTON_CLASS
                    >
                        <Glyph icon=Icon::Linkedin />
                    </a>
                    <a href=content::mailto() aria-label="Email" class=SOCIAL_BUTTON_CLASS>
                        <Glyph icon=Icon::Mail />
                    </a>
                </div>

                <a
                    href=content::mailto()
                    class="inline-block px-10 py-4 bg-gradient-to-r from-red-500 to-orange-500 rounded-full font-semibold text-lg hover:scale-105 transition-transform"
                >
                    "Enviar Mensaje"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-gray-400 border-t border-gray-800">
            <p>{"\u{00a9}"} " 2025 Tu Nombre. Todos los derechos reservados."</p>
        </footer>
    }
}
