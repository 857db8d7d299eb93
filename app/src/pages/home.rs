use leptos::prelude::*;
use leptos_meta::Title;
use rand::{rngs::StdRng, SeedableRng};

use crate::components::{Contact, Footer, Hero, NavBar, Projects, Skills};
use crate::config::use_particle_seed;
use crate::particles::{ParticleField, PARTICLE_COUNT};
use crate::state::UiState;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());

    cfg_if::cfg_if! {
        if #[cfg(feature = "hydrate")] {
            crate::scroll::track_scroll(crate::scroll::WindowScroll, ui);
        }
    }

    // Component bodies run once per mount, so the field never jitters on updates.
    let mut rng = StdRng::seed_from_u64(use_particle_seed());
    let particles = ParticleField::generate(&mut rng, PARTICLE_COUNT);

    view! {
        <Title text="Portafolio" />
        <PortfolioBody ui=ui particles=particles />
    }
}

/// Every section of the page, driven by `ui`.
#[component]
pub fn PortfolioBody(ui: RwSignal<UiState>, particles: ParticleField) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <NavBar ui=ui />
            <Hero particles=particles />
            <Projects />
            <Skills />
            <Contact />
            <Footer />
        </div>
    }
}
