use leptos::prelude::*;

/// Seed for renders that got no seed, i.e. the client while hydrating. Hydration keeps the
/// server's particle attributes, so that field only has to have the right number of nodes.
pub const DEFAULT_PARTICLE_SEED: u64 = 0xF31F_2025;

/// Settings the server hands to every render through the reactive context.
///
/// `particle_seed` is `None` unless the operator pinned one, the server then draws a fresh
/// seed for each request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub particle_seed: Option<u64>,
}

pub fn use_particle_seed() -> u64 {
    use_context::<SiteConfig>()
        .and_then(|site| site.particle_seed)
        .unwrap_or(DEFAULT_PARTICLE_SEED)
}
