use leptos::prelude::*;

use app::config::SiteConfig;

pub const PARTICLE_SEED_VAR: &str = "PORTFOLIO_PARTICLE_SEED";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not parse `{value}' from {var} as a seed: {error}", var = PARTICLE_SEED_VAR)]
    InvalidParticleSeed {
        value: String,
        error: std::num::ParseIntError,
    },

    #[error("Could not load the Leptos configuration: {0}")]
    LeptosConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub struct Config {
    pub leptos_options: LeptosOptions,
    pub site: SiteConfig,
}

impl Config {
    /// Leptos options come from the workspace metadata (overridable with `LEPTOS_*`), the rest
    /// from our own variables.
    pub fn from_env() -> Result<Self> {
        let conf = get_configuration(None).map_err(|error| Error::LeptosConfig(error.to_string()))?;
        let seed = std::env::var(PARTICLE_SEED_VAR).ok();
        Ok(Self {
            leptos_options: conf.leptos_options,
            site: site_config(seed.as_deref())?,
        })
    }
}

pub fn site_config(particle_seed: Option<&str>) -> Result<SiteConfig> {
    let particle_seed = match particle_seed.map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(value.parse::<u64>().map_err(|error| Error::InvalidParticleSeed {
            value: String::from(value),
            error,
        })?),
    };
    Ok(SiteConfig { particle_seed })
}

/// The config a single render sees: a pinned seed as is, otherwise a fresh one.
pub fn per_render(site: SiteConfig) -> SiteConfig {
    SiteConfig {
        particle_seed: Some(site.particle_seed.unwrap_or_else(rand::random::<u64>)),
    }
}
