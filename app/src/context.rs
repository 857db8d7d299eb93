use leptos::prelude::LeptosOptions;

use crate::config::SiteConfig;

/// Axum state shared by every request.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub site: SiteConfig,
}

// Needed by `leptos_axum::file_and_error_handler`.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
