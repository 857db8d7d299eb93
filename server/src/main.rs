#![recursion_limit = "256"]

use anyhow::{Context, Result};
use leptos::prelude::*;

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let config = config::Config::from_env().context("Could not configure the server")?;
    let addr = config.leptos_options.site_addr;
    let leptos_options = config.leptos_options;
    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        site: config.site,
    };
    match ctx.site.particle_seed {
        Some(seed) => log::info!("background particles pinned to seed {seed}"),
        None => log::info!("background particles reseeded on every request"),
    }

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let site = ctx.site;
        move || provide_context(config::per_render(site))
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let app = axum::Router::new()
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server stopped unexpectedly")?;
    Ok(())
}
