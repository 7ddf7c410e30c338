#![recursion_limit = "512"]

//! Router assembly shared by the server binary and the integration tests.

use app::{cache::DashboardCache, components::App, config::Config};
use axum::{
    Router,
    body::Body,
    extract::{FromRef, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use leptos::context::provide_context;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, handle_server_fns_with_context};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub db: DatabaseConnection,
    pub cache: Arc<DashboardCache>,
    pub config: Config,
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl AppState {
    /// State with an empty query cache.
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let leptos_options = LeptosOptions::builder()
            .output_name("frontend")
            .site_pkg_dir("pkg")
            .site_root("target/site")
            .build();

        Self {
            leptos_options,
            db,
            cache: Arc::new(DashboardCache::new()),
            config,
        }
    }

    /// Everything server functions and SSR pages read from the Leptos context.
    fn provide_app_context(&self) {
        provide_context(self.db.clone());
        provide_context(Arc::clone(&self.cache));
        provide_context(self.config.clone());
    }
}

pub fn build_router(state: AppState) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .route(
            "/api/{*fn_name}",
            get(server_fn_handler).post(server_fn_handler),
        )
        .leptos_routes_with_context(
            &state,
            routes,
            {
                let state = state.clone();
                move || state.provide_app_context()
            },
            {
                let options = state.leptos_options.clone();
                move || shell(options.clone())
            },
        )
        .fallback(file_and_error_handler)
        .nest_service("/pkg", ServeDir::new("target/site/pkg"))
        .with_state(state)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/frontend.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

async fn server_fn_handler(State(state): State<AppState>, req: Request<Body>) -> impl IntoResponse {
    handle_server_fns_with_context(move || state.provide_app_context(), req).await
}

async fn file_and_error_handler(State(state): State<AppState>, req: Request<Body>) -> Response {
    if req.uri().path().starts_with("/pkg") {
        return (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>")).into_response();
    }

    let options = state.leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream_with_context(
        move || state.provide_app_context(),
        move || shell(options.clone()),
    );
    handler(req).await.into_response()
}
