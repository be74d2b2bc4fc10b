use std::{env, sync::Arc};

use axum::{
    routing::{delete, get},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;

use crate::{
    data_backend::catalog::Catalog,
    routes::{
        add_selection_handler, dishes_handler, ingredients_handler, meal_types_handler,
        remove_selection_handler, root_handler, selection_summary_handler,
    },
    selection_store::SelectionStore,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub selections: SelectionStore,
}

impl AppState {
    /// Builtin catalog plus a freshly spawned selection store. Needs a
    /// running tokio runtime.
    pub fn new() -> Self {
        let catalog = Arc::new(Catalog::builtin());
        log::info!("Catalog loaded: {} dishes", catalog.dishes().len());

        AppState {
            selections: SelectionStore::spawn(catalog.clone()),
            catalog,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

pub fn logger_init(module_path: &str) {
    let crate_level =
        if env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default()
            == "debug"
        {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module(module_path, crate_level)
        .filter_module("party_menu_rs", crate_level)
        .init();
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(root_handler))
        .route("/api/", get(root_handler))
        .route("/api/dishes", get(dishes_handler))
        .route("/api/dishes/{dish_id}/ingredients", get(ingredients_handler))
        .route("/api/meal-types", get(meal_types_handler))
        .route(
            "/api/selections/{user_id}",
            get(selection_summary_handler).post(add_selection_handler),
        )
        .route(
            "/api/selections/{user_id}/{dish_id}",
            delete(remove_selection_handler),
        )
        // any origin, echoed back so credentialed requests work too
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    log::info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => log::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
