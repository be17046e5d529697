//! Orghub Server — Department Directory Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use orghub_core::config::AppConfig;
use orghub_core::error::AppError;
use orghub_service::{DepartmentService, EmployeeService, HierarchyService};
use orghub_store::{DepartmentStore, DepartmentStoreOptions, EmployeeStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("ORGHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Orghub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize stores ────────────────────────────────
    let department_store = Arc::new(DepartmentStore::new(DepartmentStoreOptions {
        noop_updates_create_audit_entry: config.directory.noop_updates_create_audit_entry,
    }));
    let employee_store = Arc::new(EmployeeStore::new());

    // ── Step 2: Seed demo data ───────────────────────────────────
    if config.directory.seed_demo_data {
        tracing::info!("Seeding demo data...");
        orghub_store::seed::seed_demo_data(
            &department_store,
            &employee_store,
            config.directory.default_tenant_id,
        )
        .await?;
    }

    // ── Step 3: Initialize services ──────────────────────────────
    let department_service = Arc::new(DepartmentService::new(
        Arc::clone(&department_store),
        config.directory.clone(),
    ));
    let hierarchy_service = Arc::new(HierarchyService::new(
        Arc::clone(&department_store),
        config.directory.clone(),
    ));
    let employee_service = Arc::new(EmployeeService::new(Arc::clone(&employee_store)));
    tracing::info!("Services initialized");

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = orghub_api::state::AppState {
        config: Arc::new(config.clone()),
        department_service,
        hierarchy_service,
        employee_service,
    };

    let app = orghub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Orghub server listening on {addr}");

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Orghub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
