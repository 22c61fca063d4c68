//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{middleware, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{ServiceRecordService, ServiceRecordServiceImpl};
use crate::config::{Settings, StoreBackend};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryOwnerRepository, InMemoryServiceRecordRepository, PgOwnerRepository,
    PgServiceRecordRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceRecordService>,
    /// Present only with the PostgreSQL backend
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by PostgreSQL repositories
    pub fn postgres(pool: PgPool, settings: Settings) -> Self {
        let service_repo = Arc::new(PgServiceRecordRepository::new(pool.clone()));
        let owner_repo = Arc::new(PgOwnerRepository::new(pool.clone()));

        Self {
            services: Arc::new(ServiceRecordServiceImpl::new(service_repo, owner_repo)),
            db: Some(pool),
            settings: Arc::new(settings),
        }
    }

    /// State backed by in-memory repositories
    pub fn in_memory(owners: InMemoryOwnerRepository, settings: Settings) -> Self {
        let service_repo = Arc::new(InMemoryServiceRecordRepository::new());

        Self {
            services: Arc::new(ServiceRecordServiceImpl::new(service_repo, Arc::new(owners))),
            db: None,
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(middleware::from_fn(logging::track_metrics))
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let state = match settings.store.backend {
            StoreBackend::Postgres => {
                let db = database::create_pool(&settings.database).await?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db).await?;
                    tracing::info!("Database migrations applied");
                }

                AppState::postgres(db, settings.clone())
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; data is lost on shutdown");
                let owners = InMemoryOwnerRepository::with_owners(settings.store.owners.clone());
                AppState::in_memory(owners, settings.clone())
            }
        };

        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
