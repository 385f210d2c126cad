//! Application Startup
//!
//! Application building and server initialization.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    InvitationService, InvitationServiceImpl, NicknameService, NicknameServiceImpl,
};
use config::ConfigError;

use crate::config::Settings;
use crate::domain::{NicknamePolicy, PoolMembershipRepository, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgPoolMembershipRepository, PgUserRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub memberships: Arc<dyn PoolMembershipRepository>,
    pub invitations: Arc<dyn InvitationService>,
    pub nicknames: Arc<dyn NicknameService>,
}

impl AppState {
    /// Wire the services over the given repositories.
    ///
    /// Fails when the nickname bounds in `settings` cannot form a policy.
    pub fn new(
        settings: Settings,
        users: Arc<dyn UserRepository>,
        memberships: Arc<dyn PoolMembershipRepository>,
    ) -> Result<Self, ConfigError> {
        let policy = NicknamePolicy::try_from(&settings.nickname)?;

        Ok(Self {
            settings: Arc::new(settings),
            memberships: memberships.clone(),
            invitations: Arc::new(InvitationServiceImpl::new(memberships)),
            nicknames: Arc::new(NicknameServiceImpl::new(users, policy)),
        })
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(db.clone()));
        let memberships: Arc<dyn PoolMembershipRepository> =
            Arc::new(PgPoolMembershipRepository::new(db));

        let addr = settings.server_addr();
        let state = AppState::new(settings, users, memberships)?;

        let router = routes::create_router(state).layer(logging::create_trace_layer());

        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
