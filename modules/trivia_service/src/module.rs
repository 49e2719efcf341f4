//! Module declaration and lifecycle

use crate::api::{native::NativeClient, rest};
use crate::config::Config;
use crate::contract::TriviaApi;
use crate::domain::Service;
use crate::infra::storage::repositories::{SeaOrmCategoryRepository, SeaOrmQuestionRepository};
use anyhow::{bail, Result};
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Trivia service module
pub struct TriviaServiceModule {
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for TriviaServiceModule {
    fn default() -> Self {
        Self {
            service: RwLock::new(None),
        }
    }
}

impl TriviaServiceModule {
    /// Wire repositories and the domain service over `db`
    pub fn init(&self, db: Arc<DatabaseConnection>, cfg: Config) -> Result<()> {
        if cfg.questions_per_page == 0 {
            bail!("questions_per_page must be at least 1");
        }

        let categories = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let questions = Arc::new(SeaOrmQuestionRepository::new(db));

        let service = Arc::new(Service::new(categories, questions, cfg));
        *self.service.write() = Some(service);

        tracing::info!("Trivia service initialized");
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Trivia service migrations completed");
        Ok(())
    }

    /// Mount the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering trivia service REST routes");
        rest::register_routes(router, service)
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn TriviaApi>> {
        Ok(Arc::new(NativeClient::new(self.service()?)))
    }

    /// OpenAPI components of the REST API
    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        rest::TriviaApiDoc::openapi()
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
