//! Module declaration and lifecycle

use crate::api::{native::NativeClient, rest};
use crate::config::Config;
use crate::contract::ListingApi;
use crate::domain::Service;
use crate::infra::storage::repositories::{
    SeaOrmArtistRepository, SeaOrmShowRepository, SeaOrmVenueRepository,
};
use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Listing service module
pub struct ListingServiceModule {
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for ListingServiceModule {
    fn default() -> Self {
        Self {
            service: RwLock::new(None),
        }
    }
}

impl ListingServiceModule {
    /// Wire repositories and the domain service over `db`
    pub fn init(&self, db: Arc<DatabaseConnection>, cfg: Config) -> Result<()> {
        check_time_format(&cfg.show_time_format)?;

        let venues = Arc::new(SeaOrmVenueRepository::new(db.clone()));
        let artists = Arc::new(SeaOrmArtistRepository::new(db.clone()));
        let shows = Arc::new(SeaOrmShowRepository::new(db));

        let service = Arc::new(Service::new(venues, artists, shows, cfg));
        *self.service.write() = Some(service);

        tracing::info!("Listing service initialized");
        Ok(())
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Listing service migrations completed");
        Ok(())
    }

    /// Mount the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering listing service REST routes");
        rest::register_routes(router, service)
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn ListingApi>> {
        Ok(Arc::new(NativeClient::new(self.service()?)))
    }

    /// OpenAPI components of the REST API
    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        rest::ListingApiDoc::openapi()
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}

fn check_time_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        bail!("show_time_format must not be empty");
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("show_time_format '{format}' is not a valid chrono format");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_before_init_fails() {
        let module = ListingServiceModule::default();
        assert!(module.register_rest(axum::Router::new()).is_err());
        assert!(module.client().is_err());
    }

    #[test]
    fn time_format_is_checked() {
        assert!(check_time_format("%Y-%m-%d %H:%M:%S").is_ok());
        assert!(check_time_format("%a %b %e, %Y %l:%M%p").is_ok());
        assert!(check_time_format("%Q").is_err());
        assert!(check_time_format("  ").is_err());
    }
}
