pub mod geoip;
pub mod health;
pub mod reload;

use actix_web::web;

use crate::api::constants::{BULK_LOOKUP_PATH, LOOKUP_PATH, RELOAD_PATH};
use crate::api::helpers::{json_config, query_config};

pub use geoip::GeoIpService;
pub use health::{AppStartTime, HealthService, health_routes};
pub use reload::ReloadService;

/// Register every route
///
/// Handlers expect `Arc<Loader>`, `Arc<LookupService>`,
/// `Arc<BulkLookupService>` and `AppStartTime` as app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route(RELOAD_PATH, web::post().to(ReloadService::reload_database))
        .route(LOOKUP_PATH, web::get().to(GeoIpService::lookup))
        .route(BULK_LOOKUP_PATH, web::post().to(GeoIpService::bulk_lookup))
        .service(health_routes());
}
