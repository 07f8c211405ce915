use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use tracing::info;

use crate::api::constants::{RELOAD_FAILURE_MESSAGE, RELOAD_SUCCESS_MESSAGE};
use crate::api::middleware::RequestId;
use crate::api::types::StatusResponse;
use crate::database::Loader;

pub struct ReloadService;

impl ReloadService {
    /// Reload the database from the configured path
    ///
    /// The failure cause is logged by the loader and not sent to the client.
    pub async fn reload_database(req: HttpRequest, loader: web::Data<Arc<Loader>>) -> HttpResponse {
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_default();
        info!(request_id = %request_id, "Reload requested via HTTP");

        match loader.reload().await {
            Ok(_) => HttpResponse::Ok().json(StatusResponse {
                status: "success".to_string(),
                message: RELOAD_SUCCESS_MESSAGE.to_string(),
            }),
            Err(_) => HttpResponse::InternalServerError().json(StatusResponse {
                status: "error".to_string(),
                message: RELOAD_FAILURE_MESSAGE.to_string(),
            }),
        }
    }
}
