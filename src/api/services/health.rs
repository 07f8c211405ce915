use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use std::time::Instant;
use tracing::trace;

use crate::api::constants::HEALTH_PATH;
use crate::api::types::HealthResponse;
use crate::database::Loader;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

/// Health Service
///
/// Healthy means a database snapshot is being served.
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        loader: web::Data<Arc<Loader>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let snapshot = loader.handle().get();
        let is_healthy = snapshot.is_some();
        let now = chrono::Utc::now();

        let body = HealthResponse {
            status: (if is_healthy { "healthy" } else { "unhealthy" }).to_string(),
            timestamp: now.to_rfc3339(),
            uptime: (now - app_start_time.start_datetime).num_seconds().max(0) as u64,
            database: snapshot.map(|s| s.summary()),
            reload: loader.status(),
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        let status = if is_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        HttpResponse::build(status).json(body)
    }

    // 就绪检查：数据库已加载才返回 200
    pub async fn readiness_check(loader: web::Data<Arc<Loader>>) -> impl Responder {
        trace!("Received readiness check request");

        if loader.handle().is_loaded() {
            HttpResponse::Ok()
                .append_header(("Content-Type", "text/plain"))
                .body("OK")
        } else {
            HttpResponse::ServiceUnavailable().finish()
        }
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope(HEALTH_PATH)
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
