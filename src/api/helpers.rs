//! API 帮助函数

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error, web};

use super::constants::MAX_PAYLOAD_BYTES;
use super::types::ErrorResponse;
use crate::errors::GeoIpError;

/// 构建 `{error}` 响应
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: message.into(),
    })
}

/// 从 GeoIpError 构建错误响应（自动映射 HTTP 状态码）
pub fn error_from_geoip(err: &GeoIpError) -> HttpResponse {
    error_response(err.http_status(), err.message())
}

/// JSON extractor config: malformed bodies answer `400 {error}`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_PAYLOAD_BYTES)
        .error_handler(|err, _req: &HttpRequest| {
            let response = error_response(StatusCode::BAD_REQUEST, err.to_string());
            error::InternalError::from_response(err, response).into()
        })
}

/// Query extractor config: unparseable query strings answer `400 {error}`
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        let response = error_response(StatusCode::BAD_REQUEST, err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}
