//! GeoIP 查询接口
//!
//! `GET /geoip?ip=` and `POST /geoip/bulk`. Lookup outcomes map to
//! 400 (invalid), 404 (not found) and 503 (no database loaded).

use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::Value;
use tracing::{debug, info};

use crate::api::constants::{IP_REQUIRED_MESSAGE, IPS_NOT_STRINGS_MESSAGE, IPS_REQUIRED_MESSAGE};
use crate::api::helpers::{error_from_geoip, error_response};
use crate::api::types::{BulkEntry, LookupQuery};
use crate::services::{BulkLookupService, LookupService};

pub struct GeoIpService;

impl GeoIpService {
    pub async fn lookup(
        query: web::Query<LookupQuery>,
        service: web::Data<Arc<LookupService>>,
    ) -> HttpResponse {
        let Some(ip) = query.ip.as_deref().filter(|ip| !ip.is_empty()) else {
            return error_response(StatusCode::BAD_REQUEST, IP_REQUIRED_MESSAGE);
        };

        match service.lookup(ip).into_result(ip) {
            Ok(record) => HttpResponse::Ok().json(record),
            Err(e) => {
                debug!("Lookup for {} failed: {}", ip, e);
                error_from_geoip(&e)
            }
        }
    }

    pub async fn bulk_lookup(
        body: web::Json<Value>,
        service: web::Data<Arc<BulkLookupService>>,
    ) -> HttpResponse {
        let Some(values) = body.get("ips").and_then(Value::as_array) else {
            return error_response(StatusCode::BAD_REQUEST, IPS_REQUIRED_MESSAGE);
        };

        let Some(ips) = values.iter().map(Value::as_str).collect::<Option<Vec<&str>>>() else {
            return error_response(StatusCode::BAD_REQUEST, IPS_NOT_STRINGS_MESSAGE);
        };

        let results = match service.lookup_many(&ips) {
            Ok(results) => results,
            Err(e) => return error_from_geoip(&e),
        };

        info!("Bulk lookup request - {} IPs", ips.len());

        let entries: BTreeMap<String, BulkEntry> = results
            .into_iter()
            .map(|(ip, outcome)| {
                let entry = match outcome.into_result(&ip) {
                    Ok(data) => BulkEntry::Data { data },
                    Err(e) => BulkEntry::Error {
                        error: e.message().to_string(),
                    },
                };
                (ip, entry)
            })
            .collect();

        HttpResponse::Ok().json(entries)
    }
}
