//! API 模块常量定义

pub const RELOAD_PATH: &str = "/reload-geoip";
pub const LOOKUP_PATH: &str = "/geoip";
pub const BULK_LOOKUP_PATH: &str = "/geoip/bulk";
pub const HEALTH_PATH: &str = "/health";

pub const RELOAD_SUCCESS_MESSAGE: &str = "GeoIP database reloaded successfully";
pub const RELOAD_FAILURE_MESSAGE: &str = "Failed to reload GeoIP database";
pub const IP_REQUIRED_MESSAGE: &str = "IP address is required";
pub const IPS_REQUIRED_MESSAGE: &str = "Array of IPs is required";
pub const IPS_NOT_STRINGS_MESSAGE: &str = "Every IP must be a string";

/// 请求体最大字节数（1000 个 IPv6 地址远小于此值）
pub const MAX_PAYLOAD_BYTES: usize = 256 * 1024;

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
