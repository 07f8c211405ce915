use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum GeoIpError {
    FileOperation(String),
    DatabaseParse(String),
    DatabaseNotLoaded(String),
    InvalidAddress(String),
    AddressNotFound(String),
    Validation(String),
    Config(String),
}

impl GeoIpError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GeoIpError::FileOperation(_) => "E001",
            GeoIpError::DatabaseParse(_) => "E002",
            GeoIpError::DatabaseNotLoaded(_) => "E003",
            GeoIpError::InvalidAddress(_) => "E004",
            GeoIpError::AddressNotFound(_) => "E005",
            GeoIpError::Validation(_) => "E006",
            GeoIpError::Config(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GeoIpError::FileOperation(_) => "File Operation Error",
            GeoIpError::DatabaseParse(_) => "Database Parse Error",
            GeoIpError::DatabaseNotLoaded(_) => "Database Not Loaded",
            GeoIpError::InvalidAddress(_) => "Invalid Address",
            GeoIpError::AddressNotFound(_) => "Address Not Found",
            GeoIpError::Validation(_) => "Validation Error",
            GeoIpError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GeoIpError::FileOperation(msg) => msg,
            GeoIpError::DatabaseParse(msg) => msg,
            GeoIpError::DatabaseNotLoaded(msg) => msg,
            GeoIpError::InvalidAddress(msg) => msg,
            GeoIpError::AddressNotFound(msg) => msg,
            GeoIpError::Validation(msg) => msg,
            GeoIpError::Config(msg) => msg,
        }
    }

    /// HTTP status used when the error reaches the API boundary
    pub fn http_status(&self) -> StatusCode {
        match self {
            GeoIpError::InvalidAddress(_) | GeoIpError::Validation(_) => StatusCode::BAD_REQUEST,
            GeoIpError::AddressNotFound(_) => StatusCode::NOT_FOUND,
            GeoIpError::DatabaseNotLoaded(_) => StatusCode::SERVICE_UNAVAILABLE,
            GeoIpError::FileOperation(_)
            | GeoIpError::DatabaseParse(_)
            | GeoIpError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于启动失败）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GeoIpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GeoIpError {}

// 便捷的构造函数
impl GeoIpError {
    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        GeoIpError::FileOperation(msg.into())
    }

    pub fn database_parse<T: Into<String>>(msg: T) -> Self {
        GeoIpError::DatabaseParse(msg.into())
    }

    pub fn database_not_loaded<T: Into<String>>(msg: T) -> Self {
        GeoIpError::DatabaseNotLoaded(msg.into())
    }

    pub fn invalid_address<T: Into<String>>(msg: T) -> Self {
        GeoIpError::InvalidAddress(msg.into())
    }

    pub fn address_not_found<T: Into<String>>(msg: T) -> Self {
        GeoIpError::AddressNotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        GeoIpError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        GeoIpError::Config(msg.into())
    }
}

impl From<std::io::Error> for GeoIpError {
    fn from(err: std::io::Error) -> Self {
        GeoIpError::FileOperation(err.to_string())
    }
}

impl From<maxminddb::MaxMindDbError> for GeoIpError {
    fn from(err: maxminddb::MaxMindDbError) -> Self {
        GeoIpError::DatabaseParse(err.to_string())
    }
}

impl From<::config::ConfigError> for GeoIpError {
    fn from(err: ::config::ConfigError) -> Self {
        GeoIpError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoIpError>;
