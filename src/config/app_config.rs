use chrono::{FixedOffset, Offset, Utc};

const DEFAULT_EVENT_API_BASE_URL: &str = "https://event-pass-backend.onrender.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
    /// Host serving `GET /events` and `POST /api/event`
    pub event_api_base_url: String,
    /// Host serving `POST /api/user`
    pub registration_api_base_url: String,
    /// Fixed zone used for every "is this in the past" comparison
    pub reference_offset: FixedOffset,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let event_api_base_url = trim_base_url(
            &cfg.get_string("EVENT_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_EVENT_API_BASE_URL.to_string()),
        );
        let registration_api_base_url = cfg
            .get_string("REGISTRATION_API_BASE_URL")
            .map(|url| trim_base_url(&url))
            .unwrap_or_else(|_| event_api_base_url.clone());

        let raw_offset = cfg.get_string("REFERENCE_UTC_OFFSET").unwrap_or_else(|_| "+05:30".to_string());
        let reference_offset = parse_offset(&raw_offset)?;
        let port = match cfg.get_int("PORT") {
            Ok(raw) => parse_port(raw)?,
            Err(_) => 3000,
        };

        Ok(Self {
            host: cfg.get_string("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            environment: cfg.get_string("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            app_name: cfg.get_string("APP_NAME").unwrap_or_else(|_| "event-pass-web".to_string()),
            app_version: cfg.get_string("APP_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            event_api_base_url,
            registration_api_base_url,
            reference_offset,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(Self {
            level: cfg.get_string("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            file: cfg.get_string("LOG_FILE").unwrap_or_else(|_| "logs/app.log".to_string()),
        })
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn parse_port(raw: i64) -> Result<u16, config::ConfigError> {
    u16::try_from(raw)
        .map_err(|_| config::ConfigError::Message(format!("Invalid PORT '{}': must be 0-65535", raw)))
}

/// Parse an offset such as `+05:30`, `-04:00` or `Z`
pub fn parse_offset(raw: &str) -> Result<FixedOffset, config::ConfigError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    raw.parse::<FixedOffset>()
        .map_err(|e| config::ConfigError::Message(format!("Invalid REFERENCE_UTC_OFFSET '{}': {}", raw, e)))
}
