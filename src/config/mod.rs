//! Configuration module for the SPPD backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Office identity printed on letterheads and signature blocks.
#[derive(Debug, Clone)]
pub struct OfficeProfile {
    /// Parent agency, first letterhead line
    pub agency_name: String,
    /// Issuing office, second letterhead line
    pub office_name: String,
    pub office_address: String,
    /// Place name written before the signing date
    pub city: String,
    /// Origin prefilled in the travel order form
    pub default_origin: String,
}

impl Default for OfficeProfile {
    fn default() -> Self {
        Self {
            agency_name: "Kementerian Agama Republik Indonesia".to_string(),
            office_name: "Pengadilan Agama Penajam".to_string(),
            office_address: "Jl. Jenderal Sudirman No. 123, Penajam Paser Utara".to_string(),
            city: "Penajam".to_string(),
            default_origin: "Kantor Pengadilan Agama Penajam".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    pub office: OfficeProfile,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("SPPD_DB_PATH")
            .unwrap_or_else(|_| "./data/sppd.sqlite".to_string())
            .into();

        let bind_addr = env::var("SPPD_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = env::var("SPPD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("SPPD_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Pretty);

        let defaults = OfficeProfile::default();
        let office = OfficeProfile {
            agency_name: env::var("SPPD_AGENCY_NAME").unwrap_or(defaults.agency_name),
            office_name: env::var("SPPD_OFFICE_NAME").unwrap_or(defaults.office_name),
            office_address: env::var("SPPD_OFFICE_ADDRESS").unwrap_or(defaults.office_address),
            city: env::var("SPPD_OFFICE_CITY").unwrap_or(defaults.city),
            default_origin: env::var("SPPD_DEFAULT_ORIGIN").unwrap_or(defaults.default_origin),
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            log_format,
            office,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 9] = [
        "SPPD_DB_PATH",
        "SPPD_BIND_ADDR",
        "SPPD_LOG_LEVEL",
        "SPPD_LOG_FORMAT",
        "SPPD_AGENCY_NAME",
        "SPPD_OFFICE_NAME",
        "SPPD_OFFICE_ADDRESS",
        "SPPD_OFFICE_CITY",
        "SPPD_DEFAULT_ORIGIN",
    ];

    // Both cases share one test: the process environment is global.
    #[test]
    fn test_config_from_env() {
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/sppd.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.office.city, "Penajam");

        env::set_var("SPPD_BIND_ADDR", "not an address");
        assert!(Config::from_env().is_err());

        env::set_var("SPPD_BIND_ADDR", "0.0.0.0:9000");
        env::set_var("SPPD_LOG_FORMAT", "JSON");
        env::set_var("SPPD_OFFICE_CITY", "Balikpapan");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.office.city, "Balikpapan");

        for var in VARS {
            env::remove_var(var);
        }
    }
}
