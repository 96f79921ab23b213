//! Application Configuration
//!
//! Decoded from the embedded `assets/config.json`. Every field has a default,
//! so a partial file is valid.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::Role;

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.json");

static LOADED: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    /// Pins "today" so the fixture dates stay meaningful
    pub reference_date: Option<NaiveDate>,
    pub currency_symbol: String,
    /// Window (in days) for the "due soon" state
    pub due_soon_days: i64,
    pub log_level: LogLevel,
    /// User acting as the session user for each role
    pub demo_users: BTreeMap<Role, u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Client Portal".to_string(),
            reference_date: None,
            currency_symbol: "$".to_string(),
            due_soon_days: 7,
            log_level: LogLevel::Info,
            demo_users: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(AppError::Config)
    }

    /// Embedded configuration, falling back to defaults when it cannot be decoded
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Loaded once per page
    pub fn embedded() -> &'static AppConfig {
        LOADED.get_or_init(Self::load)
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Wall-clock time on the configured "today"; timestamps sent messages
    pub fn now(&self) -> NaiveDateTime {
        self.today().and_time(Local::now().time())
    }

    pub fn demo_user(&self, role: Role) -> Option<u32> {
        self.demo_users.get(&role).copied()
    }
}
