use std::{env, path::PathBuf};

use crate::connection::{ConnectionFields, FieldKind};

pub const DEFAULT_LOG_FILE: &str = "pgurl-debug.log";
pub const LOG_FILE_VAR: &str = "PGURL_LOG_FILE";

/// Startup settings: initial field values and where diagnostics go.
#[derive(Debug, Clone)]
pub struct Config {
    pub initial_fields: ConnectionFields,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_fields: ConnectionFields::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars(env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            if key == LOG_FILE_VAR {
                if !value.is_empty() {
                    config.log_file = PathBuf::from(value);
                }
                continue;
            }
            if let Some(kind) = field_for_var(&key) {
                *config.initial_fields.get_mut(kind) = value;
            }
        }

        config
    }
}

/// `PGURL_HOST`, `PGURL_PORT`, ... `PGURL_SCHEMA`.
pub fn env_var_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Host => "PGURL_HOST",
        FieldKind::Port => "PGURL_PORT",
        FieldKind::User => "PGURL_USER",
        FieldKind::Password => "PGURL_PASSWORD",
        FieldKind::Database => "PGURL_DATABASE",
        FieldKind::Schema => "PGURL_SCHEMA",
    }
}

fn field_for_var(key: &str) -> Option<FieldKind> {
    FieldKind::ALL
        .into_iter()
        .find(|kind| env_var_name(*kind) == key)
}
