//! Per-invocation setup: config, logging, login and store

use clap::{Args, ValueEnum};
use gymadmin_core::logging_facility;
use gymadmin_core::storage::KvStorage;
use gymadmin_core::{GymConfig, GymStore, Session, StorageBackend};
use gymadmin_core_types::Sensitive;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "gymadmin.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Sqlite,
    Json,
    Memory,
}

impl From<BackendArg> for StorageBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Sqlite => StorageBackend::Sqlite,
            BackendArg::Json => StorageBackend::Json,
            BackendArg::Memory => StorageBackend::Memory,
        }
    }
}

/// Flags accepted by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Config file (default: ./gymadmin.toml if present)
    #[arg(long, global = true, env = "GYMADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Storage file, overriding the config
    #[arg(long, global = true, env = "GYMADMIN_DB")]
    pub db: Option<PathBuf>,

    /// Storage backend, overriding the config
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    #[arg(long, global = true, env = "GYMADMIN_USER", default_value = "")]
    pub user: String,

    #[arg(
        long,
        global = true,
        env = "GYMADMIN_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

/// Everything a command needs
pub struct Context {
    pub store: GymStore<Box<dyn KvStorage>>,
    pub session: Session,
    pub json: bool,
}

fn load_config(args: &GlobalArgs) -> gymadmin_core::Result<GymConfig> {
    let mut config = match &args.config {
        Some(path) => GymConfig::load(path)?,
        None => GymConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
    };
    if let Some(db) = &args.db {
        config.storage.path = db.clone();
    }
    if let Some(backend) = args.backend {
        config.storage.backend = backend.into();
    }
    Ok(config)
}

impl Context {
    /// Load config, init logging, log in, then open the store
    ///
    /// The store is only opened after a successful login, so rejected
    /// credentials never seed or modify the storage file.
    pub fn open(args: &GlobalArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let config = load_config(args)?;
        logging_facility::init_with_filter(config.logging.profile, config.logging.filter.as_deref());

        let session = config
            .admin
            .login(&args.user, &Sensitive::new(args.password.clone()))?;
        tracing::debug!(session_id = %session.id(), "session opened");

        let storage = gymadmin_store::open_backend(&config.storage)?;
        let store = GymStore::open(storage, config.storage.hydration)?;

        for (collection, reason) in &store.hydration_report().recovered {
            eprintln!(
                "Warning: stored {} could not be read and was reset to demo data ({})",
                collection.name(),
                reason
            );
        }

        Ok(Self {
            store,
            session,
            json: args.json,
        })
    }

    /// Print `value` as pretty JSON
    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> super::CmdResult {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
