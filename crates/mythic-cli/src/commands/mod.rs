pub mod achievements;
pub mod boss;
pub mod config;
pub mod profile;
pub mod quest;
pub mod reset;
pub mod task;

use mythic_core::{Config, Database, ProfileStore, Session};

/// Open the profile described by the on-disk configuration. An unreadable
/// config file falls back to defaults.
pub fn open_session() -> Result<Session<Database>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open(&config.storage.database_file)?;
    let store = ProfileStore::with_prefix(db, &config.storage.key_prefix);
    Ok(Session::open(store, config.engine_config()))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
