use bjsim_engine::errors::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read strategy table: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse strategy table: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid key {key:?} in {category} table")]
    InvalidKey { category: &'static str, key: String },
    #[error("Split is not allowed in the {category} table (key {key})")]
    SplitOutsidePairs { category: &'static str, key: u8 },
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("Incomplete strategy table: {0}")]
    Incomplete(#[from] EngineError),
}
