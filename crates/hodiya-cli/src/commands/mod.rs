pub mod config_ops;
pub mod convert_ops;
pub mod plan_ops;

use std::fs;
use std::io;

use hodiya_core::mapping::{MappingConfigError, MappingTable};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Mapping(#[from] MappingConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })
}

/// Register `--mapping FILE` (if any) as the process table and return it.
pub fn init_mapping(mapping: Option<&str>) -> Result<&'static MappingTable, CliError> {
    if let Some(path) = mapping {
        MappingTable::init_custom(read_file(path)?)?;
    }
    Ok(MappingTable::global())
}
