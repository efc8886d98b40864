use thiserror::Error;

use crate::config::ConfigError;
use crate::data::filter::NormalizeError;
use crate::data::loader::LoadError;
use crate::export::ExportError;

/// Any failure of a run. Every variant is fatal; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, Error>;
