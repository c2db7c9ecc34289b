use std::{net::AddrParseError, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read config file at {path:?}.")]
	ReadConfig { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse config file at {path:?}.")]
	ParseConfig { path: PathBuf, source: toml::de::Error },
	#[error("service.http_bind {value:?} is not a socket address.")]
	InvalidBind { value: String, source: AddrParseError },
	#[error("{message}")]
	Validation { message: String },
}
