use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub web: Web,
	#[serde(default)]
	pub registry: Registry,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}
impl Service {
	pub fn socket_addr(&self) -> Result<SocketAddr> {
		self.http_bind
			.parse()
			.map_err(|err| Error::InvalidBind { value: self.http_bind.clone(), source: err })
	}
}

#[derive(Debug, Deserialize)]
pub struct Web {
	/// Shown in the page `<title>` and the top-level heading.
	#[serde(default = "default_title")]
	pub title: String,
}
impl Default for Web {
	fn default() -> Self {
		Self { title: default_title() }
	}
}

#[derive(Debug, Default, Deserialize)]
pub struct Registry {
	/// Optional. Directory of `*.profile`/`*.txt` files loaded into the registry at startup,
	/// keyed by file stem.
	pub seed_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: default_bind_localhost_only() }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_title() -> String {
	"Query Profiles".to_string()
}

fn default_bind_localhost_only() -> bool {
	true
}
