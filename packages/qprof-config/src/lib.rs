mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Registry, Security, Service, Web};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(path, &raw)
}

/// Parses, normalizes and validates config text. `path` is only used in error reports.
pub fn parse(path: &Path, raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	for (label, value) in
		[("service.http_bind", &cfg.service.http_bind), ("service.log_level", &cfg.service.log_level)]
	{
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	cfg.service.socket_addr()?;

	if cfg.web.title.trim().is_empty() {
		return Err(Error::Validation { message: "web.title must be non-empty.".to_string() });
	}
	if cfg.web.title.contains(['<', '>']) {
		return Err(Error::Validation {
			message: "web.title must not contain HTML markup.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg
		.registry
		.seed_dir
		.as_deref()
		.map(|dir| dir.as_os_str().to_string_lossy().trim().is_empty())
		.unwrap_or(false)
	{
		cfg.registry.seed_dir = None;
	}

	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
}
