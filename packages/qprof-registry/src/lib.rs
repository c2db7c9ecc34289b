//! Lookup of recorded query profiles by query identifier.

mod error;

pub use error::{Error, Result};

use std::{
	collections::HashMap,
	fs,
	path::{Path, PathBuf},
	sync::{PoisonError, RwLock},
};

/// File extensions picked up by [`InMemoryProfileRegistry::load_dir`].
pub const PROFILE_EXTENSIONS: [&str; 2] = ["profile", "txt"];

/// Read side of a profile store.
///
/// Lookups are called concurrently from request handlers and must not mutate shared state.
pub trait ProfileRegistry
where
	Self: Send + Sync,
{
	/// Returns the rendered profile text recorded for `query_id`, if any.
	fn get_profile(&self, query_id: &str) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct InMemoryProfileRegistry {
	profiles: RwLock<HashMap<String, String>>,
}
impl InMemoryProfileRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a registry from every profile file directly inside `dir`.
	///
	/// Each file whose extension is listed in [`PROFILE_EXTENSIONS`] becomes one entry keyed by
	/// its file stem. Subdirectories and other files are skipped. Two files sharing a stem, such
	/// as `q1.profile` and `q1.txt`, are rejected with [`Error::DuplicateQueryId`].
	pub fn load_dir(dir: &Path) -> Result<Self> {
		let registry = Self::new();
		let mut loaded_from = HashMap::<String, PathBuf>::new();
		let entries = fs::read_dir(dir)
			.map_err(|err| Error::ReadDir { path: dir.to_path_buf(), source: err })?;

		for entry in entries {
			let entry = entry.map_err(|err| Error::ReadDir { path: dir.to_path_buf(), source: err })?;
			let path = entry.path();

			if !path.is_file() {
				continue;
			}

			let Some(query_id) = profile_query_id(&path) else {
				tracing::debug!(path = %path.display(), "Skipping non-profile file.");

				continue;
			};
			if let Some(first) = loaded_from.get(&query_id) {
				return Err(Error::DuplicateQueryId { query_id, first: first.clone(), path });
			}

			let text = fs::read_to_string(&path)
				.map_err(|err| Error::ReadProfile { path: path.clone(), source: err })?;

			loaded_from.insert(query_id.clone(), path);
			registry.push_profile(query_id, text);
		}

		tracing::info!(dir = %dir.display(), count = registry.len(), "Loaded query profiles.");

		Ok(registry)
	}

	/// Records `text` under `query_id`, replacing any earlier profile for the same id.
	pub fn push_profile(&self, query_id: impl Into<String>, text: impl Into<String>) {
		let mut profiles = self.profiles.write().unwrap_or_else(PoisonError::into_inner);

		profiles.insert(query_id.into(), text.into());
	}

	pub fn len(&self) -> usize {
		self.profiles.read().unwrap_or_else(PoisonError::into_inner).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Recorded query ids in ascending order.
	pub fn query_ids(&self) -> Vec<String> {
		let profiles = self.profiles.read().unwrap_or_else(PoisonError::into_inner);
		let mut ids = profiles.keys().cloned().collect::<Vec<_>>();

		ids.sort();

		ids
	}
}

impl ProfileRegistry for InMemoryProfileRegistry {
	fn get_profile(&self, query_id: &str) -> Option<String> {
		self.profiles.read().unwrap_or_else(PoisonError::into_inner).get(query_id).cloned()
	}
}

fn profile_query_id(path: &Path) -> Option<String> {
	let extension = path.extension()?.to_str()?;

	if !PROFILE_EXTENSIONS.contains(&extension) {
		return None;
	}

	let stem = path.file_stem()?.to_str()?;

	if stem.is_empty() {
		return None;
	}

	Some(stem.to_string())
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::*;

	#[test]
	fn push_then_get_returns_latest_profile() {
		let registry = InMemoryProfileRegistry::new();

		registry.push_profile("q1", "Fragment 0");
		registry.push_profile("q1", "Fragment 1");

		assert_eq!(registry.get_profile("q1").as_deref(), Some("Fragment 1"));
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn empty_id_misses() {
		let registry = InMemoryProfileRegistry::new();

		registry.push_profile("q1", "Fragment 0");

		assert!(registry.get_profile("").is_none());
		assert!(registry.get_profile("Q1").is_none());
	}

	#[test]
	fn query_ids_are_sorted() {
		let registry = InMemoryProfileRegistry::new();

		assert!(registry.is_empty());

		for id in ["b", "c", "a"] {
			registry.push_profile(id, id);
		}

		assert_eq!(registry.query_ids(), vec!["a", "b", "c"]);
	}

	#[test]
	fn profile_ids_come_from_known_extensions() {
		assert_eq!(profile_query_id(Path::new("/p/abc-123.profile")).as_deref(), Some("abc-123"));
		assert_eq!(profile_query_id(Path::new("/p/abc-123.txt")).as_deref(), Some("abc-123"));
		assert_eq!(profile_query_id(Path::new("/p/abc-123.json")), None);
		assert_eq!(profile_query_id(Path::new("/p/abc-123")), None);
		assert_eq!(profile_query_id(Path::new("/p/ q1 .profile")).as_deref(), Some(" q1 "));
		assert_eq!(profile_query_id(Path::new("/p/.txt")), None);
	}
}
