use std::sync::Arc;

use qprof_registry::{InMemoryProfileRegistry, ProfileRegistry};
use qprof_web::{PageTemplate, StandardPage};

#[derive(Clone)]
pub struct AppState {
	pub registry: Arc<dyn ProfileRegistry>,
	pub page: Arc<dyn PageTemplate>,
}
impl AppState {
	pub fn new(config: &qprof_config::Config) -> color_eyre::Result<Self> {
		let registry = match config.registry.seed_dir.as_deref() {
			Some(dir) => InMemoryProfileRegistry::load_dir(dir)?,
			None => {
				tracing::info!("No registry.seed_dir configured. Starting with an empty registry.");

				InMemoryProfileRegistry::new()
			},
		};
		let page = StandardPage::new(config.web.title.clone());

		Ok(Self::with_parts(Arc::new(registry), Arc::new(page)))
	}

	pub fn with_parts(registry: Arc<dyn ProfileRegistry>, page: Arc<dyn PageTemplate>) -> Self {
		Self { registry, page }
	}
}
