pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read profile directory at {path:?}.")]
	ReadDir { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to read profile at {path:?}.")]
	ReadProfile { path: std::path::PathBuf, source: std::io::Error },
	#[error("Query id {query_id:?} is provided by both {first:?} and {path:?}.")]
	DuplicateQueryId { query_id: String, first: std::path::PathBuf, path: std::path::PathBuf },
}
