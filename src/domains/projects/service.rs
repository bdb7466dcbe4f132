//! Project registry service implementation.
//!
//! The `ProjectRegistry` owns the identifier-to-record mapping and serves
//! the list/read/create operations. Records live in memory only: the
//! registry is seeded at startup and everything is lost on process exit.

use indexmap::IndexMap;
use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use super::error::ProjectError;
use super::locator;
use crate::core::config::RegistryConfig;

/// MIME type reported for every project resource.
pub const PROJECT_MIME_TYPE: &str = "text/plain";

/// A stored project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Human-readable project title.
    pub title: String,

    /// Filesystem location of the project.
    pub path: String,
}

/// In-memory registry of project records.
///
/// Handlers share one instance behind an `Arc`; tests construct isolated
/// instances from their own `RegistryConfig`.
pub struct ProjectRegistry {
    inner: RwLock<RegistryState>,
}

struct RegistryState {
    /// Records keyed by identifier. Iteration follows insertion order.
    projects: IndexMap<String, Project>,

    /// Next identifier to assign. Monotonic, independent of the map size.
    next_id: u64,
}

impl ProjectRegistry {
    /// Create a new registry seeded from the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        info!("Initializing ProjectRegistry");

        let mut state = RegistryState {
            projects: IndexMap::new(),
            next_id: 1,
        };

        for seed in config.seed {
            let id = state.next_id.to_string();
            state.next_id += 1;
            info!("Seeding project {}: {}", id, seed.title);
            state.projects.insert(id, seed);
        }

        Self {
            inner: RwLock::new(state),
        }
    }

    /// Number of records currently in the registry.
    pub async fn len(&self) -> usize {
        self.inner.read().await.projects.len()
    }

    /// Whether the registry holds no records.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.projects.is_empty()
    }

    /// List every record as an MCP resource descriptor, in insertion order.
    pub async fn list(&self) -> Vec<Resource> {
        let state = self.inner.read().await;

        state
            .projects
            .iter()
            .map(|(id, project)| {
                let mut raw = RawResource::new(locator::format(id), project.title.clone());
                raw.description = Some(format!("A text project: {}", project.title));
                raw.mime_type = Some(PROJECT_MIME_TYPE.to_string());
                raw.no_annotation()
            })
            .collect()
    }

    /// Read the record behind a locator.
    ///
    /// Returns a single text content entry: the echoed locator, the fixed
    /// MIME type, and the record's path as the body.
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, ProjectError> {
        let id = locator::parse(uri)?;

        let state = self.inner.read().await;
        let project = state
            .projects
            .get(id)
            .ok_or_else(|| ProjectError::not_found(id))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(project.path.clone(), uri)],
        })
    }

    /// Insert a new record and return its identifier.
    ///
    /// Fails without touching the registry if `title` or `path` is empty.
    pub async fn create(&self, title: &str, path: &str) -> Result<String, ProjectError> {
        if title.is_empty() {
            return Err(ProjectError::invalid_argument("title must not be empty"));
        }
        if path.is_empty() {
            return Err(ProjectError::invalid_argument("path must not be empty"));
        }

        let mut state = self.inner.write().await;
        let id = state.next_id.to_string();
        state.next_id += 1;
        state.projects.insert(
            id.clone(),
            Project {
                title: title.to_string(),
                path: path.to_string(),
            },
        );

        info!("Created project {}: {}", id, title);

        Ok(id)
    }

    /// Snapshot of `(identifier, record)` pairs in insertion order.
    pub async fn snapshot(&self) -> Vec<(String, Project)> {
        self.inner
            .read()
            .await
            .projects
            .iter()
            .map(|(id, project)| (id.clone(), project.clone()))
            .collect()
    }
}
