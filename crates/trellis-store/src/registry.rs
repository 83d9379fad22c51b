//! Project registry
//!
//! Bookkeeping for the projects that own task trees: an insertion-ordered
//! list persisted under its own key, sharing one adapter with the
//! per-project tree stores.

use crate::config::StoreConfig;
use crate::tree::TaskTreeStore;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use trellis_persist::KeyValueStore;
use trellis_task::ProjectId;

/// A project owning one task tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier
    pub id: ProjectId,
    /// Display name
    pub name: String,
    /// Short description for the project card
    #[serde(default)]
    pub description: Option<String>,
    /// Whether this is the currently selected project
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Insertion-ordered project list with write-through persistence
#[derive(Debug)]
pub struct ProjectRegistry<S> {
    adapter: Arc<S>,
    config: StoreConfig,
    projects: IndexMap<ProjectId, Project>,
}

impl<S: KeyValueStore> ProjectRegistry<S> {
    /// Open the registry, restoring the persisted project list
    ///
    /// Load problems are fail-soft and produce an empty registry.
    #[must_use]
    pub fn open(adapter: S, config: StoreConfig) -> Self {
        let adapter = Arc::new(adapter);
        let key = registry_key(&config);

        let projects = match adapter.load(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Project>>(&raw) {
                Ok(list) => list.into_iter().map(|p| (p.id, p)).collect(),
                Err(err) => {
                    tracing::warn!("discarding malformed project list under {}: {}", key, err);
                    IndexMap::new()
                }
            },
            Ok(None) => IndexMap::new(),
            Err(err) => {
                tracing::warn!("load failed for {}: {}", key, err);
                IndexMap::new()
            }
        };

        Self {
            adapter,
            config,
            projects,
        }
    }

    /// Create a project with the given name
    ///
    /// Returns the new project's id, or `None` (registry untouched) when
    /// the name is empty or whitespace.
    pub fn create_project(&mut self, name: impl Into<String>) -> Option<ProjectId> {
        let name = name.into();
        if name.trim().is_empty() {
            tracing::warn!("rejected blank-name project");
            return None;
        }

        let project = Project {
            id: ProjectId::new(),
            name,
            description: None,
            is_active: false,
            created_at: Utc::now(),
        };
        let id = project.id;
        self.projects.insert(id, project);
        tracing::debug!("created project {}", id);
        self.persist();
        Some(id)
    }

    /// Rename a project; blank names are ignored
    pub fn rename_project(&mut self, id: ProjectId, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() {
            return false;
        }
        let Some(project) = self.projects.get_mut(&id) else {
            return false;
        };
        project.name = name;
        self.persist();
        true
    }

    /// Set a project's card description
    pub fn set_description(&mut self, id: ProjectId, description: impl Into<String>) -> bool {
        let Some(project) = self.projects.get_mut(&id) else {
            return false;
        };
        project.description = Some(description.into());
        self.persist();
        true
    }

    /// Mark a project as the active one, clearing the previous selection
    pub fn set_active(&mut self, id: ProjectId) -> bool {
        if !self.projects.contains_key(&id) {
            return false;
        }
        for project in self.projects.values_mut() {
            project.is_active = project.id == id;
        }
        self.persist();
        true
    }

    /// Delete a project and its persisted task tree
    pub fn delete_project(&mut self, id: ProjectId) -> bool {
        if self.projects.shift_remove(&id).is_none() {
            tracing::warn!("delete target project {} not found", id);
            return false;
        }
        if let Err(err) = self.adapter.remove(&self.tree_key(id)) {
            tracing::warn!("failed to remove task tree for {}: {}", id, err);
        }
        tracing::debug!("deleted project {}", id);
        self.persist();
        true
    }

    /// Open the task tree store owned by a project
    ///
    /// The returned store shares this registry's adapter. One open tree per
    /// project at a time is assumed, as with any store instance.
    #[must_use]
    pub fn tree(&self, id: ProjectId) -> Option<TaskTreeStore<Arc<S>>> {
        if !self.projects.contains_key(&id) {
            return None;
        }
        Some(TaskTreeStore::open(
            self.tree_key(id),
            Arc::clone(&self.adapter),
            self.config.clone(),
        ))
    }

    /// Whole-tree task count for a project card
    #[must_use]
    pub fn task_count(&self, id: ProjectId) -> usize {
        self.tree(id).map_or(0, |tree| tree.total_count())
    }

    /// Look up a project
    #[inline]
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// The currently active project, if any
    #[must_use]
    pub fn active(&self) -> Option<&Project> {
        self.projects.values().find(|p| p.is_active)
    }

    /// Projects in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if no projects exist
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn tree_key(&self, id: ProjectId) -> String {
        format!("{}:tasks:{}", self.config.key_prefix, id)
    }

    fn persist(&self) {
        let key = registry_key(&self.config);
        let list: Vec<&Project> = self.projects.values().collect();
        match serde_json::to_string(&list) {
            Ok(raw) => {
                if let Err(err) = self.adapter.save(&key, &raw) {
                    tracing::warn!("write-through failed for {}: {}", key, err);
                }
            }
            Err(err) => tracing::warn!("project list encoding failed: {}", err),
        }
    }
}

fn registry_key(config: &StoreConfig) -> String {
    format!("{}:projects", config.key_prefix)
}
