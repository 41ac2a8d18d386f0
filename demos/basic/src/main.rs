// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Basic CRUD example with transfer-bind
//!
//! Demonstrates the engine surface over a derived pair:
//! - `#[derive(EntityModel)]` / `#[derive(TransferObject)]` binding
//! - a hand-rolled in-memory [`PersistenceAccess`] collaborator
//! - create, read, partial update, bulk update, and delete

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use async_trait::async_trait;
use transfer_bind::{BindingEngine, EntityModel, Pagination, PersistenceAccess, TransferObject};

// ============================================================================
// Entity Definitions
// ============================================================================

/// Persistent project row.
#[derive(Debug, Default, Clone, EntityModel)]
pub struct Project {
    #[key]
    pub id: Option<u64>,

    pub name: String,

    pub tagline: Option<String>,

    pub tags: Vec<String>,
}

/// Transfer object for [`Project`].
///
/// Every bound field is dynamic: a `None` in an incoming form leaves the
/// stored value untouched, so partial patches need no special casing.
#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Project)]
pub struct ProjectForm {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub name: Option<String>,

    #[update]
    pub tagline: Option<String>,

    #[update]
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// In-Memory Persistence
// ============================================================================

/// `HashMap`-backed store assigning sequential keys on first persist.
struct ProjectStore {
    rows: Mutex<HashMap<u64, Project>>,
    next_key: AtomicU64,
}

impl ProjectStore {
    fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_key: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl PersistenceAccess<Project> for ProjectStore {
    type Error = std::io::Error;

    async fn find(&self, key: &u64) -> Result<Option<Project>, Self::Error> {
        Ok(self.rows.lock().unwrap().get(key).cloned())
    }

    async fn find_by_ids(&self, ids: &[u64]) -> Result<Vec<Project>, Self::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(ids.iter().filter_map(|id| rows.get(id).cloned()).collect())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Project>, Self::Error> {
        let rows = self.rows.lock().unwrap();
        let mut all: Vec<Project> = rows.values().cloned().collect();
        all.sort_by_key(|project| project.id);
        Ok(all
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn persist(&self, mut entity: Project) -> Result<Project, Self::Error> {
        let key = match entity.id {
            Some(key) => key,
            None => {
                let key = self.next_key.fetch_add(1, Ordering::SeqCst);
                entity.id = Some(key);
                key
            }
        };
        self.rows.lock().unwrap().insert(key, entity.clone());
        Ok(entity)
    }

    async fn merge(&self, entity: Project) -> Result<Project, Self::Error> {
        match entity.id {
            Some(key) => {
                self.rows.lock().unwrap().insert(key, entity.clone());
                Ok(entity)
            }
            None => Err(std::io::Error::other("merge without key")),
        }
    }

    async fn remove(&self, key: &u64) -> Result<bool, Self::Error> {
        Ok(self.rows.lock().unwrap().remove(key).is_some())
    }

    async fn remove_by_ids(&self, ids: &[u64]) -> Result<u64, Self::Error> {
        let mut rows = self.rows.lock().unwrap();
        Ok(ids.iter().filter(|id| rows.remove(id).is_some()).count() as u64)
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("demo_basic=info,transfer_bind_core=debug")
        .init();

    let engine = BindingEngine::<ProjectForm, _>::new(ProjectStore::new());

    // Create: keyless forms persist as new rows and come back with a key.
    let alpha = engine
        .persist(&ProjectForm {
            name: Some("alpha".to_string()),
            tagline: Some("first demo project".to_string()),
            tags: Some(vec!["demo".to_string()]),
            ..ProjectForm::default()
        })
        .await
        .expect("persist alpha");
    let beta = engine
        .persist(&ProjectForm {
            name: Some("beta".to_string()),
            ..ProjectForm::default()
        })
        .await
        .expect("persist beta");
    tracing::info!(?alpha.id, ?beta.id, "persisted two projects");

    // Read: single key, then a page.
    let fetched = engine
        .find_by_id(&alpha.id.unwrap())
        .await
        .expect("find alpha");
    tracing::info!(name = ?fetched.name, "fetched by id");

    let page = engine.list(Pagination::new(10, 0)).await.expect("list");
    tracing::info!(count = page.len(), "listed first page");

    // Partial update: only the tagline is set, name and tags stay put.
    let patched = engine
        .update_by_id(&ProjectForm {
            id: alpha.id,
            tagline: Some("ships real soon".to_string()),
            ..ProjectForm::default()
        })
        .await
        .expect("patch alpha");
    tracing::info!(name = ?patched.name, tagline = ?patched.tagline, "patched tagline only");

    // Bulk update: unmatched keys pass through when all_required is false.
    let bulk = engine
        .update_by_ids(
            vec![
                ProjectForm {
                    id: beta.id,
                    tags: Some(vec!["beta".to_string(), "demo".to_string()]),
                    ..ProjectForm::default()
                },
                ProjectForm {
                    id: Some(999),
                    name: Some("ghost".to_string()),
                    ..ProjectForm::default()
                },
            ],
            false,
        )
        .await
        .expect("bulk update");
    tracing::info!(count = bulk.len(), "bulk update done, unmatched passed through");

    // Delete: one by key, the rest by ids.
    let removed = engine
        .remove_by_id(&alpha.id.unwrap())
        .await
        .expect("remove alpha");
    let swept = engine
        .remove_by_ids(&[beta.id.unwrap(), 999])
        .await
        .expect("remove rest");
    tracing::info!(removed, swept, "store emptied");
}
