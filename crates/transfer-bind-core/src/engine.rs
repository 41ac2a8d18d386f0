// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CRUD orchestration over a persistence collaborator.
//!
//! [`BindingEngine`] composes the reflector for one transfer/entity pair
//! with a [`PersistenceAccess`] implementation: fetched entities are
//! rendered into fresh transfer objects, incoming transfer objects are
//! applied to stored entities before merging them back. The engine holds
//! no state beyond the collaborator and a [`BindContext`]; transaction
//! scope belongs to the caller.

use std::{collections::HashMap, fmt, marker::PhantomData};

use async_trait::async_trait;
use tracing::debug;

use crate::{
    context::BindContext,
    error::BindError,
    model::{EntityKey, EntityModel, TransferObject},
    reflector::TypeReflector
};

/// Pagination parameters for list operations.
///
/// # Example
///
/// ```rust
/// use transfer_bind_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 items
/// let next = Pagination::new(10, 10); // Next 10 items
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: i64,

    /// Number of results to skip.
    pub offset: i64
}

impl Pagination {
    /// Create new pagination parameters.
    ///
    /// # Arguments
    ///
    /// * `limit` — Maximum results to return
    /// * `offset` — Number of results to skip
    #[must_use]
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Create pagination for a specific page.
    ///
    /// # Arguments
    ///
    /// * `page` — Page number (0-indexed)
    /// * `per_page` — Items per page
    ///
    /// # Example
    ///
    /// ```rust
    /// use transfer_bind_core::Pagination;
    ///
    /// let page_0 = Pagination::page(0, 25); // offset=0, limit=25
    /// let page_2 = Pagination::page(2, 25); // offset=50, limit=25
    /// ```
    #[must_use]
    pub const fn page(page: i64, per_page: i64) -> Self {
        Self {
            limit:  per_page,
            offset: page * per_page
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit:  100,
            offset: 0
        }
    }
}

/// Persistence collaborator for one entity type.
///
/// The engine depends on these signatures only. Queries, connection
/// handling, and transaction scope are the implementation's concern.
#[async_trait]
pub trait PersistenceAccess<E>: Send + Sync
where
    E: EntityModel
{
    /// Collaborator error type, wrapped into [`BindError::Persistence`] by
    /// the engine.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one entity by primary key.
    async fn find(&self, key: &E::Key) -> Result<Option<E>, Self::Error>;

    /// Fetch every stored entity whose key appears in `ids`.
    ///
    /// Missing keys are skipped, not errors.
    async fn find_by_ids(&self, ids: &[E::Key]) -> Result<Vec<E>, Self::Error>;

    /// Fetch a page of entities.
    async fn list(&self, page: Pagination) -> Result<Vec<E>, Self::Error>;

    /// Store a new entity, returning the stored state with its assigned
    /// key.
    async fn persist(&self, entity: E) -> Result<E, Self::Error>;

    /// Store changes to an existing entity, returning the stored state.
    async fn merge(&self, entity: E) -> Result<E, Self::Error>;

    /// Delete one entity by primary key, reporting whether one was stored.
    async fn remove(&self, key: &E::Key) -> Result<bool, Self::Error>;

    /// Delete every entity whose key appears in `ids`, returning the
    /// number deleted.
    async fn remove_by_ids(&self, ids: &[E::Key]) -> Result<u64, Self::Error>;
}

/// CRUD engine for one transfer type and its persistence collaborator.
///
/// # Example
///
/// ```rust,ignore
/// let engine = BindingEngine::<UserDraft, _>::new(store);
/// let user = engine.find_by_id(&7).await?;
/// ```
pub struct BindingEngine<D, A>
where
    D: TransferObject,
    A: PersistenceAccess<D::Entity>
{
    access:  A,
    context: BindContext,
    _marker: PhantomData<D>
}

impl<D, A> BindingEngine<D, A>
where
    D: TransferObject,
    A: PersistenceAccess<D::Entity>
{
    /// Build an engine around a persistence collaborator.
    #[must_use]
    pub fn new(access: A) -> Self {
        Self {
            access,
            context: BindContext::new(),
            _marker: PhantomData
        }
    }

    /// Replace the context handed to every update and render pass.
    #[must_use]
    pub fn with_context(mut self, context: BindContext) -> Self {
        self.context = context;
        self
    }

    /// Borrow the persistence collaborator.
    #[must_use]
    pub fn access(&self) -> &A {
        &self.access
    }

    /// Fetch one entity and render it into a fresh transfer object.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::NotFound`] (expected kind) when nothing is
    /// stored under `key`, or [`BindError::Persistence`] when the
    /// collaborator fails.
    pub async fn find_by_id(&self, key: &EntityKey<D>) -> Result<D, BindError> {
        let entity = self
            .access
            .find(key)
            .await
            .map_err(BindError::persistence)?
            .ok_or_else(|| BindError::not_found(<D::Entity as EntityModel>::NAME, key))?;
        TypeReflector::<D>::of().render_new(&entity, &self.context)
    }

    /// Fetch every stored entity for `ids` and render each.
    ///
    /// Keys with no stored entity are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Persistence`] when the collaborator fails.
    pub async fn find_by_ids(&self, ids: &[EntityKey<D>]) -> Result<Vec<D>, BindError> {
        let entities = self
            .access
            .find_by_ids(ids)
            .await
            .map_err(BindError::persistence)?;
        let reflector = TypeReflector::<D>::of();
        let mut rendered = Vec::with_capacity(entities.len());
        for entity in &entities {
            rendered.push(reflector.render_new(entity, &self.context)?);
        }
        Ok(rendered)
    }

    /// Fetch a page of entities and render each.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Persistence`] when the collaborator fails.
    pub async fn list(&self, page: Pagination) -> Result<Vec<D>, BindError> {
        let entities = self
            .access
            .list(page)
            .await
            .map_err(BindError::persistence)?;
        let reflector = TypeReflector::<D>::of();
        let mut rendered = Vec::with_capacity(entities.len());
        for entity in &entities {
            rendered.push(reflector.render_new(entity, &self.context)?);
        }
        Ok(rendered)
    }

    /// Apply the transfer object to a fresh entity, store it, and render
    /// the stored state.
    ///
    /// The target entity starts empty, so every non-null transfer field is
    /// written regardless of its dynamic flag.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Persistence`] when the collaborator fails, or
    /// a configuration error from the update pass.
    pub async fn persist(&self, transfer: &D) -> Result<D, BindError> {
        let reflector = TypeReflector::<D>::of();
        let mut entity = TypeReflector::<D>::new_entity();
        reflector.update(transfer, &mut entity, &self.context)?;
        let stored = self
            .access
            .persist(entity)
            .await
            .map_err(BindError::persistence)?;
        reflector.render_new(&stored, &self.context)
    }

    /// Apply the transfer object to the stored entity under its own key,
    /// merge, and render the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingKey`] when the transfer object carries
    /// no key, [`BindError::NotFound`] when nothing is stored under it,
    /// or [`BindError::Persistence`] when the collaborator fails.
    pub async fn update_by_id(&self, transfer: &D) -> Result<D, BindError> {
        let key = transfer
            .key()
            .ok_or_else(|| BindError::missing_key(<D::Entity as EntityModel>::NAME))?;
        let mut entity = self
            .access
            .find(&key)
            .await
            .map_err(BindError::persistence)?
            .ok_or_else(|| BindError::not_found(<D::Entity as EntityModel>::NAME, &key))?;
        let reflector = TypeReflector::<D>::of();
        reflector.update(transfer, &mut entity, &self.context)?;
        let stored = self
            .access
            .merge(entity)
            .await
            .map_err(BindError::persistence)?;
        reflector.render_new(&stored, &self.context)
    }

    /// Bulk variant of [`update_by_id`](BindingEngine::update_by_id).
    ///
    /// Stored entities are fetched once into a keyed lookup. With
    /// `all_required`, any transfer object whose key has no stored entity
    /// fails the whole call before anything is merged. Without it,
    /// unmatched transfer objects pass through unchanged and only matched
    /// ones are updated and merged. Each merged entity replaces its lookup
    /// entry, so repeated keys within one batch apply cumulatively in
    /// batch order.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingDuringBulkUpdate`] naming the first
    /// missing key and [`BindError::MissingKey`] for keyless transfer
    /// objects when `all_required` is set, or [`BindError::Persistence`]
    /// when the collaborator fails.
    pub async fn update_by_ids(
        &self,
        transfers: Vec<D>,
        all_required: bool
    ) -> Result<Vec<D>, BindError> {
        let ids: Vec<EntityKey<D>> = transfers.iter().filter_map(TransferObject::key).collect();
        let fetched = self
            .access
            .find_by_ids(&ids)
            .await
            .map_err(BindError::persistence)?;
        let mut stored: HashMap<EntityKey<D>, D::Entity> = HashMap::with_capacity(fetched.len());
        for entity in fetched {
            if let Some(key) = entity.key() {
                stored.insert(key, entity);
            }
        }

        if all_required {
            for transfer in &transfers {
                let key = transfer
                    .key()
                    .ok_or_else(|| BindError::missing_key(<D::Entity as EntityModel>::NAME))?;
                if !stored.contains_key(&key) {
                    return Err(BindError::missing_during_bulk_update(
                        <D::Entity as EntityModel>::NAME,
                        &key
                    ));
                }
            }
        }

        let reflector = TypeReflector::<D>::of();
        let mut results = Vec::with_capacity(transfers.len());
        for transfer in transfers {
            let matched = transfer
                .key()
                .and_then(|key| stored.remove(&key).map(|entity| (key, entity)));
            match matched {
                Some((key, mut entity)) => {
                    reflector.update(&transfer, &mut entity, &self.context)?;
                    let merged = self
                        .access
                        .merge(entity)
                        .await
                        .map_err(BindError::persistence)?;
                    results.push(reflector.render_new(&merged, &self.context)?);
                    stored.insert(key, merged);
                }
                None => {
                    debug!(
                        entity = <D::Entity as EntityModel>::NAME,
                        "no stored entity for transfer key, passing through"
                    );
                    results.push(transfer);
                }
            }
        }
        Ok(results)
    }

    /// Delete one entity by primary key.
    ///
    /// Returns whether a stored entity was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Persistence`] when the collaborator fails.
    pub async fn remove_by_id(&self, key: &EntityKey<D>) -> Result<bool, BindError> {
        self.access.remove(key).await.map_err(BindError::persistence)
    }

    /// Delete every entity whose key appears in `ids`.
    ///
    /// Returns the number of deleted entities.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Persistence`] when the collaborator fails.
    pub async fn remove_by_ids(&self, ids: &[EntityKey<D>]) -> Result<u64, BindError> {
        self.access
            .remove_by_ids(ids)
            .await
            .map_err(BindError::persistence)
    }
}

impl<D, A> fmt::Debug for BindingEngine<D, A>
where
    D: TransferObject,
    A: PersistenceAccess<D::Entity>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingEngine")
            .field("transfer", &D::NAME)
            .field("entity", &<D::Entity as EntityModel>::NAME)
            .finish_non_exhaustive()
    }
}
