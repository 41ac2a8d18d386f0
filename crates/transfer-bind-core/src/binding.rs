// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field bindings.
//!
//! A [`Binding`] pairs one transfer-side field with one entity-side field
//! and owns the update strategy for that pair. The constructors cover the
//! six supported field shapes:
//!
//! - [`value`](Binding::value): single plain value
//! - [`collection`](Binding::collection): `Vec` of plain values
//! - [`map`](Binding::map): `HashMap` or `BTreeMap` of plain values
//! - [`entity`](Binding::entity): single nested transfer/entity pair
//! - [`entity_collection`](Binding::entity_collection): `Vec` of nested
//!   pairs, reconciled by primary key
//! - [`entity_map`](Binding::entity_map): map of nested pairs, reconciled
//!   by map key

use std::fmt;

use crate::{
    accessor::FieldAccessor,
    context::BindContext,
    error::BindError,
    model::TransferObject,
    spec::UpdateSpec,
    updater::{
        CollectionUpdater, EntityCollectionUpdater, EntityMapUpdater, EntityUpdater, MapLike,
        MapUpdater, Updater, ValueUpdater
    }
};

/// One transfer-field-to-entity-field pairing with its update strategy.
pub struct Binding<D, E> {
    updater: Box<dyn Updater<D, E>>
}

impl<D, E> Binding<D, E>
where
    D: Send + Sync + 'static,
    E: Send + Sync + 'static
{
    /// Bind a single plain value field.
    #[must_use]
    pub fn value<V>(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, V>,
        entity: FieldAccessor<E, V>
    ) -> Self
    where
        V: Clone + PartialEq + Send + Sync + 'static
    {
        Self {
            updater: Box::new(ValueUpdater::new(spec, transfer, entity))
        }
    }

    /// Bind a collection of plain values.
    #[must_use]
    pub fn collection<V>(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, Vec<V>>,
        entity: FieldAccessor<E, Vec<V>>
    ) -> Self
    where
        V: Clone + PartialEq + Send + Sync + 'static
    {
        Self {
            updater: Box::new(CollectionUpdater::new(spec, transfer, entity))
        }
    }

    /// Bind a map of plain values.
    #[must_use]
    pub fn map<M, K, V>(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, M>,
        entity: FieldAccessor<E, M>
    ) -> Self
    where
        M: MapLike<K, V> + Clone + Send + Sync + 'static,
        K: Clone + Send + Sync + 'static,
        V: Clone + PartialEq + Send + Sync + 'static
    {
        Self {
            updater: Box::new(MapUpdater::<D, E, M, K, V>::new(spec, transfer, entity))
        }
    }

    /// Bind a single nested transfer/entity pair.
    #[must_use]
    pub fn entity<P>(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, P>,
        entity: FieldAccessor<E, P::Entity>
    ) -> Self
    where
        P: TransferObject
    {
        Self {
            updater: Box::new(EntityUpdater::new(spec, transfer, entity))
        }
    }

    /// Bind a collection of nested pairs, reconciled by primary key.
    #[must_use]
    pub fn entity_collection<P>(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, Vec<P>>,
        entity: FieldAccessor<E, Vec<P::Entity>>
    ) -> Self
    where
        P: TransferObject
    {
        Self {
            updater: Box::new(EntityCollectionUpdater::new(spec, transfer, entity))
        }
    }

    /// Bind a map of nested pairs, reconciled by map key.
    ///
    /// Both sides must use the same map kind; only the value type differs.
    #[must_use]
    pub fn entity_map<P, MD, ME, K>(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, MD>,
        entity: FieldAccessor<E, ME>
    ) -> Self
    where
        P: TransferObject,
        MD: MapLike<K, P> + Send + Sync + 'static,
        ME: MapLike<K, P::Entity> + Send + Sync + 'static,
        K: Clone + Send + Sync + 'static
    {
        Self {
            updater: Box::new(EntityMapUpdater::<D, E, P, MD, ME, K>::new(spec, transfer, entity))
        }
    }
}

impl<D, E> Binding<D, E> {
    /// Binding name. Matches the transfer-side field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.updater.spec().name()
    }

    /// Target field name on the entity side.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.updater.spec().target()
    }

    /// Per-field update policy.
    #[must_use]
    pub fn spec(&self) -> &UpdateSpec {
        self.updater.spec()
    }

    /// Copy the transfer-side field into the entity.
    ///
    /// Returns `true` when the entity was modified.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the underlying strategy.
    pub fn update(&self, transfer: &D, entity: &mut E, ctx: &BindContext) -> Result<bool, BindError> {
        self.updater.update(transfer, entity, ctx)
    }

    /// Copy the entity-side field back into the transfer object.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the underlying strategy.
    pub fn render(&self, transfer: &mut D, entity: &E, ctx: &BindContext) -> Result<(), BindError> {
        self.updater.render(transfer, entity, ctx)
    }
}

impl<D, E> fmt::Debug for Binding<D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name())
            .field("spec", self.spec())
            .finish()
    }
}
