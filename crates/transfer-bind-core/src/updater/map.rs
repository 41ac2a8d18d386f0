// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Strategy for maps of plain values, plus the map abstraction shared with
//! the entity-map strategy.

use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
    marker::PhantomData
};

use tracing::warn;

use crate::{
    accessor::FieldAccessor,
    context::BindContext,
    error::BindError,
    spec::UpdateSpec,
    updater::Updater
};

/// Minimal map surface required by the map strategies.
///
/// Implemented for [`HashMap`] and [`BTreeMap`], which keeps the strategies
/// agnostic of the concrete map kind a field uses.
pub trait MapLike<K, V>: Default {
    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Check whether the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the value stored under `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Store `value` under `key`, replacing any previous entry.
    fn insert(&mut self, key: K, value: V);

    /// Remove and return the value stored under `key`.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Borrow all keys.
    fn keys(&self) -> Vec<&K>;

    /// Borrow all entries.
    fn entries(&self) -> Vec<(&K, &V)>;
}

impl<K, V> MapLike<K, V> for HashMap<K, V>
where
    K: Eq + Hash
{
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        Self::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        Self::remove(self, key)
    }

    fn keys(&self) -> Vec<&K> {
        Self::keys(self).collect()
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V> MapLike<K, V> for BTreeMap<K, V>
where
    K: Ord
{
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        Self::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        Self::remove(self, key)
    }

    fn keys(&self) -> Vec<&K> {
        Self::keys(self).collect()
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

/// Synchronizes a map of plain values.
///
/// Update direction: entries are diffed by key. Keys present only on the
/// entity side are removed, changed values are overwritten, keys present
/// only on the transfer side are inserted. The changed flag reflects
/// whether any of the three happened. A missing entity-side container is
/// tolerated: the transfer container is adopted and a warning is logged.
///
/// Render direction: entity entries are merged into the transfer container;
/// a missing entity-side container renders nothing.
pub struct MapUpdater<D, E, M, K, V> {
    spec:     UpdateSpec,
    transfer: FieldAccessor<D, M>,
    entity:   FieldAccessor<E, M>,
    _marker:  PhantomData<(K, V)>
}

impl<D, E, M, K, V> MapUpdater<D, E, M, K, V> {
    /// Build the strategy from a policy and the two field accessors.
    #[must_use]
    pub const fn new(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, M>,
        entity: FieldAccessor<E, M>
    ) -> Self {
        Self {
            spec,
            transfer,
            entity,
            _marker: PhantomData
        }
    }
}

impl<D, E, M, K, V> Updater<D, E> for MapUpdater<D, E, M, K, V>
where
    D: Send + Sync + 'static,
    E: Send + Sync + 'static,
    M: MapLike<K, V> + Clone + Send + Sync + 'static,
    K: Clone + Send + Sync + 'static,
    V: Clone + PartialEq + Send + Sync + 'static
{
    fn spec(&self) -> &UpdateSpec {
        &self.spec
    }

    fn update(&self, transfer: &D, entity: &mut E, _ctx: &BindContext) -> Result<bool, BindError> {
        match self.transfer.get(transfer) {
            None => {
                if self.spec.is_dynamic() {
                    return Ok(false);
                }
                let had_value = self.entity.get(entity).is_some();
                self.entity
                    .set(entity, None)
                    .map_err(|_| BindError::null_not_allowed(self.spec.name()))?;
                Ok(had_value)
            }
            Some(values) => match self.entity.get_mut(entity) {
                None => {
                    warn!(
                        field = self.spec.name(),
                        "entity map missing, adopting transfer entries"
                    );
                    self.entity
                        .set(entity, Some(values.clone()))
                        .map_err(|_| BindError::null_not_allowed(self.spec.name()))?;
                    Ok(true)
                }
                Some(current) => {
                    let mut changed = false;

                    let mut stale = Vec::new();
                    for key in current.keys() {
                        if values.get(key).is_none() {
                            stale.push(key.clone());
                        }
                    }
                    for key in &stale {
                        current.remove(key);
                        changed = true;
                    }

                    for (key, value) in values.entries() {
                        if current.get(key) != Some(value) {
                            current.insert(key.clone(), value.clone());
                            changed = true;
                        }
                    }
                    Ok(changed)
                }
            }
        }
    }

    fn render(&self, transfer: &mut D, entity: &E, _ctx: &BindContext) -> Result<(), BindError> {
        match self.entity.get(entity) {
            None => {
                warn!(field = self.spec.name(), "entity map missing, skipping render");
                Ok(())
            }
            Some(values) => match self.transfer.get_mut(transfer) {
                Some(current) => {
                    for (key, value) in values.entries() {
                        current.insert(key.clone(), value.clone());
                    }
                    Ok(())
                }
                None => self
                    .transfer
                    .set(transfer, Some(values.clone()))
                    .map_err(|_| BindError::null_not_allowed(self.spec.name()))
            }
        }
    }
}
