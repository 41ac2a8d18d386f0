// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Strategy for maps of nested pairs, reconciled by map key.

use std::marker::PhantomData;

use tracing::warn;

use crate::{
    accessor::FieldAccessor,
    context::BindContext,
    error::BindError,
    model::TransferObject,
    reflector::TypeReflector,
    spec::UpdateSpec,
    updater::{MapLike, Updater}
};

/// Reconciles a map of nested transfer/entity pairs by map key.
///
/// Same reconciliation as the collection strategy, except elements are
/// identified by the key they are stored under rather than by a primary
/// key they carry. Matched entries update the stored entity in place,
/// unmatched transfer entries construct fresh entities, and stored entries
/// whose key disappeared are dropped. A missing entity-side map is a
/// configuration error. When a nested update fails mid-way, the map keeps
/// the entries reconciled so far plus the untouched leftovers.
///
/// Render direction: every stored entry is rendered into a newly
/// constructed transfer value under the same key. A missing entity-side
/// map renders nothing.
pub struct EntityMapUpdater<D, E, P, MD, ME, K> {
    spec:     UpdateSpec,
    transfer: FieldAccessor<D, MD>,
    entity:   FieldAccessor<E, ME>,
    _marker:  PhantomData<(K, P)>
}

impl<D, E, P, MD, ME, K> EntityMapUpdater<D, E, P, MD, ME, K> {
    /// Build the strategy from a policy and the two field accessors.
    #[must_use]
    pub const fn new(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, MD>,
        entity: FieldAccessor<E, ME>
    ) -> Self {
        Self {
            spec,
            transfer,
            entity,
            _marker: PhantomData
        }
    }
}

impl<D, E, P, MD, ME, K> Updater<D, E> for EntityMapUpdater<D, E, P, MD, ME, K>
where
    D: Send + Sync + 'static,
    E: Send + Sync + 'static,
    P: TransferObject,
    MD: MapLike<K, P> + Send + Sync + 'static,
    ME: MapLike<K, P::Entity> + Send + Sync + 'static,
    K: Clone + Send + Sync + 'static
{
    fn spec(&self) -> &UpdateSpec {
        &self.spec
    }

    fn update(&self, transfer: &D, entity: &mut E, ctx: &BindContext) -> Result<bool, BindError> {
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
            Some(values) => {
                let current = match self.entity.get_mut(entity) {
                    Some(current) => current,
                    None => return Err(BindError::uninitialized_target(self.spec.name()))
                };
                if values.is_empty() {
                    if current.is_empty() {
                        return Ok(false);
                    }
                    *current = ME::default();
                    return Ok(true);
                }

                let reflector = TypeReflector::<P>::of();
                let mut existing = std::mem::take(current);
                let mut next = ME::default();
                let mut changed = false;
                let mut failure = None;
                for (key, value) in values.entries() {
                    match existing.remove(key) {
                        Some(mut target) => match reflector.update(value, &mut target, ctx) {
                            Ok(nested) => {
                                if nested {
                                    changed = true;
                                }
                                next.insert(key.clone(), target);
                            }
                            Err(err) => {
                                next.insert(key.clone(), target);
                                failure = Some(err);
                                break;
                            }
                        },
                        None => {
                            let mut fresh = P::Entity::default();
                            match reflector.update(value, &mut fresh, ctx) {
                                Ok(_) => {
                                    next.insert(key.clone(), fresh);
                                    changed = true;
                                }
                                Err(err) => {
                                    failure = Some(err);
                                    break;
                                }
                            }
                        }
                    }
                }
                if let Some(err) = failure {
                    // keep reconciled entries and untouched leftovers on failure
                    let leftover: Vec<K> = existing.keys().into_iter().cloned().collect();
                    for key in leftover {
                        if let Some(value) = existing.remove(&key) {
                            next.insert(key, value);
                        }
                    }
                    *current = next;
                    return Err(err);
                }
                if !existing.is_empty() {
                    changed = true;
                }
                *current = next;
                Ok(changed)
            }
        }
    }

    fn render(&self, transfer: &mut D, entity: &E, ctx: &BindContext) -> Result<(), BindError> {
        match self.entity.get(entity) {
            None => {
                warn!(field = self.spec.name(), "entity map missing, skipping render");
                Ok(())
            }
            Some(values) => {
                let reflector = TypeReflector::<P>::of();
                let mut rendered: Vec<(K, P)> = Vec::with_capacity(values.len());
                for (key, value) in values.entries() {
                    rendered.push((key.clone(), reflector.render_new(value, ctx)?));
                }
                match self.transfer.get_mut(transfer) {
                    Some(current) => {
                        for (key, value) in rendered {
                            current.insert(key, value);
                        }
                        Ok(())
                    }
                    None => {
                        let mut fresh = MD::default();
                        for (key, value) in rendered {
                            fresh.insert(key, value);
                        }
                        self.transfer
                            .set(transfer, Some(fresh))
                            .map_err(|_| BindError::null_not_allowed(self.spec.name()))
                    }
                }
            }
        }
    }
}
