// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Strategy for collections of nested pairs, reconciled by primary key.

use std::collections::HashMap;

use tracing::warn;

use crate::{
    accessor::FieldAccessor,
    context::BindContext,
    error::BindError,
    model::{EntityKey, EntityModel, TransferObject},
    reflector::TypeReflector,
    spec::UpdateSpec,
    updater::Updater
};

/// Reconciles a collection of nested transfer/entity pairs by primary key.
///
/// Update direction: transfer elements carrying a key that matches a stored
/// element update that element in place. Keyless and unmatched elements
/// become freshly constructed entities. Stored elements whose key no longer
/// appears on the transfer side are dropped. The changed flag covers all
/// three cases, including a pure removal. A missing entity-side collection
/// is a configuration error: reconciliation needs an initialized target.
/// When a nested update fails mid-way, the collection keeps the elements
/// reconciled so far plus the untouched leftovers; nothing is lost.
///
/// Render direction: every stored element is rendered into a newly
/// constructed transfer element; nothing is matched or reused. A missing
/// entity-side collection renders nothing.
pub struct EntityCollectionUpdater<D, E, P>
where
    P: TransferObject
{
    spec:     UpdateSpec,
    transfer: FieldAccessor<D, Vec<P>>,
    entity:   FieldAccessor<E, Vec<P::Entity>>
}

impl<D, E, P> EntityCollectionUpdater<D, E, P>
where
    P: TransferObject
{
    /// Build the strategy from a policy and the two field accessors.
    #[must_use]
    pub const fn new(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, Vec<P>>,
        entity: FieldAccessor<E, Vec<P::Entity>>
    ) -> Self {
        Self {
            spec,
            transfer,
            entity
        }
    }
}

impl<D, E, P> Updater<D, E> for EntityCollectionUpdater<D, E, P>
where
    D: Send + Sync + 'static,
    E: Send + Sync + 'static,
    P: TransferObject
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
                    current.clear();
                    return Ok(true);
                }

                let reflector = TypeReflector::<P>::of();
                let mut changed = false;
                let mut existing: HashMap<EntityKey<P>, P::Entity> = HashMap::new();
                for element in std::mem::take(current) {
                    match element.key() {
                        Some(key) => {
                            existing.insert(key, element);
                        }
                        // keyless stored elements can never be matched
                        None => changed = true
                    }
                }

                let mut next: Vec<P::Entity> = Vec::with_capacity(values.len());
                let mut failure = None;
                for value in values {
                    match value.key().and_then(|key| existing.remove(&key)) {
                        Some(mut target) => match reflector.update(value, &mut target, ctx) {
                            Ok(nested) => {
                                if nested {
                                    changed = true;
                                }
                                next.push(target);
                            }
                            Err(err) => {
                                next.push(target);
                                failure = Some(err);
                                break;
                            }
                        },
                        None => {
                            let mut fresh = P::Entity::default();
                            match reflector.update(value, &mut fresh, ctx) {
                                Ok(_) => {
                                    next.push(fresh);
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
                    // keep reconciled elements and untouched leftovers on failure
                    next.extend(existing.into_values());
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
                warn!(
                    field = self.spec.name(),
                    "entity collection missing, skipping render"
                );
                Ok(())
            }
            Some(elements) => {
                let reflector = TypeReflector::<P>::of();
                let mut rendered = Vec::with_capacity(elements.len());
                for element in elements {
                    rendered.push(reflector.render_new(element, ctx)?);
                }
                match self.transfer.get_mut(transfer) {
                    Some(current) => {
                        current.extend(rendered);
                        Ok(())
                    }
                    None => self
                        .transfer
                        .set(transfer, Some(rendered))
                        .map_err(|_| BindError::null_not_allowed(self.spec.name()))
                }
            }
        }
    }
}
