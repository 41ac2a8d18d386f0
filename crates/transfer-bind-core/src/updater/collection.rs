// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Strategy for collections of plain values.

use tracing::warn;

use crate::{
    accessor::FieldAccessor,
    context::BindContext,
    error::BindError,
    spec::UpdateSpec,
    updater::Updater
};

/// Synchronizes a `Vec` of plain values.
///
/// Update direction: contents are replaced wholesale when they differ; no
/// per-element identity is tracked. A missing entity-side container is
/// tolerated: the transfer container is adopted and a warning is logged,
/// since plain values carry no identity to reconcile.
///
/// Render direction: entity elements are appended onto the transfer
/// container; a missing entity-side container renders nothing.
pub struct CollectionUpdater<D, E, V> {
    spec:     UpdateSpec,
    transfer: FieldAccessor<D, Vec<V>>,
    entity:   FieldAccessor<E, Vec<V>>
}

impl<D, E, V> CollectionUpdater<D, E, V> {
    /// Build the strategy from a policy and the two field accessors.
    #[must_use]
    pub const fn new(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, Vec<V>>,
        entity: FieldAccessor<E, Vec<V>>
    ) -> Self {
        Self {
            spec,
            transfer,
            entity
        }
    }
}

impl<D, E, V> Updater<D, E> for CollectionUpdater<D, E, V>
where
    D: Send + Sync + 'static,
    E: Send + Sync + 'static,
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
                        "entity collection missing, adopting transfer values"
                    );
                    self.entity
                        .set(entity, Some(values.clone()))
                        .map_err(|_| BindError::null_not_allowed(self.spec.name()))?;
                    Ok(true)
                }
                Some(current) => {
                    if current == values {
                        return Ok(false);
                    }
                    current.clear();
                    current.extend(values.iter().cloned());
                    Ok(true)
                }
            }
        }
    }

    fn render(&self, transfer: &mut D, entity: &E, _ctx: &BindContext) -> Result<(), BindError> {
        match self.entity.get(entity) {
            None => {
                warn!(
                    field = self.spec.name(),
                    "entity collection missing, skipping render"
                );
                Ok(())
            }
            Some(values) => match self.transfer.get_mut(transfer) {
                Some(current) => {
                    current.extend(values.iter().cloned());
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
