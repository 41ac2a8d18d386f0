// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Strategy for single plain value fields.

use crate::{
    accessor::FieldAccessor,
    context::BindContext,
    error::BindError,
    spec::UpdateSpec,
    updater::Updater
};

/// Synchronizes one plain value field.
///
/// Update direction: a null transfer value is skipped on dynamic bindings
/// and propagated on non-dynamic ones. A present value is written only when
/// it differs from the stored one, so the changed flag stays accurate.
///
/// Render direction: the entity value is copied unconditionally.
pub struct ValueUpdater<D, E, V> {
    spec:     UpdateSpec,
    transfer: FieldAccessor<D, V>,
    entity:   FieldAccessor<E, V>
}

impl<D, E, V> ValueUpdater<D, E, V> {
    /// Build the strategy from a policy and the two field accessors.
    #[must_use]
    pub const fn new(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, V>,
        entity: FieldAccessor<E, V>
    ) -> Self {
        Self {
            spec,
            transfer,
            entity
        }
    }
}

impl<D, E, V> Updater<D, E> for ValueUpdater<D, E, V>
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
            Some(value) => {
                if self.entity.get(entity) == Some(value) {
                    return Ok(false);
                }
                self.entity
                    .set(entity, Some(value.clone()))
                    .map_err(|_| BindError::null_not_allowed(self.spec.name()))?;
                Ok(true)
            }
        }
    }

    fn render(&self, transfer: &mut D, entity: &E, _ctx: &BindContext) -> Result<(), BindError> {
        let value = self.entity.get(entity).cloned();
        self.transfer
            .set(transfer, value)
            .map_err(|_| BindError::null_not_allowed(self.spec.name()))
    }
}
