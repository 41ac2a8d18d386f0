// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Strategy for a single nested transfer/entity pair.

use crate::{
    accessor::FieldAccessor,
    context::BindContext,
    error::BindError,
    model::TransferObject,
    reflector::TypeReflector,
    spec::UpdateSpec,
    updater::Updater
};

/// Synchronizes one nested transfer/entity pair through its own reflector.
///
/// Update direction: the nested transfer value is applied recursively to
/// the nested entity. A missing nested entity is constructed fresh and
/// assigned, which always counts as a change. A null transfer value follows
/// the usual dynamic rules.
///
/// Render direction: the nested entity is rendered recursively into the
/// nested transfer value, constructing one when absent. A missing nested
/// entity renders nothing and leaves the transfer value as it was.
pub struct EntityUpdater<D, E, P>
where
    P: TransferObject
{
    spec:     UpdateSpec,
    transfer: FieldAccessor<D, P>,
    entity:   FieldAccessor<E, P::Entity>
}

impl<D, E, P> EntityUpdater<D, E, P>
where
    P: TransferObject
{
    /// Build the strategy from a policy and the two field accessors.
    #[must_use]
    pub const fn new(
        spec: UpdateSpec,
        transfer: FieldAccessor<D, P>,
        entity: FieldAccessor<E, P::Entity>
    ) -> Self {
        Self {
            spec,
            transfer,
            entity
        }
    }
}

impl<D, E, P> Updater<D, E> for EntityUpdater<D, E, P>
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
            Some(nested) => {
                let reflector = TypeReflector::<P>::of();
                match self.entity.get_mut(entity) {
                    Some(target) => reflector.update(nested, target, ctx),
                    None => {
                        let mut fresh = P::Entity::default();
                        reflector.update(nested, &mut fresh, ctx)?;
                        self.entity
                            .set(entity, Some(fresh))
                            .map_err(|_| BindError::null_not_allowed(self.spec.name()))?;
                        Ok(true)
                    }
                }
            }
        }
    }

    fn render(&self, transfer: &mut D, entity: &E, ctx: &BindContext) -> Result<(), BindError> {
        match self.entity.get(entity) {
            None => Ok(()),
            Some(source) => {
                let reflector = TypeReflector::<P>::of();
                match self.transfer.get_mut(transfer) {
                    Some(nested) => reflector.render(nested, source, ctx),
                    None => {
                        let nested = reflector.render_new(source, ctx)?;
                        self.transfer
                            .set(transfer, Some(nested))
                            .map_err(|_| BindError::null_not_allowed(self.spec.name()))
                    }
                }
            }
        }
    }
}
