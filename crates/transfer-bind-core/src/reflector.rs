// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Memoized binding tables, one per transfer/entity type pair.
//!
//! [`TypeReflector`] assembles the ordered binding list for a pair once,
//! stores it in a process-wide registry keyed by `(TypeId, TypeId)`, and
//! hands out the same `Arc` to every caller from then on. Assembly runs
//! under the registry write lock with a re-check, so concurrent first
//! calls observe exactly one build.
//!
//! Update and render passes walk the bindings in their fixed evaluation
//! order: explicit order ranks first, then the position in the type-level
//! [`binding_order`](crate::TransferObject::binding_order) list, then
//! declaration order.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::Arc
};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::{
    binding::Binding,
    context::BindContext,
    error::BindError,
    model::{EntityModel, TransferObject}
};

type Registry = HashMap<(TypeId, TypeId), Arc<dyn Any + Send + Sync>>;

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Ordered, immutable binding table for one transfer/entity pair.
///
/// Obtained through [`TypeReflector::of`], never constructed directly.
/// Immutable after assembly and safe for unsynchronized concurrent reads.
pub struct TypeReflector<D>
where
    D: TransferObject
{
    bindings: Vec<Binding<D, D::Entity>>,
    index:    HashMap<&'static str, usize>
}

impl<D> TypeReflector<D>
where
    D: TransferObject
{
    /// Fetch the reflector for this pair, assembling it on first use.
    ///
    /// Idempotent: every call for the same pair returns a pointer-equal
    /// `Arc`, and the binding table is assembled exactly once per process.
    #[must_use]
    pub fn of() -> Arc<Self> {
        let key = (TypeId::of::<D>(), TypeId::of::<D::Entity>());
        if let Some(cached) = Self::lookup(&REGISTRY.read(), key) {
            return cached;
        }
        let mut registry = REGISTRY.write();
        if let Some(cached) = Self::lookup(&registry, key) {
            return cached;
        }
        let reflector = Arc::new(Self::assemble());
        registry.insert(key, Arc::clone(&reflector) as Arc<dyn Any + Send + Sync>);
        reflector
    }

    fn lookup(registry: &Registry, key: (TypeId, TypeId)) -> Option<Arc<Self>> {
        registry
            .get(&key)
            .and_then(|entry| Arc::clone(entry).downcast::<Self>().ok())
    }

    fn assemble() -> Self {
        let order = D::binding_order();
        let mut entries: Vec<(usize, Binding<D, D::Entity>)> =
            D::bindings().into_iter().enumerate().collect();
        entries.sort_by_key(|(declared, binding)| {
            let rank = binding.spec().order().unwrap_or(u32::MAX);
            let listed = order
                .iter()
                .position(|name| *name == binding.name())
                .unwrap_or(usize::MAX);
            (rank, listed, *declared)
        });

        let bindings: Vec<Binding<D, D::Entity>> =
            entries.into_iter().map(|(_, binding)| binding).collect();
        let mut index = HashMap::with_capacity(bindings.len());
        for (position, binding) in bindings.iter().enumerate() {
            index.insert(binding.name(), position);
        }
        debug!(
            transfer = D::NAME,
            entity = <D::Entity as EntityModel>::NAME,
            bindings = bindings.len(),
            "assembled binding table"
        );
        Self {
            bindings,
            index
        }
    }

    /// Copy every bound transfer field into the entity, in evaluation
    /// order.
    ///
    /// Returns `true` when any binding modified the entity.
    ///
    /// # Errors
    ///
    /// Propagates the first binding failure; later bindings do not run.
    pub fn update(
        &self,
        transfer: &D,
        entity: &mut D::Entity,
        ctx: &BindContext
    ) -> Result<bool, BindError> {
        let mut changed = false;
        for binding in &self.bindings {
            if binding.update(transfer, entity, ctx)? {
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Copy every bound entity field back into the transfer object, in
    /// evaluation order.
    ///
    /// # Errors
    ///
    /// Propagates the first binding failure; later bindings do not run.
    pub fn render(
        &self,
        transfer: &mut D,
        entity: &D::Entity,
        ctx: &BindContext
    ) -> Result<(), BindError> {
        for binding in &self.bindings {
            binding.render(transfer, entity, ctx)?;
        }
        Ok(())
    }

    /// Render the entity into a freshly constructed transfer object.
    ///
    /// # Errors
    ///
    /// Propagates the first binding failure.
    pub fn render_new(&self, entity: &D::Entity, ctx: &BindContext) -> Result<D, BindError> {
        let mut transfer = Self::new_dto();
        self.render(&mut transfer, entity, ctx)?;
        Ok(transfer)
    }

    /// Construct a default transfer object.
    #[must_use]
    pub fn new_dto() -> D {
        D::default()
    }

    /// Construct a default entity.
    #[must_use]
    pub fn new_entity() -> D::Entity {
        <D::Entity>::default()
    }

    /// All bindings in evaluation order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding<D, D::Entity>] {
        &self.bindings
    }

    /// Look up a binding by name.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::UnknownBinding`] when no binding carries the
    /// name.
    pub fn binding(&self, name: &str) -> Result<&Binding<D, D::Entity>, BindError> {
        self.index
            .get(name)
            .and_then(|position| self.bindings.get(*position))
            .ok_or_else(|| BindError::unknown_binding(name))
    }
}

impl<D> fmt::Debug for TypeReflector<D>
where
    D: TransferObject
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeReflector")
            .field("transfer", &D::NAME)
            .field("entity", &<D::Entity as EntityModel>::NAME)
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
