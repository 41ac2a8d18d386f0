// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model traits connecting transfer objects to entities.
//!
//! [`TransferObject`] is the transfer (DTO) side of a binding pair and names
//! its persistent counterpart through the `Entity` associated type.
//! [`EntityModel`] is the persistent side and names its primary key type.
//! Both are usually derived; manual implementations register their field
//! bindings explicitly, which is what the derive macro generates anyway.

use std::{
    fmt,
    hash::Hash
};

use crate::binding::Binding;

/// Marker for primary key types.
///
/// Blanket-implemented for every type that can be cloned, compared, hashed,
/// and rendered into error messages.
pub trait TransferKey: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<K> TransferKey for K where K: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// A persistent entity with a primary key.
pub trait EntityModel: Default + Send + Sync + 'static {
    /// Primary key type.
    type Key: TransferKey;

    /// Entity type name, used in log output and error messages.
    const NAME: &'static str;

    /// Primary key of this instance, when one has been assigned.
    fn key(&self) -> Option<Self::Key>;
}

/// A transfer object bound to an entity type.
///
/// The binding table returned by [`bindings`](TransferObject::bindings) is
/// assembled once per process by the type reflector and reused for every
/// update and render involving this pair.
pub trait TransferObject: Default + Send + Sync + 'static {
    /// Entity counterpart of this transfer object.
    type Entity: EntityModel;

    /// Transfer type name, used in log output and error messages.
    const NAME: &'static str;

    /// Primary key carried by this transfer object, if any.
    fn key(&self) -> Option<<Self::Entity as EntityModel>::Key>;

    /// Field bindings in declaration order.
    ///
    /// Called exactly once per process per type pair; the reflector sorts
    /// and caches the result.
    fn bindings() -> Vec<Binding<Self, Self::Entity>>;

    /// Type-level field ordering, consulted for fields without an explicit
    /// order rank. Empty by default.
    fn binding_order() -> &'static [&'static str] {
        &[]
    }
}

/// Primary key type of a transfer object's entity counterpart.
pub type EntityKey<D> = <<D as TransferObject>::Entity as EntityModel>::Key;
