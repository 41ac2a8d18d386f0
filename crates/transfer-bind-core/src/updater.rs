// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Update strategies for the six supported field shapes.
//!
//! Each strategy implements [`Updater`] and is selected at binding
//! construction time based on the field shape:
//!
//! | Strategy | Field shape |
//! |----------|-------------|
//! | [`ValueUpdater`] | single plain value |
//! | [`CollectionUpdater`] | `Vec` of plain values |
//! | [`MapUpdater`] | map of plain values |
//! | [`EntityUpdater`] | single nested transfer/entity pair |
//! | [`EntityCollectionUpdater`] | `Vec` of nested pairs |
//! | [`EntityMapUpdater`] | map of nested pairs |
//!
//! # Null handling
//!
//! A null transfer value on a dynamic binding is skipped. On a non-dynamic
//! binding it is propagated: the entity field is nulled out, which is a
//! configuration error when the entity stores the field as non-optional.
//!
//! Containers add one asymmetry. A value-shaped container that was never
//! initialized on the entity side is tolerated with a warning: the update
//! direction adopts the transfer container, the render direction skips the
//! field. An entity-shaped container in the same state is a hard error,
//! because reconciliation by key has no safe fallback.

mod collection;
mod entity;
mod entity_collection;
mod entity_map;
mod map;
mod value;

pub use collection::CollectionUpdater;
pub use entity::EntityUpdater;
pub use entity_collection::EntityCollectionUpdater;
pub use entity_map::EntityMapUpdater;
pub use map::{MapLike, MapUpdater};
pub use value::ValueUpdater;

use crate::{
    context::BindContext,
    error::BindError,
    spec::UpdateSpec
};

/// Bidirectional synchronization strategy for one field pairing.
///
/// Implementations are stateless beyond their accessors and policy; the
/// same instance serves concurrent calls.
pub trait Updater<D, E>: Send + Sync {
    /// Per-field update policy.
    fn spec(&self) -> &UpdateSpec;

    /// Copy the transfer-side field into the entity.
    ///
    /// Returns `true` when the entity was modified.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::NullNotAllowed`] when a null value reaches
    /// non-optional storage and [`BindError::UninitializedTarget`] when an
    /// entity-shaped container is missing on the entity side.
    fn update(&self, transfer: &D, entity: &mut E, ctx: &BindContext) -> Result<bool, BindError>;

    /// Copy the entity-side field back into the transfer object.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::NullNotAllowed`] when an absent entity value
    /// reaches a non-optional transfer field.
    fn render(&self, transfer: &mut D, entity: &E, ctx: &BindContext) -> Result<(), BindError>;
}
