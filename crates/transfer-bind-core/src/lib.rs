// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core runtime for transfer-bind.
//!
//! This crate synchronizes transfer objects (DTOs) with persistent
//! entities through per-field bindings: an update pass copies transfer
//! fields into an entity and reports whether anything changed, a render
//! pass copies entity state back into a transfer object. Binding tables
//! are assembled once per type pair and cached for the process lifetime.
//!
//! # Overview
//!
//! - [`TransferObject`] / [`EntityModel`] — the two sides of a bound pair
//! - [`Binding`] and [`UpdateSpec`] — one field pairing and its policy
//! - [`TypeReflector`] — memoized, ordered binding table per pair
//! - [`BindingEngine`] — CRUD over a [`PersistenceAccess`] collaborator
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `transfer-bind` directly, which re-exports this
//! crate together with the derive macros. For manual implementations:
//!
//! ```rust,ignore
//! use transfer_bind_core::prelude::*;
//!
//! #[async_trait]
//! impl PersistenceAccess<User> for MyStore {
//!     type Error = sqlx::Error;
//!     // ...
//! }
//!
//! let engine = BindingEngine::<UserDraft, _>::new(store);
//! let user = engine.find_by_id(&7).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accessor;
pub mod binding;
pub mod context;
pub mod engine;
pub mod error;
pub mod model;
pub mod prelude;
pub mod reflector;
pub mod spec;
pub mod updater;

pub use accessor::{FieldAccessor, NullViolation, Slot};
/// Re-export async_trait for persistence implementations.
pub use async_trait::async_trait;
pub use binding::Binding;
pub use context::BindContext;
pub use engine::{BindingEngine, Pagination, PersistenceAccess};
pub use error::{BindError, ErrorKind};
pub use model::{EntityKey, EntityModel, TransferKey, TransferObject};
pub use reflector::TypeReflector;
pub use spec::UpdateSpec;
pub use updater::{
    CollectionUpdater, EntityCollectionUpdater, EntityMapUpdater, EntityUpdater, MapLike,
    MapUpdater, Updater, ValueUpdater
};
