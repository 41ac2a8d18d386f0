// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use transfer_bind_core::prelude::*;
//! ```

pub use crate::{
    BindContext, BindError, Binding, BindingEngine, EntityKey, EntityModel, ErrorKind,
    FieldAccessor, Pagination, PersistenceAccess, TransferObject, TypeReflector, UpdateSpec,
    async_trait
};
