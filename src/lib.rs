// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # transfer-bind
//!
//! One crate, both halves. Re-exports:
//! - [`TransferObject`] and [`EntityModel`] derive macros from
//!   `transfer-bind-derive`
//! - All runtime types from `transfer-bind-core` ([`Binding`],
//!   [`TypeReflector`], [`BindingEngine`], [`PersistenceAccess`])
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};
//!
//! #[derive(Debug, Default, Clone, EntityModel)]
//! struct Article {
//!     #[key]
//!     id:    Option<u64>,
//!     title: String,
//! }
//!
//! #[derive(Debug, Default, Clone, TransferObject)]
//! #[transfer(entity = Article)]
//! struct ArticleDraft {
//!     #[key]
//!     id:    Option<u64>,
//!     #[update]
//!     title: Option<String>,
//! }
//!
//! let reflector = TypeReflector::<ArticleDraft>::of();
//! let changed = reflector.update(&draft, &mut article, &BindContext::default())?;
//! ```

// Re-export all runtime types
pub use transfer_bind_core::*;
// Re-export both derive macros
pub use transfer_bind_derive::{EntityModel, TransferObject};
