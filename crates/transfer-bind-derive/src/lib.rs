// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Transfer side**: [`TransferObject`](macro@TransferObject) — binds a
//!   transfer struct to its entity counterpart
//! - **Entity side**: [`EntityModel`](macro@EntityModel) — names the primary
//!   key of a persistent entity
//! - **Runtime**: the generated code targets `transfer-bind-core`; see that
//!   crate for the binding engine and updater strategies
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[transfer(...)]`
//!
//! ```rust,ignore
//! #[derive(Default, TransferObject)]
//! #[transfer(
//!     entity = Article,       // Required: entity counterpart type
//!     dynamic = true,         // Optional: default null policy (default: true)
//!     update_all,             // Optional: bind every field without #[update]
//!     order = [title, body]   // Optional: evaluation order by field name
//! )]
//! pub struct ArticleDraft { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct ArticleDraft {
//!     #[key]                          // Primary key, always bound
//!     pub id: Option<u64>,
//!
//!     #[update]                       // Bound with default policy
//!     pub title: Option<String>,
//!
//!     #[update(dynamic = false)]      // Nulls propagate into the entity
//!     pub summary: Option<String>,
//!
//!     #[update(rename = "body_text")] // Entity field has a different name
//!     pub body: Option<String>,
//!
//!     #[update(nested)]               // Nested transfer/entity pair
//!     pub author: Option<AuthorDraft>,
//!
//!     #[update(skip)]                 // Never bound
//!     pub draft_notes: Option<String>,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! For a transfer struct `ArticleDraft` bound to `Article`, the macro
//! generates an `impl transfer_bind_core::TransferObject for ArticleDraft`
//! with:
//!
//! | Item | Content |
//! |------|---------|
//! | `type Entity` | `Article` |
//! | `const NAME` | `"ArticleDraft"` |
//! | `fn key` | Clone of the `#[key]` field |
//! | `fn bindings` | One `Binding` per bound field, shape chosen from the field type |
//! | `fn binding_order` | The `order = [...]` list, when given |
//!
//! Field shapes are recognized from the declared type. `Option` wrapping is
//! transparent on either side:
//!
//! | Declared type | Binding shape |
//! |---------------|---------------|
//! | `V` / `Option<V>` | value |
//! | `Vec<V>` / `Option<Vec<V>>` | collection |
//! | `HashMap<K, V>` / `BTreeMap<K, V>` | map |
//! | `P` with `#[update(nested)]` | nested entity |
//! | `Vec<P>` with `#[update(nested)]` | nested entity collection |
//! | `HashMap<K, P>` with `#[update(nested)]` | nested entity map |

mod entity;
mod transfer;

use proc_macro::TokenStream;

/// Derive macro binding a transfer struct to its entity counterpart.
///
/// # Overview
///
/// `TransferObject` generates the field binding table consumed by the
/// `transfer-bind-core` runtime. Each bound field pairs one transfer-side
/// field with one entity-side field and an update policy; the runtime walks
/// the table to copy values in both directions.
///
/// # Struct Attributes
///
/// Configure the pair with `#[transfer(...)]`:
///
/// | Attribute | Required | Default | Description |
/// |-----------|----------|---------|-------------|
/// | `entity` | **Yes** | — | Entity counterpart type (must implement `EntityModel`) |
/// | `dynamic` | No | `true` | Default null policy for bound fields |
/// | `update_all` | No | `false` | Bind every field, even without `#[update]` |
/// | `order` | No | declaration order | Evaluation order, `order = [a, b]` or `order(a, b)` |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[key]` | Primary key carried by the transfer object. Always bound. Exactly one required. |
/// | `#[update]` | Bind this field with the default policy. |
/// | `#[update(dynamic)]` / `#[update(dynamic = false)]` | Override the null policy for this field. |
/// | `#[update(nullable = false)]` | Informational: the target column rejects nulls. |
/// | `#[update(updatable = false)]` | Informational: excluded from UPDATE statements. |
/// | `#[update(insertable = false)]` | Informational: excluded from INSERT statements. |
/// | `#[update(order = N)]` | Explicit evaluation rank; lower runs first. |
/// | `#[update(length = N)]` | Informational maximum length hint. |
/// | `#[update(rename = "name")]` | Entity-side field has a different name. |
/// | `#[update(nested)]` | The field holds a nested transfer object (or a collection or map of them). |
/// | `#[update(skip)]` | Never bind this field. |
///
/// Options combine: `#[update(dynamic = false, rename = "body_text")]`.
///
/// # Null Policy
///
/// A `None` in an `Option`-typed transfer field is treated by policy:
/// dynamic bindings skip it and leave the entity untouched, non-dynamic
/// bindings propagate it and clear the entity field. The struct-level
/// `dynamic` sets the default; `#[update(dynamic = ...)]` overrides it per
/// field.
///
/// # Examples
///
/// ## Basic Pair
///
/// ```rust,ignore
/// use transfer_bind::{EntityModel, TransferObject};
///
/// #[derive(Default, EntityModel)]
/// pub struct Article {
///     #[key]
///     pub id:    Option<u64>,
///     pub title: String,
///     pub body:  Option<String>
/// }
///
/// #[derive(Default, TransferObject)]
/// #[transfer(entity = Article)]
/// pub struct ArticleDraft {
///     #[key]
///     pub id:    Option<u64>,
///     #[update]
///     pub title: Option<String>,
///     #[update(dynamic = false)]
///     pub body:  Option<String>
/// }
/// ```
///
/// ## Nested Pairs
///
/// Nested fields reconcile by primary key (collections) or by map key
/// (maps); matched elements are updated in place:
///
/// ```rust,ignore
/// #[derive(Default, TransferObject)]
/// #[transfer(entity = Article)]
/// pub struct ArticleDraft {
///     #[key]
///     pub id:       Option<u64>,
///     #[update(nested)]
///     pub author:   Option<AuthorDraft>,
///     #[update(nested)]
///     pub comments: Vec<CommentDraft>
/// }
/// ```
///
/// # Compile-Time Guarantees
///
/// - A missing or mistyped entity-side field is a compile error at the
///   derive site, not a runtime reflection failure.
/// - `order = [...]` entries must name bound fields.
/// - Exactly one `#[key]` field is enforced.
/// - Generic transfer structs are rejected.
#[proc_macro_derive(TransferObject, attributes(transfer, update, key))]
pub fn derive_transfer_object(input: TokenStream) -> TokenStream {
    transfer::derive(input)
}

/// Derive macro naming the primary key of a persistent entity.
///
/// # Overview
///
/// `EntityModel` implements the entity side of a binding pair: the key type,
/// the entity name used in logs and errors, and key extraction.
///
/// # Attributes
///
/// | Attribute | Required | Description |
/// |-----------|----------|-------------|
/// | `#[key]` | **Yes** | Marks the primary key field. Exactly one per struct. |
///
/// The key field may be declared as `K` or `Option<K>`; the generated
/// `Key` associated type is `K` either way, and `key()` returns `None` for
/// an unassigned `Option` key.
///
/// # Example
///
/// ```rust,ignore
/// use transfer_bind::EntityModel;
/// use uuid::Uuid;
///
/// #[derive(Default, EntityModel)]
/// pub struct Article {
///     #[key]
///     pub id:    Option<Uuid>,
///     pub title: String
/// }
/// ```
#[proc_macro_derive(EntityModel, attributes(key))]
pub fn derive_entity_model(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
