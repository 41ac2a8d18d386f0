// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! TransferObject derive macro implementation.
//!
//! This module contains the parsing and code generation for
//! `#[derive(TransferObject)]`. Parsing is split between darling (the
//! struct-level `#[transfer(...)]` attribute) and hand-rolled
//! `parse_nested_meta` (the field-level `#[update(...)]` attribute); code
//! generation lives in a single module emitting the trait impl.
//!
//! # Architecture
//!
//! ```text
//! transfer.rs (orchestrator)
//! │
//! ├── attrs.rs   → TransferAttrs: #[transfer(...)] via darling
//! ├── field.rs   → BindingField: #[update(...)], #[key], shape detection
//! ├── model.rs   → TransferDef: validated model handed to codegen
//! └── codegen.rs → impl TransferObject emission
//! ```
//!
//! # Generated Code
//!
//! For a pair like:
//!
//! ```rust,ignore
//! #[derive(Default, TransferObject)]
//! #[transfer(entity = Article)]
//! pub struct ArticleDraft {
//!     #[key]
//!     pub id:    Option<u64>,
//!     #[update]
//!     pub title: Option<String>
//! }
//! ```
//!
//! the macro generates:
//!
//! ```rust,ignore
//! impl ::transfer_bind_core::TransferObject for ArticleDraft {
//!     type Entity = Article;
//!
//!     const NAME: &'static str = "ArticleDraft";
//!
//!     fn key(&self) -> Option<<Article as EntityModel>::Key> {
//!         self.id.clone()
//!     }
//!
//!     fn bindings() -> Vec<Binding<Self, Article>> {
//!         vec![
//!             Binding::value(UpdateSpec::new("id"), /* accessors */),
//!             Binding::value(UpdateSpec::new("title"), /* accessors */),
//!         ]
//!     }
//! }
//! ```

mod attrs;
mod codegen;
mod field;
mod model;

#[cfg(test)]
mod tests;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::model::TransferDef;

/// Main entry point for the TransferObject derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match TransferDef::from_derive_input(&input) {
        Ok(transfer) => codegen::generate(&transfer).into(),
        Err(err) => err.write_errors().into()
    }
}
