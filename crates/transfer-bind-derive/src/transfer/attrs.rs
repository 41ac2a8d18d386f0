// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! This module defines the internal [`TransferAttrs`] structure used for
//! parsing `#[transfer(...)]` attributes. This is an implementation detail;
//! the validated model handed to code generation is
//! [`TransferDef`](super::model::TransferDef).
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `entity` | Yes | — | Entity counterpart type |
//! | `dynamic` | No | `true` | Default null policy for bound fields |
//! | `update_all` | No | `false` | Bind every field without requiring `#[update]` |
//! | `order` | No | declaration order | Evaluation order by field name |

use darling::{FromDeriveInput, FromMeta, ast::NestedMeta};
use syn::Ident;

/// Returns the default null policy.
///
/// Used by darling for the `dynamic` attribute default.
pub fn default_dynamic() -> bool {
    true
}

/// Evaluation order list parsed from `order = [a, b]` or `order(a, b)`.
///
/// Entries are transfer-side field names. Fields listed here evaluate in
/// list position; unlisted fields follow in declaration order. Explicit
/// `#[update(order = N)]` ranks take precedence over list position.
#[derive(Debug, Clone, Default)]
pub struct BindingOrder(pub Vec<Ident>);

impl BindingOrder {
    /// Field names in list order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(Ident::to_string).collect()
    }
}

fn order_entry_error<T>(node: &T) -> darling::Error
where
    T: quote::ToTokens
{
    darling::Error::custom("order entries must be bare field names").with_span(node)
}

impl FromMeta for BindingOrder {
    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let names = items
            .iter()
            .map(|item| match item {
                NestedMeta::Meta(syn::Meta::Path(path)) => {
                    path.get_ident().cloned().ok_or_else(|| order_entry_error(path))
                }
                NestedMeta::Meta(meta) => Err(order_entry_error(meta)),
                NestedMeta::Lit(lit) => Err(order_entry_error(lit))
            })
            .collect::<darling::Result<Vec<_>>>()?;
        Ok(Self(names))
    }

    fn from_expr(expr: &syn::Expr) -> darling::Result<Self> {
        match expr {
            syn::Expr::Array(array) => {
                let names = array
                    .elems
                    .iter()
                    .map(|elem| match elem {
                        syn::Expr::Path(path) => {
                            path.path.get_ident().cloned().ok_or_else(|| order_entry_error(path))
                        }
                        _ => Err(order_entry_error(elem))
                    })
                    .collect::<darling::Result<Vec<_>>>()?;
                Ok(Self(names))
            }
            _ => Err(darling::Error::custom(
                "order expects a field name list: order = [a, b] or order(a, b)"
            )
            .with_span(expr))
        }
    }
}

/// Struct-level attributes parsed from `#[transfer(...)]`.
///
/// This is an internal struct used by darling for parsing. The validated
/// model handed to code generation is
/// [`TransferDef`](super::model::TransferDef), which combines these
/// attributes with parsed field definitions.
///
/// # Example
///
/// ```rust,ignore
/// #[transfer(
///     entity = Article,
///     dynamic = false,
///     update_all,
///     order = [title, body]
/// )]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(transfer), supports(struct_named))]
pub struct TransferAttrs {
    /// Struct identifier (e.g., `ArticleDraft`).
    pub ident: Ident,

    /// Entity counterpart type.
    ///
    /// This is a required attribute with no default value. The named type
    /// must implement `EntityModel`; a mismatch is a compile error at the
    /// generated impl.
    pub entity: syn::Path,

    /// Default null policy for bound fields.
    ///
    /// Dynamic bindings skip null transfer values; non-dynamic bindings
    /// propagate them into the entity. Defaults to `true`. Individual
    /// fields override this with `#[update(dynamic = ...)]`.
    #[darling(default = "default_dynamic")]
    pub dynamic: bool,

    /// Bind every field without requiring `#[update]`.
    ///
    /// Fields marked `#[update(skip)]` stay excluded.
    #[darling(default)]
    pub update_all: bool,

    /// Evaluation order by field name.
    ///
    /// Accepts both `order = [a, b]` and `order(a, b)`. Every listed name
    /// must refer to a bound field.
    #[darling(default)]
    pub order: Option<BindingOrder>
}
