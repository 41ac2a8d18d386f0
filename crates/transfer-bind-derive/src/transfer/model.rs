// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validated transfer definition.
//!
//! [`TransferDef`] combines the struct-level `#[transfer(...)]` attributes
//! with the parsed field definitions, keeping only the bound fields. All
//! structural validation happens here, so code generation works from a
//! model that is known to be consistent.
//!
//! # Validation
//!
//! | Rule | Error |
//! |------|-------|
//! | No generic parameters | `TransferObject cannot be derived for generic structs` |
//! | Exactly one `#[key]` | missing or duplicate key errors |
//! | `#[key]` not skipped | `#[key] fields cannot be skipped` |
//! | `#[key]` not nested | `#[key] fields cannot be nested` |
//! | `order` entries name bound fields | `order entry '...' does not name a bound field` |

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident};

use super::{
    attrs::{BindingOrder, TransferAttrs},
    field::BindingField
};

/// Complete parsed transfer definition.
///
/// This is the model handed to code generation. `fields` holds the bound
/// fields in declaration order: the `#[key]` field, every field with an
/// `#[update]` attribute, and with `update_all` every remaining field,
/// minus `#[update(skip)]`.
#[derive(Debug)]
pub struct TransferDef {
    /// Struct identifier (e.g., `ArticleDraft`).
    pub ident: Ident,

    /// Entity counterpart type.
    pub entity: syn::Path,

    /// Default null policy for bound fields.
    pub dynamic: bool,

    /// Evaluation order list, when given.
    pub order: Option<BindingOrder>,

    /// Bound fields in declaration order.
    pub fields: Vec<BindingField>,

    /// Index of the `#[key]` field in `fields`.
    ///
    /// Validated at parse time to always be valid.
    key_index: usize
}

impl TransferDef {
    /// Parse a transfer definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Missing `entity` attribute
    /// - Applied to a non-struct, tuple struct, or generic struct
    /// - Missing, duplicate, skipped, or nested `#[key]` field
    /// - Malformed `#[update(...)]` options
    /// - `order` entries that do not name bound fields
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = TransferAttrs::from_derive_input(input)?;

        if !input.generics.params.is_empty() {
            return Err(
                darling::Error::custom("TransferObject cannot be derived for generic structs")
                    .with_span(&input.generics)
            );
        }

        let parsed: Vec<BindingField> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(BindingField::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("TransferObject requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom(
                    "TransferObject can only be derived for structs"
                )
                .with_span(&input.ident));
            }
        };

        let key_position = parsed.iter().position(|f| f.is_key).ok_or_else(|| {
            darling::Error::custom(
                "TransferObject requires exactly one field with #[key] attribute"
            )
            .with_span(&input.ident)
        })?;
        if let Some(extra) = parsed.iter().skip(key_position + 1).find(|f| f.is_key) {
            return Err(darling::Error::custom("TransferObject allows only one #[key] field")
                .with_span(&extra.ident));
        }

        let key = &parsed[key_position];
        if key.update.skip {
            return Err(
                darling::Error::custom("#[key] fields cannot be skipped").with_span(&key.ident)
            );
        }
        if key.update.nested {
            return Err(
                darling::Error::custom("#[key] fields cannot be nested").with_span(&key.ident)
            );
        }

        let fields: Vec<BindingField> = parsed
            .into_iter()
            .filter(|f| !f.update.skip && (f.is_key || f.update.present || attrs.update_all))
            .collect();

        let key_index = fields.iter().position(|f| f.is_key).ok_or_else(|| {
            darling::Error::custom(
                "TransferObject requires exactly one field with #[key] attribute"
            )
            .with_span(&input.ident)
        })?;

        if let Some(order) = &attrs.order {
            for name in &order.0 {
                if !fields.iter().any(|f| f.ident == *name) {
                    return Err(darling::Error::custom(format!(
                        "order entry '{}' does not name a bound field",
                        name
                    ))
                    .with_span(name));
                }
            }
        }

        Ok(Self {
            ident: attrs.ident,
            entity: attrs.entity,
            dynamic: attrs.dynamic,
            order: attrs.order,
            fields,
            key_index
        })
    }

    /// Get the `#[key]` field.
    ///
    /// Guaranteed to exist as it is validated during parsing.
    #[must_use]
    pub fn key_field(&self) -> &BindingField {
        &self.fields[self.key_index]
    }
}
