// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! TransferObject impl generation.
//!
//! Emits the `impl TransferObject` block from a validated
//! [`TransferDef`]. Every path is absolute (`::transfer_bind_core::...`),
//! so the generated code works regardless of what the call site imports.
//!
//! # Generated Accessors
//!
//! Field access goes through `Slot`, which is implemented for both `V` and
//! `Option<V>` storage. The same closure shape therefore serves optional
//! and required fields on either side:
//!
//! ```rust,ignore
//! ::transfer_bind_core::FieldAccessor::new(
//!     |transfer: &ArticleDraft| ::transfer_bind_core::Slot::slot_ref(&transfer.title),
//!     |transfer: &mut ArticleDraft| ::transfer_bind_core::Slot::slot_mut(&mut transfer.title),
//!     |transfer: &mut ArticleDraft, value| {
//!         ::transfer_bind_core::Slot::slot_put(&mut transfer.title, value)
//!     }
//! )
//! ```
//!
//! A renamed or missing entity-side field shows up as a compile error on
//! the generated closure, at the derive site.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::{
    field::{BindingField, FieldShape, MapKind},
    model::TransferDef
};

/// Generate the complete `impl TransferObject` block.
pub fn generate(transfer: &TransferDef) -> TokenStream {
    let ident = &transfer.ident;
    let entity = &transfer.entity;
    let name = ident.to_string();
    let key = key_expr(transfer);
    let bindings: Vec<TokenStream> = transfer
        .fields
        .iter()
        .map(|field| binding_expr(transfer, field))
        .collect();
    let order = order_impl(transfer);

    quote! {
        #[automatically_derived]
        impl ::transfer_bind_core::TransferObject for #ident {
            type Entity = #entity;

            const NAME: &'static str = #name;

            fn key(
                &self
            ) -> ::core::option::Option<<#entity as ::transfer_bind_core::EntityModel>::Key> {
                #key
            }

            fn bindings() -> ::std::vec::Vec<::transfer_bind_core::Binding<Self, #entity>> {
                ::std::vec![#(#bindings),*]
            }

            #order
        }
    }
}

/// Generate the `key` body honoring the key field's `Option` wrapping.
fn key_expr(transfer: &TransferDef) -> TokenStream {
    let key = transfer.key_field();
    let ident = &key.ident;
    if key.optional {
        quote! { self.#ident.clone() }
    } else {
        quote! { ::core::option::Option::Some(self.#ident.clone()) }
    }
}

/// Generate the `binding_order` override when an order list was given.
fn order_impl(transfer: &TransferDef) -> TokenStream {
    match &transfer.order {
        Some(order) => {
            let names = order.names();
            quote! {
                fn binding_order() -> &'static [&'static str] {
                    &[#(#names),*]
                }
            }
        }
        None => TokenStream::new()
    }
}

/// Generate the `UpdateSpec` builder chain for one field.
fn spec_expr(transfer: &TransferDef, field: &BindingField) -> TokenStream {
    let name = field.name_str();
    let mut spec = quote! { ::transfer_bind_core::UpdateSpec::new(#name) };

    if !field.update.dynamic.unwrap_or(transfer.dynamic) {
        spec = quote! { #spec.with_dynamic(false) };
    }
    if field.update.nullable == Some(false) {
        spec = quote! { #spec.with_nullable(false) };
    }
    if field.update.updatable == Some(false) {
        spec = quote! { #spec.with_updatable(false) };
    }
    if field.update.insertable == Some(false) {
        spec = quote! { #spec.with_insertable(false) };
    }
    if let Some(order) = field.update.order {
        spec = quote! { #spec.with_order(#order) };
    }
    if let Some(length) = field.update.length {
        spec = quote! { #spec.with_length(#length) };
    }
    if let Some(rename) = &field.update.rename {
        spec = quote! { #spec.with_rename(#rename) };
    }

    spec
}

/// Generate the transfer-side accessor for one field.
fn transfer_accessor(transfer: &TransferDef, field: &BindingField) -> TokenStream {
    let ident = &transfer.ident;
    let name = &field.ident;
    quote! {
        ::transfer_bind_core::FieldAccessor::new(
            |transfer: &#ident| ::transfer_bind_core::Slot::slot_ref(&transfer.#name),
            |transfer: &mut #ident| ::transfer_bind_core::Slot::slot_mut(&mut transfer.#name),
            |transfer: &mut #ident, value| {
                ::transfer_bind_core::Slot::slot_put(&mut transfer.#name, value)
            }
        )
    }
}

/// Generate the entity-side accessor for one field, honoring `rename`.
fn entity_accessor(transfer: &TransferDef, field: &BindingField) -> TokenStream {
    let entity = &transfer.entity;
    let target = field.target_ident();
    quote! {
        ::transfer_bind_core::FieldAccessor::new(
            |entity: &#entity| ::transfer_bind_core::Slot::slot_ref(&entity.#target),
            |entity: &mut #entity| ::transfer_bind_core::Slot::slot_mut(&mut entity.#target),
            |entity: &mut #entity, value| {
                ::transfer_bind_core::Slot::slot_put(&mut entity.#target, value)
            }
        )
    }
}

/// Generate the `Binding` constructor call for one field.
///
/// Type parameters are always spelled out, so inference never has to
/// guess the element, key, or value types.
fn binding_expr(transfer: &TransferDef, field: &BindingField) -> TokenStream {
    let ident = &transfer.ident;
    let entity = &transfer.entity;
    let spec = spec_expr(transfer, field);
    let transfer_accessor = transfer_accessor(transfer, field);
    let entity_accessor = entity_accessor(transfer, field);

    match &field.shape {
        FieldShape::Value(value) => quote! {
            ::transfer_bind_core::Binding::<#ident, #entity>::value::<#value>(
                #spec,
                #transfer_accessor,
                #entity_accessor
            )
        },
        FieldShape::Collection(elem) => quote! {
            ::transfer_bind_core::Binding::<#ident, #entity>::collection::<#elem>(
                #spec,
                #transfer_accessor,
                #entity_accessor
            )
        },
        FieldShape::Map {
            map,
            key,
            value,
            ..
        } => quote! {
            ::transfer_bind_core::Binding::<#ident, #entity>::map::<#map, #key, #value>(
                #spec,
                #transfer_accessor,
                #entity_accessor
            )
        },
        FieldShape::Entity(nested) => quote! {
            ::transfer_bind_core::Binding::<#ident, #entity>::entity::<#nested>(
                #spec,
                #transfer_accessor,
                #entity_accessor
            )
        },
        FieldShape::EntityCollection(nested) => quote! {
            ::transfer_bind_core::Binding::<#ident, #entity>::entity_collection::<#nested>(
                #spec,
                #transfer_accessor,
                #entity_accessor
            )
        },
        FieldShape::EntityMap {
            kind,
            map,
            key,
            value
        } => {
            let entity_map = entity_map_type(*kind, key, value);
            quote! {
                ::transfer_bind_core::Binding::<#ident, #entity>::entity_map::<
                    #value,
                    #map,
                    #entity_map,
                    #key
                >(
                    #spec,
                    #transfer_accessor,
                    #entity_accessor
                )
            }
        }
    }
}

/// Rebuild the entity-side map type for a nested entity map.
///
/// Keeps the transfer side's container kind and key type, swapping the
/// value for the nested entity type.
fn entity_map_type(kind: MapKind, key: &Type, value: &Type) -> TokenStream {
    let entity_value = quote! { <#value as ::transfer_bind_core::TransferObject>::Entity };
    match kind {
        MapKind::Hash => quote! { ::std::collections::HashMap<#key, #entity_value> },
        MapKind::BTree => quote! { ::std::collections::BTreeMap<#key, #entity_value> }
    }
}
