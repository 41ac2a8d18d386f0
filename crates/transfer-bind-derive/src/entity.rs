// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! EntityModel derive macro implementation.
//!
//! Generates the entity side of a binding pair: key type, entity name, and
//! key extraction.
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Default, EntityModel)]
//! pub struct Article {
//!     #[key]
//!     pub id:    Option<u64>,
//!     pub title: String
//! }
//! ```
//!
//! Generates:
//!
//! ```rust,ignore
//! impl ::transfer_bind_core::EntityModel for Article {
//!     type Key = u64;
//!
//!     const NAME: &'static str = "Article";
//!
//!     fn key(&self) -> Option<Self::Key> {
//!         self.id.clone()
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Type, parse_macro_input};

/// Main entry point for the EntityModel derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(
            darling::Error::custom("EntityModel cannot be derived for generic structs")
                .with_span(&input.generics)
        );
    }

    let named = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(named) => &named.named,
            _ => {
                return Err(
                    darling::Error::custom("EntityModel requires named fields").with_span(ident)
                );
            }
        },
        _ => {
            return Err(darling::Error::custom("EntityModel can only be derived for structs")
                .with_span(ident));
        }
    };

    let mut keys = named
        .iter()
        .filter(|field| field.attrs.iter().any(|attr| attr.path().is_ident("key")));
    let key = keys.next().ok_or_else(|| {
        darling::Error::custom("EntityModel requires exactly one field with #[key] attribute")
            .with_span(ident)
    })?;
    if let Some(extra) = keys.next() {
        return Err(
            darling::Error::custom("EntityModel allows only one #[key] field").with_span(extra)
        );
    }

    let key_ident = key.ident.clone().ok_or_else(|| {
        darling::Error::custom("EntityModel fields must be named").with_span(key)
    })?;

    let (key_ty, key_body) = match option_inner(&key.ty) {
        Some(inner) => (inner.clone(), quote! { self.#key_ident.clone() }),
        None => (
            key.ty.clone(),
            quote! { ::core::option::Option::Some(self.#key_ident.clone()) }
        )
    };

    let name = ident.to_string();

    Ok(quote! {
        #[automatically_derived]
        impl ::transfer_bind_core::EntityModel for #ident {
            type Key = #key_ty;

            const NAME: &'static str = #name;

            fn key(&self) -> ::core::option::Option<Self::Key> {
                #key_body
            }
        }
    })
}

fn option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let syn::PathArguments::AngleBracketed(args) = &segment.arguments
        && args.args.len() == 1
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}
