// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing and shape detection.
//!
//! Each named field of the transfer struct is parsed into a
//! [`BindingField`]: the `#[update(...)]` options, the `#[key]` marker, and
//! the binding shape recognized from the declared type.
//!
//! # Shape Detection
//!
//! Detection looks at the last path segment of the declared type, after
//! stripping one `Option` wrapper:
//!
//! | Last segment | Without `nested` | With `nested` |
//! |--------------|------------------|---------------|
//! | `Vec<V>` | collection | entity collection |
//! | `HashMap<K, V>` / `BTreeMap<K, V>` | map | entity map |
//! | anything else | value | entity |
//!
//! Aliased container types are not recognized; they bind as plain values.

use syn::{Attribute, Field, Ident, Type, meta::ParseNestedMeta};

/// Map container kind recognized on a field.
///
/// The entity-side counterpart of a nested entity map is rebuilt from this
/// kind, so both sides always use the same container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    /// `std::collections::HashMap`.
    Hash,
    /// `std::collections::BTreeMap`.
    BTree
}

/// Binding shape recognized from a field declaration.
#[derive(Debug, Clone)]
pub enum FieldShape {
    /// Single plain value.
    Value(Type),

    /// `Vec` of plain values.
    Collection(Type),

    /// Map of plain values.
    Map {
        /// Container kind.
        kind:  MapKind,
        /// Full map type as declared, `Option` stripped.
        map:   Type,
        /// Key type argument.
        key:   Type,
        /// Value type argument.
        value: Type
    },

    /// Single nested transfer object.
    Entity(Type),

    /// `Vec` of nested transfer objects.
    EntityCollection(Type),

    /// Map of nested transfer objects.
    EntityMap {
        /// Container kind.
        kind:  MapKind,
        /// Full map type as declared, `Option` stripped.
        map:   Type,
        /// Key type argument.
        key:   Type,
        /// Nested transfer object type argument.
        value: Type
    }
}

impl FieldShape {
    /// Recognize the binding shape of a declared type.
    ///
    /// Returns whether the field is `Option`-wrapped together with the
    /// shape of the unwrapped type. The `nested` flag switches plain
    /// shapes to their nested entity counterparts.
    pub fn detect(ty: &Type, nested: bool) -> (bool, Self) {
        let (optional, inner) = strip_option(ty);
        (optional, Self::classify(inner, nested))
    }

    fn classify(ty: &Type, nested: bool) -> Self {
        if let Some(segment) = last_segment(ty) {
            let args = type_args(segment);

            if segment.ident == "Vec"
                && let [elem] = args.as_slice()
            {
                let elem = (*elem).clone();
                return if nested {
                    Self::EntityCollection(elem)
                } else {
                    Self::Collection(elem)
                };
            }

            let kind = if segment.ident == "HashMap" {
                Some(MapKind::Hash)
            } else if segment.ident == "BTreeMap" {
                Some(MapKind::BTree)
            } else {
                None
            };
            if let Some(kind) = kind
                && let [key, value] = args.as_slice()
            {
                let map = ty.clone();
                let key = (*key).clone();
                let value = (*value).clone();
                return if nested {
                    Self::EntityMap {
                        kind,
                        map,
                        key,
                        value
                    }
                } else {
                    Self::Map {
                        kind,
                        map,
                        key,
                        value
                    }
                };
            }
        }

        if nested {
            Self::Entity(ty.clone())
        } else {
            Self::Value(ty.clone())
        }
    }
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(type_path) => type_path.path.segments.last(),
        _ => None
    }
}

fn type_args(segment: &syn::PathSegment) -> Vec<&Type> {
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                syn::GenericArgument::Type(ty) => Some(ty),
                _ => None
            })
            .collect(),
        _ => Vec::new()
    }
}

fn strip_option(ty: &Type) -> (bool, &Type) {
    if let Some(segment) = last_segment(ty)
        && segment.ident == "Option"
    {
        let args = type_args(segment);
        if let [inner] = args.as_slice() {
            return (true, inner);
        }
    }
    (false, ty)
}

/// Options parsed from one `#[update(...)]` attribute.
///
/// All options default to unset; the struct-level configuration fills the
/// gaps when the binding table is generated.
#[derive(Debug, Clone, Default)]
pub struct UpdateConfig {
    /// An `#[update]` attribute was present on the field.
    pub present: bool,

    /// Null policy override (`dynamic` / `dynamic = false`).
    pub dynamic: Option<bool>,

    /// Informational nullable flag (`nullable = false`).
    pub nullable: Option<bool>,

    /// Informational updatable flag (`updatable = false`).
    pub updatable: Option<bool>,

    /// Informational insertable flag (`insertable = false`).
    pub insertable: Option<bool>,

    /// The field holds nested transfer objects (`nested`).
    pub nested: bool,

    /// Never bind this field (`skip`).
    pub skip: bool,

    /// Explicit evaluation rank (`order = N`).
    pub order: Option<u32>,

    /// Informational maximum length hint (`length = N`).
    pub length: Option<u32>,

    /// Entity-side field name override (`rename = "name"`).
    pub rename: Option<String>
}

impl UpdateConfig {
    /// Parse options from an `#[update(...)]` attribute.
    ///
    /// A bare `#[update]` marks the field bound with default options.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown option names or malformed values.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut config = Self {
            present: true,
            ..Self::default()
        };

        if matches!(attr.meta, syn::Meta::Path(_)) {
            return Ok(config);
        }

        attr.parse_nested_meta(|meta| {
            let ident = meta
                .path
                .get_ident()
                .ok_or_else(|| syn::Error::new_spanned(&meta.path, "expected identifier"))?;

            match ident.to_string().as_str() {
                "dynamic" => config.dynamic = Some(bool_option(&meta)?),
                "nullable" => config.nullable = Some(bool_option(&meta)?),
                "updatable" => config.updatable = Some(bool_option(&meta)?),
                "insertable" => config.insertable = Some(bool_option(&meta)?),
                "nested" => config.nested = true,
                "skip" => config.skip = true,
                "order" => {
                    let value: syn::LitInt = meta.value()?.parse()?;
                    config.order = Some(value.base10_parse()?);
                }
                "length" => {
                    let value: syn::LitInt = meta.value()?.parse()?;
                    config.length = Some(value.base10_parse()?);
                }
                "rename" => {
                    let value: syn::LitStr = meta.value()?.parse()?;
                    config.rename = Some(value.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown update option '{}', expected: dynamic, nullable, updatable, \
                             insertable, nested, skip, order, length, rename",
                            other
                        )
                    ));
                }
            }

            Ok(())
        })?;

        Ok(config)
    }
}

/// Parse a boolean option accepting both the bare flag and `= bool` forms.
fn bool_option(meta: &ParseNestedMeta<'_>) -> syn::Result<bool> {
    if meta.input.peek(syn::Token![=]) {
        let value: syn::LitBool = meta.value()?.parse()?;
        Ok(value.value())
    } else {
        Ok(true)
    }
}

/// One transfer-side field with all parsed attributes.
///
/// # Example
///
/// ```rust,ignore
/// #[key]                          // is_key = true
/// pub id: Option<u64>,
///
/// #[update(rename = "body_text")] // update.rename = Some("body_text")
/// pub body: Option<String>,
///
/// #[update(nested)]               // shape = Entity(AuthorDraft)
/// pub author: Option<AuthorDraft>,
/// ```
#[derive(Debug)]
pub struct BindingField {
    /// Field identifier (e.g., `id`, `title`).
    pub ident: Ident,

    /// The declared type carries an `Option` wrapper.
    pub optional: bool,

    /// Binding shape recognized from the declared type.
    pub shape: FieldShape,

    /// Parsed `#[update(...)]` options.
    pub update: UpdateConfig,

    /// The field carries the `#[key]` marker.
    pub is_key: bool
}

impl BindingField {
    /// Parse a field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns an error for unnamed fields or malformed `#[update(...)]`
    /// options.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("transfer fields must be named").with_span(field)
        })?;

        let mut update = UpdateConfig::default();
        let mut is_key = false;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                is_key = true;
            } else if attr.path().is_ident("update") {
                update = UpdateConfig::from_attr(attr)?;
            }
        }

        let (optional, shape) = FieldShape::detect(&field.ty, update.nested);

        Ok(Self {
            ident,
            optional,
            shape,
            update,
            is_key
        })
    }

    /// Get the field name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Entity-side field identifier, honoring `rename`.
    #[must_use]
    pub fn target_ident(&self) -> Ident {
        match &self.update.rename {
            Some(rename) => Ident::new(rename, self.ident.span()),
            None => self.ident.clone()
        }
    }
}
