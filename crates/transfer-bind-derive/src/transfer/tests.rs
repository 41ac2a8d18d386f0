// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for transfer parsing and code generation.
//!
//! Tests use `syn::parse_quote!` to build derive inputs, then verify either
//! the parsed [`TransferDef`] or the token output of
//! [`codegen::generate`].
//!
//! # Test Categories
//!
//! | Category | Coverage |
//! |----------|----------|
//! | Eligibility | `#[update]`, `update_all`, `skip`, key always bound |
//! | Policy | dynamic default, per-field override, informational flags |
//! | Shapes | value, collection, map, nested entity shapes in output |
//! | Ordering | `order = [...]`, `order(...)`, explicit ranks |
//! | Validation | missing entity, key rules, generics, unknown options |

use syn::DeriveInput;

use super::{codegen, model::TransferDef};

fn parse(input: DeriveInput) -> TransferDef {
    TransferDef::from_derive_input(&input).unwrap()
}

fn generate(input: DeriveInput) -> String {
    codegen::generate(&parse(input)).to_string()
}

#[test]
fn key_and_marked_fields_are_bound() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update]
            pub title: Option<String>,
            pub internal: Option<String>,
        }
    };
    let transfer = parse(input);
    let names: Vec<String> = transfer.fields.iter().map(|f| f.name_str()).collect();
    assert_eq!(names, ["id", "title"]);
    assert_eq!(transfer.key_field().name_str(), "id");
}

#[test]
fn update_all_binds_unmarked_fields() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article, update_all)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            pub title: Option<String>,
            #[update(skip)]
            pub scratch: Option<String>,
        }
    };
    let transfer = parse(input);
    let names: Vec<String> = transfer.fields.iter().map(|f| f.name_str()).collect();
    assert_eq!(names, ["id", "title"]);
}

#[test]
fn missing_entity_attribute_is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(dynamic = false)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
        }
    };
    let err = TransferDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("entity"));
}

#[test]
fn generated_impl_names_the_pair() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains("impl :: transfer_bind_core :: TransferObject for ArticleDraft"));
    assert!(tokens.contains("type Entity = Article"));
    assert!(tokens.contains("\"ArticleDraft\""));
}

#[test]
fn dynamic_defaults_to_true() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update]
            pub title: Option<String>,
        }
    };
    let tokens = generate(input);
    assert!(!tokens.contains("with_dynamic"));
}

#[test]
fn struct_level_dynamic_false_applies_to_all() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article, dynamic = false)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update]
            pub title: Option<String>,
            #[update(dynamic)]
            pub body: Option<String>,
        }
    };
    let tokens = generate(input);
    // id and title inherit the struct default, body overrides it back
    assert_eq!(tokens.matches("with_dynamic (false)").count(), 2);
}

#[test]
fn informational_flags_reach_the_spec() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update(nullable = false, updatable = false, insertable = false, length = 120)]
            pub title: Option<String>,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains("with_nullable (false)"));
    assert!(tokens.contains("with_updatable (false)"));
    assert!(tokens.contains("with_insertable (false)"));
    assert!(tokens.contains("with_length (120u32)"));
}

#[test]
fn rename_points_the_entity_accessor_at_the_target() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update(rename = "body_text")]
            pub body: Option<String>,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains("with_rename (\"body_text\")"));
    assert!(tokens.contains("entity . body_text"));
    assert!(tokens.contains("transfer . body"));
}

#[test]
fn shapes_pick_their_constructors() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update]
            pub title: Option<String>,
            #[update]
            pub tags: Option<Vec<String>>,
            #[update]
            pub labels: HashMap<String, String>,
            #[update(nested)]
            pub author: Option<AuthorDraft>,
            #[update(nested)]
            pub comments: Vec<CommentDraft>,
            #[update(nested)]
            pub notes: BTreeMap<String, NoteDraft>,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains(":: value :: < u64 >"));
    assert!(tokens.contains(":: value :: < String >"));
    assert!(tokens.contains(":: collection :: < String >"));
    assert!(tokens.contains(":: map :: < HashMap < String , String > , String , String >"));
    assert!(tokens.contains(":: entity :: < AuthorDraft >"));
    assert!(tokens.contains(":: entity_collection :: < CommentDraft >"));
    assert!(tokens.contains(":: entity_map ::"));
    assert!(tokens.contains(":: std :: collections :: BTreeMap < String"));
}

#[test]
fn order_list_overrides_binding_order() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article, order = [body, title])]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update]
            pub title: Option<String>,
            #[update]
            pub body: Option<String>,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains("fn binding_order"));
    assert!(tokens.contains("\"body\" , \"title\""));
}

#[test]
fn order_accepts_paren_form() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article, order(title, body))]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update]
            pub title: Option<String>,
            #[update]
            pub body: Option<String>,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains("\"title\" , \"body\""));
}

#[test]
fn order_entry_must_name_a_bound_field() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article, order = [ghost])]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update]
            pub title: Option<String>,
        }
    };
    let err = TransferDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn explicit_rank_reaches_the_spec() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[update(order = 3)]
            pub title: Option<String>,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains("with_order (3u32)"));
}

#[test]
fn optional_key_clones_directly() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains("self . id . clone ()"));
    assert!(!tokens.contains("Some (self . id . clone ())"));
}

#[test]
fn bare_key_wraps_in_some() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: u64,
        }
    };
    let tokens = generate(input);
    assert!(tokens.contains("Some (self . id . clone ())"));
}

#[test]
fn missing_key_is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[update]
            pub title: Option<String>,
        }
    };
    let err = TransferDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("exactly one field with #[key]"));
}

#[test]
fn second_key_is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            pub id: Option<u64>,
            #[key]
            pub alt: Option<u64>,
        }
    };
    let err = TransferDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("only one #[key]"));
}

#[test]
fn skipped_key_is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            #[update(skip)]
            pub id: Option<u64>,
        }
    };
    let err = TransferDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("cannot be skipped"));
}

#[test]
fn nested_key_is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft {
            #[key]
            #[update(nested)]
            pub id: Option<AuthorDraft>,
        }
    };
    let err = TransferDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("cannot be nested"));
}

#[test]
fn generic_struct_is_rejected() {
    let input: DeriveInput = syn::parse_quote! {
        #[transfer(entity = Article)]
        pub struct ArticleDraft<T> {
            #[key]
            pub id: Option<T>,
        }
    };
    let err = TransferDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("generic structs"));
}
