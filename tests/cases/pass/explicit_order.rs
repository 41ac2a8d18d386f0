// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Binding order: explicit ranks come first, then the `order` list, then
//! declaration order.

use transfer_bind::{EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Page {
    #[key]
    pub id: Option<u64>,

    pub title: String,

    pub slug: String,

    pub notes: Option<String>,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Page, order = [slug, title])]
pub struct PageDraft {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub title: Option<String>,

    #[update]
    pub slug: Option<String>,

    #[update(order = 1)]
    pub notes: Option<String>,
}

fn main() {
    let reflector = TypeReflector::<PageDraft>::of();
    let names: Vec<&str> = reflector.bindings().iter().map(|b| b.name()).collect();

    // ranked binding first, then the order list, then the rest
    assert_eq!(names, ["notes", "slug", "title", "id"]);
}
