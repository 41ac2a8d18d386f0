// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A bound transfer field needs a matching entity field.

use transfer_bind::{EntityModel, TransferObject};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Article {
    #[key]
    pub id: Option<u64>,

    pub headline: String,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Article)]
pub struct ArticleDraft {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub slug: Option<String>,
}

fn main() {}
