// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Unknown `#[update(...)]` options are rejected with the full option list.

use transfer_bind::{EntityModel, TransferObject};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Contact {
    #[key]
    pub id: Option<u64>,

    pub email: String,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Contact)]
pub struct ContactDraft {
    #[key]
    pub id: Option<u64>,

    #[update(bogus)]
    pub email: Option<String>,
}

fn main() {}
