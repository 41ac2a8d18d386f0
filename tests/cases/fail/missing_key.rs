// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A transfer object must mark exactly one field with `#[key]`.

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
    pub id: Option<u64>,

    #[update]
    pub email: Option<String>,
}

fn main() {}
