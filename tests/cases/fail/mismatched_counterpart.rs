// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Both sides of a binding must store the same value type.

use transfer_bind::{EntityModel, TransferObject};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Counter {
    #[key]
    pub id: Option<u64>,

    pub count: u32,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Counter)]
pub struct CounterPatch {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub count: Option<String>,
}

fn main() {}
