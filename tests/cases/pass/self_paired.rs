// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `entity = Self` binds a struct to another instance of itself.

use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel, TransferObject)]
#[transfer(entity = Self)]
pub struct Settings {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub theme: Option<String>,

    #[update]
    pub page_size: Option<u32>,
}

fn main() {
    let reflector = TypeReflector::<Settings>::of();
    let incoming = Settings {
        id: Some(1),
        theme: Some("dark".to_string()),
        page_size: None,
    };
    let mut stored = Settings {
        id: Some(1),
        theme: Some("light".to_string()),
        page_size: Some(25),
    };

    let changed = reflector
        .update(&incoming, &mut stored, &BindContext::default())
        .unwrap();

    assert!(changed);
    assert_eq!(stored.theme.as_deref(), Some("dark"));
    // absent value skipped under the dynamic default
    assert_eq!(stored.page_size, Some(25));
}
