// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Basic transfer/entity pair with plain value bindings.

use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Account {
    #[key]
    pub id: Option<u64>,

    pub login: String,

    pub display_name: Option<String>,

    pub sign_ins: u32,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Account)]
pub struct AccountPatch {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub login: Option<String>,

    #[update]
    pub display_name: Option<String>,

    #[update]
    pub sign_ins: Option<u32>,
}

fn main() {
    let reflector = TypeReflector::<AccountPatch>::of();
    let patch = AccountPatch {
        id: Some(1),
        login: Some("admin".to_string()),
        display_name: None,
        sign_ins: Some(3),
    };
    let mut account = Account::default();

    let changed = reflector
        .update(&patch, &mut account, &BindContext::default())
        .unwrap();

    assert!(changed);
    assert_eq!(account.login, "admin");
    assert_eq!(account.sign_ins, 3);
    // dynamic bindings leave absent values alone
    assert_eq!(account.display_name, None);
}
