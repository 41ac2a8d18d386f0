// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `update_all` binds unmarked fields; `skip` still excludes.

use transfer_bind::{EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Profile {
    #[key]
    pub id: Option<u64>,

    pub bio: Option<String>,

    pub website: Option<String>,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Profile, update_all)]
pub struct ProfileForm {
    #[key]
    pub id: Option<u64>,

    pub bio: Option<String>,

    pub website: Option<String>,

    #[update(skip)]
    pub csrf_token: Option<String>,
}

fn main() {
    let reflector = TypeReflector::<ProfileForm>::of();
    let names: Vec<&str> = reflector.bindings().iter().map(|b| b.name()).collect();

    assert_eq!(names, ["id", "bio", "website"]);
    assert!(!names.contains(&"csrf_token"));
}
