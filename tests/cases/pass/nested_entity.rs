// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A `nested` field binds one transfer/entity pair inside another.

use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Author {
    #[key]
    pub id: Option<u64>,

    pub name: String,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Author)]
pub struct AuthorCard {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub name: Option<String>,
}

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Post {
    #[key]
    pub id: Option<u64>,

    pub title: String,

    pub author: Option<Author>,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Post)]
pub struct PostForm {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub title: Option<String>,

    #[update(nested)]
    pub author: Option<AuthorCard>,
}

fn main() {
    let reflector = TypeReflector::<PostForm>::of();
    let form = PostForm {
        id: Some(1),
        title: Some("hello".to_string()),
        author: Some(AuthorCard {
            id: None,
            name: Some("ada".to_string()),
        }),
    };
    let mut post = Post::default();

    let changed = reflector
        .update(&form, &mut post, &BindContext::default())
        .unwrap();

    // a missing nested entity is constructed fresh
    assert!(changed);
    let author = post.author.expect("author assigned");
    assert_eq!(author.name, "ada");

    // an absent nested value on a dynamic binding leaves a fresh target empty
    let minimal = PostForm {
        id: None,
        title: Some("draft".to_string()),
        author: None,
    };
    let mut fresh = Post::default();
    reflector
        .update(&minimal, &mut fresh, &BindContext::default())
        .unwrap();
    assert_eq!(fresh.title, "draft");
    assert!(fresh.author.is_none());
}
