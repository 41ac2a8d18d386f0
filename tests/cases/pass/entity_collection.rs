// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Collections of nested pairs reconcile by entity key.

use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Comment {
    #[key]
    pub id: Option<u64>,

    pub text: String,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Comment)]
pub struct CommentForm {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub text: Option<String>,
}

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Thread {
    #[key]
    pub id: Option<u64>,

    pub comments: Vec<Comment>,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Thread)]
pub struct ThreadForm {
    #[key]
    pub id: Option<u64>,

    #[update(nested)]
    pub comments: Option<Vec<CommentForm>>,
}

fn main() {
    let reflector = TypeReflector::<ThreadForm>::of();
    let mut thread = Thread {
        id: Some(1),
        comments: vec![
            Comment {
                id: Some(10),
                text: "keep me".to_string(),
            },
            Comment {
                id: Some(11),
                text: "drop me".to_string(),
            },
        ],
    };
    let form = ThreadForm {
        id: Some(1),
        comments: Some(vec![
            CommentForm {
                id: Some(10),
                text: Some("edited".to_string()),
            },
            CommentForm {
                id: None,
                text: Some("brand new".to_string()),
            },
        ]),
    };

    let changed = reflector
        .update(&form, &mut thread, &BindContext::default())
        .unwrap();

    assert!(changed);
    assert_eq!(thread.comments.len(), 2);
    // matched element updated in place, key preserved
    assert_eq!(thread.comments[0].id, Some(10));
    assert_eq!(thread.comments[0].text, "edited");
    // keyless element became a fresh entity
    assert_eq!(thread.comments[1].id, None);
    assert_eq!(thread.comments[1].text, "brand new");
}
