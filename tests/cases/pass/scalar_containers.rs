// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Vec` and map fields of plain values are replaced wholesale.

use std::collections::HashMap;

use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Bookmark {
    #[key]
    pub id: Option<u64>,

    pub tags: Vec<String>,

    pub labels: HashMap<String, String>,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Bookmark)]
pub struct BookmarkPatch {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub tags: Option<Vec<String>>,

    #[update]
    pub labels: Option<HashMap<String, String>>,
}

fn main() {
    let reflector = TypeReflector::<BookmarkPatch>::of();
    let mut bookmark = Bookmark {
        id: Some(1),
        tags: vec!["old".to_string()],
        labels: HashMap::from([("color".to_string(), "red".to_string())]),
    };
    let patch = BookmarkPatch {
        id: Some(1),
        tags: Some(vec!["rust".to_string(), "macros".to_string()]),
        labels: Some(HashMap::from([(
            "color".to_string(),
            "green".to_string(),
        )])),
    };

    let changed = reflector
        .update(&patch, &mut bookmark, &BindContext::default())
        .unwrap();

    assert!(changed);
    assert_eq!(bookmark.tags, ["rust", "macros"]);
    assert_eq!(bookmark.labels.get("color").map(String::as_str), Some("green"));
}
