// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `rename` binds a transfer field to a differently named entity field.

use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Article {
    #[key]
    pub id: Option<u64>,

    pub body_text: Option<String>,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Article)]
pub struct ArticleDraft {
    #[key]
    pub id: Option<u64>,

    #[update(rename = "body_text")]
    pub body: Option<String>,
}

fn main() {
    let reflector = TypeReflector::<ArticleDraft>::of();
    let draft = ArticleDraft {
        id: Some(1),
        body: Some("renamed".to_string()),
    };
    let mut article = Article::default();

    reflector
        .update(&draft, &mut article, &BindContext::default())
        .unwrap();
    assert_eq!(article.body_text.as_deref(), Some("renamed"));

    // render follows the rename back
    let rendered = reflector
        .render_new(&article, &BindContext::default())
        .unwrap();
    assert_eq!(rendered.body.as_deref(), Some("renamed"));
}
