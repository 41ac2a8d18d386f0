// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Uuid keys and chrono timestamps work as binding values, and the derive
//! coexists with serde on the same struct.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};
use uuid::Uuid;

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Session {
    #[key]
    pub id: Option<Uuid>,

    pub started_at: Option<DateTime<Utc>>,

    pub note: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, TransferObject)]
#[transfer(entity = Session)]
pub struct SessionDto {
    #[key]
    pub id: Option<Uuid>,

    #[update]
    pub started_at: Option<DateTime<Utc>>,

    #[update]
    pub note: Option<String>,
}

fn main() {
    let reflector = TypeReflector::<SessionDto>::of();
    let session = Session {
        id: Some(Uuid::new_v4()),
        started_at: Some(Utc::now()),
        note: "hello".to_string(),
    };

    let dto = reflector
        .render_new(&session, &BindContext::default())
        .unwrap();
    assert_eq!(dto.id, session.id);
    assert_eq!(dto.note.as_deref(), Some("hello"));

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["note"], "hello");
}
