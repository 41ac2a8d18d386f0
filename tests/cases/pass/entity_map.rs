// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Maps of nested pairs reconcile by map key.

use std::collections::HashMap;

use transfer_bind::{BindContext, EntityModel, TransferObject, TypeReflector};

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Attachment {
    #[key]
    pub id: Option<u64>,

    pub file_name: String,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Attachment)]
pub struct AttachmentForm {
    #[key]
    pub id: Option<u64>,

    #[update]
    pub file_name: Option<String>,
}

#[derive(Debug, Default, Clone, EntityModel)]
pub struct Ticket {
    #[key]
    pub id: Option<u64>,

    pub attachments: HashMap<String, Attachment>,
}

#[derive(Debug, Default, Clone, TransferObject)]
#[transfer(entity = Ticket)]
pub struct TicketForm {
    #[key]
    pub id: Option<u64>,

    #[update(nested)]
    pub attachments: Option<HashMap<String, AttachmentForm>>,
}

fn main() {
    let reflector = TypeReflector::<TicketForm>::of();
    let mut ticket = Ticket {
        id: Some(1),
        attachments: HashMap::from([
            (
                "spec".to_string(),
                Attachment {
                    id: Some(10),
                    file_name: "spec-v1.pdf".to_string(),
                },
            ),
            (
                "stale".to_string(),
                Attachment {
                    id: Some(11),
                    file_name: "old.txt".to_string(),
                },
            ),
        ]),
    };
    let form = TicketForm {
        id: Some(1),
        attachments: Some(HashMap::from([
            (
                "spec".to_string(),
                AttachmentForm {
                    id: Some(10),
                    file_name: Some("spec-v2.pdf".to_string()),
                },
            ),
            (
                "photo".to_string(),
                AttachmentForm {
                    id: None,
                    file_name: Some("cat.png".to_string()),
                },
            ),
        ])),
    };

    let changed = reflector
        .update(&form, &mut ticket, &BindContext::default())
        .unwrap();

    assert!(changed);
    assert_eq!(ticket.attachments.len(), 2);
    // matched key updated in place
    assert_eq!(ticket.attachments["spec"].id, Some(10));
    assert_eq!(ticket.attachments["spec"].file_name, "spec-v2.pdf");
    // new key became a fresh entity, unmentioned key was dropped
    assert_eq!(ticket.attachments["photo"].file_name, "cat.png");
    assert!(!ticket.attachments.contains_key("stale"));
}
