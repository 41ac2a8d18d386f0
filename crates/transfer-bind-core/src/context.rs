// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Opaque per-invocation context.
//!
//! A [`BindContext`] travels through every update and render call, including
//! recursive calls into nested bindings. The engine never inspects it; it
//! exists so collaborator-specific state can reach custom binding code
//! without threading extra parameters through the whole call tree.

use std::{
    any::Any,
    fmt,
    sync::Arc
};

/// Opaque pass-through context for update and render calls.
///
/// # Example
///
/// ```rust
/// use transfer_bind_core::BindContext;
///
/// struct TenantId(u64);
///
/// let ctx = BindContext::with_payload(TenantId(7));
/// assert_eq!(ctx.payload::<TenantId>().map(|t| t.0), Some(7));
/// assert!(ctx.payload::<String>().is_none());
/// ```
#[derive(Clone, Default)]
pub struct BindContext {
    payload: Option<Arc<dyn Any + Send + Sync>>
}

impl BindContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context carrying a shared payload.
    #[must_use]
    pub fn with_payload<T>(payload: T) -> Self
    where
        T: Any + Send + Sync
    {
        Self {
            payload: Some(Arc::new(payload))
        }
    }

    /// Borrow the payload, if one of the requested type is present.
    #[must_use]
    pub fn payload<T>(&self) -> Option<&T>
    where
        T: Any + Send + Sync
    {
        self.payload.as_deref().and_then(|payload| payload.downcast_ref::<T>())
    }
}

impl fmt::Debug for BindContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindContext")
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}
