// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for binding and engine operations.
//!
//! Every failure is classified by [`ErrorKind`]: business-level outcomes a
//! caller is expected to handle (`Expected`) versus programming or
//! configuration mistakes (`Unexpected`). Transport layers typically map
//! expected errors to 404/409-style responses and treat unexpected ones as
//! internal failures.

use std::fmt;

use thiserror::Error;

/// Classification of a [`BindError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Business-level outcome the caller should handle (missing row,
    /// ambiguous lookup).
    Expected,

    /// Programming or configuration mistake. Fatal for the request.
    Unexpected
}

impl ErrorKind {
    /// Check if this kind represents a business-level outcome.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(self, Self::Expected)
    }
}

/// Errors raised by bindings, reflectors, and the binding engine.
#[derive(Debug, Error)]
pub enum BindError {
    /// No entity exists under the requested key.
    #[error("{entity} with key {key} not found")]
    NotFound {
        /// Entity type name.
        entity: &'static str,
        /// Rendered key value.
        key:    String
    },

    /// A lookup that must yield at most one entity matched several.
    #[error("lookup for {entity} matched {count} entities where one was expected")]
    NonUnique {
        /// Entity type name.
        entity: &'static str,
        /// Number of matched entities.
        count:  usize
    },

    /// No binding is registered under the requested field name.
    #[error("no binding named {name}")]
    UnknownBinding {
        /// Requested binding name.
        name: String
    },

    /// A null transfer value was written into non-optional storage.
    #[error("field {field} does not accept null values")]
    NullNotAllowed {
        /// Binding name of the offending field.
        field: &'static str
    },

    /// An entity-typed container field was never initialized, so keyed
    /// reconciliation cannot proceed.
    #[error("field {field} requires an initialized target container")]
    UninitializedTarget {
        /// Binding name of the offending field.
        field: &'static str
    },

    /// A transfer object carried no primary key where one was required.
    #[error("transfer for {entity} carries no key")]
    MissingKey {
        /// Entity type name.
        entity: &'static str
    },

    /// A strict bulk update referenced a key that is not stored.
    #[error("{entity} with key {key} missing during bulk update")]
    MissingDuringBulkUpdate {
        /// Entity type name.
        entity: &'static str,
        /// Rendered key value.
        key:    String
    },

    /// The persistence collaborator failed.
    #[error("persistence failure: {0}")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>)
}

impl BindError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::NonUnique { .. } => ErrorKind::Expected,
            _ => ErrorKind::Unexpected
        }
    }

    /// Check if this is a business-level outcome the caller should handle.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        self.kind().is_expected()
    }

    /// Build a [`BindError::NotFound`] for the given entity and key.
    #[must_use]
    pub fn not_found<K: fmt::Debug>(entity: &'static str, key: &K) -> Self {
        Self::NotFound {
            entity,
            key: format!("{key:?}")
        }
    }

    /// Build a [`BindError::NonUnique`] for the given entity and match count.
    ///
    /// Raised by persistence adapters whose lookup contract promises at most
    /// one match.
    #[must_use]
    pub const fn non_unique(entity: &'static str, count: usize) -> Self {
        Self::NonUnique {
            entity,
            count
        }
    }

    /// Build a [`BindError::MissingKey`] for the given entity.
    #[must_use]
    pub const fn missing_key(entity: &'static str) -> Self {
        Self::MissingKey {
            entity
        }
    }

    /// Build a [`BindError::MissingDuringBulkUpdate`] for the given entity
    /// and key.
    #[must_use]
    pub fn missing_during_bulk_update<K: fmt::Debug>(entity: &'static str, key: &K) -> Self {
        Self::MissingDuringBulkUpdate {
            entity,
            key: format!("{key:?}")
        }
    }

    /// Build a [`BindError::UnknownBinding`] for the given name.
    #[must_use]
    pub fn unknown_binding(name: &str) -> Self {
        Self::UnknownBinding {
            name: name.to_string()
        }
    }

    /// Build a [`BindError::NullNotAllowed`] for the given binding name.
    #[must_use]
    pub const fn null_not_allowed(field: &'static str) -> Self {
        Self::NullNotAllowed {
            field
        }
    }

    /// Build a [`BindError::UninitializedTarget`] for the given binding name.
    #[must_use]
    pub const fn uninitialized_target(field: &'static str) -> Self {
        Self::UninitializedTarget {
            field
        }
    }

    /// Wrap a persistence collaborator error.
    #[must_use]
    pub fn persistence<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static
    {
        Self::Persistence(Box::new(source))
    }
}
