// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-field update policy.
//!
//! An [`UpdateSpec`] captures everything a binding knows about one field
//! beyond its accessors: the binding name, the target field override, the
//! dynamic null policy, informational storage flags, an evaluation order
//! rank, and an optional length hint.
//!
//! Only `dynamic` changes engine behavior. The `nullable`, `updatable`,
//! `insertable`, and `length` flags are surfaced to validation and tooling
//! through [`UpdateSpec`] getters but are not enforced here.

/// Per-field update policy attached to a binding.
///
/// # Example
///
/// ```rust
/// use transfer_bind_core::UpdateSpec;
///
/// let spec = UpdateSpec::new("name")
///     .with_dynamic(false)
///     .with_order(2)
///     .with_rename("full_name");
///
/// assert_eq!(spec.name(), "name");
/// assert_eq!(spec.target(), "full_name");
/// assert!(!spec.is_dynamic());
/// assert_eq!(spec.order(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSpec {
    name:       &'static str,
    rename:     Option<&'static str>,
    dynamic:    bool,
    nullable:   bool,
    updatable:  bool,
    insertable: bool,
    order:      Option<u32>,
    length:     Option<u32>
}

impl UpdateSpec {
    /// Create a policy for the named field with default flags.
    ///
    /// Defaults: dynamic, nullable, updatable, insertable, no explicit
    /// order, no length hint, no rename.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            dynamic: true,
            nullable: true,
            updatable: true,
            insertable: true,
            order: None,
            length: None
        }
    }

    /// Set the dynamic null policy.
    ///
    /// Dynamic bindings skip null transfer values; non-dynamic bindings
    /// propagate them into the entity.
    #[must_use]
    pub const fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    /// Set the informational nullable flag.
    #[must_use]
    pub const fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the informational updatable flag.
    #[must_use]
    pub const fn with_updatable(mut self, updatable: bool) -> Self {
        self.updatable = updatable;
        self
    }

    /// Set the informational insertable flag.
    #[must_use]
    pub const fn with_insertable(mut self, insertable: bool) -> Self {
        self.insertable = insertable;
        self
    }

    /// Set the explicit evaluation order rank.
    ///
    /// Lower ranks evaluate first. Fields without a rank evaluate after all
    /// ranked fields.
    #[must_use]
    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the informational maximum length hint.
    #[must_use]
    pub const fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Override the target field name on the entity side.
    #[must_use]
    pub const fn with_rename(mut self, target: &'static str) -> Self {
        self.rename = Some(target);
        self
    }

    /// Binding name. Matches the transfer-side field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Target field name on the entity side.
    ///
    /// Returns the rename override when present, the binding name otherwise.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        match self.rename {
            Some(target) => target,
            None => self.name
        }
    }

    /// Check the dynamic null policy.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Check the informational nullable flag.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Check the informational updatable flag.
    #[must_use]
    pub const fn is_updatable(&self) -> bool {
        self.updatable
    }

    /// Check the informational insertable flag.
    #[must_use]
    pub const fn is_insertable(&self) -> bool {
        self.insertable
    }

    /// Explicit evaluation order rank, if any.
    #[must_use]
    pub const fn order(&self) -> Option<u32> {
        self.order
    }

    /// Maximum length hint, if any.
    #[must_use]
    pub const fn length(&self) -> Option<u32> {
        self.length
    }
}
