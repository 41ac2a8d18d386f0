// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field access for bindings.
//!
//! A [`FieldAccessor`] wraps plain function pointers that read and write one
//! field of one type. Updaters never touch structs directly; they go through
//! accessors, which is what lets a single strategy serve both `Option`-typed
//! and plain storage.
//!
//! The [`Slot`] trait bridges the two storage shapes. `Option<V>` fields
//! accept null writes; plain `V` fields reject them with [`NullViolation`],
//! which updaters surface as a configuration error.

use std::fmt;

/// A null value was written into non-optional storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullViolation;

impl fmt::Display for NullViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null value written into non-optional storage")
    }
}

impl std::error::Error for NullViolation {}

/// Uniform access to a field slot holding values of type `V`.
///
/// Implemented for `Option<V>` (optional storage) and for `V` itself
/// (required storage). Required storage reports a [`NullViolation`] when a
/// null write is attempted.
pub trait Slot<V> {
    /// Borrow the stored value, if any.
    fn slot_ref(&self) -> Option<&V>;

    /// Mutably borrow the stored value, if any.
    fn slot_mut(&mut self) -> Option<&mut V>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`NullViolation`] when `value` is `None` and the slot cannot
    /// hold an absent value.
    fn slot_put(&mut self, value: Option<V>) -> Result<(), NullViolation>;
}

impl<V> Slot<V> for Option<V> {
    fn slot_ref(&self) -> Option<&V> {
        self.as_ref()
    }

    fn slot_mut(&mut self) -> Option<&mut V> {
        self.as_mut()
    }

    fn slot_put(&mut self, value: Option<V>) -> Result<(), NullViolation> {
        *self = value;
        Ok(())
    }
}

impl<V> Slot<V> for V {
    fn slot_ref(&self) -> Option<&V> {
        Some(self)
    }

    fn slot_mut(&mut self) -> Option<&mut V> {
        Some(self)
    }

    fn slot_put(&mut self, value: Option<V>) -> Result<(), NullViolation> {
        match value {
            Some(value) => {
                *self = value;
                Ok(())
            }
            None => Err(NullViolation)
        }
    }
}

/// Read and write access to one field of `T` holding values of type `V`.
///
/// Built from non-capturing closures, usually by the derive macro:
///
/// ```rust
/// use transfer_bind_core::FieldAccessor;
///
/// struct Draft {
///     title: Option<String>
/// }
///
/// let accessor = FieldAccessor::new(
///     |draft: &Draft| draft.title.as_ref(),
///     |draft: &mut Draft| draft.title.as_mut(),
///     |draft: &mut Draft, value| {
///         draft.title = value;
///         Ok(())
///     }
/// );
///
/// let mut draft = Draft {
///     title: None
/// };
/// assert!(accessor.get(&draft).is_none());
/// accessor.set(&mut draft, Some("hello".to_string())).unwrap();
/// assert_eq!(accessor.get(&draft).map(String::as_str), Some("hello"));
/// ```
pub struct FieldAccessor<T, V> {
    get:     fn(&T) -> Option<&V>,
    get_mut: fn(&mut T) -> Option<&mut V>,
    set:     fn(&mut T, Option<V>) -> Result<(), NullViolation>
}

impl<T, V> FieldAccessor<T, V> {
    /// Build an accessor from its three operations.
    #[must_use]
    pub const fn new(
        get: fn(&T) -> Option<&V>,
        get_mut: fn(&mut T) -> Option<&mut V>,
        set: fn(&mut T, Option<V>) -> Result<(), NullViolation>
    ) -> Self {
        Self {
            get,
            get_mut,
            set
        }
    }

    /// Borrow the field value, if present.
    pub fn get<'a>(&self, target: &'a T) -> Option<&'a V> {
        (self.get)(target)
    }

    /// Mutably borrow the field value, if present.
    pub fn get_mut<'a>(&self, target: &'a mut T) -> Option<&'a mut V> {
        (self.get_mut)(target)
    }

    /// Replace the field value.
    ///
    /// # Errors
    ///
    /// Returns [`NullViolation`] when `value` is `None` and the field is not
    /// optional.
    pub fn set(&self, target: &mut T, value: Option<V>) -> Result<(), NullViolation> {
        (self.set)(target, value)
    }
}

impl<T, V> Clone for FieldAccessor<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for FieldAccessor<T, V> {}

impl<T, V> fmt::Debug for FieldAccessor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor").finish_non_exhaustive()
    }
}
