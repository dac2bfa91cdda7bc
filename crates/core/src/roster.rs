//! Ordered record collection and the add/edit/delete reconciliation
//! protocol.
//!
//! A [`Roster`] is the collection behind one management screen. Records
//! are addressed by zero-based position; there are no stable keys. The
//! positional-identity design is inherited from the screens' round-trip
//! protocol (an edit form captures an index and hands it back with the
//! saved record) and is confined to this module so stable identifiers
//! could replace it without touching callers.

use thiserror::Error;

/// Errors from the low-level roster operations.
///
/// `IndexOutOfRange` is a caller contract violation: production screen
/// code goes through [`Roster::reconcile`], which re-checks positions
/// and reports [`Reconciled::Stale`] instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// The index does not address an existing record.
    #[error("index {index} out of range for roster of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The roster length at the time of the call.
        len: usize,
    },
}

/// An add/edit/delete intent against a roster.
///
/// `Update` and `Remove` carry the position captured when the user
/// opened the edit form or confirmed the delete. The position is
/// re-validated at apply time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEdit<T> {
    /// Append a new record at the end.
    Append(T),
    /// Replace the record at `index` with `record`.
    Update {
        /// Position captured when the edit began.
        index: usize,
        /// The replacement record.
        record: T,
    },
    /// Remove the record at `index`.
    Remove {
        /// Position captured when the delete was confirmed.
        index: usize,
    },
}

/// The minimal change a display layer needs for an incremental redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// A record was appended at this index.
    Inserted(usize),
    /// The record at this index was replaced.
    Changed(usize),
    /// The record at this index was removed; later records shifted down.
    Removed(usize),
    /// The target position no longer exists; nothing was changed.
    Stale,
}

/// An ordered collection of records with positional identity.
///
/// Inserts always append; updates and removals address an existing
/// index. The collection never contains holes and is never observed in
/// a partially-applied state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster<T> {
    items: Vec<T>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Roster<T> {
    /// Create an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the roster holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The record at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All records in display order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.items
    }

    /// Iterate over records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Append a record, returning its index (the length before the
    /// append).
    pub fn append(&mut self, record: T) -> usize {
        let index = self.items.len();
        self.items.push(record);
        index
    }

    /// Replace the record at `index`. Only that element changes; all
    /// others are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IndexOutOfRange`] if `index` does not
    /// address an existing record.
    pub fn replace_at(&mut self, index: usize, record: T) -> Result<(), RosterError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfRange { index, len })?;
        *slot = record;
        Ok(())
    }

    /// Remove and return the record at `index`. All subsequent records
    /// shift down by one position; callers must not cache positions
    /// across a removal.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IndexOutOfRange`] if `index` does not
    /// address an existing record.
    pub fn remove_at(&mut self, index: usize) -> Result<T, RosterError> {
        let len = self.items.len();
        if index >= len {
            return Err(RosterError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Apply an edit intent, re-checking the target position against the
    /// current length immediately before applying.
    ///
    /// A concurrent user action (a delete landing while an edit form was
    /// open) can invalidate a captured position; such an edit is a no-op
    /// reported as [`Reconciled::Stale`] rather than an error.
    pub fn reconcile(&mut self, edit: RosterEdit<T>) -> Reconciled {
        match edit {
            RosterEdit::Append(record) => Reconciled::Inserted(self.append(record)),
            RosterEdit::Update { index, record } => {
                if self.replace_at(index, record).is_ok() {
                    Reconciled::Changed(index)
                } else {
                    Reconciled::Stale
                }
            }
            RosterEdit::Remove { index } => {
                if self.remove_at(index).is_ok() {
                    Reconciled::Removed(index)
                } else {
                    Reconciled::Stale
                }
            }
        }
    }
}

impl<T> From<Vec<T>> for Roster<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<'a, T> IntoIterator for &'a Roster<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seeded() -> Roster<&'static str> {
        Roster::from(vec!["a", "b", "c"])
    }

    #[test]
    fn test_append_returns_previous_length() {
        let mut roster = seeded();
        let index = roster.append("d");
        assert_eq!(index, 3);
        assert_eq!(roster.len(), 4);
        // The first three elements are unchanged
        assert_eq!(roster.records().get(..3).unwrap(), &["a", "b", "c"]);
        assert_eq!(roster.get(3), Some(&"d"));
    }

    #[test]
    fn test_replace_at_changes_only_target() {
        let mut roster = seeded();
        roster.replace_at(1, "B").unwrap();
        assert_eq!(roster.records(), &["a", "B", "c"]);
    }

    #[test]
    fn test_remove_at_shifts_down() {
        let mut roster = seeded();
        let removed = roster.remove_at(1).unwrap();
        assert_eq!(removed, "b");
        assert_eq!(roster.records(), &["a", "c"]);
    }

    #[test]
    fn test_index_at_length_is_out_of_range() {
        let mut roster = seeded();
        assert_eq!(
            roster.replace_at(3, "x"),
            Err(RosterError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            roster.remove_at(3),
            Err(RosterError::IndexOutOfRange { index: 3, len: 3 })
        );
        // Failed operations leave the roster untouched
        assert_eq!(roster.records(), &["a", "b", "c"]);
    }

    #[test]
    fn test_reconcile_append() {
        let mut roster = seeded();
        assert_eq!(
            roster.reconcile(RosterEdit::Append("d")),
            Reconciled::Inserted(3)
        );
    }

    #[test]
    fn test_reconcile_update_and_remove() {
        let mut roster = seeded();
        assert_eq!(
            roster.reconcile(RosterEdit::Update {
                index: 1,
                record: "B"
            }),
            Reconciled::Changed(1)
        );
        assert_eq!(
            roster.reconcile(RosterEdit::Remove { index: 0 }),
            Reconciled::Removed(0)
        );
        assert_eq!(roster.records(), &["B", "c"]);
    }

    #[test]
    fn test_reconcile_stale_position_is_noop() {
        let mut roster = seeded();
        // A delete lands while an edit form for index 2 is open
        roster.remove_at(2).unwrap();
        assert_eq!(
            roster.reconcile(RosterEdit::Update {
                index: 2,
                record: "X"
            }),
            Reconciled::Stale
        );
        assert_eq!(
            roster.reconcile(RosterEdit::Remove { index: 2 }),
            Reconciled::Stale
        );
        assert_eq!(roster.records(), &["a", "b"]);
    }

    #[test]
    fn test_empty_roster() {
        let roster: Roster<&str> = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.get(0), None);
    }
}
