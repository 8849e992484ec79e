use crate::catalog::Catalog;
use crate::epoch::EpochRecord;

/// Cursor over the catalog, clamped at both bounds.
///
/// Invariant: `index <= last` at all times. `next` at the last epoch and
/// `previous` at the first are no-ops, so every transition is a total
/// function and the catalog lookup behind [`Navigator::current`] can never
/// miss.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    catalog: Catalog,
    index: usize,
    last: usize,
}

impl Navigator {
    /// Starts at the earliest epoch (index 0).
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            index: 0,
            last: catalog.len().saturating_sub(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index == self.last
    }

    /// The record under the cursor.
    pub fn current(&self) -> &'static EpochRecord {
        match self.catalog.get(self.index) {
            Some(record) => record,
            // The catalog is a nonempty static table and the index is clamped.
            None => unreachable!("navigator index outside catalog bounds"),
        }
    }

    /// Advance one epoch. Returns false when already at the end.
    pub fn next(&mut self) -> bool {
        if self.index < self.last {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Step back one epoch. Returns false when already at the start.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to the earliest epoch. Returns false if already there.
    pub fn first(&mut self) -> bool {
        let moved = self.index != 0;
        self.index = 0;
        moved
    }

    /// Jump to the latest epoch. Returns false if already there.
    pub fn last(&mut self) -> bool {
        let moved = self.index != self.last;
        self.index = self.last;
        moved
    }
}
