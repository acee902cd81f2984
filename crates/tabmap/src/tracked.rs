use std::ops::Deref;

/// Pending change of a tracked item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowState {
    #[default]
    Unchanged,
    Added,
    Modified,
    Deleted,
}

impl RowState {
    /// UPDATE and DELETE address the row by its identity.
    pub fn requires_identity(self) -> bool {
        matches!(self, Self::Modified | Self::Deleted)
    }

    pub fn is_unchanged(self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// An item paired with its row state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tracked<T> {
    pub item: T,
    pub state: RowState,
}

impl<T> Tracked<T> {
    pub fn new(item: T, state: RowState) -> Self {
        Self { item, state }
    }

    pub fn unchanged(item: T) -> Self {
        Self::new(item, RowState::Unchanged)
    }

    pub fn added(item: T) -> Self {
        Self::new(item, RowState::Added)
    }

    pub fn modified(item: T) -> Self {
        Self::new(item, RowState::Modified)
    }

    pub fn deleted(item: T) -> Self {
        Self::new(item, RowState::Deleted)
    }

    /// Mutable access to the item. Marks it `Modified` unless it is still
    /// pending insertion or deletion.
    pub fn edit(&mut self) -> &mut T {
        if self.state.is_unchanged() {
            self.state = RowState::Modified;
        }
        &mut self.item
    }

    pub fn mark_deleted(&mut self) {
        self.state = RowState::Deleted;
    }

    /// Reset the state to `Unchanged` after the change was persisted.
    pub fn accept(&mut self) {
        self.state = RowState::Unchanged;
    }

    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> From<T> for Tracked<T> {
    fn from(item: T) -> Self {
        Self::unchanged(item)
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

/// Drop deleted items and mark the rest `Unchanged`, mirroring the store
/// after a successful [`Db::set`](crate::Db::set).
pub fn accept_changes<T>(items: &mut Vec<Tracked<T>>) {
    items.retain(|tracked| tracked.state != RowState::Deleted);
    items.iter_mut().for_each(Tracked::accept);
}
