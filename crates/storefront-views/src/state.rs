//! Load state and liveness shared by the data-loading views.

use std::cell::Cell;
use std::rc::Rc;

/// Where a data-loading view is in its lifecycle.
///
/// `Unloaded -> Loading` when mounted, `Loading -> Loaded` on the first
/// successful response, `Loading -> Failed` when the first fetch fails.
/// A failed refresh of a `Loaded` view leaves it `Loaded`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Unloaded,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Unloaded
    }
}

impl<T> LoadState<T> {
    /// True iff a successful response has been applied.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The loaded items; empty in every other state.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Short name used in logs and markup.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unloaded => "unloaded",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Whether the owning view is still mounted.
///
/// Clones share the flag. Response handlers check it before applying state.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    /// A live flag.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Whether the view is still mounted.
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Mark the view as torn down. Irreversible.
    pub fn end(&self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_empty_unless_loaded() {
        assert!(LoadState::<u8>::Unloaded.items().is_empty());
        assert!(LoadState::<u8>::Loading.items().is_empty());
        assert!(LoadState::<u8>::Failed("x".into()).items().is_empty());
        assert_eq!(LoadState::Loaded(vec![1, 2]).items(), &[1, 2]);
    }

    #[test]
    fn test_is_loaded() {
        assert!(!LoadState::<u8>::default().is_loaded());
        assert!(LoadState::<u8>::Loaded(vec![]).is_loaded());
    }

    #[test]
    fn test_liveness_shared_between_clones() {
        let live = Liveness::new();
        let handle = live.clone();
        assert!(handle.is_alive());
        live.end();
        assert!(!handle.is_alive());
    }
}
