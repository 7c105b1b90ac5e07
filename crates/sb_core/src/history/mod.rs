//! Linear undo/redo history over arbitrary snapshots.
//!
//! `past` and `future` are chronological with `present` as the pivot: the
//! last element of `past` is what `undo` restores, the first element of
//! `future` is what `redo` restores.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Plain-data view of a history, chronological on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoRedoState<T> {
    pub past: Vec<T>,
    pub present: T,
    pub future: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct UndoRedo<T> {
    past: VecDeque<T>,
    present: T,
    future: VecDeque<T>,
    limit: Option<usize>,
}

impl<T: Clone> UndoRedo<T> {
    pub fn new(initial: T) -> Self {
        Self { past: VecDeque::new(), present: initial, future: VecDeque::new(), limit: None }
    }

    /// History that keeps at most `limit` past snapshots, dropping the oldest.
    /// A limit of zero is treated as one.
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self { limit: Some(limit.max(1)), ..Self::new(initial) }
    }

    pub fn from_state(state: UndoRedoState<T>) -> Self {
        Self {
            past: state.past.into(),
            present: state.present,
            future: state.future.into(),
            limit: None,
        }
    }

    pub fn state(&self) -> &T {
        &self.present
    }

    pub fn into_state(self) -> T {
        self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Install `next` as present; the old present becomes undoable and the
    /// redo future is discarded.
    pub fn set(&mut self, next: T) {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        if let Some(limit) = self.limit {
            while self.past.len() > limit {
                self.past.pop_front();
            }
        }
        self.future.clear();
    }

    /// Returns false (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        true
    }

    /// Drop both stacks and start over from `state`.
    pub fn reset(&mut self, state: T) {
        self.past.clear();
        self.future.clear();
        self.present = state;
    }

    pub fn snapshot(&self) -> UndoRedoState<T> {
        UndoRedoState {
            past: self.past.iter().cloned().collect(),
            present: self.present.clone(),
            future: self.future.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_undo_redo() {
        let mut history = UndoRedo::new(0);
        history.set(1);
        history.set(2);
        assert_eq!(*history.state(), 2);
        assert!(history.undo());
        assert_eq!(*history.state(), 1);
        assert!(history.can_redo());
        assert!(history.redo());
        assert_eq!(*history.state(), 2);
        assert!(!history.redo());
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = UndoRedo::new("only");
        assert!(!history.undo());
        assert_eq!(*history.state(), "only");
        assert!(!history.can_undo());
    }

    #[test]
    fn test_set_after_undo_clears_future() {
        let mut history = UndoRedo::new(0);
        history.set(1);
        history.undo();
        history.set(5);
        assert!(!history.can_redo());
        assert_eq!(history.snapshot().past, vec![0]);
    }

    #[test]
    fn test_snapshot_order_is_chronological() {
        let mut history = UndoRedo::new('a');
        for c in ['b', 'c', 'd'] {
            history.set(c);
        }
        history.undo();
        history.undo();
        let snap = history.snapshot();
        assert_eq!(snap.past, vec!['a']);
        assert_eq!(snap.present, 'b');
        assert_eq!(snap.future, vec!['c', 'd']);

        let restored = UndoRedo::from_state(snap.clone());
        assert_eq!(restored.snapshot(), snap);
    }

    #[test]
    fn test_reset_clears_both_stacks() {
        let mut history = UndoRedo::new(1);
        history.set(2);
        history.set(3);
        history.undo();
        history.reset(10);
        assert_eq!(*history.state(), 10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = UndoRedo::with_limit(0, 2);
        for n in 1..=4 {
            history.set(n);
        }
        assert_eq!(history.undo_depth(), 2);
        history.undo();
        history.undo();
        assert_eq!(*history.state(), 2);
        assert!(!history.undo());
    }

    // ========== Property-Based Tests ==========

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Set(u16),
            Undo,
            Redo,
            Reset(u16),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<u16>().prop_map(Op::Set),
                Just(Op::Undo),
                Just(Op::Redo),
                any::<u16>().prop_map(Op::Reset),
            ]
        }

        proptest! {
            /// Property: n sets then n undos returns to the start, n redos return to the end
            #[test]
            fn prop_undo_redo_roundtrip(
                initial in any::<u16>(),
                values in prop::collection::vec(any::<u16>(), 1..40),
            ) {
                let mut history = UndoRedo::new(initial);
                for v in &values {
                    history.set(*v);
                }
                for _ in &values {
                    prop_assert!(history.undo());
                }
                prop_assert_eq!(*history.state(), initial);
                prop_assert!(!history.can_undo());

                for _ in &values {
                    prop_assert!(history.redo());
                }
                prop_assert_eq!(*history.state(), *values.last().unwrap());
                prop_assert!(!history.can_redo());
            }

            /// Property: set after undo leaves nothing to redo
            #[test]
            fn prop_set_clears_future(
                ops in prop::collection::vec(op_strategy(), 0..50),
                last in any::<u16>(),
            ) {
                let mut history = UndoRedo::new(0u16);
                for op in ops {
                    match op {
                        Op::Set(v) => history.set(v),
                        Op::Undo => { history.undo(); }
                        Op::Redo => { history.redo(); }
                        Op::Reset(v) => history.reset(v),
                    }
                }
                history.undo();
                history.set(last);
                prop_assert!(!history.can_redo());
                prop_assert_eq!(*history.state(), last);
            }

            /// Property: the total number of snapshots only changes through set/reset
            #[test]
            fn prop_undo_redo_preserve_timeline(
                ops in prop::collection::vec(op_strategy(), 0..50),
            ) {
                let mut history = UndoRedo::new(0u16);
                for op in ops {
                    let before = history.snapshot();
                    let len = before.past.len() + before.future.len();
                    match op {
                        Op::Undo => {
                            history.undo();
                            let after = history.snapshot();
                            prop_assert_eq!(after.past.len() + after.future.len(), len);
                        }
                        Op::Redo => {
                            history.redo();
                            let after = history.snapshot();
                            prop_assert_eq!(after.past.len() + after.future.len(), len);
                        }
                        Op::Set(v) => history.set(v),
                        Op::Reset(v) => history.reset(v),
                    }
                }
            }
        }
    }
}
