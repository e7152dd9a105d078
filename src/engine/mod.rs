// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence, exploring choices depth-first.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A predicate that succeeded deterministically has no alternatives, so
//! backtracking into it backtracks straight past it.
//!
//! Because choices are explored in increasing order and depth-first, a
//! program of nested choice predicates visits candidates in lexicographic
//! order of their choice indices. The monodromy search relies on this.
//!
//! # Example
//!
//! ```
//! use belyi_monodromy::context::SearchContext;
//! use belyi_monodromy::engine::EngineBuilder;
//! use belyi_monodromy::predicates::{ChooseSheetPredicate, SuspendPredicate};
//! use belyi_monodromy::state::Slot;
//!
//! let mut ctx = SearchContext::new(3);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ChooseSheetPredicate::new(Slot::Zero)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(engine.statistics(), (2, 1));
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn call(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }

    /// Deterministic success: nothing left to retry.
    fn exhaust(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the next search() call resumes a suspended run.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        let capacity = predicates.len();
        Self {
            predicates,
            stack: Vec::with_capacity(capacity),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; calling search() again resumes by
    ///   backtracking from the suspension point
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are side effects on `ctx`, not return values.
    ///
    /// # Panics
    ///
    /// Panics if the program reaches its end without a terminal predicate,
    /// or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.run(ctx) {
            Some(self)
        } else {
            None
        }
    }

    /// Non-consuming form of [`search`](Self::search): returns true if
    /// suspended, false if exhausted. Statistics stay readable either way.
    pub fn run(&mut self, ctx: &mut SearchContext) -> bool {
        if self.predicates.is_empty() {
            return false;
        }

        if self.suspended {
            // Resume: the suspending entry has no alternatives.
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;
            self.stack.push(StackEntry::call(0, 0));
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return false; // Search exhausted (all choices failed)
            };

            if !entry.in_choice_mode {
                // Call mode: try_pred
                self.try_count += 1;
                let result = self.predicates[entry.predicate_index].try_pred(ctx, entry.round);

                match result {
                    PredicateResult::Success => {
                        entry.exhaust();
                        self.push_next_predicate();
                    }
                    PredicateResult::SuccessSamePredicate => {
                        entry.exhaust();
                        self.push_same_predicate();
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return true;
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result =
                    self.predicates[entry.predicate_index].retry_pred(ctx, entry.round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self) {
        let Some(current) = self.stack.last() else {
            return;
        };
        let next_index = current.predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::call(next_index, 0));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self) {
        let Some(current) = self.stack.last() else {
            return;
        };
        let entry = StackEntry::call(current.predicate_index, current.round + 1);
        self.stack.push(entry);
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Assembles a program of predicates.
///
/// `terminal` seals the program, so an unterminated engine cannot be built.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, ending the program.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedProgram {
        self.predicates.push(predicate);
        TerminatedProgram {
            predicates: self.predicates,
        }
    }
}

/// A program that ends with a terminal predicate.
pub struct TerminatedProgram {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedProgram {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{FailPredicate, SuspendPredicate};

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Offers `n` choices and logs each one taken.
    #[derive(Debug)]
    struct Counting {
        n: usize,
        taken: std::rc::Rc<std::cell::RefCell<Vec<usize>>>,
    }

    impl Predicate for Counting {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.n)
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            self.taken.borrow_mut().push(choice);
            PredicateResult::Success
        }
    }

    /// Runs three rounds then moves on.
    #[derive(Debug)]
    struct ThreeRounds;

    impl Predicate for ThreeRounds {
        fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
            if round < 3 {
                PredicateResult::SuccessSamePredicate
            } else {
                PredicateResult::Success
            }
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = SearchContext::new(1);
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some());
        assert_eq!(engine.unwrap().statistics(), (2, 0));
    }

    #[test]
    fn test_deterministic_success_is_not_retried() {
        let mut ctx = SearchContext::new(1);
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_choices_are_explored_in_order() {
        let mut ctx = SearchContext::new(1);
        let taken = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let engine = EngineBuilder::new()
            .add(Box::new(Counting { n: 2, taken: taken.clone() }))
            .add(Box::new(Counting { n: 3, taken: taken.clone() }))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(*taken.borrow(), vec![0, 0, 1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_resume_after_suspend_continues_with_next_choice() {
        let mut ctx = SearchContext::new(1);
        let taken = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let engine = EngineBuilder::new()
            .add(Box::new(Counting { n: 3, taken: taken.clone() }))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        let engine = engine.search(&mut ctx).unwrap();
        let engine = engine.search(&mut ctx).unwrap();
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(*taken.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_rounds() {
        let mut ctx = SearchContext::new(1);
        let engine = EngineBuilder::new()
            .add(Box::new(ThreeRounds))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        // Rounds 0, 1, 2, 3 then Suspend
        assert_eq!(engine.statistics(), (5, 0));
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = SearchContext::new(1);
        let engine = EngineBuilder::new().terminal(Box::new(FailPredicate)).build();
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = SearchContext::new(1);
        let engine = SearchEngine::new(vec![]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = SearchContext::new(1);
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }
}
