//! # Split Engine
//!
//! Settles an unequal group expense: given who contributed what, computes
//! a concrete list of peer-to-peer payments that brings every participant
//! to the average contribution.
//!
//! ## Design Principles
//!
//! - **Pure computation**: the plan is a function of one input snapshot,
//!   re-derived from scratch on every call
//! - **Permissive input**: malformed amounts coerce to zero instead of
//!   erroring, so half-typed form state is always computable
//! - **Cent tolerance**: a 0.01 epsilon absorbs floating-point drift and
//!   decides when a balance counts as resolved
//! - **Greedy matching**: the largest creditor is drained into the largest
//!   debtor first, favoring determinism over transaction-count optimality
//!
//! ## Example
//!
//! ```
//! use split_engine::{InputRow, SplitEngine};
//!
//! let rows = vec![
//!     InputRow::new("alice", "30"),
//!     InputRow::new("bob", "30"),
//!     InputRow::new("carol", "0"),
//! ];
//!
//! let splits = SplitEngine::new().calculate(&rows).expect("three named rows");
//! assert_eq!(splits.average, 20.0);
//! assert_eq!(splits.settlements[0].debtor, "carol");
//! ```

pub mod engine;
pub mod error;
pub mod money;
pub mod participant;
pub mod row;
pub mod store;

pub use engine::{DebtorSettlement, SplitEngine, Splits};
pub use error::{Result, SplitError};
pub use participant::{Creditor, Debtor, Participant, Payment};
pub use row::{parse_amount, read_rows, InputRow};
pub use store::RowStore;
