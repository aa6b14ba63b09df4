//! # singly
//!
//! A generic singly linked list. Nodes are owned by an arena inside the
//! list and linked from head to tail by handles, which keeps append and
//! prepend O(1) without any `unsafe` code.
//!
//! ```
//! use singly::{list, Node};
//!
//! let mut list = list![1, 2, 1, 4, 1, 6, 8];
//! list.delete(&1);
//! assert_eq!(list.values(), vec![2, 4, 6, 8]);
//! assert_eq!(list.middle().map(Node::value), Ok(&6));
//! ```

mod arena;
pub mod error;
pub mod list;
pub mod search;

pub use arena::NodeId;
pub use error::{Error, Result};
pub use list::{List, Node};
pub use search::Match;
