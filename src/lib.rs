//! Lazily materializing list over a single-pass producer.
//!
//! A [`LazyList`] wraps an arbitrary, potentially infinite producer of
//! values and exposes list-like access, mutation, and comparison on top
//! of it. Every operation realizes only as many elements as it strictly
//! requires, and realized elements are cached so that nothing is ever
//! pulled from the producer twice.
//!
//! The example below demonstrates the consumption policy.
//!
//! ~~~
//! use lazylist::LazyList;
//!
//! // nothing is pulled until an operation needs it,
//! // even on an infinite producer
//! let mut list = LazyList::new(0..);
//! assert!(list.realized().is_empty());
//! assert_eq!(list.get(3), Ok(&3));
//! assert_eq!(list.realized(), [0, 1, 2, 3]);
//!
//! // operations that need the total length realize everything;
//! // they are only safe on finite producers
//! let mut list = LazyList::new(0..6);
//! assert_eq!(list.get(-2), Ok(&4));
//! assert_eq!(list.len(), 6);
//! ~~~
#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod list;
mod part;

pub use error::Error;
pub use list::{LazyList, Producer};
