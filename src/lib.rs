//! An open-addressing hash map specialised for fixed-width integer keys.
//!
//! See [`IntMap`] for the probing, growth and removal rules.

mod capacity;
mod error;
mod index;
mod key;
mod map;
#[macro_use]
mod builder;

// Public exports.
pub use error::AllocError;
pub use key::IntKey;
pub use map::{IntMap, IntMapIntoIter, Iter, IterMut};
