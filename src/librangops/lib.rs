// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides set operations between two ranges: union, intersection, relative complement and symmetric difference, together with the overlap, disjoint, superset and subset predicates. A range is defined over any ordered domain (integers, floats, characters, timestamps...), its end can be excluded and any of its endpoints can be absent to represent a side without limit.
//!
//! The operations are implemented with the traits of [gcollections](https://crates.io/crates/gcollections), completed by the range specific traits of the [ops module](ops/index.html). The [functions module](functions/index.html) offers the same operations over standard range expressions such as `1..=5` or `3..`.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use rangops::ops::*;
//! use rangops::Range;
//!
//! let a = Range::new(1, 5);
//! let b = Range::exclusive(3, 10);
//! assert_eq!(a.union(&b), Some(Range::exclusive(1, 10)));
//! assert_eq!(a | b, Some(Range::exclusive(1, 10)));
//! assert!(a.union(&b).unwrap().is_superset(&a));
//!
//! let open = Range::from_start(3);
//! assert_eq!(open.union(&a), Some(Range::from_start(1)));
//! assert_eq!(Range::exclusive(1, 5).intersection(&Range::new(5, 10)), None);
//! ```
//!
//! For more examples see the [set_operations module](set_operations/index.html).

mod macros;
mod boundaries;
pub mod error;
pub mod functions;
pub mod ops;
pub mod range;
pub mod set_operations;

pub use crate::error::RangeError;
pub use crate::range::{Range, ToRange};
