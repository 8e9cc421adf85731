// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Range specific operations not covered by `gcollections::ops`.
//!
//! The usual set operations (`Union`, `Intersection`, `Difference`, `Overlap`, `Disjoint`, `Subset`, `ProperSubset` and `Contains`) are taken from `gcollections`, import both modules to get the whole operation set:
//!
//! ```rust
//! use gcollections::ops::*;
//! use rangops::ops::*;
//! use rangops::Range;
//!
//! let a = Range::new(1, 10);
//! let b = Range::new(5, 15);
//! assert_eq!(a.complement(&b), Some(Range::new(10, 15)));
//! assert!(a.union(&b).unwrap().is_superset(&b));
//! ```

/// Relative complement of two ranges: the part of the range reaching furthest that lies past the end of the other one.
pub trait RelativeComplement<RHS = Self>
{
  type Output;
  fn complement(&self, rhs: &RHS) -> Self::Output;
}

pub trait Superset<RHS = Self>
{
  fn is_superset(&self, rhs: &RHS) -> bool;
}

pub trait ProperSuperset<RHS = Self>
{
  fn is_proper_superset(&self, rhs: &RHS) -> bool;
}

/// The value covering the entire domain.
pub trait Whole
{
  fn whole() -> Self;
}
