// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set operations as free functions over any standard range expression.
//!
//! Both operands are converted with [`Range::from_bounds`](../range/struct.Range.html#method.from_bounds) before anything is computed. An operand that cannot be represented as a range, because its start is excluded or lies after its end, is reported as an error. Three outcomes are thus possible:
//!
//! * `Err(_)`: one of the operand is not a valid range,
//! * `Ok(None)` (`Ok(vec![])` for `difference`): the ranges do not overlap,
//! * `Ok(Some(_))`: the result.
//!
//! # Examples
//!
//! ```rust
//! use rangops::functions;
//! use rangops::{Range, RangeError};
//!
//! assert_eq!(functions::union(1..=5, 3..10), Ok(Some(Range::exclusive(1, 10))));
//! assert_eq!(functions::union(1..5, 5..=10), Ok(None));
//! assert_eq!(functions::intersection(5..=1, 1..=3), Err(RangeError::Reversed));
//! ```

use crate::error::RangeError;
use crate::ops::*;
use crate::range::Range;
use gcollections::ops::{Difference, Disjoint, Intersection, Overlap, ProperSubset, Subset, Union};
use std::ops::RangeBounds;
use tracing::debug;

fn validate_operand<Bound, R>(operand: R) -> Result<Range<Bound>, RangeError> where
 Bound: PartialOrd + Clone,
 R: RangeBounds<Bound>
{
  Range::from_bounds(operand).map_err(|error| {
    debug!(%error, "rejected range operand");
    error
  })
}

fn validate_args<Bound, A, B>(a: A, b: B) -> Result<(Range<Bound>, Range<Bound>), RangeError> where
 Bound: PartialOrd + Clone,
 A: RangeBounds<Bound>,
 B: RangeBounds<Bound>
{
  Ok((validate_operand(a)?, validate_operand(b)?))
}

macro_rules! range_function {
  ($(#[$attr:meta])* $name:ident, $op:ident::$op_method:ident -> $res:ty) => {
    $(#[$attr])*
    pub fn $name<Bound, A, B>(a: A, b: B) -> Result<$res, RangeError> where
     Bound: PartialOrd + Clone,
     A: RangeBounds<Bound>,
     B: RangeBounds<Bound>
    {
      let (a, b) = validate_args(a, b)?;
      Ok($op::$op_method(&a, &b))
    }
  }
}

range_function!(
  /// Range covering both operands, from the lowest start to the highest end.
  union, Union::union -> Option<Range<Bound>>);
range_function!(
  /// Range of the elements common to both operands.
  intersection, Intersection::intersection -> Option<Range<Bound>>);
range_function!(
  /// Part of the operand reaching furthest that lies past the end of the other.
  complement, RelativeComplement::complement -> Option<Range<Bound>>);
range_function!(
  /// Symmetric difference, at most two ranges.
  difference, Difference::difference -> Vec<Range<Bound>>);
range_function!(overlaps, Overlap::overlap -> bool);
range_function!(disjoint, Disjoint::is_disjoint -> bool);
range_function!(superset, Superset::is_superset -> bool);
range_function!(proper_superset, ProperSuperset::is_proper_superset -> bool);
range_function!(subset, Subset::is_subset -> bool);
range_function!(proper_subset, ProperSubset::is_proper_subset -> bool);
