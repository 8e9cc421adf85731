// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set operations and containment predicates between two ranges.
//!
//! The binary operations only produce a result when the ranges overlap, a pair of disjoint ranges gives `None` (or no piece at all for `difference`). This is not an error: it only means the two ranges do not interact.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `union` | from the lowest start to the highest end |
//! | `intersection` | from the highest start to the lowest end |
//! | `complement` | from the lowest end to the highest end |
//! | `difference` | symmetric difference, between the two starts then between the two ends |
//!
//! A result ending where one of the operands ends keeps that operand's end exclusivity.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use rangops::ops::*;
//! use rangops::Range;
//!
//! let a = Range::new(1, 5);
//! let b = Range::new(3, 10);
//! assert_eq!(a.union(&b), Some(Range::new(1, 10)));
//! assert_eq!(a.intersection(&b), Some(Range::new(3, 5)));
//! assert_eq!(a.complement(&b), Some(Range::new(5, 10)));
//! assert_eq!(a.difference(&b), vec![Range::new(1, 3), Range::new(5, 10)]);
//!
//! // Same operations with operators.
//! assert_eq!(&a | &b, Some(Range::new(1, 10)));
//! assert_eq!(&a & &b, Some(Range::new(3, 5)));
//! assert_eq!(a - b, vec![Range::new(1, 3), Range::new(5, 10)]);
//!
//! // The excluded end of `[1, 5)` does not meet `[5, 10]`.
//! assert!(Range::exclusive(1, 5).is_disjoint(&Range::new(5, 10)));
//! assert_eq!(Range::exclusive(1, 5).union(&Range::new(5, 10)), None);
//! ```

use crate::boundaries::{end_precedes, start_precedes, Boundaries};
use crate::ops::*;
use crate::range::Range;
use gcollections::ops::*;
use std::ops::{Add, BitAnd, BitOr, Sub};
use tracing::trace;

// `range` covers the first element of `other`, an absent start being only covered by another absent start.
fn covers_start_of<Bound: PartialOrd + Clone>(range: &Range<Bound>, other: &Range<Bound>) -> bool {
  match other.start() {
    Some(x) => range.covers(x),
    None => !range.has_start()
  }
}

// Every element of `other` lies in `range`: it starts no earlier and ends no later.
fn covers_both_endpoints<Bound: PartialOrd>(range: &Range<Bound>, other: &Range<Bound>) -> bool {
  start_precedes(range, other) && end_precedes(other, range)
}

fn interacts<Bound: PartialOrd + Clone>(operation: &'static str, a: &Range<Bound>, b: &Range<Bound>) -> bool {
  let overlapping = a.overlap(b);
  if !overlapping {
    trace!(operation, "ranges do not overlap, no result");
  }
  overlapping
}

impl<Bound: PartialOrd + Clone> Overlap for Range<Bound>
{
  fn overlap(&self, other: &Range<Bound>) -> bool {
    covers_start_of(self, other) || covers_start_of(other, self)
  }
}

impl<Bound: PartialOrd + Clone> Disjoint for Range<Bound>
{
  fn is_disjoint(&self, other: &Range<Bound>) -> bool {
    !self.overlap(other)
  }
}

impl<Bound: PartialOrd + Clone> Union for Range<Bound>
{
  type Output = Option<Range<Bound>>;

  fn union(&self, other: &Range<Bound>) -> Option<Range<Bound>> {
    if !interacts("union", self, other) {
      return None;
    }
    let boundaries = Boundaries::resolve(self, other);
    let (lower, upper) = (boundaries.lower(), boundaries.upper());
    Some(Range::unchecked(
      lower.start().cloned(),
      upper.end().cloned(),
      upper.is_exclusive_end()))
  }
}

impl<Bound: PartialOrd + Clone> Intersection for Range<Bound>
{
  type Output = Option<Range<Bound>>;

  fn intersection(&self, other: &Range<Bound>) -> Option<Range<Bound>> {
    if !interacts("intersection", self, other) {
      return None;
    }
    let boundaries = Boundaries::resolve(self, other);
    Some(Range::unchecked(
      boundaries.last_start.start().cloned(),
      boundaries.first_end.end().cloned(),
      boundaries.first_end.is_exclusive_end()))
  }
}

impl<Bound: PartialOrd + Clone> RelativeComplement for Range<Bound>
{
  type Output = Option<Range<Bound>>;

  /// Returns `None` when the ranges do not overlap.
  ///
  /// Two ranges both unbounded above also give `None` although they overlap: nothing lies past the lowest end since it is absent. This is the only case where `None` does not mean the ranges are disjoint.
  fn complement(&self, other: &Range<Bound>) -> Option<Range<Bound>> {
    if !interacts("complement", self, other) {
      return None;
    }
    let boundaries = Boundaries::resolve(self, other);
    let start = boundaries.first_end.end().cloned()?;
    Some(Range::unchecked(
      Some(start),
      boundaries.last_end.end().cloned(),
      boundaries.last_end.is_exclusive_end()))
  }
}

/// Symmetric difference, as the piece below the highest start followed by the piece above the lowest end.
///
/// The first piece includes its end. A piece bounded by an absent endpoint, below an unbounded start or above an unbounded end, lies beyond every value and is left out.
impl<Bound: PartialOrd + Clone> Difference for Range<Bound>
{
  type Output = Vec<Range<Bound>>;

  fn difference(&self, other: &Range<Bound>) -> Vec<Range<Bound>> {
    let mut pieces = Vec::with_capacity(2);
    if !interacts("difference", self, other) {
      return pieces;
    }
    let boundaries = Boundaries::resolve(self, other);
    if let Some(end) = boundaries.last_start.start() {
      pieces.push(Range::unchecked(
        boundaries.first_start.start().cloned(),
        Some(end.clone()),
        false));
    }
    if let Some(start) = boundaries.first_end.end() {
      pieces.push(Range::unchecked(
        Some(start.clone()),
        boundaries.last_end.end().cloned(),
        boundaries.last_end.is_exclusive_end()));
    }
    pieces
  }
}

impl<Bound: PartialOrd + Clone> Superset for Range<Bound>
{
  fn is_superset(&self, other: &Range<Bound>) -> bool {
    covers_both_endpoints(self, other)
  }
}

impl<Bound: PartialOrd + Clone> ProperSuperset for Range<Bound>
{
  fn is_proper_superset(&self, other: &Range<Bound>) -> bool {
    self.is_superset(other) && self != other
  }
}

impl<Bound: PartialOrd + Clone> Subset for Range<Bound>
{
  fn is_subset(&self, other: &Range<Bound>) -> bool {
    other.is_superset(self)
  }
}

impl<Bound: PartialOrd + Clone> ProperSubset for Range<Bound>
{
  fn is_proper_subset(&self, other: &Range<Bound>) -> bool {
    self.is_subset(other) && self != other
  }
}

forward_all_binop!(impl BitOr, bitor => Union::union -> Option<Range<Bound>>);
forward_all_binop!(impl Add, add => Union::union -> Option<Range<Bound>>);
forward_all_binop!(impl BitAnd, bitand => Intersection::intersection -> Option<Range<Bound>>);
forward_all_binop!(impl Sub, sub => Difference::difference -> Vec<Range<Bound>>);

#[cfg(test)]
mod tests {
  use super::*;

  fn i(a: i32, b: i32) -> Range<i32> { Range::new(a, b) }
  fn e(a: i32, b: i32) -> Range<i32> { Range::exclusive(a, b) }

  #[test]
  fn union_test() {
    assert_eq!(i(1, 5).union(&i(3, 10)), Some(i(1, 10)));
    assert_eq!(i(3, 10).union(&i(1, 5)), Some(i(1, 10)));
    assert_eq!(i(1, 5).union(&e(3, 10)), Some(e(1, 10)));
    assert_eq!(e(1, 5).union(&i(3, 5)), Some(i(1, 5)));
    assert_eq!(i(1, 10).union(&i(3, 5)), Some(i(1, 10)));
    assert_eq!(i(1, 5).union(&i(5, 10)), Some(i(1, 10)));
    assert_eq!(i(1, 5).union(&i(6, 10)), None);

    assert_eq!(Range::new('a', 'j').union(&Range::new('g', 'm')), Some(Range::new('a', 'm')));
    assert_eq!(Range::new('g', 'z').union(&Range::new('c', 'k')), Some(Range::new('c', 'z')));
  }

  #[test]
  fn union_unbounded_test() {
    assert_eq!(Range::from_start(3).union(&i(1, 5)), Some(Range::from_start(1)));
    assert_eq!(Range::to(6).union(&i(1, 9)), Some(Range::to(9)));
    assert_eq!(Range::to(6).union(&Range::from_start(2)), Some(Range::whole()));
    assert_eq!(Range::to(3).union(&Range::from_start(3)), Some(Range::whole()));
    assert_eq!(Range::until(3).union(&Range::from_start(3)), None);
    assert_eq!(Range::until(3).union(&Range::from_start(4)), None);
  }

  #[test]
  fn intersection_test() {
    assert_eq!(i(1, 5).intersection(&i(3, 10)), Some(i(3, 5)));
    assert_eq!(i(3, 10).intersection(&i(1, 5)), Some(i(3, 5)));
    assert_eq!(e(1, 5).intersection(&i(3, 10)), Some(e(3, 5)));
    assert_eq!(i(1, 10).intersection(&i(3, 5)), Some(i(3, 5)));
    assert_eq!(i(3, 5).intersection(&i(1, 10)), Some(i(3, 5)));
    assert_eq!(i(1, 5).intersection(&i(5, 10)), Some(i(5, 5)));
    assert_eq!(e(1, 5).intersection(&i(5, 10)), None);
    assert_eq!(Range::to(6).intersection(&Range::from_start(2)), Some(i(2, 6)));
    assert_eq!(Range::<i32>::whole().intersection(&e(2, 4)), Some(e(2, 4)));
  }

  #[test]
  fn complement_test() {
    assert_eq!(i(1, 5).complement(&i(3, 10)), Some(i(5, 10)));
    assert_eq!(i(3, 10).complement(&i(1, 5)), Some(i(5, 10)));
    assert_eq!(i(1, 10).complement(&i(5, 15)), Some(i(10, 15)));
    assert_eq!(i(1, 5).complement(&e(3, 10)), Some(e(5, 10)));
    assert_eq!(i(1, 5).complement(&Range::from_start(3)), Some(Range::from_start(5)));
    assert!(Range::from_start(1).overlap(&Range::from_start(3)));
    assert_eq!(Range::from_start(1).complement(&Range::from_start(3)), None);
    assert_eq!(i(1, 5).complement(&i(7, 10)), None);
  }

  #[test]
  fn difference_test() {
    assert_eq!(i(1, 5).difference(&i(3, 10)), vec![i(1, 3), i(5, 10)]);
    assert_eq!(i(11, 19).difference(&i(15, 28)), vec![i(11, 15), i(19, 28)]);
    assert_eq!(i(1, 10).difference(&i(3, 5)), vec![i(1, 3), i(5, 10)]);
    assert_eq!(i(1, 5).difference(&e(3, 10)), vec![i(1, 3), e(5, 10)]);
    assert_eq!(i(1, 5).difference(&i(7, 10)), vec![]);
  }

  #[test]
  fn difference_unbounded_test() {
    assert_eq!(Range::to(5).difference(&i(3, 10)), vec![Range::to(3), i(5, 10)]);
    assert_eq!(Range::to(5).difference(&Range::to(8)), vec![i(5, 8)]);
    assert_eq!(Range::from_start(1).difference(&Range::from_start(3)), vec![i(1, 3)]);
    let whole: Range<i32> = Range::whole();
    assert_eq!(whole.difference(&whole), vec![]);
  }

  #[test]
  fn overlap_test() {
    assert!(i(1, 10).overlap(&i(8, 15)));
    assert!(!i(1, 10).overlap(&i(11, 15)));
    assert!(i(1, 5).overlap(&i(5, 10)));
    assert!(!e(1, 5).overlap(&i(5, 10)));
    assert!(!i(5, 10).overlap(&e(1, 5)));
    assert!(i(1, 10).overlap(&i(3, 5)));
    assert!(Range::to(6).overlap(&Range::to(2)));
    assert!(Range::to(6).overlap(&i(6, 7)));
    assert!(!Range::until(6).overlap(&Range::from_start(6)));
    assert!(!Range::from_start(7).overlap(&i(1, 6)));
    assert!(Range::<i32>::whole().overlap(&i(1, 6)));
    assert!(!i(1, 10).is_disjoint(&i(8, 15)));
    assert!(i(1, 10).is_disjoint(&i(11, 15)));
  }

  #[test]
  fn superset_test() {
    assert!(i(1, 10).is_superset(&i(2, 5)));
    assert!(i(1, 10).is_superset(&i(1, 10)));
    assert!(!i(1, 10).is_superset(&i(5, 12)));
    assert!(i(1, 5).is_superset(&e(1, 5)));
    assert!(!e(1, 5).is_superset(&i(1, 5)));
    assert!(e(1, 5).is_superset(&e(1, 5)));
    assert!(!i(1, 5).is_superset(&i(7, 9)));
    assert!(Range::to(5).is_superset(&Range::to(3)));
    assert!(!Range::to(5).is_superset(&Range::from_start(3)));
    assert!(Range::<i32>::whole().is_superset(&Range::until(3)));
    assert!(!i(1, 10).is_superset(&Range::to(5)));

    assert!(i(1, 10).is_proper_superset(&i(2, 5)));
    assert!(!i(1, 10).is_proper_superset(&i(1, 10)));
    assert!(i(1, 5).is_proper_superset(&e(1, 5)));
  }

  #[test]
  fn subset_test() {
    assert!(i(1, 10).is_subset(&i(0, 12)));
    assert!(i(1, 10).is_subset(&i(1, 10)));
    assert!(!i(1, 10).is_subset(&i(5, 12)));
    assert!(e(1, 5).is_subset(&i(1, 5)));

    assert!(i(1, 10).is_proper_subset(&i(0, 12)));
    assert!(!i(1, 10).is_proper_subset(&i(1, 10)));
    assert!(!i(1, 10).is_proper_subset(&i(5, 12)));
  }

  #[test]
  fn empty_range_containment() {
    // `[10, 10)` holds no element: it fits in `[1, 10)` without overlapping it.
    assert!(!e(10, 10).overlap(&e(1, 10)));
    assert!(e(1, 10).is_superset(&e(10, 10)));
    assert!(e(10, 10).is_subset(&e(1, 10)));
    assert!(e(1, 10).is_proper_superset(&e(10, 10)));

    assert!(e(3, 3).is_superset(&e(3, 3)));
    assert!(!e(3, 3).is_proper_superset(&e(3, 3)));
    assert!(e(3, 3).is_subset(&i(1, 5)));
    assert!(!e(3, 3).is_superset(&i(3, 3)));
    assert!(!i(1, 5).is_superset(&e(7, 7)));
  }

  #[test]
  fn operators_test() {
    let a = i(5, 10);
    let b = i(9, 24);
    assert_eq!(&a | &b, Some(i(5, 24)));
    assert_eq!(a | &b, Some(i(5, 24)));
    assert_eq!(&a & b, Some(i(9, 10)));
    assert_eq!(a & b, Some(i(9, 10)));
    assert_eq!(i(11, 19) - i(15, 28), vec![i(11, 15), i(19, 28)]);
    assert_eq!(e(1, 10) | i(10, 30), None);
    assert_eq!(&a + &b, Some(i(5, 24)));
    assert_eq!(e(1, 10) + i(10, 30), None);
  }
}
