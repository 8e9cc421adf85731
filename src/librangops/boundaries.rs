// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resolution of which operand supplies each boundary of a result.
//!
//! An absent start sorts before every present start and an absent end sorts after every present end. At equal present ends, an excluded end sorts before an included one.

use crate::range::Range;

/// `a` starts no later than `b`.
pub fn start_precedes<Bound: PartialOrd>(a: &Range<Bound>, b: &Range<Bound>) -> bool {
  match (a.start(), b.start()) {
    (None, _) => true,
    (Some(_), None) => false,
    (Some(x), Some(y)) => x <= y
  }
}

/// `a` ends no later than `b`.
pub fn end_precedes<Bound: PartialOrd>(a: &Range<Bound>, b: &Range<Bound>) -> bool {
  match (a.end(), b.end()) {
    (_, None) => true,
    (None, Some(_)) => false,
    (Some(x), Some(y)) =>
      x < y || (x == y && (a.is_exclusive_end() || !b.is_exclusive_end()))
  }
}

/// Both operands of a binary operation, ordered once by start and once by end.
///
/// The same operand can hold several roles, for example when one range is nested in the other it is both `first_start` and `last_end`.
pub struct Boundaries<'a, Bound>
{
  pub first_start: &'a Range<Bound>,
  pub last_start: &'a Range<Bound>,
  pub first_end: &'a Range<Bound>,
  pub last_end: &'a Range<Bound>
}

impl<'a, Bound: PartialOrd> Boundaries<'a, Bound>
{
  /// Ties keep the input order: `a` is first and `b` is last.
  pub fn resolve(a: &'a Range<Bound>, b: &'a Range<Bound>) -> Boundaries<'a, Bound> {
    let (first_start, last_start) = if start_precedes(a, b) { (a, b) } else { (b, a) };
    let (first_end, last_end) = if end_precedes(a, b) { (a, b) } else { (b, a) };
    Boundaries { first_start, last_start, first_end, last_end }
  }

  /// The operand with the lowest start.
  pub fn lower(&self) -> &'a Range<Bound> {
    self.first_start
  }

  /// The operand with the highest end.
  pub fn upper(&self) -> &'a Range<Bound> {
    self.last_end
  }
}
