// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ranges over any ordered domain, with an optionally excluded end and possibly unbounded on either side.
//!
//! A range is the pair `(start, end)` plus a flag telling if `end` is itself a member. Any of the two endpoints can be absent, an absent start means the range extends downward without limit and an absent end means it extends upward without limit. The start of a range is always included.
//!
//! Ranges are immutable values compared structurally: two ranges are equal if their start, end and exclusivity flag are equal.
//!
//! # Examples
//!
//! ```rust
//! use rangops::Range;
//!
//! let closed = Range::new(1, 5);
//! let half_open = Range::exclusive(1, 5);
//! assert!(closed.covers(&5));
//! assert!(!half_open.covers(&5));
//!
//! let from_std = Range::from_bounds(3..).unwrap();
//! assert_eq!(from_std, Range::from_start(3));
//! assert!(from_std.covers(&1_000_000));
//! ```
//!
//! # See also
//! [set operations](../set_operations/index.html)

use crate::error::RangeError;
use crate::ops::Whole;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Bound as StdBound, RangeBounds, RangeInclusive};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Range<Bound>
{
  start: Option<Bound>,
  end: Option<Bound>,
  exclusive_end: bool
}

fn is_reversed<Bound: PartialOrd>(start: &Option<Bound>, end: &Option<Bound>) -> bool {
  match (start, end) {
    (Some(s), Some(e)) => s > e,
    _ => false
  }
}

impl<Bound: PartialOrd + Clone> Range<Bound>
{
  /// Closed range `[start, end]`.
  ///
  /// # Panics
  ///
  /// Panics if `start > end`.
  pub fn new(start: Bound, end: Bound) -> Range<Bound> {
    Range::from_parts(Some(start), Some(end), false)
  }

  /// Half-open range `[start, end)`.
  ///
  /// # Panics
  ///
  /// Panics if `start > end`.
  pub fn exclusive(start: Bound, end: Bound) -> Range<Bound> {
    Range::from_parts(Some(start), Some(end), true)
  }

  /// Builds a range from its raw parts, `None` standing for an unbounded side.
  ///
  /// # Panics
  ///
  /// Panics if both endpoints are present and `start > end`. Use [`Range::try_new`] to get an error instead.
  pub fn from_parts(start: Option<Bound>, end: Option<Bound>, exclusive_end: bool) -> Range<Bound> {
    assert!(!is_reversed(&start, &end),
      "Cannot build a range with a start greater than its end.");
    Range::unchecked(start, end, exclusive_end)
  }

  /// Fallible version of [`Range::from_parts`].
  ///
  /// ```rust
  /// use rangops::{Range, RangeError};
  ///
  /// assert!(Range::try_new(Some(1), Some(5), true).is_ok());
  /// assert_eq!(Range::try_new(Some(5), Some(1), false), Err(RangeError::Reversed));
  /// ```
  pub fn try_new(start: Option<Bound>, end: Option<Bound>, exclusive_end: bool) -> Result<Range<Bound>, RangeError> {
    if is_reversed(&start, &end) {
      Err(RangeError::Reversed)
    }
    else {
      Ok(Range::unchecked(start, end, exclusive_end))
    }
  }

  /// Converts any standard range expression (`a..b`, `a..=b`, `a..`, `..b`, `..=b`, `..`) or bound pair.
  ///
  /// Fails with [`RangeError::ExcludedStart`] if the start bound is excluded and with [`RangeError::Reversed`] if the start is greater than the end.
  pub fn from_bounds<R>(range: R) -> Result<Range<Bound>, RangeError> where
   R: RangeBounds<Bound>
  {
    let start = match range.start_bound() {
      StdBound::Included(x) => Some(x.clone()),
      StdBound::Excluded(_) => return Err(RangeError::ExcludedStart),
      StdBound::Unbounded => None
    };
    let (end, exclusive_end) = match range.end_bound() {
      StdBound::Included(x) => (Some(x.clone()), false),
      StdBound::Excluded(x) => (Some(x.clone()), true),
      StdBound::Unbounded => (None, false)
    };
    Range::try_new(start, end, exclusive_end)
  }

  pub fn singleton(x: Bound) -> Range<Bound> {
    Range::new(x.clone(), x)
  }

  /// `[start, +inf)`
  pub fn from_start(start: Bound) -> Range<Bound> {
    Range::unchecked(Some(start), None, false)
  }

  /// `(-inf, end]`
  pub fn to(end: Bound) -> Range<Bound> {
    Range::unchecked(None, Some(end), false)
  }

  /// `(-inf, end)`
  pub fn until(end: Bound) -> Range<Bound> {
    Range::unchecked(None, Some(end), true)
  }

  /// Membership test. The start is always a member, the end only if it is not excluded, and an absent endpoint covers its whole side.
  pub fn covers(&self, value: &Bound) -> bool {
    let above_start = self.start.as_ref().map_or(true, |s| s <= value);
    let below_end = match &self.end {
      None => true,
      Some(e) if self.exclusive_end => value < e,
      Some(e) => value <= e
    };
    above_start && below_end
  }
}

impl<Bound> Range<Bound>
{
  // Results computed by the set operations are well-formed by construction.
  pub(crate) fn unchecked(start: Option<Bound>, end: Option<Bound>, exclusive_end: bool) -> Range<Bound> {
    let exclusive_end = exclusive_end && end.is_some();
    Range { start, end, exclusive_end }
  }

  pub fn start(&self) -> Option<&Bound> {
    self.start.as_ref()
  }

  pub fn end(&self) -> Option<&Bound> {
    self.end.as_ref()
  }

  pub fn is_exclusive_end(&self) -> bool {
    self.exclusive_end
  }

  pub fn has_start(&self) -> bool {
    self.start.is_some()
  }

  pub fn has_end(&self) -> bool {
    self.end.is_some()
  }

  /// `true` if neither side is unbounded.
  pub fn is_bounded(&self) -> bool {
    self.has_start() && self.has_end()
  }
}

impl<Bound> Whole for Range<Bound>
{
  fn whole() -> Range<Bound> {
    Range::unchecked(None, None, false)
  }
}

impl<Bound> Collection for Range<Bound>
{
  type Item = Bound;
}

impl<Bound: PartialOrd + Clone> Contains for Range<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    self.covers(value)
  }
}

impl<Bound> RangeBounds<Bound> for Range<Bound>
{
  fn start_bound(&self) -> StdBound<&Bound> {
    match &self.start {
      Some(s) => StdBound::Included(s),
      None => StdBound::Unbounded
    }
  }

  fn end_bound(&self) -> StdBound<&Bound> {
    match &self.end {
      Some(e) if self.exclusive_end => StdBound::Excluded(e),
      Some(e) => StdBound::Included(e),
      None => StdBound::Unbounded
    }
  }
}

impl<Bound: fmt::Display> fmt::Display for Range<Bound>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    match &self.start {
      Some(s) => write!(formatter, "[{}, ", s)?,
      None => formatter.write_str("(-inf, ")?
    }
    match &self.end {
      Some(e) if self.exclusive_end => write!(formatter, "{})", e),
      Some(e) => write!(formatter, "{}]", e),
      None => formatter.write_str("+inf)")
    }
  }
}

pub trait ToRange<Bound> {
  fn to_range(self) -> Range<Bound>;
}

impl<Bound> ToRange<Bound> for Range<Bound> {
  fn to_range(self) -> Range<Bound> { self }
}

impl<Bound: PartialOrd + Clone> ToRange<Bound> for (Bound, Bound) {
  fn to_range(self) -> Range<Bound> {
    let (a, b) = self;
    Range::new(a, b)
  }
}

impl<Bound: PartialOrd + Clone> ToRange<Bound> for std::ops::Range<Bound> {
  fn to_range(self) -> Range<Bound> {
    Range::exclusive(self.start, self.end)
  }
}

impl<Bound: PartialOrd + Clone> ToRange<Bound> for RangeInclusive<Bound> {
  fn to_range(self) -> Range<Bound> {
    let (a, b) = self.into_inner();
    Range::new(a, b)
  }
}

impl<Bound: Serialize> Serialize for Range<Bound>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    let mut tuple = serializer.serialize_tuple(3)?;
    tuple.serialize_element(&self.start)?;
    tuple.serialize_element(&self.end)?;
    tuple.serialize_element(&self.exclusive_end)?;
    tuple.end()
  }
}

impl<'de, Bound> Deserialize<'de> for Range<Bound> where
 Bound: Deserialize<'de> + PartialOrd + Clone
{
  fn deserialize<D>(deserializer: D) -> Result<Range<Bound>, D::Error> where
   D: Deserializer<'de>
  {
    struct RangeVisitor<Bound> {
      marker: PhantomData<Bound>
    }

    impl<'de, Bound> Visitor<'de> for RangeVisitor<Bound> where
     Bound: Deserialize<'de> + PartialOrd + Clone
    {
      type Value = Range<Bound>;

      fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a tuple (start, end, exclusive_end)")
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<Range<Bound>, A::Error> where
       A: SeqAccess<'de>
      {
        let start: Option<Bound> = seq.next_element()?
          .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let end: Option<Bound> = seq.next_element()?
          .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let exclusive_end: bool = seq.next_element()?
          .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        Range::try_new(start, end, exclusive_end).map_err(de::Error::custom)
      }
    }

    deserializer.deserialize_tuple(3, RangeVisitor { marker: PhantomData })
  }
}
