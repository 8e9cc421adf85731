// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised when a value cannot be turned into a range.

use thiserror::Error;

/// Reasons for rejecting an operand before any operation runs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
  /// Both endpoints are present and the start is greater than the end.
  #[error("invalid range: start is greater than end")]
  Reversed,
  /// The start bound is excluded, only the end of a range may be.
  #[error("invalid range: start bound cannot be excluded")]
  ExcludedStart,
}
