// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Implements an operator for `&Range op &Range` by calling the set operation, then forwards the by-value combinations to it.
macro_rules! forward_all_binop {
  (impl $imp:ident, $method:ident => $op:ident::$op_method:ident -> $res:ty) => {
    impl<'a, 'b, Bound: PartialOrd + Clone> $imp<&'b Range<Bound>> for &'a Range<Bound> {
      type Output = $res;

      fn $method(self, other: &'b Range<Bound>) -> $res {
        $op::$op_method(self, other)
      }
    }

    forward_val_val_binop!(impl $imp, $method => $op::$op_method -> $res);
    forward_ref_val_binop!(impl $imp, $method => $op::$op_method -> $res);
    forward_val_ref_binop!(impl $imp, $method => $op::$op_method -> $res);
  }
}

macro_rules! forward_val_val_binop {
  (impl $imp:ident, $method:ident => $op:ident::$op_method:ident -> $res:ty) => {
    impl<Bound: PartialOrd + Clone> $imp<Range<Bound>> for Range<Bound> {
      type Output = $res;

      fn $method(self, other: Range<Bound>) -> $res {
        $op::$op_method(&self, &other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl $imp:ident, $method:ident => $op:ident::$op_method:ident -> $res:ty) => {
    impl<'a, Bound: PartialOrd + Clone> $imp<Range<Bound>> for &'a Range<Bound> {
      type Output = $res;

      fn $method(self, other: Range<Bound>) -> $res {
        $op::$op_method(self, &other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl $imp:ident, $method:ident => $op:ident::$op_method:ident -> $res:ty) => {
    impl<'b, Bound: PartialOrd + Clone> $imp<&'b Range<Bound>> for Range<Bound> {
      type Output = $res;

      fn $method(self, other: &'b Range<Bound>) -> $res {
        $op::$op_method(&self, other)
      }
    }
  }
}
