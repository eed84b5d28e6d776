//! Fibonacci Module
//!
//! The two origin algorithms and the variant selector used to route requests.

use std::collections::HashMap;
use std::fmt;

/// Computed Fibonacci value.
pub type FibValue = u128;

/// Largest order whose value fits in a [`FibValue`].
pub const MAX_ORDER: u64 = 186;

// == Variant ==
/// Selects which origin algorithm (and route) serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Iterative algorithm, served at `/fibonacci`
    Iterative,
    /// Memoized recursive algorithm, served at `/recursive-fibonacci`
    Recursive,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Iterative, Variant::Recursive];

    /// HTTP route for this variant, shared by the origin and the proxy.
    pub fn route(self) -> &'static str {
        match self {
            Variant::Iterative => "/fibonacci",
            Variant::Recursive => "/recursive-fibonacci",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Iterative => "fibonacci",
            Variant::Recursive => "recursive-fibonacci",
        }
    }

    /// Runs the algorithm this variant selects.
    pub fn compute(self, order: u64) -> Option<FibValue> {
        match self {
            Variant::Iterative => iterative(order),
            Variant::Recursive => memoized_recursive(order),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// == Iterative ==
/// Returns the Fibonacci value for `order`, where orders 1 and 2 are both 1.
///
/// Returns `None` for order 0 or when the value overflows a [`FibValue`].
pub fn iterative(order: u64) -> Option<FibValue> {
    if order == 0 {
        return None;
    }

    let mut previous: FibValue = 0;
    let mut current: FibValue = 1;
    for _ in 1..order {
        let next = previous.checked_add(current)?;
        previous = current;
        current = next;
    }
    Some(current)
}

// == Memoized Recursive ==
/// Recursive variant with a memo table scoped to this single call.
///
/// Returns `None` for order 0 or orders above [`MAX_ORDER`].
pub fn memoized_recursive(order: u64) -> Option<FibValue> {
    if order == 0 || order > MAX_ORDER {
        return None;
    }

    let mut memo = HashMap::with_capacity(order as usize);
    Some(recurse(order, &mut memo))
}

fn recurse(k: u64, memo: &mut HashMap<u64, FibValue>) -> FibValue {
    if k <= 2 {
        return 1;
    }
    if let Some(&value) = memo.get(&k) {
        return value;
    }
    let value = recurse(k - 1, memo) + recurse(k - 2, memo);
    memo.insert(k, value);
    value
}
