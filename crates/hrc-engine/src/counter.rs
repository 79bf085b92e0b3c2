//! Counter tokens for auto-increment levels.
//!
//! Numeric counters are parsed and re-formatted. Alphabetic counters advance
//! like an odometer over `a..z` (or `A..Z`): the rightmost character is bumped
//! and a `z` rolls over to `a` carrying into its left neighbour. When every
//! character rolls over, a new `a` is prepended, so `zz` becomes `aaa`.

use crate::levels::CounterKind;

/// Returns the token following `token` for a counter of the given kind.
pub fn advance(token: &str, kind: CounterKind) -> String {
    match kind {
        CounterKind::Numeric => advance_numeric(token),
        CounterKind::AlphaLower => advance_alpha(token, 'a', 'z'),
        CounterKind::AlphaUpper => advance_alpha(token, 'A', 'Z'),
    }
}

fn advance_numeric(token: &str) -> String {
    // unparsable tokens restart the count as if they were 1
    let value: i64 = token.parse().unwrap_or(1);
    value.saturating_add(1).to_string()
}

fn advance_alpha(token: &str, min: char, max: char) -> String {
    if token.is_empty() {
        return min.to_string();
    }

    let mut chars: Vec<char> = token.chars().collect();
    let mut carry = true;
    for c in chars.iter_mut().rev() {
        if *c == max {
            *c = min;
        } else if (min..max).contains(&*c) {
            *c = char::from(*c as u8 + 1);
            carry = false;
            break;
        } else {
            *c = min;
            carry = false;
            break;
        }
    }

    let mut out = String::with_capacity(chars.len() + 1);
    if carry {
        out.push(min);
    }
    out.extend(chars);
    out
}
