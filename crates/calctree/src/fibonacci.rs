//! Fibonacci numbers over `i32`
//!
//! F(0) = 0, F(1) = 1, F(n) = F(n - 1) + F(n - 2), computed with a forward
//! table of n + 1 entries. F(46) = 1_836_311_903 is the largest value that
//! fits in an `i32`; from F(47) on, [`fibonacci`] wraps and
//! [`checked_fibonacci`] returns `None`.

/// The n-th Fibonacci number, wrapping on `i32` overflow.
pub fn fibonacci(n: u32) -> i32 {
    if n < 2 {
        return n as i32;
    }

    let n = n as usize;
    let mut table = vec![0i32; n + 1];
    table[1] = 1;
    for i in 2..=n {
        table[i] = table[i - 1].wrapping_add(table[i - 2]);
    }

    table[n]
}

/// The n-th Fibonacci number, or `None` if it does not fit in an `i32`.
pub fn checked_fibonacci(n: u32) -> Option<i32> {
    if n < 2 {
        return Some(n as i32);
    }

    let n = n as usize;
    let mut table = vec![0i32; n + 1];
    table[1] = 1;
    for i in 2..=n {
        table[i] = table[i - 1].checked_add(table[i - 2])?;
    }

    Some(table[n])
}
