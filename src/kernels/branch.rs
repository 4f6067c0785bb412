//! Divisible-by-three counting kernel
//!
//! The remainder is derived from the quotient (`r = i - 3 * q`) so the loop
//! body is a division and a multiply-subtract, never a modulus.

/// Count the multiples of 3 in `[0, n)`.
///
/// Always equal to `ceil(n / 3)`.
///
/// ```
/// use microbench::kernels::branch::count_div3;
///
/// assert_eq!(count_div3(4), 2);
/// ```
pub fn count_div3(n: u64) -> u64 {
    let mut c: u64 = 0;
    for i in 0..n {
        let q = i / 3;
        let r = i - q * 3;
        if r == 0 {
            c += 1;
        }
    }
    c
}
