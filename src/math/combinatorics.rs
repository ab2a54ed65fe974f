use crate::math::MathError;
use crate::math::scalar::check_natural;
use log::debug;

/// Binomial coefficient `n! / ((n - r)! * r!)`.
///
/// Both arguments must be non-negative integers with `r <= n`, otherwise
/// `MathError::InvalidArgument` is returned. There is no gamma based
/// extension to real arguments.
///
/// Evaluated as the running product `(n - k + 1) / 1 * (n - k + 2) / 2 * ... * n / k`
/// with `k = min(r, n - r)`. Every partial result is itself a binomial
/// coefficient, so the value is exact while it stays below 2^53 and large `n`
/// does not overflow through the intermediate factorials. Results past
/// `f64::MAX` come back as infinity.
pub fn ncr(n: f64, r: f64) -> Result<f64, MathError> {
    check_natural("ncr", "n", n)?;
    check_natural("ncr", "r", r)?;
    if r > n {
        debug!("ncr: rejecting r = {r} > n = {n}");
        return Err(MathError::invalid_argument(
            "ncr",
            format!("r ({r}) is greater than n ({n})"),
        ));
    }
    let k = r.min(n - r);
    let mut result: f64 = 1.0;
    let mut i = 1.0;
    while i <= k && result.is_finite() {
        result = result * (n - k + i) / i;
        i += 1.0;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::factorial;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ncr() {
        assert_eq!(ncr(5.0, 2.0), Ok(10.0));
        assert_eq!(ncr(5.0, 3.0), Ok(10.0));
        assert_eq!(ncr(10.0, 5.0), Ok(252.0));
        assert_eq!(ncr(52.0, 5.0), Ok(2_598_960.0));
        assert_eq!(ncr(0.0, 0.0), Ok(1.0));
    }

    #[test]
    fn test_ncr_edges() {
        for n in 0..=30 {
            let n = n as f64;
            assert_eq!(ncr(n, 0.0), Ok(1.0));
            assert_eq!(ncr(n, n), Ok(1.0));
        }
        assert_eq!(ncr(7.0, 1.0), Ok(7.0));
    }

    #[test]
    fn test_ncr_matches_factorial_quotient() {
        for n in 0..=20 {
            for r in 0..=n {
                let (n, r) = (n as f64, r as f64);
                let expected =
                    factorial(n).unwrap() / (factorial(n - r).unwrap() * factorial(r).unwrap());
                assert_eq!(ncr(n, r), Ok(expected), "ncr({n}, {r})");
            }
        }
    }

    #[test]
    fn test_ncr_pascal_rule() {
        for n in 1..=40 {
            for r in 1..n {
                let (n, r) = (n as f64, r as f64);
                assert_eq!(
                    ncr(n, r).unwrap(),
                    ncr(n - 1.0, r - 1.0).unwrap() + ncr(n - 1.0, r).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_ncr_large_n_stays_finite() {
        assert_eq!(ncr(1000.0, 2.0), Ok(499_500.0));
        assert_eq!(ncr(1000.0, 999.0), Ok(1000.0));
        assert!(ncr(200.0, 100.0).unwrap().is_finite());
    }

    #[test]
    fn test_ncr_overflows_to_infinity() {
        assert_eq!(ncr(2000.0, 1000.0), Ok(f64::INFINITY));
        assert_eq!(ncr(1e12, 5e11), Ok(f64::INFINITY));
        // k is beyond 2^53, where adding one to the counter no longer changes it
        assert_eq!(ncr(4e16, 2e16), Ok(f64::INFINITY));
        assert_eq!(ncr(1e300, 3.0), Ok(f64::INFINITY));
    }

    #[test]
    fn test_ncr_r_greater_than_n() {
        let err = ncr(2.0, 3.0).unwrap_err();
        assert_eq!(
            err,
            MathError::InvalidArgument {
                function: "ncr",
                reason: "r (3) is greater than n (2)".to_string(),
            }
        );
    }

    #[test]
    fn test_ncr_rejects_outside_domain() {
        let cases = [
            (-1.0, 0.0),
            (5.0, -1.0),
            (5.5, 2.0),
            (5.0, 2.5),
            (f64::NAN, 1.0),
            (f64::INFINITY, 1.0),
        ];
        for (n, r) in cases {
            assert!(
                matches!(ncr(n, r), Err(MathError::InvalidArgument { function: "ncr", .. })),
                "ncr({n}, {r}) should be rejected"
            );
        }
    }
}
