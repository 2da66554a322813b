use crate::error::{PrimeClockError, Result};

/// Every prime that can divide a number in `0..=60`, in ascending order.
pub const PRIME_BASIS: [u32; 17] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59];

/// Number of basis primes, and so the number of angular slots on the chart.
pub const BASIS_LEN: usize = PRIME_BASIS.len();

/// Largest integer the basis can decompose.
pub const MAX_FACTORABLE: u32 = 60;

/// Multiplicity of each basis prime in an integer's factorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decomposition([u32; BASIS_LEN]);

impl Decomposition {
    pub const fn from_counts(counts: [u32; BASIS_LEN]) -> Self {
        Self(counts)
    }

    pub const fn counts(&self) -> &[u32; BASIS_LEN] {
        &self.0
    }

    /// Count at a basis index; indices past the basis read as zero.
    pub fn count(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Count for a prime value, `None` if the prime is not in the basis.
    pub fn count_of(&self, prime: u32) -> Option<u32> {
        PRIME_BASIS
            .iter()
            .position(|&p| p == prime)
            .map(|index| self.0[index])
    }

    pub fn max_count(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Product of `prime^count` over the basis. The zero vector yields 1.
    pub fn product(&self) -> u64 {
        PRIME_BASIS
            .iter()
            .zip(self.0.iter())
            .map(|(&p, &c)| u64::from(p).pow(c))
            .product()
    }
}

/// Decomposes `n` over [`PRIME_BASIS`] by trial division.
///
/// `0` and `1` both map to the all-zero vector.
pub fn factorize(n: u32) -> Result<Decomposition> {
    if n > MAX_FACTORABLE {
        return Err(PrimeClockError::OutOfRange { value: i64::from(n) });
    }

    let mut counts = [0u32; BASIS_LEN];
    let mut rest = n;
    if rest > 1 {
        for (index, &prime) in PRIME_BASIS.iter().enumerate() {
            while rest % prime == 0 {
                counts[index] += 1;
                rest /= prime;
            }
            if rest == 1 {
                break;
            }
        }
    }

    // a leftover factor means a prime larger than the basis covers
    if rest > 1 {
        return Err(PrimeClockError::OutOfRange {
            value: i64::from(rest),
        });
    }

    Ok(Decomposition(counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one_are_empty() {
        assert!(factorize(0).unwrap().is_zero());
        assert!(factorize(1).unwrap().is_zero());
    }

    #[test]
    fn sixty_is_two_squared_three_five() {
        let d = factorize(60).unwrap();
        assert_eq!(d.count_of(2), Some(2));
        assert_eq!(d.count_of(3), Some(1));
        assert_eq!(d.count_of(5), Some(1));
        assert_eq!(d.counts().iter().sum::<u32>(), 4);
    }

    #[test]
    fn primes_hit_their_own_slot() {
        for (index, &p) in PRIME_BASIS.iter().enumerate() {
            let d = factorize(p).unwrap();
            assert_eq!(d.count(index), 1);
            assert_eq!(d.max_count(), 1);
        }
    }

    #[test]
    fn product_recovers_every_value_in_range() {
        for n in 2..=MAX_FACTORABLE {
            assert_eq!(factorize(n).unwrap().product(), u64::from(n));
        }
    }

    #[test]
    fn rejects_values_above_sixty() {
        assert!(matches!(
            factorize(61),
            Err(PrimeClockError::OutOfRange { value: 61 })
        ));
    }

    #[test]
    fn count_of_unknown_prime_is_none() {
        assert_eq!(factorize(6).unwrap().count_of(61), None);
        assert_eq!(factorize(6).unwrap().count_of(4), None);
    }
}
