//! Polar code construction.
//!
//! This module computes the partition of the bit positions of a polar code
//! into frozen and information (unfrozen) positions. The partition follows
//! the reliability ranking of the polar sequence in the
//! [`codes::nr`](crate::codes::nr) module: for a codeword of `n` bits
//! carrying `k` message bits, the `n - k` least reliable positions are
//! frozen and the `k` most reliable positions carry information.
//!
//! The partition is the input that a polar encoder and a polar decoder must
//! agree on. An encoder writes the message bits into the unfrozen positions
//! and sets every frozen position to zero before applying the polar
//! transform; a decoder uses the frozen positions to prune its search. Both
//! of those are outside the scope of this module, which only produces the
//! position sets.

use crate::codes::nr;
use thiserror::Error;

/// Polar construction error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The codeword size is outside the range covered by the polar sequence.
    #[error("codeword size {0} is not in the range [1, 1024]")]
    CodewordSize(usize),
    /// The message size exceeds the codeword size.
    #[error("message size {k} exceeds codeword size {n}")]
    MessageTooLong {
        /// Requested codeword size.
        n: usize,
        /// Requested message size.
        k: usize,
    },
}

/// Frozen and information bit positions of a polar code.
///
/// A value of this type is an immutable partition of the positions
/// `0..n` of an `(n, k)` polar code into `n - k` frozen positions and `k`
/// information positions. Both position lists are ordered by increasing
/// reliability, so the last element of [`unfrozen_positions`] is the most
/// reliable position of the code.
///
/// [`unfrozen_positions`]: FrozenBits::unfrozen_positions
///
/// # Examples
/// ```
/// # use polar_toolbox::construction::FrozenBits;
/// let bits = FrozenBits::new(8, 4).unwrap();
/// assert_eq!(bits.frozen_positions(), [0, 1, 2, 4]);
/// assert_eq!(bits.unfrozen_positions(), [3, 5, 6, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrozenBits {
    frozen: Vec<usize>,
    unfrozen: Vec<usize>,
}

impl FrozenBits {
    /// Computes the partition for an `(n, k)` polar code.
    ///
    /// The positions `0..n` are sorted by increasing reliability rank, with
    /// ties decided by the smaller position (the ranks of the polar sequence
    /// are all distinct, so ties cannot actually occur, but the ordering is
    /// stable regardless). The first `n - k` positions of the sorted list
    /// are frozen and the remaining `k` are unfrozen.
    ///
    /// # Errors
    /// Returns [`Error::CodewordSize`] unless `1 <= n <= 1024`, and
    /// [`Error::MessageTooLong`] if `k > n`. No partial result is produced.
    ///
    /// # Examples
    /// ```
    /// # use polar_toolbox::construction::FrozenBits;
    /// let bits = FrozenBits::new(1024, 512).unwrap();
    /// assert_eq!(bits.frozen_positions().len(), 512);
    /// assert_eq!(bits.unfrozen_positions().len(), 512);
    /// ```
    pub fn new(n: usize, k: usize) -> Result<FrozenBits, Error> {
        if n == 0 || n > nr::MAX_CODEWORD_SIZE {
            return Err(Error::CodewordSize(n));
        }
        if k > n {
            return Err(Error::MessageTooLong { n, k });
        }
        let mut positions: Vec<usize> = (0..n).collect();
        positions.sort_by_key(|&q| nr::reliability(q));
        let unfrozen = positions.split_off(n - k);
        Ok(FrozenBits {
            frozen: positions,
            unfrozen,
        })
    }

    /// Returns the frozen positions, ordered by increasing reliability.
    pub fn frozen_positions(&self) -> &[usize] {
        &self.frozen
    }

    /// Returns the information positions, ordered by increasing reliability.
    pub fn unfrozen_positions(&self) -> &[usize] {
        &self.unfrozen
    }

    /// Returns the codeword size `n` of the code.
    pub fn codeword_size(&self) -> usize {
        self.frozen.len() + self.unfrozen.len()
    }

    /// Returns the message size `k` of the code.
    pub fn message_size(&self) -> usize {
        self.unfrozen.len()
    }

    /// Returns `true` if `position` is frozen.
    ///
    /// # Panics
    /// Panics if `position` is not smaller than the codeword size.
    pub fn is_frozen(&self, position: usize) -> bool {
        assert!(position < self.codeword_size());
        self.frozen.contains(&position)
    }

    /// Returns the frozen flags in natural position order.
    ///
    /// Element `j` of the returned vector is `true` if position `j` is
    /// frozen. This is the form in which encoders that walk the codeword
    /// position by position usually consume the partition.
    ///
    /// # Examples
    /// ```
    /// # use polar_toolbox::construction::FrozenBits;
    /// let bits = FrozenBits::new(4, 2).unwrap();
    /// assert_eq!(bits.frozen_mask(), [true, true, false, false]);
    /// ```
    pub fn frozen_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.codeword_size()];
        for &q in &self.frozen {
            mask[q] = true;
        }
        mask
    }

    /// Consumes the partition, returning the frozen and unfrozen position
    /// lists.
    pub fn into_positions(self) -> (Vec<usize>, Vec<usize>) {
        (self.frozen, self.unfrozen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn small_code() {
        // positions 0..4 have ranks [0, 1, 2, 7], already in rank order
        let bits = FrozenBits::new(4, 2).unwrap();
        assert_eq!(bits.frozen_positions(), [0, 1]);
        assert_eq!(bits.unfrozen_positions(), [2, 3]);
    }

    #[test]
    fn rank_order_differs_from_position_order() {
        // positions 0..8 have ranks [0, 1, 2, 7, 3, 8, 11, 24], so position
        // 4 outranks position 3
        let bits = FrozenBits::new(8, 4).unwrap();
        assert_eq!(bits.frozen_positions(), [0, 1, 2, 4]);
        assert_eq!(bits.unfrozen_positions(), [3, 5, 6, 7]);
    }

    #[test]
    fn partition_of_random_codes() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let n = rng.gen_range(1..=nr::MAX_CODEWORD_SIZE);
            let k = rng.gen_range(0..=n);
            let bits = FrozenBits::new(n, k).unwrap();
            assert_eq!(bits.frozen_positions().len(), n - k);
            assert_eq!(bits.unfrozen_positions().len(), k);
            let mut all = [bits.frozen_positions(), bits.unfrozen_positions()].concat();
            all.sort_unstable();
            // sorted union equal to 0..n implies the sets are also disjoint
            assert!(all.iter().enumerate().all(|(j, &q)| q == j));
        }
    }

    #[test]
    fn no_frozen_position_outranks_an_unfrozen_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let n = rng.gen_range(1..=nr::MAX_CODEWORD_SIZE);
            let k = rng.gen_range(0..=n);
            let bits = FrozenBits::new(n, k).unwrap();
            let max_frozen = bits.frozen_positions().iter().map(|&q| nr::reliability(q)).max();
            let min_unfrozen = bits.unfrozen_positions().iter().map(|&q| nr::reliability(q)).min();
            if let (Some(f), Some(u)) = (max_frozen, min_unfrozen) {
                assert!(f < u);
            }
        }
    }

    #[test]
    fn deterministic() {
        let a = FrozenBits::new(512, 200).unwrap();
        let b = FrozenBits::new(512, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn all_frozen() {
        let bits = FrozenBits::new(8, 0).unwrap();
        assert_eq!(bits.frozen_positions(), [0, 1, 2, 4, 3, 5, 6, 7]);
        assert!(bits.unfrozen_positions().is_empty());
    }

    #[test]
    fn all_unfrozen() {
        let bits = FrozenBits::new(8, 8).unwrap();
        assert!(bits.frozen_positions().is_empty());
        assert_eq!(bits.unfrozen_positions(), [0, 1, 2, 4, 3, 5, 6, 7]);
    }

    #[test]
    fn codeword_too_long() {
        assert_eq!(FrozenBits::new(1025, 100), Err(Error::CodewordSize(1025)));
    }

    #[test]
    fn empty_codeword() {
        assert_eq!(FrozenBits::new(0, 0), Err(Error::CodewordSize(0)));
    }

    #[test]
    fn message_longer_than_codeword() {
        assert_eq!(
            FrozenBits::new(16, 17),
            Err(Error::MessageTooLong { n: 16, k: 17 })
        );
    }

    #[test]
    fn mask_matches_positions() {
        let bits = FrozenBits::new(8, 4).unwrap();
        assert_eq!(
            bits.frozen_mask(),
            [true, true, true, false, true, false, false, false]
        );
        for q in 0..8 {
            assert_eq!(bits.is_frozen(q), bits.frozen_mask()[q]);
        }
    }
}
