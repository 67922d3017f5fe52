// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The null model behind the canonical-labelling heuristic.
//!
//! Two labels share a block-row or block-column segment ("atom") of a given
//! block with probability `p = 2/(O+1)` under a uniformly random labelling,
//! so the number of blocks where they share an atom follows the binomial law
//! B(O², p). Working in the log domain:
//!
//! `ln P[k] = ln C(O², k) + k·ln 2 + (O² - k)·ln(O - 1) - O²·ln(O + 1)`
//!
//! [`RelCountLaw::continuous`] extends the same formula to real `k` through
//! the log-gamma function.

use std::cmp::Ordering;
use std::f64::consts::PI;

/// A log-probability that orders totally.
///
/// Keys are folded from sorted integer inputs, so equal inputs always give
/// bit-identical scores and `Eq` is exact equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score(pub f64);

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Sum `terms` left to right.
pub fn sequential_sum(terms: impl IntoIterator<Item = f64>) -> Score {
    Score(terms.into_iter().fold(0.0, |acc, term| acc + term))
}

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the gamma function for `x > 0` (Lanczos approximation).
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection: Γ(x)·Γ(1-x) = π / sin(πx)
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let t = x + LANCZOS_G + 0.5;
    let series = LANCZOS_COEFFICIENTS
        .iter()
        .enumerate()
        .skip(1)
        .fold(LANCZOS_COEFFICIENTS[0], |acc, (i, c)| acc + c / (x + i as f64));
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + series.ln()
}

/// Exact binomial coefficient.
pub const fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let mut result: u128 = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) as u128 / (i + 1) as u128;
        i += 1;
    }
    result as u64
}

/// The binomial law of relation counts for one order.
#[derive(Debug, Clone)]
pub struct RelCountLaw {
    n: f64,
    ln_2: f64,
    ln_o1_minus_1: f64,
    ln_o1_plus_1: f64,
    ln_pmf: Vec<f64>,
}

impl RelCountLaw {
    pub fn new(o1: usize) -> Self {
        let o2 = o1 * o1;
        let n = o2 as f64;
        let ln_2 = 2f64.ln();
        let ln_o1_minus_1 = ((o1 - 1) as f64).ln();
        let ln_o1_plus_1 = ((o1 + 1) as f64).ln();
        let ln_pmf = (0..=o2)
            .map(|k| {
                (choose(o2 as u64, k as u64) as f64).ln()
                    + k as f64 * ln_2
                    + (o2 - k) as f64 * ln_o1_minus_1
                    - n * ln_o1_plus_1
            })
            .collect();
        Self {
            n,
            ln_2,
            ln_o1_minus_1,
            ln_o1_plus_1,
            ln_pmf,
        }
    }

    /// ln P[count] for an integer relation count.
    #[inline]
    pub fn discrete(&self, count: usize) -> f64 {
        self.ln_pmf[count]
    }

    /// ln P[x] for a real relation count `0 <= x <= O²`.
    pub fn continuous(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, self.n);
        ln_gamma(self.n + 1.0) - ln_gamma(x + 1.0) - ln_gamma(self.n - x + 1.0)
            + x * self.ln_2
            + (self.n - x) * self.ln_o1_minus_1
            - self.n * self.ln_o1_plus_1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn test_ln_gamma_known_values() {
        assert!(close(ln_gamma(1.0), 0.0));
        assert!(close(ln_gamma(2.0), 0.0));
        assert!(close(ln_gamma(5.0), 24f64.ln()));
        assert!(close(ln_gamma(0.5), PI.sqrt().ln()));
        assert!(close(ln_gamma(65.0), (1..=64).map(|i| (i as f64).ln()).sum()));
    }

    #[test]
    fn test_choose() {
        assert_eq!(choose(4, 2), 6);
        assert_eq!(choose(9, 0), 1);
        assert_eq!(choose(9, 9), 1);
        assert_eq!(choose(3, 4), 0);
        assert_eq!(choose(64, 32), 1_832_624_140_942_590_534);
    }

    #[test]
    fn test_discrete_law_sums_to_one() {
        for o1 in 2..=8 {
            let law = RelCountLaw::new(o1);
            let total: f64 = (0..=o1 * o1).map(|k| law.discrete(k).exp()).sum();
            assert!(close(total, 1.0), "order {} sums to {}", o1, total);
        }
    }

    #[test]
    fn test_continuous_matches_discrete_at_integers() {
        let law = RelCountLaw::new(3);
        for k in 0..=9 {
            assert!(close(law.continuous(k as f64), law.discrete(k)));
        }
    }

    #[test]
    fn test_score_total_order() {
        assert!(Score(-1.0) < Score(0.0));
        assert_eq!(Score(0.5), Score(0.5));
        assert_eq!(
            sequential_sum([1.0, 2.0, 3.0]),
            sequential_sum(vec![1.0, 2.0, 3.0])
        );
    }
}
