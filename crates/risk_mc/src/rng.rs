//! Seeded random source with per-path sub-streams.
//!
//! The simulator owns its random state explicitly; there is no process
//! global. Reproducibility under parallel execution comes from sub-stream
//! derivation: each simulation path consumes a generator seeded from the
//! master seed and the path index, so the draws a path sees never depend
//! on scheduling or worker count.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Deterministic random source for Monte Carlo simulation.
///
/// Wraps a seeded [`StdRng`] and records the seed for reproducibility
/// tracking. Sub-streams for individual paths are derived with
/// [`RiskRng::substream`].
///
/// # Examples
///
/// ```rust
/// use risk_mc::rng::RiskRng;
///
/// let mut a = RiskRng::from_seed(42);
/// let mut b = RiskRng::from_seed(42);
/// assert_eq!(a.standard_normal(), b.standard_normal());
///
/// // Sub-streams are themselves deterministic...
/// let mut s1 = a.substream(3);
/// let mut s2 = b.substream(3);
/// assert_eq!(s1.standard_normal(), s2.standard_normal());
/// ```
pub struct RiskRng {
    /// The underlying generator.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl RiskRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derives an independent sub-stream generator for one simulation
    /// path.
    ///
    /// The sub-stream seed mixes the master seed with the path index
    /// through the SplitMix64 finaliser (Steele, Lea & Flood 2014), so
    /// adjacent indices land on well-separated seeds. Derivation reads
    /// only the stored master seed, never the generator state: deriving
    /// sub-streams in any order, from any thread, yields the same
    /// per-path sequences.
    #[inline]
    pub fn substream(&self, index: u64) -> RiskRng {
        RiskRng::from_seed(substream_seed(self.seed, index))
    }

    /// Draws a single standard normal variate (mean 0, std 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Draws a normal variate with the given mean and standard deviation.
    #[inline]
    pub fn normal(&mut self, mean: f64, std: f64) -> f64 {
        mean + std * self.standard_normal()
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller.
    #[inline]
    pub fn fill_standard_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

/// SplitMix64 finaliser over (master seed, path index).
fn substream_seed(master: u64, index: u64) -> u64 {
    let mut z = master.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
