use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParsePieceSeedError, PieceKind};

/// Seed for deterministic piece generation.
///
/// A 128-bit seed, written as 32 hexadecimal digits. Two generators built from the
/// same seed yield the same piece sequence, which makes matches reproducible.
///
/// # Example
///
/// ```
/// use tetrabot_engine::PieceSeed;
/// use rand::Rng as _;
///
/// let seed: PieceSeed = rand::rng().random();
/// let parsed: PieceSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(n.to_be_bytes())
    }

    #[must_use]
    pub const fn as_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.as_u128())
    }
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParsePieceSeedError::InvalidLength(s.len()));
        }
        // `from_str_radix` alone would accept a leading `+`
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParsePieceSeedError::InvalidDigit);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParsePieceSeedError::InvalidDigit)?;
        Ok(Self::from_u128(num))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

/// Uniform random source of piece kinds owned by a single match.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    seed: PieceSeed,
    rng: Pcg32,
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceGenerator {
    /// Creates a generator with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Returns the seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }

    /// Draws the next kind, each of the seven with equal probability.
    pub fn next_kind(&mut self) -> PieceKind {
        self.rng.random()
    }
}
