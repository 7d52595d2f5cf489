use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source driving sampling, shuffles, coin flips and session stamps.
///
/// Owned by the caller and passed down explicitly; a fixed seed reproduces a
/// whole session.
pub type QuizRng = ChaCha8Rng;

#[must_use]
pub fn seeded(seed: u64) -> QuizRng {
    QuizRng::seed_from_u64(seed)
}

/// Non-deterministic generator seeded from the thread-local RNG.
#[must_use]
pub fn from_entropy() -> QuizRng {
    QuizRng::from_rng(&mut rand::rng())
}
