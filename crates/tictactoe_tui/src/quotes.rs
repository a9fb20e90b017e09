//! Celebratory quotes for the end-of-game overlay.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Quotes shown when a game ends, win or draw.
pub const QUOTES: [&str; 15] = [
    "Excellent strategy!",
    "You're a natural-born winner!",
    "That was pure genius!",
    "Masterful play!",
    "You've got the winning touch!",
    "Incredible move!",
    "You're unstoppable!",
    "Flawless victory!",
    "Game-changing play!",
    "You're a tic-tac-toe champion!",
    "Brilliant execution!",
    "That's how it's done!",
    "You're on fire today!",
    "Legendary move!",
    "You've outplayed everyone!",
];

/// Picks a uniformly random quote.
pub fn random_quote<R: Rng>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_quote_comes_from_the_list() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(QUOTES.contains(&random_quote(&mut rng)));
        }
    }
}
