// src/generators/password.rs
use chrono::Utc;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use uuid::Uuid;

use crate::charset::Alphabet;
use crate::models::{GeneratedPassword, GenerationConfig};
use crate::utils::mask_secret;

/// Draws passwords from an [`Alphabet`] under the constraints of a
/// [`GenerationConfig`].
///
/// [`PasswordGenerator::new`] uses the operating system's CSPRNG.
/// [`PasswordGenerator::seeded`] is the explicit opt-in for a weaker,
/// deterministic source when output has to be reproducible.
pub struct PasswordGenerator<R: Rng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator<ChaCha20Rng> {
    /// Deterministic generator for reproducible runs. Passwords meant to
    /// be kept should come from [`PasswordGenerator::new`] instead.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Generate a single password of `config.length` characters.
    ///
    /// An empty alphabet yields an empty string. With `must_include_each`
    /// the result carries at least one character from every enabled class
    /// that survived the exclusion rules, provided the length allows it;
    /// when more classes are enabled than the length can hold, the excess
    /// required characters are dropped.
    pub fn generate_one(&mut self, alphabet: &Alphabet, config: &GenerationConfig) -> String {
        if alphabet.is_empty() {
            return String::new();
        }

        let candidates = alphabet.chars();
        let dist = Uniform::from(0..candidates.len());

        if config.must_include_each {
            // One seed character per enabled class, drawn from the filtered
            // alphabet so exclusion rules hold for seeds too. A class the
            // exclusions emptied out contributes nothing.
            let mut pool: Vec<char> = Vec::with_capacity(config.length);
            for class in config.enabled_classes() {
                let members: Vec<char> = candidates
                    .iter()
                    .copied()
                    .filter(|c| class.contains(*c))
                    .collect();
                match members.choose(&mut self.rng) {
                    Some(c) => pool.push(*c),
                    None => log::debug!("{class:?} fully excluded, skipping its seed"),
                }
            }

            // More enabled classes than room: drop the excess seeds.
            pool.truncate(config.length);

            while pool.len() < config.length {
                pool.push(candidates[dist.sample(&mut self.rng)]);
            }

            pool.shuffle(&mut self.rng);
            pool.into_iter().collect()
        } else {
            (0..config.length)
                .map(|_| candidates[dist.sample(&mut self.rng)])
                .collect()
        }
    }

    /// Generate `config.quantity` passwords in order, each stamped with a
    /// fresh id and creation time. Empty results are skipped rather than
    /// padded with placeholders, so the batch may come up short.
    pub fn generate_batch(
        &mut self,
        alphabet: &Alphabet,
        config: &GenerationConfig,
    ) -> Vec<GeneratedPassword> {
        let mut batch = Vec::with_capacity(config.quantity);

        for _ in 0..config.quantity {
            let value = self.generate_one(alphabet, config);
            if value.is_empty() {
                continue;
            }
            log::debug!("generated {}", mask_secret(&value));
            batch.push(GeneratedPassword {
                id: Uuid::new_v4(),
                value,
                created_at: Utc::now(),
            });
        }

        if batch.len() < config.quantity {
            log::warn!(
                "produced {} of {} requested passwords",
                batch.len(),
                config.quantity
            );
        }

        batch
    }
}
