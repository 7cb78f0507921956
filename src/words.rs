//! Per-difficulty word pools and the random non-repeating draw used during a round.

use indexmap::IndexSet;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::AppConfig;

/// Word-pool difficulty tier selected at room creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Everyday vocabulary.
    Easy,
    /// Less common words.
    Medium,
    /// Abstract and rarely used words.
    Hard,
}

/// Immutable per-difficulty word sets injected into the application state.
///
/// Pools are fixed for the process lifetime; per-round repeat avoidance is the
/// caller's job via the `excluding` set passed to [`WordPools::draw`].
#[derive(Debug, Clone)]
pub struct WordPools {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl WordPools {
    /// Build pools from explicit word lists. Intended for test fixtures with
    /// controlled pools.
    pub fn new(easy: Vec<String>, medium: Vec<String>, hard: Vec<String>) -> Self {
        Self { easy, medium, hard }
    }

    /// Build pools from configuration, falling back to the built-in lists for
    /// any tier the config does not override.
    pub fn from_config(config: &AppConfig) -> Self {
        let overrides = config.word_lists();
        Self {
            easy: overrides
                .and_then(|lists| lists.easy.clone())
                .unwrap_or_else(|| builtin(BUILTIN_EASY)),
            medium: overrides
                .and_then(|lists| lists.medium.clone())
                .unwrap_or_else(|| builtin(BUILTIN_MEDIUM)),
            hard: overrides
                .and_then(|lists| lists.hard.clone())
                .unwrap_or_else(|| builtin(BUILTIN_HARD)),
        }
    }

    /// Draw a uniformly random word of the given difficulty that is not in
    /// `excluding`. Returns `None` once every word of the tier is excluded;
    /// the caller is expected to clear its exclusion set and redraw.
    pub fn draw(&self, difficulty: Difficulty, excluding: &IndexSet<String>) -> Option<&str> {
        let candidates: Vec<&String> = self
            .pool(difficulty)
            .iter()
            .filter(|word| !excluding.contains(word.as_str()))
            .collect();

        candidates
            .choose(&mut rand::rng())
            .map(|word| word.as_str())
    }

    /// Number of words available for a difficulty tier.
    pub fn len(&self, difficulty: Difficulty) -> usize {
        self.pool(difficulty).len()
    }

    /// True when a difficulty tier has no words at all.
    pub fn is_empty(&self, difficulty: Difficulty) -> bool {
        self.pool(difficulty).is_empty()
    }

    fn pool(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

impl Default for WordPools {
    fn default() -> Self {
        Self {
            easy: builtin(BUILTIN_EASY),
            medium: builtin(BUILTIN_MEDIUM),
            hard: builtin(BUILTIN_HARD),
        }
    }
}

fn builtin(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

/// Built-in easy pool shipped with the binary.
const BUILTIN_EASY: &[&str] = &[
    "apple", "house", "dog", "cat", "sun", "book", "chair", "ball", "fish", "tree", "car", "milk",
    "shoe", "door", "bird", "rain", "bread", "clock", "moon", "hand", "river", "smile", "pizza",
    "beach", "snow", "train", "cake", "horse", "phone", "garden", "window", "doctor", "school",
    "music", "candle", "ladder",
];

/// Built-in medium pool shipped with the binary.
const BUILTIN_MEDIUM: &[&str] = &[
    "avalanche",
    "bargain",
    "compass",
    "democracy",
    "eclipse",
    "festival",
    "gravity",
    "harvest",
    "illusion",
    "jealousy",
    "karaoke",
    "labyrinth",
    "marathon",
    "nostalgia",
    "orchestra",
    "parachute",
    "quarantine",
    "rebellion",
    "sabotage",
    "telescope",
    "umbrella",
    "vaccine",
    "warehouse",
    "xylophone",
    "yearbook",
    "zeppelin",
    "ambush",
    "blueprint",
    "curfew",
    "detour",
    "embargo",
    "fortress",
    "glacier",
    "hammock",
    "insomnia",
    "jackpot",
];

/// Built-in hard pool shipped with the binary.
const BUILTIN_HARD: &[&str] = &[
    "ambivalence",
    "bureaucracy",
    "catharsis",
    "dichotomy",
    "entropy",
    "fortuity",
    "hyperbole",
    "idiosyncrasy",
    "juxtaposition",
    "kleptomania",
    "liability",
    "metamorphosis",
    "nonchalance",
    "obsolescence",
    "paradigm",
    "quintessence",
    "resilience",
    "serendipity",
    "tenacity",
    "ubiquity",
    "vicarious",
    "wanderlust",
    "xenophobia",
    "yearning",
    "zeitgeist",
    "alliteration",
    "benevolence",
    "conundrum",
    "deterrence",
    "filibuster",
    "gravitas",
    "hindsight",
    "innuendo",
    "jurisprudence",
];
