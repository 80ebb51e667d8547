//! The "Guess the Fourth Word" session: challenge selection, guess
//! checking, and score bookkeeping.

use rand::Rng;

use crate::error::GameError;
use crate::query;
use crate::store::Store;

/// A definition must have more words than this to be maskable.
const MIN_DEFINITION_WORDS: usize = 4;
/// The definition token that gets masked, zero-indexed.
const MASKED_TOKEN_INDEX: usize = 3;

pub const DEFAULT_POINTS_PER_CORRECT: u32 = 10;

/// One round's puzzle: a word, its definition with the fourth token
/// replaced by an underscore run, and the token that was hidden.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub word: String,
    pub masked_tokens: Vec<String>,
    pub answer: String,
    pub answer_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active,
    Ended,
}

/// Process-lifetime game state.
///
/// `round_score` resets on every [`GameSession::start`]; `high_score` is the
/// high-water mark across all rounds of the session and is never reset.
#[derive(Debug)]
pub struct GameSession {
    state: SessionState,
    round_score: u32,
    high_score: u32,
    points_per_correct: u32,
}

impl GameSession {
    pub fn new(points_per_correct: u32) -> Self {
        Self {
            state: SessionState::Ended,
            round_score: 0,
            high_score: 0,
            points_per_correct,
        }
    }

    /// Begin a fresh round. The running high score carries over.
    pub fn start(&mut self) {
        self.state = SessionState::Active;
        self.round_score = 0;
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Pick a random qualifying entry and mask the fourth word of its
    /// definition.
    ///
    /// Instead of resampling until something fits, the qualifying entries
    /// are collected up front so an empty store or a store with only short
    /// definitions fails fast with a [`GameError`].
    pub fn pick_challenge(
        &self,
        store: &Store,
        rng: &mut impl Rng,
    ) -> Result<Challenge, GameError> {
        if !self.is_active() {
            return Err(GameError::NotActive);
        }
        if store.is_empty() {
            return Err(GameError::EmptyStore);
        }

        let qualifying: Vec<_> = store
            .entries()
            .iter()
            .filter(|entry| query::word_count(entry.definition()) > MIN_DEFINITION_WORDS)
            .collect();
        if qualifying.is_empty() {
            return Err(GameError::NoQualifyingEntry);
        }

        let entry = qualifying[rng.gen_range(0..qualifying.len())];
        let mut tokens: Vec<String> = query::tokenize(entry.definition())
            .into_iter()
            .map(str::to_string)
            .collect();
        let mask = "_".repeat(tokens[MASKED_TOKEN_INDEX].len());
        let answer = std::mem::replace(&mut tokens[MASKED_TOKEN_INDEX], mask);

        Ok(Challenge {
            word: entry.name().to_string(),
            masked_tokens: tokens,
            answer,
            answer_index: MASKED_TOKEN_INDEX,
        })
    }

    /// Check a guess against the challenge's hidden token, exact and
    /// case-sensitive.
    ///
    /// A correct guess scores and keeps the round alive; an incorrect one
    /// ends it, after which only [`GameSession::start`] revives the session.
    pub fn submit_guess(
        &mut self,
        challenge: &Challenge,
        guess: &str,
    ) -> Result<Outcome, GameError> {
        if !self.is_active() {
            return Err(GameError::NotActive);
        }
        if guess == challenge.answer {
            self.round_score += self.points_per_correct;
            if self.round_score > self.high_score {
                self.high_score = self.round_score;
            }
            Ok(Outcome::Correct)
        } else {
            self.state = SessionState::Ended;
            Ok(Outcome::Incorrect)
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_POINTS_PER_CORRECT)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn store_with(blocks: &str) -> Store {
        let mut store = Store::new();
        store.load_from_reader(blocks.as_bytes()).unwrap();
        store
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn challenge_masks_the_fourth_token() {
        let store = store_with(
            "Type: n\nDefinition: a small domesticated carnivorous feline mammal\nWord: cat\n",
        );
        let mut session = GameSession::default();
        session.start();

        let challenge = session.pick_challenge(&store, &mut rng()).unwrap();
        assert_eq!(challenge.word, "cat");
        assert_eq!(challenge.answer, "carnivorous");
        assert_eq!(challenge.answer_index, 3);
        assert_eq!(
            challenge.masked_tokens,
            vec!["a", "small", "domesticated", "___________", "feline", "mammal"]
        );
    }

    #[test]
    fn empty_store_fails_fast() {
        let store = Store::new();
        let mut session = GameSession::default();
        session.start();
        assert!(matches!(
            session.pick_challenge(&store, &mut rng()),
            Err(GameError::EmptyStore)
        ));
    }

    #[test]
    fn short_definitions_never_qualify() {
        let store = store_with("Type: n\nDefinition: four words exactly here\nWord: terse\n");
        let mut session = GameSession::default();
        session.start();
        assert!(matches!(
            session.pick_challenge(&store, &mut rng()),
            Err(GameError::NoQualifyingEntry)
        ));
    }

    #[test]
    fn correct_guesses_accumulate_and_raise_the_high_score() {
        let store = store_with(
            "Type: n\nDefinition: a small domesticated carnivorous feline mammal\nWord: cat\n",
        );
        let mut session = GameSession::default();
        session.start();
        let mut rng = rng();

        let challenge = session.pick_challenge(&store, &mut rng).unwrap();
        assert_eq!(
            session.submit_guess(&challenge, "carnivorous").unwrap(),
            Outcome::Correct
        );
        assert_eq!(session.round_score(), 10);
        assert_eq!(session.high_score(), 10);

        let challenge = session.pick_challenge(&store, &mut rng).unwrap();
        session.submit_guess(&challenge, "carnivorous").unwrap();
        assert_eq!(session.round_score(), 20);
        assert_eq!(session.high_score(), 20);
    }

    #[test]
    fn incorrect_guess_ends_the_round_but_keeps_the_high_score() {
        let store = store_with(
            "Type: n\nDefinition: a small domesticated carnivorous feline mammal\nWord: cat\n",
        );
        let mut session = GameSession::default();
        session.start();
        let mut rng = rng();

        let challenge = session.pick_challenge(&store, &mut rng).unwrap();
        session.submit_guess(&challenge, "carnivorous").unwrap();

        let challenge = session.pick_challenge(&store, &mut rng).unwrap();
        assert_eq!(
            session.submit_guess(&challenge, "CARNIVOROUS").unwrap(),
            Outcome::Incorrect
        );
        assert!(!session.is_active());
        assert_eq!(session.round_score(), 10);
        assert_eq!(session.high_score(), 10);

        // Ended sessions reject further play until start() is called.
        assert!(matches!(
            session.submit_guess(&challenge, "carnivorous"),
            Err(GameError::NotActive)
        ));
        assert!(matches!(
            session.pick_challenge(&store, &mut rng),
            Err(GameError::NotActive)
        ));

        // A new round resets the score, not the high-water mark.
        session.start();
        assert_eq!(session.round_score(), 0);
        assert_eq!(session.high_score(), 10);
    }
}
