//! Property-based tests for scoring, keyboard aggregation and the session.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use wordle_game::core::{KeyboardState, LetterClassification, Score, WORD_LEN, Word};
use wordle_game::game::{GameConfig, GameSession, InputEvent, MAX_ATTEMPTS, Phase};
use wordle_game::wordlists::Dictionary;

/// A small alphabet makes duplicate letters common
const LETTERS: &[u8] = b"ABCDE";

prop_compose! {
    fn arbitrary_word()(letters in prop::array::uniform5(prop::sample::select(LETTERS))) -> Word {
        Word::from_letters(letters).unwrap()
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Input(InputEvent),
    Tick(f32),
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => prop::sample::select(LETTERS).prop_map(|b| Step::Input(InputEvent::Letter(char::from(b)))),
        1 => Just(Step::Input(InputEvent::Backspace)),
        2 => Just(Step::Input(InputEvent::Submit)),
        2 => (0.0f32..2.0).prop_map(Step::Tick),
    ]
}

fn count_exact(guess: &Word, target: &Word) -> usize {
    guess
        .letters()
        .iter()
        .zip(target.letters())
        .filter(|(g, t)| g == t)
        .count()
}

fn rank(class: Option<LetterClassification>) -> u8 {
    match class {
        None => 0,
        Some(LetterClassification::Absent) => 1,
        Some(LetterClassification::Present) => 2,
        Some(LetterClassification::Correct) => 3,
    }
}

proptest! {
    #[test]
    fn correct_count_matches_exact_positions(guess in arbitrary_word(), target in arbitrary_word()) {
        let score = Score::calculate(&guess, &target);
        prop_assert_eq!(score.count_correct(), count_exact(&guess, &target));
    }

    #[test]
    fn letters_are_never_overcounted(guess in arbitrary_word(), target in arbitrary_word()) {
        let score = Score::calculate(&guess, &target);

        for &letter in LETTERS {
            let hits = (0..WORD_LEN)
                .filter(|&i| guess.letter_at(i) == letter && score.at(i) != LetterClassification::Absent)
                .count();
            prop_assert!(hits <= target.count_of(letter));
            prop_assert_eq!(hits, guess.count_of(letter).min(target.count_of(letter)));
        }
    }

    #[test]
    fn correct_only_on_exact_positions(guess in arbitrary_word(), target in arbitrary_word()) {
        let score = Score::calculate(&guess, &target);
        for i in 0..WORD_LEN {
            let exact = guess.letter_at(i) == target.letter_at(i);
            prop_assert_eq!(score.at(i) == LetterClassification::Correct, exact);
        }
    }

    #[test]
    fn perfect_iff_equal(guess in arbitrary_word(), target in arbitrary_word()) {
        let score = Score::calculate(&guess, &target);
        prop_assert_eq!(score.is_perfect(), guess == target);
    }

    #[test]
    fn aggregation_is_idempotent(guess in arbitrary_word(), target in arbitrary_word()) {
        let score = Score::calculate(&guess, &target);

        let mut once = KeyboardState::new();
        once.update(&guess, &score);
        let mut twice = once;
        twice.update(&guess, &score);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn aggregation_is_monotonic(
        target in arbitrary_word(),
        guesses in prop::collection::vec(arbitrary_word(), 1..=MAX_ATTEMPTS),
    ) {
        let mut keyboard = KeyboardState::new();
        for guess in &guesses {
            let before = keyboard;
            keyboard.update(guess, &Score::calculate(guess, &target));

            for (letter, class) in keyboard.iter() {
                prop_assert!(rank(class) >= rank(before.get(letter)));
            }
        }
    }

    #[test]
    fn session_invariants_hold(
        target in arbitrary_word(),
        steps in prop::collection::vec(arbitrary_step(), 0..200),
    ) {
        let dictionary = Dictionary::new([target.clone()]).unwrap();
        let config = GameConfig { dictionary_check: false, ..GameConfig::default() };
        let mut session = GameSession::with_target(&dictionary, config, target);

        let mut previous_attempts = 0;
        for step in steps {
            let was_terminal = session.phase().is_terminal();
            match step {
                Step::Input(event) => { session.handle_event(event); }
                Step::Tick(elapsed) => { session.tick(elapsed); }
            }

            prop_assert!(session.attempts().len() <= MAX_ATTEMPTS);
            prop_assert!(session.current_guess().len() <= WORD_LEN);
            prop_assert!(session.attempts().len() >= previous_attempts);
            if was_terminal {
                prop_assert!(session.phase().is_terminal());
                prop_assert_eq!(session.attempts().len(), previous_attempts);
            }
            if session.attempts().len() > previous_attempts {
                prop_assert!(session.current_guess().is_empty());
            }
            if session.phase() == Phase::Lost {
                prop_assert_eq!(session.attempts().len(), MAX_ATTEMPTS);
            }

            let progress = session.snapshot().progress;
            prop_assert!((0.0..=1.0).contains(&progress));
            previous_attempts = session.attempts().len();
        }
    }

    #[test]
    fn short_submit_is_noop(target in arbitrary_word(), typed in 0..WORD_LEN) {
        let dictionary = Dictionary::new([target.clone()]).unwrap();
        let mut session = GameSession::with_target(&dictionary, GameConfig::default(), target);

        for _ in 0..typed {
            session.handle_event(InputEvent::Letter('A'));
        }
        prop_assert!(!session.handle_event(InputEvent::Submit));
        prop_assert_eq!(session.phase(), Phase::Playing);
        prop_assert_eq!(session.current_guess().len(), typed);
    }
}
