//! Round lifecycle tests: pool loading, round start, and submission flow.

use word_scramble::core::{RoundRng, RoundRules};
use word_scramble::dictionary::WordList;
use word_scramble::rules::{Rejection, Round, SubmitResult};
use word_scramble::words::{RootWordPool, DEFAULT_ROOT_WORD};

fn english(words: &[&str]) -> WordList {
    WordList::from_words("en", words.iter().copied())
}

// =============================================================================
// Banana Scenarios
// =============================================================================

#[test]
fn test_banana_accept_then_reuse() {
    let pool = RootWordPool::from_words(["banana"]).unwrap();
    let mut rng = RoundRng::new(42);
    let dictionary = english(&["ban"]);

    let mut round = Round::start(&pool, &mut rng, RoundRules::default());
    assert_eq!(round.root_word(), "banana");

    assert_eq!(round.submit("ban", &dictionary), SubmitResult::Accepted);
    assert_eq!(round.used_words().collect::<Vec<_>>(), vec!["ban"]);

    assert_eq!(round.submit("ban", &dictionary), SubmitResult::Rejected(Rejection::AlreadyUsed));
    assert_eq!(round.used_word_count(), 1);
}

#[test]
fn test_banana_not_possible() {
    let mut round = Round::with_root_word("banana", RoundRules::default());
    let dictionary = english(&["xyz"]);

    let result = round.submit("xyz", &dictionary);

    assert_eq!(
        result,
        SubmitResult::Rejected(Rejection::NotPossible { root_word: "banana".to_string() })
    );
    assert_eq!(round.used_word_count(), 0);
}

#[test]
fn test_banana_not_recognized() {
    let mut round = Round::with_root_word("banana", RoundRules::default());
    let dictionary = english(&["ban"]);

    assert_eq!(round.submit("nnaa", &dictionary), SubmitResult::Rejected(Rejection::NotRecognized));
    assert_eq!(round.used_word_count(), 0);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_missing_word_file_plays_silkworm() {
    let pool = RootWordPool::load("/no/such/dir/start.txt");
    let mut rng = RoundRng::new(1);
    let dictionary = english(&["silk", "worm", "milk"]);

    let mut round = Round::start(&pool, &mut rng, RoundRules::default());
    assert_eq!(round.root_word(), DEFAULT_ROOT_WORD);

    assert!(round.submit("Silk", &dictionary).is_accepted());
    assert!(round.submit("worm", &dictionary).is_accepted());
    assert!(round.submit("milk", &dictionary).is_accepted());

    assert_eq!(round.used_words().collect::<Vec<_>>(), vec!["milk", "worm", "Silk"]);
}

#[test]
fn test_padded_pool_entry_has_no_spaces_to_spell_with() {
    let pool = RootWordPool::from_words([" banana "]).unwrap();
    let mut rng = RoundRng::new(11);
    let anything = |_: &str, _: &str| true;

    let mut round = Round::start(&pool, &mut rng, RoundRules::default());
    assert_eq!(round.root_word(), "banana");

    assert!(matches!(
        round.submit(" ", &anything).rejection(),
        Some(Rejection::NotPossible { .. })
    ));
    assert_eq!(round.used_word_count(), 0);
}

#[test]
fn test_new_round_clears_answers() {
    let pool = RootWordPool::from_words(["silkworm", "banana", "alphabet"]).unwrap();
    let mut rng = RoundRng::new(5);
    let anything = |_: &str, _: &str| true;

    let mut round = Round::start(&pool, &mut rng, RoundRules::default());
    let root = round.root_word().to_string();
    assert!(round.submit(&root, &anything).is_accepted());

    for _ in 0..10 {
        round.start_game(&pool, &mut rng);
        assert_eq!(round.used_word_count(), 0);
        assert!(pool.contains(round.root_word()));
    }
}

#[test]
fn test_same_seed_same_roots() {
    let pool = RootWordPool::from_text("silkworm\nbanana\nalphabet\nhedgehog\nmagnolia\n").unwrap();

    let roots = |seed| {
        let mut rng = RoundRng::new(seed);
        let mut round = Round::start(&pool, &mut rng, RoundRules::default());
        let mut seen = vec![round.root_word().to_string()];
        for _ in 0..8 {
            round.start_game(&pool, &mut rng);
            seen.push(round.root_word().to_string());
        }
        seen
    };

    assert_eq!(roots(77), roots(77));
}

#[test]
fn test_rng_restore_replays_next_root() {
    let pool = RootWordPool::from_text("silkworm\nbanana\nalphabet\nhedgehog\nmagnolia\n").unwrap();
    let mut rng = RoundRng::new(3);
    let mut round = Round::start(&pool, &mut rng, RoundRules::default());

    let saved = rng.state();
    round.start_game(&pool, &mut rng);
    let expected = round.root_word().to_string();

    let mut restored = RoundRng::from_state(&saved);
    round.start_game(&pool, &mut restored);
    assert_eq!(round.root_word(), expected);
}

#[test]
fn test_display_cased_root_word() {
    let mut round = Round::with_root_word("SilkWorm", RoundRules::default());
    let dictionary = english(&["silk"]);

    assert_eq!(round.root_word(), "SilkWorm");
    assert!(round.submit("SILK", &dictionary).is_accepted());

    let result = round.submit("silky", &dictionary);
    assert_eq!(
        result.rejection().map(Rejection::message),
        Some("You can't spell that word from silkworm".to_string())
    );
}

// =============================================================================
// Opt-in Rules
// =============================================================================

#[test]
fn test_strict_rules_order() {
    let rules = RoundRules::new().with_min_word_length(3).reject_root_word();
    let mut round = Round::with_root_word("banana", rules);
    let dictionary = english(&["banana", "an", "nab"]);

    // Possibility still comes first.
    assert!(matches!(
        round.submit("z", &dictionary).rejection(),
        Some(Rejection::NotPossible { .. })
    ));

    assert_eq!(round.submit("banana", &dictionary), SubmitResult::Rejected(Rejection::IsRootWord));
    assert_eq!(round.submit("an", &dictionary), SubmitResult::Rejected(Rejection::TooShort { min: 3 }));
    assert_eq!(round.submit("nba", &dictionary), SubmitResult::Rejected(Rejection::NotRecognized));
    assert_eq!(round.submit("nab", &dictionary), SubmitResult::Accepted);
    assert_eq!(round.submit("NAB", &dictionary), SubmitResult::Rejected(Rejection::AlreadyUsed));
}
