// Integration tests for the wordle-guesser library
// These drive the public API the way the binary does

use std::io::Cursor;
use wordle_guesser::cli::CliPuzzle;
use wordle_guesser::wordbank::EMBEDDED_WORDBANK;
use wordle_guesser::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn fruit_bank() -> Vec<String> {
    words(&["apple", "grape", "stone", "crane", "plane"])
}

#[test]
fn test_initial_requirements_on_fruit_bank() {
    // every word is 5 letters with 2 vowels (a/e or o/e) and 3 consonants
    let kept = filter_by_initial_requirements(&fruit_bank(), &Alphabet::spanish(), 5, 2, 3);
    assert_eq!(kept, fruit_bank());

    let none = filter_by_initial_requirements(&fruit_bank(), &Alphabet::spanish(), 5, 3, 2);
    assert!(none.is_empty());
}

#[test]
fn test_refine_crane_with_a_reported_misplaced() {
    let attempt = GuessAttempt::new("crane", vec![false, false, false, true, true], vec!['a']).unwrap();
    // right positions keep stone/crane/plane, c and r remove crane,
    // stone lacks a, and plane repeats a at index 2 where crane failed with it
    assert!(refine(&fruit_bank(), &attempt).is_empty());
}

#[test]
fn test_refine_crane_with_real_feedback_for_plane() {
    let attempt = score_guess("crane", "plane").unwrap();
    let refined = refine(&fruit_bank(), &attempt);
    assert_eq!(refined, words(&["plane"]));
    assert!(!refined.contains(&"crane".to_string()));
}

#[test]
fn test_select_guess_between_plane_and_slate() {
    let candidates = words(&["plane", "slate"]);
    let first = select_guess(&candidates, &Alphabet::spanish(), 5).unwrap();
    for _ in 0..3 {
        assert_eq!(select_guess(&candidates, &Alphabet::spanish(), 5).unwrap(), first);
    }
    assert!(candidates.contains(&first));
    assert_eq!(first, "plane");
}

#[test]
fn test_refine_keeps_target_and_is_a_fixed_point() {
    let bank = fruit_bank();
    for guess in &bank {
        for target in &bank {
            let attempt = score_guess(guess, target).unwrap();
            let once = refine(&bank, &attempt);
            assert!(once.len() <= bank.len());
            assert!(once.contains(target), "{target} dropped after guessing {guess}");
            for word in &once {
                for (i, right) in attempt.positions().iter().enumerate() {
                    if *right {
                        assert_eq!(word.chars().nth(i), guess.chars().nth(i));
                    }
                }
            }
            assert_eq!(refine(&once, &attempt), once);
        }
    }
}

#[test]
fn test_local_game_solves_every_fruit_word() {
    let bank = fruit_bank();
    for target in &bank {
        let mut puzzle = LocalPuzzle::new(target, &Alphabet::spanish()).unwrap();
        let report = play(&bank, &Alphabet::spanish(), &mut puzzle, bank.len()).unwrap();
        assert!(report.solved, "failed to solve {target}");
        assert_eq!(report.last_guess(), Some(target.as_str()));
    }
}

#[test]
fn test_local_game_solves_embedded_bank_words() {
    let bank = load_wordbank_from_str(EMBEDDED_WORDBANK);
    for target in bank.iter().step_by(7) {
        let mut puzzle = LocalPuzzle::new(target, &Alphabet::spanish()).unwrap();
        let report = play(&bank, &Alphabet::spanish(), &mut puzzle, bank.len()).unwrap();
        assert!(report.solved, "failed to solve {target}");
        assert_eq!(report.last_guess(), Some(target.as_str()));
        // each distinct guess is played once
        let mut guesses = report.guesses.clone();
        guesses.sort();
        guesses.dedup();
        assert_eq!(guesses.len(), report.guesses.len());
    }
}

#[test]
fn test_interactive_game_from_reader() {
    // crane first, then plane once the feedback pins a/n/e
    let input = "5 2 3\nXXGGG\n\nGGGGG\n";
    let mut puzzle = CliPuzzle::new(Cursor::new(input));
    let report = play(&fruit_bank(), &Alphabet::spanish(), &mut puzzle, DEFAULT_MAX_ATTEMPTS).unwrap();
    assert!(report.solved);
    assert_eq!(report.guesses, words(&["crane", "plane"]));
}

#[test]
fn test_interactive_game_with_contradictory_feedback() {
    let input = "5 2 3\nxxxgg\na\n";
    let mut puzzle = CliPuzzle::new(Cursor::new(input));
    let result = play(&fruit_bank(), &Alphabet::spanish(), &mut puzzle, DEFAULT_MAX_ATTEMPTS);
    assert!(matches!(result, Err(SolverError::NoCandidatesRemaining)));
}

#[test]
fn test_interactive_game_input_runs_out() {
    // the misplaced-letter prompt after crane gets no answer
    let input = "5 2 3\nXXGGG\n";
    let mut puzzle = CliPuzzle::new(Cursor::new(input));
    let result = play(&fruit_bank(), &Alphabet::spanish(), &mut puzzle, DEFAULT_MAX_ATTEMPTS);
    assert!(matches!(result, Err(SolverError::Puzzle(_))));
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("wordle_guesser_integration_wordbank.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Apple grape stone").unwrap();
        writeln!(file, "crane plane").unwrap();
    }

    let bank = load_wordbank_from_file(&path).unwrap();
    assert_eq!(bank, fruit_bank());

    let mut puzzle = LocalPuzzle::new("stone", &Alphabet::spanish()).unwrap();
    let report = play(&bank, &Alphabet::spanish(), &mut puzzle, DEFAULT_MAX_ATTEMPTS).unwrap();
    assert!(report.solved);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_english_alphabet_game() {
    let bank = words(&["crane", "slate", "shale", "stale", "whale"]);
    let mut puzzle = LocalPuzzle::new("whale", &Alphabet::english()).unwrap();
    let report = play(&bank, &Alphabet::english(), &mut puzzle, DEFAULT_MAX_ATTEMPTS).unwrap();
    assert!(report.solved);
    assert_eq!(report.last_guess(), Some("whale"));
}
