use super::*;

#[test]
fn test_lowercases_and_strips_punctuation() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer
        .tokenize("Hello, World! STRESSED???")
        .expect("tokenize is total");
    assert_eq!(tokens, vec!["hello", "world", "stressed"]);
}

#[test]
fn test_drops_short_tokens() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer
        .tokenize("I am so ok but not day two")
        .expect("tokenize is total");
    // "I", "am", "so", "ok", "but" has 3 chars, "not" has 3, "day" 3, "two" 3
    assert_eq!(tokens, vec!["but", "not", "day", "two"]);
}

#[test]
fn test_apostrophe_splits_contractions() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer.tokenize("can't don't").expect("tokenize is total");
    // "can't" -> "can" + "t"; the single char is dropped
    assert_eq!(tokens, vec!["can", "don"]);
}

#[test]
fn test_digits_kept() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer.tokenize("call 911 now 12345").expect("tokenize is total");
    assert_eq!(tokens, vec!["call", "911", "now", "12345"]);
}

#[test]
fn test_empty_and_whitespace_input() {
    let tokenizer = WordTokenizer::new();
    assert!(tokenizer.tokenize("").expect("tokenize is total").is_empty());
    assert!(tokenizer
        .tokenize("  \t\n  ")
        .expect("tokenize is total")
        .is_empty());
    assert!(tokenizer
        .tokenize("!!! ?? ..")
        .expect("tokenize is total")
        .is_empty());
}

#[test]
fn test_collapses_whitespace_runs() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer
        .tokenize("calm   --   relaxed")
        .expect("tokenize is total");
    assert_eq!(tokens, vec!["calm", "relaxed"]);
}

#[test]
fn test_unicode_letters_kept() {
    let tokenizer = WordTokenizer::new();
    let tokens = tokenizer.tokenize("café estrés").expect("tokenize is total");
    assert_eq!(tokens, vec!["café", "estrés"]);
}

#[test]
fn test_deterministic() {
    let tokenizer = WordTokenizer::new();
    let a = tokenizer
        .tokenize("Deadline pressure, worry & panic")
        .expect("tokenize is total");
    let b = tokenizer
        .tokenize("Deadline pressure, worry & panic")
        .expect("tokenize is total");
    assert_eq!(a, b);
}
