//! Edge case tests: degenerate inputs must not panic.

use std::io::Write;
use tempfile::NamedTempFile;
use textscore::analyzer::Tokenizer;
use textscore::corpus::load_document;
use textscore::{compute, Document, Lexicon, MetricsRecord};

fn lexicon() -> Lexicon {
    Lexicon::from_words(["good", "gain"], ["bad", "loss"], ["the", "a", "of"])
}

fn assert_all_zero(record: &MetricsRecord) {
    assert_eq!(record.positive_score, 0);
    assert_eq!(record.negative_score, 0);
    assert_eq!(record.polarity_score, 0.0);
    assert_eq!(record.subjectivity_score, 0.0);
    assert_eq!(record.avg_sentence_length, 0.0);
    assert_eq!(record.pct_complex_words, 0.0);
    assert_eq!(record.fog_index, 0.0);
    assert_eq!(record.avg_words_per_sentence, 0.0);
    assert_eq!(record.complex_word_count, 0);
    assert_eq!(record.word_count, 0);
    assert_eq!(record.syllables_per_word, 0.0);
    assert_eq!(record.personal_pronoun_count, 0);
    assert_eq!(record.avg_word_length, 0.0);
}

#[test]
fn empty_text_scores_zero() {
    let lex = lexicon();
    let record = compute(&Document::new("empty", ""), &lex);
    assert_all_zero(&record);
    assert_eq!(Tokenizer::new(&lex).clean("").sentence_count(), 1);
}

#[test]
fn punctuation_only_scores_zero() {
    let lex = lexicon();
    let record = compute(&Document::new("p", "... !!! ??? --- ,,,"), &lex);
    assert_all_zero(&record);
    assert_eq!(Tokenizer::new(&lex).clean("...!?").sentence_count(), 1);
}

#[test]
fn numbers_only_have_no_words() {
    let lex = lexicon();
    let record = compute(&Document::new("n", "2023. 4.5% 1,000,000!"), &lex);
    assert_eq!(record.word_count, 0);
    assert_eq!(record.fog_index, 0.0);
}

#[test]
fn stopwords_only_keeps_readability() {
    let lex = lexicon();
    let record = compute(&Document::new("s", "The a of. The."), &lex);
    assert_eq!(record.word_count, 4);
    assert_eq!(record.subjectivity_score, 0.0);
    assert_eq!(record.syllables_per_word, 0.0);
    assert!((record.avg_sentence_length - 2.0).abs() < 1e-9);
}

#[test]
fn text_without_terminator_is_one_sentence() {
    let lex = lexicon();
    let record = compute(&Document::new("t", "a good gain without any ending"), &lex);
    assert_eq!(record.word_count, 6);
    assert!((record.avg_sentence_length - 6.0).abs() < 1e-9);
}

#[test]
fn unicode_and_mixed_scripts_no_panic() {
    let lex = lexicon();
    let record = compute(
        &Document::new("u", "Café naïve résumé - 東京 growth… ¿Qué? Ünïcödé!"),
        &lex,
    );
    assert!(record.word_count > 0);
    assert!(record.polarity_score.is_finite());
    assert!(record.fog_index.is_finite());
}

#[test]
fn very_long_word_no_panic() {
    let lex = lexicon();
    let word = "a".repeat(10_000) + &"b".repeat(10_000);
    let record = compute(&Document::new("long", word), &lex);
    assert_eq!(record.word_count, 1);
    assert_eq!(record.complex_word_count, 0);
}

#[test]
fn all_caps_pronouns() {
    let lex = lexicon();
    let record = compute(&Document::new("c", "WE SAID MY PLAN. I AGREE. US TRADE."), &lex);
    // WE, MY, I count; the standalone US does not
    assert_eq!(record.personal_pronoun_count, 3);
}

#[test]
fn empty_article_file_no_panic() {
    let mut file = NamedTempFile::with_suffix(".txt").unwrap();
    file.write_all(b"").unwrap();
    file.flush().unwrap();

    let document = load_document(file.path(), true).unwrap();
    assert!(document.title.is_none());
    assert_all_zero(&compute(&document, &lexicon()));
}

#[test]
fn non_utf8_article_is_an_error_not_a_panic() {
    let mut file = NamedTempFile::with_suffix(".txt").unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
    file.flush().unwrap();

    assert!(load_document(file.path(), true).is_err());
}

#[test]
fn contractions_count_as_one_word() {
    let lex = lexicon();
    let record = compute(&Document::new("c", "The CEO's team didn't agree."), &lex);
    assert_eq!(record.word_count, 5);
}
