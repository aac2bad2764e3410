//! End-to-end tests for the complete annotation pass

use ictus_core::{
    annotate, Annotator, Config, Input, LineStatus, StressMarker, WordOutcome,
};
use std::io::Cursor;

const AENEID_REFERENCE: &str = "Ārma virūmque canō, Trōiae quī prīmus ab ōrīs
Ītaliam, fātō profugus, Lāvīniaque vēnit
lītora, ‖ multum ille et terrīs iactātus et altō";

const AENEID_PLAIN: &str = "Arma virumque cano, Troiae qui primus ab oris
Italiam, fato profugus, Laviniaque venit
litora, multum ille et terris iactatus et alto";

fn guillemets() -> Annotator {
    let config = Config::builder()
        .marker(StressMarker::guillemets())
        .build()
        .unwrap();
    Annotator::with_config(config).unwrap()
}

#[test]
fn test_complete_latin_pipeline() {
    let output = guillemets().annotate(AENEID_REFERENCE, AENEID_PLAIN);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "‹A›rma vir‹u›mque can‹o›, Tr‹o›iae qu‹i› pr‹i›mus ab ‹o›ris"
    );
    assert_eq!(
        lines[1],
        "‹I›taliam, f‹a›to profugus, L‹a›viniaque v‹e›nit"
    );
    // Caesura line stays plain
    assert_eq!(lines[2], "litora, multum ille et terris iactatus et alto");
}

#[test]
fn test_unmarked_reference_leaves_input_plain() {
    let output = annotate("Arma virumque cano", "Arma virumque cano");
    assert_eq!(output, "Arma virumque cano");
}

#[test]
fn test_decomposed_reference_matches_precomposed() {
    let decomposed = "A\u{0304}rma viru\u{0304}mque";
    let output = guillemets().annotate(decomposed, "arma virumque");
    assert_eq!(output, "‹a›rma vir‹u›mque");
}

#[test]
fn test_double_bar_caesura() {
    let output = guillemets().annotate_text("ārma || virūmque", "arma virumque");
    assert_eq!(output.text(), "arma virumque");
    assert_eq!(output.lines[0].status, LineStatus::Exempt);
}

#[test]
fn test_word_count_mismatch() {
    let output = guillemets().annotate_text("ārma", "arma virumque cano");
    assert_eq!(output.text(), "‹a›rma virumque cano");

    let unmatched = output.lines[0]
        .words()
        .filter(|w| w.outcome == WordOutcome::Unmatched)
        .count();
    assert_eq!(unmatched, 2);
}

#[test]
fn test_crlf_input() {
    let output = guillemets().annotate("ārma\r\nvīrum\r\n", "arma\r\nvirum\r\n");
    assert_eq!(output, "‹a›rma\nv‹i›rum\n");
}

#[test]
fn test_reader_input_processing() {
    let annotator = guillemets();
    let reference = Cursor::new("fātō".as_bytes().to_vec());
    let output = annotator
        .process(Input::from_reader(reference), Input::from_text("fato"))
        .unwrap();
    assert_eq!(output.text(), "f‹a›to");
}

#[test]
fn test_file_input_processing() {
    let dir = tempfile::TempDir::new().unwrap();
    let reference = dir.path().join("reference.txt");
    let plain = dir.path().join("plain.txt");
    std::fs::write(&reference, "ārma\nvīrum").unwrap();
    std::fs::write(&plain, "arma\nvirum").unwrap();

    let output = guillemets()
        .process(Input::from_file(&reference), Input::from_file(&plain))
        .unwrap();
    assert_eq!(output.text(), "‹a›rma\nv‹i›rum");
    assert_eq!(output.metadata.stats.stressed_words, 2);
}

#[test]
fn test_missing_file() {
    let result = Annotator::new().process(
        Input::from_file("/nonexistent/reference.txt"),
        Input::from_text("arma"),
    );
    assert!(result.is_err());
}

#[test]
fn test_circumflex_profile() {
    let config = Config::builder()
        .profile("la-circumflex")
        .marker(StressMarker::guillemets())
        .build()
        .unwrap();
    let annotator = Annotator::with_config(config).unwrap();
    assert_eq!(annotator.annotate("fâtô", "fato"), "f‹a›to");

    // The plain Latin profile treats circumflex as an ordinary vowel
    assert_eq!(guillemets().annotate("fâtô", "fato"), "fato");
}
