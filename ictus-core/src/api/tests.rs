//! Tests for the annotation API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::domain::{LinePolicy, StressMarker, StressScope};

    fn guillemets() -> Annotator {
        let config = Config::builder()
            .marker(StressMarker::guillemets())
            .build()
            .unwrap();
        Annotator::with_config(config).unwrap()
    }

    #[test]
    fn test_annotator_creation() {
        let annotator = Annotator::new();
        assert_eq!(annotator.profile().code(), "la");
        assert_eq!(annotator.policy(), LinePolicy::Caesura);
        assert_eq!(annotator.scope(), StressScope::EveryWord);

        let circumflex = Annotator::with_profile("la-circumflex").unwrap();
        assert_eq!(circumflex.profile().code(), "la-circumflex");

        assert!(Annotator::with_profile("xx").is_err());
    }

    #[test]
    fn test_policy_override() {
        let config = Config::builder()
            .policy(LinePolicy::EveryLine)
            .scope(StressScope::FirstWord)
            .build()
            .unwrap();
        let annotator = Annotator::with_config(config).unwrap();
        assert_eq!(annotator.policy(), LinePolicy::EveryLine);
        assert_eq!(annotator.scope(), StressScope::FirstWord);
    }

    #[test]
    fn test_first_long_vowel_stressed() {
        let annotator = guillemets();
        assert_eq!(
            annotator.annotate("ārma virūmque cano", "arma virumque cano"),
            "‹a›rma vir‹u›mque cano"
        );
    }

    #[test]
    fn test_default_marker_is_html_span() {
        let annotator = Annotator::new();
        assert_eq!(
            annotator.annotate("ārma", "arma"),
            "<span class=\"stressed\">a</span>rma"
        );
    }

    #[test]
    fn test_no_long_vowels_passthrough() {
        let annotator = guillemets();
        assert_eq!(
            annotator.annotate("Arma virumque cano", "Arma virumque cano"),
            "Arma virumque cano"
        );
    }

    #[test]
    fn test_punctuation_preserved() {
        let annotator = guillemets();
        let output = annotator.annotate("Ītaliam, fātō profugus,", "Italiam,  fato  profugus;");
        assert_eq!(output, "‹I›taliam,  f‹a›to  profugus;");
    }

    #[test]
    fn test_caesura_line_exempt() {
        let annotator = guillemets();
        let output = annotator.annotate_text("lītora ‖ multum", "litora multum");
        assert_eq!(output.text(), "litora multum");
        assert_eq!(output.lines[0].status, LineStatus::Exempt);
        assert!(output.lines[0]
            .words()
            .all(|w| w.outcome == WordOutcome::Exempt));
    }

    #[test]
    fn test_caesura_markers_keep_word_alignment() {
        let config = Config::builder()
            .marker(StressMarker::guillemets())
            .policy(LinePolicy::EveryLine)
            .build()
            .unwrap();
        let annotator = Annotator::with_config(config).unwrap();
        assert_eq!(
            annotator.annotate("ārma‖virūmque canō", "arma virumque cano"),
            "‹a›rma vir‹u›mque can‹o›"
        );
        assert_eq!(
            annotator.annotate("ārma ‖ virūmque canō", "arma virumque cano"),
            "‹a›rma vir‹u›mque can‹o›"
        );
    }

    #[test]
    fn test_marker_text_in_input_survives() {
        let annotator = guillemets();
        assert_eq!(
            annotator.annotate("ārma, ‹fātō›", "arma, ‹fato›"),
            "‹a›rma, ‹f‹a›to›"
        );

        let annotator = Annotator::new();
        assert_eq!(
            annotator.annotate("ārma cano", "<span class=\"stressed\">a</span>rma </span> cano"),
            "<span class=\"stressed\">a</span>rma </span> cano"
        );
    }

    #[test]
    fn test_alternate_policy() {
        let config = Config::builder()
            .marker(StressMarker::guillemets())
            .policy(LinePolicy::Alternate)
            .build()
            .unwrap();
        let annotator = Annotator::with_config(config).unwrap();
        let output = annotator.annotate("ārma\nārma\nārma ‖", "arma\narma\narma");
        assert_eq!(output, "‹a›rma\narma\n‹a›rma");
    }

    #[test]
    fn test_first_word_scope() {
        let config = Config::builder()
            .marker(StressMarker::guillemets())
            .scope(StressScope::FirstWord)
            .build()
            .unwrap();
        let annotator = Annotator::with_config(config).unwrap();
        assert_eq!(annotator.annotate("ārma vīrum", "arma virum"), "‹a›rma virum");
    }

    #[test]
    fn test_input_diacritics_stripped_before_annotation() {
        let annotator = guillemets();
        assert_eq!(annotator.annotate("ārma", "ărmā"), "‹a›rma");
    }

    #[test]
    fn test_reannotation_is_idempotent() {
        let annotator = Annotator::new();
        let reference = "ārma virūmque canō, Trōiae quī prīmus ab ōrīs";
        let once = annotator.annotate(reference, "arma virumque cano, Troiae qui primus ab oris");
        let twice = annotator.annotate(reference, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_word_outcomes() {
        let annotator = guillemets();
        let output = annotator.annotate_text("ārma cano fātō", "arma cano fx extra");
        let outcomes: Vec<WordOutcome> = output.lines[0].words().map(|w| w.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                WordOutcome::Stressed,
                WordOutcome::NoLongVowel,
                WordOutcome::VowelMismatch,
                WordOutcome::Unmatched,
            ]
        );
        assert_eq!(output.metadata.stats.stressed_words, 1);
        assert_eq!(output.metadata.stats.fallback_words, 3);
    }

    #[test]
    fn test_missing_lines() {
        let annotator = guillemets();

        // Extra reference lines produce empty output lines
        let output = annotator.annotate_text("ārma\nvīrum\ncanō", "arma");
        assert_eq!(output.text(), "‹a›rma\n\n");
        assert_eq!(output.lines[1].status, LineStatus::Unpaired);

        // Extra input lines are stripped and left unstressed
        let output = annotator.annotate_text("ārma", "arma\nvīrum");
        assert_eq!(output.text(), "‹a›rma\nvirum");
        assert_eq!(output.metadata.stats.unpaired_lines, 1);
    }

    #[test]
    fn test_process_inputs() {
        let annotator = guillemets();
        let output = annotator
            .process(Input::from_text("ārma"), Input::from_bytes(b"arma".to_vec()))
            .unwrap();
        assert_eq!(output.text(), "‹a›rma");
        assert_eq!(output.metadata.profile, "la");
    }

    #[test]
    fn test_process_invalid_utf8() {
        let annotator = Annotator::new();
        let result = annotator.process(
            Input::from_text("ārma"),
            Input::from_bytes(vec![0xff, 0xfe]),
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_annotator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Annotator>();
    }
}
