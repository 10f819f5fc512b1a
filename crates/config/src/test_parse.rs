#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::*;

    fn slide_sources(text: &str) -> Result<Vec<String>> {
        let cfg = load_from_str(text, Some("inline.json"))?;
        Ok(cfg.slides.into_iter().map(|s| s.src).collect())
    }

    #[test]
    fn errors_propagate_through_result_alias() {
        assert_eq!(
            slide_sources(r#"{"slides":[{"src":"a.jpg"},{"src":"b.jpg"}]}"#).unwrap(),
            vec!["a.jpg", "b.jpg"]
        );
        let err = slide_sources("{").unwrap_err();
        assert_eq!(err.location(), "inline.json");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn full_document_parses() {
        let json = r#"{
            "slides": [
                {"src": "a.jpg", "alt": "A", "title": "Hello", "subtitle": "World",
                 "href": "/go", "cta": "Shop now"},
                {"src": "b.jpg"}
            ],
            "autoplay": true,
            "interval": 4000,
            "height": "420px",
            "ariaLabel": "Promotions",
            "css": ".caption{color:red}"
        }"#;
        let cfg = load_from_str(json, None).unwrap();
        assert_eq!(cfg.slide_count(), 2);
        assert!(cfg.autoplay);
        assert_eq!(cfg.effective_interval(), Duration::from_millis(4000));
        assert_eq!(cfg.height.as_deref(), Some("420px"));
        assert_eq!(cfg.aria_label_or_default(), "Promotions");
        assert_eq!(cfg.css_or_empty(), ".caption{color:red}");

        let first = &cfg.slides[0];
        assert_eq!(first.alt, "A");
        assert_eq!(first.cta_or_default(), "Shop now");
        assert!(first.has_caption());

        let second = &cfg.slides[1];
        assert_eq!(second, &SlideSpec::new("b.jpg"));
        assert!(!second.has_caption());
    }

    #[test]
    fn empty_document_takes_defaults() {
        let cfg = load_from_str("{}", None).unwrap();
        assert!(cfg.slides.is_empty());
        assert!(!cfg.autoplay);
        assert_eq!(cfg.effective_interval(), Duration::from_millis(DEFAULT_INTERVAL_MS));
        assert_eq!(cfg.autoplay_interval(), None);
        assert_eq!(cfg.aria_label_or_default(), DEFAULT_ARIA_LABEL);
        assert_eq!(cfg.css_or_empty(), "");
        assert_eq!(cfg.height, None);
    }

    #[test]
    fn nulls_are_treated_as_absent() {
        let json = r#"{"slides": null, "autoplay": null, "interval": null, "ariaLabel": null}"#;
        let cfg = load_from_str(json, None).unwrap();
        assert!(cfg.slides.is_empty());
        assert!(!cfg.autoplay);
        assert_eq!(cfg.interval, None);
        assert_eq!(cfg.aria_label, None);
    }

    #[test]
    fn empty_strings_normalize_to_none() {
        let json = r#"{"slides": [{"src": "a.jpg", "title": "", "href": "", "cta": ""}], "height": ""}"#;
        let cfg = load_from_str(json, None).unwrap();
        let slide = &cfg.slides[0];
        assert_eq!(slide.title, None);
        assert_eq!(slide.href, None);
        assert!(!slide.has_caption());
        assert_eq!(slide.cta_or_default(), DEFAULT_CTA);
        assert_eq!(cfg.height, None);
    }

    #[test]
    fn interval_is_floored() {
        let cfg = load_from_str(r#"{"autoplay": true, "interval": 1000}"#, None).unwrap();
        assert_eq!(cfg.autoplay_interval(), Some(Duration::from_millis(1500)));

        let cfg = load_from_str(r#"{"interval": -20}"#, None).unwrap();
        assert_eq!(cfg.effective_interval(), Duration::from_millis(MIN_INTERVAL_MS));

        // Zero falls back to the default rather than the floor.
        let cfg = load_from_str(r#"{"interval": 0}"#, None).unwrap();
        assert_eq!(cfg.effective_interval(), Duration::from_millis(DEFAULT_INTERVAL_MS));

        let cfg = load_from_str(r#"{"interval": 2500.4}"#, None).unwrap();
        assert_eq!(cfg.effective_interval(), Duration::from_millis(2500));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = load_from_str(r#"{"theme": "dark", "slides": [{"src": "a.jpg", "x": 1}]}"#, None)
            .unwrap();
        assert_eq!(cfg.slide_count(), 1);
    }

    #[test]
    fn slide_without_src_fails() {
        let err = load_from_str(r#"{"slides": [{"alt": "missing"}]}"#, Some("cfg.json")).unwrap_err();
        match err {
            Error::Parse { location, message, .. } => {
                assert_eq!(location, "cfg.json");
                assert!(message.contains("src"), "message: {message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_reports_position() {
        let text = "{\n  \"slides\": [\n    {\"src\": \"a.jpg\",,}\n  ]\n}";
        let err = load_from_str(text, None).unwrap_err();
        match &err {
            Error::Parse { location, line, excerpt, .. } => {
                assert_eq!(location, "<inline>");
                assert_eq!(*line, 3);
                assert!(excerpt.contains('^'));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(err.pretty().starts_with("Config parse error at <inline>:3:"));
    }

    #[test]
    fn wrong_field_type_fails() {
        let err = load_from_str(r#"{"autoplay": "yes"}"#, None).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}

#[cfg(test)]
mod sample {
    use crate::*;

    #[test]
    fn bundled_sample_parses() {
        let text = include_str!("../../../hero/config.json");
        let cfg = load_from_str(text, Some(DEFAULT_CONFIG_LOCATION)).unwrap();
        assert_eq!(cfg.slide_count(), 3);
        assert!(cfg.autoplay);
        assert!(cfg.slides.iter().all(|s| !s.src.is_empty()));
        assert_eq!(cfg.slides[1].cta_or_default(), DEFAULT_CTA);
    }
}
