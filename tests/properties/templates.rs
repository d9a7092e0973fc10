//! Property tests for template parsing and rendering.

use proptest::prelude::*;

use extplan::{ConfigurationError, OutputCategory, OutputTemplate};

fn category() -> impl Strategy<Value = OutputCategory> {
    prop_oneof![
        Just(OutputCategory::Entry),
        Just(OutputCategory::Chunk),
        Just(OutputCategory::Asset),
    ]
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(
        category in category(),
        pattern in "(?s).{0,128}"
    ) {
        let _ = OutputTemplate::parse(category, &pattern);
    }

    /// PROPERTY: Any bracketed token other than name/ext is rejected.
    #[test]
    fn property_unknown_placeholder_rejected(
        category in category(),
        token in "[a-z]{1,8}"
    ) {
        prop_assume!(token != "name" && token != "ext");
        let pattern = format!("assets/[name]-[{}].js", token);
        let err = OutputTemplate::parse(category, &pattern).unwrap_err();
        let is_unknown_placeholder = matches!(
            err,
            ConfigurationError::UnknownPlaceholder { ref placeholder, .. } if *placeholder == token
        );
        prop_assert!(is_unknown_placeholder);
    }

    /// PROPERTY: Rendering is pure; the same inputs give the same path.
    #[test]
    fn property_render_is_deterministic(
        dir in "[a-z]{1,8}",
        name in name(),
        ext in "[a-z0-9]{1,5}"
    ) {
        let template =
            OutputTemplate::parse(OutputCategory::Asset, &format!("{}/[name].[ext]", dir)).unwrap();
        let first = template.resolve(&name, &ext).unwrap();
        let second = template.resolve(&name, &ext).unwrap();
        prop_assert_eq!(first.as_str(), second.as_str());
        prop_assert_eq!(first.as_str(), format!("{}/{}.{}", dir, name, ext));
    }

    /// PROPERTY: Distinct names stay distinct under a template using [name].
    #[test]
    fn property_name_substitution_is_injective(
        a in name(),
        b in name()
    ) {
        prop_assume!(a != b);
        let template = OutputTemplate::default_for(OutputCategory::Chunk);
        let pa = template.resolve(&a, "js").unwrap();
        let pb = template.resolve(&b, "js").unwrap();
        prop_assert_ne!(pa.as_str(), pb.as_str());
    }
}
