//! Property-based tests for identifier parsing and path resolution.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{expand_home, PathResolver};
    use crate::repository::{parse_identifier, RepositoryParser, Scheme};
    use crate::template::PathTemplate;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    // Segments that contain none of the separators the parser looks at
    const SEGMENT: &str = "[a-zA-Z0-9_.-]{1,20}";

    fn parser() -> RepositoryParser {
        RepositoryParser::new(
            "github.com",
            HashMap::from([("github.com".to_string(), Scheme::Ssh("git".to_string()))]),
        )
    }

    // ============================================================================
    // parse_identifier property tests
    // ============================================================================

    proptest! {
        /// Property: SSH shorthand is segmented exactly and the URL round-trips
        #[test]
        fn ssh_shorthand_round_trips(
            host in SEGMENT,
            owner in SEGMENT,
            name in SEGMENT,
        ) {
            let raw = format!("git@{}:{}/{}", host, owner, name);
            let ssh = Scheme::Ssh("git".to_string());
            let repo = parse_identifier(&raw).unwrap();
            prop_assert_eq!(repo.scheme(), Some(&ssh));
            prop_assert_eq!(repo.host(), host.as_str());
            prop_assert_eq!(repo.owner(), owner.as_str());
            prop_assert_eq!(repo.name(), name.as_str());
            prop_assert_eq!(repo.url(), raw.as_str());
        }

        /// Property: scheme-prefixed URLs keep the scheme word and three segments
        #[test]
        fn scheme_prefixed_url_is_segmented(
            word in "[a-z][a-z0-9+.-]{0,8}",
            host in SEGMENT,
            owner in SEGMENT,
            name in SEGMENT,
        ) {
            let raw = format!("{}://{}/{}/{}", word, host, owner, name);
            let repo = parse_identifier(&raw).unwrap();
            prop_assert_eq!(repo.scheme().map(|s| s.to_string()), Some(format!("{}://", word)));
            prop_assert_eq!(repo.host(), host.as_str());
            prop_assert_eq!(repo.owner(), owner.as_str());
            prop_assert_eq!(repo.name(), name.as_str());
        }

        /// Property: an identifier with a single path segment never parses
        #[test]
        fn single_segment_always_fails(raw in "[^/:@]*") {
            prop_assert!(parse_identifier(&raw).is_err());
        }

        /// Property: segments beyond the third never change the result
        #[test]
        fn extra_segments_are_ignored(
            host in SEGMENT,
            owner in SEGMENT,
            name in SEGMENT,
            extra in "[a-zA-Z0-9_./-]{0,30}",
        ) {
            let short = parse_identifier(&format!("{}/{}/{}", host, owner, name)).unwrap();
            let long = parse_identifier(&format!("{}/{}/{}/{}", host, owner, name, extra)).unwrap();
            prop_assert_eq!(short.host(), long.host());
            prop_assert_eq!(short.owner(), long.owner());
            prop_assert_eq!(short.name(), long.name());
        }
    }

    // ============================================================================
    // fill_defaults property tests
    // ============================================================================

    proptest! {
        /// Property: filling defaults twice is the same as filling them once
        #[test]
        fn fill_defaults_is_idempotent(owner in SEGMENT, name in SEGMENT) {
            let parser = parser();
            let once = parser.parse(&format!("{}/{}", owner, name)).unwrap();
            let twice = parser.fill_defaults(once.clone());
            prop_assert_eq!(once, twice);
        }

        /// Property: values present in the identifier are never overwritten
        #[test]
        fn fill_defaults_keeps_parsed_values(host in SEGMENT, owner in SEGMENT, name in SEGMENT) {
            let raw = format!("https://{}/{}/{}", host, owner, name);
            let https = Scheme::Protocol("https".to_string());
            let repo = parser().parse(&raw).unwrap();
            prop_assert_eq!(repo.host(), host.as_str());
            prop_assert_eq!(repo.scheme(), Some(&https));
            prop_assert_eq!(repo.url(), raw.as_str());
        }
    }

    // ============================================================================
    // template and home-directory property tests
    // ============================================================================

    proptest! {
        /// Property: text without braces or dollars passes through unchanged
        #[test]
        fn literal_template_passes_through(text in "[^{}$]{1,40}") {
            let template = PathTemplate::parse(&text).unwrap();
            let repo = parser().parse("o/n").unwrap();
            prop_assert_eq!(template.execute("any", &repo).unwrap(), text);
        }

        /// Property: template lookup ignores the case of the language key
        #[test]
        fn language_lookup_is_case_insensitive(language in "[a-zA-Z]{1,10}") {
            prop_assume!(!language.eq_ignore_ascii_case("default"));
            let resolver = PathResolver::new(&HashMap::from([
                (language.to_uppercase(), "lang/{name}".to_string()),
                ("default".to_string(), "default/{name}".to_string()),
            ]))
            .unwrap();
            let repo = parser().parse("o/n").unwrap();
            prop_assert_eq!(resolver.resolve(&language, &repo).unwrap(), "lang/n");
            prop_assert_eq!(resolver.resolve(&language.to_lowercase(), &repo).unwrap(), "lang/n");
        }

        /// Property: exactly one leading tilde is replaced
        #[test]
        fn only_leading_tilde_is_replaced(rest in ".*") {
            let home = || Some(PathBuf::from("/home/me"));
            let path = expand_home(format!("~{}", rest), home).unwrap();
            prop_assert_eq!(path, format!("/home/me{}", rest));
        }

        /// Property: paths without a leading tilde are returned unchanged
        #[test]
        fn paths_without_leading_tilde_are_unchanged(path in "[^~].*") {
            let expanded = expand_home(path.clone(), || None).unwrap();
            prop_assert_eq!(expanded, path);
        }
    }
}
