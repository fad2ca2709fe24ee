//! Minimal reader for `key=value` property files
//!
//! Handles the subset build tools actually emit: `#`/`!` comments, blank lines,
//! `=` or `:` separators and leading whitespace. Trailing whitespace is part of
//! the value. Line continuations and unicode escapes are not supported.

use std::collections::HashMap;

pub type Properties = HashMap<String, String>;

pub fn parse_properties(content: &str) -> Properties {
    let mut props = Properties::new();

    for line in content.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let (key, value) = match line.find(['=', ':']) {
            Some(idx) => (&line[..idx], &line[idx + 1..]),
            None => (line, ""),
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        props.insert(key.to_string(), value.trim_start().to_string());
    }

    props
}

/// Parses a single `key=value` pair as given on the command line
pub fn parse_property_pair(pair: &str) -> Result<(String, String), String> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("Invalid property '{}', expected key=value", pair)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_properties() {
        let content = r#"
# default images
runtime.upstream.docker = registry.example.com/runtime:21
runtime.upstream.s2i=registry.example.com/runtime-s2i:21
! legacy comment
custom.key: value with spaces
"#;
        let props = parse_properties(content);

        assert_eq!(props.len(), 3);
        assert_eq!(
            props["runtime.upstream.docker"],
            "registry.example.com/runtime:21"
        );
        assert_eq!(
            props["runtime.upstream.s2i"],
            "registry.example.com/runtime-s2i:21"
        );
        assert_eq!(props["custom.key"], "value with spaces");
    }

    #[test]
    fn test_value_keeps_later_separators() {
        let props = parse_properties("kubegen.generator.quarkus.from=quay.io/org/app:1.0");
        assert_eq!(props["kubegen.generator.quarkus.from"], "quay.io/org/app:1.0");
    }

    #[test]
    fn test_value_keeps_trailing_whitespace() {
        let props = parse_properties("  kubegen.generator.quarkus.from =  java:latest  \n");
        assert_eq!(props["kubegen.generator.quarkus.from"], "java:latest  ");
    }

    #[test]
    fn test_key_without_value() {
        let props = parse_properties("flag\n=orphan");
        assert_eq!(props.len(), 1);
        assert_eq!(props["flag"], "");
    }

    #[test]
    fn test_parse_property_pair() {
        assert_eq!(
            parse_property_pair("kubegen.generator.quarkus.nativeImage=true").unwrap(),
            (
                "kubegen.generator.quarkus.nativeImage".to_string(),
                "true".to_string()
            )
        );
        assert_eq!(
            parse_property_pair("key=a=b").unwrap(),
            ("key".to_string(), "a=b".to_string())
        );
        assert!(parse_property_pair("novalue").is_err());
        assert!(parse_property_pair("=value").is_err());
    }
}
