/// Corpus runner
///
/// Runs every corpus case and reports all mismatches at once.
use super::corpus_loader::{CorpusResult, ParseCase, load_codec_cases, load_parse_cases};
use rawurl::{ParseError, Url, decode, encode};

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn run_parse_cases(cases: Vec<ParseCase>) -> CorpusResult {
    let mut result = CorpusResult::default();

    for case in cases {
        match case {
            ParseCase::Comment(_) => {}
            ParseCase::Failure { input, failure } => {
                assert!(failure, "failure cases must set failure=true");
                let actual = match Url::parse(&input) {
                    Err(ParseError::MissingScheme) => "MissingScheme".to_string(),
                    Ok(url) => url.serialize(),
                };
                result.check(&input, "error", "MissingScheme", &actual);
            }
            ParseCase::Components {
                input,
                scheme,
                slashes,
                auth,
                host,
                port,
                path,
                raw_query,
                fragment,
                ipv6,
                serialized,
                reserialized,
            } => {
                let url = match Url::parse(&input) {
                    Ok(url) => url,
                    Err(e) => {
                        result.check(&input, "parsing", "success", &e.to_string());
                        continue;
                    }
                };

                result.check(&input, "scheme", &scheme, &url.scheme);
                result.check(&input, "slashes", flag(slashes), flag(url.slashes));
                result.check(&input, "auth", &auth, &url.auth);
                result.check(&input, "host", &host, &url.host);
                result.check(&input, "port", &port, &url.port);
                result.check(&input, "path", &path, &url.path);
                result.check(&input, "raw_query", &raw_query, &url.raw_query);
                result.check(&input, "fragment", &fragment, &url.fragment);
                result.check(&input, "ipv6", flag(ipv6), flag(url.ipv6));
                result.check(&input, "serialized", &serialized, &url.serialize());
                result.check(
                    &input,
                    "serialized_len",
                    &serialized.len().to_string(),
                    &url.serialized_len().to_string(),
                );

                let again = Url::parse(&serialized).unwrap().serialize();
                let expected = reserialized.as_deref().unwrap_or(&serialized);
                result.check(&input, "reserialized", expected, &again);
            }
        }
    }

    result
}

#[test]
fn test_parse_corpus() {
    let result = run_parse_cases(load_parse_cases());
    assert!(
        result.failures.is_empty(),
        "{} checks passed, failures: {:#?}",
        result.passed,
        result.failures
    );
    assert!(result.passed > 500);
}

#[test]
fn test_decode_corpus() {
    let mut result = CorpusResult::default();
    for case in load_codec_cases().decode {
        result.check(&case.input, "decode", &case.output, &decode(&case.input));
    }
    assert!(result.failures.is_empty(), "{:#?}", result.failures);
}

#[test]
fn test_encode_corpus() {
    let mut result = CorpusResult::default();
    for case in load_codec_cases().encode {
        let encoded = encode(&case.input);
        result.check(&case.input, "encode", &case.output, &encoded);
        // Encoding is idempotent
        result.check(&case.input, "encode twice", &encoded, &encode(&encoded));
    }
    assert!(result.failures.is_empty(), "{:#?}", result.failures);
}
