/// Corpus loader
///
/// Test data lives in `parse_cases.json` and `codec_cases.json`.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ParseCase {
    /// Input that must be rejected
    Failure { input: String, failure: bool },
    /// Input with its expected components
    Components {
        input: String,
        scheme: String,
        slashes: bool,
        auth: String,
        host: String,
        port: String,
        path: String,
        raw_query: String,
        fragment: String,
        ipv6: bool,
        serialized: String,
        /// Output of re-parsing `serialized`, when it differs from it
        #[serde(default)]
        reserialized: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct CodecCase {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CodecCases {
    pub decode: Vec<CodecCase>,
    pub encode: Vec<CodecCase>,
}

#[derive(Debug, Clone, Default)]
pub struct CorpusResult {
    pub passed: usize,
    pub failures: Vec<CorpusFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CorpusFailure {
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl CorpusResult {
    pub fn check(&mut self, input: &str, field: &'static str, expected: &str, actual: &str) {
        if expected == actual {
            self.passed += 1;
        } else {
            self.failures.push(CorpusFailure {
                input: input.to_string(),
                field,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }
}

pub fn load_parse_cases() -> Vec<ParseCase> {
    serde_json::from_str(include_str!("parse_cases.json")).expect("parse_cases.json is valid")
}

pub fn load_codec_cases() -> CodecCases {
    serde_json::from_str(include_str!("codec_cases.json")).expect("codec_cases.json is valid")
}
