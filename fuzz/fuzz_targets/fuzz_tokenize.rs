//! Fuzz target for the tokenizer.
//!
//! Any input must be partitioned into contiguous, non-empty tokens that
//! reproduce it exactly.

#![no_main]

use arbitrary::Arbitrary;
use docsite_highlight::highlight::{TokenizerRegistry, tokenize};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    source: &'a str,
    language: Option<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let tokens = tokenize(input.source, input.language);
    let mut last_end = 0;
    for token in &tokens {
        assert_eq!(token.start, last_end);
        assert!(token.end > token.start);
        assert_eq!(&input.source[token.range()], token.value);
        last_end = token.end;
    }
    assert_eq!(last_end, input.source.len());

    let registry = TokenizerRegistry::with_builtins();
    let rebuilt: String = registry
        .highlight(input.source, input.language)
        .iter()
        .map(|t| t.value)
        .collect();
    assert_eq!(rebuilt, input.source);
});
