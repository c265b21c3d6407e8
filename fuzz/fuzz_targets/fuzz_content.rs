//! Fuzz target for the content block parser and HTML renderer.

#![no_main]

use docsite_highlight::{HtmlRenderer, parse_blocks};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let blocks = parse_blocks(data);
    assert!(blocks.len() <= data.split('\n').count());

    let html = HtmlRenderer::new().blocks(&blocks);
    // Markup in the input is always escaped.
    assert!(!html.contains("<script"));
});
