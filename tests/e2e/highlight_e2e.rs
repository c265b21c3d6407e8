//! E2E tests for the highlight and content rendering pipeline.
//!
//! Run with:
//!   cargo test --test `highlight_e2e` -- --nocapture
//! With logging:
//!   `RUST_LOG=debug` cargo test --test `highlight_e2e` -- --nocapture
//!
//! CI: runs under the default `cargo test` job.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use docsite_highlight::highlight::{Token, TokenKind, TokenizerRegistry};
use docsite_highlight::render::sgr;
use docsite_highlight::{
    AnsiRenderer, Block, CodeBlock, CopyState, HtmlRenderer, LogLevel, MemoryClipboard,
    ThemeRegistry, clear_log_callback, parse_blocks, set_log_callback,
};
use serde::Serialize;
use tracing::{Level, debug, info, span, warn};

const SAMPLE_TSX: &str = include_str!("fixtures/sample.tsx");
const TUTORIAL: &str = include_str!("fixtures/tutorial.txt");

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_test_writer()
        .try_init();
}

fn assert_partition(tokens: &[Token<'_>], source: &str) {
    let mut last_end = 0usize;
    for token in tokens {
        assert_eq!(token.start, last_end, "gap or overlap before {token:?}");
        assert!(token.end > token.start, "empty token {token:?}");
        last_end = token.end;
    }
    assert_eq!(last_end, source.len(), "tokens must cover the source");
}

fn values_of(tokens: &[Token<'_>], kind: TokenKind) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.value.to_string())
        .collect()
}

#[test]
fn e2e_tsx_file_highlighting() {
    init_logging();
    let span = span!(Level::INFO, "e2e_tsx_file");
    let _enter = span.enter();

    let registry = TokenizerRegistry::with_builtins();
    let start = Instant::now();
    let tokens = registry.highlight(SAMPLE_TSX, Some("tsx"));
    info!(elapsed = ?start.elapsed(), count = tokens.len(), "tokenized sample.tsx");

    assert_partition(&tokens, SAMPLE_TSX);

    let comments = values_of(&tokens, TokenKind::Comment);
    debug!(?comments, "comments");
    assert!(comments.iter().any(|c| c == "// bump by one"));
    assert!(
        comments
            .iter()
            .any(|c| c.starts_with("/* Counter") && c.ends_with("*/") && c.contains('\n')),
        "block comment spans lines"
    );

    let strings = values_of(&tokens, TokenKind::String);
    assert!(strings.contains(&"\"react\"".to_string()));
    assert!(strings.contains(&"`Count: ${count}`".to_string()));

    let keywords = values_of(&tokens, TokenKind::Keyword);
    for expected in ["import", "from", "export", "default", "function", "const", "return"] {
        assert!(keywords.iter().any(|k| k == expected), "missing keyword {expected}");
    }

    let tags = values_of(&tokens, TokenKind::Tag);
    assert!(tags.contains(&"<span>".to_string()));
    assert!(tags.contains(&"</div>".to_string()));

    assert!(values_of(&tokens, TokenKind::Number).contains(&"0".to_string()));
}

#[test]
fn e2e_tutorial_to_html() {
    init_logging();
    let span = span!(Level::INFO, "e2e_tutorial_html");
    let _enter = span.enter();

    let blocks = parse_blocks(TUTORIAL);
    info!(count = blocks.len(), "parsed tutorial");
    assert_eq!(blocks.len(), 13);
    assert!(matches!(&blocks[0], Block::Heading { level: 2, text } if text == "Getting Started"));
    assert!(matches!(&blocks[6], Block::Code { language: Some(lang), .. } if lang == "tsx"));

    let html = HtmlRenderer::new().blocks(&blocks);
    debug!(len = html.len(), "rendered html");

    assert!(html.starts_with("<h2>Getting Started</h2>\n<br />\n"));
    assert!(html.contains("<h3>Example</h3>"));
    assert!(html.contains(
        "<p>Install the package and import the hook with <code>useState</code>.</p>"
    ));
    assert!(html.contains("<span class=\"text-purple-400 font-medium\">const</span>"));
    assert!(html.contains(
        "<ul>\n<li>Call hooks at the <strong>top level</strong> only</li>\n\
         <li>Never call hooks inside <code>if</code> blocks</li>\n</ul>"
    ));
    assert!(html.contains("<p>That is <strong>all</strong> there is.</p>"));
    assert_eq!(html.matches("<div class=\"code-block\">").count(), 1);
}

#[test]
fn e2e_heading_paragraph_snapshot() {
    let html = HtmlRenderer::new().blocks(&parse_blocks("## Title\n\nSome text with `code`."));
    insta::assert_snapshot!(html, @r"
    <h2>Title</h2>
    <br />
    <p>Some text with <code>code</code>.</p>
    ");
}

#[test]
fn e2e_token_stream_snapshot() {
    let tokens = docsite_highlight::tokenize("const x = \"hi\";", Some("ts"));
    let listing: Vec<String> = tokens
        .iter()
        .map(|t| format!("{} {:?}", t.kind, t.value))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r#"
    keyword "const"
    text " x "
    operator "="
    text " "
    string "\"hi\""
    punctuation ";"
    "#);
}

#[derive(Serialize)]
struct TokenRow<'a> {
    kind: &'static str,
    value: &'a str,
    start: usize,
    end: usize,
}

fn token_rows<'a>(tokens: &[Token<'a>]) -> Vec<TokenRow<'a>> {
    tokens
        .iter()
        .map(|t| TokenRow {
            kind: t.kind.name(),
            value: t.value,
            start: t.start,
            end: t.end,
        })
        .collect()
}

#[test]
fn e2e_token_rows_json() {
    let tokens = docsite_highlight::tokenize("<b>", Some("html"));
    insta::assert_json_snapshot!(token_rows(&tokens), @r#"
    [
      {
        "kind": "tag",
        "value": "<b>",
        "start": 0,
        "end": 3
      }
    ]
    "#);

    let tokens = docsite_highlight::tokenize("let a", Some("js"));
    let value = serde_json::to_value(token_rows(&tokens)).expect("serializable rows");
    assert_eq!(
        value,
        serde_json::json!([
            { "kind": "keyword", "value": "let", "start": 0, "end": 3 },
            { "kind": "text", "value": " a", "start": 3, "end": 5 },
        ])
    );
}

#[test]
fn e2e_theme_switching() {
    init_logging();

    let mut themes = ThemeRegistry::with_builtins();
    assert_eq!(
        themes.list().collect::<Vec<_>>(),
        ["Slate", "Dark", "Light", "Monochrome"]
    );

    let mut renderer = AnsiRenderer::new(themes.current().clone());
    let slate = renderer.highlight("return 1", Some("ts"));
    assert!(slate.starts_with("\x1b[38;2;192;132;252;1mreturn\x1b[0m"));

    themes.set_current("light").expect("light theme registered");
    renderer.set_theme(themes.current().clone());
    let light = renderer.highlight("return 1", Some("ts"));
    info!(?light, "light rendering");
    assert_ne!(slate, light);
    assert!(light.starts_with(&sgr(themes.current().style_for(TokenKind::Keyword))));

    let err = themes.set_current("solarized").unwrap_err();
    warn!(%err, "unknown theme rejected");
    assert_eq!(themes.current().name(), "Light");
}

#[test]
fn e2e_copy_button_cycle() {
    init_logging();

    let reports = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&reports);
    set_log_callback(move |level, message| {
        debug!(?level, message, "library log");
        if level == LogLevel::Debug && message.contains("unterminated code fence") {
            sink.lock().unwrap().push(message.to_string());
        }
    });

    // An unterminated fence is reported and kept as text.
    let blocks = parse_blocks("```ts\nconst a = 1");
    assert_eq!(blocks.len(), 2);
    assert!(!reports.lock().unwrap().is_empty());
    clear_log_callback();

    let renderer = HtmlRenderer::new();
    let listing = CodeBlock::new("npm install docsite")
        .with_language("bash")
        .with_filename("terminal");
    let clipboard = MemoryClipboard::new();
    let mut state = CopyState::new();
    let start = Instant::now();

    let before = renderer.code_block(&listing, state.is_copied(start));
    assert!(before.contains("aria-label=\"Copy code\""));

    assert!(state.copy(&clipboard, &listing.code, start));
    assert_eq!(clipboard.contents(), "npm install docsite");

    let during = renderer.code_block(&listing, state.is_copied(start + Duration::from_secs(1)));
    assert!(during.contains("aria-label=\"Copied\" data-copied=\"true\""));

    let after = renderer.code_block(&listing, state.is_copied(start + Duration::from_secs(2)));
    assert_eq!(after, before);
}
