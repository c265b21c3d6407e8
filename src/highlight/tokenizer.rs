//! Pattern-table tokenizer and tokenizer registry.
//!
//! The tokenizer is not a lexer for any particular language. One ordered table
//! of regex rules is applied to every non-plain source; the language label
//! only decides whether tokenizing happens at all.
//!
//! Conflicts are resolved first-match-wins: all candidates from all rules are
//! pooled and sorted by start offset (rule order breaks ties), then a single
//! left-to-right walk accepts a candidate only if it starts at or after the end
//! of the previously accepted one. Gaps become [`TokenKind::Text`].

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Language label that disables tokenizing.
pub const PLAIN_LANGUAGE: &str = "text";

/// One row of the pattern table.
///
/// If the pattern defines a capture group, the token covers group 1 only and
/// the rest of the match acts as context (a stand-in for lookahead, which the
/// regex engine does not support).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub kind: TokenKind,
    pub pattern: &'static str,
}

impl Rule {
    #[must_use]
    pub const fn new(name: &'static str, kind: TokenKind, pattern: &'static str) -> Self {
        Self {
            name,
            kind,
            pattern,
        }
    }
}

/// Default rules, highest priority first.
///
/// Unterminated block comments run to the end of input; unterminated string
/// and template literals run to the end of their line.
pub const DEFAULT_RULES: &[Rule] = &[
    Rule::new("line-comment", TokenKind::Comment, r"//[^\r\n]*"),
    Rule::new("block-comment", TokenKind::Comment, r"(?s)/\*.*?(?:\*/|\z)"),
    Rule::new(
        "double-quoted",
        TokenKind::String,
        r#""(?:[^"\\]|\\.)*"|"(?:[^"\\\n]|\\.)*"#,
    ),
    Rule::new(
        "single-quoted",
        TokenKind::String,
        r"'(?:[^'\\]|\\.)*'|'(?:[^'\\\n]|\\.)*",
    ),
    Rule::new(
        "template",
        TokenKind::String,
        r"`(?:[^`\\]|\\.)*`|`(?:[^`\\\n]|\\.)*",
    ),
    Rule::new(
        "keyword",
        TokenKind::Keyword,
        concat!(
            r"\b(?:",
            "const|let|var|function|return|if|else|for|while|class|interface|type|",
            "import|export|from|default|async|await|try|catch|finally|throw|new|this|",
            "super|extends|implements|public|private|protected|static|readonly|abstract|",
            "enum|namespace|module|declare|as|in|of|typeof|instanceof|void|null|",
            "undefined|true|false",
            r")\b",
        ),
    ),
    Rule::new("number", TokenKind::Number, r"\b[0-9]+(?:\.[0-9]+)?\b"),
    Rule::new(
        "tag",
        TokenKind::Tag,
        r"</?[a-zA-Z][a-zA-Z0-9]*(?:\s[^>]*)?/?>",
    ),
    Rule::new("attr", TokenKind::Attr, r"\b([a-zA-Z-]+)="),
    Rule::new("operator", TokenKind::Operator, r"[+\-*/%=<>!&|^~?:]"),
    Rule::new("punctuation", TokenKind::Punctuation, r"[{}\[\]();,.]"),
];

#[derive(Debug)]
struct CompiledRule {
    kind: TokenKind,
    regex: Regex,
    has_group: bool,
}

fn compile(rules: &[Rule]) -> Result<Arc<[CompiledRule]>> {
    rules
        .iter()
        .map(|rule| {
            let regex = Regex::new(rule.pattern).map_err(|source| Error::InvalidPattern {
                rule: rule.name,
                source,
            })?;
            Ok(CompiledRule {
                kind: rule.kind,
                has_group: regex.captures_len() > 1,
                regex,
            })
        })
        .collect()
}

static DEFAULT_COMPILED: LazyLock<Arc<[CompiledRule]>> =
    LazyLock::new(|| compile(DEFAULT_RULES).expect("default highlight rules must compile"));

#[derive(Clone, Copy, Debug)]
struct Candidate {
    start: usize,
    end: usize,
    rule: usize,
}

fn collect_candidates(rules: &[CompiledRule], source: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (rule_idx, rule) in rules.iter().enumerate() {
        if rule.has_group {
            for caps in rule.regex.captures_iter(source) {
                if let Some(m) = caps.get(1).filter(|m| !m.is_empty()) {
                    candidates.push(Candidate {
                        start: m.start(),
                        end: m.end(),
                        rule: rule_idx,
                    });
                }
            }
        } else {
            candidates.extend(
                rule.regex
                    .find_iter(source)
                    .filter(|m| !m.is_empty())
                    .map(|m| Candidate {
                        start: m.start(),
                        end: m.end(),
                        rule: rule_idx,
                    }),
            );
        }
    }
    candidates
}

fn resolve<'a>(rules: &[CompiledRule], source: &'a str) -> Vec<Token<'a>> {
    let mut candidates = collect_candidates(rules, source);
    // Within one rule matches never overlap, so (start, rule) is unique.
    candidates.sort_unstable_by_key(|c| (c.start, c.rule));

    let mut tokens = Vec::with_capacity(candidates.len() + 1);
    let mut last_end = 0usize;

    for candidate in candidates {
        if candidate.start < last_end {
            continue;
        }
        if candidate.start > last_end {
            tokens.push(Token::new(TokenKind::Text, source, last_end, candidate.start));
        }
        tokens.push(Token::new(
            rules[candidate.rule].kind,
            source,
            candidate.start,
            candidate.end,
        ));
        last_end = candidate.end;
    }

    if last_end < source.len() {
        tokens.push(Token::new(TokenKind::Text, source, last_end, source.len()));
    }

    tokens
}

fn plain(source: &str) -> Vec<Token<'_>> {
    if source.is_empty() {
        Vec::new()
    } else {
        vec![Token::new(TokenKind::Text, source, 0, source.len())]
    }
}

/// Tokenize `source` for display.
///
/// `None`, the empty label, and exactly `"text"` return the whole source as
/// one [`TokenKind::Text`] token; any other label applies [`DEFAULT_RULES`].
/// An empty source always yields no tokens.
///
/// ```
/// use docsite_highlight::highlight::{TokenKind, tokenize};
///
/// let tokens = tokenize("let x = 5;", Some("ts"));
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens.iter().map(|t| t.value).collect::<String>(), "let x = 5;");
/// ```
#[must_use]
pub fn tokenize<'a>(source: &'a str, language: Option<&str>) -> Vec<Token<'a>> {
    match language {
        None | Some("" | PLAIN_LANGUAGE) => plain(source),
        Some(_) => resolve(&DEFAULT_COMPILED, source),
    }
}

/// Core tokenizer abstraction.
pub trait Tokenizer: Send + Sync {
    /// Human-readable name of this tokenizer.
    fn name(&self) -> &'static str;

    /// Language labels this tokenizer answers to (matched case-insensitively).
    fn aliases(&self) -> &'static [&'static str];

    /// Split `source` into a lossless, contiguous token sequence.
    fn tokenize<'a>(&self, source: &'a str) -> Vec<Token<'a>>;
}

/// Emits the whole source as a single text token.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTokenizer;

impl Tokenizer for PlainTokenizer {
    fn name(&self) -> &'static str {
        "Plain"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["text", "plain", "plaintext", "txt"]
    }

    fn tokenize<'a>(&self, source: &'a str) -> Vec<Token<'a>> {
        plain(source)
    }
}

/// Applies an ordered rule table with first-match-wins resolution.
#[derive(Clone, Debug)]
pub struct PatternTokenizer {
    rules: Arc<[CompiledRule]>,
}

impl PatternTokenizer {
    /// Tokenizer over [`DEFAULT_RULES`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Arc::clone(&*DEFAULT_COMPILED),
        }
    }

    /// Tokenizer over a custom table, highest priority first.
    pub fn with_rules(rules: &[Rule]) -> Result<Self> {
        Ok(Self {
            rules: compile(rules)?,
        })
    }
}

impl Default for PatternTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for PatternTokenizer {
    fn name(&self) -> &'static str {
        "Pattern"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &[
            "javascript",
            "js",
            "jsx",
            "typescript",
            "ts",
            "tsx",
            "json",
            "css",
            "html",
            "bash",
            "sh",
        ]
    }

    fn tokenize<'a>(&self, source: &'a str) -> Vec<Token<'a>> {
        resolve(&self.rules, source)
    }
}

/// Normalized alias-map key for a language label.
fn lookup_key(language: Option<&str>) -> String {
    match language.map(str::trim) {
        None | Some("") => PLAIN_LANGUAGE.to_string(),
        Some(label) => label.to_ascii_lowercase(),
    }
}

/// Registry for tokenizer lookup by language label.
#[derive(Default)]
pub struct TokenizerRegistry {
    tokenizers: Vec<Arc<dyn Tokenizer>>,
    by_alias: HashMap<String, usize>,
    fallback: Option<usize>,
}

impl TokenizerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tokenizer. Later registrations override existing aliases.
    pub fn register(&mut self, tokenizer: Box<dyn Tokenizer>) -> usize {
        let tokenizer: Arc<dyn Tokenizer> = Arc::from(tokenizer);
        let index = self.tokenizers.len();
        self.by_alias
            .insert(tokenizer.name().to_ascii_lowercase(), index);
        for alias in tokenizer.aliases() {
            let key = alias.trim().to_ascii_lowercase();
            if !key.is_empty() {
                self.by_alias.insert(key, index);
            }
        }
        self.tokenizers.push(tokenizer);
        index
    }

    /// Register a tokenizer used for labels no alias matches.
    pub fn register_fallback(&mut self, tokenizer: Box<dyn Tokenizer>) {
        let index = self.register(tokenizer);
        self.fallback = Some(index);
    }

    /// Tokenizer registered under `label` (case-insensitive), ignoring the fallback.
    #[must_use]
    pub fn by_alias(&self, label: &str) -> Option<&dyn Tokenizer> {
        let index = self.by_alias.get(&label.trim().to_ascii_lowercase())?;
        self.tokenizers.get(*index).map(AsRef::as_ref)
    }

    /// Resolve a language label. `None` and blank labels resolve like
    /// [`PLAIN_LANGUAGE`].
    #[must_use]
    pub fn for_language(&self, language: Option<&str>) -> Option<&dyn Tokenizer> {
        self.by_alias(&lookup_key(language)).or_else(|| {
            self.fallback
                .and_then(|index| self.tokenizers.get(index))
                .map(AsRef::as_ref)
        })
    }

    /// Shared handle to the tokenizer [`TokenizerRegistry::for_language`] picks.
    #[must_use]
    pub fn for_language_shared(&self, language: Option<&str>) -> Option<Arc<dyn Tokenizer>> {
        let index = self
            .by_alias
            .get(&lookup_key(language))
            .copied()
            .or(self.fallback)?;
        self.tokenizers.get(index).cloned()
    }

    /// Tokenize with the resolved tokenizer, or as plain text if none resolves.
    #[must_use]
    pub fn highlight<'a>(&self, source: &'a str, language: Option<&str>) -> Vec<Token<'a>> {
        self.for_language(language)
            .map_or_else(|| plain(source), |tokenizer| tokenizer.tokenize(source))
    }

    /// Registry with the plain tokenizer and the pattern tokenizer as fallback.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PlainTokenizer));
        registry.register_fallback(Box::new(PatternTokenizer::new()));
        registry
    }
}
