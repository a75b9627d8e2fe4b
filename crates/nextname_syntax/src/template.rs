//! Template scanner.
//!
//! A template is literal text with at most one numbering directive substituted:
//!
//! ```text
//! template   := segment*
//! segment    := literal-char | "%%" | directive
//! directive  := "%" selector | "%0" digit+ selector
//! ```
//!
//! The scanner walks the template left to right. `%%` becomes a literal `%`; a `%` followed by a known selector is
//! the directive; anything else is kept verbatim and scanning resumes just after the rejected characters. Only the
//! first directive counts: everything after it is the literal suffix, where `%%` is collapsed to `%` and nothing else
//! is interpreted.

use std::fmt;

use nextname_core::registry;
use nextname_core::{NumberingScheme, Ordinal};

use crate::diagnostics::{DirectiveError, Span};

/// A template split around its numbering directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Literal text before the directive, escapes collapsed.
    pub prefix: String,
    /// The selector character that picked the scheme (`d` for both `%d` and `%05d`).
    pub selector: char,
    /// A fresh scheme value, already configured with any requested width.
    pub scheme: NumberingScheme,
    /// Literal text after the directive, escapes collapsed.
    pub suffix: String,
    /// Location of the directive in the source template.
    pub span: Span,
}

/// Result of scanning a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// No directive was found. Holds the template text with escapes collapsed before the end of scanning.
    Literal(String),
    Directive(Directive),
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Literal(text) => write!(f, "literal {text:?}"),
            Template::Directive(d) => write!(f, "prefix {:?} | {} | suffix {:?}", d.prefix, d.scheme, d.suffix),
        }
    }
}

/// A scanned template together with every `%` sequence that was kept as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    pub template: Template,
    pub rejected: Vec<DirectiveError>,
    /// Problems with the accepted directive that do not change how it is read.
    pub warnings: Vec<DirectiveError>,
}

impl ParsedTemplate {
    pub fn directive(&self) -> Option<&Directive> {
        match &self.template {
            Template::Directive(d) => Some(d),
            Template::Literal(_) => None,
        }
    }
}

/// Template scanner state.
struct Scanner<'a> {
    source: &'a str,
    /// Byte offset of the first unscanned character.
    pos: usize,
    prefix: String,
    rejected: Vec<DirectiveError>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            prefix: String::new(),
            rejected: Vec::new(),
        }
    }

    fn scan(mut self) -> ParsedTemplate {
        while let Some(offset) = self.source[self.pos..].find('%') {
            let percent = self.pos + offset;
            let selector_start = percent + 1;

            let Some(selector) = self.source[selector_start..].chars().next() else {
                self.rejected.push(DirectiveError::DanglingPercent {
                    span: Span::new(percent, selector_start),
                });
                break;
            };
            let selector_end = selector_start + selector.len_utf8();

            self.prefix.push_str(&self.source[self.pos..percent]);

            if selector == '%' {
                self.prefix.push('%');
                self.pos = selector_end;
                continue;
            }

            match self.directive(percent, selector, selector_end) {
                Ok((selector, scheme, end)) => {
                    let mut warnings = Vec::new();
                    if scheme.width().is_some_and(|width| width > 0) && !scheme.honors_width() {
                        warnings.push(DirectiveError::WidthIgnored {
                            selector,
                            span: Span::new(percent, end),
                        });
                    }
                    let directive = Directive {
                        prefix: self.prefix,
                        selector,
                        scheme,
                        suffix: self.source[end..].replace("%%", "%"),
                        span: Span::new(percent, end),
                    };
                    return ParsedTemplate {
                        template: Template::Directive(directive),
                        rejected: self.rejected,
                        warnings,
                    };
                }
                Err(err) => {
                    self.rejected.push(err);
                    self.prefix.push('%');
                    self.prefix.push(selector);
                    self.pos = selector_end;
                }
            }
        }

        self.prefix.push_str(&self.source[self.pos..]);
        ParsedTemplate {
            template: Template::Literal(self.prefix),
            rejected: self.rejected,
            warnings: Vec::new(),
        }
    }

    /// Try to read a directive whose selector character ends at `selector_end`.
    ///
    /// Returns the effective selector, the configured scheme and the byte offset just past the directive.
    fn directive(
        &self,
        percent: usize,
        selector: char,
        selector_end: usize,
    ) -> Result<(char, NumberingScheme, usize), DirectiveError> {
        if selector != '0' {
            return registry::scheme(selector)
                .map(|scheme| (selector, scheme, selector_end))
                .ok_or(DirectiveError::UnknownSelector {
                    selector,
                    span: Span::new(percent, selector_end),
                });
        }

        let rest = &self.source[selector_end..];
        let digits_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let digits = &rest[..digits_len];
        let digits_end = selector_end + digits_len;

        if digits.is_empty() {
            return Err(DirectiveError::MissingWidthDigits {
                span: Span::new(percent, selector_end),
            });
        }

        let Some(width_selector) = rest[digits_len..].chars().next() else {
            return Err(DirectiveError::MissingWidthSelector {
                span: Span::new(percent, digits_end),
            });
        };
        let end = digits_end + width_selector.len_utf8();
        let span = Span::new(percent, end);

        let width = parse_width(digits).ok_or_else(|| DirectiveError::WidthOutOfRange {
            digits: digits.to_string(),
            span,
        })?;
        let scheme = registry::scheme(width_selector).ok_or(DirectiveError::UnknownSelector {
            selector: width_selector,
            span,
        })?;
        let scheme = scheme.with_width(width).ok_or(DirectiveError::NotWidthCapable {
            selector: width_selector,
            span,
        })?;

        Ok((width_selector, scheme, end))
    }
}

/// Parse a run of ASCII digits as a width in the ordinal's numeric range.
fn parse_width(digits: &str) -> Option<u16> {
    digits
        .parse::<Ordinal>()
        .ok()
        .and_then(|width| u16::try_from(width).ok())
}

/// Scan a template for its numbering directive.
///
/// Never fails: templates without a usable directive come back as [`Template::Literal`], and every `%` sequence that
/// was kept as literal text is listed in [`ParsedTemplate::rejected`].
///
/// ## Examples
/// ```rust
/// use nextname_syntax::template::{self, Template};
///
/// let parsed = template::parse("Probe %03d");
/// let directive = parsed.directive().unwrap();
/// assert_eq!(directive.prefix, "Probe ");
/// assert_eq!(directive.scheme.encode(7), "007");
///
/// assert_eq!(template::parse("100%% fuel").template, Template::Literal("100% fuel".to_string()));
/// ```
#[tracing::instrument(skip_all, fields(template_len = source.len()))]
pub fn parse(source: &str) -> ParsedTemplate {
    let parsed = Scanner::new(source).scan();
    for err in &parsed.rejected {
        tracing::debug!(%err, start = err.span().start, "directive kept as literal text");
    }
    for warning in &parsed.warnings {
        tracing::debug!(%warning, start = warning.span().start, "directive accepted with warning");
    }
    parsed
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(source: &str) -> Directive {
        match parse(source).template {
            Template::Directive(d) => d,
            Template::Literal(text) => panic!("expected a directive in {source:?}, got literal {text:?}"),
        }
    }

    fn literal(source: &str) -> String {
        match parse(source).template {
            Template::Literal(text) => text,
            Template::Directive(d) => panic!("expected no directive in {source:?}, got {d:?}"),
        }
    }

    #[test]
    fn test_plain_text_is_literal() {
        assert_eq!(literal(""), "");
        assert_eq!(literal("some"), "some");
        assert!(parse("some").rejected.is_empty());
    }

    #[test]
    fn test_escapes_collapse_in_literal() {
        assert_eq!(literal("escape%%"), "escape%");
        assert_eq!(literal("%%escape"), "%escape");
        assert_eq!(literal("es%%ca%%pe"), "es%ca%pe");
    }

    #[test]
    fn test_trailing_percent_is_literal() {
        let parsed = parse("percent%");
        assert_eq!(parsed.template, Template::Literal("percent%".to_string()));
        assert_eq!(
            parsed.rejected,
            vec![DirectiveError::DanglingPercent { span: Span::new(7, 8) }]
        );
    }

    #[test]
    fn test_simple_directive() {
        let d = directive("Foo %d");
        assert_eq!(d.prefix, "Foo ");
        assert_eq!(d.selector, 'd');
        assert_eq!(d.suffix, "");
        assert_eq!(d.span, Span::new(4, 6));
        assert_eq!(d.scheme, registry::scheme('d').unwrap());
    }

    #[test]
    fn test_directive_with_prefix_and_suffix() {
        let d = directive("RomE %RX");
        assert_eq!(d.prefix, "RomE ");
        assert_eq!(d.suffix, "X");
        assert_eq!(d.selector, 'R');
    }

    #[test]
    fn test_only_first_directive_counts() {
        let d = directive("%d NumG %d");
        assert_eq!(d.prefix, "");
        assert_eq!(d.suffix, " NumG %d");
    }

    #[test]
    fn test_suffix_escapes_collapse() {
        let d = directive("es%%cape %d%%");
        assert_eq!(d.prefix, "es%cape ");
        assert_eq!(d.suffix, "%");
    }

    #[test]
    fn test_width_directive() {
        let d = directive("NumD %05d");
        assert_eq!(d.prefix, "NumD ");
        assert_eq!(d.selector, 'd');
        assert_eq!(d.scheme.width(), Some(5));
        assert_eq!(d.span, Span::new(5, 9));
        // the registry entry is untouched
        assert_eq!(registry::scheme('d').unwrap().width(), Some(0));
    }

    #[test]
    fn test_width_directive_hex_and_binary() {
        assert_eq!(directive("HexC %03X").scheme.encode(241), "0F1");
        assert_eq!(directive("%08B").scheme.encode(5), "00000101");
        assert_eq!(directive("%08b").scheme.encode(5), "101");
    }

    #[test]
    fn test_width_on_shortest_binary_warns() {
        let parsed = parse("x%08b");
        assert_eq!(parsed.directive().unwrap().scheme.encode(2), "10");
        assert!(parsed.rejected.is_empty());
        assert_eq!(
            parsed.warnings,
            vec![DirectiveError::WidthIgnored {
                selector: 'b',
                span: Span::new(1, 5)
            }]
        );
        assert!(parse("%08B").warnings.is_empty());
        assert!(parse("%00b").warnings.is_empty());
        assert!(parse("%b").warnings.is_empty());
    }

    #[test]
    fn test_width_without_digits_is_literal() {
        let parsed = parse("NumI %0 d");
        assert_eq!(parsed.template, Template::Literal("NumI %0 d".to_string()));
        assert_eq!(
            parsed.rejected,
            vec![DirectiveError::MissingWidthDigits { span: Span::new(5, 7) }]
        );
        assert_eq!(literal("%0d"), "%0d");
    }

    #[test]
    fn test_width_without_selector_is_literal() {
        let parsed = parse("x %05");
        assert_eq!(parsed.template, Template::Literal("x %05".to_string()));
        assert_eq!(
            parsed.rejected,
            vec![DirectiveError::MissingWidthSelector { span: Span::new(2, 5) }]
        );
    }

    #[test]
    fn test_width_on_non_numeral_is_literal() {
        let parsed = parse("%02R");
        assert_eq!(parsed.template, Template::Literal("%02R".to_string()));
        assert_eq!(
            parsed.rejected,
            vec![DirectiveError::NotWidthCapable {
                selector: 'R',
                span: Span::new(0, 4)
            }]
        );
    }

    #[test]
    fn test_width_out_of_range_is_literal() {
        let parsed = parse("%040000d");
        assert_eq!(parsed.template, Template::Literal("%040000d".to_string()));
        assert!(matches!(
            parsed.rejected.as_slice(),
            [DirectiveError::WidthOutOfRange { digits, .. }] if digits == "40000"
        ));
        assert_eq!(directive("%032767d").scheme.width(), Some(32767));
    }

    #[test]
    fn test_rejected_directive_then_valid_one() {
        let parsed = parse("a%qb%dc");
        let d = parsed.directive().unwrap();
        assert_eq!(d.prefix, "a%qb");
        assert_eq!(d.suffix, "c");
        assert_eq!(
            parsed.rejected,
            vec![DirectiveError::UnknownSelector {
                selector: 'q',
                span: Span::new(1, 3)
            }]
        );
    }

    #[test]
    fn test_rejected_selector_is_not_rescanned() {
        // `%%` after a rejected `%q` is still an escape, and the `q` is not reconsidered
        let d = directive("%q%%%d");
        assert_eq!(d.prefix, "%q%");
        assert_eq!(d.suffix, "");
    }

    #[test]
    fn test_rejected_percent_does_not_start_escape() {
        // "%%" pairs left to right: "%%" then "%d"
        let d = directive("%%%d");
        assert_eq!(d.prefix, "%");
        // a rejected "%0" leaves the following digits as plain text
        let d = directive("%0x%d");
        assert_eq!(d.prefix, "%0x");
    }

    #[test]
    fn test_multibyte_text() {
        let d = directive("Ωμέγα %G ü");
        assert_eq!(d.prefix, "Ωμέγα ");
        assert_eq!(d.suffix, " ü");
        let parsed = parse("Δ%é");
        assert_eq!(parsed.template, Template::Literal("Δ%é".to_string()));
        assert_eq!(
            parsed.rejected,
            vec![DirectiveError::UnknownSelector {
                selector: 'é',
                span: Span::new(2, 5)
            }]
        );
    }
}
