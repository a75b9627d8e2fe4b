//! Diagnostics for template directives that were kept as literal text.
//!
//! A rejected directive never fails parsing; the offending characters simply stay in the output. These values exist
//! so tooling can explain *why* a template produced no substitution.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Byte range into the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Why a `%` sequence was not treated as a numbering directive, or why part of it has no effect.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DirectiveError {
    #[error("unknown numbering selector `{selector}`")]
    #[diagnostic(
        code(nextname::template::unknown_selector),
        help("selectors are d x X b B r R a A g G w W p P l L; write `%%` for a literal percent sign")
    )]
    UnknownSelector {
        selector: char,
        #[label("kept as literal text")]
        span: Span,
    },

    #[error("width directive has no digits")]
    #[diagnostic(
        code(nextname::template::missing_width),
        help("put the width between `%0` and the selector, e.g. `%05d`")
    )]
    MissingWidthDigits {
        #[label("kept as literal text")]
        span: Span,
    },

    #[error("width directive has no selector")]
    #[diagnostic(
        code(nextname::template::missing_width_selector),
        help("end the width form with d, x, X, b or B, e.g. `%05d`")
    )]
    MissingWidthSelector {
        #[label("kept as literal text")]
        span: Span,
    },

    #[error("width `{digits}` is out of range")]
    #[diagnostic(code(nextname::template::width_out_of_range), help("widths must be at most 32767"))]
    WidthOutOfRange {
        digits: String,
        #[label("kept as literal text")]
        span: Span,
    },

    #[error("selector `{selector}` does not accept a width")]
    #[diagnostic(
        code(nextname::template::not_width_capable),
        help("only d, x, X, b and B take the `%0<width>` form")
    )]
    NotWidthCapable {
        selector: char,
        #[label("kept as literal text")]
        span: Span,
    },

    #[error("selector `{selector}` ignores the width")]
    #[diagnostic(
        code(nextname::template::width_ignored),
        severity(Warning),
        help("`%b` always writes the shortest binary form; use `%0<width>B` for zero padding")
    )]
    WidthIgnored {
        selector: char,
        #[label("width has no effect")]
        span: Span,
    },

    #[error("trailing `%` has no selector")]
    #[diagnostic(
        code(nextname::template::dangling_percent),
        severity(Warning),
        help("write `%%` for a literal percent sign")
    )]
    DanglingPercent {
        #[label("kept as literal text")]
        span: Span,
    },
}

impl DirectiveError {
    /// Return the template bytes the diagnostic points at.
    pub fn span(&self) -> Span {
        match self {
            DirectiveError::UnknownSelector { span, .. }
            | DirectiveError::MissingWidthDigits { span }
            | DirectiveError::MissingWidthSelector { span }
            | DirectiveError::WidthOutOfRange { span, .. }
            | DirectiveError::NotWidthCapable { span, .. }
            | DirectiveError::WidthIgnored { span, .. }
            | DirectiveError::DanglingPercent { span } => *span,
        }
    }

    /// Stable short name, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            DirectiveError::UnknownSelector { .. } => "unknown_selector",
            DirectiveError::MissingWidthDigits { .. } => "missing_width",
            DirectiveError::MissingWidthSelector { .. } => "missing_width_selector",
            DirectiveError::WidthOutOfRange { .. } => "width_out_of_range",
            DirectiveError::NotWidthCapable { .. } => "not_width_capable",
            DirectiveError::WidthIgnored { .. } => "width_ignored",
            DirectiveError::DanglingPercent { .. } => "dangling_percent",
        }
    }
}
