use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::packet::Packet;

#[derive(Debug, Error, Diagnostic)]
pub enum SignalError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("Divider packet {0} not found in sorted packets")]
    #[diagnostic(code(distress_signal::missing_divider))]
    MissingDivider(Packet),
}

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse packets")]
#[diagnostic(
    code(distress_signal::parse_error),
    help("Input must be pairs of lines, each a bracketed, comma-separated list of integers and lists, e.g. [1,[2,3]]")
)]
pub struct ParseError {
    #[source_code]
    pub src: String,
    #[label("Parsing stopped here")]
    pub span: SourceSpan,
    pub kind: nom::error::ErrorKind,
}

impl ParseError {
    /// Builds an error pointing at the first non-whitespace character at or
    /// after `offset`.
    pub(crate) fn at(src: &str, offset: usize, kind: nom::error::ErrorKind) -> Self {
        let rest = src.get(offset..).unwrap_or_default();
        let skipped = rest.len() - rest.trim_start().len();
        let start = (offset + skipped).min(src.len());
        let len = usize::from(start < src.len());

        Self {
            src: src.to_string(),
            span: (start, len).into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::error::ErrorKind;

    #[test]
    fn test_parse_variant_forwards_diagnostic() {
        let error: SignalError = "[1,".parse::<Packet>().unwrap_err().into();
        assert_eq!(
            Some("distress_signal::parse_error".to_string()),
            error.code().map(|code| code.to_string())
        );
        assert_eq!("Failed to parse packets", error.to_string());
    }

    #[test]
    fn test_span_skips_whitespace() {
        let src = "[1]\n[2]\n\n  x";
        let error = ParseError::at(src, 7, ErrorKind::Eof);
        assert_eq!(11, error.span.offset());
        assert_eq!(1, error.span.len());
    }

    #[test]
    fn test_span_at_end_of_input() {
        let src = "[1,2";
        let error = ParseError::at(src, 4, ErrorKind::Char);
        assert_eq!(4, error.span.offset());
        assert_eq!(0, error.span.len());
    }
}
