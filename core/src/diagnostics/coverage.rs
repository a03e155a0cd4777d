use crate::errors::CoverageError;
use crate::lexer::token::Token;

/// Verify that `tokens` cover `source` exactly: in order, contiguous, non-empty,
/// and each value equal to the bytes its span points at.
pub fn check(source: &str, tokens: &[Token<'_>]) -> Result<(), CoverageError> {
    let mut expected = 0;

    for token in tokens {
        let (start, end) = (token.start(), token.end());

        if start > expected {
            return Err(CoverageError::new(
                format!("bytes {expected}..{start} are not covered by any token"),
                expected,
                start - expected,
            ));
        }
        if start < expected {
            return Err(CoverageError::new(
                format!("{} token at {start} overlaps the previous token", token.kind),
                start,
                expected - start,
            ));
        }
        if end <= start {
            return Err(CoverageError::new(
                format!("empty {} token at {start}", token.kind),
                start,
                0,
            ));
        }
        if source.get(start..end) != Some(token.value) {
            return Err(CoverageError::new(
                format!(
                    "{} token value does not match source bytes {start}..{end}",
                    token.kind
                ),
                start,
                end.min(source.len()).saturating_sub(start),
            ));
        }

        expected = end;
    }

    if expected != source.len() {
        return Err(CoverageError::new(
            format!(
                "bytes {expected}..{} are not covered by any token",
                source.len()
            ),
            expected,
            source.len().saturating_sub(expected),
        ));
    }

    Ok(())
}
