/// Operators, longest first within each length so lookups can try 3, 2 then 1
/// bytes.
const OPERATORS: [&str; 33] = [
    "**=", "//=", ">>=", "<<=", //
    "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "**", "//", "<<",
    ">>", "=>", //
    "+", "-", "*", "/", "%", "=", "<", ">", "&", "|", "^", "~",
];

/// `->` is listed for completeness but is never reached: `-` always matches
/// as an operator first.
const DELIMITERS: [&str; 13] = ["(", ")", "[", "]", "{", "}", ",", ":", ".", ";", "@", "=", "->"];

/// Byte length of the longest operator at the start of `rest`.
pub fn operator_len(rest: &str) -> Option<usize> {
    (1..=3).rev().find(|&len| {
        rest.get(..len)
            .is_some_and(|candidate| OPERATORS.contains(&candidate))
    })
}

pub fn is_delimiter(ch: char) -> bool {
    let mut buf = [0u8; 4];
    DELIMITERS.contains(&&*ch.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_longest_operator() {
        assert_eq!(operator_len("**= b"), Some(3));
        assert_eq!(operator_len("** b"), Some(2));
        assert_eq!(operator_len("* b"), Some(1));
        assert_eq!(operator_len("=> x"), Some(2));
    }

    #[test]
    fn non_operators_do_not_match() {
        assert_eq!(operator_len("(a)"), None);
        assert_eq!(operator_len("é"), None);
        assert_eq!(operator_len(""), None);
    }

    #[test]
    fn delimiters_are_single_chars() {
        assert!(is_delimiter('('));
        assert!(is_delimiter('@'));
        assert!(!is_delimiter('-'));
        assert!(!is_delimiter('?'));
    }
}
