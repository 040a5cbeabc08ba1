//! Byte-level string helpers.
//!
//! Everything here works on raw bytes with ASCII semantics: no locale,
//! no Unicode whitespace, no grapheme awareness. Delimiters are matched
//! literally, never as patterns.

/// Strips leading and trailing spaces, tabs, newlines and carriage returns.
///
/// Other ASCII whitespace (vertical tab, form feed) and non-ASCII
/// whitespace are kept.
///
/// # Examples
/// ```
/// use u_numkit::strings::trim;
/// assert_eq!(trim("  x y  "), "x y");
/// assert_eq!(trim("\t\r\n "), "");
/// assert_eq!(trim("\u{0b}a\u{0b}"), "\u{0b}a\u{0b}");
/// ```
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

/// Splits `s` on every literal occurrence of `delim`.
///
/// - An empty `s` gives an empty `Vec`.
/// - An empty `delim` gives one token per character, which is one token
///   per byte for ASCII input. Use [`split_bytes`] for per-byte tokens on
///   non-ASCII input.
/// - Otherwise occurrences are found left to right without overlap;
///   consecutive delimiters give empty tokens and a trailing delimiter
///   gives a trailing empty token.
///
/// Joining the tokens with `delim` reproduces `s` whenever `delim` is
/// non-empty.
///
/// # Examples
/// ```
/// use u_numkit::strings::split;
/// assert_eq!(split("a,,b,", ","), ["a", "", "b", ""]);
/// assert_eq!(split("abc", ""), ["a", "b", "c"]);
/// assert_eq!(split("abc", ";"), ["abc"]);
/// assert!(split("", ",").is_empty());
/// ```
pub fn split<'a>(s: &'a str, delim: &str) -> Vec<&'a str> {
    if s.is_empty() {
        return Vec::new();
    }
    if delim.is_empty() {
        return s
            .char_indices()
            .map(|(i, c)| &s[i..i + c.len_utf8()])
            .collect();
    }
    s.split(delim).collect()
}

/// Byte-slice version of [`split`].
///
/// With an empty `delim` every byte becomes its own one-byte token,
/// regardless of encoding.
///
/// # Examples
/// ```
/// use u_numkit::strings::split_bytes;
/// let parts = split_bytes(b"k=v==", b"=");
/// let expected: [&[u8]; 4] = [b"k", b"v", b"", b""];
/// assert_eq!(parts, expected);
/// ```
pub fn split_bytes<'a>(s: &'a [u8], delim: &[u8]) -> Vec<&'a [u8]> {
    if s.is_empty() {
        return Vec::new();
    }
    if delim.is_empty() {
        return s.chunks(1).collect();
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + delim.len() <= s.len() {
        if &s[i..i + delim.len()] == delim {
            tokens.push(&s[start..i]);
            i += delim.len();
            start = i;
        } else {
            i += 1;
        }
    }
    tokens.push(&s[start..]);
    tokens
}

/// Whether `s` begins with `prefix`, compared byte for byte.
///
/// # Examples
/// ```
/// use u_numkit::strings::starts_with;
/// assert!(starts_with("foobar", "foo"));
/// assert!(starts_with("foobar", ""));
/// assert!(!starts_with("fo", "foo"));
/// ```
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.as_bytes().starts_with(prefix.as_bytes())
}

/// Whether `s` ends with `suffix`, compared byte for byte.
///
/// # Examples
/// ```
/// use u_numkit::strings::ends_with;
/// assert!(ends_with("foobar", "bar"));
/// assert!(!ends_with("foobar", "baz"));
/// ```
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.as_bytes().ends_with(suffix.as_bytes())
}
