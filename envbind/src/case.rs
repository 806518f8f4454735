//! Identifier to UPPER_SNAKE_CASE conversion

/// Convert an identifier-like string to upper snake case.
///
/// Accepts PascalCase, camelCase, space-separated, and hyphen-separated
/// input. Word boundaries become single underscores and the result is
/// uppercased, so `"MyTest"`, `"my-test"`, and `"my Test"` all map to
/// `"MY_TEST"`. Used to derive environment variable names from field
/// identifiers in lazy mode.
///
/// # Example
///
/// ```rust
/// assert_eq!(envbind::to_upper_snake_case("listenAddr"), "LISTEN_ADDR");
/// assert_eq!(envbind::to_upper_snake_case("HTTPServer"), "HTTP_SERVER");
/// ```
pub fn to_upper_snake_case(input: &str) -> String {
    let chars: Vec<char> = input
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect();

    let mut snake = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let starts_word = chars
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || starts_word {
                snake.push('_');
            }
        }
        snake.push(c);
    }

    // Collapse underscore runs while uppercasing
    let mut out = String::with_capacity(snake.len());
    let mut prev_underscore = false;
    for c in snake.chars() {
        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.extend(c.to_uppercase());
            prev_underscore = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated() {
        assert_eq!(to_upper_snake_case("my-test"), "MY_TEST");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_upper_snake_case("MyTest"), "MY_TEST");
    }

    #[test]
    fn test_space_separated() {
        assert_eq!(to_upper_snake_case("my Test"), "MY_TEST");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_upper_snake_case("onlyLazy"), "ONLY_LAZY");
    }

    #[test]
    fn test_snake_identifier_unchanged() {
        assert_eq!(to_upper_snake_case("only_lazy"), "ONLY_LAZY");
    }

    #[test]
    fn test_already_upper_snake() {
        assert_eq!(to_upper_snake_case("MY_TEST"), "MY_TEST");
    }

    #[test]
    fn test_acronym_boundary() {
        assert_eq!(to_upper_snake_case("HTTPServer"), "HTTP_SERVER");
    }

    #[test]
    fn test_digit_boundary() {
        assert_eq!(to_upper_snake_case("option2Value"), "OPTION2_VALUE");
    }

    #[test]
    fn test_mixed_separators_collapse() {
        assert_eq!(to_upper_snake_case("my- Test"), "MY_TEST");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(to_upper_snake_case("Test"), "TEST");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_upper_snake_case(""), "");
    }
}
