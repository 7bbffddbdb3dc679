//! C++ identifier checks for catalog and schema names.

use crate::error::NameIssue;

/// Keywords and alternative tokens of C++20.
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Check that `name` can be used verbatim as a C++ type or enumerator name.
pub fn check_identifier(name: &str) -> Result<(), NameIssue> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(NameIssue::Empty)?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(NameIssue::BadStart);
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(NameIssue::BadCharacter(bad));
    }
    if CPP_KEYWORDS.contains(&name) {
        return Err(NameIssue::Keyword);
    }
    // [lex.name]: double underscores anywhere, or _ followed by an uppercase letter
    let underscore_upper = name.starts_with('_')
        && name[1..].starts_with(|c: char| c.is_ascii_uppercase());
    if name.contains("__") || underscore_upper {
        return Err(NameIssue::Reserved);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_identifiers() {
        assert_eq!(check_identifier("Expecting_an_identifier"), Ok(()));
        assert_eq!(check_identifier("_lower"), Ok(()));
        assert_eq!(check_identifier("x1"), Ok(()));
    }

    #[test]
    fn test_rejects_malformed_identifiers() {
        assert_eq!(check_identifier(""), Err(NameIssue::Empty));
        assert_eq!(check_identifier("1abc"), Err(NameIssue::BadStart));
        assert_eq!(
            check_identifier("Missing close"),
            Err(NameIssue::BadCharacter(' '))
        );
        assert_eq!(
            check_identifier("Dup-ID"),
            Err(NameIssue::BadCharacter('-'))
        );
        assert_eq!(check_identifier("Ünknown"), Err(NameIssue::BadStart));
    }

    #[test]
    fn test_rejects_keywords_and_reserved() {
        assert_eq!(check_identifier("struct"), Err(NameIssue::Keyword));
        assert_eq!(check_identifier("constexpr"), Err(NameIssue::Keyword));
        assert_eq!(check_identifier("a__b"), Err(NameIssue::Reserved));
        assert_eq!(check_identifier("_Upper"), Err(NameIssue::Reserved));
    }
}
