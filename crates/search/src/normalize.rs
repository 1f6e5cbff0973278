use unicode_normalization::UnicodeNormalization;

/// Folds text for accent- and case-insensitive comparison: NFKD
/// decomposition, then every non-ASCII character (combining marks
/// included) is dropped and the remainder lowercased.
pub fn fold(text: &str) -> String {
    text.nfkd()
        .filter(char::is_ascii)
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_and_case() {
        assert_eq!(fold("Período"), "periodo");
        assert_eq!(fold("MATRÍCULA"), "matricula");
        assert_eq!(fold("suspensão"), "suspensao");
        assert_eq!(fold("ção"), "cao");
    }

    #[test]
    fn keeps_digits_and_punctuation() {
        assert_eq!(fold("Art. 15, §2º"), "art. 15, 2o");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(fold(""), "");
    }
}
