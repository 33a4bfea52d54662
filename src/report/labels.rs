//! @ai:module:intent Word wrapping for long axis labels
//! @ai:module:layer infrastructure
//! @ai:module:public_api wrap_label
//! @ai:module:stateless true

/// @ai:intent Wrap a label into lines of at most `width` characters
/// @ai:effects pure
///
/// Splits on whitespace and after hyphens inside compound words. A word
/// longer than `width` fills the rest of the current line and is then broken.
/// An empty label yields no lines.
pub fn wrap_label(label: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current: Vec<char> = Vec::new();

    for word in label.split_whitespace() {
        for (i, piece) in hyphen_pieces(word).into_iter().enumerate() {
            let sep = usize::from(i == 0 && !current.is_empty());

            if current.len() + sep + piece.len() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.extend(&piece);
                continue;
            }

            if piece.len() <= width {
                lines.push(current.drain(..).collect());
                current = piece;
                continue;
            }

            let mut rest = piece.as_slice();
            if !current.is_empty() {
                let space_left = width.saturating_sub(current.len() + sep);
                if space_left > 0 {
                    if sep == 1 {
                        current.push(' ');
                    }
                    current.extend(&rest[..space_left]);
                    rest = &rest[space_left..];
                }
                lines.push(current.drain(..).collect());
            }

            let mut chunks = rest.chunks(width).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.to_vec();
                }
            }
        }
    }

    if !current.is_empty() {
        lines.push(current.into_iter().collect());
    }

    lines
}

/// Split a word after each hyphen that joins two alphanumeric parts.
fn hyphen_pieces(word: &str) -> Vec<Vec<char>> {
    let chars: Vec<char> = word.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    for i in 1..chars.len().saturating_sub(1) {
        if chars[i] == '-' && chars[i - 1].is_alphanumeric() && chars[i + 1].is_alphanumeric() {
            pieces.push(chars[start..=i].to_vec());
            start = i + 1;
        }
    }
    pieces.push(chars[start..].to_vec());

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_label_unchanged() {
        assert_eq!(wrap_label("CLUB 1893", 15), vec!["CLUB 1893"]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        assert_eq!(
            wrap_label("Mercedes-Benz Business Center - Loge", 15),
            vec!["Mercedes-Benz", "Business Center", "- Loge"]
        );
    }

    #[test]
    fn test_lines_respect_width() {
        let label = "Ich nutze Tageskarten (ohne Dauerkarten-Arrangement) und wurde eingeladen";

        let without_spaces = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();

        for width in [10, 25, 35] {
            let lines = wrap_label(label, width);
            assert!(lines.iter().all(|l| l.chars().count() <= width), "{lines:?}");
            assert_eq!(without_spaces(&lines.concat()), without_spaces(label));
        }
    }

    #[test]
    fn test_breaks_after_hyphen() {
        assert_eq!(
            wrap_label("VIP-Dauerkarteninhaber Loge", 20),
            vec!["VIP-", "Dauerkarteninhaber", "Loge"]
        );
        assert_eq!(
            wrap_label("Dauerkarten-Arrangement", 30),
            vec!["Dauerkarten-Arrangement"]
        );
    }

    #[test]
    fn test_breaks_long_words() {
        assert_eq!(
            wrap_label("Dauerkarteninhaber", 8),
            vec!["Dauerkar", "teninhab", "er"]
        );
    }

    #[test]
    fn test_long_word_fills_current_line() {
        assert_eq!(
            wrap_label("ab Dauerkarteninhaber", 8),
            vec!["ab Dauer", "kartenin", "haber"]
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(wrap_label("Qualität Würde", 8), vec!["Qualität", "Würde"]);
    }

    #[test]
    fn test_empty_label() {
        assert!(wrap_label("", 10).is_empty());
        assert!(wrap_label("   ", 10).is_empty());
    }
}
