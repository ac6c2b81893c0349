use glossa_types::LookupKey;
use unicode_normalization::UnicodeNormalization;

/// Characters removed before a lookup, besides whitespace
const PUNCTUATION: &[char] = &[
    ',', '.', '?', '!', ':', ';', '"', '\'', '`', '“', '”', '‘', '’', '«', '»', '„', '(', ')',
    '[', ']', '{', '}', '<', '>',
];

fn is_stripped(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.contains(&c)
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '’'
}

/// Drop an English possessive ("Winston's", "Winston’s")
fn strip_possessive(word: &str) -> &str {
    let mut chars = word.char_indices().rev();
    match (chars.next(), chars.next()) {
        (Some((_, s)), Some((idx, apostrophe)))
            if (s == 's' || s == 'S') && is_apostrophe(apostrophe) && idx > 0 =>
        {
            &word[..idx]
        }
        _ => word,
    }
}

/// Map the raw text of a clicked unit to its lookup key.
///
/// Returns `None` when nothing is left after stripping, in which case the
/// click must not trigger a lookup.
pub fn normalize(raw: &str) -> Option<LookupKey> {
    let text: String = raw.nfkc().collect();
    let trimmed = text.trim_matches(is_stripped);
    let trimmed = strip_possessive(trimmed).trim_matches(is_stripped);

    let chars: Vec<char> = trimmed.chars().collect();
    let mut key = String::with_capacity(trimmed.len());

    for (i, &c) in chars.iter().enumerate() {
        // Contractions keep their apostrophe: "don't"
        if is_apostrophe(c)
            && i > 0
            && i + 1 < chars.len()
            && chars[i - 1].is_alphabetic()
            && chars[i + 1].is_alphabetic()
        {
            key.push('\'');
            continue;
        }

        if !is_stripped(c) {
            key.push(c);
        }
    }

    let key = key.to_lowercase();
    LookupKey::new(key.trim())
}
