//! Rule-based Indonesian stemmer.
//!
//! Strips inflectional particles, possessive pronouns and derivational
//! suffixes, then up to two layers of derivational prefixes, applying the
//! usual nasal-assimilation recoding for `meN-` / `peN-`. There is no root
//! dictionary, so over-stemming of short roots is expected.

const MIN_STEM_LEN: usize = 3;

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const DERIVATIONAL_SUFFIXES: &[&str] = &["kan", "an", "i"];

/// Reduces an Indonesian word to an approximate root.
pub fn stem(word: &str) -> String {
    if word.len() <= MIN_STEM_LEN || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }

    let mut current = word.to_string();
    for group in [PARTICLES, POSSESSIVES, DERIVATIONAL_SUFFIXES] {
        current = strip_suffix(&current, group);
    }
    for _ in 0..2 {
        match strip_prefix(&current) {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

fn strip_suffix(word: &str, suffixes: &[&str]) -> String {
    for suffix in suffixes {
        if let Some(rest) = word.strip_suffix(suffix) {
            if rest.len() >= MIN_STEM_LEN {
                return rest.to_string();
            }
        }
    }
    word.to_string()
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Removes one derivational prefix, or returns `None` if none applies.
fn strip_prefix(word: &str) -> Option<String> {
    let b = word.as_bytes();
    let at = |i: usize| b.get(i).copied().unwrap_or(b'\0');

    let candidate = if word.starts_with("di") || word.starts_with("ke") || word.starts_with("se")
    {
        word[2..].to_string()
    } else if word.starts_with("ber") || word.starts_with("ter") || word.starts_with("per") {
        word[3..].to_string()
    } else if word.starts_with("meng") || word.starts_with("peng") {
        word[4..].to_string()
    } else if word.starts_with("meny") || word.starts_with("peny") {
        if is_vowel(at(4)) {
            format!("s{}", &word[4..])
        } else {
            word[4..].to_string()
        }
    } else if word.starts_with("mem") || word.starts_with("pem") {
        if is_vowel(at(3)) {
            format!("p{}", &word[3..])
        } else {
            word[3..].to_string()
        }
    } else if word.starts_with("men") || word.starts_with("pen") {
        if is_vowel(at(3)) {
            format!("t{}", &word[3..])
        } else {
            word[3..].to_string()
        }
    } else if word.starts_with("me") || word.starts_with("pe") || word.starts_with("be") {
        word[2..].to_string()
    } else {
        return None;
    };

    (candidate.len() >= MIN_STEM_LEN).then_some(candidate)
}
