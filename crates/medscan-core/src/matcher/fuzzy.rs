//! Fuzzy token matching for noisy OCR text.

/// Order-insensitive substring heuristic for comparing two tokens.
///
/// True when the tokens are equal, when either contains the other, or when
/// either test passes after stripping everything outside `[a-z0-9]` from
/// both. Inputs are lower-cased before comparison.
///
/// This is deliberately a cheap containment check, not an edit-distance
/// metric: it tolerates OCR punctuation noise and minor garbling, at the
/// accepted cost of very short tokens matching broadly.
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b || a.contains(&b) || b.contains(&a) {
        return true;
    }

    let clean_a = strip_special(&a);
    let clean_b = strip_special(&b);

    clean_a == clean_b || clean_a.contains(&clean_b) || clean_b.contains(&clean_a)
}

/// Drop every character outside `[a-z0-9]`.
fn strip_special(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
