// WHY: standalone token normalization shared by the builder and the abbreviation set
// Kept free of state so the same rules apply to document tokens and user-supplied abbreviations

/// Map ASCII letters to lowercase; every other character passes through unchanged
pub fn to_lowercase(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Remove every character that is neither an ASCII letter nor a period, keeping order
pub fn strip_non_alpha_or_period(text: &str) -> String {
    text.chars().filter(|&ch| is_word_char(ch)).collect()
}

/// Lowercase then strip a raw token into its normalized word form
pub fn normalize_token(token: &str) -> String {
    let mut result = String::with_capacity(token.len());
    normalize_token_into(token, &mut result);
    result
}

/// Normalize token into supplied buffer to avoid allocation
/// WHY: the builder reuses one buffer for every token in a document
pub fn normalize_token_into(token: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(token.len());

    // Non-ASCII characters never survive the strip, so ASCII folding is enough
    for ch in token.chars() {
        if is_word_char(ch) {
            buffer.push(ch.to_ascii_lowercase());
        }
    }
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch == '.' || ch.is_ascii_alphabetic()
}
