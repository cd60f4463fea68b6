//! Message formatting helpers for chat output.

/// Longest message the chat service accepts, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

fn emoji_token(c: char) -> Option<String> {
    let named = match c {
        ' ' => " ",
        '0' => ":zero:",
        '1' => ":one:",
        '2' => ":two:",
        '3' => ":three:",
        '4' => ":four:",
        '5' => ":five:",
        '6' => ":six:",
        '7' => ":seven:",
        '8' => ":eight:",
        '9' => ":nine:",
        '!' => ":exclamation:",
        '?' => ":question:",
        'a'..='z' => return Some(format!(":regional_indicator_{}:", c)),
        _ => return None,
    };
    Some(named.to_string())
}

/// Spells `text` out in large emoji.
///
/// Input is lowercased and anything outside `a-z`, `0-9`, space, `!` and `?`
/// is dropped. Output stops at the last whole token that fits in
/// [`MESSAGE_LIMIT`].
pub fn emojify(text: &str) -> String {
    let mut out = String::new();

    for token in text.to_lowercase().chars().filter_map(emoji_token) {
        // tokens are ascii, so byte length is character count
        if out.len() + token.len() > MESSAGE_LIMIT {
            break;
        }
        out.push_str(&token);
    }

    out
}

/// Backslash-escapes the characters `| \ { } ( ) [ ] ^ $ + * ? .` so `text`
/// can be embedded literally in a regular expression.
pub fn regex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if matches!(
            c,
            '|' | '\\' | '{' | '}' | '(' | ')' | '[' | ']' | '^' | '$' | '+' | '*' | '?' | '.'
        ) {
            out.push('\\');
        }
        out.push(c);
    }

    out
}
