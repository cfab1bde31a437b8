use std::collections::HashSet;

/// Splits comma-separated text into trimmed tokens.
pub fn split_tokens(input: &str) -> Vec<String> {
    input.split(',').map(|token| token.trim().to_string()).collect()
}

/// Keeps the first occurrence of every token, preserving order.
pub fn remove_dups<S: AsRef<str>>(input: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for item in input {
        let item = item.as_ref();
        if seen.insert(item) {
            result.push(item.to_string());
        }
    }

    result
}

pub fn render_dedup(input: &str) -> String {
    let unique = remove_dups(&split_tokens(input));
    tracing::debug!("Kept {} unique tokens", unique.len());
    format!("Result: {}", unique.join(", "))
}
