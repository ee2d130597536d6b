//! Human-readable labels for graph nodes and edges.

/// Literals longer than this many characters are truncated.
pub const LITERAL_LABEL_MAX: usize = 24;
/// Characters kept from a truncated literal, before the ellipsis.
pub const LITERAL_LABEL_KEEP: usize = 21;
pub const ELLIPSIS: char = '…';

/// Shorten a term for display.
///
/// Resources keep the part after the last `#` or `/`, unless there is no
/// such delimiter or it is the final character. Literals are truncated to
/// [`LITERAL_LABEL_KEEP`] characters plus [`ELLIPSIS`] once they exceed
/// [`LITERAL_LABEL_MAX`]. Lengths are counted in characters, not bytes.
pub fn shrink(value: &str, is_literal: bool) -> String {
    if is_literal {
        return shrink_literal(value);
    }

    match value.rfind(['#', '/']) {
        Some(cut) if cut + 1 < value.len() => value[cut + 1..].to_string(),
        _ => value.to_string(),
    }
}

fn shrink_literal(value: &str) -> String {
    if value.chars().count() <= LITERAL_LABEL_MAX {
        return value.to_string();
    }
    let mut label: String = value.chars().take(LITERAL_LABEL_KEEP).collect();
    label.push(ELLIPSIS);
    label
}
