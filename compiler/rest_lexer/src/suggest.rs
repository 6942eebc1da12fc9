//! "Did you mean?" lookup for misspelled methods and variable names.
//!
//! Levenshtein distance with a threshold that grows with the input length,
//! so short names are never matched against unrelated candidates.

/// Levenshtein edit distance between two strings, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    // Two-row optimization instead of the full matrix
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

fn default_threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        n => (n / 2).min(5),
    }
}

/// The closest candidate within the length-based threshold.
///
/// Ties keep the first candidate seen, so callers pass candidates in a
/// stable order to keep results deterministic.
pub fn suggest_similar<'a>(
    name: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let threshold = default_threshold(name.len());
    if threshold == 0 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        if name.len().abs_diff(candidate.len()) > threshold {
            continue;
        }
        let distance = edit_distance(name, candidate);
        if distance > threshold {
            continue;
        }
        match best {
            Some((_, best_dist)) if distance >= best_dist => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(s, _)| s)
}
