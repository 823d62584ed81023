/// Levenshtein distance over Unicode scalar values.
pub fn levenshtein(lhs: &str, rhs: &str) -> usize {
    let lhs = lhs.chars().collect::<Vec<_>>();
    let rhs = rhs.chars().collect::<Vec<_>>();

    if lhs.is_empty() {
        return rhs.len();
    }

    // Single row, rolled forward per character of `lhs`.
    let mut row = (0..=rhs.len()).collect::<Vec<usize>>();

    for (i, a) in lhs.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, b) in rhs.iter().enumerate() {
            let cost = if a == b { 0 } else { 1 };
            let value = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = value;
        }
    }

    row[rhs.len()]
}

#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
