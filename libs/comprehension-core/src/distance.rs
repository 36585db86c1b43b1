//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions or substitutions
/// needed to turn `a` into `b`.
///
/// Works on `char`s, not bytes, so accented letters count as one edit.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Keep the row as short as the shorter input.
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    let n = short.len();
    if n == 0 {
        return long.len();
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for (i, long_char) in long.iter().enumerate() {
        curr[0] = i + 1;

        for j in 1..=n {
            let cost = usize::from(*long_char != short[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
