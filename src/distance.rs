// Pet Lookup Edit Distance
// Levenshtein distance between two normalized names

/// Minimum number of single-character insertions, deletions or
/// substitutions that turn `a` into `b`
///
/// Characters are compared as Unicode scalar values. Runs the full
/// dynamic-programming recurrence with two rolling rows sized to the
/// shorter input, so `O(len(a) * len(b))` time and `O(min)` space.
///
/// # Examples
/// ```
/// # use pet_lookup::distance::edit_distance;
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "owl"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Columns track the shorter string
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, cl) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cs) in short.iter().enumerate() {
            let cost = if cl == cs { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Lowercase and trim surrounding whitespace; inner spacing is kept
#[inline]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
