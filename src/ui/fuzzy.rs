//! Fuzzy filtering for the terminal selector
//!
//! A query is split on whitespace; every term must appear in the candidate as
//! an ordered, case-insensitive subsequence. Tighter matches rank first.

/// Score one term against a candidate; lower is tighter, `None` is no match
fn term_score(term: &[char], candidate: &[char]) -> Option<usize> {
    let mut best: Option<usize> = None;

    // Try every start position of the first character and keep the shortest span
    for start in 0..candidate.len() {
        if candidate[start] != term[0] {
            continue;
        }
        let mut pos = start;
        let mut matched = 1;
        while matched < term.len() {
            pos += 1;
            if pos >= candidate.len() {
                break;
            }
            if candidate[pos] == term[matched] {
                matched += 1;
            }
        }
        if matched == term.len() {
            let span = pos - start + 1;
            best = Some(best.map_or(span, |b| b.min(span)));
        }
    }

    best
}

/// Score a whole query against a candidate
pub fn score(query: &str, candidate: &str) -> Option<usize> {
    let candidate: Vec<char> = candidate.to_lowercase().chars().collect();
    let mut total = 0;
    for term in query.split_whitespace() {
        let term: Vec<char> = term.to_lowercase().chars().collect();
        total += term_score(&term, &candidate)?;
    }
    Some(total)
}

/// Indices of matching candidates, best first; ties keep their input order
pub fn filter(query: &str, candidates: &[String]) -> Vec<usize> {
    let mut scored: Vec<(usize, usize)> = candidates
        .iter()
        .enumerate()
        .filter_map(|(i, c)| score(query, c).map(|s| (s, i)))
        .collect();
    scored.sort_by_key(|&(s, _)| s);
    scored.into_iter().map(|(_, i)| i).collect()
}

/// Result of one line of selector input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Exactly one candidate, by its index into the full list
    Picked(usize),
    /// Several candidates still match; these become the visible ones
    Narrowed(Vec<usize>),
    NoMatch,
}

/// Apply one line of input to the currently visible candidates
///
/// A number from 1 to `visible.len()` picks by position in the shown list.
/// Anything else is a query against the visible candidates only, so repeated
/// queries never widen the list.
pub fn narrow(input: &str, candidates: &[String], visible: &[usize]) -> Step {
    if let Ok(n) = input.trim().parse::<usize>() {
        if (1..=visible.len()).contains(&n) {
            return Step::Picked(visible[n - 1]);
        }
    }

    let shown: Vec<String> = visible.iter().map(|&i| candidates[i].clone()).collect();
    let matches: Vec<usize> = filter(input, &shown)
        .into_iter()
        .map(|j| visible[j])
        .collect();

    match matches.len() {
        0 => Step::NoMatch,
        1 => Step::Picked(matches[0]),
        _ => Step::Narrowed(matches),
    }
}
