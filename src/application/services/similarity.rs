use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use crate::domain::{MatchResult, Workpaper};

/// Order-insensitive fuzzy similarity between two strings on a 0-100 scale.
///
/// Both strings are tokenized on whitespace into sets of unique words. The
/// sorted intersection, the intersection plus the words unique to `a`, and
/// the intersection plus the words unique to `b` are rejoined with spaces
/// and scored pairwise with a matching-blocks sequence ratio; the direct
/// pair is scored as well, and the maximum of the four wins. Empty or
/// whitespace-only input scores 0 against anything.
///
/// Inputs are compared as-is; `find_best_match` lowercases before scoring.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let sect = intersection.join(" ");
    let combined_a = join_token_groups(&sect, &only_a);
    let combined_b = join_token_groups(&sect, &only_b);

    let scores = [
        sequence_ratio(&sect, &combined_a),
        sequence_ratio(&sect, &combined_b),
        sequence_ratio(&combined_a, &combined_b),
        sequence_ratio(a, b),
    ];

    scores.into_iter().fold(0, u8::max)
}

/// Scans the archive in stored order and keeps the workpaper with the
/// strictly greatest score, so the earliest of tied candidates wins. Returns
/// `None` for an empty archive or when no candidate scores above zero.
pub fn find_best_match(query: &str, workpapers: &[Workpaper]) -> Option<MatchResult> {
    let query = query.to_lowercase();
    let mut best_index: Option<usize> = None;
    let mut best_score: u8 = 0;

    for (index, workpaper) in workpapers.iter().enumerate() {
        let score = token_set_ratio(&query, &workpaper.content.to_lowercase());
        if score > best_score {
            best_index = Some(index);
            best_score = score;
        }
    }

    best_index.map(|index| MatchResult {
        workpaper: workpapers[index].clone(),
        score: best_score,
    })
}

fn join_token_groups(sect: &str, rest: &[&str]) -> String {
    if sect.is_empty() {
        rest.join(" ")
    } else if rest.is_empty() {
        sect.to_string()
    } else {
        format!("{} {}", sect, rest.join(" "))
    }
}

/// Sequence similarity over Unicode chars: `100 * 2M / T` rounded
/// half-to-even, where `M` is the total length of the longest common
/// matching blocks and `T` the combined length. Two empty strings score 100.
fn sequence_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let matched = matched_chars(&a, &b);
    scaled_ratio(matched, a.len() + b.len())
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        positions.entry(ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut regions = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = regions.pop() {
        let (i, j, size) = longest_match(a, &positions, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            regions.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            regions.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Finds the longest block of consecutive equal chars within the given
/// bounds. Ties resolve to the earliest position in `a`, then in `b`.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut new_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(indices) = positions.get(&a[i]) {
            for &j in indices {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let length = j
                    .checked_sub(1)
                    .and_then(|prev| run_lengths.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                new_runs.insert(j, length);
                if length > best_size {
                    best_i = i + 1 - length;
                    best_j = j + 1 - length;
                    best_size = length;
                }
            }
        }
        run_lengths = new_runs;
    }

    (best_i, best_j, best_size)
}

fn scaled_ratio(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let numerator = 200 * matched;
    let quotient = numerator / total;
    let remainder = numerator % total;
    let rounded = match (2 * remainder).cmp(&total) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    };
    rounded as u8
}
