//! Generic split/join over sequences.

/// Split `items` into groups separated by elements matching `is_break`.
///
/// Break elements are consumed. A leading, trailing, or doubled break
/// produces an empty group; input without breaks yields one group; empty
/// input yields no groups.
pub fn split_on<T, I, F>(items: I, mut is_break: F) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut splits: Vec<Vec<T>> = Vec::new();
    for item in items {
        if splits.is_empty() {
            splits.push(Vec::new());
        }
        if is_break(&item) {
            splits.push(Vec::new());
        } else if let Some(current) = splits.last_mut() {
            current.push(item);
        }
    }
    splits
}

/// Concatenate `groups`, putting a clone of `separator` between each pair.
pub fn join_with<T: Clone>(groups: Vec<Vec<T>>, separator: &T) -> Vec<T> {
    let total = groups.iter().map(Vec::len).sum::<usize>() + groups.len().saturating_sub(1);
    let mut joined = Vec::with_capacity(total);
    for (i, group) in groups.into_iter().enumerate() {
        if i > 0 {
            joined.push(separator.clone());
        }
        joined.extend(group);
    }
    joined
}
