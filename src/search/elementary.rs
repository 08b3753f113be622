//! Elementary membership searches over plain sequences.

/// Scans `iterable` front to back for an item equal to `target`.
pub fn linear_search<T, I>(iterable: I, target: &T) -> bool
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    iterable.into_iter().any(|item| item == *target)
}

/// Halving search over a sorted slice. The slice must already be sorted
/// ascending or the answer is meaningless.
pub fn binary_search<T: Ord>(sequence: &[T], target: &T) -> bool {
    let mut low = 0usize;
    let mut high = sequence.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match sequence[mid].cmp(target) {
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
            std::cmp::Ordering::Equal => return true,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_search_finds_present_item() {
        assert!(linear_search([1, 2, 3, 4, 5], &3));
        assert!(!linear_search([1, 2, 3, 4, 5], &6));
        assert!(!linear_search(Vec::<i32>::new(), &1));
    }

    #[test]
    fn binary_search_on_sorted_slices() {
        assert!(binary_search(&[1, 2, 3, 4, 5], &3));
        assert!(binary_search(&[1, 2, 3, 4, 5], &1));
        assert!(binary_search(&[1, 2, 3, 4, 5], &5));
        assert!(!binary_search(&[1, 2, 3, 4, 5], &6));
        assert!(!binary_search(&['a', 'b', 'c', 'd', 'e'], &'t'));
        assert!(!binary_search(&[] as &[i32], &1));
    }
}
