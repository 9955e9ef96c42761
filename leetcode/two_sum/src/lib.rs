use std::collections::HashMap;

/// Indices `(i, j)`, `i < j`, of two numbers adding up to `target`.
///
/// Scans once, remembering the index of every value seen so far, and returns
/// as soon as the current value completes a pair. `None` when no pair exists.
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (j, &val) in nums.iter().enumerate() {
        let complement = target as i64 - val as i64;
        if let Some(&i) = seen.get(&complement) {
            tracing::debug!(i, j, target, "pair found");
            return Some((i, j));
        }
        // Keep the first index of duplicates.
        seen.entry(val as i64).or_insert(j);
    }

    None
}

/// Quadratic version, kept as a reference for the hashmap one.
pub fn two_sum_brute_force(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    // Walk pairs by their second index so the answer matches `two_sum`.
    for j in 0 .. nums.len() {
        for i in 0 .. j {
            if nums[i] as i64 + nums[j] as i64 == target as i64 {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sum() {
        let nums = vec![2, 7, 11, 15];
        assert_eq!(two_sum(&nums, 9), Some((0, 1)));
        assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
        assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
    }

    #[test]
    fn test_two_sum_no_pair() {
        assert_eq!(two_sum(&[], 0), None);
        assert_eq!(two_sum(&[5], 10), None);
        assert_eq!(two_sum(&[1, 2, 3], 100), None);
    }

    #[test]
    fn test_two_sum_no_overflow() {
        assert_eq!(two_sum(&[i32::MAX, 1, i32::MIN], -1), Some((0, 2)));
        assert_eq!(two_sum(&[i32::MAX, i32::MAX], -2), None);
    }

    #[test]
    fn test_brute_force_agrees() {
        let cases: [(&[i32], i32); 5] = [
            (&[2, 7, 11, 15], 9),
            (&[3, 2, 4], 6),
            (&[1, 5, 1, 5], 6),
            (&[0, 4, 3, 0], 0),
            (&[1, 2], 4),
        ];
        for (nums, target) in cases {
            assert_eq!(two_sum(nums, target), two_sum_brute_force(nums, target));
        }
    }
}
