use std::collections::HashSet;

/// Length of the longest substring of `s` without repeating characters.
pub fn length_of_longest_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut window: HashSet<char> = HashSet::new();
    let mut left = 0;
    let mut longest = 0;

    for right in 0 .. chars.len() {
        // Shrink from the left until chars[right] is no longer in the window.
        while window.contains(&chars[right]) {
            window.remove(&chars[left]);
            left += 1;
        }
        window.insert(chars[right]);
        longest = longest.max(right - left + 1);
    }

    longest
}
