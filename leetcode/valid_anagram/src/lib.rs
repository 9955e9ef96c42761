use std::collections::HashMap;

pub fn is_anagram(s: &str, t: &str) -> bool {
    let mut counts: HashMap<char, i32> = HashMap::new();

    for c in s.chars() {
        *counts.entry(c).or_default() += 1;
    }
    for c in t.chars() {
        *counts.entry(c).or_default() -= 1;
    }

    counts.values().all(|&count| count == 0)
}
