use std::collections::HashMap;

/// Char index of the first character that appears only once in `s`.
pub fn first_uniq_char(s: &str) -> Option<usize> {
    let mut char_map: HashMap<char, usize> = HashMap::new();

    for c in s.chars() {
        *char_map.entry(c).or_insert(0) += 1;
    }

    s.chars().position(|c| char_map[&c] == 1)
}
