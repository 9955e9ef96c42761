use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use merge_to_sorted_list::{create_list, merge_two_lists, to_vec};

/// Every exercise the runner knows about, named after its crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exercise {
    MergeToSortedList,
    ValidParenthesis,
    BuySellStock,
    TwoSum,
    ValidAnagram,
    FirstUniqueCharacter,
    LongestSubstring,
    FloodFill,
    MaxFishInGrid,
    ReorderLogFiles,
    ProjectEuler,
}

/// Result of one regression example.
#[derive(Debug)]
pub struct Outcome {
    pub label: String,
    pub passed: bool,
    pub detail: String,
}

fn check<T: PartialEq + Debug>(label: &str, actual: T, expected: T) -> Outcome {
    Outcome {
        label: label.to_string(),
        passed: actual == expected,
        detail: format!("got {actual:?}, expected {expected:?}"),
    }
}

impl Exercise {
    pub const ALL: [Exercise; 11] = [
        Exercise::MergeToSortedList,
        Exercise::ValidParenthesis,
        Exercise::BuySellStock,
        Exercise::TwoSum,
        Exercise::ValidAnagram,
        Exercise::FirstUniqueCharacter,
        Exercise::LongestSubstring,
        Exercise::FloodFill,
        Exercise::MaxFishInGrid,
        Exercise::ReorderLogFiles,
        Exercise::ProjectEuler,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Exercise::MergeToSortedList => "merge_to_sorted_list",
            Exercise::ValidParenthesis => "valid_parenthesis",
            Exercise::BuySellStock => "buy_sell_stock",
            Exercise::TwoSum => "two_sum",
            Exercise::ValidAnagram => "valid_anagram",
            Exercise::FirstUniqueCharacter => "first_unique_character",
            Exercise::LongestSubstring => "longest_substring",
            Exercise::FloodFill => "flood_fill",
            Exercise::MaxFishInGrid => "max_fish_in_grid",
            Exercise::ReorderLogFiles => "reorder_log_files",
            Exercise::ProjectEuler => "project_euler",
        }
    }

    /// Run the exercise on its regression examples.
    pub fn run(self) -> Vec<Outcome> {
        match self {
            Exercise::MergeToSortedList => {
                let merge = |a: Vec<i32>, b: Vec<i32>| to_vec(&merge_two_lists(create_list(a), create_list(b)));
                vec![
                    check("[1,2,4] + [1,3,4]", merge(vec![1, 2, 4], vec![1, 3, 4]), vec![1, 1, 2, 3, 4, 4]),
                    check("[] + []", merge(vec![], vec![]), vec![]),
                    check("[] + [0]", merge(vec![], vec![0]), vec![0]),
                    check("[1,1] + [1]", merge(vec![1, 1], vec![1]), vec![1, 1, 1]),
                ]
            },
            Exercise::ValidParenthesis => {
                use valid_parenthesis::is_valid;
                vec![
                    check("()[]{}", is_valid("()[]{}"), true),
                    check("(]", is_valid("(]"), false),
                    check("([)]", is_valid("([)]"), false),
                    check("empty", is_valid(""), true),
                ]
            },
            Exercise::BuySellStock => {
                use buy_sell_stock::max_profit;
                vec![
                    check("[7,1,5,3,6,4]", max_profit(&[7, 1, 5, 3, 6, 4]), 5),
                    check("[7,6,4,3,1]", max_profit(&[7, 6, 4, 3, 1]), 0),
                ]
            },
            Exercise::TwoSum => {
                use two_sum::two_sum;
                vec![
                    check("[2,7,11,15] -> 9", two_sum(&[2, 7, 11, 15], 9), Some((0, 1))),
                    check("[1,2,3] -> 100", two_sum(&[1, 2, 3], 100), None),
                ]
            },
            Exercise::ValidAnagram => {
                use valid_anagram::is_anagram;
                vec![
                    check("anagram/nagaram", is_anagram("anagram", "nagaram"), true),
                    check("rat/car", is_anagram("rat", "car"), false),
                ]
            },
            Exercise::FirstUniqueCharacter => {
                use first_unique_character::first_uniq_char;
                vec![
                    check("leetcode", first_uniq_char("leetcode"), Some(0)),
                    check("loveleetcode", first_uniq_char("loveleetcode"), Some(2)),
                    check("aabb", first_uniq_char("aabb"), None),
                ]
            },
            Exercise::LongestSubstring => {
                use longest_substring::length_of_longest_substring;
                vec![
                    check("abcabcbb", length_of_longest_substring("abcabcbb"), 3),
                    check("bbbbb", length_of_longest_substring("bbbbb"), 1),
                    check("pwwkew", length_of_longest_substring("pwwkew"), 3),
                ]
            },
            Exercise::FloodFill => {
                let image = vec![vec![1, 1, 1], vec![1, 1, 0], vec![1, 0, 1]];
                vec![check(
                    "3x3 from (1,1)",
                    flood_fill::flood_fill(image, 1, 1, 2),
                    vec![vec![2, 2, 2], vec![2, 2, 0], vec![2, 0, 1]],
                )]
            },
            Exercise::MaxFishInGrid => {
                let grid = vec![vec![0, 2, 1, 0], vec![4, 0, 0, 3], vec![1, 0, 0, 4], vec![0, 3, 2, 0]];
                vec![check("4x4 grid", max_fish_in_grid::find_max_fish(&grid), 7)]
            },
            Exercise::ReorderLogFiles => {
                let logs = ["dig1 8 1 5 1", "let1 art can", "dig2 3 6", "let2 own kit dig", "let3 art zero"];
                let expected = ["let1 art can", "let3 art zero", "let2 own kit dig", "dig1 8 1 5 1", "dig2 3 6"];
                vec![check(
                    "five logs",
                    reorder_log_files::reorder_log_files(logs.iter().map(|s| s.to_string()).collect()),
                    expected.iter().map(|s| s.to_string()).collect(),
                )]
            },
            Exercise::ProjectEuler => {
                use project_euler::{largest_prime_factor, sum_of_multiples};
                vec![
                    check("problem 1", sum_of_multiples(1000, &[3, 5]), 233168),
                    check("problem 3", largest_prime_factor(600851475143), Some(6857)),
                ]
            },
        }
    }
}

impl Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exercise::ALL
            .into_iter()
            .find(|exercise| exercise.name() == s)
            .ok_or_else(|| format!("Unknown exercise '{s}'"))
    }
}
