/// Opening bracket matching a closing one.
fn opener(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Returns true when every bracket in `s` is closed by the same type, in order.
pub fn is_valid(s: &str) -> bool {
    let mut filo : Vec<char> = Vec::new();

    for c in s.chars() {
        match c {
            '(' | '[' | '{' => filo.push(c),
            ')' | ']' | '}' => {
                if filo.pop() != opener(c) {
                    return false;
                }
            },
            _ => return false,
        }
        tracing::trace!("filo : {filo:?}");
    }

    filo.is_empty()
}
