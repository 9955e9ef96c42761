// Definition for singly-linked list.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ListNode<T = i32> {
  pub val: T,
  pub next: Option<Box<ListNode<T>>>
}

/// Head of a singly-linked list. `None` is the empty list.
pub type List<T = i32> = Option<Box<ListNode<T>>>;

impl<T> ListNode<T> {
  #[inline]
  pub fn new(val: T) -> Self {
    ListNode {
      next: None,
      val
    }
  }
}

// Unlink iteratively so that long lists don't blow the stack on drop.
impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Which input wins when the two heads compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Equal elements of the first list come before those of the second.
    #[default]
    FirstInput,
    /// Equal elements of the second list come before those of the first.
    SecondInput,
}

impl TieBreak {
    #[inline]
    fn takes_first<T: Ord>(self, first: &T, second: &T) -> bool {
        match self {
            TieBreak::FirstInput => first <= second,
            TieBreak::SecondInput => first < second,
        }
    }
}

/// Merge two non-decreasing lists into one, first input winning ties.
///
/// Both lists are consumed and their nodes relinked in place, no node is
/// allocated. If an input is not sorted the result still holds every node
/// exactly once, it just isn't sorted either.
pub fn merge_two_lists<T: Ord>(list1: List<T>, list2: List<T>) -> List<T> {
    merge_two_lists_with(list1, list2, TieBreak::FirstInput)
}

/// Same as [`merge_two_lists`] with an explicit tie-break policy.
pub fn merge_two_lists_with<T: Ord>(
    mut list1: List<T>,
    mut list2: List<T>,
    tie_break: TieBreak,
) -> List<T> {

    let mut new_head = None;
    let mut current = &mut new_head;
    let mut from_first = 0usize;
    let mut from_second = 0usize;

    loop {
        let take_first = match (&list1, &list2) {
            (Some(n1), Some(n2)) => tie_break.takes_first(&n1.val, &n2.val),
            _ => break,
        };

        let source = if take_first {
            from_first += 1;
            &mut list1
        } else {
            from_second += 1;
            &mut list2
        };

        let Some(mut node) = source.take() else { break };
        *source = node.next.take();
        current = &mut current.insert(node).next;
    }

    tracing::trace!(from_first, from_second, ?tie_break, "interleaved heads");

    // At most one list is left, and its tail is already terminated.
    *current = if list1.is_some() { list1 } else { list2 };

    new_head
}

/// Build a list holding `items` in order.
pub fn create_list<T, I: IntoIterator<Item = T>>(items: I) -> List<T> {
    let mut head = None;
    let mut current = &mut head;

    for item in items {
        current = &mut current.insert(Box::new(ListNode::new(item))).next;
    }

    head
}

/// Borrowing iterator over the values of a list.
pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

pub fn iter<T>(list: &List<T>) -> Iter<'_, T> {
    Iter { next: list.as_deref() }
}

pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    iter(list).cloned().collect()
}

pub fn len<T>(list: &List<T>) -> usize {
    iter(list).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_example() {
        let list1 = create_list(vec![1, 2, 4]);
        let list2 = create_list(vec![1, 3, 4]);
        let merged = merge_two_lists(list1, list2);
        assert_eq!(to_vec(&merged), vec![1, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(merge_two_lists::<i32>(None, None), None);
        assert_eq!(to_vec(&merge_two_lists(create_list(vec![1, 2]), None)), vec![1, 2]);
        assert_eq!(to_vec(&merge_two_lists(None, create_list(vec![0]))), vec![0]);
    }

    #[test]
    fn test_merge_disjoint_ranges() {
        let merged = merge_two_lists(create_list(vec![5, 6, 7]), create_list(vec![-3, -2]));
        assert_eq!(to_vec(&merged), vec![-3, -2, 5, 6, 7]);
    }

    #[test]
    fn test_merge_tail_is_terminated() {
        let merged = merge_two_lists(create_list(vec![1, 3]), create_list(vec![2]));
        let mut node = merged.as_deref();
        let mut last = None;
        while let Some(n) = node {
            last = Some(n);
            node = n.next.as_deref();
        }
        let last = last.unwrap();
        assert_eq!(last.val, 3);
        assert!(last.next.is_none());
    }

    #[test]
    fn test_create_list() {
        assert_eq!(create_list(Vec::<i32>::new()), None);

        let list = create_list(vec![1, 2]);
        let mut expected = ListNode::new(1);
        expected.next = Some(Box::new(ListNode::new(2)));
        assert_eq!(list, Some(Box::new(expected)));
        assert_eq!(len(&list), 2);
    }

    #[test]
    fn test_tie_break_default() {
        assert_eq!(TieBreak::default(), TieBreak::FirstInput);
        assert!(TieBreak::FirstInput.takes_first(&1, &1));
        assert!(!TieBreak::SecondInput.takes_first(&1, &1));
        assert!(TieBreak::SecondInput.takes_first(&0, &1));
    }

    #[test]
    fn test_drop_long_list() {
        let list = create_list(0..200_000);
        assert_eq!(len(&list), 200_000);
        drop(list);
    }
}
