use super::models::WithId;

/// Index of the item with `id`
pub fn find_index<T: WithId>(collection: &[T], id: &str) -> Option<usize> {
    collection.iter().position(|item| item.id() == id)
}

pub fn find<'a, T: WithId>(collection: &'a [T], id: &str) -> Option<&'a T> {
    collection.iter().find(|item| item.id() == id)
}

pub fn find_mut<'a, T: WithId>(collection: &'a mut [T], id: &str) -> Option<&'a mut T> {
    collection.iter_mut().find(|item| item.id() == id)
}

/// Insert `item` right after the item with id `after`.
/// Appends when `after` is None or unknown.
pub fn insert_after<T: WithId>(collection: &mut Vec<T>, after: Option<&str>, item: T) {
    match after.and_then(|id| find_index(collection, id)) {
        Some(idx) => collection.insert(idx + 1, item),
        None => collection.push(item),
    }
}

/// Move the item with `id` by `by` slots (negative = towards the front).
/// Returns false and leaves the list alone when either end is out of range.
pub fn move_by<T: WithId>(collection: &mut Vec<T>, id: &str, by: isize) -> bool {
    let Some(from) = find_index(collection, id) else {
        return false;
    };
    let Some(to) = from.checked_add_signed(by) else {
        return false;
    };
    move_to(collection, from, to)
}

/// Move the item at `from` so it ends up at index `to`
pub fn move_to<T>(collection: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= collection.len() || to >= collection.len() {
        return false;
    }
    if from != to {
        let item = collection.remove(from);
        collection.insert(to, item);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Todo;

    fn todos(texts: &[&str]) -> Vec<Todo> {
        texts
            .iter()
            .map(|t| Todo {
                id: t.to_string(),
                ..Todo::new(None, *t)
            })
            .collect()
    }

    fn texts(list: &[Todo]) -> Vec<&str> {
        list.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_find() {
        let list = todos(&["a", "b", "c"]);
        assert_eq!(find_index(&list, "b"), Some(1));
        assert_eq!(find_index(&list, "z"), None);
        assert_eq!(find(&list, "c").map(|t| t.text.as_str()), Some("c"));
    }

    #[test]
    fn test_insert_after() {
        let mut list = todos(&["a", "b"]);
        insert_after(&mut list, Some("a"), Todo::new(None, "x"));
        assert_eq!(texts(&list), vec!["a", "x", "b"]);

        insert_after(&mut list, None, Todo::new(None, "y"));
        assert_eq!(texts(&list), vec!["a", "x", "b", "y"]);

        insert_after(&mut list, Some("missing"), Todo::new(None, "z"));
        assert_eq!(texts(&list), vec!["a", "x", "b", "y", "z"]);
    }

    #[test]
    fn test_move_by() {
        let mut list = todos(&["a", "b", "c"]);
        assert!(move_by(&mut list, "a", 2));
        assert_eq!(texts(&list), vec!["b", "c", "a"]);

        assert!(move_by(&mut list, "a", -1));
        assert_eq!(texts(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_by_out_of_range_is_noop() {
        let mut list = todos(&["a", "b", "c"]);
        assert!(!move_by(&mut list, "a", -1));
        assert!(!move_by(&mut list, "c", 1));
        assert!(!move_by(&mut list, "missing", 1));
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_to() {
        let mut list = todos(&["a", "b", "c", "d"]);
        assert!(move_to(&mut list, 3, 0));
        assert_eq!(texts(&list), vec!["d", "a", "b", "c"]);
        assert!(move_to(&mut list, 1, 1));
        assert!(!move_to(&mut list, 4, 0));
    }
}
