/// Splits a clause span on top-level commas, leaving commas nested inside
/// parentheses alone so that `count(a, b)` stays one item. Fragments are
/// returned untrimmed.
pub fn split_top_level_commas(span: &str) -> Vec<&str> {
    let mut items = vec![];
    let mut depth: usize = 0;
    let mut start = 0;

    for (position, current) in span.char_indices() {
        match current {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&span[start..position]);
                start = position + 1;
            }
            _ => {}
        }
    }
    items.push(&span[start..]);

    items
}

/// Splits a clause span into (name, optional trailing token) pairs: one pair
/// per top-level comma item, keeping at most the first two whitespace-
/// separated tokens and ignoring the rest. Items with no tokens are dropped.
pub fn split_token_pairs(span: &str) -> Vec<(String, Option<String>)> {
    split_top_level_commas(span)
        .iter()
        .filter_map(|item| {
            let mut tokens = item.split_whitespace();
            let name = tokens.next()?.to_string();

            Some((name, tokens.next().map(str::to_string)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::parser::{split_token_pairs, split_top_level_commas};

    #[test]
    pub fn test_split_plain_list() {
        let items = split_top_level_commas("a.name, b.name,c");

        assert_eq!(items, vec!["a.name", " b.name", "c"]);
    }

    #[test]
    pub fn test_split_keeps_nested_commas() {
        let items = split_top_level_commas("a.name, concat(a.first, a.last), count(b.id)");

        assert_eq!(items.len(), 3);
        assert_eq!(items[1].trim(), "concat(a.first, a.last)");
    }

    #[test]
    pub fn test_split_single_item() {
        let items = split_top_level_commas("author a");

        assert_eq!(items, vec!["author a"]);
    }

    #[test]
    pub fn test_split_unbalanced_parentheses() {
        let items = split_top_level_commas("count(a, b");

        assert_eq!(items, vec!["count(a, b"]);
    }

    #[test]
    pub fn test_split_token_pairs() {
        let pairs = split_token_pairs("author a, book, publisher p now ignored");

        assert_eq!(
            pairs,
            vec![
                ("author".to_string(), Some("a".to_string())),
                ("book".to_string(), None),
                ("publisher".to_string(), Some("p".to_string())),
            ]
        );
    }
}
