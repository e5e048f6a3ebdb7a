use crate::catalog::SearchItem;

/// Case-insensitive substring match over `items`. A blank query matches
/// nothing rather than everything.
pub fn search(items: &[SearchItem], query: &str) -> Vec<SearchItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SEARCH_INDEX;

    #[test]
    fn matches_ignore_case() {
        let names: Vec<&str> = search(&SEARCH_INDEX, "SHOES").iter().map(|i| i.name).collect();
        assert_eq!(names, ["Running Shoes", "Tennis Shoes", "Kids' Sports Shoes"]);
    }

    #[test]
    fn blank_or_unmatched_queries_find_nothing() {
        assert!(search(&SEARCH_INDEX, "").is_empty());
        assert!(search(&SEARCH_INDEX, "   ").is_empty());
        assert!(search(&SEARCH_INDEX, "sandals").is_empty());
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_query() {
        assert_eq!(search(&SEARCH_INDEX, " sneakers").len(), 1);
        assert!(search(&SEARCH_INDEX, "sneakers ").is_empty());
    }
}
