//! Row model for the keyword list.
//!
//! The list is the custom prompt row followed by one section per category.
//! Section headers are display-only; the cursor moves over `Item`s.

use claude_keywords::{Category, KeywordRecord, catalog};

/// A row the cursor can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Prompt,
    Keyword(&'static KeywordRecord),
}

/// A rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Item(Item),
    Header(Category),
    /// Shown when a filter matches no keyword.
    NoMatches,
}

/// All rows for the given filter query (blank = no filter).
pub fn rows(query: &str) -> Vec<Row> {
    let groups = catalog::filter(query);
    let mut rows = vec![Row::Item(Item::Prompt)];
    if groups.is_empty() {
        rows.push(Row::NoMatches);
        return rows;
    }
    for (category, members) in groups {
        rows.push(Row::Header(category));
        rows.extend(members.into_iter().map(|k| Row::Item(Item::Keyword(k))));
    }
    rows
}

/// Cursor targets for the given filter query.
pub fn items(query: &str) -> Vec<Item> {
    rows(query)
        .into_iter()
        .filter_map(|row| match row {
            Row::Item(item) => Some(item),
            _ => None,
        })
        .collect()
}

/// Position in `rows` of the `item_index`-th item.
pub fn row_index(rows: &[Row], item_index: usize) -> Option<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matches!(row, Row::Item(_)))
        .nth(item_index)
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_rows_have_every_section() {
        let rows = rows("");
        assert_eq!(rows[0], Row::Item(Item::Prompt));
        let headers = rows.iter().filter(|r| matches!(r, Row::Header(_))).count();
        assert_eq!(headers, Category::ALL.len());
        assert_eq!(items("").len(), catalog::all().len() + 1);
    }

    #[test]
    fn test_filter_hides_empty_sections() {
        let rows = rows("parallel");
        assert_eq!(
            rows,
            vec![
                Row::Item(Item::Prompt),
                Row::Header(Category::Tools),
                Row::Item(Item::Keyword(catalog::find("tool-parallel").unwrap())),
            ]
        );
    }

    #[test]
    fn test_no_matches_row() {
        assert_eq!(rows("zzzz"), vec![Row::Item(Item::Prompt), Row::NoMatches]);
        assert_eq!(items("zzzz"), vec![Item::Prompt]);
    }

    #[test]
    fn test_row_index_skips_headers() {
        let rows = rows("");
        assert_eq!(row_index(&rows, 0), Some(0));
        // Item 1 is the first keyword, after the Thinking header.
        assert_eq!(row_index(&rows, 1), Some(2));
        assert_eq!(row_index(&rows, 100), None);
    }
}
