//! Case-insensitive substring matching over display text

use crate::model::Row;

/// True when any cell's display text contains `term`, ignoring case
pub fn row_matches(row: &Row, term: &str) -> bool {
    let needle = term.to_lowercase();
    row.values
        .iter()
        .any(|v| v.display_text().to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use proptest::prelude::*;

    fn client_row() -> Row {
        Row::new(vec![
            CellValue::Integer(1),
            CellValue::from("Иван Иванов"),
            CellValue::from("1234567890"),
            CellValue::from("ул. Главная, д. 1"),
        ])
    }

    #[test]
    fn test_matches_any_column_case_insensitively() {
        let row = client_row();
        assert!(row_matches(&row, "иван"));
        assert!(row_matches(&row, "ГЛАВНАЯ"));
        assert!(row_matches(&row, "4567"));
        assert!(!row_matches(&row, "Петрова"));
    }

    #[test]
    fn test_numbers_match_on_display_text() {
        assert!(row_matches(&client_row(), "1"));
    }

    proptest! {
        #[test]
        fn prop_every_cell_text_matches_its_row(text in "[a-zA-Z0-9 ]{0,12}") {
            let row = Row::new(vec![CellValue::Integer(7), CellValue::Text(text.clone())]);
            prop_assert!(row_matches(&row, &text));
            prop_assert!(row_matches(&row, &text.to_uppercase()));
        }

        #[test]
        fn prop_empty_term_matches_everything(text in ".{0,8}") {
            let row = Row::new(vec![CellValue::Text(text)]);
            prop_assert!(row_matches(&row, ""));
        }
    }
}
