//! Ledger display formatting
//!
//! Formats ledgers as aligned tables for the CLI and splits display lines
//! into columns for the TUI grid.

use crate::models::IngredientLedger;

/// Format a ledger as a table of quantity, unit and item
pub fn format_ledger_table(ledger: &IngredientLedger, sorted: bool) -> String {
    if ledger.is_empty() {
        return "No items found.".to_string();
    }

    let names: Vec<&str> = if sorted {
        ledger.sorted_names()
    } else {
        ledger.names().collect()
    };

    let rows: Vec<(String, &str, &str)> = names
        .iter()
        .filter_map(|name| {
            ledger
                .get(name)
                .map(|entry| (entry.quantity.to_string(), entry.unit.as_str(), *name))
        })
        .collect();

    // Calculate column widths
    let qty_width = rows
        .iter()
        .map(|(q, _, _)| q.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let unit_width = rows
        .iter()
        .map(|(_, u, _)| u.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>qty_width$}  {:<unit_width$}  {}\n",
        "Quantity",
        "Unit",
        "Item",
        qty_width = qty_width,
        unit_width = unit_width,
    ));
    output.push_str(&format!(
        "{:->qty_width$}  {:-<unit_width$}  {:-<10}\n",
        "",
        "",
        "",
        qty_width = qty_width,
        unit_width = unit_width,
    ));

    for (quantity, unit, name) in &rows {
        output.push_str(&format!(
            "{:>qty_width$}  {:<unit_width$}  {}\n",
            quantity,
            unit,
            name,
            qty_width = qty_width,
            unit_width = unit_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} items\n", rows.len()));
    output
}

/// Cut a display line to fit a grid column of `width` characters
///
/// Lines longer than `width - 2` characters keep that many characters and
/// get a `..` suffix.
pub fn truncate_item(text: &str, width: usize) -> String {
    let limit = width.saturating_sub(2);
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("..");
    truncated
}

/// Split lines into columns of at most `rows` entries, filled top to bottom
pub fn grid_columns<T: Clone>(lines: &[T], rows: usize) -> Vec<Vec<T>> {
    if rows == 0 {
        return Vec::new();
    }

    lines.chunks(rows).map(|chunk| chunk.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_ledger_table(&IngredientLedger::new(), true),
            "No items found."
        );
    }

    #[test]
    fn test_table_layout() {
        let mut ledger = IngredientLedger::new();
        ledger.add("shallots", 5, "chopped").unwrap();
        ledger.add("onions", 3, "whole").unwrap();

        let table = format_ledger_table(&ledger, true);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Quantity  Unit     Item");
        assert_eq!(lines[1], "--------  -------  ----------");
        assert_eq!(lines[2], "       3  whole    onions");
        assert_eq!(lines[3], "       5  chopped  shallots");
        assert!(table.ends_with("Total: 2 items\n"));
    }

    #[test]
    fn test_table_unsorted_keeps_insertion_order() {
        let mut ledger = IngredientLedger::new();
        ledger.add("shallots", 5, "chopped").unwrap();
        ledger.add("onions", 3, "whole").unwrap();

        let table = format_ledger_table(&ledger, false);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].ends_with("shallots"));
        assert!(lines[3].ends_with("onions"));
    }

    #[test]
    fn test_truncate_item() {
        assert_eq!(truncate_item("3 whole onions", 20), "3 whole onions");
        assert_eq!(
            truncate_item("12 ounces shredded cheddar", 20),
            "12 ounces shredded.."
        );
        // Exactly at the limit is left alone
        assert_eq!(truncate_item("123456789012345678", 20), "123456789012345678");
        assert_eq!(truncate_item("1234567890123456789", 20), "123456789012345678..");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_item("2 whole jalapeños", 10), "2 whole ..");
    }

    #[test]
    fn test_grid_columns() {
        let lines = vec!["a", "b", "c", "d", "e"];
        assert_eq!(
            grid_columns(&lines, 2),
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]
        );
        assert!(grid_columns(&lines, 0).is_empty());
        assert!(grid_columns::<&str>(&[], 3).is_empty());
    }
}
