//! Minimal CSV reading for the bundled catalog and directory data.
//!
//! Lenient by design: short rows pad with empty fields, empty lines are
//! skipped, and an unterminated quote runs to the end of the line. Field
//! quoting follows the usual convention (`"` wraps a field, `""` escapes a
//! quote inside one).

use std::collections::HashMap;

/// A parsed CSV table with a header row.
#[derive(Debug, Clone)]
pub struct Table {
    header: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV text, treating the first non-empty line as the header.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());

        let header = lines
            .next()
            .map(|line| {
                parse_record(line)
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| (name.trim().to_string(), i))
                    .collect()
            })
            .unwrap_or_default();

        let rows = lines.map(parse_record).collect();

        Self { header, rows }
    }

    /// Data rows (header excluded).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Look up a field by column name; missing column or short row yields "".
    pub fn field<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.header
            .get(column)
            .and_then(|&i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether the header contains a column.
    pub fn has_column(&self, column: &str) -> bool {
        self.header.contains_key(column)
    }
}

/// Parse one CSV line into fields.
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

/// Positional field access for header-less row handling; out of range
/// yields "".
pub fn col(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Lenient boolean parsing: "true" and "yes" (any case) are true.
pub fn parse_bool(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "true" | "yes")
}

/// Split a `|`-separated tag list, trimming and dropping empties.
pub fn split_list(s: &str) -> Vec<String> {
    s.split('|')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_plain() {
        assert_eq!(
            parse_record("Paracetamol,Acetaminophen,Tablet"),
            vec!["Paracetamol", "Acetaminophen", "Tablet"]
        );
    }

    #[test]
    fn test_parse_record_quoted() {
        assert_eq!(
            parse_record(r#""Paracetamol 500mg, box",Tablet"#),
            vec!["Paracetamol 500mg, box", "Tablet"]
        );
        assert_eq!(
            parse_record(r#""say ""hi""",x"#),
            vec![r#"say "hi""#, "x"]
        );
    }

    #[test]
    fn test_parse_record_trailing_empty() {
        assert_eq!(parse_record("a,,b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_table_header_lookup() {
        let table = Table::parse("name,city\nApollo,Delhi\nFortis,Mumbai\n");
        assert_eq!(table.rows().len(), 2);
        assert!(table.has_column("city"));
        assert_eq!(table.field(&table.rows()[0], "city"), "Delhi");
        assert_eq!(table.field(&table.rows()[1], "name"), "Fortis");
        // Missing column degrades to empty
        assert_eq!(table.field(&table.rows()[0], "rating"), "");
    }

    #[test]
    fn test_table_skips_empty_lines() {
        let table = Table::parse("a,b\n\n1,2\n   \n3,4\n");
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_short_row_pads_empty() {
        let table = Table::parse("a,b,c\n1,2\n");
        assert_eq!(table.field(&table.rows()[0], "c"), "");
        assert_eq!(col(&table.rows()[0], 5), "");
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("Yes"));
        assert!(parse_bool("YES"));
        assert!(!parse_bool("no"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("Cardiology| Neurology |ICU"),
            vec!["Cardiology", "Neurology", "ICU"]
        );
        assert!(split_list("").is_empty());
    }
}
