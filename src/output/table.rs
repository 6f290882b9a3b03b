//! Boxed table report for terminal output

use crate::domain::model::{FieldSelection, VideoStatistics};

/// Visible characters between the box borders
const INNER_WIDTH: usize = 37;

/// Longest title shown unabridged
const TITLE_WIDTH: usize = 30;

/// Width of the label column in counter rows
const LABEL_WIDTH: usize = 11;

const ELLIPSIS: &str = "...";

/// Render the statistics as a fixed-width box.
///
/// Only the selected counters are listed, once each, in canonical order.
pub fn render_table(stats: &VideoStatistics, fields: &FieldSelection) -> String {
    let rule = "═".repeat(INNER_WIDTH + 2);
    let mut lines = Vec::with_capacity(8);

    lines.push(format!("╔{}╗", rule));
    lines.push(format!("║ {:<w$} ║", "YouTube Video Statistics", w = INNER_WIDTH));
    lines.push(format!("╠{}╣", rule));
    lines.push(format!(
        "║ Title: {:<w$} ║",
        truncate_title(&stats.title),
        w = INNER_WIDTH - "Title: ".len()
    ));
    lines.push(format!("╠{}╣", rule));

    for field in fields.resolve() {
        lines.push(format!(
            "║ {:<lw$}{:<vw$} ║",
            field.label(),
            format_number(stats.counters.get(field)),
            lw = LABEL_WIDTH,
            vw = INNER_WIDTH - LABEL_WIDTH
        ));
    }

    lines.push(format!("╚{}╝", rule));

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Group digits in threes from the right: `1234567` becomes `1,234,567`
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Cut a title to fit the box, counting characters rather than bytes
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_WIDTH {
        return title.to_string();
    }

    let mut truncated: String = title.chars().take(TITLE_WIDTH - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StatisticsCounters;

    fn sample() -> VideoStatistics {
        VideoStatistics::new(
            "abc123",
            "Short title",
            StatisticsCounters {
                view_count: 1_234_567,
                like_count: 89_000,
                comment_count: 512,
                favorite_count: 0,
            },
        )
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title(""), "");
        assert_eq!(truncate_title("exactly thirty characters long"), "exactly thirty characters long");

        let long = "a".repeat(31);
        let truncated = truncate_title(&long);
        assert_eq!(truncated, format!("{}...", "a".repeat(27)));
    }

    #[test]
    fn test_truncate_title_multibyte() {
        let title = "ü".repeat(40);
        let truncated = truncate_title(&title);
        assert_eq!(truncated.chars().count(), 30);
        assert!(truncated.starts_with(&"ü".repeat(27)));
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_table_lines_have_fixed_width() {
        let table = render_table(&sample(), &FieldSelection::new(["views", "likes", "comments", "favorites"]));
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();

        assert!(widths.iter().all(|w| *w == INNER_WIDTH + 4), "{:?}", widths);
    }

    #[test]
    fn test_table_default_fields() {
        let table = render_table(&sample(), &FieldSelection::default());

        assert!(table.contains("Title: Short title"));
        assert!(table.contains("Views:     1,234,567"));
        assert!(table.contains("Likes:     89,000"));
        assert!(table.contains("Comments:  512"));
        assert!(!table.contains("Favorites:"));
    }

    #[test]
    fn test_table_rows_canonical_and_unique() {
        let selection = FieldSelection::new(["favorites", "commentCount", "views", "viewCount", "bogus"]);
        let table = render_table(&sample(), &selection);

        let rows: Vec<&str> = table
            .lines()
            .filter(|l| l.contains(':') && !l.contains("Title:"))
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("Views:"));
        assert!(rows[1].contains("Comments:"));
        assert!(rows[2].contains("Favorites:"));
    }

    #[test]
    fn test_table_empty_selection_has_no_rows() {
        let table = render_table(&sample(), &FieldSelection::new(Vec::<String>::new()));
        assert_eq!(table.lines().count(), 6);
    }
}
