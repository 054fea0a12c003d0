//! Column layout for the default (short) listing.
//!
//! Names are laid out "down then across": the entry at index `i` goes to
//! row `i % rows`, column `i / rows`. The grid is recomputed for every directory.

use unicode_width::UnicodeWidthStr;

/// Display width used when the terminal width cannot be determined.
pub const FALLBACK_WIDTH: usize = 80;
/// Blank columns between two names.
pub const COLUMN_GAP: usize = 2;

/// Grid dimensions for one directory's names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub columns: usize,
    pub rows: usize,
    pub column_width: usize,
}

impl LayoutPlan {
    /// Computes the grid for `count` names whose widest name is `max_name_width`
    /// columns wide, on a display `display_width` columns wide.
    ///
    /// The column count is trimmed to what the rows actually need, so three names on an
    /// 80 column display give one row of three columns, not sixteen.
    pub fn compute(count: usize, max_name_width: usize, display_width: usize) -> Self {
        let column_width = max_name_width + COLUMN_GAP;
        if count == 0 {
            return LayoutPlan {
                columns: 0,
                rows: 0,
                column_width,
            };
        }

        let columns = (display_width / column_width).max(1);
        let rows = count.div_ceil(columns);
        LayoutPlan {
            columns: count.div_ceil(rows),
            rows,
            column_width,
        }
    }

    /// Linear index of the entry shown at (`row`, `column`).
    #[inline]
    pub fn index_at(&self, row: usize, column: usize) -> usize {
        column * self.rows + row
    }
}

/// Resolves an optional terminal width to the width the layout should use.
#[inline]
pub fn effective_width(terminal_width: Option<usize>) -> usize {
    terminal_width
        .filter(|&w| w > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Display width of a name in terminal columns.
#[inline]
pub fn display_width(name: &str) -> usize {
    UnicodeWidthStr::width(name)
}

/// A name ready for the grid: the text to print (possibly with escape codes)
/// and the number of columns it occupies on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub width: usize,
}

impl Cell {
    pub fn new(text: String, width: usize) -> Self {
        Cell { text, width }
    }
}

/// Lays out `cells` (already sorted) into lines for a display `display_width` columns wide.
///
/// Every cell is padded to the column width, including the last one on each line.
/// No cells produce no lines.
pub fn render_columns(cells: &[Cell], display_width: usize) -> Vec<String> {
    let max_width = cells.iter().map(|c| c.width).max().unwrap_or(0);
    let plan = LayoutPlan::compute(cells.len(), max_width, display_width);

    let mut lines = Vec::with_capacity(plan.rows);
    for row in 0..plan.rows {
        let mut line = String::with_capacity(plan.columns * plan.column_width);
        for column in 0..plan.columns {
            let Some(cell) = cells.get(plan.index_at(row, column)) else {
                break;
            };
            line.push_str(&cell.text);
            let pad = plan.column_width.saturating_sub(cell.width);
            line.extend(std::iter::repeat_n(' ', pad));
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Cell {
        Cell::new(text.to_string(), display_width(text))
    }

    fn cells(names: &[&str]) -> Vec<Cell> {
        names.iter().map(|n| plain(n)).collect()
    }

    /// Grid position (`row`, `column`) of the entry at linear index `index`.
    fn position_of(plan: &LayoutPlan, index: usize) -> (usize, usize) {
        (index % plan.rows, index / plan.rows)
    }

    #[test]
    fn three_short_names_fit_one_row() {
        let plan = LayoutPlan::compute(3, 3, FALLBACK_WIDTH);
        assert_eq!(plan.column_width, 5);
        assert_eq!(plan.rows, 1);
        assert_eq!(plan.columns, 3);

        let lines = render_columns(&cells(&["a", "bb", "ccc"]), FALLBACK_WIDTH);
        assert_eq!(lines, vec!["a    bb   ccc  "]);

        // reading the single row left to right gives back the input order
        let order: Vec<usize> = (0..plan.columns).map(|c| plan.index_at(0, c)).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn fills_down_then_across() {
        // column width 4, display 10 -> 2 columns, 5 names -> 3 rows
        let names = ["aa", "bb", "cc", "dd", "ee"];
        let plan = LayoutPlan::compute(names.len(), 2, 10);
        assert_eq!((plan.columns, plan.rows, plan.column_width), (2, 3, 4));
        assert_eq!(position_of(&plan, 3), (0, 1));
        assert_eq!(position_of(&plan, 2), (2, 0));

        let lines = render_columns(&cells(&names), 10);
        assert_eq!(lines, vec!["aa  dd  ", "bb  ee  ", "cc  "]);
    }

    #[test]
    fn position_and_index_agree() {
        let plan = LayoutPlan::compute(17, 6, 40);
        for i in 0..17 {
            let (row, column) = position_of(&plan, i);
            assert_eq!(plan.index_at(row, column), i);
        }
    }

    #[test]
    fn narrow_display_still_gets_one_column() {
        let plan = LayoutPlan::compute(3, 30, 10);
        assert_eq!((plan.columns, plan.rows), (1, 3));

        let lines = render_columns(&cells(&["x", "y", "z"]), 1);
        assert_eq!(lines, vec!["x  ", "y  ", "z  "]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        let plan = LayoutPlan::compute(0, 0, FALLBACK_WIDTH);
        assert_eq!(plan.rows, 0);
        assert!(render_columns(&[], FALLBACK_WIDTH).is_empty());
    }

    #[test]
    fn padding_uses_display_width_not_escape_codes() {
        let colored = Cell::new("\u{1b}[34mab\u{1b}[39m".to_string(), 2);
        let lines = render_columns(&[colored, plain("c")], FALLBACK_WIDTH);
        assert_eq!(lines, vec!["\u{1b}[34mab\u{1b}[39m  c   "]);
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("🦀"), 2);
        assert_eq!(display_width("abc"), 3);
    }

    #[test]
    fn unknown_width_falls_back_to_80() {
        assert_eq!(effective_width(None), 80);
        assert_eq!(effective_width(Some(0)), 80);
        assert_eq!(effective_width(Some(132)), 132);
    }
}
