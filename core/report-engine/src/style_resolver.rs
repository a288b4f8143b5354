//! FILENAME: core/report-engine/src/style_resolver.rs
//! Grid Style Resolver - derives the per-cell style plan for a page.
//!
//! Purely descriptive: the plan maps (row, col) to style attributes and
//! performs no drawing. Rules are role-based with column semantics deciding
//! data-row alignment. Total rows reproduce the house convention of a
//! "floating" total label: a fixed set of column offsets is drawn with no
//! borders, and the columns flanking the label get a bottom border only,
//! underlining the figure.

use engine::{Borders, CellStyle, Color, NumberFormat, StyleRegistry, TextAlign};
use rustc_hash::FxHashMap;

use crate::semantics::ColumnKind;
use crate::view::{PageRow, ReportPage, RowRole};

/// Column offsets on total rows that render without any border.
pub const TOTAL_OPEN_COLUMNS: [usize; 8] = [0, 1, 2, 5, 6, 7, 10, 11];

/// Column offsets on total rows that render with a bottom border only.
pub const TOTAL_UNDERLINE_COLUMNS: [usize; 4] = [5, 6, 7, 8];

const DATA_FONT_SIZE: u8 = 8;
const EMPHASIS_FONT_SIZE: u8 = 9;

/// The style plan for one page: a shared style registry plus per-cell
/// indices into it. Cells not present resolve to the default style.
/// Recomputed on every render; never stored apart from its page.
#[derive(Debug, Clone)]
pub struct StylePlan {
    registry: StyleRegistry,
    cells: FxHashMap<(usize, usize), usize>,
}

impl StylePlan {
    fn new() -> Self {
        StylePlan {
            registry: StyleRegistry::new(),
            cells: FxHashMap::default(),
        }
    }

    fn set(&mut self, row: usize, col: usize, style: CellStyle) {
        let index = self.registry.get_or_create(style);
        if index != 0 {
            self.cells.insert((row, col), index);
        }
    }

    /// The style for a cell; the default style when no directive exists.
    pub fn style_at(&self, row: usize, col: usize) -> &CellStyle {
        match self.cells.get(&(row, col)) {
            Some(&index) => self.registry.get(index),
            None => self.registry.default_style(),
        }
    }

    /// Number of unique styles in the plan (including the default).
    pub fn unique_styles(&self) -> usize {
        self.registry.len()
    }

    /// Number of cells with an explicit (non-default) directive.
    pub fn directive_count(&self) -> usize {
        self.cells.len()
    }
}

/// Derives the style plan for a page from row roles and column semantics.
/// `amount_col` and `label_col` are the summary column offsets used by the
/// total-row rules.
pub fn resolve_style(
    page: &ReportPage,
    kinds: &[ColumnKind],
    amount_col: usize,
    label_col: usize,
) -> StylePlan {
    let mut plan = StylePlan::new();

    for (row_idx, row) in page.rows.iter().enumerate() {
        for col in 0..row.cells.len() {
            let style = match row.role {
                // Spacing rows get no directives at all.
                RowRole::Spacing => continue,
                RowRole::Header => header_style(),
                RowRole::Data => data_style(kinds.get(col).copied().unwrap_or(ColumnKind::Other)),
                RowRole::Total => total_style(col, amount_col, label_col),
            };
            plan.set(row_idx, col, style);
        }
    }

    plan
}

fn header_style() -> CellStyle {
    CellStyle::new()
        .with_bold(true)
        .with_font_size(EMPHASIS_FONT_SIZE)
        .with_text_align(TextAlign::Center)
        .with_background(Color::white())
        .with_borders(Borders::thin_box())
}

fn data_style(kind: ColumnKind) -> CellStyle {
    let mut style = CellStyle::new()
        .with_font_size(DATA_FONT_SIZE)
        .with_text_align(kind.alignment())
        .with_borders(Borders::thin_box());

    if matches!(kind, ColumnKind::Amount | ColumnKind::Rate) {
        style = style.with_number_format(NumberFormat::Number {
            decimal_places: 2,
            use_thousands_separator: true,
        });
    }

    style
}

fn total_style(col: usize, amount_col: usize, label_col: usize) -> CellStyle {
    let borders = if TOTAL_OPEN_COLUMNS.contains(&col) {
        if TOTAL_UNDERLINE_COLUMNS.contains(&col) {
            Borders::underline_only()
        } else {
            Borders::none()
        }
    } else if col == amount_col {
        Borders::bottom_right()
    } else {
        Borders::thin_box()
    };

    let align = if col == amount_col {
        TextAlign::Right
    } else if col == label_col {
        TextAlign::Center
    } else {
        TextAlign::Left
    };

    CellStyle::new()
        .with_bold(true)
        .with_font_size(EMPHASIS_FONT_SIZE)
        .with_text_align(align)
        .with_borders(borders)
}
