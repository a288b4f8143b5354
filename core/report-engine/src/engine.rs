//! FILENAME: core/report-engine/src/engine.rs
//! Render Driver - orchestrates the calculation stages into page artifacts.
//!
//! This module takes a ReportDefinition (configuration) and a Table (data)
//! and produces one PageArtifact per page: role-tagged rows, a style plan,
//! and a page extent for the external drawing collaborator.
//!
//! Algorithm:
//! 1. Validate the configured columns against the table (fail fast)
//! 2. Map headers and classify column semantics
//! 3. Group rows by the key column (optional min-key sort)
//! 4. Render each group: header + data rows + total row(s)
//! 5. Pack rendered groups into pages under the row budget
//! 6. Derive the style plan and extent per page
//!
//! The driver never mutates its input; calling it twice on the same table
//! and definition yields identical artifacts.

use engine::Table;

use crate::definition::ReportDefinition;
use crate::error::ReportError;
use crate::grouping::{group_rows, sort_groups_by_min_key, Group};
use crate::headers::map_headers;
use crate::paginate::paginate;
use crate::semantics::{classify_columns, ColumnKind};
use crate::style_resolver::resolve_style;
use crate::summary::{build_total_rows, ResolvedSummary};
use crate::view::{compute_extent, truncate_display, PageArtifact, PageRow, ReportPage, RowRole};

/// One group rendered to rows, before pagination.
struct RenderedGroup {
    key: String,
    rows: Vec<PageRow>,
}

/// The main calculation engine for grouped reports.
pub struct ReportCalculator<'a> {
    definition: &'a ReportDefinition,
    table: &'a Table,
}

impl<'a> ReportCalculator<'a> {
    pub fn new(definition: &'a ReportDefinition, table: &'a Table) -> Self {
        ReportCalculator { definition, table }
    }

    /// Executes the full calculation and returns the page artifacts.
    pub fn calculate(&self) -> Result<Vec<PageArtifact>, ReportError> {
        // Step 1: Fail fast on configuration that cannot be satisfied.
        let resolved = self.validate_columns()?;

        // Step 2: Display names and column semantics come from the raw
        // header row; semantics always use the source spelling.
        let display_columns = map_headers(&self.table.columns, &self.definition.header_map);
        let kinds = classify_columns(&self.table.columns);

        // Step 3: Group (and optionally sort) the rows.
        let mut groups = group_rows(self.table, &self.definition.key_column)?;
        if self.definition.sort_groups_by_min_key {
            sort_groups_by_min_key(&mut groups);
        }

        // Step 4: Render every group to rows.
        let rendered: Vec<RenderedGroup> = groups
            .iter()
            .map(|group| self.render_group(group, &display_columns, &kinds, &resolved))
            .collect();

        // Step 5: Pack groups into pages.
        let costs: Vec<usize> = rendered.iter().map(|g| g.rows.len()).collect();
        let page_layout = paginate(
            &costs,
            self.definition.max_rows_per_page,
            self.definition.inter_group_spacing,
        );

        // Step 6: Assemble pages with spacing rows, extents, and style plans.
        let column_count = self.table.column_count();
        let mut artifacts = Vec::with_capacity(page_layout.len());

        for (page_index, group_indices) in page_layout.iter().enumerate() {
            let mut rows: Vec<PageRow> = Vec::new();
            let mut group_keys: Vec<String> = Vec::new();

            for (pos, &group_idx) in group_indices.iter().enumerate() {
                if pos > 0 {
                    for _ in 0..self.definition.inter_group_spacing {
                        rows.push(PageRow::spacing(column_count));
                    }
                }
                let group = &rendered[group_idx];
                group_keys.push(group.key.clone());
                rows.extend(group.rows.iter().cloned());
            }

            let extent = compute_extent(&rows, self.definition.sizing);
            let page = ReportPage {
                index: page_index,
                columns: display_columns.clone(),
                group_keys,
                rows,
                extent,
            };

            let style = resolve_style(&page, &kinds, resolved.amount_col, resolved.label_col);
            artifacts.push(PageArtifact { page, style });
        }

        Ok(artifacts)
    }

    /// Checks the key, amount, and label columns before any row is touched.
    fn validate_columns(&self) -> Result<ResolvedSummary, ReportError> {
        if self.table.columns.is_empty() {
            return Err(ReportError::EmptyTable);
        }

        for name in [
            &self.definition.key_column,
            &self.definition.summary.amount_column,
            &self.definition.summary.label_column,
        ] {
            if self.table.column_index(name).is_none() {
                return Err(ReportError::missing_column(name, &self.table.columns));
            }
        }

        ResolvedSummary::resolve(self.table, &self.definition.summary)
            .ok_or_else(|| ReportError::missing_column(
                &self.definition.summary.amount_column,
                &self.table.columns,
            ))
    }

    fn render_group(
        &self,
        group: &Group,
        display_columns: &[String],
        kinds: &[ColumnKind],
        resolved: &ResolvedSummary,
    ) -> RenderedGroup {
        let budget = self.definition.truncate_chars;
        let mut rows = Vec::with_capacity(group.len() + 2);

        rows.push(PageRow::new(RowRole::Header, display_columns.to_vec()));

        for &row_idx in &group.row_indices {
            let cells: Vec<String> = (0..self.table.column_count())
                .map(|col| {
                    let text = self.table.value_at(row_idx, col).display_value();
                    if kinds[col].is_truncatable() {
                        truncate_display(&text, budget)
                    } else {
                        text
                    }
                })
                .collect();
            rows.push(PageRow::new(RowRole::Data, cells));
        }

        for mut cells in build_total_rows(
            self.table,
            group,
            resolved,
            self.definition.total_strategy,
        ) {
            for (col, cell) in cells.iter_mut().enumerate() {
                if kinds[col].is_truncatable() {
                    *cell = truncate_display(cell, budget);
                }
            }
            rows.push(PageRow::new(RowRole::Total, cells));
        }

        RenderedGroup {
            key: group.key.clone(),
            rows,
        }
    }
}

/// Calculates a report from a definition and table, yielding one artifact
/// per page.
pub fn calculate_report(
    definition: &ReportDefinition,
    table: &Table,
) -> Result<Vec<PageArtifact>, ReportError> {
    ReportCalculator::new(definition, table).calculate()
}
