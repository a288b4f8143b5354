//! FILENAME: core/report-engine/src/paginate.rs
//! Paginator - packs rendered groups into pages under a row budget.
//!
//! Greedy single pass over the groups in their given order; ordering is a
//! caller concern applied before pagination. A group is never split across
//! pages. The budget is a soft cap: a single group whose own cost exceeds
//! it still lands whole on a page of its own.

/// Packs groups into pages by their rendered-row cost.
///
/// `costs[i]` is the number of rendered rows group `i` contributes on its
/// own (header + data rows + total rows). Spacing rows are charged only
/// when the group is not first on its page. Returns the group indices for
/// each page, in order; no group is duplicated or dropped.
pub fn paginate(costs: &[usize], max_rows_per_page: usize, spacing: usize) -> Vec<Vec<usize>> {
    let mut pages: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut current_rows = 0usize;

    for (group_idx, &cost) in costs.iter().enumerate() {
        let spacing_rows = if current.is_empty() { 0 } else { spacing };

        if !current.is_empty() && current_rows + spacing_rows + cost > max_rows_per_page {
            pages.push(std::mem::take(&mut current));
            current_rows = 0;
            // First group on the fresh page carries no spacing.
            current.push(group_idx);
            current_rows += cost;
        } else {
            current.push(group_idx);
            current_rows += spacing_rows + cost;
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_groups_fit_one_page() {
        let pages = paginate(&[5, 5], 22, 4);
        // 5 + 4 + 5 = 14 <= 22
        assert_eq!(pages, vec![vec![0, 1]]);
    }

    #[test]
    fn test_greedy_boundary_decision() {
        // The documented scenario: keys 001/002/003 with 10/5/12 data rows,
        // costs 12/7/14 (header + rows + total), budget 22, spacing 4.
        // Page 1: 001 (12). 002 would add 4 + 7 = 23 > 22, so it opens
        // page 2; 003 would add 7 + 4 + 14 = 25 > 22, so it opens page 3.
        let pages = paginate(&[12, 7, 14], 22, 4);
        assert_eq!(pages, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_exact_fit_is_kept() {
        // 10 + 4 + 8 = 22 == budget: fits.
        let pages = paginate(&[10, 8], 22, 4);
        assert_eq!(pages, vec![vec![0, 1]]);
    }

    #[test]
    fn test_oversized_group_gets_own_page() {
        let pages = paginate(&[5, 40, 5], 22, 4);
        assert_eq!(pages, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_oversized_first_group_is_not_split() {
        let pages = paginate(&[40], 22, 4);
        assert_eq!(pages, vec![vec![0]]);
    }

    #[test]
    fn test_no_group_dropped_or_duplicated() {
        let costs = vec![3, 9, 12, 2, 7, 20, 1];
        let pages = paginate(&costs, 22, 4);

        let mut seen: Vec<usize> = pages.into_iter().flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..costs.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_budget_respected_except_oversized() {
        let costs = vec![8, 8, 8, 30, 4, 4];
        let spacing = 4;
        let budget = 22;
        let pages = paginate(&costs, budget, spacing);

        for page in &pages {
            let rows: usize = page
                .iter()
                .enumerate()
                .map(|(pos, &g)| costs[g] + if pos > 0 { spacing } else { 0 })
                .sum();
            if page.len() == 1 && costs[page[0]] > budget {
                continue; // documented soft-cap deviation
            }
            assert!(rows <= budget, "page {:?} holds {} rows", page, rows);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(paginate(&[], 22, 4).is_empty());
    }
}
