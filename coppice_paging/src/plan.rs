// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::{Insets, Point, Rect, Size};
use smallvec::SmallVec;

/// One horizontal line of items within a page.
///
/// `width` is the sum of member widths plus horizontal margins; `height` is
/// the tallest member plus vertical margins. A row's first member is always
/// present even when it alone exceeds the container width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    /// Item indices in placement order.
    pub items: SmallVec<[usize; 8]>,
    /// Aggregate width, margins included.
    pub width: f64,
    /// Tallest member height, margins included.
    pub height: f64,
}

/// A fixed-capacity vertical stack of rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// 0-based index in assignment order.
    pub index: usize,
    /// Member rows, top to bottom.
    pub rows: Vec<Row>,
}

impl Page {
    /// The widest member row.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rows.iter().fold(0.0, |acc, row| acc.max(row.width))
    }

    /// The sum of member row heights.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rows.iter().map(|row| row.height).sum()
    }

    /// Item indices across all rows, in placement order.
    pub fn items(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().flat_map(|row| row.items.iter().copied())
    }
}

/// An ordered plan of pages covering every input item exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PagePlan {
    pages: Vec<Page>,
}

impl PagePlan {
    /// Row capacity used by the paginated panel.
    pub const DEFAULT_ROWS_PER_PAGE: usize = 2;

    /// Packs `sizes` into rows and pages for a container `container_width`
    /// wide.
    ///
    /// Items are consumed in order (scene order). Greedy packing: an item
    /// joins the current row while the running width plus the item and its
    /// horizontal margins stays strictly below `container_width`; otherwise
    /// the row closes and the item starts the next row, even if it is wider
    /// than the container on its own. No item is ever dropped and overflow
    /// is never clipped.
    ///
    /// Rows then group into pages of `rows_per_page` (clamped to at least 1),
    /// with the final page taking the remainder. An empty `sizes` yields a
    /// single empty page with index 0.
    #[must_use]
    pub fn compute(
        container_width: f64,
        item_margin: Insets,
        sizes: &[Size],
        rows_per_page: usize,
    ) -> Self {
        let rows_per_page = rows_per_page.max(1);
        let h_margin = item_margin.x0 + item_margin.x1;
        let v_margin = item_margin.y0 + item_margin.y1;

        let mut rows = Vec::new();
        let mut row = Row::default();
        for (item, size) in sizes.iter().enumerate() {
            let estimated = row.width + size.width + h_margin;
            if row.items.is_empty() || estimated < container_width {
                row.items.push(item);
                row.width = estimated;
                row.height = row.height.max(size.height + v_margin);
            } else {
                rows.push(core::mem::take(&mut row));
                row.items.push(item);
                row.width = size.width + h_margin;
                row.height = size.height + v_margin;
            }
        }
        if !row.items.is_empty() {
            rows.push(row);
        }

        let mut pages = Vec::new();
        if rows.is_empty() {
            pages.push(Page::default());
        } else {
            for (index, chunk) in rows.chunks(rows_per_page).enumerate() {
                pages.push(Page {
                    index,
                    rows: chunk.to_vec(),
                });
            }
        }
        Self { pages }
    }

    /// The planned pages, in index order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages; at least 1.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of rows across all pages.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|p| p.rows.len()).sum()
    }

    /// Total number of items across all pages.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.pages
            .iter()
            .map(|p| p.rows.iter().map(|r| r.items.len()).sum::<usize>())
            .sum()
    }

    /// The highest valid page index.
    #[must_use]
    pub fn last_page_index(&self) -> usize {
        self.pages.len().saturating_sub(1)
    }

    /// Assigns each item a slot rectangle on the page strip.
    ///
    /// Pages sit one `container` width apart along an infinite horizontal
    /// strip: page *i*'s rows start at
    /// `(container.width − page_width) / 2 + i * container.width`, and each
    /// page is vertically centered in the container. Within a row, items
    /// advance left to right by their width plus horizontal margins; rows
    /// advance by the previous row's height.
    ///
    /// The returned vector is indexed by item; its length is `sizes.len()`.
    /// Slots are independent of any navigation offset, and rows wider than
    /// the container simply extend past its edge.
    #[must_use]
    pub fn arrange(&self, container: Size, item_margin: Insets, sizes: &[Size]) -> Vec<Rect> {
        let h_margin = item_margin.x0 + item_margin.x1;
        let mut slots = alloc::vec![Rect::ZERO; sizes.len()];
        for page in &self.pages {
            let page_width = page.width();
            let mut base_y = (container.height - page.height()) / 2.0;
            for row in &page.rows {
                let mut base_x = (container.width - page_width) / 2.0
                    + page.index as f64 * container.width;
                for &item in &row.items {
                    let size = sizes[item];
                    slots[item] = Rect::from_origin_size(Point::new(base_x, base_y), size);
                    base_x += size.width + h_margin;
                }
                base_y += row.height;
            }
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Insets, Size};

    use super::PagePlan;

    const MARGIN: Insets = Insets::uniform(5.0);

    fn uniform(n: usize, w: f64, h: f64) -> Vec<Size> {
        vec![Size::new(w, h); n]
    }

    #[test]
    fn empty_input_yields_one_empty_page() {
        let plan = PagePlan::compute(1000.0, MARGIN, &[], 2);
        assert_eq!(plan.page_count(), 1);
        assert_eq!(plan.pages()[0].index, 0);
        assert_eq!(plan.row_count(), 0);
        assert_eq!(plan.pages()[0].width(), 0.0);
        assert_eq!(plan.pages()[0].height(), 0.0);
    }

    #[test]
    fn no_item_is_ever_dropped() {
        for n in [1, 4, 5, 19, 40] {
            let sizes = uniform(n, 200.0, 150.0);
            let plan = PagePlan::compute(1000.0, MARGIN, &sizes, 2);
            assert_eq!(plan.item_count(), n, "all {n} items placed");

            let mut seen: Vec<usize> = plan.pages().iter().flat_map(|p| p.items()).collect();
            seen.sort_unstable();
            let expected: Vec<usize> = (0..n).collect();
            assert_eq!(seen, expected, "each item exactly once, {n} items");
        }
    }

    #[test]
    fn oversized_item_gets_its_own_row_without_clipping() {
        // A 2000-wide item in a 1000-wide container.
        let sizes = vec![
            Size::new(300.0, 100.0),
            Size::new(2000.0, 100.0),
            Size::new(300.0, 100.0),
        ];
        let plan = PagePlan::compute(1000.0, MARGIN, &sizes, 2);

        let rows: Vec<_> = plan.pages().iter().flat_map(|p| p.rows.iter()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].items.as_slice(), [1]);
        // Aggregate width keeps the full oversized extent.
        assert_eq!(rows[1].width, 2010.0);
    }

    #[test]
    fn strict_bound_excludes_exact_fit() {
        // Two 490-wide items with 10 of margin each: the running width for
        // the second is exactly 1000, which is not strictly below the bound.
        let sizes = uniform(2, 490.0, 100.0);
        let plan = PagePlan::compute(1000.0, MARGIN, &sizes, 2);
        let rows: Vec<_> = plan.pages().iter().flat_map(|p| p.rows.iter()).collect();
        assert_eq!(rows.len(), 2, "exact fit falls to the next row");
    }

    #[test]
    fn nineteen_items_in_a_1000_wide_container() {
        // 19 items of 200x150, margin 5/side: four items per row (the fifth
        // would reach 1050), five rows, three pages, last page one row.
        let sizes = uniform(19, 200.0, 150.0);
        let plan = PagePlan::compute(1000.0, MARGIN, &sizes, 2);

        let row_lens: Vec<usize> = plan
            .pages()
            .iter()
            .flat_map(|p| p.rows.iter().map(|r| r.items.len()))
            .collect();
        assert_eq!(row_lens, [4, 4, 4, 4, 3]);

        assert_eq!(plan.page_count(), 3);
        assert_eq!(plan.pages()[0].rows.len(), 2);
        assert_eq!(plan.pages()[1].rows.len(), 2);
        assert_eq!(plan.pages()[2].rows.len(), 1);

        // Row metrics: width 4*210, height 150 + 10.
        assert_eq!(plan.pages()[0].rows[0].width, 840.0);
        assert_eq!(plan.pages()[0].rows[0].height, 160.0);
        assert_eq!(plan.pages()[0].height(), 320.0);
        assert_eq!(plan.pages()[2].height(), 160.0);
        assert_eq!(plan.pages()[2].width(), 630.0);
    }

    #[test]
    fn page_count_is_ceil_of_rows_over_capacity() {
        for (rows_needed, capacity, expected_pages) in
            [(5, 2, 3), (4, 2, 2), (1, 2, 1), (7, 3, 3), (6, 3, 2)]
        {
            // One oversized item per row forces `rows_needed` rows.
            let sizes = uniform(rows_needed, 1200.0, 100.0);
            let plan = PagePlan::compute(1000.0, MARGIN, &sizes, capacity);
            assert_eq!(plan.row_count(), rows_needed);
            assert_eq!(
                plan.page_count(),
                expected_pages,
                "{rows_needed} rows / {capacity} per page"
            );
            let remainder = rows_needed % capacity;
            let last = plan.pages().last().unwrap();
            let expected_last = if remainder == 0 { capacity } else { remainder };
            assert_eq!(last.rows.len(), expected_last, "last page remainder");
        }
    }

    #[test]
    fn arrange_centers_pages_and_spaces_them_one_container_apart() {
        let sizes = uniform(19, 200.0, 150.0);
        let container = Size::new(1000.0, 600.0);
        let plan = PagePlan::compute(container.width, MARGIN, &sizes, 2);
        let slots = plan.arrange(container, MARGIN, &sizes);

        // Page 0, row 0: base x = (1000 - 840) / 2, base y = (600 - 320) / 2.
        assert_eq!(slots[0].origin(), (80.0, 140.0).into());
        assert_eq!(slots[1].origin(), (290.0, 140.0).into());
        assert_eq!(slots[3].origin(), (710.0, 140.0).into());
        // Row 1 advances by row 0's height.
        assert_eq!(slots[4].origin(), (80.0, 300.0).into());

        // Page 1 sits one container width to the right.
        assert_eq!(slots[8].origin(), (1080.0, 140.0).into());

        // Page 2 has one 3-item row: recentered both ways.
        assert_eq!(slots[16].origin(), (2185.0, 220.0).into());

        // Slots carry the item's own size.
        assert_eq!(slots[0].size(), Size::new(200.0, 150.0));
    }

    #[test]
    fn arrange_is_independent_of_page_visibility() {
        // The arranger writes absolute strip positions; nothing depends on a
        // "current page", which is navigation state.
        let sizes = uniform(6, 400.0, 100.0);
        let container = Size::new(1000.0, 400.0);
        let plan = PagePlan::compute(container.width, MARGIN, &sizes, 2);

        let a = plan.arrange(container, MARGIN, &sizes);
        let b = plan.arrange(container, MARGIN, &sizes);
        assert_eq!(a, b);
    }

    #[test]
    fn single_item_plan() {
        let sizes = uniform(1, 200.0, 100.0);
        let plan = PagePlan::compute(1000.0, MARGIN, &sizes, 2);
        assert_eq!(plan.page_count(), 1);
        assert_eq!(plan.row_count(), 1);
        assert_eq!(plan.last_page_index(), 0);
        assert_eq!(plan.pages()[0].rows[0].width, 210.0);
    }
}
