//! Layout computation for the four tiling strategies
//!
//! All strategies fill the viewport minus the taskbar reservation, leave
//! `padding` pixels between neighbouring tiles, and emit rectangles no
//! smaller than the configured floor. When the floor forces a tile to grow
//! beyond its share, tiles may overlap; that boundary case is accepted.
//!
//! During an adaptive pass in the grid and master-detail strategies the
//! pinned tile is the live rectangle as given. A left or top drag past the
//! screen edge therefore yields a tile with a negative origin; only its size
//! is held to the floor.

use std::collections::BTreeMap;

use tracing::debug;

use super::{ActiveOverride, TileConfig, TileLayout};
use crate::math::TileRect;
use crate::types::WindowId;
use crate::viewport::Viewport;

/// Computed layout: window ID to rectangle
pub type TileMap = BTreeMap<WindowId, TileRect>;

/// Columns and rows used by the grid strategy for `count` windows
///
/// Columns are `ceil(sqrt(count))`, rows are `ceil(count / columns)`.
pub fn grid_dimensions(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut cols = 1;
    while cols * cols < count {
        cols += 1;
    }
    let rows = count.div_ceil(cols);
    (cols, rows)
}

/// Pure tiling engine
#[derive(Clone, Debug, Default)]
pub struct TileEngine {
    config: TileConfig,
}

impl TileEngine {
    /// Create an engine with the given configuration
    pub fn new(config: TileConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &TileConfig {
        &self.config
    }

    /// Compute rectangles for `windows` under `layout`
    ///
    /// Static layouts place windows in the order given; callers pass a
    /// deterministic order (lexicographic by ID) so re-renders are stable.
    /// With an `active` override whose window is in the list, the layout is
    /// recomputed adaptively around that window's live rectangle. An empty
    /// window list yields an empty map.
    pub fn calculate_layout(
        &self,
        windows: &[WindowId],
        layout: TileLayout,
        viewport: &Viewport,
        active: Option<&ActiveOverride>,
    ) -> TileMap {
        if windows.is_empty() {
            return TileMap::new();
        }

        let width = viewport.available_width();
        let height = viewport.available_height();

        let placed = match active {
            Some(pinned) if windows.contains(&pinned.id) => {
                debug!(
                    layout = layout.id(),
                    window = %pinned.id,
                    axis = ?pinned.edge.map(|edge| edge.axis()),
                    "adaptive re-tile"
                );
                self.adaptive(windows, layout, width, height, pinned)
            }
            _ => self.static_layout(windows, layout, width, height),
        };

        let floor = self.config.min_window_size;
        placed
            .into_iter()
            .map(|(id, rect)| (id, rect.clamp_to_floor(floor)))
            .collect()
    }

    fn static_layout(
        &self,
        windows: &[WindowId],
        layout: TileLayout,
        width: f32,
        height: f32,
    ) -> Vec<(WindowId, TileRect)> {
        match layout {
            TileLayout::Vertical => self.vertical(windows, width, height),
            TileLayout::Horizontal => self.horizontal(windows, width, height),
            TileLayout::Grid => self.grid(windows, width, height),
            TileLayout::MasterDetail => self.master_detail(windows, width, height),
        }
    }

    /// Size of one of `count` cells sharing `extent` with padding between them
    fn cell_extent(&self, extent: f32, count: usize) -> f32 {
        let gaps = self.config.padding * count.saturating_sub(1) as f32;
        ((extent - gaps) / count as f32).max(0.0)
    }

    fn vertical(&self, windows: &[WindowId], width: f32, height: f32) -> Vec<(WindowId, TileRect)> {
        let row_height = self.cell_extent(height, windows.len());
        let stride = row_height + self.config.padding;

        windows
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let rect = TileRect::new(0.0, i as f32 * stride, width, row_height);
                (id.clone(), rect)
            })
            .collect()
    }

    fn horizontal(
        &self,
        windows: &[WindowId],
        width: f32,
        height: f32,
    ) -> Vec<(WindowId, TileRect)> {
        let col_width = self.cell_extent(width, windows.len());
        let stride = col_width + self.config.padding;

        windows
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let rect = TileRect::new(i as f32 * stride, 0.0, col_width, height);
                (id.clone(), rect)
            })
            .collect()
    }

    fn grid(&self, windows: &[WindowId], width: f32, height: f32) -> Vec<(WindowId, TileRect)> {
        let (cols, rows) = grid_dimensions(windows.len());
        let cell_width = self.cell_extent(width, cols);
        let cell_height = self.cell_extent(height, rows);
        let padding = self.config.padding;

        windows
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let row = (i / cols) as f32;
                let col = (i % cols) as f32;
                let rect = TileRect::new(
                    col * (cell_width + padding),
                    row * (cell_height + padding),
                    cell_width,
                    cell_height,
                );
                (id.clone(), rect)
            })
            .collect()
    }

    fn master_detail(
        &self,
        windows: &[WindowId],
        width: f32,
        height: f32,
    ) -> Vec<(WindowId, TileRect)> {
        let Some((master, details)) = windows.split_first() else {
            return Vec::new();
        };

        let padding = self.config.padding;
        let master_width = width * self.config.clamped_master_ratio();
        let detail_x = master_width + padding;
        let detail_width = (width - master_width - padding).max(0.0);

        let mut placed = Vec::with_capacity(windows.len());
        placed.push((
            master.clone(),
            TileRect::new(0.0, 0.0, master_width, height),
        ));

        if !details.is_empty() {
            let detail_height = self.cell_extent(height, details.len());
            for (i, id) in details.iter().enumerate() {
                let y = i as f32 * (detail_height + padding);
                placed.push((
                    id.clone(),
                    TileRect::new(detail_x, y, detail_width, detail_height),
                ));
            }
        }

        placed
    }

    /// Pinned window first, the rest in lexicographic order
    fn pinned_order(windows: &[WindowId], pinned: &WindowId) -> Vec<WindowId> {
        let mut others: Vec<WindowId> = windows.iter().filter(|id| *id != pinned).cloned().collect();
        others.sort();
        let mut ordered = Vec::with_capacity(others.len() + 1);
        ordered.push(pinned.clone());
        ordered.extend(others);
        ordered
    }

    fn adaptive(
        &self,
        windows: &[WindowId],
        layout: TileLayout,
        width: f32,
        height: f32,
        pinned: &ActiveOverride,
    ) -> Vec<(WindowId, TileRect)> {
        let ordered = Self::pinned_order(windows, &pinned.id);
        let n = ordered.len();
        let padding = self.config.padding;
        let gaps = padding * (n - 1) as f32;

        match layout {
            TileLayout::Vertical => {
                let pinned_height = pinned.rect.height;
                let sibling_height = if n > 1 {
                    ((height - pinned_height - gaps) / (n - 1) as f32).max(0.0)
                } else {
                    0.0
                };

                let mut y = 0.0;
                ordered
                    .into_iter()
                    .map(|id| {
                        let row_height = if id == pinned.id {
                            pinned_height
                        } else {
                            sibling_height
                        };
                        let rect = TileRect::new(0.0, y, width, row_height);
                        y += row_height + padding;
                        (id, rect)
                    })
                    .collect()
            }
            TileLayout::Horizontal => {
                let pinned_width = pinned.rect.width;
                let sibling_width = if n > 1 {
                    ((width - pinned_width - gaps) / (n - 1) as f32).max(0.0)
                } else {
                    0.0
                };

                let mut x = 0.0;
                ordered
                    .into_iter()
                    .map(|id| {
                        let col_width = if id == pinned.id {
                            pinned_width
                        } else {
                            sibling_width
                        };
                        let rect = TileRect::new(x, 0.0, col_width, height);
                        x += col_width + padding;
                        (id, rect)
                    })
                    .collect()
            }
            // No canonical rule for proportional redistribution in two
            // dimensions: recompute statically and overwrite the pinned tile.
            TileLayout::Grid | TileLayout::MasterDetail => {
                let mut placed = self.static_layout(&ordered, layout, width, height);
                for (id, rect) in placed.iter_mut() {
                    if *id == pinned.id {
                        *rect = pinned.rect;
                    }
                }
                placed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;
    use crate::tiling::ResizeEdge;

    const EPS: f32 = 0.01;

    fn ids(names: &[&str]) -> Vec<WindowId> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn engine() -> TileEngine {
        TileEngine::default()
    }

    #[test]
    fn test_empty_windows_yield_empty_map() {
        let viewport = Viewport::new(1920.0, 1080.0);
        for layout in TileLayout::all() {
            assert!(engine()
                .calculate_layout(&[], *layout, &viewport, None)
                .is_empty());
        }
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(grid_dimensions(0), (0, 0));
        assert_eq!(grid_dimensions(1), (1, 1));
        assert_eq!(grid_dimensions(3), (2, 2));
        assert_eq!(grid_dimensions(4), (2, 2));
        assert_eq!(grid_dimensions(5), (3, 2));
        assert_eq!(grid_dimensions(9), (3, 3));
        assert_eq!(grid_dimensions(10), (4, 3));
    }

    #[test]
    fn test_vertical_rows_fill_available_height() {
        let viewport = Viewport::new(1920.0, 1080.0);
        for n in [1usize, 2, 5] {
            let windows: Vec<WindowId> = (0..n).map(|i| format!("w{}", i)).collect();
            let map = engine().calculate_layout(&windows, TileLayout::Vertical, &viewport, None);

            let total: f32 = map.values().map(|r| r.height).sum::<f32>() + 10.0 * (n - 1) as f32;
            assert!(
                (total - 1040.0).abs() < EPS,
                "n={} total={} expected 1040",
                n,
                total
            );
            for rect in map.values() {
                assert!((rect.width - 1920.0).abs() < EPS);
                assert_eq!(rect.x, 0.0);
            }
        }
    }

    #[test]
    fn test_horizontal_columns_fill_available_width() {
        let viewport = Viewport::new(1920.0, 1080.0);
        for n in [1usize, 2, 5] {
            let windows: Vec<WindowId> = (0..n).map(|i| format!("w{}", i)).collect();
            let map = engine().calculate_layout(&windows, TileLayout::Horizontal, &viewport, None);

            let total: f32 = map.values().map(|r| r.width).sum::<f32>() + 10.0 * (n - 1) as f32;
            assert!((total - 1920.0).abs() < EPS, "n={} total={}", n, total);
            for rect in map.values() {
                assert!((rect.height - 1040.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_vertical_rows_are_in_caller_order() {
        let viewport = Viewport::new(1000.0, 640.0);
        let map = engine().calculate_layout(&ids(&["b", "a"]), TileLayout::Vertical, &viewport, None);
        assert_eq!(map["b"].y, 0.0);
        assert!((map["a"].y - 305.0).abs() < EPS);
    }

    #[test]
    fn test_grid_three_windows_scenario() {
        let viewport = Viewport::with_taskbar(900.0, 600.0, 40.0);
        let map = engine().calculate_layout(&ids(&["A", "B", "C"]), TileLayout::Grid, &viewport, None);

        assert_eq!(map.len(), 3);
        assert_eq!(map["A"], TileRect::new(0.0, 0.0, 445.0, 275.0));
        assert_eq!(map["B"], TileRect::new(455.0, 0.0, 445.0, 275.0));
        assert_eq!(map["C"], TileRect::new(0.0, 285.0, 445.0, 275.0));

        let rects: Vec<&TileRect> = map.values().collect();
        for (i, a) in rects.iter().enumerate() {
            assert!(a.x >= 0.0 && a.right() <= 900.0 + EPS);
            assert!(a.y >= 0.0 && a.bottom() <= 560.0 + EPS);
            for b in rects.iter().skip(i + 1) {
                assert!(!a.intersects(b));
            }
        }
    }

    #[test]
    fn test_grid_five_windows_uses_three_columns_two_rows() {
        let viewport = Viewport::new(1920.0, 1080.0);
        let windows = ids(&["a", "b", "c", "d", "e"]);
        let map = engine().calculate_layout(&windows, TileLayout::Grid, &viewport, None);

        let mut xs: Vec<i32> = map.values().map(|r| r.x.round() as i32).collect();
        xs.sort();
        xs.dedup();
        let mut ys: Vec<i32> = map.values().map(|r| r.y.round() as i32).collect();
        ys.sort();
        ys.dedup();
        assert_eq!(xs.len(), 3);
        assert_eq!(ys.len(), 2);
        // Row-major: "d" starts the second row
        assert_eq!(map["d"].x, 0.0);
        assert!(map["d"].y > 0.0);
    }

    #[test]
    fn test_master_detail() {
        let viewport = Viewport::with_taskbar(1000.0, 640.0, 40.0);
        let map = engine().calculate_layout(
            &ids(&["main", "x", "y"]),
            TileLayout::MasterDetail,
            &viewport,
            None,
        );

        assert_eq!(map["main"], TileRect::new(0.0, 0.0, 600.0, 600.0));
        assert_eq!(map["x"], TileRect::new(610.0, 0.0, 390.0, 295.0));
        assert_eq!(map["y"], TileRect::new(610.0, 305.0, 390.0, 295.0));
    }

    #[test]
    fn test_master_detail_single_window() {
        let viewport = Viewport::with_taskbar(1000.0, 640.0, 40.0);
        let map = engine().calculate_layout(&ids(&["main"]), TileLayout::MasterDetail, &viewport, None);
        assert_eq!(map.len(), 1);
        assert_eq!(map["main"], TileRect::new(0.0, 0.0, 600.0, 600.0));
    }

    #[test]
    fn test_degenerate_viewport_respects_floor() {
        let viewport = Viewport::with_taskbar(300.0, 300.0, 40.0);
        let windows: Vec<WindowId> = (0..10).map(|i| format!("w{:02}", i)).collect();

        for layout in TileLayout::all() {
            let map = engine().calculate_layout(&windows, *layout, &viewport, None);
            assert_eq!(map.len(), 10);
            for rect in map.values() {
                assert!(rect.width >= 200.0, "{:?} width {}", layout, rect.width);
                assert!(rect.height >= 150.0, "{:?} height {}", layout, rect.height);
                assert!(rect.x >= 0.0 && rect.y >= 0.0);
            }
        }
    }

    #[test]
    fn test_adaptive_vertical_redistributes_height_to_siblings() {
        let viewport = Viewport::with_taskbar(1000.0, 1040.0, 40.0);
        let pinned = ActiveOverride::resizing(
            "b",
            TileRect::new(0.0, 0.0, 1000.0, 500.0),
            ResizeEdge::Bottom,
        );
        let map = engine().calculate_layout(
            &ids(&["a", "b", "c"]),
            TileLayout::Vertical,
            &viewport,
            Some(&pinned),
        );

        // Pinned window first, siblings split (1000 - 500 - 20) / 2
        assert_eq!(map["b"], TileRect::new(0.0, 0.0, 1000.0, 500.0));
        assert_eq!(map["a"], TileRect::new(0.0, 510.0, 1000.0, 240.0));
        assert_eq!(map["c"], TileRect::new(0.0, 760.0, 1000.0, 240.0));
    }

    #[test]
    fn test_adaptive_horizontal_redistributes_width() {
        let viewport = Viewport::with_taskbar(1210.0, 840.0, 40.0);
        let pinned = ActiveOverride::resizing(
            "c",
            TileRect::new(0.0, 0.0, 600.0, 800.0),
            ResizeEdge::Right,
        );
        let map = engine().calculate_layout(
            &ids(&["a", "b", "c"]),
            TileLayout::Horizontal,
            &viewport,
            Some(&pinned),
        );

        assert_eq!(map["c"], TileRect::new(0.0, 0.0, 600.0, 800.0));
        assert_eq!(map["a"], TileRect::new(610.0, 0.0, 295.0, 800.0));
        assert_eq!(map["b"], TileRect::new(915.0, 0.0, 295.0, 800.0));
    }

    #[test]
    fn test_adaptive_sibling_clamped_pinned_untouched() {
        let viewport = Viewport::with_taskbar(1000.0, 640.0, 40.0);
        let pinned = ActiveOverride::resizing(
            "a",
            TileRect::new(0.0, 0.0, 1000.0, 550.0),
            ResizeEdge::Bottom,
        );
        let map = engine().calculate_layout(
            &ids(&["a", "b"]),
            TileLayout::Vertical,
            &viewport,
            Some(&pinned),
        );

        assert_eq!(map["a"].height, 550.0);
        assert_eq!(map["b"].height, 150.0);
        // Overlap past the bottom edge is accepted
        assert!(map["b"].bottom() > 600.0);
    }

    #[test]
    fn test_adaptive_grid_overrides_only_pinned() {
        let viewport = Viewport::with_taskbar(900.0, 600.0, 40.0);
        let live = TileRect::new(20.0, 30.0, 500.0, 260.0);
        let pinned = ActiveOverride::resizing("C", live, ResizeEdge::Right);
        let map = engine().calculate_layout(
            &ids(&["A", "B", "C"]),
            TileLayout::Grid,
            &viewport,
            Some(&pinned),
        );

        // Static grid over [C, A, B] with C's cell replaced by its live rect
        assert_eq!(map["C"], live);
        assert_eq!(map["A"], TileRect::new(455.0, 0.0, 445.0, 275.0));
        assert_eq!(map["B"], TileRect::new(0.0, 285.0, 445.0, 275.0));
    }

    #[test]
    fn test_adaptive_grid_keeps_live_origin_off_screen() {
        let viewport = Viewport::with_taskbar(900.0, 600.0, 40.0);
        let live = TileRect::new(-40.0, -10.0, 480.0, 300.0);
        let pinned = ActiveOverride::resizing("A", live, ResizeEdge::Left);
        let map = engine().calculate_layout(&ids(&["A", "B"]), TileLayout::Grid, &viewport, Some(&pinned));

        assert_eq!(map["A"], live);
        assert_eq!(map["B"], TileRect::new(455.0, 0.0, 445.0, 560.0));
    }

    #[test]
    fn test_adaptive_master_detail_pins_first() {
        let viewport = Viewport::with_taskbar(1000.0, 640.0, 40.0);
        let live = TileRect::new(610.0, 0.0, 390.0, 400.0);
        let pinned = ActiveOverride::resizing("z", live, ResizeEdge::Bottom);
        let map = engine().calculate_layout(
            &ids(&["a", "z"]),
            TileLayout::MasterDetail,
            &viewport,
            Some(&pinned),
        );

        assert_eq!(map["z"], live);
        assert_eq!(map["a"], TileRect::new(610.0, 0.0, 390.0, 600.0));
    }

    #[test]
    fn test_override_for_unknown_window_falls_back_to_static() {
        let viewport = Viewport::new(1920.0, 1080.0);
        let windows = ids(&["a", "b"]);
        let pinned = ActiveOverride::pinned("ghost", TileRect::new(0.0, 0.0, 300.0, 300.0));

        let adaptive =
            engine().calculate_layout(&windows, TileLayout::Vertical, &viewport, Some(&pinned));
        let fixed = engine().calculate_layout(&windows, TileLayout::Vertical, &viewport, None);
        assert_eq!(adaptive, fixed);
    }

    #[test]
    fn test_custom_floor() {
        let engine = TileEngine::new(TileConfig {
            min_window_size: Size::new(50.0, 50.0),
            ..Default::default()
        });
        let viewport = Viewport::with_taskbar(300.0, 300.0, 40.0);
        let windows: Vec<WindowId> = (0..10).map(|i| format!("w{}", i)).collect();
        let map = engine.calculate_layout(&windows, TileLayout::Vertical, &viewport, None);
        for rect in map.values() {
            assert!(rect.height >= 50.0);
        }
    }
}
