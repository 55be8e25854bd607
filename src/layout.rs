//! Thumbnail grid sizing.
//!
//! Given an image count and a square viewport, picks a near-square grid and
//! one square thumbnail size so that every cell fits without scrolling.

/// Outer margin and inter-cell spacing, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub margin: u32,
    pub spacing: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    pub thumb_side: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// No images: one disabled cell covering the grid area.
    Placeholder,
    Grid(GridSpec),
}

impl GridSpec {
    /// Row-major cell of the image at `index`.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl Layout {
    pub fn grid(&self) -> Option<&GridSpec> {
        match self {
            Layout::Placeholder => None,
            Layout::Grid(spec) => Some(spec),
        }
    }
}

/// Smallest `c` with `c * c >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 0 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c
}

pub fn compute_layout(count: usize, width: u32, height: u32, params: LayoutParams) -> Layout {
    if count == 0 {
        return Layout::Placeholder;
    }

    let cols = ceil_sqrt(count);
    let rows = count.div_ceil(cols);

    let available_w = width.saturating_sub(params.margin.saturating_mul(2));
    let available_h = height.saturating_sub(params.margin.saturating_mul(2));

    let thumb_w = fit_side(available_w, cols, params.spacing);
    let thumb_h = fit_side(available_h, rows, params.spacing);

    Layout::Grid(GridSpec {
        rows,
        cols,
        thumb_side: thumb_w.min(thumb_h),
    })
}

fn fit_side(available: u32, cells: usize, spacing: u32) -> u32 {
    let cells = cells as u64;
    let gaps = (cells - 1) * spacing as u64;
    ((available as u64).saturating_sub(gaps) / cells) as u32
}
