use crate::terminal::Size;

/// Screen rectangle of one pane, borders included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl PaneRect {
    /// Rows available for content once the border is subtracted.
    pub fn inner_height(&self) -> usize {
        usize::from(self.height.saturating_sub(2))
    }

    pub fn inner_width(&self) -> usize {
        usize::from(self.width.saturating_sub(2))
    }
}

/// Proportional three-pane arrangement: navigation on the left (~30% of the
/// width), content on the right, path strip along the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub tree: PaneRect,
    pub text: PaneRect,
    pub path: PaneRect,
}

const PATH_PANE_HEIGHT: u16 = 3;
const MIN_TREE_WIDTH: u16 = 16;

impl Layout {
    pub fn compute(size: Size) -> Self {
        let width = size.width.max(4);
        let height = size.height.max(PATH_PANE_HEIGHT + 3);

        let upper_height = height - PATH_PANE_HEIGHT;
        let proportional = (u32::from(width) * 3 / 10) as u16;
        let tree_width = proportional.max(MIN_TREE_WIDTH).min(width / 2);

        Self {
            tree: PaneRect {
                x: 0,
                y: 0,
                width: tree_width,
                height: upper_height,
            },
            text: PaneRect {
                x: tree_width,
                y: 0,
                width: width - tree_width,
                height: upper_height,
            },
            path: PaneRect {
                x: 0,
                y: upper_height,
                width,
                height: PATH_PANE_HEIGHT,
            },
        }
    }
}
