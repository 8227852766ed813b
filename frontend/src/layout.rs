use common::{Disk, NR_PEGS, PegId};

/// Pixel dimensions of the scene. This is provided to the components through
/// a [`ContextProvider`](yew::ContextProvider) instead of being read from the
/// window, so that positions can be computed without a browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub nr_disks: u8,
    /// Vertical distance between two stacked disks.
    pub disk_pitch: i32,
    pub disk_height: i32,
    /// Width of the smallest disk.
    pub min_disk_width: i32,
    /// How much wider each disk is than the next smaller one.
    pub width_step: i32,
    pub peg_gap: i32,
    pub rod_width: i32,
    pub base_height: i32,
    pub margin: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.left, self.top, self.width, self.height
        )
    }
}

impl Geometry {
    pub fn for_disks(nr_disks: u8) -> Self {
        Self {
            nr_disks,
            disk_pitch: 30,
            disk_height: 24,
            min_disk_width: 50,
            width_step: 20,
            peg_gap: 20,
            rod_width: 8,
            base_height: 10,
            margin: 20,
        }
    }

    /// Width reserved for a single peg, i.e. the width of the largest disk.
    fn column_width(&self) -> i32 {
        self.disk_width(Disk(self.nr_disks.saturating_sub(1)))
    }

    fn peg_center(&self, peg: PegId) -> i32 {
        let column = self.column_width();
        self.margin + column / 2 + peg.index() as i32 * (column + self.peg_gap)
    }

    /// Y coordinate of the surface the bottom disks rest on. One extra level
    /// of headroom is left above a full stack.
    fn floor(&self) -> i32 {
        self.margin + (self.nr_disks as i32 + 1) * self.disk_pitch
    }

    pub fn disk_width(&self, disk: Disk) -> i32 {
        self.min_disk_width + self.width_step * disk.0 as i32
    }

    /// Where a disk is drawn when it sits at `level` (0 = bottom) of `peg`.
    pub fn disk_rect(&self, peg: PegId, level: usize, disk: Disk) -> Rect {
        let width = self.disk_width(disk);
        Rect {
            left: self.peg_center(peg) - width / 2,
            top: self.floor() - (level as i32 + 1) * self.disk_pitch
                + (self.disk_pitch - self.disk_height),
            width,
            height: self.disk_height,
        }
    }

    /// Where a disk hovers above `peg` while it is carried from one peg to
    /// another, clear of the rods.
    pub fn lifted_rect(&self, peg: PegId, disk: Disk) -> Rect {
        let width = self.disk_width(disk);
        Rect {
            left: self.peg_center(peg) - width / 2,
            top: self.margin,
            width,
            height: self.disk_height,
        }
    }

    pub fn rod_rect(&self, peg: PegId) -> Rect {
        let top = self.margin + self.disk_pitch;
        Rect {
            left: self.peg_center(peg) - self.rod_width / 2,
            top,
            width: self.rod_width,
            height: self.floor() - top,
        }
    }

    pub fn base_rect(&self) -> Rect {
        Rect {
            left: self.margin / 2,
            top: self.floor(),
            width: self.width() - self.margin,
            height: self.base_height,
        }
    }

    pub fn width(&self) -> i32 {
        let pegs = NR_PEGS as i32;
        2 * self.margin + pegs * self.column_width() + (pegs - 1) * self.peg_gap
    }

    pub fn height(&self) -> i32 {
        self.floor() + self.base_height + self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_disks_go_up() {
        let g = Geometry::for_disks(5);
        let lower = g.disk_rect(PegId::left(), 0, Disk(4));
        let upper = g.disk_rect(PegId::left(), 1, Disk(3));
        assert_eq!(lower.top - upper.top, g.disk_pitch);
        assert!(lower.top + lower.height <= g.base_rect().top);
    }

    #[test]
    fn test_larger_disks_are_wider_and_centered() {
        let g = Geometry::for_disks(5);
        let small = g.disk_rect(PegId::middle(), 1, Disk(0));
        let large = g.disk_rect(PegId::middle(), 0, Disk(4));
        assert!(large.width > small.width);
        assert_eq!(
            small.left + small.width / 2,
            large.left + large.width / 2
        );
    }

    #[test]
    fn test_pegs_do_not_overlap() {
        let g = Geometry::for_disks(8);
        let largest = Disk(7);
        let left = g.disk_rect(PegId::left(), 0, largest);
        let middle = g.disk_rect(PegId::middle(), 0, largest);
        let right = g.disk_rect(PegId::right(), 0, largest);
        assert!(left.left + left.width < middle.left);
        assert!(middle.left + middle.width < right.left);
        assert!(right.left + right.width <= g.width());
    }

    #[test]
    fn test_full_stack_fits_under_rod_top() {
        let g = Geometry::for_disks(10);
        let top_disk = g.disk_rect(PegId::right(), 9, Disk(0));
        assert!(top_disk.top > g.rod_rect(PegId::right()).top);
    }

    #[test]
    fn test_lifted_disk_clears_rods() {
        let g = Geometry::for_disks(6);
        let lifted = g.lifted_rect(PegId::left(), Disk(5));
        assert!(lifted.top + lifted.height <= g.rod_rect(PegId::left()).top);
        assert_eq!(lifted.left, g.disk_rect(PegId::left(), 0, Disk(5)).left);
    }

    #[test]
    fn test_rect_style() {
        let r = Rect {
            left: 1,
            top: 2,
            width: 3,
            height: 4,
        };
        assert_eq!(r.style(), "left: 1px; top: 2px; width: 3px; height: 4px;");
    }
}
