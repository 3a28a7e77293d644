//! Section indexing and page geometry.
//!
//! The page is a pinned region of [`SECTION_COUNT`] sections followed by an
//! end region. Offsets are in logical pixels measured from the page top.

use serde::{Deserialize, Serialize};

use crate::config::{LAST_SECTION, SECTION_COUNT};

/// Maps normalized progress through the pinned region to a section index.
///
/// `floor(progress * N)` clamped to `[0, N-1]`, so `1.0` lands on the last
/// section rather than one past it.
pub fn target_section(progress: f32) -> usize {
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((p * SECTION_COUNT as f32).floor() as usize).min(LAST_SECTION)
}

/// Width of the progress indicator for a committed section, in percent.
pub fn progress_fill_percent(section: usize) -> f32 {
    section.min(LAST_SECTION) as f32 / LAST_SECTION as f32 * 100.0
}

/// Two-digit, one-based section number shown next to the progress bar.
pub fn section_label(section: usize) -> String {
    format!("{:02}", section + 1)
}

/// Direction of the most recent significant scroll movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

impl ScrollDirection {
    /// Signed form (-1, 0, 1) used in the debug line.
    pub fn signum(self) -> i8 {
        match self {
            ScrollDirection::Up => -1,
            ScrollDirection::Down => 1,
            ScrollDirection::None => 0,
        }
    }
}

/// A scroll-driven region: progress runs 0 at `start` to 1 at `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    pub start: f32,
    pub end: f32,
}

impl ScrollRegion {
    pub fn progress(&self, offset: f32) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if offset >= self.end { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Page geometry shared by the navigator, scroll provider and front-end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport_height: f32,
    pub fixed_section_top: f32,
    pub fixed_section_height: f32,
    pub end_section_height: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            viewport_height: 800.0,
            fixed_section_top: 0.0,
            fixed_section_height: 800.0 * SECTION_COUNT as f32,
            end_section_height: 800.0,
        }
    }
}

impl PageLayout {
    /// Scroll offset at which `section` starts. Each section owns an equal
    /// share of the pinned region.
    pub fn section_start(&self, section: usize) -> f32 {
        let i = section.min(LAST_SECTION) as f32;
        self.fixed_section_top + self.fixed_section_height * i / SECTION_COUNT as f32
    }

    /// All section start offsets in order.
    pub fn section_positions(&self) -> [f32; SECTION_COUNT] {
        std::array::from_fn(|i| self.section_start(i))
    }

    /// Pinned region: from its top hitting the viewport top until its
    /// bottom hits the viewport bottom.
    pub fn pinned_region(&self) -> ScrollRegion {
        ScrollRegion {
            start: self.fixed_section_top,
            end: self.fixed_section_top + self.fixed_section_height - self.viewport_height,
        }
    }

    pub fn end_section_top(&self) -> f32 {
        self.fixed_section_top + self.fixed_section_height
    }

    /// End region: from its top reaching the viewport centre until its
    /// bottom reaches the viewport bottom.
    pub fn end_region(&self) -> ScrollRegion {
        let top = self.end_section_top();
        ScrollRegion {
            start: top - self.viewport_height * 0.5,
            end: top + self.end_section_height - self.viewport_height,
        }
    }

    /// Whole scrollable page.
    pub fn page_region(&self) -> ScrollRegion {
        ScrollRegion {
            start: 0.0,
            end: self.max_offset(),
        }
    }

    pub fn max_offset(&self) -> f32 {
        (self.end_section_top() + self.end_section_height - self.viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_section_floors_progress() {
        assert_eq!(target_section(0.0), 0);
        assert_eq!(target_section(0.099), 0);
        assert_eq!(target_section(0.1), 1);
        assert_eq!(target_section(0.25), 2);
        assert_eq!(target_section(0.999), 9);
    }

    #[test]
    fn test_target_section_full_progress_is_last() {
        assert_eq!(target_section(1.0), 9);
    }

    #[test]
    fn test_target_section_out_of_range_is_clamped() {
        assert_eq!(target_section(-0.5), 0);
        assert_eq!(target_section(7.0), 9);
        assert_eq!(target_section(f32::NAN), 0);
    }

    #[test]
    fn test_target_section_every_decile() {
        for i in 0..SECTION_COUNT {
            let p = i as f32 / 10.0 + 0.05;
            assert_eq!(target_section(p), i);
        }
    }

    #[test]
    fn test_progress_fill_percent() {
        assert_eq!(progress_fill_percent(0), 0.0);
        assert_eq!(progress_fill_percent(9), 100.0);
        assert!((progress_fill_percent(3) - 33.333_332).abs() < 1e-3);
    }

    #[test]
    fn test_section_label_is_one_based_and_padded() {
        assert_eq!(section_label(0), "01");
        assert_eq!(section_label(9), "10");
    }

    #[test]
    fn test_section_positions_split_region_evenly() {
        let layout = PageLayout::default();
        let positions = layout.section_positions();
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[1], 800.0);
        assert_eq!(positions[9], 7200.0);
    }

    #[test]
    fn test_section_start_maps_back_to_same_section() {
        let layout = PageLayout::default();
        let region = layout.pinned_region();
        for i in 0..SECTION_COUNT {
            let p = region.progress(layout.section_start(i));
            assert_eq!(target_section(p), i, "section {i} at progress {p}");
        }
    }

    #[test]
    fn test_region_progress_clamps() {
        let region = ScrollRegion {
            start: 100.0,
            end: 300.0,
        };
        assert_eq!(region.progress(0.0), 0.0);
        assert_eq!(region.progress(200.0), 0.5);
        assert_eq!(region.progress(1000.0), 1.0);
    }

    #[test]
    fn test_degenerate_region() {
        let region = ScrollRegion {
            start: 100.0,
            end: 100.0,
        };
        assert_eq!(region.progress(50.0), 0.0);
        assert_eq!(region.progress(100.0), 1.0);
    }

    #[test]
    fn test_end_region_starts_half_a_viewport_early() {
        let layout = PageLayout::default();
        let region = layout.end_region();
        assert_eq!(region.start, 8000.0 - 400.0);
        assert_eq!(region.end, 8000.0);
        assert_eq!(layout.max_offset(), 8000.0);
    }

    #[test]
    fn test_scroll_direction_signum() {
        assert_eq!(ScrollDirection::Up.signum(), -1);
        assert_eq!(ScrollDirection::Down.signum(), 1);
        assert_eq!(ScrollDirection::None.signum(), 0);
    }
}
