use crate::config::SCROLL_LOOKAHEAD_PX;
use crate::sections::SectionId;
use crate::viewport::Viewport;

/// Measured vertical extent of a section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    /// Half-open: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Returns the first section (in the order given) containing the reference
/// point `scroll_y + SCROLL_LOOKAHEAD_PX`.
///
/// `bounds` is consumed lazily, so sections after the match are never
/// measured.
pub fn compute_active_section<I>(scroll_y: f64, bounds: I) -> Option<SectionId>
where
    I: IntoIterator<Item = SectionBounds>,
{
    let reference = scroll_y + SCROLL_LOOKAHEAD_PX;
    bounds
        .into_iter()
        .find(|b| b.contains(reference))
        .map(|b| b.id)
}

/// Single owner of the active section.
///
/// When the reference point falls outside every section (above the first,
/// below the last, or in a gap) the previous value is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionTracker {
    active: SectionId,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Applies one scroll observation. Returns the new section if it changed.
    pub fn observe<I>(&mut self, scroll_y: f64, bounds: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = SectionBounds>,
    {
        let found = compute_active_section(scroll_y, bounds)?;
        if found == self.active {
            return None;
        }
        self.active = found;
        Some(found)
    }

    /// Re-measures every section live and applies the result.
    pub fn track<V: Viewport>(&mut self, viewport: &V) -> Option<SectionId> {
        let scroll_y = match viewport.scroll_y() {
            Ok(y) => y,
            Err(e) => {
                log::warn!("skipping scroll update: {e}");
                return None;
            }
        };
        self.observe(scroll_y, viewport.section_bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SECTIONS;
    use crate::viewport::testing::FakeViewport;

    const HEIGHT: f64 = 800.0;

    // stacked full-height sections with no gaps
    fn stacked() -> Vec<SectionBounds> {
        SECTIONS
            .iter()
            .enumerate()
            .map(|(i, id)| SectionBounds::new(*id, i as f64 * HEIGHT, HEIGHT))
            .collect()
    }

    #[test]
    fn test_top_of_page_is_hero() {
        assert_eq!(compute_active_section(0.0, stacked()), Some(SectionId::Hero));
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.observe(0.0, stacked()), None);
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn test_offsets_inside_each_section() {
        for (k, id) in SECTIONS.iter().enumerate() {
            let top = k as f64 * HEIGHT;
            // reference point = scroll + lookahead, so pick scroll values
            // that put it strictly inside [top, top + HEIGHT)
            for scroll in [
                top - SCROLL_LOOKAHEAD_PX + 1.0,
                top + 200.0,
                top + HEIGHT - SCROLL_LOOKAHEAD_PX - 1.0,
            ] {
                if scroll < 0.0 {
                    continue;
                }
                assert_eq!(
                    compute_active_section(scroll, stacked()),
                    Some(*id),
                    "scroll {scroll} should select {id}"
                );
            }
        }
    }

    #[test]
    fn test_boundaries_are_half_open() {
        // reference exactly on the top edge of "about" belongs to "about"
        let scroll = HEIGHT - SCROLL_LOOKAHEAD_PX;
        assert_eq!(compute_active_section(scroll, stacked()), Some(SectionId::About));
        assert_eq!(
            compute_active_section(scroll - 0.5, stacked()),
            Some(SectionId::Hero)
        );
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let bounds = vec![
            SectionBounds::new(SectionId::Hero, 0.0, 1000.0),
            SectionBounds::new(SectionId::About, 500.0, 1000.0),
        ];
        assert_eq!(compute_active_section(600.0, bounds), Some(SectionId::Hero));
    }

    #[test]
    fn test_no_match_past_last_section() {
        let end = SECTIONS.len() as f64 * HEIGHT;
        assert_eq!(compute_active_section(end, stacked()), None);
    }

    #[test]
    fn test_sticky_past_last_section() {
        let mut tracker = SectionTracker::new();
        let last_top = (SECTIONS.len() - 1) as f64 * HEIGHT;
        assert_eq!(tracker.observe(last_top, stacked()), Some(SectionId::Contact));
        // elastic overscroll past the bottom
        assert_eq!(tracker.observe(last_top + 5_000.0, stacked()), None);
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_sticky_in_gap() {
        let bounds = vec![
            SectionBounds::new(SectionId::Hero, 0.0, 500.0),
            SectionBounds::new(SectionId::About, 1000.0, 500.0),
        ];
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.observe(950.0, bounds.clone()), Some(SectionId::About));
        // reference 800 sits between the two sections
        assert_eq!(tracker.observe(700.0, bounds), None);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_observe_reports_only_changes() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.observe(HEIGHT, stacked()), Some(SectionId::About));
        assert_eq!(tracker.observe(HEIGHT + 10.0, stacked()), None);
        assert_eq!(tracker.observe(0.0, stacked()), Some(SectionId::Hero));
    }

    #[test]
    fn test_track_skips_missing_sections() {
        let mut viewport = FakeViewport::stacked(HEIGHT);
        viewport.remove(SectionId::Skills);
        viewport.scroll_to(2.0 * HEIGHT + 10.0);

        let mut tracker = SectionTracker::new();
        // skills is missing, nothing else contains the reference point
        assert_eq!(tracker.track(&viewport), None);
        assert_eq!(tracker.active(), SectionId::Hero);

        viewport.scroll_to(3.0 * HEIGHT);
        assert_eq!(tracker.track(&viewport), Some(SectionId::Experience));
    }

    #[test]
    fn test_track_remeasures_after_layout_change() {
        let mut viewport = FakeViewport::stacked(HEIGHT);
        viewport.scroll_to(HEIGHT);
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.track(&viewport), Some(SectionId::About));

        // narrower viewport: every section doubles in height
        viewport.relayout(2.0 * HEIGHT);
        assert_eq!(tracker.track(&viewport), Some(SectionId::Hero));
    }

    #[test]
    fn test_track_stops_measuring_after_match() {
        let mut viewport = FakeViewport::stacked(HEIGHT);
        viewport.scroll_to(0.0);
        let mut tracker = SectionTracker::new();
        tracker.track(&viewport);
        assert_eq!(viewport.measured(), vec![SectionId::Hero]);
    }
}
