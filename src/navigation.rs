use crate::sections::{SectionId, SECTIONS};
use crate::viewport::Viewport;

pub const ACTIVE_CLASS: &str = "text-blue-400";
pub const INACTIVE_CLASS: &str = "text-gray-400";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub is_active: bool,
}

/// One entry per registered section, in registry order.
pub fn nav_items(active: SectionId) -> impl Iterator<Item = NavItem> {
    SECTIONS.into_iter().map(move |id| NavItem {
        id,
        is_active: id == active,
    })
}

pub fn emphasis_class(is_active: bool) -> &'static str {
    if is_active {
        ACTIVE_CLASS
    } else {
        INACTIVE_CLASS
    }
}

/// Smooth-scrolls to `id`. The active section follows once the browser
/// reports the resulting scroll.
pub fn scroll_to_section<V: Viewport>(viewport: &V, id: SectionId) {
    if let Err(e) = viewport.smooth_scroll_to(id) {
        log::warn!("could not scroll to {id}: {e}");
    }
}

pub fn open_external<V: Viewport>(viewport: &V, url: &str) {
    if let Err(e) = viewport.open_in_new_tab(url) {
        log::warn!("could not open {url}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::SectionTracker;
    use crate::viewport::testing::FakeViewport;

    #[test]
    fn test_one_item_per_section_in_order() {
        let items = nav_items(SectionId::Hero).collect::<Vec<_>>();
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), SECTIONS.to_vec());
    }

    #[test]
    fn test_exactly_one_item_emphasised() {
        for active in SECTIONS {
            let emphasised = nav_items(active)
                .filter(|i| i.is_active)
                .map(|i| i.id)
                .collect::<Vec<_>>();
            assert_eq!(emphasised, vec![active]);
        }
    }

    #[test]
    fn test_emphasis_class() {
        assert_eq!(emphasis_class(true), ACTIVE_CLASS);
        assert_eq!(emphasis_class(false), INACTIVE_CLASS);
    }

    #[test]
    fn test_activating_contact_targets_contact() {
        let viewport = FakeViewport::stacked(900.0);
        let tracker = SectionTracker::new();
        scroll_to_section(&viewport, SectionId::Contact);
        assert_eq!(viewport.scrolled_to(), vec![SectionId::Contact]);
        // the tracker only moves once a scroll event is observed
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn test_second_activation_redirects() {
        let viewport = FakeViewport::stacked(900.0);
        scroll_to_section(&viewport, SectionId::Contact);
        scroll_to_section(&viewport, SectionId::Skills);
        assert_eq!(
            viewport.scrolled_to(),
            vec![SectionId::Contact, SectionId::Skills]
        );
    }

    #[test]
    fn test_missing_target_is_not_fatal() {
        let mut viewport = FakeViewport::stacked(900.0);
        viewport.remove(SectionId::Projects);
        scroll_to_section(&viewport, SectionId::Projects);
        assert!(viewport.scrolled_to().is_empty());
    }

    #[test]
    fn test_open_external() {
        let viewport = FakeViewport::stacked(900.0);
        open_external(&viewport, "https://example.com");
        assert_eq!(viewport.opened(), vec!["https://example.com".to_string()]);
    }
}
