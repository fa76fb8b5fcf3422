//! Access to the browser services the page depends on.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::ViewportError;
use crate::progress::scroll_fraction;
use crate::sections::{SectionId, SECTIONS};
use crate::tracker::SectionBounds;

/// Rendering environment as seen by the scroll tracker, progress bar and
/// navigation.
pub trait Viewport {
    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> Result<f64, ViewportError>;

    /// Full height of the document, including the part scrolled out of view.
    fn document_height(&self) -> Result<f64, ViewportError>;

    /// Height of the visible area.
    fn viewport_height(&self) -> Result<f64, ViewportError>;

    /// Live measurement of one section.
    fn measure(&self, id: SectionId) -> Result<SectionBounds, ViewportError>;

    /// Starts an animated scroll that brings the section's top into view.
    fn smooth_scroll_to(&self, id: SectionId) -> Result<(), ViewportError>;

    fn open_in_new_tab(&self, url: &str) -> Result<(), ViewportError>;

    /// Measures sections in document order, skipping any that cannot be
    /// measured.
    fn section_bounds(&self) -> impl Iterator<Item = SectionBounds> + '_ {
        SECTIONS.into_iter().filter_map(move |id| match self.measure(id) {
            Ok(bounds) => Some(bounds),
            Err(e) => {
                log::trace!("not tracking {id}: {e}");
                None
            }
        })
    }

    /// Authoritative, unsmoothed scroll fraction in `[0, 1]`.
    fn scroll_progress(&self) -> Result<f64, ViewportError> {
        Ok(scroll_fraction(
            self.scroll_y()?,
            self.document_height()?,
            self.viewport_height()?,
        ))
    }
}

/// [`Viewport`] backed by the real `window` and `document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl BrowserViewport {
    fn window(&self) -> Result<web_sys::Window, ViewportError> {
        web_sys::window().ok_or(ViewportError::NoWindow)
    }

    fn document(&self) -> Result<web_sys::Document, ViewportError> {
        self.window()?.document().ok_or(ViewportError::NoDocument)
    }

    fn element(&self, id: SectionId) -> Result<HtmlElement, ViewportError> {
        self.document()?
            .get_element_by_id(id.as_str())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(ViewportError::MissingSection(id))
    }

    fn root(&self, what: &'static str) -> Result<web_sys::Element, ViewportError> {
        self.document()?
            .document_element()
            .ok_or(ViewportError::Measurement(what))
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> Result<f64, ViewportError> {
        self.window()?
            .scroll_y()
            .map_err(|e| ViewportError::Js(format!("{e:?}")))
    }

    fn document_height(&self) -> Result<f64, ViewportError> {
        let root = self.root("document height")?;
        Ok(f64::from(root.scroll_height()))
    }

    /// `clientHeight` of the root element: the visible area minus any
    /// horizontal scrollbar, which is what the maximum `scrollY` is
    /// measured against.
    fn viewport_height(&self) -> Result<f64, ViewportError> {
        let root = self.root("viewport height")?;
        Ok(f64::from(root.client_height()))
    }

    fn measure(&self, id: SectionId) -> Result<SectionBounds, ViewportError> {
        let el = self.element(id)?;
        Ok(SectionBounds::new(
            id,
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ))
    }

    fn smooth_scroll_to(&self, id: SectionId) -> Result<(), ViewportError> {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        self.element(id)?
            .scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), ViewportError> {
        match self.window()?.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ViewportError::PopupBlocked(url.to_string())),
            Err(e) => Err(ViewportError::Js(format!("{e:?}"))),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeViewport;
    use super::*;

    #[test]
    fn test_section_bounds_skip_missing() {
        let mut viewport = FakeViewport::stacked(500.0);
        viewport.remove(SectionId::About);
        let ids = viewport.section_bounds().map(|b| b.id).collect::<Vec<_>>();
        assert_eq!(ids.len(), SECTIONS.len() - 1);
        assert!(!ids.contains(&SectionId::About));
        assert_eq!(ids.first(), Some(&SectionId::Hero));
    }

    #[test]
    fn test_scroll_progress_uses_document_range() {
        let mut viewport = FakeViewport::stacked(500.0);
        // document is 7 * 500, viewport 500 -> 3000px of scroll range
        viewport.scroll_to(1500.0);
        assert_eq!(viewport.scroll_progress(), Ok(0.5));
        viewport.scroll_to(3000.0);
        assert_eq!(viewport.scroll_progress(), Ok(1.0));
    }

    #[test]
    fn test_scroll_progress_full_at_max_scroll_with_scrollbar() {
        // a 17px horizontal scrollbar shrinks the client area, so the
        // browser allows scrolling 17px further than the window height
        // would suggest
        let mut viewport = FakeViewport::stacked(500.0);
        viewport.viewport_height = 483.0;
        viewport.scroll_to(3500.0 - 483.0);
        assert_eq!(viewport.scroll_progress(), Ok(1.0));
        viewport.scroll_to(3000.0);
        let partial = viewport.scroll_progress().expect("fake viewport measures");
        assert!(partial < 1.0);
    }
}
