//! "Read more" action: smooth-scroll from the cover to the post text.

/// Gap kept between the viewport top and the text section, in pixels.
pub const READ_MORE_OFFSET: f64 = 10.0;

/// `ScrollToOptions.behavior`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

impl ScrollBehavior {
    /// Value for `ScrollToOptions.behavior` and the button's `data-scroll-behavior`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
        }
    }
}

/// A `window.scrollTo` request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Scroll so the text section starts [`READ_MORE_OFFSET`] below the viewport top.
    pub fn read_more(text_offset_top: f64) -> Self {
        Self {
            top: text_offset_top - READ_MORE_OFFSET,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Something that can be scrolled.
pub trait Viewport {
    fn scroll_to(&mut self, request: ScrollRequest);
}

/// Activate the read-more button. Stateless; repeating it asks for the same position.
pub fn scroll_to_text<V: Viewport + ?Sized>(viewport: &mut V, text_offset_top: f64) {
    viewport.scroll_to(ScrollRequest::read_more(text_offset_top));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingViewport(Vec<ScrollRequest>);

    impl Viewport for RecordingViewport {
        fn scroll_to(&mut self, request: ScrollRequest) {
            self.0.push(request);
        }
    }

    #[test]
    fn test_read_more_target() {
        let request = ScrollRequest::read_more(500.0);
        assert_eq!(request.top, 490.0);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
        assert_eq!(request.behavior.as_str(), "smooth");
    }

    #[test]
    fn test_scroll_to_text_is_idempotent() {
        let mut viewport = RecordingViewport::default();
        scroll_to_text(&mut viewport, 500.0);
        scroll_to_text(&mut viewport, 500.0);

        assert_eq!(viewport.0.len(), 2);
        assert_eq!(viewport.0[0], viewport.0[1]);
        assert_eq!(viewport.0[0].top, 490.0);
    }

    #[test]
    fn test_text_near_top_can_go_negative() {
        // browsers clamp negative scroll targets to 0
        assert_eq!(ScrollRequest::read_more(4.0).top, -6.0);
    }
}
