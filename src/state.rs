use std::rc::Rc;

use yew::prelude::*;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_MIN_OFFSET: f64 = 300.0;
/// Scroll offset past which the header switches to its elevated style.
pub const HEADER_ELEVATE_MIN_OFFSET: f64 = 50.0;
/// Delay before the hero entrance transition is enabled.
pub const HERO_REVEAL_DELAY_MS: u32 = 100;

/// Scroll-dependent page state, mutated only through [`PageAction`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PageState {
    pub scroll_offset: f64,
    pub hero_revealed: bool,
}

pub enum PageAction {
    Scrolled(f64),
    HeroRevealed,
}

impl PageState {
    pub fn back_to_top_visible(&self) -> bool {
        self.scroll_offset > BACK_TO_TOP_MIN_OFFSET
    }

    pub fn header_elevated(&self) -> bool {
        self.scroll_offset > HEADER_ELEVATE_MIN_OFFSET
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        match action {
            // Offsets never go negative even if the runtime reports one
            // mid-rubber-band.
            PageAction::Scrolled(offset) => Rc::new(Self {
                scroll_offset: offset.max(0.0),
                ..*self
            }),
            PageAction::HeroRevealed => Rc::new(Self {
                hero_revealed: true,
                ..*self
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(state: PageState, offset: f64) -> PageState {
        *Rc::new(state).reduce(PageAction::Scrolled(offset))
    }

    #[test]
    fn back_to_top_appears_strictly_past_threshold() {
        let cases = [
            (0.0, false),
            (299.0, false),
            (300.0, false),
            (301.0, true),
            (10_000.0, true),
        ];
        for (offset, expected) in cases {
            let state = scrolled(PageState::default(), offset);
            assert_eq!(state.back_to_top_visible(), expected, "offset {offset}");
        }
    }

    #[test]
    fn header_elevates_strictly_past_threshold() {
        assert!(!scrolled(PageState::default(), 50.0).header_elevated());
        assert!(scrolled(PageState::default(), 51.0).header_elevated());
    }

    #[test]
    fn negative_offsets_are_clamped() {
        let state = scrolled(PageState::default(), -40.0);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(!state.back_to_top_visible());
    }

    #[test]
    fn hero_reveal_survives_later_scrolls() {
        let state = *Rc::new(PageState::default()).reduce(PageAction::HeroRevealed);
        assert!(state.hero_revealed);
        let state = scrolled(state, 400.0);
        assert!(state.hero_revealed);
        assert!(state.back_to_top_visible());
    }
}
