//! Composed code entry widget - N slots edge-to-edge
//!
//! Lays the slots out with equal widths and fixed spacing and records each
//! slot's screen rectangle in an [`EntryHitMap`] so the host can translate
//! mouse clicks back into slot taps.

use pinpad_input::CodeInput;
use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget, widgets::Widget};

use crate::theme::Theme;
use crate::widgets::slot::SlotWidget;

/// Screen rectangles recorded during the last render, for click hit-testing
#[derive(Debug, Clone, Default)]
pub struct EntryHitMap {
    area: Rect,
    slots: Vec<Rect>,
}

impl EntryHitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot index under the given screen position, if any
    pub fn slot_at(&self, x: u16, y: u16) -> Option<usize> {
        self.slots
            .iter()
            .position(|rect| rect.contains((x, y).into()))
    }

    /// Whether the position falls anywhere inside the control
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.contains((x, y).into())
    }

    pub fn slots(&self) -> &[Rect] {
        &self.slots
    }
}

/// Widget rendering a [`CodeInput`]'s slots
pub struct CodeEntryWidget<'a> {
    input: &'a CodeInput,
    theme: &'a Theme,
    caret_visible: bool,
    spacing: u16,
}

impl<'a> CodeEntryWidget<'a> {
    pub fn new(input: &'a CodeInput, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            caret_visible: false,
            spacing: 1,
        }
    }

    /// Current caret blink phase
    pub fn caret_visible(mut self, visible: bool) -> Self {
        self.caret_visible = visible;
        self
    }

    /// Cells between adjacent slots (default 1)
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }
}

impl StatefulWidget for CodeEntryWidget<'_> {
    type State = EntryHitMap;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;
        state.slots.clear();

        let count = self.input.slot_count() as u16;
        let total_spacing = self.spacing * count.saturating_sub(1);
        let slot_width = area.width.saturating_sub(total_spacing) / count;
        if slot_width == 0 || area.height < 2 {
            return;
        }

        // Center the run of slots within the area
        let used = slot_width * count + total_spacing;
        let mut x = area.x + (area.width - used) / 2;

        for i in 0..self.input.slot_count() {
            let rect = Rect::new(x, area.y, slot_width, area.height);
            state.slots.push(rect);

            SlotWidget::new(self.theme)
                .display(self.input.slot_char(i))
                .focused(self.input.focused() == Some(i))
                .caret_visible(self.caret_visible)
                .render(rect, buf);

            x += slot_width + self.spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::CLASSIC;
    use pinpad_input::{InputConfig, MemoryClipboard};

    fn new_input(slot_count: usize) -> CodeInput {
        CodeInput::with_clipboard(
            InputConfig::new(slot_count),
            Box::new(MemoryClipboard::new()),
        )
        .unwrap()
    }

    fn render(input: &CodeInput, width: u16) -> (Buffer, EntryHitMap) {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        let mut hit = EntryHitMap::new();
        CodeEntryWidget::new(input, &CLASSIC)
            .caret_visible(true)
            .render(area, &mut buf, &mut hit);
        (buf, hit)
    }

    #[test]
    fn test_records_one_rect_per_slot() {
        let input = new_input(4);
        let (_, hit) = render(&input, 19);

        assert_eq!(hit.slots().len(), 4);
        // Equal widths: (19 - 3 spacing) / 4 = 4
        for rect in hit.slots() {
            assert_eq!(rect.width, 4);
        }
        // Disjoint and ordered left to right
        for pair in hit.slots().windows(2) {
            assert!(pair[0].right() <= pair[1].left());
        }
    }

    #[test]
    fn test_slot_at_maps_click_to_index() {
        let input = new_input(4);
        let (_, hit) = render(&input, 19);

        let rect = hit.slots()[2];
        assert_eq!(hit.slot_at(rect.x + 1, rect.y + 1), Some(2));
        assert!(hit.contains(rect.x + 1, rect.y + 1));
    }

    #[test]
    fn test_click_in_spacing_gap_hits_no_slot() {
        let input = new_input(4);
        let (_, hit) = render(&input, 19);

        let gap_x = hit.slots()[0].right();
        assert_eq!(hit.slot_at(gap_x, 1), None);
        assert!(hit.contains(gap_x, 1));
    }

    #[test]
    fn test_renders_filled_digits() {
        let mut input = new_input(4);
        input.push_char('1');
        input.push_char('2');
        let (buf, hit) = render(&input, 19);

        let s0 = hit.slots()[0];
        let s1 = hit.slots()[1];
        assert_eq!(buf[(s0.x + s0.width / 2, 1)].symbol(), "1");
        assert_eq!(buf[(s1.x + s1.width / 2, 1)].symbol(), "2");
    }

    #[test]
    fn test_caret_in_focused_slot_only() {
        let mut input = new_input(4);
        input.push_char('1');
        let (buf, hit) = render(&input, 19);

        let focused = hit.slots()[1];
        let idle = hit.slots()[2];
        assert_eq!(buf[(focused.x + focused.width / 2, 1)].symbol(), "▏");
        assert_eq!(buf[(idle.x + idle.width / 2, 1)].symbol(), " ");
    }

    #[test]
    fn test_too_narrow_area_renders_nothing() {
        let input = new_input(8);
        let (_, hit) = render(&input, 7);
        assert!(hit.slots().is_empty());
    }
}
