//! Slot widget - a single digit cell
//!
//! Purely presentational: one optional digit centered in the cell body, an
//! underline indicator on the bottom row, and a caret when focused. The
//! widget knows nothing about the controller; the caller passes display
//! state in.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::theme::Theme;

/// Caret glyph, a thin vertical bar
const CARET: char = '▏';
/// Underline glyph
const UNDERLINE: char = '─';

/// Widget for a single code entry slot
pub struct SlotWidget<'a> {
    theme: &'a Theme,
    display: Option<char>,
    focused: bool,
    caret_visible: bool,
}

impl<'a> SlotWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            display: None,
            focused: false,
            caret_visible: false,
        }
    }

    /// Character shown in the cell, if any
    pub fn display(mut self, ch: Option<char>) -> Self {
        self.display = ch;
        self
    }

    /// Focused slots get the highlighted underline
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Whether the caret is in the visible half of its blink cycle.
    /// Only drawn when the slot is also focused and empty.
    pub fn caret_visible(mut self, visible: bool) -> Self {
        self.caret_visible = visible;
        self
    }
}

impl Widget for SlotWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        // Underline indicator on the bottom row
        let underline_y = area.y + area.height - 1;
        let underline_style = self.theme.underline(self.focused);
        for x in area.x..area.x + area.width {
            buf[(x, underline_y)]
                .set_char(UNDERLINE)
                .set_style(underline_style);
        }

        // Digit or caret, centered in the body above the underline
        let center_x = area.x + area.width / 2;
        let center_y = area.y + (area.height - 1) / 2;

        if let Some(ch) = self.display {
            buf[(center_x, center_y)]
                .set_char(ch)
                .set_style(self.theme.digit());
        } else if self.focused && self.caret_visible {
            buf[(center_x, center_y)]
                .set_char(CARET)
                .set_style(self.theme.caret());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::CLASSIC;

    fn render(widget: SlotWidget) -> Buffer {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_renders_digit_centered() {
        let buf = render(SlotWidget::new(&CLASSIC).display(Some('7')));
        assert_eq!(buf[(2, 1)].symbol(), "7");
    }

    #[test]
    fn test_renders_underline_on_bottom_row() {
        let buf = render(SlotWidget::new(&CLASSIC));
        for x in 0..5 {
            assert_eq!(buf[(x, 2)].symbol(), "─");
        }
    }

    #[test]
    fn test_caret_shown_when_focused_and_visible() {
        let buf = render(SlotWidget::new(&CLASSIC).focused(true).caret_visible(true));
        assert_eq!(buf[(2, 1)].symbol(), "▏");
    }

    #[test]
    fn test_caret_hidden_in_dark_phase() {
        let buf = render(SlotWidget::new(&CLASSIC).focused(true).caret_visible(false));
        assert_eq!(buf[(2, 1)].symbol(), " ");
    }

    #[test]
    fn test_no_caret_when_unfocused() {
        let buf = render(SlotWidget::new(&CLASSIC).caret_visible(true));
        assert_eq!(buf[(2, 1)].symbol(), " ");
    }

    #[test]
    fn test_digit_takes_precedence_over_caret() {
        let buf = render(
            SlotWidget::new(&CLASSIC)
                .display(Some('3'))
                .focused(true)
                .caret_visible(true),
        );
        assert_eq!(buf[(2, 1)].symbol(), "3");
    }

    #[test]
    fn test_degenerate_area_is_skipped() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        SlotWidget::new(&CLASSIC).display(Some('1')).render(area, &mut buf);
        assert_eq!(buf[(2, 0)].symbol(), " ");
    }
}
