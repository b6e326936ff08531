//! Keymap help bar UI component.

use crate::app::InputField;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, focus: InputField, colors: &ThemeColors) {
    let keymap_text = match focus {
        InputField::Expression => {
            "Enter:evaluate | Tab:next field | F2:remove oldest | F3:clear | F4:markers | F5:copy history | F6:theme | Esc:quit"
        },
        InputField::Polynomial | InputField::Range | InputField::Step => {
            "Enter:plot | Tab:next field | F2:remove oldest | F3:clear | F4:markers | F5:copy history | F6:theme | Esc:quit"
        },
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg0).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
