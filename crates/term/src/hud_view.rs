//! HudView: the text panel under the map.
//!
//! Row 0 shows a color swatch and the current region name, rows 1-2 the
//! message (region fact or NPC dialog, word-wrapped), row 3 the controls.

use crate::core::{Hud, WorldState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Rows used by the HUD panel.
pub const HUD_HEIGHT: u16 = 4;

const MESSAGE_LINES: u16 = 2;
const CONTROLS_HINT: &str = "arrows/WASD move   q quit";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HudView;

impl HudView {
    /// Draw the HUD with its top-left corner at (x, y), `width` columns wide.
    pub fn render_into(
        &self,
        world: &WorldState,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        width: u16,
    ) {
        let hud: &Hud = world.hud();
        let base = CellStyle::default();

        fb.fill_rect(x, y, width, HUD_HEIGHT, ' ', base);

        let swatch = world.current_region().color;
        fb.put_str(x, y, "██", CellStyle::new(swatch, base.bg));
        fb.put_str(x.saturating_add(3), y, hud.region_name(), base.bold());

        let message = hud.message();
        let style = if message.is_dialog() {
            CellStyle::new(Rgb::new(0xf9, 0xe7, 0x9f), base.bg).bold()
        } else {
            base
        };
        put_wrapped(fb, x, y.saturating_add(1), width, MESSAGE_LINES, message.text(), style);

        fb.put_str(x, y.saturating_add(3), CONTROLS_HINT, base.dim());
    }
}

/// Greedy word wrap into at most `max_lines` rows; the rest is dropped.
fn put_wrapped(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    width: u16,
    max_lines: u16,
    text: &str,
    style: CellStyle,
) {
    if width == 0 || max_lines == 0 {
        return;
    }
    let right = x.saturating_add(width);
    let mut line = 0;
    let mut cx = x;

    for word in text.split_whitespace() {
        let len = word.chars().count() as u16;
        let needed = if cx == x { len } else { len + 1 };
        if cx != x && cx.saturating_add(needed) > right {
            line += 1;
            cx = x;
            if line >= max_lines {
                return;
            }
        }
        if cx != x {
            cx += 1;
        }
        for ch in word.chars() {
            if cx >= right {
                break;
            }
            fb.put_char(cx, y + line, ch, style);
            cx += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let mut fb = FrameBuffer::new(10, 3);
        put_wrapped(&mut fb, 0, 0, 10, 2, "alpha beta gamma delta", CellStyle::default());
        assert_eq!(fb.row_text(0), "alpha beta");
        assert_eq!(fb.row_text(1), "gamma     ");
        assert_eq!(fb.row_text(2), "          ");
    }

    #[test]
    fn wrap_clips_overlong_words() {
        let mut fb = FrameBuffer::new(4, 1);
        put_wrapped(&mut fb, 0, 0, 4, 1, "Kilimanjaro", CellStyle::default());
        assert_eq!(fb.row_text(0), "Kili");
    }

    #[test]
    fn hud_shows_region_and_fact() {
        let world = WorldState::default();
        let mut fb = FrameBuffer::new(60, HUD_HEIGHT);
        HudView.render_into(&world, &mut fb, 0, 0, 60);
        assert!(fb.row_text(0).contains("Morocco"));
        assert!(fb.row_text(1).starts_with("Spice markets"));
        assert!(fb.row_text(3).contains("quit"));
    }
}
