//! SGR application (part of component G). Generalizes
//! `phosphor_core::ansi::AnsiProcessor::apply_sgr` into a standalone function
//! over the decoded [`SgrParam`] list the parser already produced, applied
//! strictly left to right so a later parameter always wins over an earlier
//! one touching the same field.

use vtcore_types::{AttributeFlags, SgrParam, Style};

/// Apply a sequence of already-decoded SGR parameters onto `style` in order.
pub fn apply(style: &mut Style, params: &[SgrParam]) {
    for param in params {
        apply_one(style, *param);
    }
}

fn apply_one(style: &mut Style, param: SgrParam) {
    match param {
        SgrParam::Reset => style.reset(),

        SgrParam::Bold => style.set_flag(AttributeFlags::BOLD, true),
        SgrParam::Dim => style.set_flag(AttributeFlags::DIM, true),
        SgrParam::Italic => style.set_flag(AttributeFlags::ITALIC, true),
        SgrParam::Underline(variant) => style.set_underline(variant),
        SgrParam::BlinkSlow => style.set_flag(AttributeFlags::BLINK_SLOW, true),
        SgrParam::BlinkFast => style.set_flag(AttributeFlags::BLINK_FAST, true),
        SgrParam::Reverse => style.set_flag(AttributeFlags::REVERSE, true),
        SgrParam::Hidden => style.set_flag(AttributeFlags::HIDDEN, true),
        SgrParam::Strikethrough => style.set_flag(AttributeFlags::STRIKETHROUGH, true),

        SgrParam::NoBold => style.set_flag(AttributeFlags::BOLD, false),
        SgrParam::NoDim => style.set_flag(AttributeFlags::DIM, false),
        SgrParam::NoItalic => style.set_flag(AttributeFlags::ITALIC, false),
        SgrParam::NoUnderline => {
            style.set_underline(vtcore_types::UnderlineStyle::None);
        }
        SgrParam::NoBlink => {
            style.set_flag(AttributeFlags::BLINK_SLOW, false);
            style.set_flag(AttributeFlags::BLINK_FAST, false);
        }
        SgrParam::NoReverse => style.set_flag(AttributeFlags::REVERSE, false),
        SgrParam::NoHidden => style.set_flag(AttributeFlags::HIDDEN, false),
        SgrParam::NoStrikethrough => style.set_flag(AttributeFlags::STRIKETHROUGH, false),

        SgrParam::Foreground(color) => style.fg = color,
        SgrParam::Background(color) => style.bg = color,
        SgrParam::UnderlineColor(color) => style.underline_color = Some(color),

        SgrParam::DefaultForeground => style.fg = vtcore_types::Color::Default,
        SgrParam::DefaultBackground => style.bg = vtcore_types::Color::Default,
        SgrParam::DefaultUnderlineColor => style.underline_color = None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtcore_types::{Color, UnderlineStyle};

    #[test]
    fn reset_clears_prior_attributes() {
        let mut style = Style::default();
        apply(&mut style, &[SgrParam::Bold, SgrParam::Foreground(Color::Indexed(1))]);
        apply(&mut style, &[SgrParam::Reset]);
        assert_eq!(style, Style::default());
    }

    #[test]
    fn later_param_wins_over_earlier_same_field() {
        let mut style = Style::default();
        apply(
            &mut style,
            &[
                SgrParam::Foreground(Color::Indexed(1)),
                SgrParam::Foreground(Color::Rgb(1, 2, 3)),
            ],
        );
        assert_eq!(style.fg, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn no_underline_clears_flag_and_variant() {
        let mut style = Style::default();
        apply(&mut style, &[SgrParam::Underline(UnderlineStyle::Curly)]);
        assert!(style.flags.contains(AttributeFlags::UNDERLINE));
        apply(&mut style, &[SgrParam::NoUnderline]);
        assert!(!style.flags.contains(AttributeFlags::UNDERLINE));
        assert_eq!(style.underline, UnderlineStyle::None);
    }
}
