//! Icon font setup. Toast icons are phosphor glyphs, which only render once
//! the phosphor font has been merged into the active font definitions.

use egui::epaint::text::{FontInsert, FontPriority, InsertFontFamily};
use egui::{Context, FontDefinitions, FontFamily};
use egui_phosphor::Variant;

/// Key of the icon font in the font definitions
pub const ICON_FONT_NAME: &str = "phosphor";

/// The phosphor glyphs as a lowest-priority fallback of the proportional
/// family, so the host's text fonts keep precedence.
pub fn icon_font_insert() -> FontInsert {
    FontInsert::new(
        ICON_FONT_NAME,
        Variant::Regular.font_data(),
        vec![InsertFontFamily {
            family: FontFamily::Proportional,
            priority: FontPriority::Lowest,
        }],
    )
}

/// Merge the phosphor icon glyphs into `fonts`, for hosts that build their
/// own definitions before calling `set_fonts`.
pub fn add_icon_font(fonts: &mut FontDefinitions) {
    egui_phosphor::add_to_fonts(fonts, Variant::Regular);
}

/// Merge the icon glyphs into the fonts already active on `ctx`.
///
/// Takes effect at the start of the next pass. Call once at startup, before
/// the first toast is shown.
pub fn install_icon_font(ctx: &Context) {
    log::debug!("Merging toast icon font `{ICON_FONT_NAME}` into active fonts");
    ctx.add_font(icon_font_insert());
}
