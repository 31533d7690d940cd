//! Stylesheet generation. Every size is derived from the font scale so the
//! same document renders identically for preview and export.

use crate::generation::input::Theme;
use crate::render::html::VisualTemplate;

pub const SLIDE_SIZE_PX: u32 = 1080;

const TITLE_PX: f32 = 64.0;
const BULLET_PX: f32 = 34.0;
const META_PX: f32 = 24.0;

/// Background, text and muted colours for a theme.
struct Palette {
    background: &'static str,
    text: &'static str,
    muted: &'static str,
    /// Dark end stop for brand gradients; keeps white text readable on both themes.
    deep: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: "#ffffff",
            text: "#111827",
            muted: "#4b5563",
            deep: "#1e293b",
        },
        Theme::Dark => Palette {
            background: "#0f172a",
            text: "#f8fafc",
            muted: "#cbd5e1",
            deep: "#020617",
        },
    }
}

fn px(base: f32, scale: f32) -> String {
    format!("{:.1}px", base * scale)
}

/// Layout shared by every skin: fixed square sections, counter, footer.
fn base_css(theme: Theme, font_scale: f32) -> String {
    let p = palette(theme);
    let size = SLIDE_SIZE_PX;
    format!(
        "*{{margin:0;padding:0;box-sizing:border-box}}\n\
         body{{background:#e5e7eb;font-family:'Inter','Helvetica Neue',Arial,sans-serif}}\n\
         .slide{{position:relative;width:{size}px;height:{size}px;overflow:hidden;\
         display:flex;flex-direction:column;justify-content:center;padding:96px;\
         margin:0 auto 40px;background:{bg};color:{text};page-break-after:always}}\n\
         .slide-title{{font-size:{title};line-height:1.15;font-weight:800;margin-bottom:48px}}\n\
         .slide-bullets{{list-style:none}}\n\
         .slide-bullets li{{font-size:{bullet};line-height:1.4;margin-bottom:24px;\
         padding-left:44px;position:relative}}\n\
         .slide-counter{{position:absolute;top:48px;right:64px;font-size:{meta};color:{muted}}}\n\
         .slide-footer{{position:absolute;left:96px;right:96px;bottom:48px;display:flex;\
         justify-content:space-between;font-size:{meta};color:{muted}}}\n",
        bg = p.background,
        text = p.text,
        muted = p.muted,
        title = px(TITLE_PX, font_scale),
        bullet = px(BULLET_PX, font_scale),
        meta = px(META_PX, font_scale),
    )
}

/// Classic: accent bar on the left edge, square bullet markers.
fn classic_css(brand_color: &str) -> String {
    format!(
        ".tpl-classic .slide::before{{content:'';position:absolute;left:0;top:0;bottom:0;\
         width:24px;background:{brand_color}}}\n\
         .tpl-classic .slide-bullets li::before{{content:'';position:absolute;left:0;top:0.5em;\
         width:18px;height:18px;background:{brand_color}}}\n\
         .tpl-classic .slide-footer .brand{{color:{brand_color};font-weight:700}}\n"
    )
}

/// Bold: brand-coloured cover and closing slides, oversized uppercase titles.
fn bold_css(brand_color: &str, font_scale: f32) -> String {
    format!(
        ".tpl-bold .slide-title{{text-transform:uppercase;letter-spacing:-1px;font-size:{title}}}\n\
         .tpl-bold .slide.cover,.tpl-bold .slide.closing{{background:{brand_color};color:#ffffff}}\n\
         .tpl-bold .slide.cover .slide-counter,.tpl-bold .slide.closing .slide-counter,\
         .tpl-bold .slide.cover .slide-footer,.tpl-bold .slide.closing .slide-footer{{color:#ffffff}}\n\
         .tpl-bold .slide-bullets li::before{{content:'→';position:absolute;left:0;\
         color:{brand_color};font-weight:800}}\n\
         .tpl-bold .slide.cover .slide-bullets li::before,\
         .tpl-bold .slide.closing .slide-bullets li::before{{color:#ffffff}}\n",
        title = px(TITLE_PX * 1.25, font_scale),
    )
}

/// Gradient: diagonal brand gradient, light text, rounded bullet dots.
fn gradient_css(brand_color: &str, theme: Theme) -> String {
    let p = palette(theme);
    format!(
        ".tpl-gradient .slide{{background:linear-gradient(135deg,{brand_color} 0%,{end} 100%);\
         color:#ffffff}}\n\
         .tpl-gradient .slide-counter,.tpl-gradient .slide-footer{{color:rgba(255,255,255,0.8)}}\n\
         .tpl-gradient .slide-bullets li::before{{content:'';position:absolute;left:0;top:0.45em;\
         width:16px;height:16px;border-radius:50%;background:#ffffff}}\n",
        end = p.deep,
    )
}

/// Full stylesheet for a document.
pub fn stylesheet(
    template: VisualTemplate,
    theme: Theme,
    font_scale: f32,
    brand_color: &str,
) -> String {
    let skin = match template {
        VisualTemplate::Classic => classic_css(brand_color),
        VisualTemplate::Bold => bold_css(brand_color, font_scale),
        VisualTemplate::Gradient => gradient_css(brand_color, theme),
    };
    format!("{}{}", base_css(theme, font_scale), skin)
}
