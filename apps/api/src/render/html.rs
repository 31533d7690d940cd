//! Template rendering: a pure function from slides + options to an HTML document.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_BRAND_COLOR;
use crate::generation::input::Theme;
use crate::generation::result::Slide;
use crate::render::styles::stylesheet;

const MIN_FONT_SCALE: f32 = 0.5;
const MAX_FONT_SCALE: f32 = 2.0;

/// Visual skin applied to every slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualTemplate {
    #[default]
    Classic,
    Bold,
    Gradient,
}

impl VisualTemplate {
    fn class_name(self) -> &'static str {
        match self {
            VisualTemplate::Classic => "tpl-classic",
            VisualTemplate::Bold => "tpl-bold",
            VisualTemplate::Gradient => "tpl-gradient",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default)]
    pub template: VisualTemplate,
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub brand: Brand,
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            template: VisualTemplate::default(),
            font_scale: default_font_scale(),
            theme: Theme::default(),
            brand: Brand::default(),
        }
    }
}

/// Renders the carousel as a standalone HTML document, one `<section>` per slide.
///
/// Identical inputs always produce byte-identical output.
pub fn render_carousel(slides: &[Slide], options: &RenderOptions) -> String {
    let font_scale = effective_font_scale(options.font_scale);
    let brand_color = effective_brand_color(&options.brand.color);
    let css = stylesheet(options.template, options.theme, font_scale, brand_color);
    let total = slides.len();

    let sections: String = slides
        .iter()
        .enumerate()
        .map(|(index, slide)| render_slide(slide, index, total, &options.brand.name))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=1080\">\n\
         <title>Carousel</title>\n<style>\n{css}</style>\n</head>\n\
         <body class=\"{template} theme-{theme}\">\n{sections}</body>\n</html>\n",
        template = options.template.class_name(),
        theme = match options.theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        },
    )
}

fn render_slide(slide: &Slide, index: usize, total: usize, brand_name: &str) -> String {
    let mut classes = vec!["slide"];
    if index == 0 {
        classes.push("cover");
    }
    if index + 1 == total && total > 1 {
        classes.push("closing");
    }

    let bullets = if slide.bullets.is_empty() {
        String::new()
    } else {
        let items: String = slide
            .bullets
            .iter()
            .map(|b| format!("<li>{}</li>", escape_html(b)))
            .collect();
        format!("<ul class=\"slide-bullets\">{items}</ul>\n")
    };

    let brand = if brand_name.trim().is_empty() {
        String::new()
    } else {
        format!("<span class=\"brand\">{}</span>", escape_html(brand_name.trim()))
    };

    format!(
        "<section class=\"{classes}\" data-index=\"{number}\" data-visual=\"{visual}\">\n\
         <div class=\"slide-counter\">{number}/{total}</div>\n\
         <h1 class=\"slide-title\">{title}</h1>\n\
         {bullets}\
         <footer class=\"slide-footer\">{brand}<span class=\"swipe\">{hint}</span></footer>\n\
         </section>\n",
        classes = classes.join(" "),
        number = index + 1,
        visual = escape_html(&slide.visual),
        title = escape_html(&slide.title),
        hint = if index + 1 < total { "→" } else { "" },
    )
}

fn effective_font_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
    } else {
        default_font_scale()
    }
}

/// Accepts `#rgb` or `#rrggbb`; anything else falls back to the default brand colour.
fn effective_brand_color(color: &str) -> &str {
    let color = color.trim();
    let valid = color.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });
    if valid {
        color
    } else {
        DEFAULT_BRAND_COLOR
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide {
                title: format!("Title {i}"),
                bullets: vec![format!("Point {i}.a"), format!("Point {i}.b")],
                visual: format!("visual {i}"),
            })
            .collect()
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let options = RenderOptions {
            template: VisualTemplate::Bold,
            font_scale: 1.2,
            theme: Theme::Dark,
            brand: Brand {
                name: "Acme".to_string(),
                color: "#ff6600".to_string(),
            },
        };
        let s = slides(6);
        assert_eq!(render_carousel(&s, &options), render_carousel(&s, &options));
    }

    #[test]
    fn test_one_section_per_slide() {
        let html = render_carousel(&slides(7), &RenderOptions::default());
        assert_eq!(html.matches("<section ").count(), 7);
        assert!(html.contains("1/7"));
        assert!(html.contains("7/7"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_cover_and_closing_classes() {
        let html = render_carousel(&slides(3), &RenderOptions::default());
        assert!(html.contains("class=\"slide cover\" data-index=\"1\""));
        assert!(html.contains("class=\"slide\" data-index=\"2\""));
        assert!(html.contains("class=\"slide closing\" data-index=\"3\""));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let s = vec![Slide {
            title: "<script>alert('x')</script>".to_string(),
            bullets: vec!["a & b".to_string()],
            visual: "\"quoted\"".to_string(),
        }];
        let html = render_carousel(&s, &RenderOptions::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("<li>a &amp; b</li>"));
        assert!(html.contains("data-visual=\"&quot;quoted&quot;\""));
    }

    #[test]
    fn test_invalid_brand_color_falls_back() {
        let options = RenderOptions {
            brand: Brand {
                name: String::new(),
                color: "red;}body{display:none".to_string(),
            },
            ..RenderOptions::default()
        };
        let html = render_carousel(&slides(1), &options);
        assert!(!html.contains("display:none"));
        assert!(html.contains(DEFAULT_BRAND_COLOR));
    }

    #[test]
    fn test_brand_color_and_name_are_used() {
        let options = RenderOptions {
            brand: Brand {
                name: "Acme Labs".to_string(),
                color: "#abc".to_string(),
            },
            ..RenderOptions::default()
        };
        let html = render_carousel(&slides(2), &options);
        assert!(html.contains("background:#abc"));
        assert!(html.contains("<span class=\"brand\">Acme Labs</span>"));
    }

    #[test]
    fn test_font_scale_is_clamped() {
        assert_eq!(effective_font_scale(10.0), MAX_FONT_SCALE);
        assert_eq!(effective_font_scale(0.1), MIN_FONT_SCALE);
        assert_eq!(effective_font_scale(f32::NAN), 1.0);
    }

    #[test]
    fn test_template_class_on_body() {
        let options = RenderOptions {
            template: VisualTemplate::Gradient,
            theme: Theme::Dark,
            ..RenderOptions::default()
        };
        let html = render_carousel(&slides(1), &options);
        assert!(html.contains("<body class=\"tpl-gradient theme-dark\">"));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: RenderOptions = serde_json::from_str(r#"{"template": "bold"}"#).unwrap();
        assert_eq!(options.template, VisualTemplate::Bold);
        assert_eq!(options.font_scale, 1.0);
        assert_eq!(options.theme, Theme::Light);
    }
}
