//! Raw palette values exposed as CSS custom properties
//!
//! Utility classes carry almost all of the styling; the palette only backs the
//! few places that need a color outside a class (page background, halftone
//! dots, scrollbar).

use crate::scheme::ColorScheme;
use indexmap::IndexMap;

/// An sRGB color with alpha in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn css(&self) -> String {
        if self.a < 1.0 {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub foreground: Rgba,
    pub muted: Rgba,
    pub border: Rgba,
    pub glass: Rgba,
    pub halftone: Rgba,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Rgba::rgb(0xfa, 0xfa, 0xfa),
        foreground: Rgba::rgb(0x1a, 0x1a, 0x1a),
        muted: Rgba::rgb(0x6b, 0x72, 0x80),
        border: Rgba::rgb(0xe5, 0xe7, 0xeb),
        glass: Rgba::rgb(0xff, 0xff, 0xff).with_alpha(0.4),
        halftone: Rgba::rgb(0x00, 0x00, 0x00),
    };

    pub const DARK: Palette = Palette {
        background: Rgba::rgb(0x0f, 0x0f, 0x0f),
        foreground: Rgba::rgb(0xed, 0xed, 0xed),
        muted: Rgba::rgb(0x9c, 0xa3, 0xaf),
        border: Rgba::rgb(0x37, 0x41, 0x51),
        glass: Rgba::rgb(0x00, 0x00, 0x00).with_alpha(0.4),
        halftone: Rgba::rgb(0xff, 0xff, 0xff),
    };

    pub fn for_scheme(scheme: ColorScheme) -> &'static Palette {
        match scheme {
            ColorScheme::Light => &Palette::LIGHT,
            ColorScheme::Dark => &Palette::DARK,
        }
    }

    /// Variable names (without the `--` prefix) mapped to CSS color values
    pub fn css_variables(&self) -> IndexMap<&'static str, String> {
        let mut vars = IndexMap::with_capacity(6);
        vars.insert("background", self.background.css());
        vars.insert("foreground", self.foreground.css());
        vars.insert("muted", self.muted.css());
        vars.insert("border", self.border.css());
        vars.insert("glass", self.glass.css());
        vars.insert("halftone", self.halftone.css());
        vars
    }

    /// `:root` rule for light, `[data-theme="dark"]` override for dark
    pub fn css_rules() -> String {
        let mut css = String::new();
        push_rule(&mut css, ":root", &Palette::LIGHT);
        push_rule(&mut css, "[data-theme=\"dark\"]", &Palette::DARK);
        css
    }
}

fn push_rule(css: &mut String, selector: &str, palette: &Palette) {
    css.push_str(selector);
    css.push_str(" {\n");
    for (name, value) in palette.css_variables() {
        css.push_str(&format!("  --{name}: {value};\n"));
    }
    css.push_str("}\n");
}
