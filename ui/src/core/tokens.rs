//! Design tokens: the color palette and font weights used across the storefront.
//!
//! Components read these directly (badge backgrounds are set inline) and the
//! static stylesheets consume them through the custom properties emitted by
//! [`css_custom_properties`].

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayRamp {
    pub g100: &'static str,
    pub g300: &'static str,
    pub g500: &'static str,
    pub g700: &'static str,
    pub g900: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub white: &'static str,
    pub gray: GrayRamp,
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

pub const COLORS: Colors = Colors {
    white: "hsl(0deg 0% 100%)",
    gray: GrayRamp {
        g100: "hsl(185deg 5% 95%)",
        g300: "hsl(190deg 5% 80%)",
        g500: "hsl(196deg 4% 60%)",
        g700: "hsl(220deg 5% 40%)",
        g900: "hsl(220deg 3% 20%)",
    },
    primary: "hsl(340deg 65% 47%)",
    secondary: "hsl(240deg 60% 63%)",
};

pub const WEIGHTS: Weights = Weights {
    normal: 500,
    medium: 600,
    bold: 800,
};

/// A `:root { ... }` block exposing every token as a CSS custom property.
pub fn css_custom_properties() -> String {
    let colors = [
        ("white", COLORS.white),
        ("gray-100", COLORS.gray.g100),
        ("gray-300", COLORS.gray.g300),
        ("gray-500", COLORS.gray.g500),
        ("gray-700", COLORS.gray.g700),
        ("gray-900", COLORS.gray.g900),
        ("primary", COLORS.primary),
        ("secondary", COLORS.secondary),
    ];
    let weights = [
        ("normal", WEIGHTS.normal),
        ("medium", WEIGHTS.medium),
        ("bold", WEIGHTS.bold),
    ];

    let mut css = String::from(":root {\n");
    for (name, value) in colors {
        let _ = writeln!(css, "  --color-{name}: {value};");
    }
    for (name, value) in weights {
        let _ = writeln!(css, "  --weight-{name}: {value};");
    }
    css.push('}');
    css
}
