//! Theme for Keepsake: palette constants and the global stylesheet.

mod colors;
mod styles;

pub use colors::*;
pub use styles::GLOBAL_STYLES;

/// CSS custom properties for the palette, prepended to the global styles.
pub fn palette_css() -> String {
    let vars = [
        ("hot-pink", HOT_PINK),
        ("deep-pink", DEEP_PINK),
        ("light-pink", LIGHT_PINK),
        ("pink", PINK),
        ("pink-glow", PINK_GLOW),
        ("lavender-blush", LAVENDER_BLUSH),
        ("misty-rose", MISTY_ROSE),
        ("card-surface", CARD_SURFACE),
        ("text-primary", TEXT_PRIMARY),
        ("text-muted", TEXT_MUTED),
        ("gold", GOLD),
    ];
    let body: String = vars
        .iter()
        .map(|(name, value)| format!("  --{}: {};\n", name, value))
        .collect();
    format!(":root {{\n{}}}\n", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_declares_every_color() {
        let css = palette_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--hot-pink: #FF69B4;"));
        assert!(css.contains("--lavender-blush: #FFF0F5;"));
        assert_eq!(css.matches("--").count(), 11);
    }
}
