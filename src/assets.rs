//! Opaque resource handles and the compiled-in asset tables.
//!
//! Display strings and icon art are addressed through opaque handles
//! ([`TextRes`], [`ImageRes`]) and resolved at render time through the
//! [`AssetResolver`] seam. The mapping lives here, outside the screen logic,
//! so rendering code never hard-codes copy or art.
//!
//! Resolution misses never fail: callers fall back to the raw handle id.

use std::fmt;

use serde::Serialize;

/// Opaque handle to an entry in the string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TextRes(&'static str);

impl TextRes {
    /// Wrap a string-table id.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The raw handle id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TextRes {
    /// Displays the raw id, not the resolved string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Opaque handle to an entry in the glyph-art table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRes(&'static str);

impl ImageRes {
    /// Wrap an art-table id.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The raw handle id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.0
    }
}

/// Glyph art standing in for a raster asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphArt {
    /// Art rows, top to bottom. Rows may be ragged; renderers pad.
    pub lines: &'static [&'static str],
}

impl GlyphArt {
    const fn new(lines: &'static [&'static str]) -> Self {
        Self { lines }
    }

    /// Height in rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.lines.len()
    }
}

/// Lookup capability injected into rendering.
pub trait AssetResolver {
    /// Resolve a text handle to its display string.
    fn text(&self, res: TextRes) -> Option<&'static str>;

    /// Resolve an image handle to its glyph art.
    fn image(&self, res: ImageRes) -> Option<&GlyphArt>;

    /// Resolve a text handle, falling back to the raw id on a miss.
    fn text_or_id(&self, res: TextRes) -> &'static str {
        self.text(res).unwrap_or_else(|| res.id())
    }
}

// ──────────────────── compiled-in tables ────────────────────

/// Dog icon art is a fixed three rows so cards keep a uniform height.
pub const ICON_ART_ROWS: u16 = 3;

const STRINGS: &[(&str, &str)] = &[
    ("app/name", "Woof"),
    ("app/about_label", "About:"),
    ("app/years_old_pattern", "%d years old"),
    ("app/expand_button_desc", "show hobby"),
    ("dog/name/koda", "Koda"),
    ("dog/name/lola", "Lola"),
    ("dog/name/frankie", "Frankie"),
    ("dog/name/nox", "Nox"),
    ("dog/name/faye", "Faye"),
    ("dog/name/bella", "Bella"),
    ("dog/name/moana", "Moana"),
    ("dog/name/tzeitel", "Tzeitel"),
    ("dog/name/leroy", "Leroy"),
    ("dog/hobby/koda", "Eating treats on the terrace"),
    ("dog/hobby/lola", "Barking at Daddy"),
    ("dog/hobby/frankie", "Stealing socks"),
    ("dog/hobby/nox", "Meeting new animals"),
    ("dog/hobby/faye", "Digging in the garden"),
    ("dog/hobby/bella", "Chasing sea foam"),
    ("dog/hobby/moana", "Sunbathing"),
    ("dog/hobby/tzeitel", "Sitting by the window"),
    ("dog/hobby/leroy", "Sleeping in a log"),
];

const LOGO_ART: GlyphArt = GlyphArt::new(&["[ᵔᴥᵔ]"]);

const IMAGES: &[(&str, GlyphArt)] = &[
    ("img/logo", LOGO_ART),
    ("img/dog/koda", GlyphArt::new(&["n---n", "(o o)", " \\_/ "])),
    ("img/dog/lola", GlyphArt::new(&[" n-n ", "(- -)", " \\_/ "])),
    ("img/dog/frankie", GlyphArt::new(&["n---n", "(o O)", " \\w/ "])),
    ("img/dog/nox", GlyphArt::new(&[" n-n ", "(* *)", " \\_/ "])),
    ("img/dog/faye", GlyphArt::new(&["n---n", "(^ ^)", " \\w/ "])),
    ("img/dog/bella", GlyphArt::new(&[" n-n ", "(o o)", " \\w/ "])),
    ("img/dog/moana", GlyphArt::new(&["n---n", "(u u)", " \\_/ "])),
    ("img/dog/tzeitel", GlyphArt::new(&[" n-n ", "(= =)", " \\_/ "])),
    ("img/dog/leroy", GlyphArt::new(&["n---n", "(z z)", " \\_/ "])),
];

/// Resolver over the compiled-in tables. Zero-sized; copy freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAssets;

/// Render the localized "years old" pattern for an age.
#[must_use]
pub fn years_old(assets: &impl AssetResolver, age: u32) -> String {
    assets
        .text(TextRes::new("app/years_old_pattern"))
        .map_or_else(
            || format!("{age} years old"),
            |pattern| pattern.replace("%d", &age.to_string()),
        )
}

impl AssetResolver for StaticAssets {
    fn text(&self, res: TextRes) -> Option<&'static str> {
        STRINGS
            .iter()
            .find(|(id, _)| *id == res.id())
            .map(|(_, value)| *value)
    }

    fn image(&self, res: ImageRes) -> Option<&GlyphArt> {
        IMAGES
            .iter()
            .find(|(id, _)| *id == res.id())
            .map(|(_, art)| art)
    }
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lookup_hits() {
        let assets = StaticAssets;
        assert_eq!(assets.text(TextRes::new("app/name")), Some("Woof"));
        assert_eq!(assets.text(TextRes::new("dog/name/koda")), Some("Koda"));
    }

    #[test]
    fn text_lookup_miss_falls_back_to_id() {
        let assets = StaticAssets;
        let res = TextRes::new("dog/name/unknown");
        assert_eq!(assets.text(res), None);
        assert_eq!(assets.text_or_id(res), "dog/name/unknown");
    }

    #[test]
    fn display_shows_raw_id() {
        let res = TextRes::new("dog/hobby/koda");
        assert_eq!(res.to_string(), "dog/hobby/koda");
    }

    #[test]
    fn every_dog_image_has_fixed_rows() {
        let assets = StaticAssets;
        for &(id, _) in IMAGES {
            if let Some(stripped) = id.strip_prefix("img/dog/") {
                let art = assets.image(ImageRes::new(id)).unwrap();
                assert_eq!(
                    art.rows(),
                    ICON_ART_ROWS as usize,
                    "art for {stripped} must be {ICON_ART_ROWS} rows"
                );
            }
        }
    }

    #[test]
    fn string_table_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (id, _) in STRINGS {
            assert!(seen.insert(*id), "duplicate string id {id}");
        }
    }

    #[test]
    fn years_old_uses_pattern() {
        assert_eq!(years_old(&StaticAssets, 3), "3 years old");
        assert_eq!(years_old(&StaticAssets, 16), "16 years old");
    }
}
