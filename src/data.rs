use raylib::prelude::Color;

/// One page of the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRecord {
    pub key: &'static str,
    /// Image file name, resolved against the assets directory
    pub image: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    /// Shared by the pagination dot and the background accent circle
    pub accent_color: Color,
    /// Ticker text
    pub category: &'static str,
}

pub const LOGO_IMAGE: &str = "logo.png";

pub static SLIDES: [SlideRecord; 4] = [
    SlideRecord {
        key: "3571572",
        image: "urbanears_blue.png",
        heading: "Vibrant colors",
        description: "Four on-trend colorways to seamlessly suit your style.",
        accent_color: Color::new(0x9d, 0xcd, 0xfa, 255),
        category: "Humlan P",
    },
    SlideRecord {
        key: "3571747",
        image: "urbanears_pink.png",
        heading: "Redefined sound",
        description: "A bold statement tuned to perfection.",
        accent_color: Color::new(0xdb, 0x9e, 0xfa, 255),
        category: "Pampas",
    },
    SlideRecord {
        key: "3571680",
        image: "urbanears_grey.png",
        heading: "Great quality",
        description: "An Urbanears classic! Listen-all-day fit. Striking the perfect balance of everything.",
        accent_color: Color::new(0x99, 0x99, 0x99, 255),
        category: "Humlan B",
    },
    SlideRecord {
        key: "3571603",
        image: "urbanears_mint.png",
        heading: "From Sweden",
        description: "The “Plattan” in Plattan headphones is Swedish for “the slab.”",
        accent_color: Color::new(0xa1, 0xe3, 0xa1, 255),
        category: "Pampas",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slides_not_empty() {
        assert!(!SLIDES.is_empty());
    }

    #[test]
    fn test_slide_keys_unique() {
        let keys: HashSet<_> = SLIDES.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), SLIDES.len());
    }
}
