/// The animal catalog
///
/// A fixed table of the three animals the gallery can show. Each entry
/// carries the picture URL, the alt text for the loaded picture, the
/// display name used in captions, and the emoji stand-in for the fallback
/// view when the picture cannot be loaded.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalEntry {
    /// Stable identifier carried by the radio selection
    pub key: &'static str,
    /// Picture URL
    pub image_url: &'static str,
    /// Alt text shown with the loaded picture
    pub alt: &'static str,
    /// Capitalized name used in captions
    pub display_name: &'static str,
    /// Emoji stand-in for the fallback view
    pub emoji: &'static str,
}

/// Generic icon for keys without a dedicated emoji
pub const FALLBACK_EMOJI: &str = "🦁";

pub static ANIMALS: [AnimalEntry; 3] = [
    AnimalEntry {
        key: "cat",
        image_url:
            "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=400&h=300&fit=crop&crop=center",
        alt: "Beautiful cat with green eyes",
        display_name: "Cat",
        emoji: "🐱",
    },
    AnimalEntry {
        key: "dog",
        image_url:
            "https://images.unsplash.com/photo-1552053831-71594a27632d?w=400&h=300&fit=crop&crop=center",
        alt: "Happy golden retriever dog",
        display_name: "Dog",
        emoji: "🐕",
    },
    AnimalEntry {
        key: "elephant",
        image_url:
            "https://unsplash.com/photos/elephant-walking-during-daytime-QJbyG6O0ick?w=400&h=300&fit=crop&crop=center",
        alt: "Majestic African elephant",
        display_name: "Elephant",
        emoji: "🐘",
    },
];

/// Look up a catalog entry by key
pub fn lookup(key: &str) -> Option<&'static AnimalEntry> {
    ANIMALS.iter().find(|entry| entry.key == key)
}

/// Emoji for a key, falling back to the generic icon for unknown keys
pub fn emoji_for(key: &str) -> &'static str {
    lookup(key).map(|entry| entry.emoji).unwrap_or(FALLBACK_EMOJI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_animal_resolves_by_key() {
        for entry in &ANIMALS {
            let found = lookup(entry.key).expect("catalog entry should resolve");
            assert_eq!(found.display_name, entry.display_name);
            assert!(found.image_url.starts_with("https://"));
        }
    }

    #[test]
    fn unknown_key_has_no_entry() {
        assert!(lookup("zebra").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn unknown_key_gets_the_generic_emoji() {
        assert_eq!(emoji_for("cat"), "🐱");
        assert_eq!(emoji_for("zebra"), FALLBACK_EMOJI);
    }
}
