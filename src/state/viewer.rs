/// Selector widget state machine
///
/// A selection moves the viewer into `Loading`; the fetch task resolves it
/// into exactly one of two terminal views, `Image` or `Fallback`. Every
/// fetch gets a sequence number and completions are applied only when they
/// match the current sequence while the viewer is still loading, so a late
/// or stale completion (after a timeout, or after the user re-selected)
/// can never overwrite a view that is already settled.

use iced::widget::image::Handle;

use crate::net::fetch::FetchError;
use crate::state::catalog::AnimalEntry;

/// What the display region currently shows
#[derive(Debug, Clone, Default)]
pub enum Display {
    /// Nothing selected yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading {
        name: String,
        alt: String,
        emoji: &'static str,
    },
    /// Picture loaded and decoded
    Image {
        name: String,
        alt: String,
        handle: Handle,
    },
    /// Load failed or timed out; emoji stand-in
    Fallback { name: String, emoji: &'static str },
}

#[derive(Debug, Default)]
pub struct Viewer {
    display: Display,
    seq: u64,
}

impl Viewer {
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Start loading a catalog entry.
    /// Returns the sequence number the fetch task must echo back.
    pub fn begin(&mut self, entry: &AnimalEntry) -> u64 {
        self.seq += 1;
        self.display = Display::Loading {
            name: entry.display_name.to_string(),
            alt: entry.alt.to_string(),
            emoji: entry.emoji,
        };
        self.seq
    }

    /// Apply a fetch completion.
    /// Returns false (leaving the view untouched) when the completion is
    /// stale or the current selection already settled.
    pub fn resolve(&mut self, seq: u64, result: Result<Vec<u8>, FetchError>) -> bool {
        if seq != self.seq {
            return false;
        }
        let (name, alt, emoji) = match &self.display {
            Display::Loading { name, alt, emoji } => (name.clone(), alt.clone(), *emoji),
            _ => return false,
        };

        self.display = match result {
            Ok(bytes) => Display::Image {
                name,
                alt,
                handle: Handle::from_bytes(bytes),
            },
            Err(e) => {
                tracing::warn!("picture load failed: {e}");
                Display::Fallback { name, emoji }
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog;

    fn cat() -> &'static AnimalEntry {
        catalog::lookup("cat").unwrap()
    }

    #[test]
    fn begin_enters_loading() {
        let mut viewer = Viewer::default();
        let seq = viewer.begin(cat());

        assert_eq!(seq, 1);
        assert!(matches!(
            viewer.display(),
            Display::Loading { name, .. } if name == "Cat"
        ));
    }

    #[test]
    fn success_settles_into_image() {
        let mut viewer = Viewer::default();
        let seq = viewer.begin(cat());

        assert!(viewer.resolve(seq, Ok(vec![0u8; 4])));
        assert!(matches!(viewer.display(), Display::Image { name, .. } if name == "Cat"));
    }

    #[test]
    fn failure_settles_into_fallback_with_the_entry_emoji() {
        let mut viewer = Viewer::default();
        let seq = viewer.begin(cat());

        assert!(viewer.resolve(seq, Err(FetchError::TimedOut(10))));
        assert!(matches!(
            viewer.display(),
            Display::Fallback { emoji, .. } if *emoji == "🐱"
        ));
    }

    #[test]
    fn late_completion_after_settling_is_ignored() {
        let mut viewer = Viewer::default();
        let seq = viewer.begin(cat());

        assert!(viewer.resolve(seq, Err(FetchError::TimedOut(10))));
        // The load "finishing" after the timeout must not replace the fallback
        assert!(!viewer.resolve(seq, Ok(vec![0u8; 4])));
        assert!(matches!(viewer.display(), Display::Fallback { .. }));
    }

    #[test]
    fn stale_sequence_is_ignored_after_reselection() {
        let mut viewer = Viewer::default();
        let first = viewer.begin(cat());
        let second = viewer.begin(catalog::lookup("dog").unwrap());

        // The first fetch finishing late must not clobber the newer load
        assert!(!viewer.resolve(first, Ok(vec![0u8; 4])));
        assert!(matches!(
            viewer.display(),
            Display::Loading { name, .. } if name == "Dog"
        ));

        assert!(viewer.resolve(second, Ok(vec![0u8; 4])));
        assert!(matches!(viewer.display(), Display::Image { name, .. } if name == "Dog"));
    }

    #[test]
    fn completion_without_a_pending_load_is_ignored() {
        let mut viewer = Viewer::default();
        assert!(!viewer.resolve(0, Ok(vec![0u8; 4])));
        assert!(matches!(viewer.display(), Display::Idle));
    }
}
