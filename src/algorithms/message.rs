//! Message reconstruction from per-station fragments
//!
//! Every station hears the same message with some words dropped (an empty
//! string marks a gap). Fragments may also be shorter than the message; a
//! missing index counts as a gap.

use crate::core::INSUFFICIENT_INFORMATION;

/// Best-effort reconstruction of a message, gaps included
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedMessage {
    tokens: Vec<String>,
}

impl MergedMessage {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Space-joined message. Gaps are joined as empty words.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    /// True when every index was filled by at least one source
    pub fn is_complete(&self) -> bool {
        is_complete(&self.tokens)
    }

    /// Indices no source could fill
    pub fn missing_indices(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_empty())
            .map(|(index, _)| index)
            .collect()
    }
}

/// Merge fragments into one message.
///
/// The result is as long as the longest fragment. At each index the first
/// source (in the given order) with a non-empty word wins, so earlier
/// sources take priority when two of them disagree.
pub fn merge<T: AsRef<[String]>>(sources: &[T]) -> MergedMessage {
    let length = sources
        .iter()
        .map(|source| source.as_ref().len())
        .max()
        .unwrap_or(0);

    let tokens = (0..length)
        .map(|index| {
            sources
                .iter()
                .filter_map(|source| source.as_ref().get(index))
                .find(|token| !token.is_empty())
                .cloned()
                .unwrap_or_default()
        })
        .collect();

    MergedMessage { tokens }
}

/// True when a single fragment has no gaps
pub fn is_complete(fragments: &[String]) -> bool {
    fragments.iter().all(|token| !token.is_empty())
}

/// A single station's own view of the message.
///
/// Returns the joined fragment, or [`INSUFFICIENT_INFORMATION`] when the
/// station itself has a gap, whatever the other stations may hold.
pub fn station_view(fragments: &[String]) -> String {
    if is_complete(fragments) {
        fragments.join(" ")
    } else {
        INSUFFICIENT_INFORMATION.to_string()
    }
}
