//! Daily-word message rendering.

use std::fmt::Write as _;

use crate::DefinitionEntry;

/// Render a claimed word and its definition entries into the message text
/// sent to a chat session.
///
/// Output shape:
///
/// ```text
/// Here's your daily word:
/// Word: hello
/// Meanings:
/// 1. (noun) a greeting
///
/// 2. (interjection) used as a greeting
/// ```
///
/// Entries are numbered from 1 and separated by a blank line; definitions
/// within an entry are joined by a comma and a line break.
#[must_use]
pub fn render_daily_word(word: &str, entries: &[DefinitionEntry]) -> String {
    let mut message = format!("Here's your daily word:\nWord: {word}\nMeanings:\n");

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            message.push_str("\n\n");
        }
        let _ = write!(
            message,
            "{}. ({}) {}",
            index + 1,
            entry.figure_of_speech,
            entry.meanings.join(", \n")
        );
    }

    message
}
