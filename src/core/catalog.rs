//! Deduplicating message catalog.
//!
//! Messages are keyed by `(context, singular)`. A later insertion with the same
//! key replaces the stored message wholesale but keeps its original position, so
//! iteration order is the order in which keys were first seen.

use indexmap::IndexMap;
use indexmap::map::Entry;

/// A translatable message extracted from source code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub singular: String,
    /// Empty when the message has no plural form.
    pub plural: String,
    /// Disambiguation context, empty when none.
    pub context: String,
    /// Developer comment for translators, empty when none.
    pub comment: String,
    /// Translation placeholder; always empty at extraction time.
    pub message: String,
}

impl Message {
    pub fn new(singular: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            ..Default::default()
        }
    }

    pub fn key(&self) -> MessageKey {
        MessageKey {
            context: self.context.clone(),
            singular: self.singular.clone(),
        }
    }

    pub fn has_plural(&self) -> bool {
        !self.plural.is_empty()
    }
}

/// Identity of a message within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageKey {
    pub context: String,
    pub singular: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: IndexMap<MessageKey, Message>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a message, replacing any message with the same `(context, singular)`.
    pub fn insert_or_overwrite(&mut self, message: Message) {
        match self.messages.entry(message.key()) {
            Entry::Occupied(mut entry) => {
                let previous = entry.get();
                if previous.plural != message.plural || previous.comment != message.comment {
                    tracing::debug!(
                        singular = %message.singular,
                        context = %message.context,
                        "Overwriting message with different plural or comment"
                    );
                }
                entry.insert(message);
            }
            Entry::Vacant(entry) => {
                entry.insert(message);
            }
        }
    }

    /// Fold another catalog into this one, in the other catalog's order.
    pub fn merge(&mut self, other: Catalog) {
        for message in other.messages.into_values() {
            self.insert_or_overwrite(message);
        }
    }

    pub fn get(&self, context: &str, singular: &str) -> Option<&Message> {
        self.messages.get(&MessageKey {
            context: context.to_string(),
            singular: singular.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Message) -> bool,
    {
        self.messages.retain(|_, message| keep(message));
    }
}

impl FromIterator<Message> for Catalog {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for message in iter {
            catalog.insert_or_overwrite(message);
        }
        catalog
    }
}

impl IntoIterator for Catalog {
    type Item = Message;
    type IntoIter = indexmap::map::IntoValues<MessageKey, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_values()
    }
}
