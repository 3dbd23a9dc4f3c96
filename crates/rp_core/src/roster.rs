use std::fmt::Display;

/// A single named record in the user-maintained list.
///
/// The label may be transiently empty while it's being edited in the
/// input field; blank entries are only kept out of the roster itself
/// (see [`Roster::push_non_blank`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
}

impl Entry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Whether the label is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The ordered collection of committed entries.
///
/// Append-only: entries are never removed, reordered or deduplicated,
/// so iteration order always equals insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<Entry>,
    revision: u64,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The roster every new home screen starts with.
    #[must_use]
    pub fn with_sample_entries() -> Self {
        let mut roster = Self::new();
        for name in ["Tanu", "Tina", "Tono"] {
            roster.push(Entry::new(name));
        }
        roster
    }

    /// Appends an entry unconditionally, blank or not.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.revision += 1;
    }

    /// Appends an entry only if its label is non-blank.
    ///
    /// Returns whether the entry was added.
    pub fn push_non_blank(&mut self, entry: Entry) -> bool {
        if entry.is_blank() {
            return false;
        }
        self.push(entry);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Bumped once per append; never decreases.
    ///
    /// Cheap cache key for the list view: two rosters with the same
    /// revision (and origin) render identically.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Display for Roster {
    /// `[Tanu, Tina, Tono]` form, exactly what the result screen shows.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}
