/// One dictionary record: a word, its type code, and its definition.
///
/// The name is normalized to ASCII lowercase on construction and is the
/// canonical lookup key. Type code and definition are stored verbatim; a
/// definition may hold several semicolon-separated senses, which the core
/// does not parse further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    word_type: String,
    definition: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        word_type: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        let mut name = name.into();
        name.make_ascii_lowercase();
        Self {
            name,
            word_type: word_type.into(),
            definition: definition.into(),
        }
    }

    /// The lowercased word itself.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type code as stored, e.g. `n`, `v`, `adj`.
    pub fn word_type(&self) -> &str {
        &self.word_type
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_lowercased_on_construction() {
        let entry = Entry::new("RuN", "v", "move at speed");
        assert_eq!(entry.name(), "run");
        assert_eq!(entry.word_type(), "v");
        assert_eq!(entry.definition(), "move at speed");
    }

    #[test]
    fn type_and_definition_kept_verbatim() {
        let entry = Entry::new("deed", "N", "an Act; a Thing Done");
        assert_eq!(entry.word_type(), "N");
        assert_eq!(entry.definition(), "an Act; a Thing Done");
    }
}
