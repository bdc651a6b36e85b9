use crate::source::Source;

/// Ordered set of sources; the first matching source wins.
///
/// [`Source::Website`] accepts any absolute http(s) URL, so the registry keeps
/// it at the end regardless of the order it was given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    pub fn new(sources: impl IntoIterator<Item = Source>) -> Self {
        let mut ordered: Vec<Source> = Vec::new();
        for source in sources {
            if !ordered.contains(&source) {
                ordered.push(source);
            }
        }
        // Stable: platform sources keep their relative order.
        ordered.sort_by_key(|source| *source == Source::Website);
        Self { sources: ordered }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Returns the source responsible for `input`, or `None` when the input
    /// is not a recognised content request.
    pub fn dispatch(&self, input: &str) -> Option<Source> {
        let input = input.trim();
        self.sources
            .iter()
            .copied()
            .find(|source| source.matches(input))
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new(Source::PRIORITY)
    }
}
