/// Issues sequential stream names: `s1`, `s2`, `s3`, …
///
/// Each namer counts independently, so two flowsheets built side by side
/// never share a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamNamer {
    prefix: String,
    issued: usize,
}

impl StreamNamer {
    /// Creates a namer using the default `s` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix("s")
    }

    /// Creates a namer using a custom prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    /// Returns the next name in the sequence.
    pub fn next_name(&mut self) -> String {
        self.issued += 1;
        format!("{}{}", self.prefix, self.issued)
    }

    /// Returns how many names have been issued.
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued
    }
}

impl Default for StreamNamer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_one() {
        let mut namer = StreamNamer::new();
        assert_eq!(namer.next_name(), "s1");
        assert_eq!(namer.next_name(), "s2");
        assert_eq!(namer.issued(), 2);
    }

    #[test]
    fn namers_are_independent() {
        let mut first = StreamNamer::new();
        let mut second = StreamNamer::with_prefix("feed-");
        first.next_name();
        first.next_name();

        assert_eq!(second.next_name(), "feed-1");
        assert_eq!(first.next_name(), "s3");
    }
}
