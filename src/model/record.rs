//! Search result records, the unit the report is organised by.

/// One fragment returned for a file, with its highlighted terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentMatch {
    /// The fragment text, possibly reformatted relative to the file.
    pub fragment: String,
    /// Non-empty highlight texts, in input order.
    pub highlights: Vec<String>,
}

impl FragmentMatch {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            highlights: Vec::new(),
        }
    }

    /// Adds highlight texts.
    pub fn with_highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlights.extend(highlights.into_iter().map(Into::into));
        self
    }
}

/// A file hit from code search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRecord {
    /// Repository identifier, e.g. `owner/name`.
    pub repository: String,
    /// File path within the repository.
    pub path: String,
    /// Link to the file.
    pub url: String,
    /// Full file text, when the search returned it.
    pub text: Option<String>,
    /// Fragments in input order.
    pub matches: Vec<FragmentMatch>,
}

impl SearchRecord {
    pub fn new(
        repository: impl Into<String>,
        path: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            path: path.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the full file text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a fragment.
    pub fn with_match(mut self, fragment_match: FragmentMatch) -> Self {
        self.matches.push(fragment_match);
        self
    }

    /// Link to a specific line of the file.
    pub fn line_url(&self, line: usize) -> String {
        format!("{}#L{}", self.url, line)
    }
}
