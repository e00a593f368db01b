//! Sort enumerations for arXiv search.
//!
//! Request values are free-form strings. Anything unrecognized falls back to
//! the default instead of failing the request.

/// Field the arXiv API sorts results by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCriterion {
    /// Search relevance.
    Relevance,
    /// Date of the most recent version.
    LastUpdatedDate,
    /// Date of the first version.
    #[default]
    SubmittedDate,
}

impl SortCriterion {
    /// Map a request value onto a criterion.
    ///
    /// Accepts the variant name or the arXiv API token, ignoring case.
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim) else {
            return Self::default();
        };
        [Self::Relevance, Self::LastUpdatedDate, Self::SubmittedDate]
            .into_iter()
            .find(|c| value.eq_ignore_ascii_case(c.name()) || value.eq_ignore_ascii_case(c.as_api_str()))
            .unwrap_or_default()
    }

    /// Variant name as the web client sends it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::LastUpdatedDate => "LastUpdatedDate",
            Self::SubmittedDate => "SubmittedDate",
        }
    }

    /// Value of the `sortBy` query parameter.
    #[must_use]
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::LastUpdatedDate => "lastUpdatedDate",
            Self::SubmittedDate => "submittedDate",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest or least relevant first.
    Ascending,
    /// Newest or most relevant first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Map a request value onto a direction, ignoring case.
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("ascending") => Self::Ascending,
            _ => Self::Descending,
        }
    }

    /// Value of the `sortOrder` query parameter.
    #[must_use]
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}
