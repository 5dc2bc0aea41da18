//! Category labels and the catalog's filter selection.

/// Label of the synthetic "no filter" entry at the front of the filter bar.
pub const ALL_LABEL: &str = "All";

/// The category filter currently applied to the product grid.
///
/// Labels are normalised to lowercase; selecting the `All` label (in any case)
/// clears the filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if normalized == ALL_LABEL.to_lowercase() {
            Self::All
        } else {
            Self::Category(normalized)
        }
    }

    /// Value for the `category` query parameter; `None` means no filter.
    pub fn filter_param(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category(name) => Some(name.as_str()),
        }
    }

    /// Whether a filter-bar button with this label is the active one.
    pub fn is_selected(&self, label: &str) -> bool {
        *self == Self::from_label(label)
    }
}

/// Labels for the filter bar: the `All` sentinel followed by the fetched
/// categories in backend order.
///
/// A fetched label that normalises to `all` would be indistinguishable from the
/// sentinel and is dropped; so are blank labels.
pub fn filter_bar<I, S>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut labels = vec![ALL_LABEL.to_string()];
    labels.extend(
        categories
            .into_iter()
            .map(Into::into)
            .filter(|label| !label.trim().is_empty())
            .filter(|label| CategorySelection::from_label(label) != CategorySelection::All),
    );
    labels
}
