/// Query string of the list endpoints.
///
/// Values stay raw strings so that integer parsing errors are reported by the
/// decoder instead of being rejected by an extractor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListQuery {
    /// Build from raw query pairs; only the first occurrence of a key counts.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "limit" => &mut query.limit,
                "offset" => &mut query.offset,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Category filter, if a non-empty one was given.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
