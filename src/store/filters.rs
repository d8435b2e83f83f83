use std::collections::BTreeMap;

/// Named filter values a list view keeps between fetches.
///
/// The store never applies them itself; they become query parameters of
/// the next list request. Empty values are omitted from the query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria(BTreeMap<String, String>);

impl FilterCriteria {
    /// Criteria with a fixed set of keys and initial values.
    pub fn with_defaults(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Non-empty entries as query pairs, in key order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_skips_empty_values() {
        let mut filters = FilterCriteria::with_defaults(&[("search", ""), ("sort", "newest")]);
        filters.set("status", "planned");

        assert_eq!(
            filters.to_query(),
            vec![
                ("sort".to_string(), "newest".to_string()),
                ("status".to_string(), "planned".to_string()),
            ]
        );
        assert_eq!(filters.get("search"), Some(""));
    }
}
