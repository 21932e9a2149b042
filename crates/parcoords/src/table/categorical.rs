//! Dictionary encoding of label columns.

use serde::{Deserialize, Serialize};

/// A column of labels stored as dense integer codes into a sorted category list.
///
/// Categories are distinct and sorted ascending; code `i` refers to
/// `categories[i]`. Missing values have no code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categorical {
    categories: Vec<String>,
    codes: Vec<Option<u32>>,
}

impl Categorical {
    /// Encode a sequence of optional labels.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let labels: Vec<Option<&str>> = labels.into_iter().collect();
        let (categories, codes) = dense_codes(&labels);
        Self {
            categories: categories.into_iter().map(str::to_string).collect(),
            codes,
        }
    }

    /// The sorted category labels.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Per-row codes.
    pub fn codes(&self) -> &[Option<u32>] {
        &self.codes
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Label for a given row.
    pub fn label(&self, row: usize) -> Option<&str> {
        let code = (*self.codes.get(row)?)?;
        self.categories.get(code as usize).map(String::as_str)
    }

    /// Sorted distinct codes that occur in at least one row.
    pub fn present_codes(&self) -> Vec<u32> {
        let mut seen = vec![false; self.categories.len()];
        for code in self.codes.iter().flatten() {
            seen[*code as usize] = true;
        }
        seen.iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(code, _)| code as u32)
            .collect()
    }

    /// Approximate heap footprint in bytes.
    pub fn memory_usage(&self) -> usize {
        let labels: usize = self
            .categories
            .iter()
            .map(|c| std::mem::size_of::<String>() + c.len())
            .sum();
        labels + std::mem::size_of_val(self.codes.as_slice())
    }
}

/// Assign dense codes `0..k-1` to the distinct values in ascending order.
///
/// Returns the sorted distinct values and one optional code per input.
pub(crate) fn dense_codes<T: Ord + Clone>(values: &[Option<T>]) -> (Vec<T>, Vec<Option<u32>>) {
    let mut distinct: Vec<T> = values.iter().flatten().cloned().collect();
    distinct.sort();
    distinct.dedup();

    let codes = values
        .iter()
        .map(|v| {
            v.as_ref()
                .and_then(|v| distinct.binary_search(v).ok())
                .map(|i| i as u32)
        })
        .collect();

    (distinct, codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_sorted_labels() {
        let cat = Categorical::from_labels(vec![
            Some("virginica"),
            Some("setosa"),
            Some("versicolor"),
            Some("setosa"),
        ]);

        assert_eq!(cat.categories(), &["setosa", "versicolor", "virginica"]);
        assert_eq!(cat.codes(), &[Some(2), Some(0), Some(1), Some(0)]);
        assert_eq!(cat.label(0), Some("virginica"));
    }

    #[test]
    fn test_missing_labels_have_no_code() {
        let cat = Categorical::from_labels(vec![Some("b"), None, Some("a")]);

        assert_eq!(cat.codes(), &[Some(1), None, Some(0)]);
        assert_eq!(cat.label(1), None);
        assert_eq!(cat.present_codes(), vec![0, 1]);
    }

    #[test]
    fn test_dense_codes_on_integers() {
        let (distinct, codes) = dense_codes(&[Some(30), Some(10), None, Some(30)]);
        assert_eq!(distinct, vec![10, 30]);
        assert_eq!(codes, vec![Some(1), Some(0), None, Some(1)]);
    }
}
