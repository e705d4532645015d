//! Integer coding for categorical features

/// Maps category labels to integer codes by order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoricalEncoder {
    vocabulary: Vec<String>,
}

impl CategoricalEncoder {
    /// Build the vocabulary from labels in the order they are seen
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim();
            if !vocabulary.iter().any(|known| known.eq_ignore_ascii_case(label)) {
                vocabulary.push(label.to_string());
            }
        }
        Self { vocabulary }
    }

    /// Code for `label`, or `None` if it never appeared during fitting
    pub fn encode(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.vocabulary
            .iter()
            .position(|known| known.eq_ignore_ascii_case(label))
    }

    pub fn categories(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_appearance_order() {
        let encoder = CategoricalEncoder::fit(["Dairy", "Vegetables", "dairy", "Grains"]);

        assert_eq!(encoder.categories(), ["Dairy", "Vegetables", "Grains"]);
        assert_eq!(encoder.encode("Dairy"), Some(0));
        assert_eq!(encoder.encode("GRAINS"), Some(2));
        assert_eq!(encoder.encode(" vegetables "), Some(1));
    }

    #[test]
    fn test_unseen_label() {
        let encoder = CategoricalEncoder::fit(["fridge"]);
        assert_eq!(encoder.encode("cellar"), None);
        assert!(CategoricalEncoder::default().is_empty());
    }
}
