//! Label encoding for categorical features.
//!
//! An encoder owns a sorted, de-duplicated class list. A value's code is its
//! index in that list, so codes are stable for a given set of classes.

#[cfg(test)]
#[path = "encoder_test.rs"]
mod encoder_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    #[must_use]
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Code for `value`, or `None` if it is not a known class.
    #[must_use]
    pub fn transform(&self, value: &str) -> Option<usize> {
        self.classes.binary_search_by(|c| c.as_str().cmp(value)).ok()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Render the class list as `['A', 'B']` for error messages. Classes
    /// containing a single quote are wrapped in double quotes.
    #[must_use]
    pub fn classes_display(&self) -> String {
        let items: Vec<String> = self
            .classes
            .iter()
            .map(|c| {
                if c.contains('\'') && !c.contains('"') {
                    format!("\"{c}\"")
                } else {
                    format!("'{}'", c.replace('\'', "\\'"))
                }
            })
            .collect();
        format!("[{}]", items.join(", "))
    }
}

/// The three categorical encoders a salary model needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoders {
    pub gender: LabelEncoder,
    pub education: LabelEncoder,
    pub job_title: LabelEncoder,
}
