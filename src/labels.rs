use crate::severity::Severity;
use std::ops::Index;

/// Per-severity label prefixes, keyed by [`Severity`].
///
/// The table can only be indexed by the enum, so out-of-range access is not
/// expressible; the runtime bounds check lives solely where raw codes enter
/// the system ([`Severity::from_code`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: [String; Severity::COUNT],
}

impl LabelTable {
    /// Build a table with one label per severity
    pub fn new(
        info: impl Into<String>,
        debug: impl Into<String>,
        error: impl Into<String>,
        warn: impl Into<String>,
    ) -> Self {
        let mut labels: [String; Severity::COUNT] = Default::default();
        labels[Severity::Info.index()] = info.into();
        labels[Severity::Debug.index()] = debug.into();
        labels[Severity::Error.index()] = error.into();
        labels[Severity::Warn.index()] = warn.into();
        Self { labels }
    }

    /// Build a table from a positional slice indexed by severity code.
    /// Missing entries become empty labels, extras are ignored.
    pub fn from_slice(labels: &[&str]) -> Self {
        let mut table = Self::default();
        for severity in Severity::ALL {
            if let Some(label) = labels.get(severity.index()) {
                table.labels[severity.index()] = (*label).to_string();
            }
        }
        table
    }

    /// Get the label for a severity
    pub fn get(&self, severity: Severity) -> &str {
        &self.labels[severity.index()]
    }

    /// Replace the label for a severity
    pub fn set(&mut self, severity: Severity, label: impl Into<String>) {
        self.labels[severity.index()] = label.into();
    }

    /// Iterate labels in severity code order
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &str)> {
        Severity::ALL
            .into_iter()
            .map(|severity| (severity, self.get(severity)))
    }
}

impl Index<Severity> for LabelTable {
    type Output = str;

    fn index(&self, severity: Severity) -> &str {
        self.get(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_by_severity() {
        let table = LabelTable::new("I ", "D ", "E ", "W ");
        assert_eq!(table.get(Severity::Info), "I ");
        assert_eq!(table.get(Severity::Debug), "D ");
        assert_eq!(table.get(Severity::Error), "E ");
        assert_eq!(table.get(Severity::Warn), "W ");
    }

    #[test]
    fn test_from_slice_pads_short_tables() {
        let table = LabelTable::from_slice(&["Info! ", "Debug! "]);
        assert_eq!(table.get(Severity::Debug), "Debug! ");
        assert_eq!(table.get(Severity::Error), "");
        assert_eq!(table.get(Severity::Warn), "");
    }

    #[test]
    fn test_from_slice_ignores_extras() {
        let table = LabelTable::from_slice(&["a", "b", "c", "d", "extra"]);
        assert_eq!(table.get(Severity::Warn), "d");
    }

    #[test]
    fn test_default_is_empty_labels() {
        let table = LabelTable::default();
        for (_, label) in table.iter() {
            assert_eq!(label, "");
        }
    }

    #[test]
    fn test_index_by_severity() {
        let mut table = LabelTable::default();
        table.set(Severity::Error, "Error: ");
        assert_eq!(&table[Severity::Error], "Error: ");
    }
}
