/// Cells of one input record, in column order, each paired with its header name.
///
/// Header names may repeat, so cells are addressed by position when writing back out.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RawRecord {
    cells: Vec<(String, String)>
}

impl RawRecord {
    /// Value of the first column with the given name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.iter()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value at a column position.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|(_, value)| value.as_str())
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect()
        }
    }
}
