// ============================================================
// CATALOG DOCUMENT TYPES
// ============================================================
// Generic "row of named cells" shape produced by the catalog XML
// parser. The first row of the payload is a header whose cell values
// are the column labels; data rows carry a name attribute per cell.

/// A single named cell in a catalog row.
#[derive(Debug, Clone)]
pub struct CatalogCell {
    /// Cell name attribute, lowercase in the source payload
    /// (e.g. `mediahub link`)
    pub name: String,

    /// Cell text content
    pub value: String,
}

/// One catalog data row, cells in document order.
#[derive(Debug, Clone, Default)]
pub struct CatalogRow {
    pub cells: Vec<CatalogCell>,
}

impl CatalogRow {
    /// Value of the first cell with the given name, if any.
    pub fn cell(&self, name: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// First non-empty cell whose name is among `names`, in document
    /// order.
    pub fn first_non_empty(&self, names: &[&str]) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| names.contains(&c.name.as_str()) && !c.value.is_empty())
            .map(|c| c.value.as_str())
    }
}

/// The parsed catalog payload: header labels plus data rows.
#[derive(Debug, Clone)]
pub struct CatalogDocument {
    /// Column labels from the header row, in document order
    pub header: Vec<String>,

    /// Data rows (header row excluded)
    pub rows: Vec<CatalogRow>,
}
