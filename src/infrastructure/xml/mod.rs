// ============================================================
// CATALOG XML PARSER
// ============================================================
// The catalog middleware answers with `<report><row><cell name=".."
// >..</cell></row>..</report>` payloads. The first row carries the
// column labels as cell values; every later row is a document.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::error::{AppError, Result};
use crate::domain::{CatalogCell, CatalogDocument, CatalogRow};

pub fn parse_catalog(xml: &str) -> Result<CatalogDocument> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut header: Vec<String> = Vec::new();
    let mut rows: Vec<CatalogRow> = Vec::new();

    let mut in_row = false;
    let mut cells: Vec<CatalogCell> = Vec::new();
    let mut cell_name = String::new();
    let mut cell_value = String::new();
    let mut in_cell = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => match element.name().as_ref() {
                b"row" => {
                    in_row = true;
                    cells.clear();
                }
                b"cell" if in_row => {
                    in_cell = true;
                    cell_value.clear();
                    cell_name = attribute(&element, "name")?;
                }
                _ => {}
            },
            Ok(Event::Empty(element)) if in_row && element.name().as_ref() == b"cell" => {
                cells.push(CatalogCell {
                    name: attribute(&element, "name")?,
                    value: String::new(),
                });
            }
            Ok(Event::Text(text)) if in_cell => {
                let unescaped = text
                    .unescape()
                    .map_err(|e| AppError::ParseError(format!("Bad XML text: {}", e)))?;
                cell_value.push_str(&unescaped);
            }
            Ok(Event::End(element)) => match element.name().as_ref() {
                b"cell" if in_cell => {
                    in_cell = false;
                    cells.push(CatalogCell {
                        name: std::mem::take(&mut cell_name),
                        value: cell_value.trim().to_string(),
                    });
                }
                b"row" if in_row => {
                    in_row = false;
                    if header.is_empty() {
                        // header row: cell values are the column labels
                        header = cells.drain(..).map(|cell| cell.value).collect();
                    } else {
                        rows.push(CatalogRow {
                            cells: std::mem::take(&mut cells),
                        });
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(AppError::ParseError(format!(
                    "Bad catalog XML at offset {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    if header.is_empty() {
        return Err(AppError::MalformedInput(
            "Catalog payload contains no rows".to_string(),
        ));
    }
    Ok(CatalogDocument { header, rows })
}

fn attribute(element: &quick_xml::events::BytesStart<'_>, name: &str) -> Result<String> {
    let attr = element
        .try_get_attribute(name)
        .map_err(|e| AppError::ParseError(format!("Bad XML attribute: {}", e)))?;
    match attr {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|e| AppError::ParseError(format!("Bad XML attribute value: {}", e)))?;
            Ok(value.into_owned())
        }
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<report>
  <row>
    <cell name="header">Work Title</cell>
    <cell name="header">Language</cell>
    <cell name="header">Oecd.Org Url</cell>
  </row>
  <row>
    <cell name="work title">COVID-19 and global food systems</cell>
    <cell name="language">English</cell>
    <cell name="oecd.org url">https://www.oecd.org/coronavirus/policy-responses/covid-19-and-global-food-systems-aeb1434b/</cell>
  </row>
  <row>
    <cell name="work title">Entity &amp; escape check</cell>
    <cell name="language">English</cell>
    <cell name="oecd.org url"/>
  </row>
</report>"#;

    #[test]
    fn test_first_row_becomes_the_header() {
        let document = parse_catalog(SAMPLE).unwrap();
        assert_eq!(
            document.header,
            vec!["Work Title", "Language", "Oecd.Org Url"]
        );
        assert_eq!(document.rows.len(), 2);
    }

    #[test]
    fn test_cells_keep_name_attribute_and_unescaped_value() {
        let document = parse_catalog(SAMPLE).unwrap();
        let row = &document.rows[0];
        assert_eq!(row.cell("language"), Some("English"));
        assert_eq!(
            document.rows[1].cell("work title"),
            Some("Entity & escape check")
        );
    }

    #[test]
    fn test_self_closing_cell_is_empty() {
        let document = parse_catalog(SAMPLE).unwrap();
        assert_eq!(document.rows[1].cell("oecd.org url"), Some(""));
    }

    #[test]
    fn test_payload_without_rows_is_malformed() {
        let err = parse_catalog("<report></report>").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }
}
