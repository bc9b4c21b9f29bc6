#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use contactbook_core::{Contact, ContactFields};
    use contactbook_persistence::{ContactSearch, ContactSearchResult, ContactStoreApi, Result};
    use std::io::{Cursor, Write};
    use zip::{CompressionMethod, ZipWriter, write::FileOptions};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn insert(&self, data: ContactFields) -> Result<Contact>;
            async fn insert_all(&self, data: Vec<ContactFields>) -> Result<Vec<Contact>>;
            async fn get(&self, id: i64) -> Result<Option<Contact>>;
            async fn search(&self, search: ContactSearch) -> Result<ContactSearchResult>;
            async fn update(&self, id: i64, data: ContactFields) -> Result<Contact>;
            async fn delete(&self, id: i64) -> Result<()>;
        }
    }

    pub fn test_config() -> crate::Config {
        crate::Config {
            surreal_db_connection: "ws://localhost:8800".to_string(),
            surreal_db_namespace: "contacts".to_string(),
            surreal_db_database: "contacts".to_string(),
        }
    }

    pub fn get_baseline_contact() -> Contact {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        Contact {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: "5551234".to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

    const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

    const WORKBOOK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Contacts" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

    const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

    /// Builds a minimal xlsx workbook with a single sheet. Cells prefixed with `s:` are written
    /// as strings, cells prefixed with `n:` as numbers and empty cells are left out.
    pub fn xlsx_bytes(rows: &[Vec<&str>]) -> Vec<u8> {
        let mut sheet = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
        );
        for (row_idx, row) in rows.iter().enumerate() {
            let row_num = row_idx + 1;
            sheet.push_str(&format!(r#"<row r="{row_num}">"#));
            for (col_idx, cell) in row.iter().enumerate() {
                let reference = format!("{}{row_num}", (b'A' + col_idx as u8) as char);
                if let Some(text) = cell.strip_prefix("s:") {
                    sheet.push_str(&format!(
                        r#"<c r="{reference}" t="inlineStr"><is><t>{text}</t></is></c>"#
                    ));
                } else if let Some(number) = cell.strip_prefix("n:") {
                    sheet.push_str(&format!(r#"<c r="{reference}"><v>{number}</v></c>"#));
                }
            }
            sheet.push_str("</row>");
        }
        sheet.push_str("</sheetData></worksheet>");

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        for (path, content) in [
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("_rels/.rels", ROOT_RELS_XML),
            ("xl/workbook.xml", WORKBOOK_XML),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML),
            ("xl/worksheets/sheet1.xml", sheet.as_str()),
        ] {
            writer.start_file(path, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }
}
