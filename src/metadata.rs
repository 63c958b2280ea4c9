//! Metadata extraction and file-listing correlation.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::constants::fields;
use crate::errors::PipelineError;
use crate::listing::FileListing;
use crate::record::RawFields;
use crate::types::Asin;

/// Canonical-subset fields stored per product id.
pub type ProductFields = Map<String, Value>;
/// Insertion-ordered lookup from product id to its canonical fields.
pub type MetadataIndex = IndexMap<Asin, ProductFields>;

/// Build an id → field-map index over the first `limit` records.
///
/// Fail-fast on schema drift: a record missing any required column aborts
/// the whole extraction with an error naming the column and the row index.
/// Partial indexes never escape — either every inspected row had the full
/// column set, or the caller gets the error.
pub fn extract_metadata<I, R>(records: I, limit: usize) -> Result<MetadataIndex, PipelineError>
where
    I: IntoIterator<Item = R>,
    R: RawFields,
{
    let mut index = MetadataIndex::new();
    for (row, record) in records.into_iter().enumerate() {
        if row == limit {
            break;
        }
        let mut entry = ProductFields::new();
        for column in fields::REQUIRED {
            let value = record
                .raw_field(column)
                .ok_or(PipelineError::MissingColumn { column, row })?;
            entry.insert(column.to_string(), value.clone());
        }
        let asin = record.text_field(fields::PARENT_ASIN).to_string();
        index.insert(asin, entry);
    }
    Ok(index)
}

/// Resolve every listed file id against the metadata index, preserving
/// listing order.
///
/// An unresolved id signals a data-integrity problem between the file
/// listing and the metadata source, so the first miss aborts the join
/// instead of being skipped.
pub fn resolve_listing<'a>(
    listing: &FileListing,
    index: &'a MetadataIndex,
) -> Result<Vec<&'a ProductFields>, PipelineError> {
    listing
        .ids
        .iter()
        .map(|id| {
            index
                .get(id)
                .ok_or_else(|| PipelineError::UnmatchedFileId { id: id.clone() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawRecord;
    use serde_json::json;

    fn complete_row(asin: &str) -> RawRecord {
        RawRecord::from_value(json!({
            "parent_asin": asin,
            "title": format!("item {asin}"),
            "description": "",
            "main_category": "Tools",
            "store": "Acme",
            "average_rating": 4.0,
            "rating_number": 10,
            "price": 5.0,
        }))
    }

    #[test]
    fn extraction_indexes_by_id_in_input_order() {
        let rows = vec![complete_row("B01"), complete_row("B02"), complete_row("B03")];
        let index = extract_metadata(rows, 10).expect("complete rows");
        let ids: Vec<&Asin> = index.keys().collect();
        assert_eq!(ids, ["B01", "B02", "B03"]);
        assert_eq!(index["B02"]["title"], json!("item B02"));
        assert_eq!(index["B02"].len(), fields::REQUIRED.len());
    }

    #[test]
    fn extraction_stops_at_the_limit() {
        let rows = vec![complete_row("B01"), complete_row("B02"), complete_row("B03")];
        let index = extract_metadata(rows, 2).expect("complete rows");
        assert_eq!(index.len(), 2);
        assert!(!index.contains_key("B03"));
    }

    #[test]
    fn missing_column_fails_fast_with_row_index() {
        // Rebuild a complete row without `price`.
        let broken = {
            let mut value = serde_json::to_value(complete_row("B03")).expect("serializable");
            value.as_object_mut().expect("object").remove("price");
            RawRecord::from_value(value)
        };
        let rows = vec![complete_row("B01"), complete_row("B02"), broken];

        let err = extract_metadata(rows, 10).expect_err("schema drift");
        match err {
            PipelineError::MissingColumn { column, row } => {
                assert_eq!(column, "price");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn join_resolves_every_listed_id() {
        let rows = vec![complete_row("B01"), complete_row("B02")];
        let index = extract_metadata(rows, 10).expect("complete rows");
        let listing = FileListing {
            ids: vec!["B02".to_string(), "B01".to_string()],
            paths: vec!["x_B02.png".to_string(), "x_B01.png".to_string()],
        };
        let resolved = resolve_listing(&listing, &index).expect("all ids known");
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0]["parent_asin"], json!("B02"));
        assert_eq!(resolved[1]["parent_asin"], json!("B01"));
    }

    #[test]
    fn join_miss_propagates() {
        let index = extract_metadata(vec![complete_row("B01")], 10).expect("complete row");
        let listing = FileListing {
            ids: vec!["B01".to_string(), "B0MISSING".to_string()],
            paths: vec!["x_B01.png".to_string(), "x_B0MISSING.png".to_string()],
        };
        let err = resolve_listing(&listing, &index).expect_err("unknown id");
        assert!(matches!(
            err,
            PipelineError::UnmatchedFileId { id } if id == "B0MISSING"
        ));
    }
}
