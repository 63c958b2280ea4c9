//! Per-record orchestration into the canonical schema.

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::constants::{fields, numeric};
use crate::metrics::asin_collision_report;
use crate::record::{CleanedRecord, RawFields};
use crate::sanitize::{clean_float, clean_int, clean_parent_asin, parse_details};
use crate::text::TextNormalizer;

/// Controls optional preprocessing behavior.
#[derive(Clone, Debug)]
pub struct PreprocessorConfig {
    /// Upper clamp applied to `average_rating`.
    pub rating_bound: f64,
    /// Uppercase the four text fields during the homoglyph pass.
    pub uppercase_text: bool,
    /// Parse the optional `details` blob and attach the flattened fields.
    pub include_details: bool,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            rating_bound: numeric::MAX_AVERAGE_RATING,
            uppercase_text: false,
            include_details: false,
        }
    }
}

/// Order-preserving record cleaner.
///
/// Stateless across records: the confusables table and the transliteration
/// capability inside `TextNormalizer` are the only shared resources, both
/// read-only, so records can be fanned out to workers freely.
#[derive(Clone, Default)]
pub struct Preprocessor {
    config: PreprocessorConfig,
    text: TextNormalizer,
}

impl Preprocessor {
    /// Preprocessor with the default text pipeline.
    pub fn new(config: PreprocessorConfig) -> Self {
        Self {
            config,
            text: TextNormalizer::new(),
        }
    }

    /// Preprocessor over a caller-configured text normalizer (e.g. one with
    /// no transliteration fallback).
    pub fn with_text_normalizer(config: PreprocessorConfig, text: TextNormalizer) -> Self {
        Self { config, text }
    }

    /// Active configuration.
    pub fn config(&self) -> &PreprocessorConfig {
        &self.config
    }

    /// Clean a single record into the canonical 8-field schema.
    ///
    /// Total per record: missing, null, and wrongly-typed inputs land on the
    /// field's typed zero value (`""`, `0`, `0.0`).
    pub fn clean_record<R: RawFields>(&self, record: &R) -> CleanedRecord {
        let uppercase = self.config.uppercase_text;
        let details = if self.config.include_details {
            parse_details(record.text_field(fields::DETAILS), &self.text)
        } else {
            IndexMap::new()
        };
        CleanedRecord {
            parent_asin: clean_parent_asin(record.text_field(fields::PARENT_ASIN)),
            title: self
                .text
                .normalize_text_cased(record.text_field(fields::TITLE), uppercase),
            description: self
                .text
                .normalize_text_cased(record.text_field(fields::DESCRIPTION), uppercase),
            main_category: self
                .text
                .normalize_text_cased(record.text_field(fields::MAIN_CATEGORY), uppercase),
            store: self
                .text
                .normalize_text_cased(record.text_field(fields::STORE), uppercase),
            average_rating: clean_float(
                record.raw_field(fields::AVERAGE_RATING),
                Some(self.config.rating_bound),
            ),
            rating_number: clean_int(record.raw_field(fields::RATING_NUMBER)),
            price: clean_float(record.raw_field(fields::PRICE), None),
            details,
        }
    }

    /// Clean every record, preserving input order.
    pub fn preprocess<I, R>(&self, records: I) -> Vec<CleanedRecord>
    where
        I: IntoIterator<Item = R>,
        R: RawFields,
    {
        let mut raw_ids = Vec::new();
        let mut cleaned = Vec::new();
        for record in records {
            raw_ids.push(record.text_field(fields::PARENT_ASIN).to_string());
            cleaned.push(self.clean_record(&record));
        }
        self.report_id_integrity(&raw_ids, &cleaned);
        cleaned
    }

    /// `preprocess` with a rayon fan-out; output order still matches input.
    pub fn preprocess_parallel<R>(&self, records: &[R]) -> Vec<CleanedRecord>
    where
        R: RawFields + Sync,
    {
        let cleaned: Vec<CleanedRecord> = records
            .par_iter()
            .map(|record| self.clean_record(record))
            .collect();
        let raw_ids: Vec<String> = records
            .iter()
            .map(|record| record.text_field(fields::PARENT_ASIN).to_string())
            .collect();
        self.report_id_integrity(&raw_ids, &cleaned);
        cleaned
    }

    /// Uniqueness check before/after id cleaning. Collisions silently merge
    /// distinct products downstream, so each one is surfaced loudly.
    fn report_id_integrity(&self, raw_ids: &[String], cleaned: &[CleanedRecord]) {
        let report = asin_collision_report(
            raw_ids
                .iter()
                .map(String::as_str)
                .zip(cleaned.iter().map(|record| record.parent_asin.as_str())),
        );
        for collision in &report.collisions {
            warn!(
                cleaned = %collision.cleaned,
                raw = ?collision.raw_ids,
                "id sanitization merged distinct parent_asin values"
            );
        }
        debug!(
            records = report.total,
            changed_ids = report.changed,
            empty_ids = report.empty,
            collisions = report.collisions.len(),
            "preprocessed records"
        );
    }
}
