/// Constants used by record field access and metadata extraction.
pub mod fields {
    /// Product identifier column.
    pub const PARENT_ASIN: &str = "parent_asin";
    /// Product title column.
    pub const TITLE: &str = "title";
    /// Long-form description column.
    pub const DESCRIPTION: &str = "description";
    /// Top-level category column.
    pub const MAIN_CATEGORY: &str = "main_category";
    /// Storefront name column.
    pub const STORE: &str = "store";
    /// Star-rating column.
    pub const AVERAGE_RATING: &str = "average_rating";
    /// Review-count column.
    pub const RATING_NUMBER: &str = "rating_number";
    /// Price column.
    pub const PRICE: &str = "price";
    /// Optional string-encoded detail-blob column.
    pub const DETAILS: &str = "details";

    /// Columns every record must supply during metadata extraction.
    pub const REQUIRED: [&str; 8] = [
        PARENT_ASIN,
        TITLE,
        DESCRIPTION,
        MAIN_CATEGORY,
        STORE,
        AVERAGE_RATING,
        RATING_NUMBER,
        PRICE,
    ];
}

/// Constants used by numeric sanitization.
pub mod numeric {
    /// Upper clamp for `average_rating` (star scale).
    pub const MAX_AVERAGE_RATING: f64 = 5.0;
}

/// Constants used by dataset-folder listing conventions.
pub mod listing {
    /// File extension accepted by the default listing pass.
    pub const DEFAULT_IMAGE_EXTENSION: &str = "png";
    /// Separator whose final stem token carries the file id.
    pub const ID_SEPARATOR: char = '_';
}

/// Constants used by detail-blob flattening.
pub mod details {
    /// Prefix applied to every flattened detail key.
    pub const DETAIL_KEY_PREFIX: &str = "detail_";
}

/// Constants used by metadata extraction defaults.
pub mod metadata {
    /// Default record cap for metadata extraction passes.
    pub const DEFAULT_EXTRACT_LIMIT: usize = 500;
}
