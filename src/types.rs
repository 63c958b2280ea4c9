/// Cleaned product identifier (uppercase alphanumeric).
/// Example: `B0C9VVW8ZK`
pub type Asin = String;
/// Id token extracted from a dataset file name.
/// Example: `B0C9VVW8ZK` (from `product_front_B0C9VVW8ZK.png`)
pub type FileId = String;
/// Flattened detail key including the `detail_` prefix.
/// Example: `detail_item_weight`
pub type DetailKey = String;
/// File path string carried alongside listed ids.
/// Example: `products_dataset/AMAZON-Products-2023/product_front_B0C9VVW8ZK.png`
pub type PathString = String;
