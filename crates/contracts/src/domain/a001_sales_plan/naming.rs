/// Letter label for the product at zero-based `index`.
///
/// A..Z, then AA, AB, .. AZ, BA, .. (spreadsheet column style).
pub fn product_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Default name for a product added when `existing` products are present
pub fn default_product_name(existing: usize) -> String {
    format!("Product {}", product_label(existing))
}
