//! Name normalisation shared by suggestion and coverage matching.
//!
//! Source columns drop `_`, `-` and whitespace; field paths drop `.`, `_`,
//! `[` and `]`. Both are lower-cased so `Invoice Total` and
//! `invoice.total_incl_vat` compare on `invoicetotal` / `invoicetotalinclvat`.

/// Lower-cases a source column and removes separators.
pub fn compact_source(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|ch| !matches!(ch, '_' | '-') && !ch.is_whitespace())
        .collect()
}

/// Lower-cases a field path and removes path punctuation.
pub fn compact_path(path: &str) -> String {
    path.to_lowercase()
        .chars()
        .filter(|ch| !matches!(ch, '.' | '_' | '[' | ']'))
        .collect()
}

/// Removes one trailing `id`, then one trailing `date`.
pub fn strip_suffixes(compact: &str) -> &str {
    let without_id = compact.strip_suffix("id").unwrap_or(compact);
    without_id.strip_suffix("date").unwrap_or(without_id)
}

/// Returns the first `n` characters.
pub fn prefix(value: &str, n: usize) -> &str {
    match value.char_indices().nth(n) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// True if either string contains the other.
pub fn mutual_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_source_columns() {
        assert_eq!(compact_source("Invoice_Date"), "invoicedate");
        assert_eq!(compact_source("total - amount"), "totalamount");
    }

    #[test]
    fn compacts_paths() {
        assert_eq!(compact_path("invoice.total_incl_vat"), "invoicetotalinclvat");
        assert_eq!(compact_path("lines[].unit_price"), "linesunitprice");
    }

    #[test]
    fn strips_id_then_date() {
        assert_eq!(strip_suffixes("invoicedate"), "invoice");
        assert_eq!(strip_suffixes("invoiceid"), "invoice");
        assert_eq!(strip_suffixes("dateid"), "");
        assert_eq!(strip_suffixes("idate"), "i");
        assert_eq!(strip_suffixes("buyertrn"), "buyertrn");
    }

    #[test]
    fn prefix_is_char_based() {
        assert_eq!(prefix("invoice", 4), "invo");
        assert_eq!(prefix("qty", 4), "qty");
        assert_eq!(prefix("prix_unité", 4), "prix");
        assert_eq!(prefix("éééé", 3), "ééé");
    }
}
