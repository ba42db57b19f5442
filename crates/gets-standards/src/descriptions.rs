//! Human-readable descriptions of standard fields.

/// Fallback for paths without a dedicated description.
pub const DEFAULT_DESCRIPTION: &str = "Standard e-invoicing field";

/// Returns the description shown next to a missing field.
pub fn field_description(path: &str) -> &'static str {
    match path {
        "invoice.id" => "Unique invoice identifier",
        "invoice.issue_date" => "Date when invoice was issued",
        "invoice.currency" => "Currency code (AED, SAR, MYR, USD)",
        "invoice.total_excl_vat" => "Total amount excluding VAT",
        "invoice.vat_amount" => "VAT amount",
        "invoice.total_incl_vat" => "Total amount including VAT",
        "seller.name" => "Seller company name",
        "seller.trn" => "Seller Tax Registration Number",
        "seller.country" => "Seller country code",
        "seller.city" => "Seller city",
        "buyer.name" => "Buyer company name",
        "buyer.trn" => "Buyer Tax Registration Number",
        "buyer.country" => "Buyer country code",
        "buyer.city" => "Buyer city",
        "lines[].sku" => "Product/service SKU",
        "lines[].description" => "Product/service description",
        "lines[].qty" => "Quantity",
        "lines[].unit_price" => "Unit price",
        "lines[].line_total" => "Line total amount",
        _ => DEFAULT_DESCRIPTION,
    }
}
