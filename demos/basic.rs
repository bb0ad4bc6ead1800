//! Basic card brand identification example.
//!
//! Run with: `cargo run --example basic`

use cc_identifier::{luhn, CatalogError, Validator};

fn main() -> Result<(), CatalogError> {
    println!("=== Card Brand Identification ===\n");

    let validator = Validator::new()?;

    // Example 1: List the catalog
    println!("Supported brands: {}", validator.list_brands().join(", "));
    println!();

    // Example 2: Identify card numbers
    let pans = [
        "4012001037141112",
        "5533798818319497",
        "378282246310005",
        "6011236044609927",
        "30066909048113",
        "6362970000457013",
        "6062825624254001",
        "1234567890123456",
        "4012 0010 3714 1112",
    ];

    println!("Identification:");
    for pan in pans {
        let brand = validator.find_brand(pan).unwrap_or("-");
        let check = if luhn(pan) { "pass" } else { "fail" };
        println!("  {:<22} brand: {:<12} luhn: {}", format!("{:?}", pan), brand, check);
    }
    println!();

    // Example 3: Full validation (brand plus required Luhn)
    println!("Full validation:");
    for pan in ["4012001037141112", "4012001037141113", "6220123456789012"] {
        match validator.validate(pan) {
            Some(brand) => println!("  {}: valid {}", pan, brand),
            None => println!("  {}: invalid", pan),
        }
    }
    println!();

    // Example 4: CVV validation
    println!("CVV validation:");
    for (cvv, brand) in [("123", "visa"), ("1234", "amex"), ("1234", "visa"), ("123", "unknown")] {
        println!(
            "  {} for {}: {}",
            cvv,
            brand,
            if validator.validate_cvv(cvv, brand) { "ok" } else { "rejected" }
        );
    }
    println!();

    // Example 5: Brand metadata
    println!("Brand details:");
    for name in validator.list_brands() {
        if let Some(detailed) = validator.brand_info_detailed(name) {
            println!(
                "  {:<11} {:<17} {:<7} lengths {:?}, cvv {:?}, luhn {}, countries {}",
                detailed.scheme,
                detailed.brand,
                detailed.card_type,
                detailed.number.lengths,
                detailed.cvv.lengths,
                if detailed.requires_luhn() { "required" } else { "optional" },
                detailed.countries.join(",")
            );
        }
    }

    Ok(())
}
