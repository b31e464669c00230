// ============================================================================
// Basic Usage Example
// ============================================================================

use exactdec::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Exact Decimal Example ===\n");

    // Parse exact values from text.
    let price = Decimal::parse("1234.50").unwrap();
    let tax = Decimal::parse("246.90").unwrap();
    println!("price: {}", price);
    println!("tax:   {}", tax);

    // Addition carries across the decimal point exactly.
    let mut total = price;
    total.add(&tax).unwrap();
    println!("total: {}", total);
    println!("total (grouped): {}\n", total.to_grouped_string());

    // Subtraction borrows exactly, and crossing zero flips the sign.
    let mut refund = Decimal::parse("100.05").unwrap();
    refund.sub(&Decimal::parse("100.10").unwrap()).unwrap();
    println!("refund delta: {}", refund);
    println!("is negative:  {}\n", refund.is_negative());

    // Comparison is exact as well.
    let a = Decimal::parse("111.333").unwrap();
    let b = Decimal::parse("111.222").unwrap();
    println!("{} > {}: {}\n", a, b, a > b);

    // European-style symbols, passed explicitly.
    let european = DecimalFormat::new()
        .with_decimal_separator(',')
        .with_grouping_separator('.');
    let amount = Decimal::parse_with("1234567,89", &european).unwrap();
    println!("european input:   1234567,89");
    println!("grouped output:   {}\n", amount.to_grouped_string_with(&european));

    // Or installed process-wide.
    set_default_format(european).unwrap();
    println!("new default render: {}", amount);
    set_default_format(DecimalFormat::new()).unwrap();

    // Errors report the operation, the input, and what went wrong.
    println!("\n=== Error Surface ===");
    for input in ["12x", "1.2.3", "18446744073709551616"] {
        let err = Decimal::parse(input).unwrap_err();
        println!("{}", err);
    }

    let mut top = Decimal::parse("18446744073709551615.0").unwrap();
    let err = top.add(&Decimal::parse("1.0").unwrap()).unwrap_err();
    println!("{}", err);
    println!("receiver unchanged: {}", top);
}
