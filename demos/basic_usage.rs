// ============================================================================
// Basic Usage Example
// ============================================================================

use fraction_arith::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fraction Arithmetic Example ===\n");

    let a = Fraction::new(2, 3);
    let b = Fraction::new(4, 5);
    let c = Fraction::new(3, 2);

    println!("Core operations (never reduced):");
    println!("  {} + {} = {}", a, b, add(a, b));
    println!("  {} + {} = {}", a, -a, add(a, -a));
    println!("  {} * {} = {}", a, b, multiply(a, b));
    println!("  {} * {} = {}", a, c, multiply(a, c));
    println!("  reduced: {}", multiply(a, c).reduced());

    // Permissive calculator: degenerate fractions propagate
    let permissive =
        create_from_config(ArithmeticConfig::permissive("demo")).expect("valid config");

    println!("\nPermissive calculator:");
    match permissive.add(Fraction::new(1, 0), b) {
        Ok(result) => println!("  1/0 + {} = {} (degenerate: {})", b, result, result.is_degenerate()),
        Err(err) => println!("  rejected: {}", err),
    }

    // Strict calculator: degenerate operands and overflow are errors
    let strict = FractionCalculatorBuilder::strict("demo-strict")
        .build()
        .expect("valid config");

    println!("\nStrict calculator:");
    for (lhs, rhs) in [
        (Fraction::new(1, 0), b),
        (Fraction::from_integer(i64::MAX), Fraction::from_integer(2)),
        (a, c),
    ] {
        match strict.multiply(lhs, rhs) {
            Ok(result) => println!("  {} * {} = {}", lhs, rhs, result),
            Err(err) => println!("  {} * {} rejected: {}", lhs, rhs, err),
        }
    }

    let values = [Fraction::new(1, 2), Fraction::new(1, 3), Fraction::new(1, 6)];
    let total = permissive
        .fold(Operation::Add, values)
        .expect("permissive fold never fails");
    println!("\nSum of 1/2, 1/3, 1/6 = {} (decimal {:?})", total, total.to_decimal());

    println!(
        "\nPermissive: {} evaluated; strict: {} evaluated, {} rejected",
        permissive.evaluations(),
        strict.evaluations(),
        strict.rejections()
    );
}
