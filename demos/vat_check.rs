use vatnum::{Validator, check, jurisdictions, rule_for, validate};

fn main() {
    println!("=== Formal VAT Code Validation ===\n");

    let samples = [
        ("AT", "U12345678"),
        ("AT", "U123456780"), // too long
        ("CH", "123.456.789"),
        ("FR", "OI123456789"), // O and I not allowed
        ("IT", "00154189997"),
        ("IT", "01573850514"), // bad check digit
        ("NL", "123456789B01"),
        ("NO", "123456789MVA"),
        ("ZZ", "anything"), // unknown jurisdiction
    ];

    for (jurisdiction, code) in &samples {
        match validate(jurisdiction, code) {
            Ok(()) => println!("  {jurisdiction} {code} => valid"),
            Err(e) => println!("  {jurisdiction} {code} => INVALID: {e}"),
        }
    }

    println!("\n=== Strict Mode ===\n");

    let strict = Validator::strict();
    for (jurisdiction, code) in [("ZZ", "anything"), ("DE", "123456789")] {
        println!(
            "  {jurisdiction} {code} => default={}, strict={}",
            check(jurisdiction, code),
            strict.check(jurisdiction, code)
        );
    }

    println!("\n=== Supported Jurisdictions ===\n");

    for jurisdiction in jurisdictions() {
        if let Some(rule) = rule_for(jurisdiction) {
            println!(
                "  {jurisdiction}: length {}, {} check(s)",
                rule.length,
                rule.checks.len()
            );
        }
    }
}
