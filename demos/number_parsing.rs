//! Number Parsing Example
//!
//! This example demonstrates the three calling conventions of `NumberParser`
//! and how parse requests can be described in configuration.

use serde::Deserialize;
use text_scan::{NumberParser, NumericKind, Radix};

#[derive(Debug, Deserialize)]
struct FieldSpec {
    name: String,
    kind: NumericKind,
    #[serde(default)]
    radix: Radix,
    text: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Number Parsing Example");
    println!("======================\n");

    demo_calling_conventions()?;
    demo_config_driven()?;

    Ok(())
}

fn demo_calling_conventions() -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Calling conventions:");

    let port = NumberParser::parse_unsigned(" 8080 ")?;
    println!("   parse_unsigned(\" 8080 \")   = {port}");

    let mask = NumberParser::try_parse_hex("0xFF00").unwrap_or_default();
    println!("   try_parse_hex(\"0xFF00\")     = {mask:#x}");

    let mode = NumberParser::parse_oct("0755")?;
    println!("   parse_oct(\"0755\")           = {mode:#o}");

    for input in ["", "12abc", "99999999999", "-"] {
        match NumberParser::scan(input) {
            Ok(value) => println!("   scan({input:?}) = {value}"),
            Err(error) => println!("   scan({input:?}) failed: {error} ({})", error.kind()),
        }
    }
    println!();
    Ok(())
}

fn demo_config_driven() -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Config-driven parsing:");

    let fields: Vec<FieldSpec> = serde_json::from_str(
        r#"[
            { "name": "workers", "kind": "uint32", "text": "16" },
            { "name": "offset", "kind": "int64", "text": "-4096" },
            { "name": "flags", "kind": "uint64", "radix": "hex", "text": "0x8000000000000001" },
            { "name": "ratio", "kind": "float64", "text": "0.75" },
            { "name": "verbose", "kind": "bool", "text": "On" },
            { "name": "broken", "kind": "int32", "radix": "octal", "text": "17" }
        ]"#,
    )?;

    for field in fields {
        match NumberParser::parse_value(&field.text, field.kind, field.radix) {
            Ok(value) => println!("   {:<8} = {value}", field.name),
            Err(error) => println!("   {:<8} : {error}", field.name),
        }
    }
    Ok(())
}
