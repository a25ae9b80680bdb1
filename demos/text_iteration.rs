//! Text Iteration Example
//!
//! This example walks the same bytes under different encodings, including
//! a truncated UTF-8 tail and a custom single-byte table.

use std::sync::Arc;
use text_scan::{EncodingRegistry, TableEncoding, TextCursor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Text Iteration Example");
    println!("======================\n");

    let mut registry = EncodingRegistry::with_builtins();
    let mut map: Vec<i32> = (0..256).collect();
    map[0xA4] = '€' as i32;
    let latin9_subset: TableEncoding = serde_json::from_value(serde_json::json!({
        "name": "x-latin9-subset",
        "aliases": ["euro"],
        "map": map,
    }))?;
    registry.register(Arc::new(latin9_subset))?;

    // "Grüße €" in UTF-8 with the last byte of '€' cut off
    let mut bytes = "Grüße €".as_bytes().to_vec();
    bytes.pop();

    for name in ["utf-8", "latin1", "ascii", "euro"] {
        let Some(encoding) = registry.find(name) else {
            continue;
        };
        print!("{:<12}", encoding.name());
        let mut cursor = TextCursor::from_bytes(&bytes, encoding.as_ref());
        let end = TextCursor::end_of(&bytes);
        while cursor != end {
            match cursor.current() {
                Ok(ch) => print!("{ch}"),
                Err(_) => print!("\u{FFFD}"),
            }
            cursor.advance();
        }
        println!();
    }

    Ok(())
}
