//! Lists every registered vocabulary and previews the JSON-LD listing.
//!
//! Run with: `cargo run --example dump_vocabularies -p datafabric-vocab`

fn main() {
    let registry = datafabric_vocab::Registry::full();

    println!("Known vocabularies");
    println!("  Vocabularies: {}", registry.len());
    println!("  Terms:        {}", registry.term_count());
    println!();

    for vocabulary in registry.vocabularies() {
        println!(
            "  {:18} {:80} {:>4} terms  [{}]",
            vocabulary.prefix(),
            vocabulary.namespace(),
            vocabulary.len(),
            vocabulary.family().as_str(),
        );
    }

    println!();

    let json_ld = datafabric_vocab::serializer::jsonld::context(registry);
    let json_str =
        serde_json::to_string_pretty(&json_ld).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON-LD context ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(400)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);
}
