//! CLI command implementations.
//!
//! Every store command loads the .strs file, runs one request through
//! [`StringService`], prints the response and, for successful mutations,
//! writes the store back.

use std::path::Path;

use serde_json::{json, Value};

use crate::engine::{analyze, detect_conflict, parse};
use crate::format::{StoreReader, StoreWriter};
use crate::service::{ApiResponse, StatusCode, StringService};
use crate::store::RecordStore;
use crate::types::record::format_timestamp;
use crate::types::{FilterSet, PropertySet, StrsResult};

/// Print the properties of a string without touching the store.
pub fn cmd_analyze(value: &str, json: bool) -> StrsResult<StatusCode> {
    let properties = analyze(value);
    if json {
        print_json(&serde_json::to_value(&properties).unwrap_or_default());
    } else {
        print_properties(&properties);
    }
    Ok(StatusCode::Ok)
}

/// Analyze and store a new string.
pub fn cmd_add(path: &Path, value: &str, json: bool) -> StrsResult<StatusCode> {
    let mut service = StringService::new(StoreReader::load_or_default(path)?);
    let response = service.create(&json!({ "value": value }));
    if response.status.is_success() {
        StoreWriter::write_to_file(service.store(), path)?;
    }
    Ok(emit(&response, json, |body| {
        println!("Added to {}", path.display());
        print_record(body);
    }))
}

/// Show the record for a literal string.
pub fn cmd_get(path: &Path, value: &str, json: bool) -> StrsResult<StatusCode> {
    let service = StringService::new(StoreReader::load_or_default(path)?);
    let response = service.get(value);
    Ok(emit(&response, json, print_record))
}

/// Delete the record for a literal string.
pub fn cmd_delete(path: &Path, value: &str, json: bool) -> StrsResult<StatusCode> {
    let mut service = StringService::new(StoreReader::load_or_default(path)?);
    let response = service.delete(value);
    if response.status.is_success() {
        StoreWriter::write_to_file(service.store(), path)?;
        if json {
            print_json(&json!({ "deleted": value }));
        } else {
            println!("Deleted {:?} from {}", value, path.display());
        }
        return Ok(response.status);
    }
    Ok(emit(&response, json, |_| {}))
}

/// List records using structured filters given as raw `(name, value)` pairs.
pub fn cmd_list(path: &Path, params: &[(&str, &str)], json: bool) -> StrsResult<StatusCode> {
    let service = StringService::new(StoreReader::load_or_default(path)?);
    let response = service.list(params.iter().copied());
    Ok(emit(&response, json, |body| {
        if let Some(filters) = body.get("filters_applied") {
            println!("Filters: {}", filters);
        }
        print_listing(body);
    }))
}

/// List records matching a natural-language phrase.
pub fn cmd_filter(path: &Path, phrase: &str, json: bool) -> StrsResult<StatusCode> {
    let service = StringService::new(StoreReader::load_or_default(path)?);
    let response = service.filter_by_natural_language(Some(phrase));
    Ok(emit(&response, json, |body| {
        if let Some(parsed) = body.pointer("/interpreted_query/parsed_filters") {
            println!("Interpreted {:?} as {}", phrase, parsed);
        }
        print_listing(body);
    }))
}

/// Show how a phrase is interpreted, without querying the store.
pub fn cmd_parse(phrase: &str, json: bool) -> StrsResult<StatusCode> {
    let filters = parse(phrase);
    let conflict = detect_conflict(&filters);
    if json {
        print_json(&json!({
            "original_query": phrase,
            "parsed_filters": filters,
            "conflict": conflict,
        }));
    } else {
        println!("Phrase: {:?}", phrase);
        print_filters(&filters);
        if conflict {
            println!("  Conflict: min_length > max_length");
        }
    }
    Ok(StatusCode::Ok)
}

/// Summary statistics about the store file.
pub fn cmd_stats(path: &Path, json: bool) -> StrsResult<StatusCode> {
    let store = StoreReader::load_or_default(path)?;
    let file_size = if path.exists() {
        std::fs::metadata(path)?.len()
    } else {
        0
    };

    let records = store.list();
    let count = records.len();
    let total_length: usize = records.iter().map(|r| r.properties.length).sum();
    let avg_length = if count > 0 {
        total_length as f64 / count as f64
    } else {
        0.0
    };
    let palindromes = store.palindrome_index().len();
    let newest = records.first().map(|r| format_timestamp(r.created_at));

    if json {
        print_json(&json!({
            "file": path.display().to_string(),
            "records": count,
            "palindromes": palindromes,
            "avg_length": avg_length,
            "distinct_word_counts": store.word_index().distinct_counts(),
            "newest": newest,
            "file_size": file_size,
        }));
    } else {
        println!("Store: {}", path.display());
        println!("  Records: {}", count);
        println!("  Palindromes: {}", palindromes);
        println!("  Avg length: {:.2}", avg_length);
        println!(
            "  Distinct word counts: {}",
            store.word_index().distinct_counts()
        );
        if let Some(ts) = newest {
            println!("  Newest: {}", ts);
        }
        println!("  File size: {}", format_size(file_size));
    }
    Ok(StatusCode::Ok)
}

/// Print a response: the body as JSON, or via `text` on success and the error on stderr.
fn emit(response: &ApiResponse, json: bool, text: impl FnOnce(&Value)) -> StatusCode {
    if json {
        if let Some(body) = &response.body {
            print_json(body);
        }
    } else if response.status.is_success() {
        if let Some(body) = &response.body {
            text(body);
        }
    } else {
        eprintln!(
            "Error ({}): {}",
            response.status,
            response.error_message().unwrap_or("request failed")
        );
    }
    response.status
}

fn print_json(value: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn print_record(body: &Value) {
    let field = |name: &str| body.get(name).cloned().unwrap_or(Value::Null);
    println!("Record {}", field("id").as_str().unwrap_or_default());
    println!("  Value: {}", field("value"));
    println!("  Created: {}", field("created_at").as_str().unwrap_or_default());
    if let Some(props) = body.get("properties") {
        for key in [
            "length",
            "is_palindrome",
            "unique_characters",
            "word_count",
        ] {
            println!("  {}: {}", key, props.get(key).cloned().unwrap_or(Value::Null));
        }
        if let Some(freq) = props.get("character_frequency_map") {
            println!("  character_frequency_map: {}", freq);
        }
    }
}

fn print_listing(body: &Value) {
    let count = body.get("count").and_then(Value::as_u64).unwrap_or(0);
    println!("{} record(s)", count);
    if let Some(data) = body.get("data").and_then(Value::as_array) {
        for record in data {
            let id = record.get("id").and_then(Value::as_str).unwrap_or_default();
            let value = record.get("value").cloned().unwrap_or(Value::Null);
            println!("  {}  {}", &id[..id.len().min(12)], value);
        }
    }
}

fn print_properties(properties: &PropertySet) {
    println!("length: {}", properties.length);
    println!("is_palindrome: {}", properties.is_palindrome);
    println!("unique_characters: {}", properties.unique_characters);
    println!("word_count: {}", properties.word_count);
    println!("sha256_hash: {}", properties.content_hash);
    let freq: Vec<String> = properties
        .character_frequency
        .iter()
        .map(|(c, n)| format!("{:?}: {}", c, n))
        .collect();
    println!("character_frequency_map: {{{}}}", freq.join(", "));
}

fn print_filters(filters: &FilterSet) {
    if filters.is_empty() {
        println!("  (no filters recognized)");
        return;
    }
    if let Some(v) = filters.is_palindrome {
        println!("  is_palindrome: {}", v);
    }
    if let Some(v) = filters.min_length {
        println!("  min_length: {}", v);
    }
    if let Some(v) = filters.max_length {
        println!("  max_length: {}", v);
    }
    if let Some(v) = filters.word_count {
        println!("  word_count: {}", v);
    }
    if let Some(v) = filters.contains_character {
        println!("  contains_character: {:?}", v);
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
