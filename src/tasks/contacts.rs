//! Contact sorting task
//!
//! Reads `contacts.json` (a JSON array of contact objects), sorts ascending
//! by (last name, first name), and writes the result pretty-printed to
//! `contacts-sorted.json`. All input fields are preserved.

use serde_json::Value;
use std::fs;
use std::path::Path;

use super::{require_input, TaskError};

pub fn sort_contacts(data_dir: &Path) -> Result<(), TaskError> {
    let input = require_input(data_dir, "contacts.json")?;
    let content = fs::read_to_string(&input)?;
    let contacts: Vec<Value> = serde_json::from_str(&content)?;

    // Extract keys up front so a malformed contact fails before any write
    let mut keyed: Vec<((String, String), Value)> = contacts
        .into_iter()
        .map(|contact| sort_key(&contact).map(|key| (key, contact)))
        .collect::<Result<_, _>>()?;

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    let sorted: Vec<Value> = keyed.into_iter().map(|(_, contact)| contact).collect();

    fs::write(
        data_dir.join("contacts-sorted.json"),
        serde_json::to_string_pretty(&sorted)?,
    )?;
    Ok(())
}

fn sort_key(contact: &Value) -> Result<(String, String), TaskError> {
    let last = contact
        .get("last_name")
        .and_then(Value::as_str)
        .ok_or(TaskError::MissingField("last_name"))?;
    let first = contact
        .get("first_name")
        .and_then(Value::as_str)
        .ok_or(TaskError::MissingField("first_name"))?;
    Ok((last.to_string(), first.to_string()))
}
