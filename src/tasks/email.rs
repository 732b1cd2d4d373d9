//! Email sender extraction task
//!
//! Reads `email.txt`, pulls the sender's address out of the `From:` header
//! (angle-bracketed or bare form), and writes it to `email-sender.txt`.

use std::fs;
use std::path::Path;

use super::{require_input, TaskError};

pub fn extract_sender(data_dir: &Path) -> Result<(), TaskError> {
    let input = require_input(data_dir, "email.txt")?;
    let content = fs::read_to_string(&input)?;

    let sender = parse_sender(&content).ok_or(TaskError::NoSender)?;
    fs::write(data_dir.join("email-sender.txt"), sender)?;
    Ok(())
}

/// Find the first `From:` header and extract its address
fn parse_sender(content: &str) -> Option<String> {
    for line in content.lines() {
        let Some(rest) = line.strip_prefix("From:") else {
            continue;
        };

        // Prefer the angle-bracketed form: From: Jane Doe <jane@example.com>
        if let (Some(start), Some(end)) = (rest.find('<'), rest.rfind('>')) {
            if start < end {
                return Some(rest[start + 1..end].trim().to_string());
            }
        }

        // Bare form: From: jane@example.com
        return rest
            .split_whitespace()
            .find(|token| token.contains('@'))
            .map(|token| token.trim_matches(|c| c == '<' || c == '>' || c == ',').to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_angle_bracketed_sender() {
        assert_eq!(
            parse_sender("Subject: Hi\nFrom: Jane Doe <jane@example.com>\nTo: x@y.z\n"),
            Some("jane@example.com".to_string())
        );
    }

    #[test]
    fn test_bare_sender() {
        assert_eq!(
            parse_sender("From: jane@example.com\n"),
            Some("jane@example.com".to_string())
        );
    }

    #[test]
    fn test_no_from_header() {
        assert_eq!(parse_sender("To: jane@example.com\nbody\n"), None);
    }

    #[test]
    fn test_writes_sender_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("email.txt"),
            "From: Support <support@example.org>\nSubject: Welcome\n",
        )
        .unwrap();

        extract_sender(temp.path()).unwrap();
        let written = std::fs::read_to_string(temp.path().join("email-sender.txt")).unwrap();
        assert_eq!(written, "support@example.org");
    }

    #[test]
    fn test_from_without_address_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("email.txt"), "From: Anonymous\n").unwrap();

        let err = extract_sender(temp.path()).unwrap_err();
        assert!(matches!(err, TaskError::NoSender));
        assert!(!temp.path().join("email-sender.txt").exists());
    }
}
