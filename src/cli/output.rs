//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{CorrigoArgs, OutputFormat};
use crate::error::Result;
use crate::reconcile::{AppliedCorrection, Diagnostic, FlaggedToken};

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub original: String,
    pub corrected: String,
    pub applied_corrections: Vec<AppliedCorrection>,
    pub diagnostics: Vec<Diagnostic>,
    pub flagged_tokens: Vec<FlaggedToken>,
}

/// One row of search output.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub rank: usize,
    pub name: String,
    pub url: String,
    pub snippet: Option<String>,
}

/// Result structure for the search commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub total_estimated_matches: Option<u64>,
    pub hits: Vec<SearchHit>,
    pub opened_url: Option<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CorrigoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CorrigoArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("CheckResults") => {
            output_check_results_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("SearchResults") => {
            output_search_results_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output check results in human format.
fn output_check_results_human(value: &serde_json::Value, args: &CorrigoArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(corrected) = obj.get("corrected").and_then(|c| c.as_str()) {
        println!("{corrected}");
    }

    if args.verbosity() > 0 {
        if let Some(corrections) = obj.get("applied_corrections").and_then(|c| c.as_array()) {
            if !corrections.is_empty() {
                println!();
                println!("Corrections:");
                println!("────────────");
                for correction in corrections {
                    let from = correction
                        .get("original_token")
                        .and_then(|t| t.as_str())
                        .unwrap_or("?");
                    let to = correction
                        .get("replacement")
                        .and_then(|r| r.as_str())
                        .unwrap_or("?");
                    println!("  '{from}' -> '{to}'");
                }
            }
        }

        if let Some(diagnostics) = obj.get("diagnostics").and_then(|d| d.as_array()) {
            if !diagnostics.is_empty() {
                println!();
                println!("Skipped:");
                println!("────────");
                for diagnostic in diagnostics {
                    let token = diagnostic.get("token").and_then(|t| t.as_str()).unwrap_or("?");
                    let kind = diagnostic.get("kind").and_then(|k| k.as_str()).unwrap_or("?");
                    println!("  '{token}' ({kind})");
                }
            }
        }
    }

    Ok(())
}

/// Output search results in human format.
fn output_search_results_human(value: &serde_json::Value, _args: &CorrigoArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(hits) = obj.get("hits").and_then(|h| h.as_array()) {
        println!("Search Results:");
        println!("═══════════════");

        for hit in hits {
            println!();
            println!(
                "Result {}: {}",
                hit.get("rank").and_then(|r| r.as_u64()).unwrap_or(0),
                hit.get("name").and_then(|n| n.as_str()).unwrap_or("")
            );
            if let Some(url) = hit.get("url").and_then(|u| u.as_str()) {
                println!("  {url}");
            }
            if let Some(snippet) = hit.get("snippet").and_then(|s| s.as_str()) {
                println!("  {snippet}");
            }
        }

        println!();
    }

    if let Some(total) = obj.get("total_estimated_matches").and_then(|t| t.as_u64()) {
        println!("Estimated matches: {total}");
    }

    if let Some(opened) = obj.get("opened_url").and_then(|u| u.as_str()) {
        println!("Opened in browser: {opened}");
    }

    Ok(())
}

/// Generic human output for other types.
fn output_generic_human(value: &serde_json::Value, _args: &CorrigoArgs) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CorrigoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_results_serialization() {
        let results = CheckResults {
            original: "chese".to_string(),
            corrected: "cheese".to_string(),
            applied_corrections: vec![AppliedCorrection {
                original_token: "chese".to_string(),
                replacement: "cheese".to_string(),
                occurrence_index: 0,
            }],
            diagnostics: vec![],
            flagged_tokens: vec![],
        };

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["original"], "chese");
        assert_eq!(json["corrected"], "cheese");
        assert_eq!(json["applied_corrections"][0]["replacement"], "cheese");
    }

    #[test]
    fn test_search_results_serialization() {
        let results = SearchResults {
            query: "site:example.org cheese".to_string(),
            total_estimated_matches: Some(3),
            hits: vec![SearchHit {
                rank: 1,
                name: "Cheese".to_string(),
                url: "https://example.org/cheese".to_string(),
                snippet: None,
            }],
            opened_url: None,
        };

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["hits"][0]["rank"], 1);
        assert_eq!(json["opened_url"], serde_json::Value::Null);
    }
}
