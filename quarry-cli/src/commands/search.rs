use anyhow::Result;
use quarry::{Finder, Results, SearchCommand, SearchSource, Transport};

pub async fn run_search<T, S>(transport: &T, source: &S, json: bool) -> Result<()>
where
    T: Transport + ?Sized,
    S: SearchSource + ?Sized,
{
    let command = SearchCommand::wrap(source)?;
    let index = command.index()?.to_string();
    let results = Finder::new(transport, command).find().await?;

    tracing::info!(index = %index, total = results.count(), "Search complete");

    for line in render_results(&results, json)? {
        println!("{}", line);
    }
    Ok(())
}

/// One line per hit, followed by aggregation buckets
pub fn render_results(results: &Results, json: bool) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    if json {
        for hit in results {
            lines.push(serde_json::to_string(hit)?);
        }
        return Ok(lines);
    }

    lines.push(format!("Total hits: {}", results.count()));
    lines.push(format!("{:<24} {:>8}  {}", "ID", "SCORE", "SOURCE"));
    lines.push("-".repeat(60));
    for hit in results {
        let score = hit
            .score
            .map(|s| format!("{:.3}", s))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:<24} {:>8}  {}",
            hit.id.as_deref().unwrap_or("?"),
            score,
            serde_json::to_string(&hit.source)?
        ));
    }

    for aggregation in results.aggregations() {
        lines.push(String::new());
        lines.push(format!("Aggregation: {}", aggregation.name()));
        for bucket in aggregation.buckets() {
            let key = match &bucket["key"] {
                serde_json::Value::String(key) => key.clone(),
                other => other.to_string(),
            };
            lines.push(format!("  {:<30} {}", key, bucket["doc_count"]));
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results() -> Results {
        Results::from_response(json!({
            "hits": {
                "total": {"value": 12},
                "hits": [
                    {"_id": "a1", "_score": 1.5, "_source": {"title": "Dune"}},
                    {"_id": "a2", "_score": null, "_source": {"title": "Emma"}}
                ]
            },
            "aggregations": {
                "by_lang": {"buckets": [{"key": "en", "doc_count": 9}, {"key": 7, "doc_count": 3}]}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_table_output() {
        let lines = render_results(&results(), false).unwrap();
        assert_eq!(lines[0], "Total hits: 12");
        assert!(lines[3].starts_with("a1"));
        assert!(lines[3].contains("1.500"));
        assert!(lines[3].ends_with(r#"{"title":"Dune"}"#));
        assert!(lines[4].contains(" -  "));
        assert_eq!(lines[6], "Aggregation: by_lang");
        assert!(lines[7].trim_start().starts_with("en"));
        assert!(lines[8].trim_start().starts_with('7'));
    }

    #[test]
    fn test_json_lines_output() {
        let lines = render_results(&results(), true).unwrap();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["_id"], json!("a1"));
        assert_eq!(first["_source"]["title"], json!("Dune"));
    }
}
