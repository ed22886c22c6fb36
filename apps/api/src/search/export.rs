use std::path::Path;

use anyhow::{Context, Result};

use crate::search::dates::MISSING_DATE;
use crate::search::service::JobResult;

const HEADER: [&str; 7] = [
    "Title",
    "Company",
    "Location",
    "Source",
    "Match Score",
    "Date Posted",
    "Link",
];

/// Writes search results to `path` as CSV, replacing any previous file.
pub fn write_csv(path: &Path, jobs: &[JobResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV export {}", path.display()))?;

    writer.write_record(HEADER)?;
    for job in jobs {
        let posting = &job.scored.posting;
        writer.write_record([
            posting.get_str("job_title").unwrap_or(""),
            posting.get_str("employer_name").unwrap_or(""),
            posting.get_str("job_city").unwrap_or(""),
            posting.get_str("job_publisher").unwrap_or(""),
            job.scored.match_score.to_string().as_str(),
            posting
                .get_str("job_posted_at_datetime_utc")
                .unwrap_or(MISSING_DATE),
            posting.get_str("job_apply_link").unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Posting, ScoredPosting};
    use serde_json::json;

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job_results.csv");

        let posting = Posting::titled("Rust Engineer, Platform")
            .with("employer_name", json!("Ferrous"))
            .with("job_city", json!("Berlin"))
            .with("job_publisher", json!("LinkedIn"))
            .with("job_apply_link", json!("https://example.com/apply"));
        let jobs = vec![JobResult {
            scored: ScoredPosting {
                posting,
                match_score: 87.25,
            },
            source: "API".to_string(),
            date_posted: "N/A".to_string(),
        }];

        write_csv(&path, &jobs).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines[0],
            "Title,Company,Location,Source,Match Score,Date Posted,Link"
        );
        assert_eq!(
            lines[1],
            "\"Rust Engineer, Platform\",Ferrous,Berlin,LinkedIn,87.25,N/A,https://example.com/apply"
        );
    }

    #[test]
    fn test_missing_fields_are_blank_and_date_is_na() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job_results.csv");
        let jobs = vec![JobResult {
            scored: ScoredPosting {
                posting: Posting::default().with("employer_name", json!(null)),
                match_score: -3.5,
            },
            source: "API".to_string(),
            date_posted: "N/A".to_string(),
        }];

        write_csv(&path, &jobs).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().nth(1), Some(",,,,-3.5,N/A,"));
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let err = write_csv(Path::new("/nonexistent/dir/out.csv"), &[]).unwrap_err();
        assert!(err.to_string().contains("CSV export"));
    }
}
