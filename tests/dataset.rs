//! Dataset loading and record matching tests.

use std::io::Cursor;

use clocksync::{ClockSyncError, Dataset, SearchField, narrow_to_prefix};

const HEADER: &str = "Name,Company Name,Email,Phone,DATE AND TIME";

fn sample_dataset() -> Dataset {
    let csv = format!(
        "{HEADER}\n\
         John Smith,Initech,john@initech.example,555-0100,03-14-2024 08:30\n\
         Maria Lopez,Globex,maria@globex.example,555-0101,03-14-2024 08:45\n\
         Dan Chen,Acme Corp,dan@acme.example,555-1212,03-14-2024 09:15\n\
         Anjolie Ray,Umbrella,anjolie@umbrella.example,555-0103,03-14-2024 10:00\n"
    );
    Dataset::from_reader(Cursor::new(csv)).expect("sample dataset loads")
}

// ── Resolution (term → timestamp) ────────────────────────────────

#[test]
fn resolve_matches_company_substring() {
    let dataset = sample_dataset();
    let stamp = dataset.resolve("Acme").expect("Acme Corp row matches");
    assert_eq!(stamp.as_str(), "09:15:00");
}

#[test]
fn resolve_is_case_insensitive() {
    let dataset = sample_dataset();
    let stamp = dataset.resolve("acme corp").expect("case-folded match");
    assert_eq!(stamp.as_str(), "09:15:00");
}

#[test]
fn resolve_matches_phone() {
    let dataset = sample_dataset();
    let stamp = dataset.resolve("555-1212").expect("phone matches");
    assert_eq!(stamp.as_str(), "09:15:00");
}

#[test]
fn resolve_unknown_term_yields_none() {
    let dataset = sample_dataset();
    assert!(dataset.resolve("zzz-no-such-term").is_none());
}

#[test]
fn resolve_first_row_wins() {
    // "example" appears in every email; dataset order decides.
    let dataset = sample_dataset();
    let stamp = dataset.resolve("example").expect("every row matches");
    assert_eq!(stamp.as_str(), "08:30:00");
}

#[test]
fn resolve_empty_term_matches_first_row() {
    let dataset = sample_dataset();
    let stamp = dataset.resolve("").expect("empty term matches everything");
    assert_eq!(stamp.as_str(), "08:30:00");
}

// ── Suggestions ──────────────────────────────────────────────────

#[test]
fn suggest_collects_matching_names() {
    let dataset = sample_dataset();
    let suggestions = dataset.suggest("jo", &[SearchField::Name]);

    let expected: Vec<&str> = vec!["Anjolie Ray", "John Smith"];
    let got: Vec<&str> = suggestions.iter().map(String::as_str).collect();
    assert_eq!(got, expected);
}

#[test]
fn suggest_unions_across_fields() {
    let dataset = sample_dataset();
    let suggestions = dataset.suggest("acme", &[SearchField::CompanyName, SearchField::Email]);

    assert!(suggestions.contains("Acme Corp"));
    assert!(suggestions.contains("dan@acme.example"));
    assert_eq!(suggestions.len(), 2);
}

#[test]
fn suggest_collapses_duplicates() {
    let csv = format!(
        "{HEADER}\n\
         A One,Acme Corp,a@acme.example,1,03-14-2024 08:00\n\
         B Two,Acme Corp,b@acme.example,2,03-14-2024 08:05\n"
    );
    let dataset = Dataset::from_reader(Cursor::new(csv)).expect("dataset loads");

    let suggestions = dataset.suggest("acme", &[SearchField::CompanyName]);
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions.contains("Acme Corp"));
}

#[test]
fn narrow_to_prefix_keeps_prefix_matches_only() {
    let dataset = sample_dataset();
    let suggestions = dataset.suggest("jo", &[SearchField::Name]);

    let narrowed = narrow_to_prefix(&suggestions, "jo");
    assert_eq!(narrowed, vec!["John Smith".to_string()]);
}

// ── Missing values ───────────────────────────────────────────────

#[test]
fn absent_field_values_never_match() {
    let csv = format!(
        "{HEADER}\n\
         ,Acme Corp,,,03-14-2024 09:15\n\
         John Smith,,,555-0100,03-14-2024 10:30\n"
    );
    let dataset = Dataset::from_reader(Cursor::new(csv)).expect("dataset loads");

    // The empty Name cell on row 1 must not match a name search.
    let suggestions = dataset.suggest("john", &[SearchField::Name]);
    assert_eq!(suggestions.len(), 1);

    let stamp = dataset.resolve("john").expect("row 2 matches by name");
    assert_eq!(stamp.as_str(), "10:30:00");
}

// ── Load failures (fatal, typed) ─────────────────────────────────

#[test]
fn missing_column_fails_load() {
    let csv = "Name,Company Name,Email,DATE AND TIME\n\
               John Smith,Initech,john@initech.example,03-14-2024 08:30\n";
    let error = Dataset::from_reader(Cursor::new(csv)).unwrap_err();

    assert!(
        matches!(&error, ClockSyncError::MissingColumn { column } if column == "Phone"),
        "expected MissingColumn for Phone, got: {error}",
    );
}

#[test]
fn bad_timestamp_fails_whole_load() {
    let csv = format!(
        "{HEADER}\n\
         John Smith,Initech,john@initech.example,555-0100,03-14-2024 08:30\n\
         Maria Lopez,Globex,maria@globex.example,555-0101,2024/03/14 08:45\n"
    );
    let error = Dataset::from_reader(Cursor::new(csv)).unwrap_err();

    assert!(
        matches!(
            &error,
            ClockSyncError::TimestampParse { row: 2, value } if value == "2024/03/14 08:45"
        ),
        "expected TimestampParse on row 2, got: {error}",
    );
}

#[test]
fn load_from_path_round_trips() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("visitors.csv");
    std::fs::write(
        &path,
        format!("{HEADER}\nDan Chen,Acme Corp,dan@acme.example,555-1212,03-14-2024 09:15\n"),
    )
    .expect("fixture written");

    let dataset = Dataset::from_path(&path).expect("dataset loads from disk");
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.resolve("Acme").expect("match").as_str(), "09:15:00");
}

#[test]
fn open_nonexistent_dataset() {
    let error = Dataset::from_path("this_file_does_not_exist.csv").unwrap_err();
    let message = error.to_string();
    assert!(
        message.contains("Failed to open dataset"),
        "error message should mention dataset open failure: {message}",
    );
}
