// tests/integration_tests/analysis_test.rs
use anyhow::Result;
use wls::analyse;

#[test]
fn test_multi_line_analysis() -> Result<()> {
    // Same words as the single-line sample, split across lines
    let lines = [
        "Hello world &",
        "good morning.",
        "The date is 18/05/2016",
    ];

    let report = analyse(&lines)?;

    assert!(report.starts_with("Word count = 9\n"));
    assert!(report.contains("Average word length = 4.556\n"));
    Ok(())
}

#[test]
fn test_words_do_not_span_lines() -> Result<()> {
    // "ab" + "cd" on separate lines stay two words of length 2
    let report = analyse(&["ab", "cd"])?;

    assert!(report.starts_with("Word count = 2\n"));
    assert!(report.contains("Number of words of length 2 is 2\n"));
    assert!(!report.contains("length 4"));
    Ok(())
}

#[test]
fn test_all_lengths_tied() -> Result<()> {
    let report = analyse(&["a bb ccc"])?;

    assert!(
        report.ends_with(
            "The most frequently occurring word length is 1, for word lengths of 1 & 2 & 3\n"
        ),
        "Every tied length is listed ascending, joined with ' & '"
    );
    Ok(())
}

#[test]
fn test_line_order_does_not_change_totals() -> Result<()> {
    let forward = analyse(&["one two", "three four"])?;
    let reversed = analyse(&["three four", "one two"])?;

    assert_eq!(
        forward, reversed,
        "Frequency statistics ignore word order"
    );
    Ok(())
}
