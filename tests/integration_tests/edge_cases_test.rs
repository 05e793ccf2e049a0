// tests/integration_tests/edge_cases_test.rs
use anyhow::Result;
use wls::analyse;

#[test]
fn test_empty_lines_produce_no_words() -> Result<()> {
    let report = analyse(&["", "", ""])?;

    assert_eq!(report, "Word count = 0\n");
    Ok(())
}

#[test]
fn test_punctuation_only_input() -> Result<()> {
    let report = analyse(&["... --- !!!", "(((   )))"])?;

    assert_eq!(
        report, "Word count = 0\n",
        "Separator-only input is the zero-word report, not a crash"
    );
    Ok(())
}

#[test]
fn test_single_word() -> Result<()> {
    let report = analyse(&["hello"])?;
    let expected = "Word count = 1\n\
        Average word length = 5\n\
        Number of words of length 5 is 1\n\
        The most frequently occurring word length is 1, for word lengths of 5\n";

    assert_eq!(report, expected);
    Ok(())
}

#[test]
fn test_unicode_words_count_chars() -> Result<()> {
    // "café" is 4 characters even though it is 5 bytes in UTF-8
    let report = analyse(&["café"])?;

    assert!(report.contains("Number of words of length 4 is 1\n"));
    Ok(())
}

#[test]
fn test_ampersand_and_slash_words() -> Result<()> {
    let report = analyse(&["black & white, either/or"])?;

    // "black", "&", "white", "either/or"
    assert!(report.starts_with("Word count = 4\n"));
    assert!(report.contains("Number of words of length 1 is 1\n"));
    assert!(report.contains("Number of words of length 9 is 1\n"));
    Ok(())
}
