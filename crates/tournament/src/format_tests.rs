use super::*;
use crate::memory::MemoryDriver;

fn teams(n: u32) -> MemoryDriver<u32> {
    MemoryDriver::new((1..=n).collect())
}

#[test]
fn test_round_counts() {
    let driver = teams(8);
    let expected = [
        (Format::SingleElimination, 3, 3),
        (Format::DoubleElimination, 6, 6),
        (Format::RoundRobin, 7, 7),
        (Format::PagePlayoff, 3, 3),
        (Format::Swiss, 3, 3),
        (Format::Voetlab, 7, 1),
    ];
    for (format, total, minimum) in expected {
        assert_eq!(format.total_rounds(&driver), total, "{format}");
        assert_eq!(format.minimum_rounds(&driver), minimum, "{format}");
    }
}

#[test]
fn test_fresh_tournaments_start_at_round_zero() {
    let driver = teams(4);
    for format in [
        Format::SingleElimination,
        Format::DoubleElimination,
        Format::RoundRobin,
        Format::PagePlayoff,
        Format::Swiss,
        Format::Voetlab,
    ] {
        assert_eq!(format.guess_round(&driver), Ok(0), "{format}");
    }
}

#[test]
fn test_generate_dispatches() {
    let options = FormatOptions::default();

    let mut driver = teams(4);
    let created = Format::PagePlayoff.generate(&mut driver, &options).unwrap();
    assert_eq!((created[0].home, created[0].away), (1, Some(2)));

    let mut driver = teams(4);
    let created = Format::SingleElimination.generate(&mut driver, &options).unwrap();
    assert_eq!((created[0].home, created[0].away), (1, Some(4)));

    let mut driver = teams(4);
    let created = Format::Swiss.generate(&mut driver, &options).unwrap();
    assert_eq!((created[0].home, created[0].away), (1, Some(3)));
    assert_eq!(driver.stored_matches().len(), 2);
}

#[test]
fn test_names() {
    assert_eq!(Format::default(), Format::Swiss);
    assert_eq!(Format::DoubleElimination.to_string(), "double elimination");
    let parsed: Format = serde_json::from_str(r#""page_playoff""#).unwrap();
    assert_eq!(parsed, Format::PagePlayoff);
}
