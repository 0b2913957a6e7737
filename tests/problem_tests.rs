//! Unit tests for input rows and coordinates.

use route_sequencer::problem::{Coordinate, RawRow};

#[test]
fn test_parse_label_with_coordinates() {
    let row = RawRow::parse("Zákazník A | 49.2147, 15.8795").expect("row");

    assert_eq!(row.label, "Zákazník A");
    assert_eq!(row.coordinates, Some(Coordinate::new(49.2147, 15.8795)));
}

#[test]
fn test_parse_negative_and_integer_coordinates() {
    let row = RawRow::parse("Depot | -33,151").expect("row");

    assert_eq!(row.coordinates, Some(Coordinate::new(-33.0, 151.0)));
}

#[test]
fn test_parse_multi_part_label_is_rejoined() {
    let row = RawRow::parse("RK Service |  Luka | 49.37,15.70").expect("row");

    assert_eq!(row.label, "RK Service | Luka");
    assert_eq!(row.coordinates, Some(Coordinate::new(49.37, 15.70)));
}

#[test]
fn test_parse_coordinates_only() {
    let row = RawRow::parse("  49.0,15.0 ").expect("row");

    assert_eq!(row.label, "49.0,15.0");
    assert_eq!(row.coordinates, Some(Coordinate::new(49.0, 15.0)));
}

#[test]
fn test_parse_address_keeps_whole_line_as_label() {
    let row = RawRow::parse(" RK Service s.r.o. | Osvobození 60, Luka nad Jihlavou ").expect("row");

    assert_eq!(row.label, "RK Service s.r.o. | Osvobození 60, Luka nad Jihlavou");
    assert_eq!(row.coordinates, None);
}

#[test]
fn test_parse_rejects_malformed_numbers() {
    for text in ["49.,15.0", "49.0,15.0,3", "4e1,15", "+49,15", "49 0,15"] {
        assert_eq!(Coordinate::parse(text), None, "{} should not parse", text);
    }
    assert_eq!(Coordinate::parse("49.0 , 15.5"), Some(Coordinate::new(49.0, 15.5)));
}

#[test]
fn test_parse_blank_lines() {
    assert_eq!(RawRow::parse(""), None);
    assert_eq!(RawRow::parse("   "), None);
    assert_eq!(RawRow::parse(" | | "), None);
}

#[test]
fn test_parse_lines_skips_blank_lines() {
    let text = "A | 49.0,15.0\n\n  \r\nTřebíč\nB | 49.1,15.0\n";
    let rows = RawRow::parse_lines(text);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], RawRow::unresolved("Třebíč"));
    assert_eq!(rows[2].label, "B");
}
