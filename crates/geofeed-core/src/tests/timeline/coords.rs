use crate::Coordinates;

/// WHAT: Valid coordinate strings parse to the captured pair
/// WHY: The manual-entry contract promises the groups come back verbatim
#[test]
#[allow(clippy::unwrap_used)]
fn given_valid_input_when_parsing_then_pair_matches_captured_groups() {
    // Given: Valid inputs in every accepted shape
    let cases = [
        ("55.75222, 37.61556", 55.75222, 37.61556),
        ("[55.75222, 37.61556]", 55.75222, 37.61556),
        ("55.75222,37.61556", 55.75222, 37.61556),
        ("[-1.00001,-2.00002]", -1.00001, -2.00002),
        ("5.12345, 37.61556", 5.12345, 37.61556),
    ];

    for (input, latitude, longitude) in cases {
        // When: Parsing the input
        let coords = Coordinates::parse(input).unwrap();

        // Then: Both captured groups come back as entered
        assert_eq!(coords.latitude, latitude, "latitude of {input:?}");
        assert_eq!(coords.longitude, longitude, "longitude of {input:?}");
    }
}

/// WHAT: Non-matching strings return None
/// WHY: Invalid manual input must fall through to the inline error popover
#[test]
fn given_invalid_input_when_parsing_then_none() {
    let cases = [
        "",
        "hello",
        "55.75222",
        "55.7522, 37.61556",     // 4 fractional digits
        "55.752221, 37.61556",   // 6 fractional digits
        "55.75222 37.61556",     // no comma
        "55.75222; 37.61556",    // wrong separator
        "55.75222,  37.61556",   // two spaces after comma
    ];

    for input in cases {
        assert!(
            Coordinates::parse(input).is_none(),
            "{input:?} should be rejected"
        );
    }
}

/// WHAT: A valid pair embedded in surrounding text is accepted
/// WHY: The pattern is unanchored by contract
#[test]
#[allow(clippy::unwrap_used)]
fn given_pair_embedded_in_text_when_parsing_then_pair_extracted() {
    // Given: A valid pair inside other text
    let input = "somewhere near [55.75222, 37.61556] maybe";

    // When: Parsing
    let coords = Coordinates::parse(input).unwrap();

    // Then: The embedded pair is extracted
    assert_eq!(coords.latitude, 55.75222);
    assert_eq!(coords.longitude, 37.61556);
}

/// WHAT: Display renders the on-post `[lat, lon]` form
/// WHY: Posts show coordinates in the bracketed format
#[test]
fn given_coordinates_when_displayed_then_bracketed_pair() {
    let coords = Coordinates::new(55.75222, 37.61556);
    assert_eq!(coords.to_string(), "[55.75222, 37.61556]");
}
