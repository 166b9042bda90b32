use lyrebird::domain::format_timestamp;

#[test]
fn given_zero_seconds_when_formatting_then_returns_zero_timestamp() {
    assert_eq!(format_timestamp(0.0), "[00:00.00]");
}

#[test]
fn given_fractional_seconds_when_formatting_then_hundredths_are_truncated() {
    // 65.256 carries 25.6 hundredths; truncation keeps 25, never 26.
    assert_eq!(format_timestamp(65.256), "[01:05.25]");
    assert_eq!(format_timestamp(1.999), "[00:01.99]");
}

#[test]
fn given_one_hour_when_formatting_then_minutes_do_not_wrap() {
    assert_eq!(format_timestamp(3600.0), "[60:00.00]");
}

#[test]
fn given_large_offset_when_formatting_then_all_fields_align() {
    assert_eq!(format_timestamp(3725.5), "[62:05.50]");
}

#[test]
fn given_just_under_a_minute_when_formatting_then_seconds_stay_in_range() {
    assert_eq!(format_timestamp(59.99), "[00:59.99]");
}

#[test]
fn given_same_input_when_formatting_twice_then_output_is_identical() {
    let first = format_timestamp(123.456);
    let second = format_timestamp(123.456);
    assert_eq!(first, second);
}
