use super::*;

#[test]
fn test_parse_format_round_trip() {
    let map = parse_by_line("1=user1;2=user2").unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map[&1], "user1");
    assert_eq!(map[&2], "user2");
    assert_eq!(format_by_line(&map), "1=user1;2=user2");
}

#[test]
fn test_parse_empty_payload() {
    let map = parse_by_line("").unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_parse_skips_empty_fields() {
    let map = parse_by_line("1=jane;;2=joe;").unwrap();
    assert_eq!(map.len(), 2);
}

#[test]
fn test_parse_keeps_equals_in_value() {
    let map = parse_by_line("1=a=b").unwrap();
    assert_eq!(map[&1], "a=b");
}

#[test]
fn test_parse_allows_empty_value() {
    let map = parse_by_line("1=;2=joe").unwrap();
    assert_eq!(map[&1], "");
    assert_eq!(map[&2], "joe");
}

#[test]
fn test_parse_rejects_entry_without_separator() {
    let err = parse_by_line("1=jane;2").unwrap_err();
    assert!(err.contains("invalid entry"));
}

#[test]
fn test_parse_rejects_bad_line_number() {
    let err = parse_by_line("x=jane").unwrap_err();
    assert!(err.contains("invalid line number"));
}

#[test]
fn test_parse_datetimes() {
    let map =
        parse_datetimes_by_line("1=2013-01-31T12:12:12-0800;2=2011-02-01T12:12:12-0800").unwrap();
    assert_eq!(map.len(), 2);
    assert!(map[&1] > map[&2]);
    assert_eq!(map[&1].to_rfc3339(), "2013-01-31T12:12:12-08:00");
}

#[test]
fn test_parse_datetimes_accepts_colon_in_offset() {
    let map = parse_datetimes_by_line("1=2013-01-31T12:12:12-08:00").unwrap();
    assert_eq!(map[&1].to_rfc3339(), "2013-01-31T12:12:12-08:00");
}

#[test]
fn test_parse_datetimes_compares_instants_across_offsets() {
    let map =
        parse_datetimes_by_line("1=2013-01-31T12:12:12-0800;2=2013-01-31T20:12:12+0000").unwrap();
    assert_eq!(map[&1], map[&2]);
}

#[test]
fn test_parse_datetimes_rejects_garbage() {
    let err = parse_datetimes_by_line("1=notadate").unwrap_err();
    assert!(err.contains("invalid datetime"));
}
