use rfc3339_time::{
    is_date_time_string, is_full_date_string, parse_date_time, parse_full_date, DateTime, Error,
    FullDate,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Created {
    created: DateTime,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Birthday {
    created: FullDate,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Booking {
    id: u32,
    starts: DateTime,
    ends: Option<DateTime>,
    day: FullDate,
}

#[test]
fn test_is_date_time_string() {
    assert!(is_date_time_string("2023-03-31T16:30:00-04:00"));
    assert!(!is_date_time_string("2023-03-31T16:30-04:00"));
}

#[test]
fn test_is_full_date_string() {
    assert!(is_full_date_string("2023-04-01"));
    assert!(!is_full_date_string("04/01/2023"));
}

#[test]
fn test_parse_without_fraction() {
    let dt = parse_date_time("2023-03-24T22:30:00-04:00").unwrap();
    assert_eq!(dt.year(), 2023);
    assert_eq!(dt.month(), 3);
    assert_eq!(dt.day(), 24);
    assert_eq!(dt.hour(), 22);
    assert_eq!(dt.minute(), 30);
    assert_eq!(dt.second(), 0);
    assert_eq!(dt.nanosecond(), 0);
    assert_eq!(dt.offset_seconds(), -14_400);
}

#[test]
fn test_parse_error_is_grammar_mismatch() {
    let err = parse_date_time("2023-03-24").unwrap_err();
    assert_eq!(
        err,
        Error::DateTimeMismatch {
            input: "2023-03-24".to_string()
        }
    );
}

#[test]
fn test_serialize_zero_as_null() {
    let json = serde_json::to_string(&Created {
        created: DateTime::default(),
    })
    .unwrap();
    assert_eq!(json, r#"{"created":null}"#);

    let json = serde_json::to_string(&Birthday {
        created: FullDate::default(),
    })
    .unwrap();
    assert_eq!(json, r#"{"created":null}"#);
}

#[test]
fn test_serialize_to_expected_strings() {
    let cases = [
        ("2023-04-01T11:45:00-04:00", "2023-04-01T11:45:00-04:00"),
        ("2023-04-01T11:45:00.005-04:00", "2023-04-01T11:45:00.005-04:00"),
        ("2023-04-01T11:45:00.500000Z", "2023-04-01T11:45:00.5Z"),
        ("2023-04-01t11:45:00z", "2023-04-01T11:45:00Z"),
        ("2023-04-01T11:45:00+00:00", "2023-04-01T11:45:00Z"),
    ];

    for (input, expected) in cases {
        let value = Created {
            created: parse_date_time(input).unwrap(),
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!(r#"{{"created":"{}"}}"#, expected));
    }

    let value = Birthday {
        created: parse_full_date("2023-04-04").unwrap(),
    };
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"created":"2023-04-04"}"#
    );
}

#[test]
fn test_deserialize_null_and_empty() {
    for input in [r#"{"created":null}"#, r#"{"created":""}"#] {
        let result: Created = serde_json::from_str(input).unwrap();
        assert!(result.created.is_zero());

        let result: Birthday = serde_json::from_str(input).unwrap();
        assert!(result.created.is_zero());
    }
}

#[test]
fn test_deserialize_bad_input() {
    let err = serde_json::from_str::<Created>(r#"{"created":"2023-04-01 12:00:00-04:00"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("input is not a date-time string"));

    let err = serde_json::from_str::<Birthday>(r#"{"created":"2023/04/01"}"#).unwrap_err();
    assert!(err.to_string().contains("is not a full-date string"));

    let err = serde_json::from_str::<Created>(r#"{"created":"null"}"#).unwrap_err();
    assert!(err.to_string().contains("input is not a date-time string: null"));
}

#[test]
fn test_deserialize_rejects_non_strings() {
    let err = serde_json::from_str::<Created>(r#"{"created":1680350400}"#).unwrap_err();
    assert!(err.to_string().contains("invalid type"));

    let err = serde_json::from_str::<Birthday>(r#"{"created":true}"#).unwrap_err();
    assert!(err.to_string().contains("invalid type"));
}

#[test]
fn test_deserialize_full_string() {
    let result: Created =
        serde_json::from_str(r#"{"created":"2023-04-01T08:30:00-04:00"}"#).unwrap();
    assert_eq!(result.created.to_string(), "2023-04-01T08:30:00-04:00");

    let result: Birthday = serde_json::from_str(r#"{"created":"2023-04-01"}"#).unwrap();
    assert_eq!(
        result.created.to_date_time().to_string(),
        "2023-04-01T00:00:00Z"
    );
}

#[test]
fn test_nested_struct_round_trip() {
    let booking = Booking {
        id: 7,
        starts: parse_date_time("2023-04-04T12:30:00-04:00").unwrap(),
        ends: None,
        day: parse_full_date("2023-04-04").unwrap(),
    };

    let json = serde_json::to_string(&booking).unwrap();
    assert_eq!(
        json,
        r#"{"id":7,"starts":"2023-04-04T12:30:00-04:00","ends":null,"day":"2023-04-04"}"#
    );

    let back: Booking = serde_json::from_str(&json).unwrap();
    assert_eq!(back, booking);
    assert_eq!(back.starts.offset_seconds(), -14_400);
}

#[test]
fn test_serde_json_value_round_trip() {
    let dt = parse_date_time("2023-03-24T22:30:00.123456789+09:00").unwrap();
    let value = serde_json::to_value(dt).unwrap();
    assert_eq!(value, serde_json::json!("2023-03-24T22:30:00.123456789+09:00"));

    let back: DateTime = serde_json::from_value(value).unwrap();
    assert_eq!(back.to_string(), dt.to_string());
}

#[test]
fn test_json_helpers_match_serde() {
    let dt = parse_date_time("2023-04-01T11:45:00.005-04:00").unwrap();
    assert_eq!(dt.to_json(), serde_json::to_string(&dt).unwrap());
    assert_eq!(
        DateTime::default().to_json(),
        serde_json::to_string(&DateTime::default()).unwrap()
    );
    assert_eq!(DateTime::from_json(&dt.to_json()).unwrap(), dt);
}

#[test]
fn test_out_of_range_reported_through_serde() {
    let err = serde_json::from_str::<Birthday>(r#"{"created":"2023-02-29"}"#).unwrap_err();
    assert!(err.to_string().contains("full-date `2023-02-29` is out of range"));
}

#[test]
fn test_json_helpers_decode_like_serde_json() {
    let text = r#""2023-04-01T12:00:00\u002B04:00""#;
    let ours = DateTime::from_json(text).unwrap();
    let theirs: DateTime = serde_json::from_str(text).unwrap();
    assert_eq!(ours, theirs);
    assert_eq!(ours.offset_seconds(), theirs.offset_seconds());

    assert!(matches!(
        DateTime::from_json(r#""2023-04-01T12:00:00Z"""#),
        Err(Error::Json(_))
    ));
}
