use super::*;
use pretty_assertions::assert_eq;

#[test]
fn repeated_keys_in_order() {
    assert_eq!(list_values("?a=1&b=2&a=3", "a").unwrap(), vec!["1", "3"]);
    assert_eq!(
        list_values(
            "http://host/wms?variable=psl&variable=tas&service=WMS",
            "variable"
        )
        .unwrap(),
        vec!["psl", "tas"]
    );
}

#[test]
fn key_match_is_case_insensitive() {
    assert_eq!(list_values("?a=1&b=2", "A").unwrap(), vec!["1"]);
    assert_eq!(
        list_values("?SERVICE=WMS&Request=GetMap", "request").unwrap(),
        vec!["GetMap"]
    );
}

#[test]
fn only_first_equals_splits() {
    assert_eq!(list_values("foo?x=1=2", "x").unwrap(), vec!["1=2"]);
    assert_eq!(list_values("x==", "x").unwrap(), vec!["="]);
}

#[test]
fn bare_query_string_without_question_mark() {
    assert_eq!(list_values("a=1&b=2", "b").unwrap(), vec!["2"]);
}

#[test]
fn later_question_marks_stay_in_value() {
    assert_eq!(
        list_values("http://h/p?source=http://other/x?y=1&z=2", "source").unwrap(),
        vec!["http://other/x?y=1"]
    );
    assert_eq!(
        list_values("http://h/p?source=http://other/x?y=1&z=2", "z").unwrap(),
        vec!["2"]
    );
}

#[test]
fn fragments_without_equals_are_skipped() {
    assert_eq!(list_values("?a&a=1&&a", "a").unwrap(), vec!["1"]);
    assert!(list_values("?flag", "flag").unwrap().is_empty());
}

#[test]
fn empty_values_are_kept() {
    assert_eq!(list_values("?a=&a=2", "a").unwrap(), vec!["", "2"]);
    assert_eq!(single_value("?a=&a=2", "a").unwrap(), Some(String::new()));
}

#[test]
fn missing_key_is_empty_not_error() {
    assert!(list_values("?a=1", "b").unwrap().is_empty());
    assert!(list_values("", "b").unwrap().is_empty());
    assert_eq!(single_value("?a=1", "b").unwrap(), None);
}

#[test]
fn non_ascii_keys_fold_ascii_only() {
    assert!(list_values("?\u{c4}=1", "\u{e4}").unwrap().is_empty());
    assert_eq!(list_values("?\u{c4}X=1", "\u{c4}x").unwrap(), vec!["1"]);
}

#[test]
fn values_are_not_decoded() {
    assert_eq!(list_values("?t=a%20b+c", "t").unwrap(), vec!["a%20b+c"]);
}

#[test]
fn invalid_value_rejected() {
    let err = list_values("?a=<script>", "a").unwrap_err();
    assert_eq!(err.byte, b'<');
    assert_eq!(err.position, 0);
    assert_eq!(err.input, "<script>");
}

#[test]
fn invalid_value_of_other_key_ignored() {
    assert_eq!(list_values("?b=<x>&a=1", "a").unwrap(), vec!["1"]);
}

#[test]
fn aborts_on_first_invalid_match() {
    let err = list_values("?a=1&a=\"x\"&a=<y>", "a").unwrap_err();
    assert_eq!(err.byte, b'"');
    assert!(single_value("?a=1&a=<y>", "a").is_err());
}

#[test]
fn single_value_takes_first() {
    assert_eq!(
        single_value("?layers=a&LAYERS=b", "Layers").unwrap(),
        Some("a".to_string())
    );
}

fn map(entries: Vec<(&str, Vec<Option<&str>>)>) -> ParamMap {
    entries
        .into_iter()
        .map(|(k, vs)| {
            (
                k.to_string(),
                vs.into_iter().map(|v| v.map(str::to_string)).collect(),
            )
        })
        .collect()
}

#[test]
fn required_param_case_insensitive_and_decoded() {
    let params = map(vec![
        ("Service", vec![Some("WMS")]),
        ("title", vec![Some("New+York%2C+NY")]),
    ]);
    assert_eq!(required_param(&params, "SERVICE").unwrap(), "WMS");
    assert_eq!(required_param(&params, "TITLE").unwrap(), "New York, NY");
}

#[test]
fn required_param_takes_first_value() {
    let params = map(vec![("layer", vec![Some("a"), Some("b")])]);
    assert_eq!(required_param(&params, "layer").unwrap(), "a");
}

#[test]
fn required_param_not_found() {
    let params = map(vec![
        ("a", vec![Some("1")]),
        ("empty", vec![]),
        ("absent", vec![None, Some("x")]),
    ]);
    for name in ["b", "empty", "absent"] {
        let err = required_param(&params, name).unwrap_err();
        assert_eq!(
            err,
            ParamError::NotFound {
                name: name.to_string()
            }
        );
        assert!(err.is_not_found());
    }
}

#[test]
fn required_param_rejects_decoded_markup() {
    let params = map(vec![("q", vec![Some("%3Cscript%3E")])]);
    match required_param(&params, "q") {
        Err(ParamError::InvalidToken(t)) => {
            assert_eq!(t.byte, b'<');
            assert_eq!(t.input, "<script>");
        }
        other => panic!("expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn param_map_from_raw_query() {
    let params = param_map_from_query("http://h/wms?a=1&A=2&flag&&b=x%20y&a=3");
    assert_eq!(
        params.get("a"),
        Some(&vec![Some("1".to_string()), Some("3".to_string())])
    );
    assert_eq!(params.get("A"), Some(&vec![Some("2".to_string())]));
    assert_eq!(params.get("flag"), Some(&vec![None]));
    assert_eq!(params.get("b"), Some(&vec![Some("x%20y".to_string())]));
    assert_eq!(params.len(), 4);

    assert_eq!(required_param(&params, "B").unwrap(), "x y");
    assert!(required_param(&params, "flag").unwrap_err().is_not_found());
}

#[test]
fn required_param_passes_malformed_encoding_through() {
    let params = param_map_from_query("?pct=100%&raw=%zz&bad=%3");
    assert_eq!(required_param(&params, "pct").unwrap(), "100%");
    assert_eq!(required_param(&params, "raw").unwrap(), "%zz");
    assert_eq!(required_param(&params, "bad").unwrap(), "%3");
}

#[test]
fn required_param_non_ascii_name_folds_ascii_only() {
    let params = param_map_from_query("?\u{c4}bc=1");
    assert!(required_param(&params, "\u{e4}bc").unwrap_err().is_not_found());
    assert_eq!(required_param(&params, "\u{c4}BC").unwrap(), "1");
}
