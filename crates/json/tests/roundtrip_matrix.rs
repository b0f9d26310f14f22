use proptest::prelude::*;
use tagtree_json::{parse, to_string, value_to_string, JsonWriter, WriterOptions};
use tagtree_value::{approx_eq, Array, Object, Value};

fn sample_tree() -> Object {
    let mut nested = Object::new();
    nested.set("flag", false);
    nested.set("nothing", Value::Null);

    let mut list = Array::new();
    list.push(1);
    list.push("two");
    list.push(3.25f32);
    list.push(Object::new());
    list.push(Array::new());

    let mut root = Object::new();
    root.set("text", "say \"hi\"\nthen leave\tnow \\ ok");
    root.set("int", -42);
    root.set("float", 3.141_59f32);
    root.set("bool", true);
    root.set("null", Value::Null);
    root.set("nested", nested);
    root.set("list", list);
    root
}

#[test]
fn tree_survives_serialize_then_parse() {
    let tree = sample_tree();
    let text = to_string(&tree);
    let parsed = parse(&text);
    assert!(parsed.is_clean(), "{:?}", parsed.errors);
    assert!(approx_eq(
        &Value::Object(parsed.object.clone()),
        &Value::Object(tree.clone()),
        1e-5
    ));
    let keys: Vec<&str> = parsed.object.keys().collect();
    let expected: Vec<&str> = tree.keys().collect();
    assert_eq!(keys, expected);
}

#[test]
fn output_is_valid_json() {
    let text = to_string(&sample_tree());
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["text"], "say \"hi\"\nthen leave\tnow \\ ok");
    assert_eq!(json["int"], -42);
    assert_eq!(json["nested"]["flag"], false);
    assert_eq!(json["list"][1], "two");
    assert!(json["list"][3].as_object().unwrap().is_empty());
}

#[test]
fn serde_json_documents_read_back() {
    let source = serde_json::json!({
        "id": 7,
        "tags": ["a", "b"],
        "meta": {"score": 0.75, "ok": true, "none": null},
        "unicode": "caf\u{e9} \u{1F600}"
    });
    let compact = serde_json::to_string(&source).unwrap();
    let pretty = serde_json::to_string_pretty(&source).unwrap();
    for text in [compact, pretty] {
        let parsed = parse(&text);
        assert!(parsed.is_clean(), "{:?}", parsed.errors);
        let expected = Value::from(&source);
        assert!(approx_eq(&Value::Object(parsed.object), &expected, 1e-6));
    }
}

#[test]
fn exact_layout_matrix() {
    let cases: Vec<(Value, &str)> = vec![
        (Value::Null, "null"),
        (Value::Bool(false), "false"),
        (Value::Integer(i64::MIN), "-9223372036854775808"),
        (Value::Float(0.1), "0.100000"),
        (Value::from("a\"b"), "\"a\\\"b\""),
        (Value::Array(Array::new()), "[\n]"),
        (Value::Object(Object::new()), "{\n}"),
        (
            Value::Array([[1].into_iter().collect::<Array>()].into_iter().collect()),
            "[\n    [\n        1\n    ]\n]",
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(value_to_string(&value), expected, "{value:?}");
    }
}

#[test]
fn custom_options_round_trip() {
    let options = WriterOptions {
        indent: "\t".to_string(),
        float_precision: 3,
    };
    let mut writer = JsonWriter::with_options(options);
    let text = writer.encode(&sample_tree());
    assert!(text.contains("\n\t\"int\": -42,"));
    assert!(text.contains("3.142"));
    let parsed = parse(&text);
    assert!(parsed.is_clean());
    assert!(approx_eq(
        &Value::Object(parsed.object),
        &Value::Object(sample_tree()),
        1e-3
    ));
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e4f32..1.0e4).prop_map(Value::Float),
        ".{0,12}".prop_map(Value::String),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|items| Value::Array(items.into_iter().collect())),
            prop::collection::vec(("[a-z\"\\\\ ]{0,6}", inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn generated_trees_round_trip(pairs in prop::collection::vec(("[a-z]{1,4}", tree()), 0..6)) {
        let doc: Object = pairs.into_iter().collect();
        let text = to_string(&doc);
        let parsed = parse(&text);
        prop_assert!(parsed.is_clean(), "{:?}\n{}", parsed.errors, text);
        prop_assert!(approx_eq(&Value::Object(parsed.object), &Value::Object(doc), 1e-3));
    }
}
