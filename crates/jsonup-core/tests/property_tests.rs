use jsonup_core::{LeafKind, ScriptedConsole, edit_document, parse_leaf};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        // quarter steps are exact in binary, so text round trips are lossless
        (-4000i32..4000).prop_map(|n| json!(f64::from(n) / 4.0)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ]
}

fn object_of(inner: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-z]{1,4}", inner), 0..5)
        .prop_map(|pairs| Value::Object(pairs.into_iter().collect::<Map<_, _>>()))
}

fn tree() -> impl Strategy<Value = Value> {
    let node = leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            object_of(inner.boxed()),
        ]
    });
    object_of(node.boxed())
}

fn count_leaves(v: &Value) -> usize {
    match v {
        Value::Object(m) => m.values().map(count_leaves).sum(),
        Value::Array(a) => a.iter().map(count_leaves).sum(),
        other => usize::from(LeafKind::of(other).is_some()),
    }
}

proptest! {
    #[test]
    fn skipping_every_leaf_is_identity(doc in tree()) {
        let leaves = count_leaves(&doc);
        let mut edited = doc.clone();
        let mut console = ScriptedConsole::new(vec!["-n"; leaves]);
        let outcome = edit_document(&mut console, &mut edited).unwrap();
        prop_assert_eq!(&edited, &doc);
        prop_assert_eq!(outcome.visited, leaves);
        prop_assert_eq!(console.remaining(), 0);
        prop_assert!(outcome.should_persist);
    }

    #[test]
    fn encoding_round_trips(doc in tree(), indent in 0usize..6) {
        let bytes = jsonup_core::encode(&doc, indent).unwrap();
        prop_assert_eq!(jsonup_core::decode(&bytes).unwrap(), doc);
    }

    #[test]
    fn any_i64_text_is_an_integer(n in any::<i64>()) {
        prop_assert_eq!(parse_leaf(LeafKind::Integer, &n.to_string()).unwrap(), json!(n));
    }

    #[test]
    fn trailing_garbage_is_not_an_integer(digits in "-?[0-9]{1,6}", tail in "[a-z.+]{1,3}") {
        let text = format!("{digits}{tail}");
        prop_assert!(parse_leaf(LeafKind::Integer, &text).is_err());
    }

    #[test]
    fn abort_at_any_leaf_stops_and_discards(doc in tree(), at in 0usize..64) {
        let leaves = count_leaves(&doc);
        prop_assume!(leaves > 0);
        let at = at % leaves;
        let mut script = vec!["-n"; at];
        script.push("-x");
        script.extend(vec!["-n"; leaves]);
        let mut edited = doc.clone();
        let mut console = ScriptedConsole::new(script);
        let outcome = edit_document(&mut console, &mut edited).unwrap();
        prop_assert!(!outcome.should_persist);
        prop_assert_eq!(outcome.visited, at + 1);
        prop_assert_eq!(console.remaining(), leaves);
    }
}
