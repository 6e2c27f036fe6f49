// ライブラリとしての結合ロジックのテスト
use value_combiner::{combine, combine_args, Combined, Value};

fn approx_sum(result: &Combined) -> f64 {
    result.as_sum().expect("expected a numeric sum")
}

#[test]
fn test_numeric_pairs_sum() {
    let pairs = [(5.0, 3.0), (10.5, 7.3), (-5.0, 3.0), (0.0, 0.0), (1e10, -1e10), (0.1, 0.2)];
    for (x, y) in pairs {
        let result = combine(&Value::from(x), &Value::from(y));
        assert!((approx_sum(&result) - (x + y)).abs() < 1e-9);
    }
}

#[test]
fn test_textual_numbers_sum_like_numbers() {
    for (x, y) in [("5", "3"), ("10.5", "7.3"), ("-5", "3"), ("2.5e2", "-50")] {
        let expected = x.parse::<f64>().unwrap() + y.parse::<f64>().unwrap();
        assert!((approx_sum(&combine_args(x, y)) - expected).abs() < 1e-9);
    }
}

#[test]
fn test_any_text_side_concatenates_in_order() {
    let cases = [
        ("Hello", "World", "HelloWorld"),
        ("Number", "42", "Number42"),
        ("42", "Number", "42Number"),
        ("3.14", "pi", "3.14pi"),
        ("a b", " c", "a b c"),
        ("", "7", "7"),
        ("日本", "語", "日本語"),
    ];
    for (x, y, expected) in cases {
        assert_eq!(
            combine_args(x, y),
            Combined::Concatenation(expected.to_string()),
            "combine_args({x:?}, {y:?})"
        );
    }
}

#[test]
fn test_value_api_matches_scenarios() {
    assert_eq!(combine(&Value::from(5), &Value::from(3)), Combined::Sum(8.0));
    assert_eq!(combine(&Value::from(-5), &Value::from(3)), Combined::Sum(-2.0));
    assert_eq!(
        combine(&Value::from("Hello"), &Value::from("World")).to_string(),
        "HelloWorld"
    );
    assert_eq!(
        combine(&Value::from("Number"), &Value::from(42)).to_string(),
        "Number42"
    );
    let decimals = combine(&Value::from(10.5), &Value::from(7.3));
    assert_eq!(decimals.to_string(), "17.8");
}
