#[macro_export]
macro_rules! if_then_some {
    ($cond: expr, $val: expr) => {
        if $cond {
            Some($val)
        } else {
            None
        }
    };
    (let $pattern:pat = $expr: expr, $val: expr) => {
        if let $pattern = $expr {
            Some($val)
        } else {
            None
        }
    };
}

#[test]
fn test_if_then_some() {
    assert_eq!(if_then_some!(1<2, "yes"), Some("yes"));
    assert_eq!(if_then_some!(2<1, "yes"), None);
    assert_eq!(if_then_some!(let Some(n) = Some(3), n+1), Some(4));
    assert_eq!(if_then_some!(let Some(n) = None::<usize>, n+1), None);
}
