use std::fmt::Debug;

pub trait TVerifiableByVerifyMacro {
    fn is_verify_true(&self) -> bool;
}

impl TVerifiableByVerifyMacro for bool {
    fn is_verify_true(&self) -> bool {
        *self
    }
}

impl<T> TVerifiableByVerifyMacro for Option<T> {
    fn is_verify_true(&self) -> bool {
        self.is_some()
    }
}

impl<T: TVerifiableByVerifyMacro> TVerifiableByVerifyMacro for &T {
    fn is_verify_true(&self) -> bool {
        T::is_verify_true(self)
    }
}

impl<TOk, TErr> TVerifiableByVerifyMacro for Result<TOk, TErr> {
    fn is_verify_true(&self) -> bool {
        self.is_ok()
    }
}

pub fn verify_internal<E: TVerifiableByVerifyMacro+Debug>(e: E, str_e: &str) -> E {
    assert!(e.is_verify_true(), "verify!({}): {:?}", str_e, e);
    e
}

/// Types whose content can be extracted by `unwrap!`, which (unlike `Option::unwrap`) reports the
/// offending expression on failure.
pub trait TUnwrapByUnwrapMacro {
    type Unwrapped;
    fn unwrap_internal(self, str_e: &str) -> Self::Unwrapped;
}

impl<T> TUnwrapByUnwrapMacro for Option<T> {
    type Unwrapped = T;
    fn unwrap_internal(self, str_e: &str) -> T {
        match self {
            Some(t) => t,
            None => panic!("unwrap!({}): None", str_e),
        }
    }
}

impl<T, E: Debug> TUnwrapByUnwrapMacro for Result<T, E> {
    type Unwrapped = T;
    fn unwrap_internal(self, str_e: &str) -> T {
        match self {
            Ok(t) => t,
            Err(e) => panic!("unwrap!({}): {:?}", str_e, e),
        }
    }
}

#[macro_export]
macro_rules! verify {($e: expr) => {{
    $crate::verify_internal($e, stringify!($e))
}}}

#[macro_export]
macro_rules! debug_verify{($e: expr) => {
    $crate::if_dbg_else!({$crate::verify!($e)}{$e})
}}

#[macro_export]
macro_rules! verify_eq {($e: expr, $e_chk: expr) => {
    {
        let e = $e;
        assert_eq!(e, $e_chk);
        e
    }
}}

#[macro_export]
macro_rules! unwrap {($e: expr) => {
    $crate::TUnwrapByUnwrapMacro::unwrap_internal($e, stringify!($e))
}}

#[test]
fn test_verify() {
    verify!(Some(4));
    assert_eq!(verify_eq!(2+2, 4), 4);
    assert_eq!(unwrap!(Some(4)), 4);
    assert_eq!(unwrap!("7".parse::<usize>()), 7);
}

#[test]
#[should_panic(expected = "unwrap!(None::<usize>)")]
fn test_unwrap_reports_expression() {
    unwrap!(None::<usize>);
}
