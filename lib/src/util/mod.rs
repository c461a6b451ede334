pub use as_num::AsNum;
pub use plain_enum::*;
pub use derive_new::new;
pub use failure::{bail, format_err, Error};
pub use schnapsen_util::*;

pub fn tpl_flip_if<T>(b: bool, (t0, t1): (T, T)) -> (T, T) {
    if b {
        (t1, t0)
    } else {
        (t0, t1)
    }
}

macro_rules! type_dispatch_enum{($(#[$attr: meta])* pub enum $e: ident {$($v: ident ($t: ty),)+}) => {
    $(#[$attr])*
    pub enum $e {
        $($v($t),)+
    }
    $(
        impl From<$t> for $e {
            fn from(t: $t) -> Self {
                $e::$v(t)
            }
        }
    )+
}}

#[test]
fn test_tpl_flip_if() {
    assert_eq!(tpl_flip_if(false, (1, 2)), (1, 2));
    assert_eq!(tpl_flip_if(true, (1, 2)), (2, 1));
}
