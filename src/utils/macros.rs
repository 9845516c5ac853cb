macro_rules! use_prelude {() => (
    #[allow(unused_imports)]
    use crate::utils::prelude::*;
)}

macro_rules! abort_with_msg {(
    $($fmt:tt)*
) => ({
    ::std::eprintln!($($fmt)*);
    ::std::process::abort()
})}
pub(in crate) use abort_with_msg;
