macro_rules! static_assert {
    ($cond:expr $(, $msg:expr)?) => {
        const _: () = assert!($cond $(, $msg)?);
    };
}

pub(crate) use static_assert;
