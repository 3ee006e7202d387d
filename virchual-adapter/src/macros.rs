macro_rules! vtrace {
    ($($tt:tt)*) => {
        virchual::__log!(trace, "virchual_adapter", $($tt)*)
    };
}

macro_rules! vdebug {
    ($($tt:tt)*) => {
        virchual::__log!(debug, "virchual_adapter", $($tt)*)
    };
}

macro_rules! vwarn {
    ($($tt:tt)*) => {
        virchual::__log!(warn, "virchual_adapter", $($tt)*)
    };
}
