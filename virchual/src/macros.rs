/// Forwards to `tracing` under `$target` when the calling crate enables its `tracing` feature.
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $target:literal, $($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!(target: $target, $($tt)*);
        }
    }};
}

macro_rules! vtrace {
    ($($tt:tt)*) => {
        $crate::__log!(trace, "virchual", $($tt)*)
    };
}

macro_rules! vdebug {
    ($($tt:tt)*) => {
        $crate::__log!(debug, "virchual", $($tt)*)
    };
}

macro_rules! vwarn {
    ($($tt:tt)*) => {
        $crate::__log!(warn, "virchual", $($tt)*)
    };
}
