#[cfg(feature = "tracing")]
macro_rules! lw_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "listwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lw_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! lw_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "listwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lw_debug {
    ($($tt:tt)*) => {};
}
