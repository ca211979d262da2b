macro_rules! byte_map {
    ($($flag:expr,)*) => ([
        $($flag != 0,)*
    ])
}

macro_rules! reject {
    ($reason:expr, $buf:expr, $idx:expr) => {{
        trace!(idx = $idx, len = $buf.len(), "no field name: {}", $reason);
        return None;
    }};
}
