pub mod polyfill_x2;

#[cfg(any(
    test,
    feature = "force-soft",
    not(any(
        all(target_arch = "x86_64", target_feature = "aes"),
        all(target_arch = "aarch64", target_feature = "aes"),
    ))
))]
pub mod soft;
