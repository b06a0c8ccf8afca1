/// Whether the target links through `cortex-m-rt`'s `link.x`.
///
/// Mirrors the `cfg(all(target_arch = "arm", target_os = "none"))` gate on
/// the firmware dependencies; hosted `thumb*` targets link normally.
pub fn uses_cortex_m_rt(target_os: &str, target_arch: &str) -> bool {
    target_os == "none" && target_arch == "arm"
}
