//! The tagged static datum

/// Section holding [`TEST_VARIABLE`], found by name in the section table
#[cfg(not(any(target_vendor = "apple", target_env = "msvc")))]
pub const TEST_VARIABLE_SECTION: &str = ".test_variable";

/// Section holding [`TEST_VARIABLE`] (link.exe keeps 8 bytes of a PE name)
#[cfg(target_env = "msvc")]
pub const TEST_VARIABLE_SECTION: &str = ".testvar";

/// Section holding [`TEST_VARIABLE`] (Mach-O wants `segment,section`)
#[cfg(target_vendor = "apple")]
pub const TEST_VARIABLE_SECTION: &str = "__DATA,__test_variable";

/// Unmangled symbol name of [`TEST_VARIABLE`]
pub const TEST_VARIABLE_SYMBOL: &str = "test_variable";

pub const TEST_VARIABLE_VALUE: u64 = 0xF123_4567_89AB_CDEF;

/// Written by the loader, never by the program.
///
/// The attribute literals must match [`TEST_VARIABLE_SECTION`] and
/// [`TEST_VARIABLE_SYMBOL`].
#[used]
#[export_name = "test_variable"]
#[cfg_attr(
    not(any(target_vendor = "apple", target_env = "msvc")),
    link_section = ".test_variable"
)]
#[cfg_attr(target_env = "msvc", link_section = ".testvar")]
#[cfg_attr(target_vendor = "apple", link_section = "__DATA,__test_variable")]
pub static TEST_VARIABLE: u64 = TEST_VARIABLE_VALUE;

/// Bytes an inspector finds at the start of [`TEST_VARIABLE_SECTION`]
pub const fn test_variable_bytes() -> [u8; 8] {
    TEST_VARIABLE_VALUE.to_ne_bytes()
}

/// Keep the section alive through the linker's garbage collection.
///
/// Nothing else references the static, so without this `--gc-sections`
/// is free to drop it from the final image.
#[inline(always)]
pub fn retain_test_variable() {
    core::hint::black_box(core::ptr::addr_of!(TEST_VARIABLE));
}
