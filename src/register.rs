//! Load one named register with a known value
//!
//! Which register is picked per instruction set; the pairing of
//! [`TEST_REGISTER_NAME`] and [`TEST_REGISTER_VALUE`] is what external
//! tooling checks, so changing either breaks every consumer.

use core::arch::asm;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub const TEST_REGISTER_NAME: &str = "edx";

#[cfg(target_arch = "arm")]
pub const TEST_REGISTER_NAME: &str = "r2";

#[cfg(target_arch = "aarch64")]
pub const TEST_REGISTER_NAME: &str = "x2";

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub const TEST_REGISTER_NAME: &str = "a2";

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64"
)))]
compile_error!("no test register is defined for this architecture");

/// Written verbatim; wider registers are zero-extended by the write.
pub const TEST_REGISTER_VALUE: u32 = 41;

/// Load [`TEST_REGISTER_NAME`] with [`TEST_REGISTER_VALUE`].
///
/// Never inlined and exported unmangled, so a debugger can break on it and
/// `finish` to land right after the write.
#[no_mangle]
#[inline(never)]
pub extern "C" fn set_test_register() {
    // Only the named register is written, declared as the sole clobber.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    unsafe {
        asm!(
            "mov edx, {value}",
            value = const TEST_REGISTER_VALUE,
            out("edx") _,
            options(nomem, nostack, preserves_flags)
        );
    }

    // Thumb-1 has no flag-preserving immediate move, so flags are clobbered.
    #[cfg(target_arch = "arm")]
    unsafe {
        asm!(
            "movs r2, #{value}",
            value = const TEST_REGISTER_VALUE,
            out("r2") _,
            options(nomem, nostack)
        );
    }

    #[cfg(target_arch = "aarch64")]
    unsafe {
        asm!(
            "mov x2, #{value}",
            value = const TEST_REGISTER_VALUE,
            out("x2") _,
            options(nomem, nostack, preserves_flags)
        );
    }

    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    unsafe {
        asm!(
            "li a2, {value}",
            value = const TEST_REGISTER_VALUE,
            out("a2") _,
            options(nomem, nostack, preserves_flags)
        );
    }
}

/// Breakpoint landmark that follows [`set_test_register`].
///
/// Touches no general-purpose register, so the test register still holds
/// [`TEST_REGISTER_VALUE`] when a debugger stops here.
#[no_mangle]
#[inline(never)]
pub extern "C" fn after_test_preparations() {
    unsafe {
        asm!("nop", options(nomem, nostack, preserves_flags));
    }
}
