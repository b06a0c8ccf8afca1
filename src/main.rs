//! Fixture entry point
//!
//! Loads the test register, passes the `after_test_preparations` landmark
//! and exits with success. Runs as an ordinary process on hosted targets and
//! as Cortex-M firmware on QEMU's lm3s6965evb machine.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(all(target_os = "none", not(target_arch = "arm")))]
compile_error!("bare-metal builds are only supported on Cortex-M");

#[cfg(all(target_os = "none", target_arch = "arm"))]
mod firmware {
    use cortex_m::asm;
    use cortex_m_rt::entry;
    use cortex_m_semihosting::debug;
    use panic_halt as _;

    #[entry]
    fn main() -> ! {
        probe_fixture::run_fixture();

        debug::exit(debug::EXIT_SUCCESS);

        // Host ignored the exit request, trap into the debugger
        loop {
            asm::bkpt();
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    probe_fixture::run_fixture();
}
