//! Deterministic fixture state for debugger inspection tests
//!
//! The fixture owns exactly two pieces of state an external inspector can
//! check: a 64-bit constant in its own named section (see [`layout`]) and one
//! general-purpose register loaded with a known value (see [`register`]).

#![cfg_attr(not(test), no_std)]

pub mod layout;
pub mod register;

pub use layout::{retain_test_variable, TEST_VARIABLE, TEST_VARIABLE_SECTION, TEST_VARIABLE_VALUE};
pub use register::{after_test_preparations, set_test_register, TEST_REGISTER_NAME, TEST_REGISTER_VALUE};

/// One full fixture run, shared by the hosted and firmware entry points.
///
/// On return the test register still holds [`TEST_REGISTER_VALUE`].
#[inline(never)]
pub extern "C" fn run_fixture() {
    retain_test_variable();
    set_test_register();
    after_test_preparations();
}
