//! Example: matching on odd/even checks and on a panicking function
//!
//! Run with:
//! - `cargo run --example odd_even`
//! - `cargo run --example odd_even --features log` to see the diagnostics
//!   (needs a logger installed by the host application to print anything)
//!
//! The captured panic also shows up on stderr as a `thread 'main' panicked at
//! ...` line: the default panic hook runs before the panic is captured.

use outcome::{err, matching, ok, Cases, Computation, Fault, Outcome};

fn is_odd(n: u32) -> Outcome<u32, &'static str> {
    if n % 2 == 0 {
        return err("number is even");
    }
    ok(n)
}

fn i_panic_but_it_is_ok() {
    panic!("hello, I panic but it is ok");
}

fn main() {
    println!("Outcome odd/even demo");
    println!("=====================\n");

    // Without an ok case the value comes back unchanged, so the error case
    // has to produce the same type.
    let def_error = matching(is_odd(2))
        .when(Cases::on_error(|e: &str| format!("Error: {e}")).on_ok(|v: u32| v.to_string()));
    let def_value = matching(is_odd(3)).when(Cases::on_error(|_| 0));

    println!("{def_error}");
    println!("{def_value}");

    // A panicking function is tagged as a computation and captured.
    matching(Computation(i_panic_but_it_is_ok))
        .when(Cases::on_error(|fault: Fault| println!("{fault}")));

    // Unwrapping an even number would panic with "Failed to unwrap: number is even":
    // let _ = matching(is_odd(12)).unwrap();
}
