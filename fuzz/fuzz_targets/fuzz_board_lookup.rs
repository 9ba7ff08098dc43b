//! Fuzz target: `BoardResolver` over arbitrary identifiers.
//!
//! Invariants checked:
//! - No panics for any UTF-8 input, including identifiers far past the
//!   diagnostic capacity
//! - A board is found only when the input is byte-identical to its key
//! - All three operations agree on success or failure
//!
//! cargo fuzz run fuzz_board_lookup

#![no_main]

use doorbell::{Board, BoardResolver};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(id) = core::str::from_utf8(data) else {
        return;
    };

    let r = BoardResolver::new(id);
    let button = r.resolve_button_pin();
    let led = r.resolve_led_pin();
    let pwm = r.resolve_pwm_port();

    match r.board() {
        Ok(board) => {
            assert_eq!(board.as_str(), id, "match must be exact");
            assert!(button.is_ok() && led.is_ok() && pwm.is_ok());
        }
        Err(_) => {
            assert!(Board::ALL.iter().all(|b| b.as_str() != id));
            assert!(button.is_err() && led.is_err() && pwm.is_err());
        }
    }
});
