//! Board resolution through the public API, including the board sources.

use doorbell::adapters::board_source::{FixedBoard, board_source_for};
use doorbell::app::ports::BoardSource;
use doorbell::config::DoorbellConfig;
use doorbell::{Board, BoardResolver, Error};

fn resolve_all(id: &str) -> [Result<&'static str, Error>; 3] {
    let r = BoardResolver::new(id);
    [r.resolve_button_pin(), r.resolve_led_pin(), r.resolve_pwm_port()]
}

#[test]
fn known_boards_match_table() {
    assert_eq!(resolve_all("rpi3"), [Ok("BCM6"), Ok("BCM6"), Ok("PWM0")]);
    assert_eq!(
        resolve_all("imx6ul_pico"),
        [Ok("GPIO4_IO22"), Ok("GPIO4_IO22"), Ok("PWM7")]
    );
    assert_eq!(
        resolve_all("imx7d_pico"),
        [Ok("GPIO2_IO05"), Ok("GPIO6_IO14"), Ok("PWM1")]
    );
}

#[test]
fn unknown_board_rejected_by_all_operations() {
    let err: Result<&str, Error> = Err(Error::UnsupportedBoard("unknown_board".into()));
    assert_eq!(resolve_all("unknown_board"), [err.clone(), err.clone(), err]);
}

#[test]
fn error_message_names_board() {
    let err = BoardResolver::new("beaglebone_black").mapping().unwrap_err();
    assert!(err.to_string().contains("beaglebone_black"));
}

#[test]
fn resolver_built_from_fixed_source() {
    let id = FixedBoard("imx7d_pico".into()).board_id().unwrap();
    assert_eq!(BoardResolver::new(&id).board(), Ok(Board::Imx7dPico));
}

#[test]
fn config_override_feeds_resolver() {
    let config = DoorbellConfig::from_json(r#"{"board":"imx6ul_pico"}"#).unwrap();
    let id = board_source_for(&config).board_id().unwrap();
    assert_eq!(BoardResolver::new(&id).resolve_pwm_port(), Ok("PWM7"));
}

#[test]
fn resolver_shared_across_threads() {
    let resolver = std::sync::Arc::new(BoardResolver::new("rpi3"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = std::sync::Arc::clone(&resolver);
            std::thread::spawn(move || r.mapping())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Ok(Board::Rpi3.pins()));
    }
}
