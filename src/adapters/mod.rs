//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                         |
//! |----------------|--------------|-------------------------------------|
//! | `board_source` | BoardSource  | Device-model property, env, fixed   |
//! | `log_sink`     | EventSink    | `log` facade                        |
//! | `sim_gpio`     | GpioPort     | In-memory lines (host / tests)      |

pub mod board_source;
pub mod log_sink;
pub mod sim_gpio;
