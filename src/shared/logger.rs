use std::sync::Once;

use env_logger::fmt::{Color, Style, StyledValue};
use log::Level;

use crate::config::CARGO_PKG_NAME;

static SETUP_LOGS: Once = Once::new();

#[cfg(test)]
pub fn setup_logger() {
    SETUP_LOGS.call_once(|| {
        build_logger().is_test(true).init();
    });
}

#[cfg(not(test))]
pub fn setup_logger() {
    SETUP_LOGS.call_once(|| {
        build_logger().is_test(false).init();
    });
}

fn build_logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.format(|f, record| {
        use std::io::Write;

        // Shorten module targets: "bytestore::store::bounded" -> "store::bounded"
        let mut target = record.target();
        if target == CARGO_PKG_NAME {
            target = "store";
        } else if let Some(rest) = target
            .strip_prefix(CARGO_PKG_NAME)
            .and_then(|rest| rest.strip_prefix("::"))
        {
            target = rest;
        }

        let mut style = f.style();
        let level = colored_level(&mut style, record.level());

        let time = format!("{t}", t = f.timestamp_micros());
        let time = &time[11..]; // skip the date

        writeln!(f, "{time} {level} {target} > {}", record.args())
    });

    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.parse_env("RUST_LOG");

    builder
}

fn colored_level<'a>(style: &'a mut Style, level: Level) -> StyledValue<'a, &'static str> {
    match level {
        Level::Trace => style.set_color(Color::Magenta).value("TRACE"),
        Level::Debug => style.set_color(Color::Blue).value("DEBUG"),
        Level::Info => style.set_color(Color::Green).value("INFO "),
        Level::Warn => style.set_color(Color::Yellow).value("WARN "),
        Level::Error => style.set_color(Color::Red).value("ERROR"),
    }
}
