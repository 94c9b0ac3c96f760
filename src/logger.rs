use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use crate::huffman::{CodeTable, FrequencyTable};

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if let Err(file_error) = log4rs::init_file(CONFIG_FILE, Default::default()) {
        if let Err(error) = init_fallback() {
            eprintln!(
                "Logging disabled: {} could not be loaded ({}) and the fallback failed ({})",
                CONFIG_FILE, file_error, error
            );
        }
    }
}

fn init_fallback() -> Result<(), Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

pub fn log_code_table(frequencies: &FrequencyTable, code_table: &CodeTable) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for (symbol, code_word) in code_table.iter() {
        log::debug!(
            "{:?} x{} -> {}",
            symbol,
            frequencies.get(symbol).unwrap_or(0),
            code_word
        );
    }
}
