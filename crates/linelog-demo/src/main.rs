//! Example composition root
//!
//! Reads `linelog.yaml` from the working directory (defaults when absent),
//! builds the logger once, and passes it by reference to the parts of the
//! program that log.

use std::process::ExitCode;

use linelog_core::{log_debug, log_error, log_warn, Logger, LoggerConfig};

const CONFIG_FILE: &str = "linelog.yaml";

const SAMPLE_BATCH: [&str; 5] = ["12", "7", "x9", "30", "250"];

/// Sums a batch of numeric records, logging what it skips
struct Summer<'a> {
    logger: &'a Logger,
    limit: u32,
}

impl<'a> Summer<'a> {
    fn new(logger: &'a Logger, limit: u32) -> Self {
        Self { logger, limit }
    }

    fn run(&self, batch: &[&str]) -> u32 {
        let mut total = 0;
        for (index, raw) in batch.iter().enumerate() {
            let value: u32 = match raw.parse() {
                Ok(value) => value,
                Err(err) => {
                    log_error!(self.logger, "record", index, "skipped:", err);
                    continue;
                }
            };
            if value > self.limit {
                log_warn!(self.logger, "record", index, "value", value, "above limit", self.limit);
            }
            log_debug!(self.logger, "record", index, "=", value);
            total += value;
        }
        total
    }
}

fn main() -> ExitCode {
    let config = match LoggerConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {}", CONFIG_FILE, err);
            return ExitCode::FAILURE;
        }
    };

    let logger = match Logger::from_config(&config) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("could not start logger: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mode = format!("{:?}", logger.mode());
    logger.info().field("linelog demo, destinations").field(mode);
    if let Some(path) = logger.log_path() {
        logger.info().field("writing to").field(path.display());
    }

    let total = Summer::new(&logger, 100).run(&SAMPLE_BATCH);
    logger.info().field("batch total").field(total);

    ExitCode::SUCCESS
}
