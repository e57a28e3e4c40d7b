use std::io::Write;
use std::time::Instant;

use log::info;
use rand::rngs::ThreadRng;
use rand::thread_rng;

use crate::error::Result;
use crate::record::ContactRecord;
use crate::types::GeneratorConfig;

/// Streams one header row and `rows` generated data rows into a CSV sink.
pub struct DatasetWriter {
    config: GeneratorConfig,
    rng: ThreadRng,
}

impl DatasetWriter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: thread_rng(),
        }
    }

    /// Write the full dataset to `sink` and return the number of data rows
    /// written. The csv writer applies standard quoting, so multi-tag
    /// fields stay parseable. Any I/O or serialization failure aborts the
    /// run; rows already flushed may remain in the sink.
    pub fn write<W: Write>(&mut self, sink: W) -> Result<u64> {
        let started = Instant::now();
        let mut writer = csv::WriterBuilder::new()
            .buffer_capacity(65536)
            .from_writer(sink);

        writer.write_record(self.config.schema.columns())?;

        for row in 0..self.config.rows {
            let record = ContactRecord::generate(&mut self.rng, self.config.schema);
            writer.write_record(record.fields())?;

            let written = row + 1;
            if self.config.progress_every > 0 && written % self.config.progress_every == 0 {
                info!("generated {} / {} rows", written, self.config.rows);
            }
        }

        writer.flush()?;
        info!(
            "wrote {} rows in {:.2}s",
            self.config.rows,
            started.elapsed().as_secs_f64()
        );
        Ok(self.config.rows)
    }
}
