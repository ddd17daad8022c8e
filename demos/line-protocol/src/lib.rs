//! A newline-delimited text protocol, tolerant of a stream that closes
//! without a trailing newline on its last line.

use trickle::{Collector, Error, EventSink, Harness, ReaderConfig};

/// Splits the stream into `\n`-terminated lines (the terminator is
/// stripped), accepting a final unterminated line at end of stream.
pub fn line_splitter() -> Collector<String, Error> {
    Collector::new(|sink: EventSink<String>| {
        Harness::start(
            move |mut reader| {
                let sink = sink.clone();
                async move {
                    loop {
                        let line = reader.read_until(b"\n", false, true).await?;
                        sink.emit(String::from_utf8_lossy(&line).into_owned());
                    }
                }
            },
            ReaderConfig::default(),
        )
    })
}
