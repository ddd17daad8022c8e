#![no_main]

use libfuzzer_sys::fuzz_target;
use trickle_core::{Collector, Error, Harness, ReaderConfig};

fuzz_target!(|data: &[u8]| {
    // Single-shot push: the whole input arrives as one chunk, then EOF.
    // Exercises the reader's length-prefixed-frame decoding without the
    // extra chunk-boundary dimension fuzz_pushes.rs covers.
    let mut collector: Collector<Vec<u8>, Error> = Collector::new(|sink| {
        Harness::start(
            move |mut reader| {
                let sink = sink.clone();
                async move {
                    loop {
                        let len_bytes = reader.read(4).await?;
                        let len = u32::from_be_bytes([
                            len_bytes[0],
                            len_bytes[1],
                            len_bytes[2],
                            len_bytes[3],
                        ]) as usize;
                        if len > 1 << 20 {
                            return Ok(());
                        }
                        let frame = reader.read(len).await?;
                        sink.emit(frame);
                    }
                }
            },
            ReaderConfig::default(),
        )
    });

    let _ = collector.send(data);
    let _ = collector.send(&[]);
});
