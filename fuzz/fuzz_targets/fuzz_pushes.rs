#![no_main]

use libfuzzer_sys::fuzz_target;
use trickle_core::{ChunkPlan, Collector, Error, Harness, ReaderConfig};

fuzz_target!(|plan: ChunkPlan| {
    // Arbitrary chunk boundaries over a line-oriented parser. The property
    // under test is only "never panics, never hangs" — correctness of
    // read_until is covered by the unit and integration tests.
    let mut collector: Collector<Vec<u8>, Error> = Collector::new(|sink| {
        Harness::start(
            move |mut reader| {
                let sink = sink.clone();
                async move {
                    loop {
                        let line = reader.read_until(b"\n", false, true).await?;
                        sink.emit(line);
                    }
                }
            },
            ReaderConfig::default(),
        )
    });

    for chunk in plan.chunks() {
        if collector.send(chunk).is_err() {
            return;
        }
    }
    if plan.send_eof() {
        let _ = collector.send(&[]);
    }
});
