use divan::{Bencher, black_box, counter::BytesCount};
use trickle_core::{Collector, Error, Harness, ReaderConfig};

fn main() {
    divan::main();
}

fn generate_lines(count: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(count * 24);
    for i in 0..count {
        out.extend_from_slice(format!("line-{i}-payload\n").as_bytes());
    }
    out
}

fn chunks_of(input: &[u8], size: usize) -> Vec<Vec<u8>> {
    input.chunks(size.max(1)).map(|c| c.to_vec()).collect()
}

fn run_line_collector(chunks: &[Vec<u8>]) -> usize {
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

    let mut total = 0;
    for chunk in chunks {
        let events = collector.send(chunk).expect("benchmark input is well-formed");
        total += events.len();
    }
    let events = collector.send(&[]).expect("clean eof");
    total += events.len();
    total
}

#[divan::bench(name = "line_split_batch", args = [100, 1000, 10_000, 100_000])]
fn bench_batch(bencher: Bencher, n: usize) {
    let input = generate_lines(n);
    bencher
        .counter(BytesCount::new(input.len()))
        .with_inputs(|| vec![input.clone()])
        .bench_values(|chunks| black_box(run_line_collector(&chunks)));
}

#[divan::bench(
    name = "line_split_chunk_size_impact",
    args = [8, 64, 256, 1024, 4096, 16384],
)]
fn bench_chunk_sizes(bencher: Bencher, chunk_size: usize) {
    let input = generate_lines(10_000);
    let chunks = chunks_of(&input, chunk_size);
    bencher
        .counter(BytesCount::new(input.len()))
        .with_inputs(|| chunks.clone())
        .bench_values(|chunks| black_box(run_line_collector(&chunks)));
}
