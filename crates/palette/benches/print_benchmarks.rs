use std::io;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use palette::{Background, Foreground, Printer, Style};

fn bench_print_single_line(c: &mut Criterion) {
    let mut printer = Printer::new(Foreground::RED, Background::REGULAR, [Style::BOLD]);
    printer.set_writer(io::sink());

    c.bench_function("print_single_line", |b| {
        b.iter(|| printer.print_str(black_box("hello world!")))
    });
}

fn bench_print_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_lines");
    let mut printer = Printer::new(Foreground::RED, Background::REGULAR, [Style::BOLD]);
    printer.set_writer(io::sink());

    for count in [1, 10, 100] {
        let text = "hello world!\n".repeat(count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("lines", count), &text, |b, text| {
            b.iter(|| printer.print_str(black_box(text)))
        });
    }
    group.finish();
}

fn bench_print_prefix(c: &mut Criterion) {
    let mut printer = Printer::new(Foreground::YELLOW, Background::REGULAR, [Style::BOLD]);
    printer.set_writer(io::sink()).set_length(4);

    c.bench_function("print_prefix", |b| {
        b.iter(|| printer.print_str(black_box("WARN disk almost full")))
    });
}

fn bench_render_formatted(c: &mut Criterion) {
    let printer = Printer::info();

    c.bench_function("render_formatted", |b| {
        b.iter(|| printer.render(&format!("{} of {} done", black_box(3), black_box(7))))
    });
}

criterion_group!(
    benches,
    bench_print_single_line,
    bench_print_lines,
    bench_print_prefix,
    bench_render_formatted
);
criterion_main!(benches);
