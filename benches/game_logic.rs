use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tambola::core::{ColumnPolicy, Session, TicketGenerator};
use tambola::types::TICKET_COUNT_MAX;

fn bench_generate_batch(c: &mut Criterion) {
    let generator = TicketGenerator::default();
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("generate_12_tickets", |b| {
        b.iter(|| generator.generate(black_box(TICKET_COUNT_MAX), &mut rng))
    });
}

fn bench_generate_covering(c: &mut Criterion) {
    let generator = TicketGenerator::new(ColumnPolicy::CoverEveryColumn);
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("generate_one_covering", |b| {
        b.iter(|| generator.generate_one(&mut rng))
    });
}

fn bench_draw_next(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.generate_tickets(TICKET_COUNT_MAX);
    session.start();

    c.bench_function("draw_next", |b| {
        b.iter(|| {
            if session.is_complete() {
                session.reset();
                session.start();
            }
            black_box(session.draw_next());
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.generate_tickets(TICKET_COUNT_MAX);

    c.bench_function("full_game_90_draws", |b| {
        b.iter(|| {
            session.reset();
            session.start();
            while session.draw_next().is_drawn() {}
        })
    });
}

criterion_group!(
    benches,
    bench_generate_batch,
    bench_generate_covering,
    bench_draw_next,
    bench_full_game
);
criterion_main!(benches);
