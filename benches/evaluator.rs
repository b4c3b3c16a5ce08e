criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(50)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_a_seven_card_hand,
        comparing_two_hands,
        estimating_flop_equity,
        bucketing_a_preflop_hand,
        bucketing_a_flop_hand,
}

use headsup_gto::abstraction::{postflop, preflop};
use headsup_gto::cards::card::Card;
use headsup_gto::cards::hole::Hole;
use headsup_gto::cards::strength::CombinedHand;
use headsup_gto::cards::street::Street;
use headsup_gto::equity::Estimator;

fn seven_cards() -> Vec<Card> {
    ["Ah", "Kh", "Qh", "Jh", "Th", "2c", "3d"].iter().map(|s| Card::parse(s).unwrap()).collect()
}

fn evaluating_a_seven_card_hand(c: &mut criterion::Criterion) {
    let cards = seven_cards();
    c.bench_function("evaluate a 7-card hand", |b| {
        b.iter(|| CombinedHand::from(cards.clone()))
    });
}

fn comparing_two_hands(c: &mut criterion::Criterion) {
    let a = CombinedHand::from(seven_cards());
    let b_cards: Vec<Card> = ["9s", "8s", "Ah", "Kh", "Qh", "Jh", "Th"].iter().map(|s| Card::parse(s).unwrap()).collect();
    let b = CombinedHand::from(b_cards);
    c.bench_function("compare two 7-card hands", |bench| {
        bench.iter(|| CombinedHand::winners(&[a.clone(), b.clone()]))
    });
}

fn estimating_flop_equity(c: &mut criterion::Criterion) {
    let mut estimator = Estimator::seeded(1);
    let board: Vec<Card> = ["2c", "7d", "9h"].iter().map(|s| Card::parse(s).unwrap()).collect();
    let hero = [Card::parse("Ah").unwrap(), Card::parse("Kh").unwrap()];
    c.bench_function("estimate flop equity (1000 trials)", |b| {
        b.iter(|| estimator.equity(hero, &board, 1000))
    });
}

fn bucketing_a_preflop_hand(c: &mut criterion::Criterion) {
    let hole = Hole::new(Card::parse("Ah").unwrap(), Card::parse("Kh").unwrap());
    c.bench_function("bucket a preflop hand", |b| {
        b.iter(|| preflop::cluster(hole))
    });
}

fn bucketing_a_flop_hand(c: &mut criterion::Criterion) {
    let mut estimator = Estimator::seeded(1);
    let board: Vec<Card> = ["2c", "7d", "9h"].iter().map(|s| Card::parse(s).unwrap()).collect();
    let hero = [Card::parse("Ah").unwrap(), Card::parse("Kh").unwrap()];
    c.bench_function("bucket a flop hand", |b| {
        b.iter(|| postflop::cluster(&mut estimator, hero, &board, Street::Flop))
    });
}
