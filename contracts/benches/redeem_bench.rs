// Redeem validation benchmarks.
//
// Measures accepted redeems over growing input sets with a handful of
// distinct issuers and holders, plus the cost of an early rejection.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ledger_contracts::verify_redeem;
use ledger_protocol::identity::TestIdentity;
use ledger_protocol::state::TokenRecord;
use ledger_protocol::transaction::{TokenCommand, TransactionBuilder, TransactionView};

fn identities(count: usize) -> Vec<TestIdentity> {
    (0..count)
        .map(|i| TestIdentity::new(&format!("Party {i}"), "London", "GB"))
        .collect()
}

fn redeem_view(inputs: usize, ids: &[TestIdentity]) -> TransactionView {
    let mut builder = TransactionBuilder::new();
    for i in 0..inputs {
        let issuer = &ids[i % ids.len()];
        let holder = &ids[(i + 1) % ids.len()];
        builder = builder.input(TokenRecord::new(
            issuer.party().clone(),
            holder.party().clone(),
            (i as i64) + 1,
        ));
    }
    builder
        .command(ids.iter().map(TestIdentity::public_key), TokenCommand::Redeem)
        .build()
}

fn bench_accepted_redeem(c: &mut Criterion) {
    let ids = identities(8);
    let mut group = c.benchmark_group("redeem/accept");

    for inputs in [1usize, 10, 100, 1_000] {
        let tx = redeem_view(inputs, &ids);
        group.throughput(Throughput::Elements(inputs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(inputs), &tx, |b, tx| {
            b.iter(|| verify_redeem(tx));
        });
    }

    group.finish();
}

fn bench_rejected_redeem(c: &mut Criterion) {
    let ids = identities(8);
    let mut tx = redeem_view(1_000, &ids);
    tx.commands[0].value = TokenCommand::Transfer;

    c.bench_function("redeem/reject_wrong_command", |b| {
        b.iter(|| verify_redeem(&tx));
    });
}

criterion_group!(benches, bench_accepted_redeem, bench_rejected_redeem);
criterion_main!(benches);
