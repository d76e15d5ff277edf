use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vanitysearch_pda::derive::{derive_address, encode_address, parse_base58_key, DEFAULT_PROGRAM_ID, TOKEN_MINT_NAMESPACE};
use vanitysearch_pda::SuffixPattern;

fn bench_derive(c: &mut Criterion) {
    let authority = [0u8; 32];
    let program_id = parse_base58_key(DEFAULT_PROGRAM_ID).unwrap();

    c.bench_function("derive_address", |b| {
        b.iter(|| {
            derive_address(
                TOKEN_MINT_NAMESPACE,
                black_box(&authority),
                &program_id,
                black_box(12345),
            )
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let authority = [0u8; 32];
    let program_id = parse_base58_key(DEFAULT_PROGRAM_ID).unwrap();
    let raw = derive_address(TOKEN_MINT_NAMESPACE, &authority, &program_id, 12345).unwrap();

    c.bench_function("encode_address", |b| {
        b.iter(|| encode_address(black_box(&raw)))
    });
}

fn bench_prefilter(c: &mut Criterion) {
    let authority = [0u8; 32];
    let program_id = parse_base58_key(DEFAULT_PROGRAM_ID).unwrap();
    let raw = derive_address(TOKEN_MINT_NAMESPACE, &authority, &program_id, 12345).unwrap();
    let pattern = SuffixPattern::new("bruv").unwrap();

    c.bench_function("suffix_prefilter", |b| {
        b.iter(|| pattern.matches_raw(black_box(&raw)))
    });
}

fn bench_full_match(c: &mut Criterion) {
    let authority = [0u8; 32];
    let program_id = parse_base58_key(DEFAULT_PROGRAM_ID).unwrap();
    let raw = derive_address(TOKEN_MINT_NAMESPACE, &authority, &program_id, 12345).unwrap();
    let address = encode_address(&raw);
    let pattern = SuffixPattern::new("bruv").unwrap();

    c.bench_function("suffix_full_match", |b| {
        b.iter(|| pattern.matches(black_box(&address)))
    });
}

criterion_group!(
    benches,
    bench_derive,
    bench_encode,
    bench_prefilter,
    bench_full_match,
);
criterion_main!(benches);
