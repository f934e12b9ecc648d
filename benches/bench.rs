use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wordbook::PrefixTrie;
use wordbook::spelling::levenshtein::{levenshtein_distance, levenshtein_distance_threshold};
use wordbook::spelling::suggest::rank_suggestions;

fn generate_words(count: usize) -> Vec<String> {
    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let mut word = String::new();
        let mut n = i;
        for _ in 0..6 {
            word.push((b'a' + (n % 26) as u8) as char);
            n = n / 26 + i % 7;
        }
        words.push(word);
    }
    words
}

fn bench_levenshtein(c: &mut Criterion) {
    let words = generate_words(1000);

    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("full_matrix_scan", |b| {
        b.iter(|| {
            for word in &words {
                let _ = black_box(levenshtein_distance(black_box("holiday"), black_box(word)));
            }
        })
    });

    group.bench_function("threshold_scan", |b| {
        b.iter(|| {
            for word in &words {
                let _ = black_box(levenshtein_distance_threshold(
                    black_box("holiday"),
                    black_box(word),
                    2,
                ));
            }
        })
    });

    group.bench_function("rank_suggestions", |b| {
        b.iter(|| {
            let _ = black_box(rank_suggestions(
                black_box("holiday"),
                words.iter().map(String::as_str),
                2,
            ));
        })
    });

    group.finish();
}

fn bench_trie(c: &mut Criterion) {
    let words = generate_words(1000);
    let mut trie = PrefixTrie::new();
    for word in &words {
        trie.insert(word);
    }

    let mut group = c.benchmark_group("trie");

    group.bench_function("insert_1000", |b| {
        b.iter(|| {
            let mut trie = PrefixTrie::new();
            for word in &words {
                trie.insert(black_box(word));
            }
            black_box(trie.len())
        })
    });

    group.bench_function("prefix_suggestions", |b| {
        b.iter(|| {
            let _ = black_box(trie.suggestions(black_box("ab"), 10));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_trie);
criterion_main!(benches);
