use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use doi_metadata::{repo_path_to_uuid, Author, Reference};

fn bench_reference_urls(c: &mut Criterion) {
    let references: Vec<Reference> = [
        "DOI:10.12751/g-node.5b08du",
        "arXiv:2403.12345",
        "pmID:31415926",
        "uRl:https://gin.g-node.org/fabee/efish_locking",
        "you:dontKnowMe",
        "IamNotOK",
    ]
    .into_iter()
    .map(Reference::new)
    .collect();

    let mut group = c.benchmark_group("reference");
    group.throughput(Throughput::Elements(references.len() as u64));

    group.bench_function("get_url", |b| {
        b.iter(|| {
            for reference in &references {
                black_box(reference.get_url());
            }
        })
    });

    group.finish();
}

fn bench_render_author(c: &mut Criterion) {
    let authors = vec![
        Author::new("Doe", "Jane")
            .with_affiliation("LMU Munich")
            .with_id("ORCID:0000-0002-1825-0097"),
        Author::new("Roe", "Rob").with_affiliation("G-Node"),
        Author::new("Poe", "Pat"),
    ];

    c.bench_function("render_author", |b| {
        b.iter(|| {
            for author in &authors {
                black_box(author.render_author());
                black_box(author.valid_id());
            }
        })
    });
}

fn bench_repo_path_to_uuid(c: &mut Criterion) {
    c.bench_function("repo_path_to_uuid", |b| {
        b.iter(|| black_box(repo_path_to_uuid(black_box("fabee/efish_locking"))))
    });
}

criterion_group!(benches, bench_reference_urls, bench_render_author, bench_repo_path_to_uuid);
criterion_main!(benches);
