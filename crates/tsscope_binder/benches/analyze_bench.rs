use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsscope_ast::{SourceFile, Statement, SyntaxKind};
use tsscope_binder::{analyze, analyze_all, AnalyzeOptions};
use tsscope_nodebuilder::{NodeBuilder, VarKind};

// One chunk roughly mirrors a small module: a counter, a generic helper,
// a class with a method and an interface, all cross-referencing.
fn chunk<'a>(b: &NodeBuilder<'a>, i: usize) -> Vec<Statement<'a>> {
    let counter = format!("count{i}");
    let helper = format!("step{i}");
    let class = format!("Service{i}");
    let shape = format!("Shape{i}");

    vec![
        b.let_(b.binding(&counter), Some(b.num("0"))),
        b.function(
            b.ident(&helper),
            vec![b.param(b.binding("value"), Some(b.tref(&shape)), Some(b.id(&counter)))],
            vec![
                b.for_(
                    Some(b.for_decl(VarKind::Let, vec![b.declarator(b.binding("j"), None, Some(b.num("0")))])),
                    Some(b.binary(b.id("j"), SyntaxKind::LessThanToken, b.id("value"))),
                    Some(b.update(SyntaxKind::PlusPlusToken, false, b.id("j"))),
                    b.block(vec![b.expr_stmt(b.assign(b.id(&counter), b.binary(b.id(&counter), SyntaxKind::PlusToken, b.id("j"))))]),
                ),
                b.return_(Some(b.call(b.id("Math"), vec![b.id("arguments")]))),
            ],
        ),
        b.class(
            b.ident(&class),
            vec![],
            vec![b.method(
                b.prop_name("run"),
                vec![b.param(b.binding("input"), None, None)],
                vec![
                    b.const_(b.binding("result"), b.call(b.id(&helper), vec![b.id("input")])),
                    b.return_(Some(b.arrow(vec![], b.id("result")))),
                ],
            )],
        ),
        b.interface(b.ident(&shape), vec![], vec![], vec![]),
        b.expr_stmt(b.new_expr(b.id(&class), vec![])),
    ]
}

fn build_file<'a>(b: &NodeBuilder<'a>, chunks: usize) -> SourceFile<'a> {
    let statements = (0..chunks).flat_map(|i| chunk(b, i)).collect();
    b.source_file(statements)
}

fn bench_analyze_single(c: &mut Criterion) {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = build_file(&b, 200);
    let options = AnalyzeOptions::default();

    c.bench_function("analyze_single_200_chunks", |bench| {
        bench.iter(|| {
            let manager = analyze(black_box(&file), &options);
            black_box(manager)
        });
    });
}

fn bench_analyze_all(c: &mut Criterion) {
    let arenas: Vec<Bump> = (0..8).map(|_| Bump::new()).collect();
    let builders: Vec<NodeBuilder<'_>> = arenas.iter().map(NodeBuilder::new).collect();
    let files: Vec<SourceFile<'_>> = builders.iter().map(|b| build_file(b, 50)).collect();
    let refs: Vec<&SourceFile<'_>> = files.iter().collect();
    let options = AnalyzeOptions::module();

    c.bench_function("analyze_all_8_files", |bench| {
        bench.iter(|| black_box(analyze_all(black_box(&refs), &options)));
    });
}

criterion_group!(benches, bench_analyze_single, bench_analyze_all);
criterion_main!(benches);
