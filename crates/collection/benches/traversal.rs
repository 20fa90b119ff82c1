use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dom::{DomArena, DomNode, NodeId};
use live_collection::{Collection, Element, HtmlCollection};

/// Complete tree of `fanout^depth` leaves; every node gets an id
fn build(arena: &mut DomArena, parent: NodeId, depth: usize, fanout: usize, counter: &mut usize) {
    if depth == 0 {
        return;
    }
    for _ in 0..fanout {
        *counter += 1;
        let tag = if depth % 2 == 0 { "div" } else { "span" };
        let child = arena.add_node(DomNode::element(tag).with_attr("id", format!("n{}", counter)));
        arena.append_child(parent, child).unwrap();
        build(arena, child, depth - 1, fanout, counter);
    }
}

fn bench_traversal(c: &mut Criterion) {
    let mut arena = DomArena::with_capacity(8192);
    let root = arena.create_element("body");
    let mut counter = 0;
    build(&mut arena, root, 5, 6, &mut counter);
    let last = format!("n{}", counter);

    let all = Collection::<Element>::new(root);
    let spans = HtmlCollection::by_tag_name(root, "span");
    let children = HtmlCollection::children(root);

    c.bench_function("length/subtree", |b| b.iter(|| all.length(black_box(&arena))));
    c.bench_function("length/by_tag_name", |b| {
        b.iter(|| spans.length(black_box(&arena)))
    });
    c.bench_function("length/children", |b| {
        b.iter(|| children.length(black_box(&arena)))
    });
    c.bench_function("at/first", |b| b.iter(|| all.at(black_box(&arena), 0)));
    c.bench_function("named/last", |b| {
        b.iter(|| all.named(black_box(&arena), black_box(&last)))
    });
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
