//! Benchmarks for site map resolution and lookups.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docmap_site::{NavEntry, Sidebar, SidebarGroup, SiteConfig, SiteMap, resolve};

/// Create a site with nested sidebar sections of the given depth and breadth.
///
/// Every section gets one group of `breadth` pages, and one nav entry is added
/// per top-level section.
fn create_site(depth: usize, breadth: usize) -> SiteConfig {
    fn add_sections(sidebar: &mut Sidebar, prefix: &str, depth: usize, breadth: usize) {
        let items = (0..breadth)
            .map(|i| NavEntry::new(format!("Page {i}"), format!("{prefix}page-{i}")))
            .collect();
        sidebar.push(prefix, vec![SidebarGroup::new(prefix, items)]);

        if depth == 0 {
            return;
        }
        for i in 0..breadth {
            add_sections(sidebar, &format!("{prefix}topic-{i}/"), depth - 1, breadth);
        }
    }

    let mut sidebar = Sidebar::new();
    let mut nav = Vec::new();
    for i in 0..breadth {
        let prefix = format!("/course-{i}/");
        nav.push(NavEntry::new(format!("Course {i}"), prefix.clone()));
        add_sections(&mut sidebar, &prefix, depth, breadth);
    }

    let mut config = SiteConfig::default();
    config.theme_config.nav = nav;
    config.theme_config.sidebar = sidebar;
    config
}

fn resolved(depth: usize, breadth: usize) -> SiteMap {
    resolve(&create_site(depth, breadth)).unwrap()
}

fn bench_section_for(c: &mut Criterion) {
    let site_map = resolved(3, 5);

    let mut group = c.benchmark_group("section_for");

    group.bench_function("shallow_hit", |b| {
        b.iter(|| site_map.section_for("/course-0/page-1"))
    });

    group.bench_function("deep_hit", |b| {
        b.iter(|| site_map.section_for("/course-4/topic-4/topic-4/topic-4/page-4"))
    });

    group.bench_function("miss", |b| {
        b.iter(|| site_map.section_for("/nonexistent/path/to/page"))
    });

    group.finish();
}

fn bench_pager(c: &mut Criterion) {
    let site_map = resolved(3, 5);

    let mut group = c.benchmark_group("pager");

    group.bench_function("middle_item", |b| {
        b.iter(|| site_map.pager("/course-2/topic-1/page-2"))
    });

    group.bench_function("unlisted", |b| {
        b.iter(|| site_map.pager("/course-2/topic-1/unlisted"))
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for (depth, breadth) in [(1, 5), (2, 5), (3, 4)] {
        let config = create_site(depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("resolve", format!("d{depth}_b{breadth}")),
            &config,
            |b, config| b.iter(|| resolve(config)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_section_for, bench_pager, bench_resolve);
criterion_main!(benches);
