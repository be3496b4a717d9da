use std::path::PathBuf;
use std::process::ExitCode;

use algokit::config::{DemoConfig, SearchCase};
use algokit::search::{all_matchers, KmpMatcher, Matcher};
use algokit::{topological_sort, FenwickTree, MaxHeap, PriorityQueue, Trie};
use colored::Colorize;
use rand::Rng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

// =============================================================================
// Substring search
// =============================================================================

/// Runs every matcher over one case. Returns false when a matcher disagrees
/// with the expected answer or with the others.
fn run_search_case(case: &SearchCase) -> bool {
    println!("\"{}\" in \"{}\"", case.pattern.cyan(), case.text);

    let mut answers = Vec::new();
    for matcher in all_matchers(&case.pattern) {
        let offset = matcher.find(&case.text);
        let shown = match offset {
            Some(at) => format!("match at {}", at).green(),
            None => "no match".yellow(),
        };
        println!("  {:<11} {}", matcher.name(), shown);
        answers.push(offset);
    }

    let agree = answers.windows(2).all(|pair| pair[0] == pair[1]);
    let found = answers.first().map_or(false, Option::is_some);
    let as_expected = case.expected.map_or(true, |expected| expected == found);

    if !agree {
        println!("  {}", "✗ matchers disagree".red().bold());
    } else if !as_expected {
        println!("  {}", "✗ unexpected result".red().bold());
    }

    agree && as_expected
}

fn print_failure_table(pattern: &str) {
    let matcher = KmpMatcher::new(pattern);
    if let Some(table) = matcher.failure_table() {
        println!("failure table for \"{}\": {:?}", pattern, table.as_slice());
    }
}

// =============================================================================
// Graph ordering
// =============================================================================

fn run_graph(config: &DemoConfig) -> bool {
    let graph = config.graph.to_graph();
    match topological_sort(&graph, &config.graph.start) {
        Ok(order) => {
            println!("order from \"{}\": {}", config.graph.start, order.join(" ").green());
            true
        }
        Err(err) => {
            error!("{}", err);
            false
        }
    }
}

// =============================================================================
// Data structures
// =============================================================================

fn run_structures() {
    let trie: Trie = ["Vitor", "Viagem", "Andrew", "Andrewx", "Liz"].into_iter().collect();
    for word in ["Andrew", "Audrew", "liz"] {
        println!("trie contains {:<8} {}", word, trie.search(word));
    }
    println!("trie words under \"Vi\": {:?}", trie.words_with_prefix("Vi"));

    let mut heap: PriorityQueue<i32, MaxHeap> =
        [1, 5, 1, 8, 6, 2, 2, 13, 12, 11, 7, 2, 15, 3, 10].into_iter().collect();
    println!("heap poll: {:?}", heap.pop());
    if let Err(err) = heap.remove(&42) {
        println!("heap remove 42: {}", err.to_string().yellow());
    }
    println!("heap layout: {:?}", heap.as_slice());

    let mut rng = rand::thread_rng();
    let values: Vec<i64> = (0..1_000).map(|_| rng.gen_range(0..=1_000)).collect();
    let fenwick = FenwickTree::from_slice(&values);
    let start = rng.gen_range(1..=500);
    let end = rng.gen_range(500..=1_000);
    let expected: i64 = values[start - 1..end].iter().sum();
    match fenwick.range_sum(start, end) {
        Ok(sum) if sum == expected => println!("fenwick sum {}..={} = {}", start, end, sum),
        Ok(sum) => println!("{}", format!("fenwick sum {} != {}", sum, expected).red()),
        Err(err) => error!("{}", err),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match DemoConfig::load(&path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => DemoConfig::default(),
    };

    println!("{}", "=== Substring search ===".bold());
    let mut ok = true;
    for case in &config.search {
        ok &= run_search_case(case);
    }
    if let Some(case) = config.search.first() {
        print_failure_table(&case.pattern);
    }

    println!("\n{}", "=== Graph ordering ===".bold());
    ok &= run_graph(&config);

    println!("\n{}", "=== Data structures ===".bold());
    run_structures();

    if ok {
        println!("\n{}", "✓ all checks passed".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
