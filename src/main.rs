// Halving Sum - precision demonstration
// Sums the largest odd divisors of 1..n by recursive halving, in f64,
// and shows where the f64 total stops being exact.

use std::time::Instant;

use halving_sum::{MAX_SAFE_INTEGER, compare, difference_check, sum_f64};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let start = Instant::now();
    let result = sum_f64(100000000.0);
    println!("{result:.0}");
    println!("time spent {} ms", start.elapsed().as_millis());

    // 10^8 still fits: the difference is exact
    println!(
        "{}",
        sum_f64(100000000.0 - 1.0) - sum_f64(100000000.0 - 2.0) == 100000000.0 - 1.0
    );

    println!("{MAX_SAFE_INTEGER:.0}");

    // 10^9 does not: prints 1000000000 instead of 999999999
    println!("{:.0}", sum_f64(1000000000.0 - 1.0) - sum_f64(1000000000.0 - 2.0));

    // Exact counterparts
    let cmp = compare(1000000000);
    println!("{}", cmp.exact);
    println!("{}", cmp.matches());
    if let Some(check) = difference_check(1000000000 - 1) {
        println!("{}", check.exact);
    }
}
