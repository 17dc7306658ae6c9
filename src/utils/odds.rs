/// Convert American odds to decimal odds (total return per unit staked)
/// Positive odds (+150) return 1 + 150/100 = 2.5
/// Negative odds (-150) return 1 + 100/150 = 1.667
pub fn american_to_decimal(odds: f64) -> f64 {
    if odds > 0.0 {
        1.0 + odds / 100.0
    } else {
        1.0 + 100.0 / odds.abs()
    }
}

/// C(n, r) using the multiplicative formula, in floating point so large leg counts cannot overflow
pub fn combinations(n: u32, r: u32) -> f64 {
    if r > n {
        return 0.0;
    }
    let r = r.min(n - r);
    (0..r).fold(1.0, |acc, i| acc * f64::from(n - i) / f64::from(i + 1))
}

/// Number of parlays a round robin generates.
/// `at_most` counts every size from 2 up to `r`, otherwise only size `r`.
pub fn total_parlays(n: u32, r: u32, at_most: bool) -> f64 {
    parlay_sizes(r, at_most).map(|k| combinations(n, k)).sum()
}

fn parlay_sizes(r: u32, at_most: bool) -> std::ops::RangeInclusive<u32> {
    if at_most {
        2..=r
    } else {
        r..=r
    }
}

/// Sum of the products of every k-element subset of `values`, for k in `0..=max_k`.
///
/// `e[k]` is the k-th elementary symmetric polynomial, built one value at a time.
fn subset_product_sums(values: impl IntoIterator<Item = f64>, max_k: usize) -> Vec<f64> {
    let mut e = vec![0.0; max_k + 1];
    e[0] = 1.0;
    for value in values {
        for k in (1..=max_k).rev() {
            e[k] += e[k - 1] * value;
        }
    }
    e
}

/// Fair to-win of a single parlay: risk × (∏ decimal odds − 1)
pub fn parlay_fair_to_win(risk: f64, prices: &[f64]) -> f64 {
    let decimal: f64 = prices.iter().map(|&p| american_to_decimal(p)).product();
    risk * (decimal - 1.0)
}

/// Fair to-win of a round robin.
///
/// Every generated parlay risks `total_risk / total_parlays`, whether the
/// stake was quoted per selection or in total. Summing each parlay's
/// `risk × (∏ decimal − 1)` over all k-leg subsets collapses to
/// `risk × (e_k(decimal odds) − C(n, k))`.
pub fn round_robin_fair_to_win(total_risk: f64, prices: &[f64], parlay_size: u32, at_most: bool) -> f64 {
    let n = prices.len() as u32;
    let count = total_parlays(n, parlay_size, at_most);
    if count == 0.0 {
        return 0.0;
    }
    let per_parlay_risk = total_risk / count;

    let e = subset_product_sums(prices.iter().map(|&p| american_to_decimal(p)), parlay_size as usize);
    parlay_sizes(parlay_size, at_most)
        .map(|k| per_parlay_risk * (e[k as usize] - combinations(n, k)))
        .sum()
}
