/// Best profit from a single buy followed by a later sell, 0 if none.
///
/// Profits are computed in `i64`, so any pair of `i32` prices fits.
pub fn max_profit(prices: &[i32]) -> i64 {
    let mut best = 0;
    let mut buy = 0;

    for sell in 1 .. prices.len() {
        let profit = prices[sell] as i64 - prices[buy] as i64;
        if profit > 0 {
            best = best.max(profit);
        } else {
            // Cheaper (or equal) day found, buy from here on.
            buy = sell;
        }
    }

    tracing::trace!(best, buy, "max profit");
    best
}
