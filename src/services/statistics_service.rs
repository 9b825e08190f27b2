use crate::api::Summary;
use crate::models::StatisticsView;
use crate::utils::format_currency;

/// Overwrite the four figures from the summary
///
/// With no summary the panel is left untouched, stale values included.
pub fn update_statistics(statistics: &mut StatisticsView, summary: Option<&Summary>) {
    let Some(summary) = summary else {
        return;
    };
    let stats = &summary.total_stats;

    statistics.total_transactions = stats.total_transactions.to_string();
    statistics.total_amount = format_currency(stats.total_amount);
    statistics.average_amount = format_currency(stats.avg_amount);
    statistics.total_fees = format_currency(stats.total_fees);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::sample_summary;

    #[test]
    fn test_update_formats_figures() {
        let mut statistics = StatisticsView::default();
        update_statistics(&mut statistics, Some(&sample_summary()));

        assert_eq!(statistics.total_transactions, "2");
        assert_eq!(statistics.total_amount, "RF 3,000");
        assert_eq!(statistics.average_amount, "RF 1,500");
        assert_eq!(statistics.total_fees, "RF 200");
    }

    #[test]
    fn test_zero_summary_shows_zeroes() {
        let mut statistics = StatisticsView::default();
        update_statistics(&mut statistics, Some(&Summary::default()));

        assert_eq!(statistics.total_transactions, "0");
        assert_eq!(statistics.total_amount, "RF 0");
        assert_eq!(statistics.total_fees, "RF 0");
    }

    #[test]
    fn test_absent_summary_keeps_stale_values() {
        let mut statistics = StatisticsView::default();
        update_statistics(&mut statistics, Some(&sample_summary()));
        update_statistics(&mut statistics, None);

        assert_eq!(statistics.total_amount, "RF 3,000");
    }
}
