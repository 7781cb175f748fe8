pub mod destination;
pub mod metric_filter;
