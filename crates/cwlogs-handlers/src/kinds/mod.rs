pub mod destination;
pub mod metric_filter;

use cwlogs_client::config::MAX_PAGE_SIZE;

use crate::error::HandlerError;

fn check_length(field: &str, value: &str, max: usize) -> Result<(), HandlerError> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(HandlerError::InvalidRequest(format!(
            "{field} must be between 1 and {max} characters, got {len}"
        )));
    }
    Ok(())
}

fn clamp_page_size(page_size: i32) -> i32 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}
