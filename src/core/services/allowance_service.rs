use super::{ServiceError, ServiceResult};

pub struct AllowanceService;

impl AllowanceService {
    /// Spreads `balance` evenly over `days`. Callers validate `days` first
    /// (see [`AllowanceService::parse_days`]).
    pub fn daily_allowance(balance: f64, days: u32) -> f64 {
        debug_assert!(days > 0, "days must be validated before dividing");
        balance / f64::from(days)
    }

    /// Validates user input for the number of days until the next payday.
    pub fn parse_days(raw: &str) -> ServiceResult<u32> {
        let trimmed = raw.trim();
        let leading: String = trimmed
            .chars()
            .enumerate()
            .take_while(|(idx, ch)| ch.is_ascii_digit() || (*idx == 0 && matches!(ch, '+' | '-')))
            .map(|(_, ch)| ch)
            .collect();
        match leading.parse::<i64>() {
            Ok(days) if days > 0 && days <= i64::from(u32::MAX) => Ok(days as u32),
            _ => Err(ServiceError::Invalid(format!(
                "`{}` is not a valid number of days",
                raw.trim()
            ))),
        }
    }
}
