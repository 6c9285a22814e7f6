//! Transaction limit settings
//!
//! Each limit is clamped into its own range. Daily limits are not checked
//! against the monthly limit.

use crate::mock_data;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    AtmDaily,
    PosDaily,
    OnlineDaily,
    Monthly,
}

impl LimitKind {
    pub const ALL: [LimitKind; 4] = [
        LimitKind::AtmDaily,
        LimitKind::PosDaily,
        LimitKind::OnlineDaily,
        LimitKind::Monthly,
    ];

    pub fn label(&self) -> &str {
        match self {
            LimitKind::AtmDaily => "ATM Withdrawal Limit",
            LimitKind::PosDaily => "POS Purchase Limit",
            LimitKind::OnlineDaily => "Online Transaction Limit",
            LimitKind::Monthly => "Total Monthly Limit",
        }
    }

    pub fn min(&self) -> u64 {
        match self {
            LimitKind::Monthly => 1_000_000,
            _ => 100_000,
        }
    }

    pub fn max(&self) -> u64 {
        match self {
            LimitKind::AtmDaily => 10_000_000,
            LimitKind::PosDaily => 50_000_000,
            LimitKind::OnlineDaily => 30_000_000,
            LimitKind::Monthly => 100_000_000,
        }
    }

    pub fn step(&self) -> u64 {
        match self {
            LimitKind::Monthly => 1_000_000,
            _ => 100_000,
        }
    }

    pub fn default_value(&self) -> u64 {
        match self {
            LimitKind::AtmDaily => 5_000_000,
            LimitKind::PosDaily => 20_000_000,
            LimitKind::OnlineDaily => 10_000_000,
            LimitKind::Monthly => 50_000_000,
        }
    }

    pub fn clamp(&self, value: u64) -> u64 {
        value.clamp(self.min(), self.max())
    }
}

/// Usage so far this month, per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyUsage {
    pub atm: u64,
    pub pos: u64,
    pub online: u64,
}

impl MonthlyUsage {
    pub fn total(&self) -> u64 {
        self.atm + self.pos + self.online
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLimits {
    atm_daily: u64,
    pos_daily: u64,
    online_daily: u64,
    monthly: u64,
    usage: MonthlyUsage,
}

impl Default for TransactionLimits {
    fn default() -> Self {
        Self {
            atm_daily: LimitKind::AtmDaily.default_value(),
            pos_daily: LimitKind::PosDaily.default_value(),
            online_daily: LimitKind::OnlineDaily.default_value(),
            monthly: LimitKind::Monthly.default_value(),
            usage: mock_data::monthly_usage(),
        }
    }
}

impl TransactionLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: LimitKind) -> u64 {
        match kind {
            LimitKind::AtmDaily => self.atm_daily,
            LimitKind::PosDaily => self.pos_daily,
            LimitKind::OnlineDaily => self.online_daily,
            LimitKind::Monthly => self.monthly,
        }
    }

    /// Store `value` clamped into the range of `kind`; returns the stored value
    pub fn set(&mut self, kind: LimitKind, value: u64) -> u64 {
        let value = kind.clamp(value);
        match kind {
            LimitKind::AtmDaily => self.atm_daily = value,
            LimitKind::PosDaily => self.pos_daily = value,
            LimitKind::OnlineDaily => self.online_daily = value,
            LimitKind::Monthly => self.monthly = value,
        }
        value
    }

    /// Parse digit input and store it; empty input falls back to the minimum
    pub fn set_from_input(&mut self, kind: LimitKind, input: &str) -> u64 {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        let value = digits.parse::<u64>().unwrap_or(u64::MAX);
        let value = if digits.is_empty() { kind.min() } else { value };
        self.set(kind, value)
    }

    pub fn increase(&mut self, kind: LimitKind) -> u64 {
        let value = self.get(kind).saturating_add(kind.step());
        self.set(kind, value)
    }

    pub fn decrease(&mut self, kind: LimitKind) -> u64 {
        let value = self.get(kind).saturating_sub(kind.step());
        self.set(kind, value)
    }

    pub fn usage(&self) -> MonthlyUsage {
        self.usage
    }

    /// Monthly limit minus usage; negative when usage exceeds the limit
    pub fn remaining(&self) -> i64 {
        self.monthly as i64 - self.usage.total() as i64
    }
}
